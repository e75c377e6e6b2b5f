// Copyright (c) 2026 the trill-sketch authors

//! The closed set of Trill sensor shapes and the per-shape rules that
//! follow from the physical devices.
//!
//! A shape's name doubles as the device name (`bar`, `square`, `hex`,
//! `ring`), so parsing is case-insensitive and formatting is lowercase.
//! Unrecognized names are rejected outright; there is no catch-all
//! variant.

use crate::{
    types::{Dimensions, SensorError},
    util::MapUtils,
};
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

/// Which Trill device a [SensorShape](crate::sensor::SensorShape)
/// depicts. Each variant carries the geometry of its sensor outline and
/// the capacitive layout of the hardware it stands for.
#[derive(
    Clone,
    Copy,
    Debug,
    Default,
    Deserialize,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Eq,
    Hash,
    IntoStaticStr,
    PartialEq,
    Serialize,
)]
#[serde(rename_all = "kebab-case")]
#[strum(ascii_case_insensitive, serialize_all = "lowercase")]
pub enum ShapeType {
    /// The long thin slider; one-dimensional.
    #[default]
    Bar,
    /// The square touchpad; two-dimensional.
    Square,
    /// The hexagonal pad; two-dimensional.
    Hex,
    /// The circular loop; one-dimensional along its circumference.
    Ring,
}
impl ShapeType {
    /// Parses a device name, accepting any casing. Fails fast on
    /// anything outside the closed set.
    pub fn from_name(name: &str) -> Result<Self, SensorError> {
        name.parse()
            .map_err(|_| SensorError::UnknownShapeType(name.to_string()))
    }

    /// The lowercase device name.
    pub fn name(&self) -> &'static str {
        (*self).into()
    }

    /// The drawn outline for a given primary dimension. Width is always
    /// the length; height follows the device's aspect.
    pub fn dimensions_for(&self, length: f32) -> Dimensions {
        let height = match self {
            ShapeType::Bar => length / 5.0,
            // 0.866 ≈ √3/2: a regular hexagon is taller than it is wide.
            ShapeType::Hex => length / 0.866,
            ShapeType::Square | ShapeType::Ring => length,
        };
        Dimensions::new(length, height)
    }

    /// The corner rounding for a given width. Only the rectangular
    /// devices have rounded corners to draw.
    pub fn corner_radius_for(&self, width: f32) -> f32 {
        match self {
            ShapeType::Bar => 0.03 * width,
            ShapeType::Square => 0.02 * width,
            ShapeType::Hex | ShapeType::Ring => 0.0,
        }
    }

    /// Whether the device reports touches on two axes. One-dimensional
    /// devices report a single location along their length.
    pub fn is_two_dimensional(&self) -> bool {
        matches!(self, ShapeType::Square | ShapeType::Hex)
    }

    /// How many capacitive channels the device exposes in raw mode.
    pub fn num_pads(&self) -> usize {
        match self {
            ShapeType::Bar => 26,
            ShapeType::Ring => 28,
            ShapeType::Square | ShapeType::Hex => 30,
        }
    }

    /// How many pads lie along one reported axis. For the 2D devices the
    /// channels split across two axes; for the 1D devices every pad is on
    /// the single axis.
    pub fn pads_per_axis(&self) -> usize {
        match self {
            ShapeType::Bar => 26,
            ShapeType::Ring => 28,
            ShapeType::Square | ShapeType::Hex => 15,
        }
    }

    /// The largest raw centroid location the device reports on one axis.
    /// The firmware interpolates at 128 steps between adjacent pads, so
    /// the range ends at `(pads_per_axis - 1) × 128`: 3200 on a bar, 1792
    /// per axis on a square.
    pub fn raw_location_max(&self) -> f32 {
        ((self.pads_per_axis() - 1) * 128) as f32
    }

    /// Maps a raw axis location into [0, 1], clamping readings that land
    /// outside the device's range.
    pub fn normalize_location(&self, raw: f32) -> f32 {
        MapUtils::map(raw, 0.0, self.raw_location_max(), 0.0, 1.0).clamp(0.0, 1.0)
    }
}

// Copyright (c) 2026 the trill-sketch authors

//! Fixed-size geometric value types.
//!
//! Positions and touch locations are always coordinates in 2D space. We
//! model them as a two-field value type rather than a variable-length
//! sequence, so "exactly two elements" is a property of the type instead
//! of a runtime check. The only place the check still happens at runtime
//! is [Point::try_from] on a slice, for callers holding reading buffers
//! whose length the compiler can't see.

use crate::types::SensorError;
use core::ops::Mul;
use derive_more::{Add, Display, Sub};
use serde::{Deserialize, Serialize};

/// A location on the sketch's drawing surface, or a normalized touch
/// location on the sensor. Which one is a matter of convention between
/// the model and the render loop; the type doesn't care.
#[derive(
    Add, Clone, Copy, Debug, Default, Display, PartialEq, PartialOrd, Serialize, Deserialize, Sub,
)]
#[display(fmt = "({}, {})", _0, _1)]
pub struct Point(pub f32, pub f32);
impl Point {
    /// The top-left of a conventional sketch surface.
    pub const ORIGIN: Point = Point(0.0, 0.0);

    /// Creates a new [Point] from x and y coordinates.
    pub const fn new(x: f32, y: f32) -> Self {
        Self(x, y)
    }

    /// The horizontal coordinate.
    pub const fn x(&self) -> f32 {
        self.0
    }

    /// The vertical coordinate.
    pub const fn y(&self) -> f32 {
        self.1
    }
}
impl From<(f32, f32)> for Point {
    fn from(value: (f32, f32)) -> Self {
        Self(value.0, value.1)
    }
}
impl From<[f32; 2]> for Point {
    fn from(value: [f32; 2]) -> Self {
        Self(value[0], value[1])
    }
}
impl From<Point> for [f32; 2] {
    fn from(value: Point) -> Self {
        [value.0, value.1]
    }
}
impl From<Point> for (f32, f32) {
    fn from(value: Point) -> Self {
        (value.0, value.1)
    }
}
impl TryFrom<&[f32]> for Point {
    type Error = SensorError;

    fn try_from(value: &[f32]) -> Result<Self, Self::Error> {
        match value {
            [x, y] => Ok(Self(*x, *y)),
            _ => Err(SensorError::NotACoordinatePair(value.len())),
        }
    }
}
impl Mul<f32> for Point {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self(self.0 * rhs, self.1 * rhs)
    }
}

/// A width/height pair, in sketch units.
#[derive(Clone, Copy, Debug, Default, Display, PartialEq, PartialOrd, Serialize, Deserialize)]
#[display(fmt = "{}×{}", _0, _1)]
pub struct Dimensions(pub f32, pub f32);
impl Dimensions {
    /// A degenerate zero-area extent.
    pub const ZERO: Dimensions = Dimensions(0.0, 0.0);

    /// Creates a new [Dimensions] from width and height.
    pub const fn new(width: f32, height: f32) -> Self {
        Self(width, height)
    }

    /// The horizontal extent.
    pub const fn width(&self) -> f32 {
        self.0
    }

    /// The vertical extent.
    pub const fn height(&self) -> f32 {
        self.1
    }
}
impl From<(f32, f32)> for Dimensions {
    fn from(value: (f32, f32)) -> Self {
        Self(value.0, value.1)
    }
}
impl From<Dimensions> for (f32, f32) {
    fn from(value: Dimensions) -> Self {
        (value.0, value.1)
    }
}

// Copyright (c) 2026 the trill-sketch authors

//! Value types shared across the sensor model.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{Dimensions, Point, Rgba, SensorError, ShapeType};
}

pub use {
    colors::Rgba,
    error::SensorError,
    geometry::{Dimensions, Point},
    shape::ShapeType,
};

mod colors;
mod error;
mod geometry;
mod shape;

// Copyright (c) 2026 the trill-sketch authors

//! Sensors and the touches they track.

/// The most commonly used imports.
pub mod prelude {
    pub use super::{CompoundTouch, SensorShape, SensorShapeBuilder, TouchList, TouchPoint};
}

pub use {
    shape::{SensorShape, SensorShapeBuilder, SensorShapeBuilderError},
    touch::{CompoundTouch, TouchList, TouchPoint},
};

mod shape;
mod touch;

// Copyright (c) 2026 the trill-sketch authors

//! The ways the sensor model can refuse bad input.

use thiserror::Error;

/// Everything here is synchronous and immediate: an operation either
/// applies, or it returns one of these and leaves the model untouched.
/// Out-of-range sizes and scales are not errors; they are clamped or
/// ignored per the method contracts in [crate::sensor].
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SensorError {
    /// A shape-type name didn't match any known Trill device.
    #[error("unknown Trill shape type `{0}`")]
    UnknownShapeType(String),

    /// A coordinate slice didn't hold exactly two values.
    #[error("coordinates must be a pair in 2D space, got {0} value(s)")]
    NotACoordinatePair(usize),

    /// A touch index pointed past the end of the roster. Indexes may
    /// address an existing touch or the next free slot, nothing beyond.
    #[error("touch index {index} is out of range for {len} touch(es)")]
    TouchIndexOutOfRange {
        /// The index the caller asked for.
        index: usize,
        /// How many touches the roster held at the time.
        len: usize,
    },

    /// A sensor id was already taken by another sensor in the sketch.
    #[error("duplicate sensor id `{0}`")]
    DuplicateSensorId(String),
}

// Copyright (c) 2026 the trill-sketch authors

//! System utilities.

/// Commonly used imports.
pub mod prelude {
    pub use super::{
        map::MapUtils,
        settings::{SensorId, SensorSettings, SketchSettings},
    };
}

pub use map::MapUtils;
pub use settings::{SensorId, SensorSettings, SketchSettings};

mod map;
mod settings;

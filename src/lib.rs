// Copyright (c) 2026 the trill-sketch authors

#![deny(missing_docs, unused_imports, unused_variables)]
#![allow(rustdoc::private_intra_doc_links)]

//! Trill-sketch models Bela Trill capacitive touch sensors for
//! sketch-style drawing environments. It owns the data and the rules
//! (shapes, touches, colors, geometry) and leaves pixels and I/O to the
//! host.
//!
//! There are several ways to put it to work, depending on how much of
//! the plumbing you want to own.
//!
//! * *Easiest, but least control*: Describe sensors in a
//! [SketchSettings](util::SketchSettings) file, call
//! [shapes()](util::SketchSettings::shapes), and feed each frame's touch
//! readings to [SensorShape::update_touch()](SensorShape::update_touch).
//! * *For more control over the frame loop*: Build [SensorShape]s
//! directly with [SensorShapeBuilder](sensor::SensorShapeBuilder), and
//! use [CentroidScanner](centroid::CentroidScanner) to turn raw
//! capacitance frames into touch locations yourself.
//! * *Maximum control, fewest batteries included*: Use the bare
//! [TouchPoint](sensor::TouchPoint) and [ShapeType](types::ShapeType)
//! value types and keep your own rosters.

/// A collection of imports that are useful to users of this crate. `use
/// trill_sketch::prelude::*;` for easier onboarding.
pub mod prelude {
    pub use super::{
        centroid::{Centroid, CentroidScanner},
        sensor::prelude::*,
        traits::prelude::*,
        types::prelude::*,
        util::prelude::*,
    };
}

// Fundamental structures that are important enough to re-export at top level.
pub use sensor::SensorShape;

pub mod centroid;
pub mod sensor;
pub mod traits;
pub mod types;
pub mod util;

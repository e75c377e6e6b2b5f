// Copyright (c) 2026 the trill-sketch authors

//! Touch extraction from raw capacitance frames.
//!
//! A frame is one reading per pad, in pad order. The scanner walks the
//! frame once, groups contiguous activity into blobs, and reports each
//! blob as a weighted-average location plus its total capacitance. This
//! is the same single-pass split rule the sensor firmware applies, so
//! synthetic frames pushed through it land where the hardware would put
//! them.

use crate::types::Point;
use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// Capacitance units between adjacent pad centers in the sensor's native
/// location scale.
const PAD_PITCH: f32 = 128.0;

/// One detected blob of touch activity.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Centroid {
    /// Weighted average pad position, 1-based: a touch centered on the
    /// first pad reads 1.0, on the last pad `num_pads`.
    pub location: f32,
    /// Total capacitance the blob carried; a proxy for touch pressure.
    pub size: f32,
}
impl Centroid {
    /// This blob's location in the sensor's native units of 128 per pad,
    /// zero at the first pad center. This is the scale
    /// [ShapeType::normalize_location](crate::types::ShapeType::normalize_location)
    /// expects.
    pub fn raw_location(&self) -> f32 {
        (self.location - 1.0) * PAD_PITCH
    }
}

/// Splits a raw frame into up to `max_touches` [Centroid]s.
///
/// A new blob begins when the scan has already seen a fall of more than
/// `trough_threshold` below the running peak and the current pad reads
/// more than `rise_threshold` above its neighbor. The pad that triggers
/// the split is banked with the blob it ended, not the one it begins;
/// that is how the firmware does it, and keeping the quirk keeps
/// synthetic frames comparable with captured ones.
#[derive(Clone, Copy, Debug, Derivative, PartialEq, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(rename_all = "kebab-case")]
pub struct CentroidScanner {
    /// How far a reading must fall below the running peak before the
    /// blob is considered over.
    #[derivative(Default(value = "400"))]
    trough_threshold: i32,
    /// How far a reading must rise above its neighbor to start the next
    /// blob.
    #[derivative(Default(value = "100"))]
    rise_threshold: i32,
    /// Most blobs reported per frame; the scan stops once it has them.
    #[derivative(Default(value = "3"))]
    max_touches: usize,
}
impl CentroidScanner {
    /// Creates a scanner with explicit thresholds.
    pub fn new_with(trough_threshold: i32, rise_threshold: i32, max_touches: usize) -> Self {
        Self {
            trough_threshold,
            rise_threshold,
            max_touches,
        }
    }

    /// Scans one frame of per-pad readings into centroids, in pad order.
    pub fn scan(&self, raw: &[i32]) -> Vec<Centroid> {
        let mut centroids = Vec::with_capacity(self.max_touches);
        let mut peak = 0i32;
        let mut trough_depth = 0i32;
        let mut weighted = 0.0f32;
        let mut unweighted = 0.0f32;

        for (j, &value) in raw.iter().enumerate() {
            unweighted += value as f32;
            weighted += value as f32 * (j + 1) as f32;
            if value > peak {
                peak = value;
            }
            if peak - value > trough_depth {
                trough_depth = peak - value;
            }
            if j > 1
                && trough_depth > self.trough_threshold
                && value - raw[j - 1] > self.rise_threshold
            {
                centroids.push(Centroid {
                    location: weighted / unweighted,
                    size: unweighted,
                });
                weighted = 0.0;
                unweighted = 0.0;
                peak = 0;
                trough_depth = 0;
                if centroids.len() >= self.max_touches {
                    break;
                }
            }
        }
        if centroids.len() < self.max_touches && unweighted != 0.0 {
            centroids.push(Centroid {
                location: weighted / unweighted,
                size: unweighted,
            });
        }
        centroids
    }

    /// Scans a two-axis frame, vertical pads first, into paired
    /// locations. The pairing is positional: the nth horizontal blob goes
    /// with the nth vertical blob, which is all the hardware itself can
    /// promise.
    pub fn scan_grid(&self, vertical: &[i32], horizontal: &[i32]) -> Vec<(Point, f32)> {
        let columns = self.scan(horizontal);
        self.scan(vertical)
            .iter()
            .zip(columns.iter())
            .map(|(v, h)| {
                (
                    Point::new(h.raw_location(), v.raw_location()),
                    v.size.min(h.size),
                )
            })
            .collect()
    }
}
#[allow(missing_docs)]
impl CentroidScanner {
    pub fn trough_threshold(&self) -> i32 {
        self.trough_threshold
    }

    pub fn rise_threshold(&self) -> i32 {
        self.rise_threshold
    }

    pub fn max_touches(&self) -> usize {
        self.max_touches
    }
}

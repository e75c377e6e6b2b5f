// Copyright (c) 2026 the trill-sketch authors

use core::ops::RangeInclusive;

/// Provides linear-mapping utility functionality, the counterpart of a
/// sketch environment's `map()`.
pub struct MapUtils {}
impl MapUtils {
    /// Re-maps `value` from one range to another. Extrapolates rather
    /// than clamps when `value` lies outside the input range; callers
    /// that want a hard edge should clamp the result. The input range
    /// must have nonzero span.
    pub fn map(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
        out_min + (out_max - out_min) * ((value - in_min) / (in_max - in_min))
    }

    /// Range form of [map](MapUtils::map), which reads better when the
    /// ranges are named constants.
    pub fn map_range(
        value: f32,
        input: RangeInclusive<f32>,
        output: RangeInclusive<f32>,
    ) -> f32 {
        Self::map(value, *input.start(), *input.end(), *output.start(), *output.end())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_linearly() {
        assert_eq!(MapUtils::map(0.5, 0.0, 1.0, 0.0, 100.0), 50.0);
        assert_eq!(MapUtils::map(1600.0, 0.0, 3200.0, 0.0, 1.0), 0.5);
        assert_eq!(MapUtils::map(5.0, 0.0, 10.0, 10.0, 0.0), 5.0);
    }

    #[test]
    fn inverted_output_ranges_work() {
        assert_eq!(MapUtils::map(0.0, 0.0, 1.0, 100.0, 0.0), 100.0);
        assert_eq!(MapUtils::map(1.0, 0.0, 1.0, 100.0, 0.0), 0.0);
    }

    #[test]
    fn extrapolates_outside_the_input_range() {
        assert_eq!(MapUtils::map(2.0, 0.0, 1.0, 0.0, 10.0), 20.0);
        assert_eq!(MapUtils::map(-1.0, 0.0, 1.0, 0.0, 10.0), -10.0);
    }

    #[test]
    fn range_form_matches() {
        assert_eq!(
            MapUtils::map_range(1600.0, 0.0..=3200.0, 0.0..=1.0),
            MapUtils::map(1600.0, 0.0, 3200.0, 0.0, 1.0)
        );
    }
}

// Copyright (c) 2026 the trill-sketch authors

//! One tracked touch and the roster a sensor keeps them in.

use crate::types::{Point, Rgba, SensorError};
use derivative::Derivative;
use serde::{Deserialize, Serialize};

/// A single touch on a sensor: where it is, how hard it presses, and how
/// the sketch should paint it.
///
/// A touch starts inactive and becomes active on its first [update](
/// TouchPoint::update). Size is clamped into [0, 1] on update but stored
/// as given at construction; the host that constructs touches directly is
/// trusted, the per-frame reading path is not.
#[derive(Clone, Copy, Debug, Derivative, PartialEq, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(rename_all = "kebab-case")]
pub struct TouchPoint {
    /// Drawing scale relative to the sensor outline.
    #[derivative(Default(value = "0.25"))]
    scale: f32,
    /// Display color.
    #[derivative(Default(value = "Rgba::AMBER"))]
    color: Rgba,
    /// Pressure, normalized into [0, 1] once updated.
    size: f32,
    /// Normalized location on the sensor.
    location: Point,
    /// Whether the touch has been reported this session.
    active: bool,
}
impl TouchPoint {
    /// Creates an inactive touch with the given visual parameters. Scale
    /// and size are stored as given; only [update](TouchPoint::update)
    /// clamps.
    pub fn new_with(scale: f32, color: Rgba, size: f32, location: Point) -> Self {
        Self {
            scale,
            color,
            size,
            location,
            active: false,
        }
    }

    /// Registers a fresh reading: marks the touch active, moves it, and
    /// clamps the reported size into [0, 1].
    pub fn update(&mut self, location: Point, size: f32) {
        self.active = true;
        self.set_location(location);
        self.size = size.clamp(0.0, 1.0);
    }

    /// Moves the touch.
    pub fn set_location(&mut self, location: Point) {
        self.location = location;
    }

    /// Repaints the touch.
    pub fn set_color(&mut self, color: Rgba) {
        self.color = color;
    }

    /// Adjusts the drawing scale. Values above 1.0 are silently ignored
    /// rather than rejected: a stray oversized request leaves the last
    /// good scale in place.
    pub fn set_scale(&mut self, scale: f32) {
        if scale <= 1.0 {
            self.scale = scale;
        }
    }

    /// Marks the touch inactive, leaving its last location and size for
    /// anything that wants to draw a fading ghost.
    pub fn deactivate(&mut self) {
        self.active = false;
    }

    /// Whether the touch is currently reported by the sensor.
    pub fn is_active(&self) -> bool {
        self.active
    }
}
#[allow(missing_docs)]
impl TouchPoint {
    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn color(&self) -> Rgba {
        self.color
    }

    pub fn size(&self) -> f32 {
        self.size
    }

    pub fn location(&self) -> Point {
        self.location
    }
}

/// The blend of every active touch on a sensor: their average location
/// and size. The 2D sketches draw this as a single cursor instead of
/// individual touches.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CompoundTouch {
    /// Average location of the active touches.
    pub location: Point,
    /// Average size of the active touches.
    pub size: f32,
    /// How many active touches went into the average.
    pub count: usize,
}

/// A sensor's touches in first-report order.
///
/// The roster accepts updates addressed by slot index: an index inside
/// the roster updates that touch, the next free index appends, and
/// anything further out is refused. That mirrors how the hardware reports
/// touches as a compact prefix of slots each frame.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct TouchList {
    touches: Vec<TouchPoint>,
}
impl TouchList {
    /// Applies a reading to the touch at `index`, or appends `seed` (with
    /// the reading applied) when `index` is the next free slot.
    pub fn update(
        &mut self,
        index: usize,
        location: Point,
        size: f32,
        seed: TouchPoint,
    ) -> Result<(), SensorError> {
        if index < self.touches.len() {
            self.touches[index].update(location, size);
            Ok(())
        } else if index == self.touches.len() {
            let mut touch = seed;
            touch.update(location, size);
            self.touches.push(touch);
            Ok(())
        } else {
            Err(SensorError::TouchIndexOutOfRange {
                index,
                len: self.touches.len(),
            })
        }
    }

    /// How many touches have ever been registered.
    pub fn len(&self) -> usize {
        self.touches.len()
    }

    /// Whether no touch has been registered yet.
    pub fn is_empty(&self) -> bool {
        self.touches.is_empty()
    }

    /// The touch at `index`, if one has been registered there.
    pub fn get(&self, index: usize) -> Option<&TouchPoint> {
        self.touches.get(index)
    }

    /// Mutable access to the touch at `index`.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut TouchPoint> {
        self.touches.get_mut(index)
    }

    /// All touches, registered order, active or not.
    pub fn as_slice(&self) -> &[TouchPoint] {
        &self.touches
    }

    /// Iterates over all touches in registered order.
    pub fn iter(&self) -> impl Iterator<Item = &TouchPoint> {
        self.touches.iter()
    }

    /// How many touches are currently active.
    pub fn active_count(&self) -> usize {
        self.touches.iter().filter(|t| t.is_active()).count()
    }

    /// Marks every touch from `first` onward inactive. Call this when a
    /// frame reports fewer touches than the last one did.
    pub fn deactivate_from(&mut self, first: usize) {
        for touch in self.touches.iter_mut().skip(first) {
            touch.deactivate();
        }
    }

    /// Averages the active touches into one [CompoundTouch], or `None`
    /// when nothing is pressing.
    pub fn compound(&self) -> Option<CompoundTouch> {
        let count = self.active_count();
        if count == 0 {
            return None;
        }
        let (location, size) = self
            .touches
            .iter()
            .filter(|t| t.is_active())
            .fold((Point::ORIGIN, 0.0f32), |(loc, size), t| {
                (loc + t.location(), size + t.size())
            });
        let factor = 1.0 / count as f32;
        Some(CompoundTouch {
            location: location * factor,
            size: size * factor,
            count,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use more_asserts::{assert_ge, assert_le};

    #[test]
    fn update_clamps_size_idempotently() {
        let mut touch = TouchPoint::default();
        touch.update(Point::new(0.5, 0.0), 1.5);
        assert_eq!(touch.size(), 1.0);
        touch.update(Point::new(0.5, 0.0), 1.5);
        assert_eq!(touch.size(), 1.0, "repeated clamping should not drift");
        touch.update(Point::new(0.5, 0.0), -0.2);
        assert_eq!(touch.size(), 0.0);
        touch.update(Point::new(0.5, 0.0), 0.7);
        assert_le!(touch.size(), 1.0);
        assert_ge!(touch.size(), 0.0);
    }

    #[test]
    fn construction_stores_values_as_given() {
        // Only update() clamps; the constructor is trusted.
        let touch = TouchPoint::new_with(3.0, Rgba::AMBER, 1.5, Point::new(0.1, 0.2));
        assert_eq!(touch.scale(), 3.0);
        assert_eq!(touch.size(), 1.5);
        assert!(!touch.is_active());
    }

    #[test]
    fn scale_ignores_oversized_requests() {
        let mut touch = TouchPoint::default();
        assert_eq!(touch.scale(), 0.25);
        touch.set_scale(1.5);
        assert_eq!(touch.scale(), 0.25);
        touch.set_scale(0.5);
        assert_eq!(touch.scale(), 0.5);
        touch.set_scale(1.0);
        assert_eq!(touch.scale(), 1.0);
        // There is no lower bound; the guard is one-sided.
        touch.set_scale(-2.0);
        assert_eq!(touch.scale(), -2.0);
    }

    #[test]
    fn color_replaces_unconditionally() {
        let mut touch = TouchPoint::default();
        assert_eq!(touch.color(), Rgba::AMBER);
        touch.set_color(Rgba::CYAN);
        assert_eq!(touch.color(), Rgba::CYAN);
        touch.set_color(Rgba::BLACK);
        assert_eq!(touch.color(), Rgba::BLACK);
    }

    #[test]
    fn active_lifecycle() {
        let mut touch = TouchPoint::default();
        assert!(!touch.is_active());
        touch.update(Point::ORIGIN, 0.5);
        assert!(touch.is_active());
        touch.deactivate();
        assert!(!touch.is_active());
        assert_eq!(
            touch.size(),
            0.5,
            "deactivation should keep the last reading"
        );
    }

    #[test]
    fn roster_updates_appends_or_refuses() {
        let mut roster = TouchList::default();
        let seed = TouchPoint::new_with(0.4, Rgba::RED, 0.0, Point::ORIGIN);

        assert!(roster.update(0, Point::new(0.5, 0.0), 0.3, seed).is_ok());
        assert_eq!(roster.len(), 1);
        assert_eq!(roster.get(0).unwrap().color(), Rgba::RED);

        assert!(roster.update(0, Point::new(0.6, 0.0), 0.4, seed).is_ok());
        assert_eq!(roster.len(), 1, "updating in place should not append");
        assert_eq!(roster.get(0).unwrap().size(), 0.4);

        assert_eq!(
            roster.update(2, Point::ORIGIN, 0.1, seed),
            Err(SensorError::TouchIndexOutOfRange { index: 2, len: 1 })
        );
        assert_eq!(roster.len(), 1, "a refused update should change nothing");
    }

    #[test]
    fn deactivation_clears_the_tail() {
        let mut roster = TouchList::default();
        let seed = TouchPoint::default();
        for i in 0..3 {
            roster
                .update(i, Point::new(i as f32 * 0.1, 0.0), 0.5, seed)
                .unwrap();
        }
        assert_eq!(roster.active_count(), 3);

        roster.deactivate_from(1);
        assert_eq!(roster.active_count(), 1);
        assert!(roster.get(0).unwrap().is_active());

        // Past-the-end starts are fine; there is just nothing to do.
        roster.deactivate_from(10);
        assert_eq!(roster.active_count(), 1);
    }

    #[test]
    fn compound_touch_averages_only_active() {
        let mut roster = TouchList::default();
        let seed = TouchPoint::default();
        roster.update(0, Point::new(0.2, 0.4), 0.4, seed).unwrap();
        roster.update(1, Point::new(0.6, 0.8), 0.8, seed).unwrap();
        roster.update(2, Point::new(1.0, 1.0), 1.0, seed).unwrap();
        roster.deactivate_from(2);

        let compound = roster.compound().unwrap();
        assert_eq!(compound.count, 2);
        assert_eq!(compound.location, Point::new(0.4, 0.6));
        assert_eq!(compound.size, 0.6);

        roster.deactivate_from(0);
        assert!(roster.compound().is_none());
    }
}

// Copyright (c) 2026 the trill-sketch authors

//! The on-screen stand-in for one Trill sensor.

use crate::{
    sensor::{CompoundTouch, TouchList, TouchPoint},
    traits::Serializable,
    types::{Dimensions, Point, Rgba, SensorError, ShapeType},
};
use delegate::delegate;
use derivative::Derivative;
use derive_builder::Builder;
use serde::{Deserialize, Serialize};

/// Runtime state that is derived or accumulated, never persisted.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SensorShapeEphemerals {
    /// Outline size, derived from the shape type and length.
    dimensions: Dimensions,
    /// Outline corner rounding, derived from the shape type and width.
    corner_radius: f32,
    /// The touches currently tracked on this sensor.
    touches: TouchList,
}

/// One Trill sensor as the sketch draws it: a typed outline at a position,
/// plus the touches the hardware has reported onto it.
///
/// Only the shape type, length, position, and visual parameters are
/// persistent. The outline dimensions and corner radius are derived from
/// them, so [resize](SensorShape::resize) and
/// [after_deser](Serializable::after_deser) recompute rather than store.
#[derive(Clone, Debug, Builder, Derivative, PartialEq, Serialize, Deserialize)]
#[derivative(Default)]
#[builder(default, build_fn(private, name = "build_from_builder"))]
#[serde(rename_all = "kebab-case")]
pub struct SensorShape {
    /// Which Trill device this shape stands for.
    shape_type: ShapeType,

    /// Outline width in pixels. Height follows from the shape type.
    #[derivative(Default(value = "100.0"))]
    length: f32,

    /// Where the outline's anchor sits in the sketch.
    position: Point,

    /// Drawing scale handed to touches registered on this sensor.
    #[derivative(Default(value = "0.4"))]
    touch_scale: f32,

    /// Fill color for the outline.
    sensor_color: Rgba,

    #[serde(skip)]
    #[builder(setter(skip))]
    e: SensorShapeEphemerals,
}
impl SensorShapeBuilder {
    /// The overridden [SensorShapeBuilder] build() method. Derives the
    /// outline geometry after the persistent fields are in place.
    pub fn build(&self) -> Result<SensorShape, SensorShapeBuilderError> {
        match self.build_from_builder() {
            Ok(mut s) => {
                s.after_deser();
                Ok(s)
            }
            Err(e) => Err(e),
        }
    }
}
impl Serializable for SensorShape {
    fn after_deser(&mut self) {
        self.derive_geometry();
    }
}
impl SensorShape {
    /// Creates a sensor of the given type and size at a position, with
    /// the given scale for its touches.
    pub fn new_with(shape_type: ShapeType, length: f32, position: Point, touch_scale: f32) -> Self {
        let mut r = Self {
            shape_type,
            length,
            position,
            touch_scale,
            ..Default::default()
        };
        r.derive_geometry();
        r
    }

    /// Changes the outline width and recomputes everything that follows
    /// from it, using the sizing rule of this sensor's type.
    pub fn resize(&mut self, length: f32) {
        self.length = length;
        self.derive_geometry();
    }

    /// Moves the outline's anchor.
    pub fn set_position(&mut self, position: Point) {
        self.position = position;
    }

    /// Changes the scale handed to touches registered from now on.
    /// Already-registered touches keep theirs.
    pub fn set_touch_scale(&mut self, touch_scale: f32) {
        self.touch_scale = touch_scale;
    }

    /// Repaints the outline.
    pub fn set_sensor_color(&mut self, sensor_color: Rgba) {
        self.sensor_color = sensor_color;
    }

    /// Routes one reported touch into the roster. An index inside the
    /// roster updates in place; the next free index registers a new touch
    /// painted with this sensor's scale and the next palette color; a
    /// farther index is refused.
    pub fn update_touch(
        &mut self,
        index: usize,
        location: Point,
        size: f32,
    ) -> Result<(), SensorError> {
        let seed =
            TouchPoint::new_with(self.touch_scale, Rgba::for_touch(index), 0.0, Point::ORIGIN);
        self.e.touches.update(index, location, size, seed)
    }

    delegate! {
        to self.e.touches {
            /// How many touches have been registered on this sensor.
            #[call(len)]
            pub fn touch_count(&self) -> usize;
            /// The touch at `index`, if registered.
            #[call(get)]
            pub fn touch(&self, index: usize) -> Option<&TouchPoint>;
            /// Mutable access to the touch at `index`.
            #[call(get_mut)]
            pub fn touch_mut(&mut self, index: usize) -> Option<&mut TouchPoint>;
            /// All registered touches in first-report order.
            #[call(as_slice)]
            pub fn touches(&self) -> &[TouchPoint];
            /// How many touches are active right now.
            #[call(active_count)]
            pub fn active_touch_count(&self) -> usize;
            /// Marks every touch from `first` onward inactive.
            #[call(deactivate_from)]
            pub fn deactivate_touches_from(&mut self, first: usize);
            /// The active touches blended into one, if any are active.
            #[call(compound)]
            pub fn compound_touch(&self) -> Option<CompoundTouch>;
        }
    }

    fn derive_geometry(&mut self) {
        self.e.dimensions = self.shape_type.dimensions_for(self.length);
        self.e.corner_radius = self.shape_type.corner_radius_for(self.e.dimensions.width());
    }
}
#[allow(missing_docs)]
impl SensorShape {
    pub fn shape_type(&self) -> ShapeType {
        self.shape_type
    }

    pub fn length(&self) -> f32 {
        self.length
    }

    pub fn position(&self) -> Point {
        self.position
    }

    pub fn touch_scale(&self) -> f32 {
        self.touch_scale
    }

    pub fn sensor_color(&self) -> Rgba {
        self.sensor_color
    }

    pub fn dimensions(&self) -> Dimensions {
        self.e.dimensions
    }

    pub fn corner_radius(&self) -> f32 {
        self.e.corner_radius
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use float_cmp::approx_eq;

    #[test]
    fn builder_defaults_give_a_plain_bar() {
        let shape = SensorShapeBuilder::default().build().unwrap();
        assert_eq!(shape.shape_type(), ShapeType::Bar);
        assert_eq!(shape.length(), 100.0);
        assert_eq!(shape.dimensions(), Dimensions::new(100.0, 20.0));
        assert_eq!(shape.corner_radius(), 3.0);
        assert_eq!(shape.position(), Point::ORIGIN);
        assert_eq!(shape.sensor_color(), Rgba::BLACK);
        assert_eq!(shape.touch_count(), 0);
    }

    #[test]
    fn resize_follows_each_type_rule() {
        let mut bar = SensorShape::new_with(ShapeType::Bar, 100.0, Point::ORIGIN, 0.4);
        bar.resize(200.0);
        assert_eq!(bar.dimensions(), Dimensions::new(200.0, 40.0));
        assert_eq!(bar.corner_radius(), 6.0);

        let mut square = SensorShape::new_with(ShapeType::Square, 100.0, Point::ORIGIN, 0.4);
        square.resize(400.0);
        assert_eq!(square.dimensions(), Dimensions::new(400.0, 400.0));
        assert_eq!(square.corner_radius(), 8.0);

        let mut hex = SensorShape::new_with(ShapeType::Hex, 86.6, Point::ORIGIN, 0.4);
        hex.resize(173.2);
        assert!(approx_eq!(
            f32,
            hex.dimensions().height(),
            200.0,
            epsilon = 0.001
        ));
        assert_eq!(hex.corner_radius(), 0.0);

        let mut ring = SensorShape::new_with(ShapeType::Ring, 150.0, Point::ORIGIN, 0.4);
        ring.resize(300.0);
        assert_eq!(ring.dimensions(), Dimensions::new(300.0, 300.0));
        assert_eq!(ring.corner_radius(), 0.0);
    }

    #[test]
    fn registered_touches_inherit_scale_and_palette() {
        let mut shape = SensorShape::new_with(ShapeType::Square, 400.0, Point::ORIGIN, 0.4);
        for i in 0..7 {
            shape.update_touch(i, Point::new(0.5, 0.5), 0.5).unwrap();
        }
        assert_eq!(shape.touch_count(), 7);
        for (i, touch) in shape.touches().iter().enumerate() {
            assert_eq!(touch.scale(), 0.4);
            assert_eq!(
                touch.color(),
                Rgba::TOUCH_PALETTE[i % Rgba::TOUCH_PALETTE.len()],
                "palette should cycle for touch {i}"
            );
        }

        // A scale change applies only to touches registered afterward.
        shape.set_touch_scale(0.3);
        shape.update_touch(7, Point::new(0.5, 0.5), 0.5).unwrap();
        assert_eq!(shape.touch(7).unwrap().scale(), 0.3);
        assert_eq!(shape.touch(0).unwrap().scale(), 0.4);
    }

    #[test]
    fn touch_registration_refuses_gaps() {
        let mut shape = SensorShape::new_with(ShapeType::Bar, 100.0, Point::ORIGIN, 0.4);
        assert_eq!(
            shape.update_touch(1, Point::ORIGIN, 0.5),
            Err(SensorError::TouchIndexOutOfRange { index: 1, len: 0 })
        );
        assert!(shape.update_touch(0, Point::ORIGIN, 0.5).is_ok());
        assert!(shape.update_touch(1, Point::ORIGIN, 0.5).is_ok());
    }

    #[test]
    fn deserialization_recovers_geometry_but_not_touches() {
        let mut shape = SensorShape::new_with(ShapeType::Hex, 200.0, Point::new(10.0, 20.0), 0.4);
        shape.update_touch(0, Point::new(0.3, 0.4), 0.6).unwrap();

        let json = serde_json::to_string(&shape).unwrap();
        let mut restored: SensorShape = serde_json::from_str(&json).unwrap();
        restored.after_deser();

        assert_eq!(restored.shape_type(), shape.shape_type());
        assert_eq!(restored.position(), shape.position());
        assert_eq!(restored.dimensions(), shape.dimensions());
        assert_eq!(restored.corner_radius(), shape.corner_radius());
        assert_eq!(
            restored.touch_count(),
            0,
            "touches are session state and should not survive a save"
        );
    }

    #[test]
    fn compound_touch_reflects_roster() {
        let mut shape = SensorShape::new_with(ShapeType::Square, 400.0, Point::ORIGIN, 0.4);
        assert!(shape.compound_touch().is_none());
        shape.update_touch(0, Point::new(0.25, 0.25), 0.5).unwrap();
        shape.update_touch(1, Point::new(0.75, 0.75), 0.5).unwrap();
        let compound = shape.compound_touch().unwrap();
        assert_eq!(compound.count, 2);
        assert_eq!(compound.location, Point::new(0.5, 0.5));
        shape.deactivate_touches_from(0);
        assert!(shape.compound_touch().is_none());
        assert_eq!(shape.touch_count(), 2, "deactivation keeps the roster");
    }
}

// Copyright (c) 2026 the trill-sketch authors

//! Structs that hold configuration information about the sketch's
//! sensors. Intended to be serialized.

use crate::{
    sensor::SensorShape,
    traits::{HasSettings, Serializable},
    types::{Point, Rgba, SensorError, ShapeType},
};
use derivative::Derivative;
use serde::{Deserialize, Serialize};
use synonym::Synonym;

/// A human-readable identifier for one sensor, unique within a
/// [SketchSettings].
#[derive(Synonym, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SensorId(String);

/// The persistent description of one sensor: everything needed to
/// rebuild its [SensorShape], and nothing the shape derives on its own.
#[derive(Clone, Debug, Derivative, PartialEq, Serialize, Deserialize)]
#[derivative(Default)]
#[serde(rename_all = "kebab-case")]
pub struct SensorSettings {
    id: SensorId,
    shape_type: ShapeType,
    #[derivative(Default(value = "100.0"))]
    length: f32,
    position: Point,
    #[derivative(Default(value = "0.4"))]
    touch_scale: f32,
    sensor_color: Rgba,

    #[serde(skip)]
    has_been_saved: bool,
}
impl HasSettings for SensorSettings {
    fn has_been_saved(&self) -> bool {
        self.has_been_saved
    }

    fn needs_save(&mut self) {
        self.has_been_saved = false;
    }

    fn mark_clean(&mut self) {
        self.has_been_saved = true;
    }
}
impl SensorSettings {
    /// Creates settings for a sensor of the given type, with stock
    /// visuals.
    pub fn new_with(id: SensorId, shape_type: ShapeType) -> Self {
        Self {
            id,
            shape_type,
            ..Default::default()
        }
    }

    /// Updates the field and marks the struct eligible to save.
    pub fn set_shape_type(&mut self, shape_type: ShapeType) {
        if shape_type != self.shape_type {
            self.shape_type = shape_type;
            self.needs_save();
        }
    }

    /// Updates the field and marks the struct eligible to save.
    pub fn set_length(&mut self, length: f32) {
        if length != self.length {
            self.length = length;
            self.needs_save();
        }
    }

    /// Updates the field and marks the struct eligible to save.
    pub fn set_position(&mut self, position: Point) {
        if position != self.position {
            self.position = position;
            self.needs_save();
        }
    }

    /// Updates the field and marks the struct eligible to save.
    pub fn set_touch_scale(&mut self, touch_scale: f32) {
        if touch_scale != self.touch_scale {
            self.touch_scale = touch_scale;
            self.needs_save();
        }
    }

    /// Updates the field and marks the struct eligible to save.
    pub fn set_sensor_color(&mut self, sensor_color: Rgba) {
        if sensor_color != self.sensor_color {
            self.sensor_color = sensor_color;
            self.needs_save();
        }
    }
}
#[allow(missing_docs)]
impl SensorSettings {
    pub fn id(&self) -> &SensorId {
        &self.id
    }

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
}
impl From<&SensorSettings> for SensorShape {
    fn from(settings: &SensorSettings) -> Self {
        let mut shape = SensorShape::new_with(
            settings.shape_type,
            settings.length,
            settings.position,
            settings.touch_scale,
        );
        shape.set_sensor_color(settings.sensor_color);
        shape
    }
}

/// Contains persistent sketch settings: the roster of sensors the sketch
/// should draw.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub struct SketchSettings {
    sensors: Vec<SensorSettings>,

    #[serde(skip)]
    has_been_saved: bool,
}
impl HasSettings for SketchSettings {
    fn has_been_saved(&self) -> bool {
        self.has_been_saved && self.sensors.iter().all(|s| s.has_been_saved())
    }

    fn needs_save(&mut self) {
        self.has_been_saved = false;
    }

    fn mark_clean(&mut self) {
        self.has_been_saved = true;
        for sensor in self.sensors.iter_mut() {
            sensor.mark_clean();
        }
    }
}
impl SketchSettings {
    /// Adds a sensor to the sketch. Ids are unique, so a sensor whose id
    /// is already taken is refused.
    pub fn push_sensor(&mut self, sensor: SensorSettings) -> Result<(), SensorError> {
        if self.sensor(sensor.id()).is_some() {
            return Err(SensorError::DuplicateSensorId(sensor.id().to_string()));
        }
        self.sensors.push(sensor);
        self.needs_save();
        Ok(())
    }

    /// The sensors in sketch order.
    pub fn sensors(&self) -> &[SensorSettings] {
        &self.sensors
    }

    /// The settings for the sensor with the given id, if present.
    pub fn sensor(&self, id: &SensorId) -> Option<&SensorSettings> {
        self.sensors.iter().find(|s| s.id() == id)
    }

    /// Mutable settings for the sensor with the given id, if present.
    pub fn sensor_mut(&mut self, id: &SensorId) -> Option<&mut SensorSettings> {
        self.sensors.iter_mut().find(|s| s.id() == id)
    }

    /// Builds a drawable [SensorShape] for every configured sensor, in
    /// sketch order.
    pub fn shapes(&self) -> Vec<SensorShape> {
        self.sensors.iter().map(SensorShape::from).collect()
    }

    /// Parses settings from JSON. Hand-edited JSON can break the
    /// unique-id rule that [push_sensor](SketchSettings::push_sensor)
    /// upholds, so it is re-checked here.
    pub fn from_json(json: &str) -> anyhow::Result<Self> {
        let mut settings = serde_json::from_str::<Self>(json)?;
        if let Some(id) = settings.first_duplicate_id() {
            return Err(SensorError::DuplicateSensorId(id.to_string()).into());
        }
        settings.after_deser();
        Ok(settings)
    }

    fn first_duplicate_id(&self) -> Option<&SensorId> {
        for (i, sensor) in self.sensors.iter().enumerate() {
            if self.sensors[..i].iter().any(|s| s.id() == sensor.id()) {
                return Some(sensor.id());
            }
        }
        None
    }

    /// Renders settings as JSON. Where the bytes go is the host's
    /// business; call [mark_clean](HasSettings::mark_clean) once they
    /// are safely wherever that is.
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string_pretty(&self)?)
    }
}
impl Serializable for SketchSettings {}

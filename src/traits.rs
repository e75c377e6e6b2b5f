// Copyright (c) 2026 the trill-sketch authors

//! The traits that define how the model cooperates with its host sketch.

/// Quick import of all important traits.
pub mod prelude {
    pub use super::{HasSettings, Serializable};
}

/// Something that is [Serializable] might need to do work right before
/// serialization, or right after deserialization. These are the hooks.
///
/// The sensor model uses the post-deserialization hook to rebuild runtime
/// state that is deliberately left out of the serialized form, such as
/// derived geometry.
pub trait Serializable {
    /// Called just before saving.
    fn before_ser(&mut self) {}
    /// Called just after loading.
    fn after_deser(&mut self) {}
}

/// A struct that holds user-editable settings and wants to know when it
/// has drifted from its last saved state.
pub trait HasSettings {
    /// Whether the current state of this struct has been saved.
    fn has_been_saved(&self) -> bool;
    /// Call this whenever the struct changes.
    fn needs_save(&mut self);
    /// Call this after a load() or a save().
    fn mark_clean(&mut self);
}

// Copyright (c) 2026 the trill-sketch authors

//! Display colors for sensors and touches.

use core::fmt;
use serde::{Deserialize, Serialize};

/// An RGBA display color. The render loop decides what color space this
/// lands in; the model only promises stable channel values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel; 255 is opaque.
    pub a: u8,
}
#[allow(missing_docs)]
impl Rgba {
    pub const BLACK: Rgba = Rgba::from_rgb(0x000000);
    pub const RED: Rgba = Rgba::from_rgb(0xFF0000);
    pub const BLUE: Rgba = Rgba::from_rgb(0x0000FF);
    pub const YELLOW: Rgba = Rgba::from_rgb(0xFFFF00);
    pub const WHITE: Rgba = Rgba::from_rgb(0xFFFFFF);
    pub const CYAN: Rgba = Rgba::from_rgb(0x00FFFF);
    /// The color a touch wears before the palette assigns it one.
    pub const AMBER: Rgba = Rgba::new(255, 204, 0);

    /// Colors assigned to simultaneous touches, in first-report order.
    /// The palette is a closed set; slots past the fifth wrap around.
    pub const TOUCH_PALETTE: [Rgba; 5] = [
        Rgba::RED,
        Rgba::BLUE,
        Rgba::YELLOW,
        Rgba::WHITE,
        Rgba::CYAN,
    ];

    /// Creates an opaque color from red/green/blue channels.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Creates a color from all four channels.
    pub const fn with_alpha(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from a `0xRRGGBB` literal.
    pub const fn from_rgb(rgb: u32) -> Self {
        Self::new((rgb >> 16) as u8, (rgb >> 8) as u8, rgb as u8)
    }

    /// The palette color for the nth simultaneous touch.
    pub const fn for_touch(nth: usize) -> Self {
        Self::TOUCH_PALETTE[nth % Self::TOUCH_PALETTE.len()]
    }
}
impl Default for Rgba {
    fn default() -> Self {
        Self::BLACK
    }
}
impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.a == 255 {
            f.write_fmt(format_args!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b))
        } else {
            f.write_fmt(format_args!(
                "#{:02X}{:02X}{:02X}{:02X}",
                self.r, self.g, self.b, self.a
            ))
        }
    }
}
impl From<Rgba> for [u8; 4] {
    fn from(value: Rgba) -> Self {
        [value.r, value.g, value.b, value.a]
    }
}

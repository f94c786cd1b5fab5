//! Colour values handed to a [`Surface`](crate::render::Surface).
//!
//! Colours format themselves as CSS colour strings so the web frontend can
//! pass them straight to canvas fill and stroke styles.

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Color {
    Rgba { r: u8, g: u8, b: u8, a: f32 },
    /// Hue in degrees, saturation and lightness in percent.
    Hsla { h: f32, s: f32, l: f32, a: f32 },
}

// Brand palette
pub const EMBER: Color = Color::rgba(255, 122, 47, 1.0);
pub const CYAN: Color = Color::rgba(0, 212, 255, 1.0);
pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0.0);

impl Color {
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Color::Rgba { r, g, b, a }
    }

    pub const fn hsla(h: f32, s: f32, l: f32, a: f32) -> Self {
        Color::Hsla { h, s, l, a }
    }

    pub fn alpha(&self) -> f32 {
        match *self {
            Color::Rgba { a, .. } | Color::Hsla { a, .. } => a,
        }
    }

    pub fn with_alpha(self, alpha: f32) -> Self {
        let alpha = alpha.clamp(0.0, 1.0);
        match self {
            Color::Rgba { r, g, b, .. } => Color::Rgba { r, g, b, a: alpha },
            Color::Hsla { h, s, l, .. } => Color::Hsla { h, s, l, a: alpha },
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Color::Rgba { r, g, b, a } => write!(f, "rgba({}, {}, {}, {})", r, g, b, trim(a)),
            Color::Hsla { h, s, l, a } => {
                write!(f, "hsla({}, {}%, {}%, {})", trim(h), trim(s), trim(l), trim(a))
            }
        }
    }
}

// Three decimals is plenty for a canvas and keeps the strings short.
fn trim(v: f32) -> String {
    let s = format!("{:.3}", v);
    let s = s.trim_end_matches('0').trim_end_matches('.');
    if s.is_empty() || s == "-0" {
        "0".to_string()
    } else {
        s.to_string()
    }
}

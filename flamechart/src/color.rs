//! Colour components and their resolution into display strings.
//!
//! The chart does not compute colours. Callers pass one [`ColorComponents`]
//! per measurement and a [`ColorResolver`] turns each into whatever string
//! the rendering layer expects.

use serde::{Deserialize, Serialize};

/// An RGBA colour with every channel in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ColorComponents(pub [f64; 4]);

impl ColorComponents {
    /// Creates a colour from channel values in `0.0..=1.0`.
    pub const fn rgba(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self([r, g, b, a])
    }

    /// Creates an opaque colour from 8-bit channels.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self([
            f64::from(r) / 255.0,
            f64::from(g) / 255.0,
            f64::from(b) / 255.0,
            1.0,
        ])
    }
}

/// Palette used when the caller supplies no colours.
pub const DEFAULT_PALETTE: [ColorComponents; 6] = [
    ColorComponents::rgba(0.384, 0.275, 0.675, 1.0),
    ColorComponents::rgba(0.949, 0.365, 0.412, 1.0),
    ColorComponents::rgba(0.188, 0.561, 0.863, 1.0),
    ColorComponents::rgba(0.969, 0.671, 0.188, 1.0),
    ColorComponents::rgba(0.231, 0.690, 0.471, 1.0),
    ColorComponents::rgba(0.565, 0.549, 0.604, 1.0),
];

/// Maps colour components to a display colour string.
pub trait ColorResolver {
    /// Resolves one colour.
    fn resolve(&self, color: &ColorComponents) -> String;
}

/// Resolves colours to CSS `rgba(r,g,b,a)` strings.
#[derive(Debug, Clone, Copy, Default)]
pub struct RgbaResolver;

impl ColorResolver for RgbaResolver {
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // Clamped to 0..=255
    fn resolve(&self, color: &ColorComponents) -> String {
        let [r, g, b, a] = color.0;
        let channel = |c: f64| (c.clamp(0.0, 1.0) * 255.0).floor() as u8;
        format!(
            "rgba({},{},{},{})",
            channel(r),
            channel(g),
            channel(b),
            a.clamp(0.0, 1.0)
        )
    }
}

impl<F> ColorResolver for F
where
    F: Fn(&ColorComponents) -> String,
{
    fn resolve(&self, color: &ColorComponents) -> String {
        self(color)
    }
}

/// Picks the colour for measurement `index`, cycling through `palette`.
///
/// An empty palette falls back to [`DEFAULT_PALETTE`].
pub fn color_at(palette: &[ColorComponents], index: usize) -> ColorComponents {
    let palette = if palette.is_empty() {
        &DEFAULT_PALETTE[..]
    } else {
        palette
    };
    palette[index % palette.len()]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rgba_resolver() {
        let resolver = RgbaResolver;
        assert_eq!(
            resolver.resolve(&ColorComponents::rgba(1.0, 0.0, 0.5, 1.0)),
            "rgba(255,0,127,1)"
        );
        assert_eq!(
            resolver.resolve(&ColorComponents::rgba(2.0, -1.0, 0.0, 0.5)),
            "rgba(255,0,0,0.5)"
        );
    }

    #[test]
    fn test_from_rgb8() {
        let c = ColorComponents::from_rgb8(255, 0, 255);
        assert_eq!(RgbaResolver.resolve(&c), "rgba(255,0,255,1)");
    }

    #[test]
    fn test_closure_resolver() {
        let resolver = |c: &ColorComponents| format!("{:.1}", c.0[0]);
        assert_eq!(resolver.resolve(&ColorComponents::rgba(0.5, 0.0, 0.0, 1.0)), "0.5");
    }

    #[test]
    fn test_color_at_cycles() {
        let red = ColorComponents::rgba(1.0, 0.0, 0.0, 1.0);
        let blue = ColorComponents::rgba(0.0, 0.0, 1.0, 1.0);
        let palette = [red, blue];
        assert_eq!(color_at(&palette, 0), red);
        assert_eq!(color_at(&palette, 1), blue);
        assert_eq!(color_at(&palette, 2), red);
        assert_eq!(color_at(&[], 7), DEFAULT_PALETTE[1]);
    }
}

use crate::color::{self, Color};

/// An HSL adjustment applied as hue shift, lighten, desaturate, then saturate.
///
/// `hue` is in degrees; the other fields are absolute offsets on the
/// [0, 1] lightness and saturation channels.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Adjustment {
    pub hue: f32,
    pub lighten: f32,
    pub desaturate: f32,
    pub saturate: f32,
}

pub const DEFAULT_HIGHLIGHT_HUE: f32 = -5.0;
pub const DEFAULT_HIGHLIGHT_LIGHTEN: f32 = 0.25;
pub const DEFAULT_HIGHLIGHT_DESATURATE: f32 = 0.1;
pub const DEFAULT_HIGHLIGHT_SATURATE: f32 = 0.0;

impl Adjustment {
    pub const fn new(hue: f32, lighten: f32, desaturate: f32, saturate: f32) -> Self {
        Self {
            hue,
            lighten,
            desaturate,
            saturate,
        }
    }

    /// Parameters used to derive the bright slots when none are given.
    pub const fn highlight_default() -> Self {
        Self::new(
            DEFAULT_HIGHLIGHT_HUE,
            DEFAULT_HIGHLIGHT_LIGHTEN,
            DEFAULT_HIGHLIGHT_DESATURATE,
            DEFAULT_HIGHLIGHT_SATURATE,
        )
    }

    /// True if any field is non-zero. Gates the tint pass.
    pub fn is_active(&self) -> bool {
        self.hue != 0.0 || self.lighten != 0.0 || self.desaturate != 0.0 || self.saturate != 0.0
    }

    /// Apply to `c`. The order hue, lighten, desaturate, saturate is fixed.
    pub fn apply(&self, c: Color) -> Color {
        let hsl = color::shift_hue(c.to_hsl(), self.hue);
        let hsl = color::lighten(hsl, self.lighten);
        let hsl = color::desaturate(hsl, self.desaturate);
        let hsl = color::saturate(hsl, self.saturate);
        Color::from_hsl(hsl)
    }
}

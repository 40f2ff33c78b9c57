use anyhow::{bail, Result};
use palette::{FromColor, Hsl, RgbHue, Srgb};

/// Core color type used throughout the pipeline.
/// Wraps sRGB u8 components and provides conversions to HSL.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a hex color string like `#ff8800` or `#FF8800`.
    pub fn from_hex(hex: &str) -> Result<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            bail!("invalid hex color '{hex}': expected 6 hex digits");
        }
        let r = u8::from_str_radix(&digits[0..2], 16)?;
        let g = u8::from_str_radix(&digits[2..4], 16)?;
        let b = u8::from_str_radix(&digits[4..6], 16)?;
        Ok(Self { r, g, b })
    }

    /// Serialize to lowercase hex `#rrggbb`.
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Convert to `palette::Srgb<u8>`.
    pub fn to_srgb_u8(self) -> Srgb<u8> {
        Srgb::new(self.r, self.g, self.b)
    }

    /// Convert to HSL. Hue in degrees, saturation and lightness in [0, 1].
    pub fn to_hsl(self) -> Hsl {
        let srgb_f32: Srgb<f32> = self.to_srgb_u8().into_format();
        Hsl::from_color(srgb_f32)
    }

    /// Create from HSL.
    pub fn from_hsl(hsl: Hsl) -> Self {
        let srgb_f32: Srgb<f32> = Srgb::from_color(hsl);
        Self::from_srgb_f32_clamped(srgb_f32)
    }

    /// Clamp an Srgb<f32> to [0, 1] and convert to Color.
    fn from_srgb_f32_clamped(srgb: Srgb<f32>) -> Self {
        let r = (srgb.red.clamp(0.0, 1.0) * 255.0).round() as u8;
        let g = (srgb.green.clamp(0.0, 1.0) * 255.0).round() as u8;
        let b = (srgb.blue.clamp(0.0, 1.0) * 255.0).round() as u8;
        Self { r, g, b }
    }

    /// WCAG 2.0 relative luminance.
    ///
    /// Linearizes each sRGB channel, then computes the weighted sum.
    pub fn relative_luminance(self) -> f32 {
        fn linearize(c: u8) -> f32 {
            let c = c as f32 / 255.0;
            if c <= 0.04045 {
                c / 12.92
            } else {
                ((c + 0.055) / 1.055).powf(2.4)
            }
        }
        0.2126 * linearize(self.r) + 0.7152 * linearize(self.g) + 0.0722 * linearize(self.b)
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

/// Rotate the hue by `degrees`, wrapping into [0, 360).
pub fn shift_hue(mut hsl: Hsl, degrees: f32) -> Hsl {
    let hue = (hsl.hue.into_positive_degrees() + degrees).rem_euclid(360.0);
    hsl.hue = RgbHue::from_degrees(hue);
    hsl
}

/// Add `amount` to the lightness, clamped to [0, 1].
pub fn lighten(mut hsl: Hsl, amount: f32) -> Hsl {
    hsl.lightness = (hsl.lightness + amount).clamp(0.0, 1.0);
    hsl
}

/// Add `amount` to the saturation, clamped to [0, 1].
pub fn saturate(mut hsl: Hsl, amount: f32) -> Hsl {
    hsl.saturation = (hsl.saturation + amount).clamp(0.0, 1.0);
    hsl
}

/// Subtract `amount` from the saturation, clamped to [0, 1].
pub fn desaturate(hsl: Hsl, amount: f32) -> Hsl {
    saturate(hsl, -amount)
}

//! Colour values and helpers for theme definitions

use serde::{Deserialize, Serialize};
use std::fmt;

/// 8-bit RGBA colour as used in CSS.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

/// Hue/saturation/lightness form, all components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Hsla {
    pub h: f32,
    pub s: f32,
    pub l: f32,
    pub a: f32,
}

impl Rgba {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// CSS serialisation matching computed style output:
    /// `rgb(25, 118, 210)` when opaque, `rgba(25, 118, 210, 0.5)` otherwise.
    pub fn to_css(&self) -> String {
        if self.a == 255 {
            format!("rgb({}, {}, {})", self.r, self.g, self.b)
        } else {
            let alpha = (self.a as f32 / 255.0 * 100.0).round() / 100.0;
            format!("rgba({}, {}, {}, {})", self.r, self.g, self.b, alpha)
        }
    }

    pub fn to_hsla(&self) -> Hsla {
        let r = self.r as f32 / 255.0;
        let g = self.g as f32 / 255.0;
        let b = self.b as f32 / 255.0;
        let a = self.a as f32 / 255.0;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let l = (max + min) / 2.0;

        if max == min {
            // Achromatic
            return Hsla { h: 0.0, s: 0.0, l, a };
        }

        let d = max - min;
        let s = if l > 0.5 {
            d / (2.0 - max - min)
        } else {
            d / (max + min)
        };

        let h = if max == r {
            let h = (g - b) / d;
            if g < b { h + 6.0 } else { h }
        } else if max == g {
            (b - r) / d + 2.0
        } else {
            (r - g) / d + 4.0
        };

        Hsla { h: h / 6.0, s, l, a }
    }

    pub fn from_hsla(hsla: Hsla) -> Self {
        let Hsla { h, s, l, a } = hsla;
        let to_byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;

        if s == 0.0 {
            let v = to_byte(l);
            return Self { r: v, g: v, b: v, a: to_byte(a) };
        }

        let q = if l < 0.5 { l * (1.0 + s) } else { l + s - l * s };
        let p = 2.0 * l - q;

        Self {
            r: to_byte(hue_to_rgb(p, q, h + 1.0 / 3.0)),
            g: to_byte(hue_to_rgb(p, q, h)),
            b: to_byte(hue_to_rgb(p, q, h - 1.0 / 3.0)),
            a: to_byte(a),
        }
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_css())
    }
}

fn hue_to_rgb(p: f32, q: f32, mut t: f32) -> f32 {
    if t < 0.0 {
        t += 1.0;
    }
    if t > 1.0 {
        t -= 1.0;
    }
    if t < 1.0 / 6.0 {
        p + (q - p) * 6.0 * t
    } else if t < 1.0 / 2.0 {
        q
    } else if t < 2.0 / 3.0 {
        p + (q - p) * (2.0 / 3.0 - t) * 6.0
    } else {
        p
    }
}

/// Parse a hex color string.
/// Supports formats: #RGB, #RRGGBB, #RRGGBBAA. Malformed input yields opaque black.
pub fn hex(color: &str) -> Rgba {
    let color = color.trim_start_matches('#');
    if !color.is_ascii() {
        return Rgba::rgb(0, 0, 0);
    }
    let channel = |s: &str| u8::from_str_radix(s, 16).unwrap_or(0);

    match color.len() {
        3 => Rgba::rgb(
            channel(&color[0..1].repeat(2)),
            channel(&color[1..2].repeat(2)),
            channel(&color[2..3].repeat(2)),
        ),
        6 => Rgba::rgb(channel(&color[0..2]), channel(&color[2..4]), channel(&color[4..6])),
        8 => Rgba {
            r: channel(&color[0..2]),
            g: channel(&color[2..4]),
            b: channel(&color[4..6]),
            a: u8::from_str_radix(&color[6..8], 16).unwrap_or(255),
        },
        _ => Rgba::rgb(0, 0, 0),
    }
}

/// Lighten a color by a lightness amount (0-1)
pub fn lighten(color: Rgba, amount: f32) -> Rgba {
    let hsla = color.to_hsla();
    Rgba::from_hsla(Hsla {
        l: (hsla.l + amount).min(1.0),
        ..hsla
    })
}

/// Darken a color by a lightness amount (0-1)
pub fn darken(color: Rgba, amount: f32) -> Rgba {
    let hsla = color.to_hsla();
    Rgba::from_hsla(Hsla {
        l: (hsla.l - amount).max(0.0),
        ..hsla
    })
}

/// Mix two colors channel-wise
pub fn mix(a: Rgba, b: Rgba, ratio: f32) -> Rgba {
    let ratio = ratio.clamp(0.0, 1.0);
    let blend = |x: u8, y: u8| (x as f32 * (1.0 - ratio) + y as f32 * ratio).round() as u8;
    Rgba {
        r: blend(a.r, b.r),
        g: blend(a.g, b.g),
        b: blend(a.b, b.b),
        a: blend(a.a, b.a),
    }
}

/// Set the alpha of a color (0-1)
pub fn with_alpha(color: Rgba, alpha: f32) -> Rgba {
    Rgba {
        a: (alpha.clamp(0.0, 1.0) * 255.0).round() as u8,
        ..color
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_hex_parsing() {
        assert_eq!(hex("#1976d2"), Rgba::rgb(25, 118, 210));
        assert_eq!(hex("#fff"), Rgba::rgb(255, 255, 255));
        assert_eq!(hex("#00000080").a, 128);
        assert_eq!(hex("nonsense"), Rgba::rgb(0, 0, 0));
        // 6 bytes but not 6 hex digits
        assert_eq!(hex("#€€"), Rgba::rgb(0, 0, 0));
        assert_eq!(hex("#한"), Rgba::rgb(0, 0, 0));
    }

    #[test]
    fn test_css_output() {
        assert_eq!(hex("#1976d2").to_css(), "rgb(25, 118, 210)");
        assert_eq!(with_alpha(Rgba::rgb(0, 0, 0), 0.38).to_css(), "rgba(0, 0, 0, 0.38)");
    }

    #[test]
    fn test_hsla_conversion() {
        let white = hex("#ffffff").to_hsla();
        assert_abs_diff_eq!(white.l, 1.0, epsilon = 0.01);

        let red = hex("#ff0000").to_hsla();
        assert_abs_diff_eq!(red.h, 0.0, epsilon = 0.01);
        assert_abs_diff_eq!(red.s, 1.0, epsilon = 0.01);

        let primary = hex("#1976d2");
        assert_eq!(Rgba::from_hsla(primary.to_hsla()), primary);
    }

    #[test]
    fn test_lighten_darken() {
        let grey = Rgba::rgb(128, 128, 128);
        assert!(lighten(grey, 0.1).r > grey.r);
        assert!(darken(grey, 0.1).r < grey.r);
        assert_eq!(lighten(Rgba::rgb(255, 255, 255), 0.5), Rgba::rgb(255, 255, 255));
    }

    #[test]
    fn test_mix() {
        let black = Rgba::rgb(0, 0, 0);
        let white = Rgba::rgb(255, 255, 255);
        assert_eq!(mix(black, white, 0.0), black);
        assert_eq!(mix(black, white, 1.0), white);
        assert_eq!(mix(black, white, 0.5).r, 128);
    }
}

//! CSS color parsing into straight-alpha sRGB.

use std::str::FromStr;

use crate::error::ColorError;

#[derive(Debug, Clone, Copy, PartialEq)]
/// sRGB color with straight alpha.
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Opacity in `0.0..=1.0`.
    pub a: f64,
}

impl Rgba {
    /// Opaque color.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Opaque white.
    pub const WHITE: Self = Self::rgb(255, 255, 255);
    /// Opaque black.
    pub const BLACK: Self = Self::rgb(0, 0, 0);

    /// Whether the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    /// Composites this color over an opaque `backdrop`.
    pub fn over(self, backdrop: Self) -> Self {
        let alpha = self.a.clamp(0.0, 1.0);
        let mix = |top: u8, bottom: u8| {
            (f64::from(top) * alpha + f64::from(bottom) * (1.0 - alpha)).round() as u8
        };
        Self::rgb(
            mix(self.r, backdrop.r),
            mix(self.g, backdrop.g),
            mix(self.b, backdrop.b),
        )
    }

    /// Parses `#rgb`, `#rgba`, `#rrggbb`, `#rrggbbaa`, `rgb()`, `rgba()`, `hsl()`, or `hsla()`.
    ///
    /// # Errors
    ///
    /// Returns a [`ColorError`] describing the first problem found.
    pub fn parse(input: &str) -> Result<Self, ColorError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(ColorError::Empty);
        }
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| ColorError::InvalidHex(trimmed.to_string()));
        }

        let lower = trimmed.to_ascii_lowercase();
        let (name, args) = lower
            .strip_suffix(')')
            .and_then(|body| body.split_once('('))
            .ok_or_else(|| ColorError::Unsupported(trimmed.to_string()))?;
        let args = split_args(args);
        match name.trim() {
            "rgb" | "rgba" => parse_rgb(trimmed, &args),
            "hsl" | "hsla" => parse_hsl(trimmed, &args),
            _ => Err(ColorError::Unsupported(trimmed.to_string())),
        }
    }
}

impl FromStr for Rgba {
    type Err = ColorError;

    fn from_str(input: &str) -> Result<Self, Self::Err> {
        Self::parse(input)
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.bytes().all(|byte| byte.is_ascii_hexdigit()) {
        return None;
    }
    let nibble = |index: usize| u8::from_str_radix(&hex[index..=index], 16).ok().map(|v| v * 17);
    let byte = |index: usize| u8::from_str_radix(&hex[index..index + 2], 16).ok();

    let (r, g, b, a) = match hex.len() {
        3 => (nibble(0)?, nibble(1)?, nibble(2)?, 255),
        4 => (nibble(0)?, nibble(1)?, nibble(2)?, nibble(3)?),
        6 => (byte(0)?, byte(2)?, byte(4)?, 255),
        8 => (byte(0)?, byte(2)?, byte(4)?, byte(6)?),
        _ => return None,
    };
    Some(Rgba {
        r,
        g,
        b,
        a: f64::from(a) / 255.0,
    })
}

/// Splits comma or space separated arguments, with an optional `/ alpha` tail.
fn split_args(args: &str) -> Vec<&str> {
    args.split(|ch: char| ch == ',' || ch == '/' || ch.is_whitespace())
        .filter(|arg| !arg.is_empty())
        .collect()
}

fn arity(input: &str, args: &[&str]) -> Result<(), ColorError> {
    if matches!(args.len(), 3 | 4) {
        Ok(())
    } else {
        Err(ColorError::Arity {
            input: input.to_string(),
            expected: "3 or 4",
        })
    }
}

fn number(input: &str, arg: &str, channel: &'static str) -> Result<f64, ColorError> {
    arg.parse::<f64>()
        .ok()
        .filter(|value| value.is_finite())
        .ok_or_else(|| ColorError::InvalidChannel {
            input: input.to_string(),
            channel,
        })
}

fn alpha(input: &str, args: &[&str]) -> Result<f64, ColorError> {
    let Some(raw) = args.get(3) else {
        return Ok(1.0);
    };
    let value = match raw.strip_suffix('%') {
        Some(percent) => number(input, percent, "alpha")? / 100.0,
        None => number(input, raw, "alpha")?,
    };
    Ok(value.clamp(0.0, 1.0))
}

fn parse_rgb(input: &str, args: &[&str]) -> Result<Rgba, ColorError> {
    arity(input, args)?;
    let channel = |raw: &str, name: &'static str| -> Result<u8, ColorError> {
        let value = match raw.strip_suffix('%') {
            Some(percent) => number(input, percent, name)? * 2.55,
            None => number(input, raw, name)?,
        };
        Ok(value.round().clamp(0.0, 255.0) as u8)
    };
    Ok(Rgba {
        r: channel(args[0], "red")?,
        g: channel(args[1], "green")?,
        b: channel(args[2], "blue")?,
        a: alpha(input, args)?,
    })
}

fn parse_hsl(input: &str, args: &[&str]) -> Result<Rgba, ColorError> {
    arity(input, args)?;
    let hue = number(input, args[0].trim_end_matches("deg"), "hue")?.rem_euclid(360.0);
    let percent = |raw: &str, name: &'static str| -> Result<f64, ColorError> {
        Ok((number(input, raw.trim_end_matches('%'), name)? / 100.0).clamp(0.0, 1.0))
    };
    let saturation = percent(args[1], "saturation")?;
    let lightness = percent(args[2], "lightness")?;

    let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
    let sector = hue / 60.0;
    let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
    let (r, g, b) = match sector as u8 {
        0 => (chroma, x, 0.0),
        1 => (x, chroma, 0.0),
        2 => (0.0, chroma, x),
        3 => (0.0, x, chroma),
        4 => (x, 0.0, chroma),
        _ => (chroma, 0.0, x),
    };
    let m = lightness - chroma / 2.0;
    let to_byte = |value: f64| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;

    Ok(Rgba {
        r: to_byte(r),
        g: to_byte(g),
        b: to_byte(b),
        a: alpha(input, args)?,
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn hex_forms_expand_and_carry_alpha() {
        assert_eq!(Rgba::parse("#fff"), Ok(Rgba::WHITE));
        assert_eq!(Rgba::parse("#1D4ED8"), Ok(Rgba::rgb(0x1d, 0x4e, 0xd8)));
        let translucent = Rgba::parse("#00000080").expect("parse");
        assert_eq!((translucent.r, translucent.g, translucent.b), (0, 0, 0));
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-9);
    }

    #[test]
    fn functional_forms_accept_commas_and_spaces() {
        assert_eq!(Rgba::parse("rgb(29, 78, 216)"), Ok(Rgba::rgb(29, 78, 216)));
        assert_eq!(Rgba::parse("RGB(100% 0% 0%)"), Ok(Rgba::rgb(255, 0, 0)));
        let rgba = Rgba::parse("rgba(0 0 0 / 50%)").expect("parse");
        assert_eq!(rgba.a, 0.5);
        assert_eq!(Rgba::parse("hsl(0, 0%, 100%)"), Ok(Rgba::WHITE));
        assert_eq!(Rgba::parse("hsl(120deg 100% 25%)"), Ok(Rgba::rgb(0, 128, 0)));
        assert_eq!(Rgba::parse("hsl(240, 100%, 50%)"), Ok(Rgba::rgb(0, 0, 255)));
    }

    #[test]
    fn malformed_input_is_rejected() {
        assert_eq!(Rgba::parse("  "), Err(ColorError::Empty));
        assert_eq!(
            Rgba::parse("#12345"),
            Err(ColorError::InvalidHex("#12345".to_string()))
        );
        assert_eq!(
            Rgba::parse("#ggg"),
            Err(ColorError::InvalidHex("#ggg".to_string()))
        );
        assert!(matches!(
            Rgba::parse("rgb(1, 2)"),
            Err(ColorError::Arity { .. })
        ));
        assert!(matches!(
            Rgba::parse("rgb(1, x, 2)"),
            Err(ColorError::InvalidChannel { channel: "green", .. })
        ));
        assert_eq!(
            Rgba::parse("oklch(0.5 0.1 200)"),
            Err(ColorError::Unsupported("oklch(0.5 0.1 200)".to_string()))
        );
        assert_eq!(
            "rebeccapurple".parse::<Rgba>(),
            Err(ColorError::Unsupported("rebeccapurple".to_string()))
        );
    }

    #[test]
    fn translucent_colors_composite_over_backdrop() {
        let overlay = Rgba {
            a: 0.8,
            ..Rgba::BLACK
        };
        assert_eq!(overlay.over(Rgba::WHITE), Rgba::rgb(51, 51, 51));
        assert_eq!(Rgba::WHITE.over(Rgba::BLACK), Rgba::WHITE);
    }
}

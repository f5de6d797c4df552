//! WCAG 2.x relative luminance and contrast ratio.

use crate::color::Rgba;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// WCAG conformance level.
pub enum WcagLevel {
    /// Level AA.
    Aa,
    /// Level AAA.
    Aaa,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Text size class for contrast thresholds.
pub enum TextSize {
    /// Below 18pt, or below 14pt bold.
    Normal,
    /// At least 18pt, or 14pt bold.
    Large,
}

/// Minimum contrast ratio for `level` at `size`.
pub fn required_ratio(level: WcagLevel, size: TextSize) -> f64 {
    match (level, size) {
        (WcagLevel::Aa, TextSize::Normal) => 4.5,
        (WcagLevel::Aa, TextSize::Large) => 3.0,
        (WcagLevel::Aaa, TextSize::Normal) => 7.0,
        (WcagLevel::Aaa, TextSize::Large) => 4.5,
    }
}

/// Relative luminance of an opaque color.
pub fn luminance(color: Rgba) -> f64 {
    fn channel(value: u8) -> f64 {
        let value = f64::from(value) / 255.0;
        if value <= 0.03928 {
            value / 12.92
        } else {
            ((value + 0.055) / 1.055).powf(2.4)
        }
    }
    0.2126 * channel(color.r) + 0.7152 * channel(color.g) + 0.0722 * channel(color.b)
}

/// Contrast ratio of `foreground` over an opaque `background`, in `1.0..=21.0`.
///
/// A translucent foreground is composited over the background first.
pub fn contrast_ratio(foreground: Rgba, background: Rgba) -> f64 {
    let background = background.over(Rgba::WHITE);
    let foreground = foreground.over(background);
    let (lighter, darker) = {
        let a = luminance(foreground);
        let b = luminance(background);
        if a >= b {
            (a, b)
        } else {
            (b, a)
        }
    };
    (lighter + 0.05) / (darker + 0.05)
}

/// Whether the pair meets `level` for text of `size`.
pub fn meets(foreground: Rgba, background: Rgba, level: WcagLevel, size: TextSize) -> bool {
    contrast_ratio(foreground, background) >= required_ratio(level, size)
}

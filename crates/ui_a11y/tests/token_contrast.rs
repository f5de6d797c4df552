//! Contrast of the built-in design token pairs.

use proptest::prelude::*;
use ui_a11y::{contrast_ratio, meets, Rgba, TextSize, WcagLevel};
use ui_core::{ColorScheme, DesignTokens};

const TEXT_PAIRS: &[(&str, &str)] = &[
    ("foreground", "background"),
    ("card-foreground", "card"),
    ("muted-foreground", "muted"),
    ("muted-foreground", "background"),
    ("base-on-subtle", "base-subtle"),
    ("base-on-solid", "base-solid"),
    ("base-on-solid", "base-solid-hover"),
    ("primary-on-solid", "primary-solid"),
    ("primary-on-solid", "primary-solid-hover"),
    ("destructive-on-solid", "destructive-solid"),
    ("destructive-on-solid", "destructive-solid-hover"),
];

fn color(tokens: &DesignTokens, name: &str, scheme: ColorScheme) -> Rgba {
    let value = tokens
        .color(name, scheme)
        .unwrap_or_else(|| panic!("missing token {name}"));
    Rgba::parse(value).unwrap_or_else(|err| panic!("token {name}: {err}"))
}

#[test]
fn every_token_color_parses() {
    let tokens = DesignTokens::builtin().expect("builtin tokens");
    for (name, value) in tokens.colors.iter().chain(tokens.dark.iter()) {
        assert!(Rgba::parse(value).is_ok(), "{name} = {value}");
    }
}

#[test]
fn text_pairs_meet_aa_in_both_schemes() {
    let tokens = DesignTokens::builtin().expect("builtin tokens");
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        for (foreground, background) in TEXT_PAIRS {
            let fg = color(&tokens, foreground, scheme);
            let bg = color(&tokens, background, scheme);
            assert!(
                meets(fg, bg, WcagLevel::Aa, TextSize::Normal),
                "{scheme:?}: {foreground} on {background} is {:.2}:1",
                contrast_ratio(fg, bg)
            );
        }
    }
}

#[test]
fn focus_ring_is_distinguishable_from_background() {
    let tokens = DesignTokens::builtin().expect("builtin tokens");
    for scheme in [ColorScheme::Light, ColorScheme::Dark] {
        let ring = color(&tokens, "ring", scheme);
        let background = color(&tokens, "background", scheme);
        assert!(contrast_ratio(ring, background) >= 3.0, "{scheme:?}");
    }
}

proptest! {
    #[test]
    fn contrast_is_symmetric_and_bounded(
        a in any::<(u8, u8, u8)>(),
        b in any::<(u8, u8, u8)>(),
    ) {
        let first = Rgba::rgb(a.0, a.1, a.2);
        let second = Rgba::rgb(b.0, b.1, b.2);
        let ratio = contrast_ratio(first, second);
        prop_assert!((1.0..=21.0 + 1e-9).contains(&ratio));
        prop_assert!((ratio - contrast_ratio(second, first)).abs() < 1e-9);
    }

    #[test]
    fn hex_and_rgb_notations_agree(r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
        let hex = Rgba::parse(&format!("#{r:02x}{g:02x}{b:02x}")).expect("hex");
        let functional = Rgba::parse(&format!("rgb({r}, {g}, {b})")).expect("rgb");
        prop_assert_eq!(hex, functional);
    }
}

//! Utility-group classification for Tailwind-style class names.
//!
//! A utility group is the CSS property family a class writes to. Two classes in the same group
//! (under the same variant modifiers) conflict, and only the later one survives a merge. Some
//! prefixes are shared by several groups (`text-sm` vs `text-red-500`, `border-2` vs
//! `border-input`); those are told apart by the shape of the value after the prefix.
//!
//! Groups whose value is a color end in `-color`.

use std::borrow::Cow;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ValueKind {
    /// Any non-empty value.
    Any,
    /// Spacing and sizing values: numbers, fractions, `px`/`full`/`auto`-style keywords, arbitrary values.
    Length,
    /// Plain numbers or arbitrary lengths.
    Number,
    /// Bare prefix, integers, or arbitrary lengths (`border`, `border-2`, `border-[3px]`).
    Width,
    /// T-shirt sizes (`xs`..`9xl`, `base`) or arbitrary lengths, with an optional `/line-height`.
    TShirt,
    /// Bare prefix, `none`, `full`, t-shirt sizes, or arbitrary values.
    Radius,
    /// Bare prefix, `none`, `inner`, t-shirt sizes, or arbitrary shadow definitions.
    Shadow,
    /// Fixed keyword list. An empty string entry accepts the bare prefix.
    OneOf(&'static [&'static str]),
}

struct Rule {
    prefix: &'static str,
    group: &'static str,
    value: ValueKind,
}

const fn rule(prefix: &'static str, group: &'static str, value: ValueKind) -> Rule {
    Rule {
        prefix,
        group,
        value,
    }
}

const LENGTH_KEYWORDS: &[&str] = &[
    "px", "full", "screen", "auto", "min", "max", "fit", "svh", "lvh", "dvh", "svw", "lvw", "dvw",
    "none",
];

const LENGTH_UNITS: &[&str] = &[
    "px", "rem", "em", "%", "vh", "vw", "dvh", "svh", "lvh", "dvw", "svw", "lvw", "ch", "ex",
    "pt", "cm", "mm", "in", "deg", "ms", "s",
];

const OVERFLOW: &[&str] = &["auto", "hidden", "clip", "visible", "scroll"];

/// Single-class utilities that carry no value.
const EXACT: &[(&str, &str)] = &[
    ("block", "display"),
    ("inline-block", "display"),
    ("inline", "display"),
    ("flex", "display"),
    ("inline-flex", "display"),
    ("table", "display"),
    ("inline-table", "display"),
    ("table-cell", "display"),
    ("table-row", "display"),
    ("flow-root", "display"),
    ("grid", "display"),
    ("inline-grid", "display"),
    ("contents", "display"),
    ("list-item", "display"),
    ("hidden", "display"),
    ("static", "position"),
    ("fixed", "position"),
    ("absolute", "position"),
    ("relative", "position"),
    ("sticky", "position"),
    ("visible", "visibility"),
    ("invisible", "visibility"),
    ("collapse", "visibility"),
    ("sr-only", "sr"),
    ("not-sr-only", "sr"),
    ("isolate", "isolation"),
    ("isolation-auto", "isolation"),
    ("box-border", "box-sizing"),
    ("box-content", "box-sizing"),
    ("flex-row", "flex-direction"),
    ("flex-row-reverse", "flex-direction"),
    ("flex-col", "flex-direction"),
    ("flex-col-reverse", "flex-direction"),
    ("flex-wrap", "flex-wrap"),
    ("flex-wrap-reverse", "flex-wrap"),
    ("flex-nowrap", "flex-wrap"),
    ("flex-1", "flex"),
    ("flex-auto", "flex"),
    ("flex-initial", "flex"),
    ("flex-none", "flex"),
    ("grow", "grow"),
    ("shrink", "shrink"),
    ("antialiased", "font-smoothing"),
    ("subpixel-antialiased", "font-smoothing"),
    ("italic", "font-style"),
    ("not-italic", "font-style"),
    ("underline", "text-decoration"),
    ("overline", "text-decoration"),
    ("line-through", "text-decoration"),
    ("no-underline", "text-decoration"),
    ("uppercase", "text-transform"),
    ("lowercase", "text-transform"),
    ("capitalize", "text-transform"),
    ("normal-case", "text-transform"),
    ("truncate", "text-overflow"),
    ("text-ellipsis", "text-overflow"),
    ("text-clip", "text-overflow"),
    ("ring-inset", "ring-inset"),
    ("border-collapse", "border-collapse"),
    ("border-separate", "border-collapse"),
    ("transform", "transform"),
    ("transform-cpu", "transform"),
    ("transform-gpu", "transform"),
    ("transform-none", "transform"),
];

/// Prefix rules, most specific first. The first rule whose prefix and value shape match wins.
const RULES: &[Rule] = &[
    // layout
    rule("z", "z", ValueKind::Length),
    rule("inset-x", "inset-x", ValueKind::Length),
    rule("inset-y", "inset-y", ValueKind::Length),
    rule("inset", "inset", ValueKind::Length),
    rule("start", "start", ValueKind::Length),
    rule("end", "end", ValueKind::Length),
    rule("top", "top", ValueKind::Length),
    rule("right", "right", ValueKind::Length),
    rule("bottom", "bottom", ValueKind::Length),
    rule("left", "left", ValueKind::Length),
    rule("overflow-x", "overflow-x", ValueKind::OneOf(OVERFLOW)),
    rule("overflow-y", "overflow-y", ValueKind::OneOf(OVERFLOW)),
    rule("overflow", "overflow", ValueKind::OneOf(OVERFLOW)),
    rule(
        "object",
        "object-fit",
        ValueKind::OneOf(&["contain", "cover", "fill", "none", "scale-down"]),
    ),
    rule("object", "object-position", ValueKind::Any),
    rule("aspect", "aspect", ValueKind::Any),
    rule("columns", "columns", ValueKind::Any),
    // flexbox and grid
    rule("basis", "basis", ValueKind::Length),
    rule("grow", "grow", ValueKind::Number),
    rule("shrink", "shrink", ValueKind::Number),
    rule("order", "order", ValueKind::Any),
    rule("grid-cols", "grid-cols", ValueKind::Any),
    rule("grid-rows", "grid-rows", ValueKind::Any),
    rule("grid-flow", "grid-flow", ValueKind::Any),
    rule("col-span", "col-span", ValueKind::Any),
    rule("col-start", "col-start", ValueKind::Any),
    rule("col-end", "col-end", ValueKind::Any),
    rule("col", "col-span", ValueKind::Any),
    rule("row-span", "row-span", ValueKind::Any),
    rule("row-start", "row-start", ValueKind::Any),
    rule("row-end", "row-end", ValueKind::Any),
    rule("row", "row-span", ValueKind::Any),
    rule("auto-cols", "auto-cols", ValueKind::Any),
    rule("auto-rows", "auto-rows", ValueKind::Any),
    rule("gap-x", "gap-x", ValueKind::Length),
    rule("gap-y", "gap-y", ValueKind::Length),
    rule("gap", "gap", ValueKind::Length),
    rule("justify-items", "justify-items", ValueKind::Any),
    rule("justify-self", "justify-self", ValueKind::Any),
    rule(
        "justify",
        "justify-content",
        ValueKind::OneOf(&[
            "normal", "start", "end", "center", "between", "around", "evenly", "stretch",
        ]),
    ),
    rule(
        "content",
        "align-content",
        ValueKind::OneOf(&[
            "normal", "center", "start", "end", "between", "around", "evenly", "baseline",
            "stretch",
        ]),
    ),
    rule(
        "items",
        "align-items",
        ValueKind::OneOf(&["start", "end", "center", "baseline", "stretch"]),
    ),
    rule(
        "self",
        "align-self",
        ValueKind::OneOf(&["auto", "start", "end", "center", "stretch", "baseline"]),
    ),
    rule("place-content", "place-content", ValueKind::Any),
    rule("place-items", "place-items", ValueKind::Any),
    rule("place-self", "place-self", ValueKind::Any),
    // spacing
    rule("p", "p", ValueKind::Length),
    rule("px", "px", ValueKind::Length),
    rule("py", "py", ValueKind::Length),
    rule("ps", "ps", ValueKind::Length),
    rule("pe", "pe", ValueKind::Length),
    rule("pt", "pt", ValueKind::Length),
    rule("pr", "pr", ValueKind::Length),
    rule("pb", "pb", ValueKind::Length),
    rule("pl", "pl", ValueKind::Length),
    rule("m", "m", ValueKind::Length),
    rule("mx", "mx", ValueKind::Length),
    rule("my", "my", ValueKind::Length),
    rule("ms", "ms", ValueKind::Length),
    rule("me", "me", ValueKind::Length),
    rule("mt", "mt", ValueKind::Length),
    rule("mr", "mr", ValueKind::Length),
    rule("mb", "mb", ValueKind::Length),
    rule("ml", "ml", ValueKind::Length),
    rule("space-x", "space-x", ValueKind::Length),
    rule("space-y", "space-y", ValueKind::Length),
    // sizing
    rule("size", "size", ValueKind::Length),
    rule("w", "w", ValueKind::Length),
    rule("min-w", "min-w", ValueKind::Length),
    rule("max-w", "max-w", ValueKind::Any),
    rule("h", "h", ValueKind::Length),
    rule("min-h", "min-h", ValueKind::Length),
    rule("max-h", "max-h", ValueKind::Length),
    // typography
    rule("text", "font-size", ValueKind::TShirt),
    rule(
        "text",
        "text-align",
        ValueKind::OneOf(&["left", "center", "right", "justify", "start", "end"]),
    ),
    rule(
        "text",
        "text-wrap",
        ValueKind::OneOf(&["wrap", "nowrap", "balance", "pretty"]),
    ),
    rule("text", "text-color", ValueKind::Any),
    rule(
        "font",
        "font-weight",
        ValueKind::OneOf(&[
            "thin",
            "extralight",
            "light",
            "normal",
            "medium",
            "semibold",
            "bold",
            "extrabold",
            "black",
        ]),
    ),
    rule("font", "font-family", ValueKind::Any),
    rule("tracking", "tracking", ValueKind::Any),
    rule("leading", "leading", ValueKind::Any),
    rule("line-clamp", "line-clamp", ValueKind::Any),
    rule(
        "list",
        "list-style-position",
        ValueKind::OneOf(&["inside", "outside"]),
    ),
    rule("list-image", "list-image", ValueKind::Any),
    rule("list", "list-style-type", ValueKind::Any),
    rule("underline-offset", "underline-offset", ValueKind::Any),
    rule(
        "decoration",
        "decoration-style",
        ValueKind::OneOf(&["solid", "double", "dotted", "dashed", "wavy"]),
    ),
    rule("decoration", "decoration-thickness", ValueKind::Width),
    rule("decoration", "decoration-color", ValueKind::Any),
    rule("indent", "indent", ValueKind::Length),
    rule("align", "vertical-align", ValueKind::Any),
    rule("whitespace", "whitespace", ValueKind::Any),
    rule("break-after", "break-after", ValueKind::Any),
    rule("break-before", "break-before", ValueKind::Any),
    rule("break-inside", "break-inside", ValueKind::Any),
    rule(
        "break",
        "word-break",
        ValueKind::OneOf(&["normal", "words", "all", "keep"]),
    ),
    // backgrounds
    rule(
        "bg",
        "bg-attachment",
        ValueKind::OneOf(&["fixed", "local", "scroll"]),
    ),
    rule("bg-clip", "bg-clip", ValueKind::Any),
    rule("bg-origin", "bg-origin", ValueKind::Any),
    rule(
        "bg",
        "bg-repeat",
        ValueKind::OneOf(&[
            "repeat",
            "no-repeat",
            "repeat-x",
            "repeat-y",
            "repeat-round",
            "repeat-space",
        ]),
    ),
    rule("bg", "bg-size", ValueKind::OneOf(&["auto", "cover", "contain"])),
    rule(
        "bg",
        "bg-position",
        ValueKind::OneOf(&[
            "bottom",
            "center",
            "left",
            "left-bottom",
            "left-top",
            "right",
            "right-bottom",
            "right-top",
            "top",
        ]),
    ),
    rule("bg", "bg-image", ValueKind::OneOf(&["none"])),
    rule("bg-gradient-to", "bg-image", ValueKind::Any),
    rule("bg-opacity", "bg-opacity", ValueKind::Number),
    rule("bg", "bg-color", ValueKind::Any),
    rule("from", "gradient-from-color", ValueKind::Any),
    rule("via", "gradient-via-color", ValueKind::Any),
    rule("to", "gradient-to-color", ValueKind::Any),
    // borders
    rule("rounded-ss", "rounded-ss", ValueKind::Radius),
    rule("rounded-se", "rounded-se", ValueKind::Radius),
    rule("rounded-ee", "rounded-ee", ValueKind::Radius),
    rule("rounded-es", "rounded-es", ValueKind::Radius),
    rule("rounded-tl", "rounded-tl", ValueKind::Radius),
    rule("rounded-tr", "rounded-tr", ValueKind::Radius),
    rule("rounded-br", "rounded-br", ValueKind::Radius),
    rule("rounded-bl", "rounded-bl", ValueKind::Radius),
    rule("rounded-s", "rounded-s", ValueKind::Radius),
    rule("rounded-e", "rounded-e", ValueKind::Radius),
    rule("rounded-t", "rounded-t", ValueKind::Radius),
    rule("rounded-r", "rounded-r", ValueKind::Radius),
    rule("rounded-b", "rounded-b", ValueKind::Radius),
    rule("rounded-l", "rounded-l", ValueKind::Radius),
    rule("rounded", "rounded", ValueKind::Radius),
    rule("border-spacing", "border-spacing", ValueKind::Length),
    rule("border-x", "border-w-x", ValueKind::Width),
    rule("border-x", "border-x-color", ValueKind::Any),
    rule("border-y", "border-w-y", ValueKind::Width),
    rule("border-y", "border-y-color", ValueKind::Any),
    rule("border-s", "border-w-s", ValueKind::Width),
    rule("border-s", "border-s-color", ValueKind::Any),
    rule("border-e", "border-w-e", ValueKind::Width),
    rule("border-e", "border-e-color", ValueKind::Any),
    rule("border-t", "border-w-t", ValueKind::Width),
    rule("border-t", "border-t-color", ValueKind::Any),
    rule("border-r", "border-w-r", ValueKind::Width),
    rule("border-r", "border-r-color", ValueKind::Any),
    rule("border-b", "border-w-b", ValueKind::Width),
    rule("border-b", "border-b-color", ValueKind::Any),
    rule("border-l", "border-w-l", ValueKind::Width),
    rule("border-l", "border-l-color", ValueKind::Any),
    rule("border", "border-w", ValueKind::Width),
    rule(
        "border",
        "border-style",
        ValueKind::OneOf(&["solid", "dashed", "dotted", "double", "hidden", "none"]),
    ),
    rule("border", "border-color", ValueKind::Any),
    rule("divide-x", "divide-x", ValueKind::Width),
    rule("divide-y", "divide-y", ValueKind::Width),
    rule(
        "divide",
        "divide-style",
        ValueKind::OneOf(&["solid", "dashed", "dotted", "double", "none"]),
    ),
    rule("divide", "divide-color", ValueKind::Any),
    rule("outline-offset", "outline-offset", ValueKind::Any),
    rule(
        "outline",
        "outline-style",
        ValueKind::OneOf(&["", "none", "dashed", "dotted", "double"]),
    ),
    rule("outline", "outline-w", ValueKind::Number),
    rule("outline", "outline-color", ValueKind::Any),
    rule("ring-offset", "ring-offset-w", ValueKind::Number),
    rule("ring-offset", "ring-offset-color", ValueKind::Any),
    rule("ring", "ring-w", ValueKind::Width),
    rule("ring", "ring-color", ValueKind::Any),
    // effects
    rule("shadow", "shadow", ValueKind::Shadow),
    rule("shadow", "shadow-color", ValueKind::Any),
    rule("opacity", "opacity", ValueKind::Number),
    rule("mix-blend", "mix-blend", ValueKind::Any),
    rule("backdrop-blur", "backdrop-blur", ValueKind::Radius),
    rule("blur", "blur", ValueKind::Radius),
    // transitions and animation
    rule(
        "transition",
        "transition",
        ValueKind::OneOf(&["", "none", "all", "colors", "opacity", "shadow", "transform"]),
    ),
    rule("duration", "duration", ValueKind::Number),
    rule("ease", "ease", ValueKind::Any),
    rule("delay", "delay", ValueKind::Number),
    rule("animate", "animate", ValueKind::Any),
    // transforms
    rule("scale-x", "scale-x", ValueKind::Number),
    rule("scale-y", "scale-y", ValueKind::Number),
    rule("scale", "scale", ValueKind::Number),
    rule("rotate", "rotate", ValueKind::Any),
    rule("translate-x", "translate-x", ValueKind::Length),
    rule("translate-y", "translate-y", ValueKind::Length),
    rule("skew-x", "skew-x", ValueKind::Any),
    rule("skew-y", "skew-y", ValueKind::Any),
    rule("origin", "origin", ValueKind::Any),
    // interactivity
    rule("cursor", "cursor", ValueKind::Any),
    rule("pointer-events", "pointer-events", ValueKind::Any),
    rule("select", "select", ValueKind::Any),
    rule("resize", "resize", ValueKind::OneOf(&["", "none", "x", "y"])),
    rule(
        "touch",
        "touch-x",
        ValueKind::OneOf(&["pan-x", "pan-left", "pan-right"]),
    ),
    rule(
        "touch",
        "touch-y",
        ValueKind::OneOf(&["pan-y", "pan-up", "pan-down"]),
    ),
    rule("touch", "touch-pz", ValueKind::OneOf(&["pinch-zoom"])),
    rule("touch", "touch", ValueKind::Any),
    rule("appearance", "appearance", ValueKind::Any),
    rule("caret", "caret-color", ValueKind::Any),
    rule("accent", "accent-color", ValueKind::Any),
    // svg
    rule("fill", "fill-color", ValueKind::Any),
    rule("stroke", "stroke-w", ValueKind::Number),
    rule("stroke", "stroke-color", ValueKind::Any),
];

/// Groups a class overrides in addition to its own.
const CONFLICTS: &[(&str, &[&str])] = &[
    (
        "inset",
        &[
            "inset-x", "inset-y", "start", "end", "top", "right", "bottom", "left",
        ],
    ),
    ("inset-x", &["right", "left"]),
    ("inset-y", &["top", "bottom"]),
    ("overflow", &["overflow-x", "overflow-y"]),
    ("gap", &["gap-x", "gap-y"]),
    ("col-span", &["col-start", "col-end"]),
    ("row-span", &["row-start", "row-end"]),
    ("p", &["px", "py", "ps", "pe", "pt", "pr", "pb", "pl"]),
    ("px", &["pr", "pl"]),
    ("py", &["pt", "pb"]),
    ("m", &["mx", "my", "ms", "me", "mt", "mr", "mb", "ml"]),
    ("mx", &["mr", "ml"]),
    ("my", &["mt", "mb"]),
    ("size", &["w", "h"]),
    ("font-size", &["leading"]),
    (
        "rounded",
        &[
            "rounded-s",
            "rounded-e",
            "rounded-t",
            "rounded-r",
            "rounded-b",
            "rounded-l",
            "rounded-ss",
            "rounded-se",
            "rounded-ee",
            "rounded-es",
            "rounded-tl",
            "rounded-tr",
            "rounded-br",
            "rounded-bl",
        ],
    ),
    ("rounded-s", &["rounded-ss", "rounded-es"]),
    ("rounded-e", &["rounded-se", "rounded-ee"]),
    ("rounded-t", &["rounded-tl", "rounded-tr"]),
    ("rounded-r", &["rounded-tr", "rounded-br"]),
    ("rounded-b", &["rounded-br", "rounded-bl"]),
    ("rounded-l", &["rounded-tl", "rounded-bl"]),
    (
        "border-w",
        &[
            "border-w-x",
            "border-w-y",
            "border-w-s",
            "border-w-e",
            "border-w-t",
            "border-w-r",
            "border-w-b",
            "border-w-l",
        ],
    ),
    ("border-w-x", &["border-w-r", "border-w-l"]),
    ("border-w-y", &["border-w-t", "border-w-b"]),
    (
        "border-color",
        &[
            "border-x-color",
            "border-y-color",
            "border-s-color",
            "border-e-color",
            "border-t-color",
            "border-r-color",
            "border-b-color",
            "border-l-color",
        ],
    ),
    ("border-x-color", &["border-r-color", "border-l-color"]),
    ("border-y-color", &["border-t-color", "border-b-color"]),
    ("scale", &["scale-x", "scale-y"]),
    ("touch", &["touch-x", "touch-y", "touch-pz"]),
];

/// A class name split into variant modifiers, important marker, and base utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct ParsedClass<'a> {
    pub(crate) modifiers: Vec<&'a str>,
    pub(crate) important: bool,
    pub(crate) negative: bool,
    /// Base utility without the important marker or negative sign.
    pub(crate) base: &'a str,
}

impl<'a> ParsedClass<'a> {
    pub(crate) fn parse(token: &'a str) -> Self {
        let mut modifiers = Vec::new();
        let mut depth = 0i32;
        let mut start = 0;
        for (index, ch) in token.char_indices() {
            match ch {
                '[' | '(' => depth += 1,
                ']' | ')' => depth -= 1,
                ':' if depth == 0 => {
                    modifiers.push(&token[start..index]);
                    start = index + 1;
                }
                _ => {}
            }
        }

        let mut base = &token[start..];
        let mut important = false;
        if let Some(rest) = base.strip_prefix('!') {
            base = rest;
            important = true;
        } else if let Some(rest) = base.strip_suffix('!') {
            base = rest;
            important = true;
        }

        let negative = base.len() > 1 && base.starts_with('-');
        if negative {
            base = &base[1..];
        }

        Self {
            modifiers,
            important,
            negative,
            base,
        }
    }

    /// Conflict-key prefix shared by every class with the same modifiers and importance.
    ///
    /// Plain modifiers commute, so runs of them are sorted. Arbitrary variants (`[&>svg]`) are
    /// order-sensitive and stay where they are.
    pub(crate) fn scope(&self) -> String {
        let mut ordered: Vec<&str> = Vec::with_capacity(self.modifiers.len());
        let mut run: Vec<&str> = Vec::new();
        for &modifier in &self.modifiers {
            if modifier.starts_with('[') {
                run.sort_unstable();
                ordered.append(&mut run);
                ordered.push(modifier);
            } else {
                run.push(modifier);
            }
        }
        run.sort_unstable();
        ordered.append(&mut run);

        let important = if self.important { "!" } else { "" };
        format!("{}|{important}|", ordered.join(":"))
    }
}

/// Result of classifying one base utility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Classified<'a> {
    /// Utility group identifier.
    pub group: Cow<'static, str>,
    /// Value after the matched prefix; empty for exact and bare classes.
    pub value: &'a str,
}

impl Classified<'_> {
    /// Whether the class writes a color.
    pub fn is_color(&self) -> bool {
        self.group.ends_with("-color")
    }
}

/// Classifies a base utility (no modifiers, no important marker, no sign) into a built-in group.
pub(crate) fn classify_builtin(base: &str) -> Option<Classified<'_>> {
    if let Some((_, group)) = EXACT.iter().find(|(class, _)| *class == base) {
        return Some(Classified {
            group: Cow::Borrowed(*group),
            value: "",
        });
    }

    if let Some(property) = arbitrary_property(base) {
        return Some(Classified {
            group: Cow::Owned(format!("arbitrary-{property}")),
            value: base,
        });
    }

    RULES.iter().find_map(|rule| {
        let value = prefixed_value(base, rule.prefix)?;
        accepts(rule.value, value).then_some(Classified {
            group: Cow::Borrowed(rule.group),
            value,
        })
    })
}

/// Built-in groups overridden by `group`.
pub(crate) fn builtin_conflicts(group: &str) -> &'static [&'static str] {
    CONFLICTS
        .iter()
        .find(|(owner, _)| *owner == group)
        .map(|(_, conflicts)| *conflicts)
        .unwrap_or(&[])
}

/// Returns the value after `prefix-`, or an empty value when `base` is exactly `prefix`.
pub(crate) fn prefixed_value<'a>(base: &'a str, prefix: &str) -> Option<&'a str> {
    let rest = base.strip_prefix(prefix)?;
    if rest.is_empty() {
        return Some(rest);
    }
    rest.strip_prefix('-').filter(|value| !value.is_empty())
}

fn arbitrary_property(base: &str) -> Option<&str> {
    let inner = base.strip_prefix('[')?.strip_suffix(']')?;
    let (property, value) = inner.split_once(':')?;
    (!property.is_empty() && !value.is_empty()).then_some(property)
}

fn accepts(kind: ValueKind, value: &str) -> bool {
    match kind {
        ValueKind::Any => !value.is_empty(),
        ValueKind::Length => {
            is_number(value)
                || is_fraction(value)
                || LENGTH_KEYWORDS.contains(&value)
                || is_arbitrary(value)
        }
        ValueKind::Number => is_number(value) || is_arbitrary_length(value),
        ValueKind::Width => {
            value.is_empty() || is_integer(value) || is_arbitrary_length(value)
        }
        ValueKind::TShirt => {
            let size = value.split_once('/').map_or(value, |(size, _)| size);
            is_tshirt(size) || is_arbitrary_length(size)
        }
        ValueKind::Radius => {
            value.is_empty()
                || value == "none"
                || value == "full"
                || is_tshirt(value)
                || is_arbitrary(value)
        }
        ValueKind::Shadow => {
            value.is_empty()
                || value == "none"
                || value == "inner"
                || is_tshirt(value)
                || is_arbitrary_shadow(value)
        }
        ValueKind::OneOf(keywords) => keywords.contains(&value),
    }
}

pub(crate) fn is_tshirt(value: &str) -> bool {
    if value == "base" {
        return true;
    }
    ["xs", "sm", "md", "lg", "xl"].iter().any(|suffix| {
        value
            .strip_suffix(suffix)
            .is_some_and(|scale| scale.is_empty() || is_number(scale))
    })
}

fn is_integer(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|byte| byte.is_ascii_digit())
}

fn is_number(value: &str) -> bool {
    !value.is_empty()
        && value.bytes().all(|byte| byte.is_ascii_digit() || byte == b'.')
        && value.parse::<f64>().is_ok()
}

fn is_fraction(value: &str) -> bool {
    value
        .split_once('/')
        .is_some_and(|(numerator, denominator)| is_number(numerator) && is_number(denominator))
}

fn is_arbitrary(value: &str) -> bool {
    value.len() > 2 && value.starts_with('[') && value.ends_with(']')
}

fn arbitrary_inner(value: &str) -> Option<&str> {
    value.strip_prefix('[')?.strip_suffix(']')
}

fn is_arbitrary_length(value: &str) -> bool {
    let Some(inner) = arbitrary_inner(value) else {
        return false;
    };
    if inner.starts_with("length:") {
        return true;
    }
    if ["calc(", "min(", "max(", "clamp("]
        .iter()
        .any(|func| inner.starts_with(func))
    {
        return true;
    }
    if is_number(inner) {
        return true;
    }
    LENGTH_UNITS.iter().any(|unit| {
        inner
            .strip_suffix(unit)
            .is_some_and(|number| is_number(number.trim_start_matches('-')))
    })
}

fn is_arbitrary_shadow(value: &str) -> bool {
    arbitrary_inner(value).is_some_and(|inner| {
        inner.starts_with("shadow:")
            || inner
                .split('_')
                .next()
                .is_some_and(|first| first.starts_with(|ch: char| ch.is_ascii_digit()))
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn group(base: &str) -> Option<String> {
        classify_builtin(base).map(|classified| classified.group.into_owned())
    }

    #[test]
    fn text_prefix_is_split_by_value_shape() {
        assert_eq!(group("text-sm").as_deref(), Some("font-size"));
        assert_eq!(group("text-2xl").as_deref(), Some("font-size"));
        assert_eq!(group("text-sm/6").as_deref(), Some("font-size"));
        assert_eq!(group("text-[13px]").as_deref(), Some("font-size"));
        assert_eq!(group("text-center").as_deref(), Some("text-align"));
        assert_eq!(group("text-base-on-solid").as_deref(), Some("text-color"));
        assert_eq!(group("text-[#123456]").as_deref(), Some("text-color"));
    }

    #[test]
    fn border_prefix_distinguishes_width_style_and_color() {
        assert_eq!(group("border").as_deref(), Some("border-w"));
        assert_eq!(group("border-2").as_deref(), Some("border-w"));
        assert_eq!(group("border-dashed").as_deref(), Some("border-style"));
        assert_eq!(group("border-transparent").as_deref(), Some("border-color"));
        assert_eq!(group("border-t").as_deref(), Some("border-w-t"));
        assert_eq!(group("border-b-input").as_deref(), Some("border-b-color"));
    }

    #[test]
    fn ring_offset_is_not_mistaken_for_ring_color() {
        assert_eq!(group("ring-offset-2").as_deref(), Some("ring-offset-w"));
        assert_eq!(
            group("ring-offset-background").as_deref(),
            Some("ring-offset-color")
        );
        assert_eq!(group("ring").as_deref(), Some("ring-w"));
        assert_eq!(group("ring-2").as_deref(), Some("ring-w"));
        assert_eq!(group("ring-ring").as_deref(), Some("ring-color"));
    }

    #[test]
    fn grid_placement_splits_span_from_start_and_end() {
        assert_eq!(group("col-span-2").as_deref(), Some("col-span"));
        assert_eq!(group("col-auto").as_deref(), Some("col-span"));
        assert_eq!(group("col-start-1").as_deref(), Some("col-start"));
        assert_eq!(group("col-end-3").as_deref(), Some("col-end"));
        assert_eq!(group("row-span-full").as_deref(), Some("row-span"));
        assert_eq!(group("row-start-2").as_deref(), Some("row-start"));
        assert_eq!(builtin_conflicts("col-span"), &["col-start", "col-end"]);
        assert!(builtin_conflicts("col-start").is_empty());
    }

    #[test]
    fn list_and_break_prefixes_cover_separate_properties() {
        assert_eq!(group("list-disc").as_deref(), Some("list-style-type"));
        assert_eq!(group("list-none").as_deref(), Some("list-style-type"));
        assert_eq!(group("list-inside").as_deref(), Some("list-style-position"));
        assert_eq!(group("list-image-none").as_deref(), Some("list-image"));
        assert_eq!(group("break-words").as_deref(), Some("word-break"));
        assert_eq!(group("break-all").as_deref(), Some("word-break"));
        assert_eq!(group("break-after-page").as_deref(), Some("break-after"));
        assert_eq!(group("break-before-column").as_deref(), Some("break-before"));
        assert_eq!(group("break-inside-avoid").as_deref(), Some("break-inside"));
    }

    #[test]
    fn text_wrap_and_touch_action_keywords_have_their_own_groups() {
        assert_eq!(group("text-balance").as_deref(), Some("text-wrap"));
        assert_eq!(group("text-nowrap").as_deref(), Some("text-wrap"));
        assert_eq!(group("touch-pan-x").as_deref(), Some("touch-x"));
        assert_eq!(group("touch-pan-down").as_deref(), Some("touch-y"));
        assert_eq!(group("touch-none").as_deref(), Some("touch"));
    }

    #[test]
    fn exact_classes_win_over_prefix_rules() {
        assert_eq!(group("flex").as_deref(), Some("display"));
        assert_eq!(group("flex-col").as_deref(), Some("flex-direction"));
        assert_eq!(group("text-ellipsis").as_deref(), Some("text-overflow"));
        assert_eq!(group("border-collapse").as_deref(), Some("border-collapse"));
    }

    #[test]
    fn arbitrary_properties_group_by_property_name() {
        assert_eq!(
            group("[mask-type:luminance]").as_deref(),
            Some("arbitrary-mask-type")
        );
        assert_eq!(group("[mask-type]"), None);
    }

    #[test]
    fn unknown_utilities_are_unclassified() {
        assert_eq!(group("peer"), None);
        assert_eq!(group("fade-in-0"), None);
        assert_eq!(group("w"), None);
    }

    #[test]
    fn parse_splits_modifiers_outside_brackets() {
        let parsed = ParsedClass::parse("data-[state=open]:hover:!bg-red-500");
        assert_eq!(parsed.modifiers, vec!["data-[state=open]", "hover"]);
        assert!(parsed.important);
        assert!(!parsed.negative);
        assert_eq!(parsed.base, "bg-red-500");

        let arbitrary = ParsedClass::parse("[&[data-state=open]>svg]:rotate-180");
        assert_eq!(arbitrary.modifiers, vec!["[&[data-state=open]>svg]"]);
        assert_eq!(arbitrary.base, "rotate-180");
    }

    #[test]
    fn parse_detects_negative_values_and_trailing_important() {
        let parsed = ParsedClass::parse("-translate-x-1/2!");
        assert!(parsed.negative);
        assert!(parsed.important);
        assert_eq!(parsed.base, "translate-x-1/2");
    }

    #[test]
    fn scope_sorts_plain_modifiers_but_keeps_arbitrary_positions() {
        assert_eq!(
            ParsedClass::parse("hover:focus:p-2").scope(),
            ParsedClass::parse("focus:hover:p-2").scope()
        );
        assert_ne!(
            ParsedClass::parse("[&>svg]:hover:p-2").scope(),
            ParsedClass::parse("hover:[&>svg]:p-2").scope()
        );
    }
}

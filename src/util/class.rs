//! Style-token merging for Tailwind-style class strings.
//!
//! DESIGN
//! ======
//! Components accept an optional caller `class` and merge it over their own
//! base tokens. Each token maps to a conflict key (variant prefix + utility
//! family); when two tokens share a key, the later one wins. Tokens outside
//! the known families only collapse with exact duplicates.

use std::collections::HashSet;

#[cfg(test)]
#[path = "class_test.rs"]
mod class_test;

/// Prefix table mapping a utility prefix to its conflict family.
///
/// Longer prefixes must precede shorter ones that share a stem.
const PREFIX_FAMILIES: &[(&str, &str)] = &[
    ("px-", "px"),
    ("py-", "py"),
    ("pt-", "pt"),
    ("pr-", "pr"),
    ("pb-", "pb"),
    ("pl-", "pl"),
    ("p-", "p"),
    ("mx-", "mx"),
    ("my-", "my"),
    ("mt-", "mt"),
    ("mr-", "mr"),
    ("mb-", "mb"),
    ("ml-", "ml"),
    ("m-", "m"),
    ("min-w-", "min-w"),
    ("max-w-", "max-w"),
    ("min-h-", "min-h"),
    ("max-h-", "max-h"),
    ("w-", "w"),
    ("h-", "h"),
    ("size-", "size"),
    ("gap-x-", "gap-x"),
    ("gap-y-", "gap-y"),
    ("gap-", "gap"),
    ("space-x-", "space-x"),
    ("space-y-", "space-y"),
    ("grid-cols-", "grid-cols"),
    ("grid-rows-", "grid-rows"),
    ("items-", "align-items"),
    ("justify-items-", "justify-items"),
    ("justify-self-", "justify-self"),
    ("justify-", "justify-content"),
    ("opacity-", "opacity"),
];

/// Gradient stop prefixes with their color and position families.
const GRADIENT_STOPS: &[(&str, &str, &str)] = &[
    ("from-", "gradient-from", "gradient-from-position"),
    ("via-", "gradient-via", "gradient-via-position"),
    ("to-", "gradient-to", "gradient-to-position"),
];

/// Keyword families under `bg-`; anything else is a background color.
const BG_KEYWORDS: &[(&[&str], &str)] = &[
    (
        &["bottom", "center", "left", "left-bottom", "left-top", "right", "right-bottom", "right-top", "top"],
        "bg-position",
    ),
    (&["auto", "cover", "contain"], "bg-size"),
    (&["repeat", "no-repeat", "repeat-x", "repeat-y", "repeat-round", "repeat-space"], "bg-repeat"),
    (&["fixed", "local", "scroll"], "bg-attachment"),
    (&["none"], "bg-image"),
];

/// Prefixed families under `bg-`, checked before [`BG_KEYWORDS`].
const BG_PREFIXES: &[(&str, &str)] = &[
    ("gradient-to-", "bg-image"),
    ("linear-to-", "bg-image"),
    ("clip-", "bg-clip"),
    ("origin-", "bg-origin"),
    ("blend-", "bg-blend"),
];

/// Keyword families under `text-`; anything else is a text color.
const TEXT_KEYWORDS: &[(&[&str], &str)] = &[
    (
        &["xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl"],
        "font-size",
    ),
    (&["left", "center", "right", "justify", "start", "end"], "text-align"),
    (&["wrap", "nowrap", "balance", "pretty"], "text-wrap"),
    (&["ellipsis", "clip"], "text-overflow"),
];

const SHADOW_SIZES: &[&str] = &["2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const DISPLAY_TOKENS: &[&str] = &[
    "block",
    "inline-block",
    "inline",
    "flex",
    "inline-flex",
    "grid",
    "inline-grid",
    "contents",
    "hidden",
];

const FONT_WEIGHTS: &[&str] = &[
    "thin",
    "extralight",
    "light",
    "normal",
    "medium",
    "semibold",
    "bold",
    "extrabold",
    "black",
];

const ROUNDED_SIDES: &[&str] = &["s", "e", "t", "r", "b", "l", "ss", "se", "ee", "es", "tl", "tr", "br", "bl"];

/// Merge class-token groups into one normalized string.
///
/// `None` and blank groups are skipped. Later tokens override earlier tokens
/// of the same family; survivors keep the order of their final occurrence.
pub fn cn(parts: &[Option<&str>]) -> String {
    let tokens: Vec<&str> = parts
        .iter()
        .flatten()
        .flat_map(|part| part.split_ascii_whitespace())
        .collect();

    let mut seen = HashSet::new();
    let mut kept = Vec::with_capacity(tokens.len());
    for token in tokens.iter().rev() {
        if seen.insert(conflict_key(token)) {
            kept.push(*token);
        }
    }
    kept.reverse();
    kept.join(" ")
}

/// Utility family for a single token with variants already removed.
///
/// Returns `None` for tokens that only conflict with themselves.
pub fn class_family(utility: &str) -> Option<&'static str> {
    let utility = utility.strip_prefix('!').unwrap_or(utility);
    let utility = utility.strip_prefix('-').unwrap_or(utility);

    if DISPLAY_TOKENS.contains(&utility) {
        return Some("display");
    }
    if utility == "rounded" {
        return Some("rounded");
    }
    if let Some(rest) = utility.strip_prefix("rounded-") {
        let side = rest.split('-').next().unwrap_or_default();
        if ROUNDED_SIDES.contains(&side) {
            return None;
        }
        return Some("rounded");
    }
    if let Some(rest) = utility.strip_prefix("text-") {
        return Some(keyword_family(rest, TEXT_KEYWORDS).unwrap_or("text-color"));
    }
    if let Some(rest) = utility.strip_prefix("bg-") {
        let prefixed = BG_PREFIXES
            .iter()
            .find(|(prefix, _)| rest.starts_with(prefix))
            .map(|(_, family)| *family);
        return Some(prefixed.or_else(|| keyword_family(rest, BG_KEYWORDS)).unwrap_or("bg-color"));
    }
    if utility == "shadow" {
        return Some("shadow");
    }
    if let Some(rest) = utility.strip_prefix("shadow-") {
        if SHADOW_SIZES.contains(&rest) || rest.starts_with('[') {
            return Some("shadow");
        }
        return Some("shadow-color");
    }
    for &(prefix, color, position) in GRADIENT_STOPS {
        if let Some(rest) = utility.strip_prefix(prefix) {
            let is_position = rest.trim_end_matches(']').ends_with('%');
            return Some(if is_position { position } else { color });
        }
    }
    if let Some(rest) = utility.strip_prefix("font-") {
        if FONT_WEIGHTS.contains(&rest) {
            return Some("font-weight");
        }
        return Some("font-family");
    }
    PREFIX_FAMILIES
        .iter()
        .find(|(prefix, _)| utility.starts_with(prefix))
        .map(|(_, family)| *family)
}

fn keyword_family(value: &str, table: &[(&[&str], &'static str)]) -> Option<&'static str> {
    table
        .iter()
        .find(|(keywords, _)| keywords.contains(&value))
        .map(|(_, family)| *family)
}

fn conflict_key(token: &str) -> String {
    let (variants, utility) = split_variants(token);
    let important = if utility.starts_with('!') { "!" } else { "" };
    match class_family(utility) {
        Some(family) => format!("{variants}{important}{family}"),
        None => token.to_owned(),
    }
}

/// Split `hover:dark:bg-red-500` into `("hover:dark:", "bg-red-500")`.
///
/// Colons inside arbitrary values (`bg-[url(a:b)]`) are not variant separators.
pub(crate) fn split_variants(token: &str) -> (&str, &str) {
    let mut depth = 0_usize;
    let mut split = 0;
    for (idx, ch) in token.char_indices() {
        match ch {
            '[' | '(' => depth += 1,
            ']' | ')' => depth = depth.saturating_sub(1),
            ':' if depth == 0 => split = idx + 1,
            _ => {}
        }
    }
    token.split_at(split)
}

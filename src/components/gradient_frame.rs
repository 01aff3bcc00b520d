//! Gradient-bordered frame around arbitrary content.
//!
//! DESIGN
//! ======
//! The visible "stroke" is not a CSS border. The outer box paints a diagonal
//! gradient with `p-px` padding; the inner box matches its rounding and paints
//! an opaque background, so only the one-pixel margin shows the gradient.
//! Children are embedded as-is inside the inner box.
//!
//! The inner radius is derived from the outer radius and stroke width, so
//! caller tokens that touch rounding or padding on the outer layer are
//! dropped; every other caller token is merged last.

use leptos::prelude::*;

use crate::util::class::{class_family, cn, split_variants};

#[cfg(test)]
#[path = "gradient_frame_test.rs"]
mod gradient_frame_test;

/// Fixed tokens for the outer gradient layer.
pub const FRAME_OUTER_CLASS: &str =
    "rounded-xl bg-gradient-to-br from-fuchsia-500 via-violet-500 to-sky-400 p-px";

/// Fixed tokens for the inner occluding layer.
///
/// Inner radius is the outer radius minus the stroke width.
pub const FRAME_INNER_CLASS: &str = "h-full w-full rounded-[calc(0.75rem-1px)] bg-background";

const PADDING_FAMILIES: &[&str] = &["p", "px", "py", "pt", "pr", "pb", "pl"];

/// Outer-layer tokens with caller tokens merged last.
///
/// Rounding and padding tokens from the caller are ignored; see module docs.
pub fn frame_class(extra: Option<&str>) -> String {
    let caller = extra.map(|extra| {
        extra
            .split_ascii_whitespace()
            .filter(|token| !sets_stroke_geometry(token))
            .collect::<Vec<_>>()
            .join(" ")
    });
    cn(&[Some(FRAME_OUTER_CLASS), caller.as_deref()])
}

/// True for rounding or padding tokens, under any variant.
fn sets_stroke_geometry(token: &str) -> bool {
    let (_, utility) = split_variants(token);
    if utility.trim_start_matches(['!', '-']).starts_with("rounded") {
        return true;
    }
    class_family(utility).is_some_and(|family| PADDING_FAMILIES.contains(&family))
}

/// Wraps `children` in a gradient frame.
#[component]
pub fn GradientFrame(
    #[prop(optional, into)] class: Option<String>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    let outer = frame_class(class.as_deref());

    view! {
        <div class=outer data-slot="gradient-frame">
            <div class=FRAME_INNER_CLASS>{children.map(|children| children())}</div>
        </div>
    }
}

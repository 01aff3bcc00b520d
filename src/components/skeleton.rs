//! Inert placeholder block shown while real content is pending.

use leptos::prelude::*;

use crate::util::class::cn;

#[cfg(test)]
#[path = "skeleton_test.rs"]
mod skeleton_test;

/// Base tokens every placeholder block carries.
pub const SKELETON_BASE_CLASS: &str = "animate-pulse rounded-md bg-muted";

/// Merge caller size/shape tokens over the skeleton base.
pub fn skeleton_class(extra: Option<&str>) -> String {
    cn(&[Some(SKELETON_BASE_CLASS), extra])
}

/// A single pulsing block sized entirely by `class`.
#[component]
pub fn Skeleton(#[prop(optional, into)] class: Option<String>) -> impl IntoView {
    let class = skeleton_class(class.as_deref());

    view! { <div class=class data-slot="skeleton" aria-hidden="true"></div> }
}

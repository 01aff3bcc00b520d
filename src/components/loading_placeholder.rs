//! Fixed skeleton layout shown while a content page loads.
//!
//! SYSTEM CONTEXT
//! ==============
//! The layout mimics an avatar with two lines of text, a media block, and a
//! three-card grid. Shapes and counts are constants; the component takes no
//! input and renders the same structure on every call.

use leptos::prelude::*;

use crate::components::skeleton::Skeleton;

#[cfg(test)]
#[path = "loading_placeholder_test.rs"]
mod loading_placeholder_test;

/// Shape of a single placeholder block.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BlockShape {
    Avatar,
    Line,
    ShortLine,
    Media,
    Tile,
}

impl BlockShape {
    /// Size/shape tokens passed to [`Skeleton`].
    pub const fn class(self) -> &'static str {
        match self {
            Self::Avatar => "h-12 w-12 rounded-full",
            Self::Line => "h-4 w-[250px]",
            Self::ShortLine => "h-4 w-[200px]",
            Self::Media => "h-[125px] w-full rounded-xl",
            Self::Tile => "h-24 w-full",
        }
    }
}

/// Circular block leading the header row.
pub const HEADER_AVATAR: BlockShape = BlockShape::Avatar;
/// Text lines stacked beside the avatar.
pub const HEADER_LINES: [BlockShape; 2] = [BlockShape::Line, BlockShape::ShortLine];
pub const MEDIA_BLOCK: BlockShape = BlockShape::Media;
/// Equal tiles in the three-column grid.
pub const TILE_ROW: [BlockShape; 3] = [BlockShape::Tile; 3];

/// Total number of skeleton blocks the layout renders.
pub const BLOCK_COUNT: usize = 1 + HEADER_LINES.len() + 1 + TILE_ROW.len();

#[component]
pub fn LoadingPlaceholder() -> impl IntoView {
    view! {
        <div class="flex flex-col gap-6" data-slot="loading-placeholder" aria-busy="true">
            <div class="flex items-center gap-4">
                <Skeleton class=HEADER_AVATAR.class()/>
                <div class="space-y-2">
                    {HEADER_LINES.into_iter().map(|shape| view! { <Skeleton class=shape.class()/> }).collect_view()}
                </div>
            </div>
            <Skeleton class=MEDIA_BLOCK.class()/>
            <div class="grid grid-cols-3 gap-4">
                {TILE_ROW.into_iter().map(|shape| view! { <Skeleton class=shape.class()/> }).collect_view()}
            </div>
        </div>
    }
}

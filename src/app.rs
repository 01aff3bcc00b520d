//! Showcase root rendering every component on one static view.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::components::{gradient_frame::GradientFrame, loading_placeholder::LoadingPlaceholder};
use crate::pages::invite::InvitePage;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// No router: components are laid out side by side for visual review.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    view! {
        <Stylesheet id="leptos" href="/pkg/ui-primitives.css"/>
        <Title text="UI primitives"/>

        <main class="mx-auto flex max-w-3xl flex-col gap-8 p-8">
            <GradientFrame class="shadow-lg">
                <InvitePage/>
            </GradientFrame>
            <GradientFrame>
                <div class="p-6">
                    <LoadingPlaceholder/>
                </div>
            </GradientFrame>
        </main>
    }
}

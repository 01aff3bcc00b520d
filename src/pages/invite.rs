//! Placeholder page for inviting users. Content is static Danish copy.

use leptos::prelude::*;

#[cfg(test)]
#[path = "invite_test.rs"]
mod invite_test;

pub const INVITE_HEADING: &str = "Inviter bruger";
pub const INVITE_BODY: &str =
    "Her kan du snart invitere nye brugere til din organisation. Funktionen er under udvikling.";

#[component]
pub fn InvitePage() -> impl IntoView {
    view! {
        <section class="p-6" lang="da">
            <h1 class="text-2xl font-bold">{INVITE_HEADING}</h1>
            <p class="mt-2 text-muted-foreground">{INVITE_BODY}</p>
        </section>
    }
}

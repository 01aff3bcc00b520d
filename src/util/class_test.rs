use super::*;

#[test]
fn cn_joins_groups_and_skips_absent_or_blank() {
    assert_eq!(cn(&[Some("flex items-center"), None, Some("  "), Some("gap-4")]), "flex items-center gap-4");
    assert_eq!(cn(&[]), "");
    assert_eq!(cn(&[None, Some("")]), "");
}

#[test]
fn cn_normalizes_whitespace() {
    assert_eq!(cn(&[Some("  rounded-xl\tp-px \n bg-muted ")]), "rounded-xl p-px bg-muted");
}

#[test]
fn cn_later_token_wins_within_family() {
    assert_eq!(cn(&[Some("rounded-xl p-px"), Some("p-2")]), "rounded-xl p-2");
    assert_eq!(cn(&[Some("rounded-xl p-px"), Some("rounded-none")]), "p-px rounded-none");
    assert_eq!(cn(&[Some("bg-muted text-sm"), Some("bg-red-500 text-lg")]), "bg-red-500 text-lg");
}

#[test]
fn cn_keeps_distinct_families_side_by_side() {
    assert_eq!(cn(&[Some("px-2 py-1"), Some("pt-4")]), "px-2 py-1 pt-4");
    assert_eq!(cn(&[Some("text-sm text-white text-center")]), "text-sm text-white text-center");
    assert_eq!(cn(&[Some("font-bold font-mono")]), "font-bold font-mono");
}

#[test]
fn cn_gradient_direction_does_not_clash_with_background_color() {
    assert_eq!(
        cn(&[Some("bg-gradient-to-br from-a to-b"), Some("bg-background")]),
        "bg-gradient-to-br from-a to-b bg-background"
    );
    assert_eq!(cn(&[Some("bg-gradient-to-br"), Some("bg-gradient-to-r")]), "bg-gradient-to-r");
}

#[test]
fn cn_scopes_conflicts_by_variant() {
    assert_eq!(cn(&[Some("bg-white dark:bg-black"), Some("bg-muted")]), "dark:bg-black bg-muted");
    assert_eq!(cn(&[Some("hover:p-1"), Some("hover:p-2")]), "hover:p-2");
}

#[test]
fn cn_collapses_exact_duplicates_of_unknown_tokens() {
    assert_eq!(cn(&[Some("custom-class animate-pulse"), Some("custom-class")]), "animate-pulse custom-class");
    assert_eq!(cn(&[Some("one-off"), Some("another-one")]), "one-off another-one");
}

#[test]
fn cn_is_idempotent() {
    let once = cn(&[Some("rounded-md p-px bg-muted"), Some("custom-class p-2 hover:bg-red-500 rounded-full")]);
    assert_eq!(cn(&[Some(&once)]), once);
}

#[test]
fn class_family_classifies_common_utilities() {
    assert_eq!(class_family("p-px"), Some("p"));
    assert_eq!(class_family("px-4"), Some("px"));
    assert_eq!(class_family("rounded"), Some("rounded"));
    assert_eq!(class_family("rounded-[calc(0.75rem-1px)]"), Some("rounded"));
    assert_eq!(class_family("rounded-t-lg"), None);
    assert_eq!(class_family("-mt-2"), Some("mt"));
    assert_eq!(class_family("!w-full"), Some("w"));
    assert_eq!(class_family("hidden"), Some("display"));
    assert_eq!(class_family("animate-pulse"), None);
}

#[test]
fn split_variants_ignores_colons_inside_arbitrary_values() {
    assert_eq!(split_variants("md:hover:bg-red-500"), ("md:hover:", "bg-red-500"));
    assert_eq!(split_variants("bg-[url(a:b)]"), ("", "bg-[url(a:b)]"));
    assert_eq!(split_variants("p-2"), ("", "p-2"));
}

#[test]
fn cn_keeps_tokens_that_share_a_prefix_but_not_a_family() {
    let survivors = [
        ("p-1", "px-2"),
        ("px-2", "py-2"),
        ("pt-1", "pb-1"),
        ("pr-1", "pl-1"),
        ("m-1", "mx-2"),
        ("mx-1", "my-1"),
        ("mt-1", "mb-1"),
        ("mr-1", "ml-1"),
        ("min-w-0", "w-full"),
        ("max-w-md", "w-full"),
        ("min-h-0", "h-full"),
        ("max-h-64", "h-full"),
        ("size-4", "w-4"),
        ("gap-2", "gap-x-1"),
        ("gap-x-2", "gap-y-2"),
        ("space-x-2", "space-y-2"),
        ("grid-cols-3", "grid-rows-2"),
        ("items-center", "justify-between"),
        ("justify-between", "justify-items-center"),
        ("justify-between", "justify-self-end"),
        ("bg-gradient-to-br", "bg-muted"),
        ("bg-linear-to-r", "bg-muted"),
        ("bg-muted", "bg-center"),
        ("bg-muted", "bg-cover"),
        ("bg-muted", "bg-no-repeat"),
        ("bg-muted", "bg-fixed"),
        ("bg-muted", "bg-clip-text"),
        ("bg-cover", "bg-no-repeat"),
        ("from-fuchsia-500", "from-10%"),
        ("via-violet-500", "via-50%"),
        ("to-sky-400", "to-90%"),
        ("opacity-50", "bg-opacity-50"),
        ("shadow-lg", "shadow-black/50"),
        ("text-white", "text-nowrap"),
        ("text-white", "text-wrap"),
        ("text-white", "text-balance"),
        ("text-white", "text-ellipsis"),
        ("text-white", "text-clip"),
        ("text-ellipsis", "text-balance"),
        ("text-sm", "text-clip"),
        ("font-bold", "font-mono"),
    ];
    for (first, second) in survivors {
        assert_eq!(cn(&[Some(first), Some(second)]), format!("{first} {second}"), "{first} vs {second}");
    }
}

#[test]
fn cn_still_resolves_conflicts_inside_the_narrower_families() {
    let conflicts = [
        ("shadow-sm", "shadow-lg"),
        ("shadow", "shadow-md"),
        ("shadow-black/50", "shadow-red-500"),
        ("from-10%", "from-20%"),
        ("text-wrap", "text-nowrap"),
        ("text-ellipsis", "text-clip"),
        ("bg-center", "bg-top"),
        ("bg-auto", "bg-cover"),
        ("bg-repeat", "bg-no-repeat"),
        ("bg-fixed", "bg-scroll"),
        ("bg-clip-text", "bg-clip-border"),
        ("justify-items-start", "justify-items-center"),
        ("justify-self-start", "justify-self-end"),
    ];
    for (first, second) in conflicts {
        assert_eq!(cn(&[Some(first), Some(second)]), second, "{first} vs {second}");
    }
}

#[test]
fn cn_gradient_stop_position_keeps_the_stop_color() {
    let merged = cn(&[
        Some("rounded-xl bg-gradient-to-br from-fuchsia-500 via-violet-500 to-sky-400 p-px"),
        Some("from-10%"),
    ]);
    assert_eq!(
        merged,
        "rounded-xl bg-gradient-to-br from-fuchsia-500 via-violet-500 to-sky-400 p-px from-10%"
    );
}

#[test]
fn class_family_splits_keyword_utilities_from_colors() {
    assert_eq!(class_family("text-nowrap"), Some("text-wrap"));
    assert_eq!(class_family("text-ellipsis"), Some("text-overflow"));
    assert_eq!(class_family("bg-center"), Some("bg-position"));
    assert_eq!(class_family("bg-clip-padding"), Some("bg-clip"));
    assert_eq!(class_family("bg-none"), Some("bg-image"));
    assert_eq!(class_family("bg-background"), Some("bg-color"));
    assert_eq!(class_family("from-[15%]"), Some("gradient-from-position"));
    assert_eq!(class_family("shadow-[0_0_4px_red]"), Some("shadow"));
    assert_eq!(class_family("shadow-sky-400/40"), Some("shadow-color"));
}

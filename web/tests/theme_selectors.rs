#![cfg(test)]
/*!
Theme selector lint for the dashboard page.

The shared theme (`ui/assets/theme/main.css`) is inlined into the document at
launch, so a renamed or dropped selector only shows up as an unstyled page at
runtime. These checks keep the classes used by `ui::dashboard` and
`ui::views::Dashboard` present in the stylesheet.

When a component's markup changes its class names, update REQUIRED_SELECTORS
in the same commit.
*/

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const REQUIRED_SELECTORS: &[&str] = &[
    ":root",
    "body {",
    ".page {",
    // Header
    ".dashboard__header",
    ".dashboard__brand",
    ".dashboard__title",
    ".dashboard__subtitle",
    ".dashboard__meta",
    ".dashboard__meta-value",
    // Grid and status states
    ".dashboard__grid",
    ".dashboard__status",
    ".dashboard__status--error",
    ".dashboard__status-detail",
    // Chart cards
    ".chart-card {",
    ".chart-card__header",
    ".chart-card__title",
    ".chart-card__meta",
    ".chart-card__image",
    ".chart-card__markup",
    ".chart-card__note",
    "@media (max-width: 960px)",
];

#[test]
fn theme_contains_required_selectors() {
    let missing: Vec<_> = REQUIRED_SELECTORS
        .iter()
        .filter(|sel| !THEME_CSS.contains(*sel))
        .copied()
        .collect();

    if !missing.is_empty() {
        panic!(
            "Missing {} required CSS selectors/tokens in the dashboard theme:\n{}",
            missing.len(),
            missing.join("\n")
        );
    }
}

#[test]
fn theme_matches_inlined_constant() {
    assert_eq!(THEME_CSS, ui::THEME_CSS);
    assert!(
        THEME_CSS.chars().filter(|c| !c.is_whitespace()).count() > 1_000,
        "theme looks truncated"
    );
}

#[test]
fn series_colours_match_chart_palette() {
    // Same blue/orange pair the chart renderers use for the two series.
    for token in ["--color-accent: #1f77b4", "--color-accent-alt: #ff7f0e"] {
        assert!(THEME_CSS.contains(token), "expected `{token}` in theme");
    }
}

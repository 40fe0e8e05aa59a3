#![cfg(test)]
//! Selectors the shared components emit must exist in the theme the desktop
//! build embeds. When a component renames a class, update this list with it.

const THEME_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/theme/main.css"
));

const NAVBAR_CSS: &str = include_str!(concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/../ui/assets/styling/navbar.css"
));

const THEME_SELECTORS: &[&str] = &[
    // Global
    ":root",
    "body {",
    ".page {",
    ".status {",
    ".form-error {",
    // Buttons and fields
    ".button {",
    ".button--primary",
    ".button--danger",
    ".button--ghost",
    ".button--link",
    ".field {",
    ".field__label",
    // Select
    ".select {",
    ".select__control",
    ".select__menu",
    ".select__option--selected",
    ".select--open",
    // Quiz
    ".quiz-page__controls",
    ".quiz-page__nav-btn--primary",
    ".question-card {",
    ".question-card__option--selected",
    // Results and history
    ".results-page__score",
    ".feedback__item--correct",
    ".feedback__item--wrong",
    ".feedback__explanation",
    ".history-page__link",
    ".attempt-detail__summary",
    // Charts and analytics
    ".barchart {",
    ".barchart__label",
    ".barchart__value",
    ".barchart__empty",
    ".analytics__cards",
    ".analytics__card {",
    ".analytics__table",
    // Admin
    ".admin-questions__form",
    ".admin-questions__item",
    ".admin-users__item",
    // Responsive block
    "@media (max-width: 720px)",
];

const NAVBAR_SELECTORS: &[&str] = &[
    ".navbar {",
    ".navbar__links",
    ".navbar__link {",
    ".navbar__link--active",
    ".navbar__link--button",
    ".visually-hidden",
];

fn missing<'a>(css: &str, selectors: &[&'a str]) -> Vec<&'a str> {
    selectors.iter().copied().filter(|s| !css.contains(s)).collect()
}

#[test]
fn theme_contains_component_selectors() {
    let missing = missing(THEME_CSS, THEME_SELECTORS);
    assert!(
        missing.is_empty(),
        "missing {} selectors in ui/assets/theme/main.css:\n{}",
        missing.len(),
        missing.join("\n")
    );
}

#[test]
fn navbar_stylesheet_contains_navbar_selectors() {
    let missing = missing(NAVBAR_CSS, NAVBAR_SELECTORS);
    assert!(
        missing.is_empty(),
        "missing navbar selectors:\n{}",
        missing.join("\n")
    );
}

#[test]
fn theme_is_not_trivially_small() {
    let non_ws = THEME_CSS.chars().filter(|c| !c.is_whitespace()).count();
    assert!(
        non_ws > 4_000,
        "theme has only {non_ws} non-whitespace chars; was it truncated?"
    );
}

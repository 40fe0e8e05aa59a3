//! Fixed question categories, in display order. Kept in sync with the
//! server's seed data.

pub const CATEGORIES: &[&str] = &[
    "Infection Control",
    "Hair Cutting",
    "Shaving",
    "Chemical Services",
    "Hair and Scalp Care",
    "Skin and Facial Care",
    "Tools and Equipment",
    "State Laws and Rules",
];

/// Sort key: position in [`CATEGORIES`], unknown categories last.
pub fn rank(category: &str) -> usize {
    CATEGORIES
        .iter()
        .position(|known| *known == category)
        .unwrap_or(usize::MAX)
}

//! Keyword vocabularies used by query interpretation.
//!
//! Declarative tables, kept apart from the matching logic so terms can be
//! extended without touching control flow.

/// Style descriptors recognized anywhere in a normalized query.
pub const STYLE_TERMS: &[&str] = &[
    "elegant",
    "minimal",
    "minimalist",
    "bohemian",
    "boho",
    "casual",
    "formal",
    "vintage",
    "retro",
    "modern",
    "classic",
    "edgy",
    "romantic",
    "feminine",
    "professional",
    "business",
    "party",
    "cocktail",
    "evening",
    "cozy",
    "comfortable",
    "luxury",
    "premium",
    "delicate",
    "structured",
    "flowy",
];

/// Canonical category mapped to its surface synonyms.
pub const CATEGORY_SYNONYMS: &[(&str, &[&str])] = &[
    ("dress", &["dress", "dresses", "gown", "frock"]),
    ("top", &["top", "tops", "blouse", "shirt", "tee", "t-shirt"]),
    ("bottom", &["jeans", "pants", "trousers", "skirt", "shorts"]),
    ("jacket", &["jacket", "blazer", "coat", "cardigan"]),
    ("sweater", &["sweater", "pullover", "jumper", "knitwear"]),
    ("shoes", &["shoes", "boots", "heels", "flats", "sneakers", "sandals"]),
];

/// Color names recognized anywhere in a normalized query.
pub const COLOR_TERMS: &[&str] = &[
    "black", "white", "red", "blue", "green", "yellow", "pink", "purple", "orange", "brown",
    "gray", "grey", "navy", "cream", "beige", "gold", "silver", "maroon", "coral", "mint",
    "lavender",
];

/// Upper price bound applied to open-ended "above N" queries.
pub const PRICE_CEILING: u32 = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vocabulary_sizes() {
        assert_eq!(STYLE_TERMS.len(), 26);
        assert_eq!(CATEGORY_SYNONYMS.len(), 6);
        assert_eq!(COLOR_TERMS.len(), 21);
    }

    #[test]
    fn test_every_category_has_synonyms() {
        for (category, synonyms) in CATEGORY_SYNONYMS {
            assert!(!synonyms.is_empty(), "category {category} has no synonyms");
        }
    }
}

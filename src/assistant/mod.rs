//! Query interpretation: free text in, filtered products and a reply out.
//!
//! The assistant holds a fixed catalog and maps each query through four
//! independent extraction stages (price range, style, category, color),
//! then narrows the catalog stage by stage. Stages combine with AND;
//! keywords within a stage combine with OR. Matching is raw substring
//! containment over the lowercased query, so overlapping vocabulary terms
//! can double-match. Interpretation never fails; an empty result is a
//! normal outcome.

pub mod responder;
pub mod vocab;

use std::sync::OnceLock;

use regex::Regex;
use tracing::debug;

use crate::catalog::{Catalog, Product};

/// Inclusive price window extracted from a query.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceRange {
    pub min: u32,
    pub max: u32,
}

/// Outcome of interpreting one query against the catalog.
#[derive(Debug, Clone)]
pub struct FilterResult {
    pub products: Vec<Product>,
    pub message: String,
    /// Coarse heuristic in [0, 1] reflecting query specificity and result
    /// count, not matching accuracy. Not a calibrated probability.
    pub confidence: f32,
}

/// Keyword-matching shopping assistant over a fixed catalog.
pub struct ShoppingAssistant {
    catalog: Catalog,
}

impl ShoppingAssistant {
    pub fn new(catalog: Catalog) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Interpret a free-text query. Pure: the same query against the same
    /// catalog always yields the same products, message and confidence.
    pub fn process_query(&self, query: &str) -> FilterResult {
        let normalized = query.to_lowercase();
        let normalized = normalized.trim();

        let price = extract_price_range(normalized);
        let styles = extract_style_keywords(normalized);
        let categories = extract_category_keywords(normalized);
        let colors = extract_color_keywords(normalized);

        let mut products: Vec<Product> = self.catalog.products().to_vec();
        let mut criteria: Vec<String> = Vec::new();

        if let Some(range) = price {
            products.retain(|p| p.price >= range.min && p.price <= range.max);
            criteria.push(format!("under ₹{}", range.max));
        }

        if !styles.is_empty() {
            products.retain(|p| {
                styles.iter().any(|&keyword| {
                    p.style.iter().any(|s| s == keyword)
                        || p.sentiment == keyword
                        || p.tags.iter().any(|t| t == keyword)
                })
            });
            criteria.push(styles.join(", "));
        }

        if !categories.is_empty() {
            products.retain(|p| {
                categories.iter().any(|&keyword| {
                    p.category.contains(keyword) || p.tags.iter().any(|t| t == keyword)
                })
            });
            criteria.push(categories.join(", "));
        }

        if !colors.is_empty() {
            products.retain(|p| {
                colors.iter().any(|&keyword| {
                    p.tags.iter().any(|t| t == keyword)
                        || p.name.to_lowercase().contains(keyword)
                })
            });
            criteria.push(format!("in {}", colors.join(", ")));
        }

        let message = response_message(products.len(), &criteria, normalized);
        let confidence = confidence_score(normalized, products.len());

        debug!(
            query = normalized,
            results = products.len(),
            confidence,
            "query interpreted"
        );

        FilterResult {
            products,
            message,
            confidence,
        }
    }
}

/// Extract a price range. The three phrasings are tried in a fixed order
/// and the first match wins; at most one range per query.
pub fn extract_price_range(query: &str) -> Option<PriceRange> {
    static UNDER: OnceLock<Regex> = OnceLock::new();
    static OVER: OnceLock<Regex> = OnceLock::new();
    static BETWEEN: OnceLock<Regex> = OnceLock::new();

    let under = UNDER
        .get_or_init(|| Regex::new(r"(?:under|below|less than|<)\s*₹?(\d+)").expect("valid regex"));
    if let Some(caps) = under.captures(query) {
        if let Ok(max) = caps[1].parse() {
            return Some(PriceRange { min: 0, max });
        }
    }

    let over = OVER
        .get_or_init(|| Regex::new(r"(?:above|over|more than|>)\s*₹?(\d+)").expect("valid regex"));
    if let Some(caps) = over.captures(query) {
        if let Ok(min) = caps[1].parse() {
            return Some(PriceRange {
                min,
                max: vocab::PRICE_CEILING,
            });
        }
    }

    let between = BETWEEN.get_or_init(|| {
        Regex::new(r"between\s*₹?(\d+)\s*(?:and|to|-)\s*₹?(\d+)").expect("valid regex")
    });
    if let Some(caps) = between.captures(query) {
        if let (Ok(min), Ok(max)) = (caps[1].parse(), caps[2].parse()) {
            return Some(PriceRange { min, max });
        }
    }

    None
}

/// Every style term whose substring appears anywhere in the query.
pub fn extract_style_keywords(query: &str) -> Vec<&'static str> {
    vocab::STYLE_TERMS
        .iter()
        .copied()
        .filter(|term| query.contains(term))
        .collect()
}

/// Canonical categories whose any synonym appears in the query.
pub fn extract_category_keywords(query: &str) -> Vec<&'static str> {
    vocab::CATEGORY_SYNONYMS
        .iter()
        .filter(|(_, synonyms)| synonyms.iter().any(|s| query.contains(s)))
        .map(|(category, _)| *category)
        .collect()
}

/// Every color name whose substring appears anywhere in the query.
pub fn extract_color_keywords(query: &str) -> Vec<&'static str> {
    vocab::COLOR_TERMS
        .iter()
        .copied()
        .filter(|color| query.contains(color))
        .collect()
}

fn response_message(result_count: usize, criteria: &[String], query: &str) -> String {
    if result_count == 0 {
        return format!(
            "I couldn't find any products matching \"{query}\". \
             Try adjusting your search criteria or browse our full collection!"
        );
    }

    if criteria.is_empty() {
        return format!(
            "I found {result_count} products for you! Here's what I discovered in our collection."
        );
    }

    let product_word = if result_count == 1 { "product" } else { "products" };
    format!(
        "Perfect! I found {result_count} {product_word} that match your request for {}. \
         These should be exactly what you're looking for! ✨",
        criteria.join(" ")
    )
}

fn confidence_score(query: &str, result_count: usize) -> f32 {
    let has_specific_terms = query.split_whitespace().count() > 3;

    if result_count == 0 {
        return 0.3;
    }
    if has_specific_terms && result_count < 5 {
        return 0.9;
    }
    if has_specific_terms {
        return 0.8;
    }
    0.6
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog;

    fn assistant() -> ShoppingAssistant {
        ShoppingAssistant::new(catalog::seed().unwrap())
    }

    #[test]
    fn test_under_bounds_every_result() {
        let result = assistant().process_query("show me anything under 900");
        assert!(!result.products.is_empty());
        assert!(result.products.iter().all(|p| p.price <= 900));
    }

    #[test]
    fn test_between_bounds_every_result() {
        let result = assistant().process_query("items between 700 and 1000 please");
        assert!(!result.products.is_empty());
        assert!(result
            .products
            .iter()
            .all(|p| p.price >= 700 && p.price <= 1000));
    }

    #[test]
    fn test_above_uses_ceiling() {
        let range = extract_price_range("over 1500").unwrap();
        assert_eq!(range, PriceRange { min: 1500, max: 10_000 });

        let result = assistant().process_query("something over 1500");
        assert!(result.products.iter().all(|p| p.price >= 1500));
    }

    #[test]
    fn test_price_first_phrasing_wins() {
        // both "under" and "over" present; "under" is tried first
        let range = extract_price_range("under 500 but over 100").unwrap();
        assert_eq!(range, PriceRange { min: 0, max: 500 });
    }

    #[test]
    fn test_rupee_sign_accepted() {
        let range = extract_price_range("under ₹1000").unwrap();
        assert_eq!(range.max, 1000);
    }

    #[test]
    fn test_no_criteria_returns_full_catalog() {
        let assistant = assistant();
        let full = assistant.catalog().len();
        let result = assistant.process_query("hello");
        assert_eq!(result.products.len(), full);
        assert!(result.message.contains(&full.to_string()));
    }

    #[test]
    fn test_idempotent() {
        let assistant = assistant();
        let a = assistant.process_query("Show me party dresses under ₹1000");
        let b = assistant.process_query("Show me party dresses under ₹1000");
        assert_eq!(a.products, b.products);
        assert_eq!(a.message, b.message);
        assert_eq!(a.confidence, b.confidence);
    }

    #[test]
    fn test_confidence_bounds_and_zero_results() {
        let assistant = assistant();
        for query in [
            "dress",
            "show me party dresses under ₹1000",
            "anything under 1",
            "hello",
        ] {
            let result = assistant.process_query(query);
            assert!((0.0..=1.0).contains(&result.confidence), "query: {query}");
            if result.products.is_empty() {
                assert_eq!(result.confidence, 0.3);
            } else {
                assert_ne!(result.confidence, 0.3);
            }
        }
    }

    #[test]
    fn test_zero_results_quotes_query() {
        let result = assistant().process_query("Anything Under 1");
        assert!(result.products.is_empty());
        assert!(result.message.contains("\"anything under 1\""));
        assert_eq!(result.confidence, 0.3);
    }

    #[test]
    fn test_party_dresses_query() {
        let result = assistant().process_query("Show me party dresses under ₹1000");
        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].name, "Floral Party Dress");
        assert!(result.products[0].price <= 1000);
        assert!(result.message.contains("party"));
        assert!(result.message.contains("under ₹1000"));
        // four tokens, one result
        assert_eq!(result.confidence, 0.9);
    }

    #[test]
    fn test_minimal_elegant_query() {
        let result = assistant().process_query("I want minimal elegant styles");
        assert!(!result.products.is_empty());
        for p in &result.products {
            let matches = |k: &str| {
                p.style.iter().any(|s| s == k)
                    || p.sentiment == k
                    || p.tags.iter().any(|t| t == k)
            };
            assert!(matches("minimal") || matches("elegant"), "{}", p.name);
        }
        // style stage only; keywords reported in vocabulary order
        assert!(result.message.contains("elegant, minimal"));
        assert!(!result.message.contains(" in "));
    }

    #[test]
    fn test_overlapping_terms_double_match() {
        let styles = extract_style_keywords("something minimalist");
        assert!(styles.contains(&"minimal"));
        assert!(styles.contains(&"minimalist"));
    }

    #[test]
    fn test_category_synonyms() {
        assert_eq!(extract_category_keywords("show me some gowns"), ["dress"]);
        assert_eq!(extract_category_keywords("a pair of jeans"), ["bottom"]);
        assert!(extract_category_keywords("nothing relevant").is_empty());
    }

    #[test]
    fn test_color_matches_tags_or_name() {
        let result = assistant().process_query("black heels");
        assert_eq!(result.products.len(), 1);
        assert_eq!(result.products[0].name, "Black Party Heels");
        assert!(result.message.contains("in black"));
    }

    #[test]
    fn test_singular_plural_message() {
        let one = assistant().process_query("find me cozy winter sweaters");
        assert_eq!(one.products.len(), 1);
        assert!(one.message.contains("1 product that match"));

        let many = assistant().process_query("show me some dresses");
        assert!(many.products.len() > 1);
        assert!(many.message.contains("products"));
    }

    #[test]
    fn test_criteria_listed_in_stage_order() {
        let result = assistant().process_query("party dresses under ₹1000");
        let price_at = result.message.find("under ₹1000").unwrap();
        let style_at = result.message.find("party").unwrap();
        let category_at = result.message.find("dress").unwrap();
        assert!(price_at < style_at);
        assert!(style_at < category_at);
    }
}

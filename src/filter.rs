//! Client-side filter engine.
//!
//! A pure function of (catalog, search text, category, price bracket): the
//! three predicates are ANDed and the output preserves catalog order. Option
//! lists are derived from the current catalog on every render and never
//! stored, so they cannot drift from the catalog contents; the flip side is
//! that they reset whenever the catalog reloads.

use crate::catalog::Product;

/// Selection meaning "do not filter on this axis".
pub const WILDCARD: &str = "all";

/// Fixed price brackets: (selection value, display label).
///
/// Adjacent brackets share their boundary price; a product priced exactly at
/// a shared bound satisfies whichever of the two is selected.
pub const PRICE_BRACKETS: &[(&str, &str)] = &[
    (WILDCARD, "All Prices"),
    ("0-25", "$0 - $25"),
    ("25-50", "$25 - $50"),
    ("50-100", "$50 - $100"),
    ("100-1000", "$100+"),
];

/// Current values of the three filter controls. Transient view state only.
#[derive(Clone, Debug, PartialEq)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    pub price: String,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            search: String::new(),
            category: WILDCARD.to_string(),
            price: WILDCARD.to_string(),
        }
    }
}

/// Parse a `min-max` bracket value into its inclusive bounds.
pub fn parse_bracket(raw: &str) -> Option<(f64, f64)> {
    let (min, max) = raw.split_once('-')?;
    Some((min.trim().parse().ok()?, max.trim().parse().ok()?))
}

fn matches_search(product: &Product, search: &str) -> bool {
    product
        .title
        .to_lowercase()
        .contains(&search.to_lowercase())
}

fn matches_category(product: &Product, category: &str) -> bool {
    category == WILDCARD || product.category == category
}

fn matches_price(product: &Product, price: &str) -> bool {
    if price == WILDCARD {
        return true;
    }
    // Only the wildcard opts out of price filtering; a non-wildcard value
    // that does not parse as two bounds matches nothing.
    match parse_bracket(price) {
        Some((min, max)) => product.price >= min && product.price <= max,
        None => false,
    }
}

/// Apply all three predicates, preserving catalog order.
pub fn filter_catalog<'a>(catalog: &'a [Product], state: &FilterState) -> Vec<&'a Product> {
    catalog
        .iter()
        .filter(|product| {
            matches_search(product, &state.search)
                && matches_category(product, &state.category)
                && matches_price(product, &state.price)
        })
        .collect()
}

/// Category dropdown options: the wildcard followed by the distinct
/// categories of the catalog in first-occurrence order.
pub fn category_options(catalog: &[Product]) -> Vec<String> {
    let mut options = vec![WILDCARD.to_string()];
    for product in catalog {
        if !options[1..].contains(&product.category) {
            options.push(product.category.clone());
        }
    }
    options
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(title: &str, category: &str, price: f64) -> Product {
        Product {
            title: title.to_string(),
            category: category.to_string(),
            price,
            ..Product::default()
        }
    }

    fn sample_catalog() -> Vec<Product> {
        vec![
            product("Red Shirt", "clothing", 24.5),
            product("Blue Jeans", "clothing", 49.0),
            product("Gold Ring", "jewelery", 120.0),
            product("Monitor", "electronics", 99.99),
            product("Silver Ring", "jewelery", 25.0),
        ]
    }

    #[test]
    fn default_state_matches_everything_in_order() {
        let catalog = sample_catalog();
        let filtered = filter_catalog(&catalog, &FilterState::default());
        let titles: Vec<&str> = filtered.iter().map(|p| p.title.as_str()).collect();
        assert_eq!(
            titles,
            ["Red Shirt", "Blue Jeans", "Gold Ring", "Monitor", "Silver Ring"]
        );
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let catalog = sample_catalog();
        for needle in ["red", "RED", "ShIrT"] {
            let state = FilterState {
                search: needle.to_string(),
                ..FilterState::default()
            };
            let filtered = filter_catalog(&catalog, &state);
            assert_eq!(filtered.len(), 1, "search {needle:?}");
            assert_eq!(filtered[0].title, "Red Shirt");
        }
    }

    #[test]
    fn predicates_combine_conjunctively() {
        let catalog = sample_catalog();
        let state = FilterState {
            search: "ring".to_string(),
            category: "jewelery".to_string(),
            price: "0-25".to_string(),
        };
        let filtered = filter_catalog(&catalog, &state);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Silver Ring");
    }

    #[test]
    fn bracket_bounds_are_inclusive_on_both_ends() {
        let catalog = vec![product("Low", "misc", 25.0), product("High", "misc", 50.0)];
        let state = FilterState {
            price: "25-50".to_string(),
            ..FilterState::default()
        };
        assert_eq!(filter_catalog(&catalog, &state).len(), 2);

        // The shared bound also satisfies the adjacent bracket.
        let below = FilterState {
            price: "0-25".to_string(),
            ..FilterState::default()
        };
        let filtered = filter_catalog(&catalog, &below);
        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].title, "Low");
    }

    #[test]
    fn unparsable_bracket_matches_nothing() {
        let catalog = sample_catalog();
        let state = FilterState {
            price: "cheap".to_string(),
            ..FilterState::default()
        };
        assert!(filter_catalog(&catalog, &state).is_empty());
    }

    #[test]
    fn category_options_dedupe_in_first_occurrence_order() {
        let options = category_options(&sample_catalog());
        assert_eq!(options, ["all", "clothing", "jewelery", "electronics"]);
    }

    #[test]
    fn category_options_on_empty_catalog_is_just_the_wildcard() {
        assert_eq!(category_options(&[]), ["all"]);
    }

    #[test]
    fn parse_bracket_accepts_the_fixed_labels() {
        assert_eq!(parse_bracket("0-25"), Some((0.0, 25.0)));
        assert_eq!(parse_bracket("100-1000"), Some((100.0, 1000.0)));
        assert_eq!(parse_bracket("all"), None);
        assert_eq!(parse_bracket("10-"), None);
    }
}

//! The catalog query engine.
//!
//! `evaluate` is a pure function: no I/O, no mutation, and identical inputs
//! produce value-identical results. The pipeline is search filter → category
//! filter → stable sort → paginate. Zero results is a normal state, not a
//! failure — there are no error conditions anywhere in this module.

use serde::{Deserialize, Deserializer, Serialize};

use crate::product::Product;
use crate::store::Catalog;

/// Fixed number of products per page.
pub const PAGE_SIZE: usize = 12;

/// How to order the filtered result set.
///
/// The sort must be stable: ties preserve the pre-sort relative order, which
/// is what makes `Newest` (no reordering over the recency-ordered catalog)
/// and the "unreviewed products keep their order at the tail" rule work.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Catalog order (the union is assembled most-recent-first).
    #[default]
    Newest,
    PriceAsc,
    PriceDesc,
    /// Descending mean review rating; unreviewed products sort last.
    Rating,
}

impl SortKey {
    /// Parse a sort key, falling back to `Newest` for anything unrecognized.
    /// An unknown key is not an error — it degrades to the default ordering.
    pub fn parse(s: &str) -> Self {
        match s {
            "price-asc" => Self::PriceAsc,
            "price-desc" => Self::PriceDesc,
            "rating" => Self::Rating,
            _ => Self::Newest,
        }
    }
}

impl<'de> Deserialize<'de> for SortKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(SortKey::parse(&s))
    }
}

/// One marketplace query: search text, category filter, sort, page.
///
/// Ephemeral — rebuilt by the caller on every input change. Callers reset
/// `page` to 1 whenever the filter or sort inputs change.
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogQuery {
    /// Case-insensitive substring filter over name, description, category.
    /// Empty matches everything.
    pub search_text: String,
    /// Exact-match category filter; `None` means all categories.
    pub category: Option<String>,
    pub sort: SortKey,
    /// 1-based page index. `0` is treated as page 1; a page past the end
    /// yields an empty page.
    pub page: u32,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            search_text: String::new(),
            category: None,
            sort: SortKey::Newest,
            page: 1,
        }
    }
}

/// One page of query results.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QueryPage {
    pub items: Vec<Product>,
    /// Matching products across all pages.
    pub total_count: usize,
    /// `ceil(total_count / page_size)`; 0 when nothing matched.
    pub total_pages: usize,
    pub page_size: usize,
}

/// Evaluate a query against the catalog.
pub fn evaluate(catalog: &Catalog, query: &CatalogQuery) -> QueryPage {
    let needle = query.search_text.to_lowercase();

    let mut matches: Vec<&Product> = catalog
        .products()
        .iter()
        .filter(|p| matches_search(p, &needle))
        .filter(|p| matches_category(p, query.category.as_deref()))
        .collect();

    match query.sort {
        SortKey::Newest => {}
        SortKey::PriceAsc => matches.sort_by_key(|p| p.price_cents),
        SortKey::PriceDesc => matches.sort_by(|a, b| b.price_cents.cmp(&a.price_cents)),
        SortKey::Rating => matches.sort_by(|a, b| b.mean_rating().total_cmp(&a.mean_rating())),
    }

    let total_count = matches.len();
    let total_pages = total_count.div_ceil(PAGE_SIZE);
    let page = query.page.max(1) as usize;
    let items = matches
        .into_iter()
        .skip((page - 1) * PAGE_SIZE)
        .take(PAGE_SIZE)
        .cloned()
        .collect();

    QueryPage {
        items,
        total_count,
        total_pages,
        page_size: PAGE_SIZE,
    }
}

fn matches_search(product: &Product, needle: &str) -> bool {
    if needle.is_empty() {
        return true;
    }
    product.name.to_lowercase().contains(needle)
        || product.description.to_lowercase().contains(needle)
        || product.category.to_lowercase().contains(needle)
}

fn matches_category(product: &Product, category: Option<&str>) -> bool {
    match category {
        None => true,
        Some(c) => product.category == c,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::product::{Rating, Review};
    use crate::store::CatalogSources;
    use blueforge_core::ProductId;
    use chrono::Utc;

    fn product(n: u32, name: &str, category: &str, price_cents: u64) -> Product {
        Product::new(ProductId::seed(n), name, format!("{name} description"), category, price_cents, Utc::now())
    }

    fn with_ratings(mut p: Product, ratings: &[u8]) -> Product {
        p.reviews = ratings
            .iter()
            .map(|&r| Review::new(Rating::new(r).unwrap(), "tester", Utc::now()))
            .collect();
        p
    }

    /// Five products mirroring the storefront fixtures: prices 49, 199, 299,
    /// 89, 75 dollars; one crypto listing; one Health & Fitness listing.
    fn sample_catalog() -> Catalog {
        Catalog::assemble(CatalogSources {
            generated: Vec::new(),
            vendor: Vec::new(),
            seed: vec![
                product(1, "Crypto Portfolio Tracker", "Finance", 4_900),
                product(2, "Meal Planner Pro", "Health & Fitness", 19_900),
                product(3, "Team Standup Bot", "Productivity", 29_900),
                product(4, "Invoice Wizard", "Finance", 8_900),
                product(5, "Habit Streaks", "Productivity", 7_500),
            ],
        })
        .unwrap()
    }

    #[test]
    fn price_asc_orders_all_products() {
        let page = evaluate(
            &sample_catalog(),
            &CatalogQuery {
                sort: SortKey::PriceAsc,
                ..CatalogQuery::default()
            },
        );

        let prices: Vec<u64> = page.items.iter().map(|p| p.price_cents).collect();
        assert_eq!(prices, vec![4_900, 7_500, 8_900, 19_900, 29_900]);
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn search_is_case_insensitive_substring() {
        let page = evaluate(
            &sample_catalog(),
            &CatalogQuery {
                search_text: "crypto".to_string(),
                ..CatalogQuery::default()
            },
        );

        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "Crypto Portfolio Tracker");
    }

    #[test]
    fn search_matches_description_and_category() {
        // "fitness" only appears in the category field.
        let page = evaluate(
            &sample_catalog(),
            &CatalogQuery {
                search_text: "FITNESS".to_string(),
                ..CatalogQuery::default()
            },
        );
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "Meal Planner Pro");
    }

    #[test]
    fn category_filter_is_exact_match() {
        let page = evaluate(
            &sample_catalog(),
            &CatalogQuery {
                category: Some("Health & Fitness".to_string()),
                ..CatalogQuery::default()
            },
        );
        assert_eq!(page.total_count, 1);
        assert_eq!(page.items[0].name, "Meal Planner Pro");

        // Case matters for the category filter, unlike search.
        let page = evaluate(
            &sample_catalog(),
            &CatalogQuery {
                category: Some("health & fitness".to_string()),
                ..CatalogQuery::default()
            },
        );
        assert_eq!(page.total_count, 0);
    }

    #[test]
    fn thirteen_matches_split_into_two_pages() {
        let seed = (1..=13)
            .map(|n| product(n, &format!("Widget {n}"), "Tools", 1_000))
            .collect();
        let catalog = Catalog::assemble(CatalogSources {
            generated: Vec::new(),
            vendor: Vec::new(),
            seed,
        })
        .unwrap();

        let first = evaluate(&catalog, &CatalogQuery::default());
        assert_eq!(first.items.len(), PAGE_SIZE);
        assert_eq!(first.total_count, 13);
        assert_eq!(first.total_pages, 2);

        let second = evaluate(
            &catalog,
            &CatalogQuery {
                page: 2,
                ..CatalogQuery::default()
            },
        );
        assert_eq!(second.items.len(), 1);
        assert_eq!(second.items[0].name, "Widget 13");
    }

    #[test]
    fn rating_sort_puts_unreviewed_products_last_in_original_order() {
        let seed = vec![
            product(1, "Unrated A", "Tools", 1_000),
            with_ratings(product(2, "Five Stars", "Tools", 1_000), &[5, 5]),
            product(3, "Unrated B", "Tools", 1_000),
            with_ratings(product(4, "Three Stars", "Tools", 1_000), &[3]),
            with_ratings(product(5, "Four Stars", "Tools", 1_000), &[4, 4, 4]),
        ];
        let catalog = Catalog::assemble(CatalogSources {
            generated: Vec::new(),
            vendor: Vec::new(),
            seed,
        })
        .unwrap();

        let page = evaluate(
            &catalog,
            &CatalogQuery {
                sort: SortKey::Rating,
                ..CatalogQuery::default()
            },
        );

        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Five Stars", "Four Stars", "Three Stars", "Unrated A", "Unrated B"]
        );
    }

    #[test]
    fn newest_preserves_catalog_order() {
        let page = evaluate(&sample_catalog(), &CatalogQuery::default());
        let names: Vec<&str> = page.items.iter().map(|p| p.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Crypto Portfolio Tracker",
                "Meal Planner Pro",
                "Team Standup Bot",
                "Invoice Wizard",
                "Habit Streaks"
            ]
        );
    }

    #[test]
    fn no_match_yields_well_formed_empty_page() {
        let page = evaluate(
            &sample_catalog(),
            &CatalogQuery {
                search_text: "xylophone".to_string(),
                ..CatalogQuery::default()
            },
        );
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn empty_catalog_yields_empty_page() {
        let page = evaluate(&Catalog::empty(), &CatalogQuery::default());
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 0);
        assert_eq!(page.total_pages, 0);
    }

    #[test]
    fn out_of_range_page_yields_empty_items() {
        let page = evaluate(
            &sample_catalog(),
            &CatalogQuery {
                page: 99,
                ..CatalogQuery::default()
            },
        );
        assert!(page.items.is_empty());
        assert_eq!(page.total_count, 5);
        assert_eq!(page.total_pages, 1);
    }

    #[test]
    fn page_zero_is_treated_as_page_one() {
        let catalog = sample_catalog();
        let zero = evaluate(
            &catalog,
            &CatalogQuery {
                page: 0,
                ..CatalogQuery::default()
            },
        );
        let one = evaluate(&catalog, &CatalogQuery::default());
        assert_eq!(zero, one);
    }

    #[test]
    fn unknown_sort_key_parses_to_newest() {
        assert_eq!(SortKey::parse("price-asc"), SortKey::PriceAsc);
        assert_eq!(SortKey::parse("price-desc"), SortKey::PriceDesc);
        assert_eq!(SortKey::parse("rating"), SortKey::Rating);
        assert_eq!(SortKey::parse("newest"), SortKey::Newest);
        assert_eq!(SortKey::parse("definitely-not-a-sort"), SortKey::Newest);
        assert_eq!(SortKey::parse(""), SortKey::Newest);
    }

    #[test]
    fn unknown_sort_key_deserializes_to_newest() {
        let key: SortKey = serde_json::from_str("\"bogus\"").unwrap();
        assert_eq!(key, SortKey::Newest);

        let key: SortKey = serde_json::from_str("\"price-desc\"").unwrap();
        assert_eq!(key, SortKey::PriceDesc);
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn arb_category() -> impl Strategy<Value = String> {
            prop::sample::select(vec!["Finance", "Health & Fitness", "Productivity", "E-commerce"])
                .prop_map(str::to_string)
        }

        prop_compose! {
            fn arb_product()(
                name in "[a-z]{3,12}",
                description in "[a-z ]{0,40}",
                category in arb_category(),
                price_cents in 0u64..100_000,
                ratings in prop::collection::vec(1u8..=5u8, 0..6),
            ) -> Product {
                let reviews = ratings
                    .into_iter()
                    .map(|r| Review::new(Rating::new(r).unwrap(), "prop", Utc::now()))
                    .collect();
                Product::new(ProductId::vendor(), name, description, category, price_cents, Utc::now())
                    .with_reviews(reviews)
            }
        }

        prop_compose! {
            fn arb_query()(
                search_text in prop::option::of("[a-z]{1,4}"),
                category in prop::option::of(arb_category()),
                sort in prop::sample::select(vec![
                    SortKey::Newest,
                    SortKey::PriceAsc,
                    SortKey::PriceDesc,
                    SortKey::Rating,
                ]),
                page in 1u32..5,
            ) -> CatalogQuery {
                CatalogQuery {
                    search_text: search_text.unwrap_or_default(),
                    category,
                    sort,
                    page,
                }
            }
        }

        fn catalog_of(products: Vec<Product>) -> Catalog {
            Catalog::assemble(CatalogSources {
                generated: products,
                vendor: Vec::new(),
                seed: Vec::new(),
            })
            .unwrap()
        }

        proptest! {
            /// Property: evaluation is idempotent — identical inputs yield
            /// value-identical results.
            #[test]
            fn evaluate_is_idempotent(
                products in prop::collection::vec(arb_product(), 0..40),
                query in arb_query(),
            ) {
                let catalog = catalog_of(products);
                let first = evaluate(&catalog, &query);
                let second = evaluate(&catalog, &query);
                prop_assert_eq!(first, second);
            }

            /// Property: every returned item matches the search text and the
            /// category filter.
            #[test]
            fn returned_items_match_filters(
                products in prop::collection::vec(arb_product(), 0..40),
                query in arb_query(),
            ) {
                let catalog = catalog_of(products);
                let page = evaluate(&catalog, &query);
                let needle = query.search_text.to_lowercase();

                for item in &page.items {
                    if !needle.is_empty() {
                        let hit = item.name.to_lowercase().contains(&needle)
                            || item.description.to_lowercase().contains(&needle)
                            || item.category.to_lowercase().contains(&needle);
                        prop_assert!(hit, "item {:?} does not match '{}'", item.name, needle);
                    }
                    if let Some(category) = &query.category {
                        prop_assert_eq!(&item.category, category);
                    }
                }
            }

            /// Property: sorted pages are monotone in the sort key.
            #[test]
            fn sorted_pages_are_monotone(
                products in prop::collection::vec(arb_product(), 0..40),
                query in arb_query(),
            ) {
                let catalog = catalog_of(products);
                let page = evaluate(&catalog, &query);

                for pair in page.items.windows(2) {
                    match query.sort {
                        SortKey::Newest => {}
                        SortKey::PriceAsc => {
                            prop_assert!(pair[0].price_cents <= pair[1].price_cents);
                        }
                        SortKey::PriceDesc => {
                            prop_assert!(pair[0].price_cents >= pair[1].price_cents);
                        }
                        SortKey::Rating => {
                            prop_assert!(pair[0].mean_rating() >= pair[1].mean_rating());
                        }
                    }
                }
            }

            /// Property: concatenating all pages reproduces the full
            /// filtered+sorted sequence — no duplicates, no omissions.
            #[test]
            fn pages_cover_the_result_exactly_once(
                products in prop::collection::vec(arb_product(), 0..40),
                mut query in arb_query(),
            ) {
                let catalog = catalog_of(products);
                query.page = 1;
                let first = evaluate(&catalog, &query);

                let mut collected = Vec::new();
                for page_no in 1..=first.total_pages {
                    query.page = page_no as u32;
                    collected.extend(evaluate(&catalog, &query).items);
                }

                prop_assert_eq!(collected.len(), first.total_count);

                let mut ids: Vec<&str> = collected.iter().map(|p| p.id.as_str()).collect();
                let before = ids.len();
                ids.sort_unstable();
                ids.dedup();
                prop_assert_eq!(ids.len(), before, "pages contained duplicate products");

                // One page past the end is empty, never an error.
                query.page = (first.total_pages + 1) as u32;
                prop_assert!(evaluate(&catalog, &query).items.is_empty());
            }
        }
    }
}

//! The static seed catalog: the marketplace's built-in listings.
//!
//! Seed products carry stable `seed-NNN` ids so carts and links survive a
//! process restart. Content is deterministic; only `listed_at` is computed
//! relative to boot.

use chrono::{DateTime, Duration, Utc};

use blueforge_core::ProductId;

use crate::product::{Product, Rating, Review};

fn days_ago(days: i64) -> DateTime<Utc> {
    Utc::now() - Duration::days(days)
}

fn review(rating: u8, author: &str, comment: &str, days: i64) -> Review {
    // Seed ratings are literals in range; new() cannot fail here.
    let rating = Rating::new(rating).unwrap_or_else(|_| unreachable!("seed rating out of range"));
    Review::new(rating, author, days_ago(days)).with_comment(comment)
}

/// The seed listings, most recent first.
pub fn seed_catalog() -> Vec<Product> {
    vec![
        Product::new(
            ProductId::seed(1),
            "CryptoTrack Portfolio Dashboard",
            "Track crypto holdings across wallets and exchanges with live \
             pricing, cost-basis accounting, and tax-lot exports.",
            "Finance",
            4_900,
            days_ago(12),
        )
        .with_features(vec![
            "Multi-exchange sync".to_string(),
            "Cost-basis tracking".to_string(),
            "Tax report export".to_string(),
        ])
        .with_tech_stack(vec!["Rust".to_string(), "Axum".to_string(), "PostgreSQL".to_string()])
        .with_reviews(vec![
            review(5, "mara", "Paid for itself at tax time.", 9),
            review(4, "deniz", "Solid, wants more exchanges.", 5),
        ]),
        Product::new(
            ProductId::seed(2),
            "FitFlow Workout Planner",
            "Adaptive workout programming with progressive overload, rest-day \
             scheduling, and wearable import.",
            "Health & Fitness",
            19_900,
            days_ago(20),
        )
        .with_features(vec![
            "Adaptive programming".to_string(),
            "Wearable import".to_string(),
        ])
        .with_tech_stack(vec!["Rust".to_string(), "SQLite".to_string()])
        .with_reviews(vec![review(5, "jo", "Replaced my spreadsheet.", 14)]),
        Product::new(
            ProductId::seed(3),
            "TaskPilot Team Boards",
            "Kanban boards with swimlanes, WIP limits, and a weekly digest \
             for async teams.",
            "Productivity",
            29_900,
            days_ago(31),
        )
        .with_features(vec![
            "WIP limits".to_string(),
            "Weekly digest".to_string(),
            "Async comments".to_string(),
        ])
        .with_tech_stack(vec!["Rust".to_string(), "Axum".to_string(), "Redis".to_string()])
        .with_reviews(vec![
            review(4, "priya", "Digest alone is worth it.", 22),
            review(3, "sam", "Boards get slow past 500 cards.", 18),
            review(5, "lee", "Our standup is 5 minutes now.", 11),
        ]),
        Product::new(
            ProductId::seed(4),
            "ShopLaunch Storefront Kit",
            "A ready-to-customize storefront with product pages, cart, and \
             checkout wired to a payment provider sandbox.",
            "E-commerce",
            8_900,
            days_ago(45),
        )
        .with_features(vec![
            "Cart and checkout".to_string(),
            "Inventory hooks".to_string(),
        ])
        .with_tech_stack(vec!["Rust".to_string(), "Axum".to_string()]),
        Product::new(
            ProductId::seed(5),
            "MindSpace Journal",
            "Guided journaling with mood tracking, streaks, and end-to-end \
             encrypted entries.",
            "Health & Fitness",
            7_500,
            days_ago(60),
        )
        .with_features(vec!["Mood tracking".to_string(), "Encrypted entries".to_string()])
        .with_tech_stack(vec!["Rust".to_string(), "SQLite".to_string()])
        .with_reviews(vec![review(4, "ana", "Streaks keep me honest.", 40)]),
        Product::new(
            ProductId::seed(6),
            "Invoice Wizard",
            "Generate, send, and reconcile invoices with late-payment \
             reminders and multi-currency totals.",
            "Finance",
            12_900,
            days_ago(75),
        )
        .with_features(vec![
            "Recurring invoices".to_string(),
            "Late reminders".to_string(),
        ])
        .with_tech_stack(vec!["Rust".to_string(), "PostgreSQL".to_string()]),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{Catalog, CatalogSources};

    #[test]
    fn seed_catalog_assembles_cleanly() {
        let catalog = Catalog::assemble(CatalogSources {
            generated: Vec::new(),
            vendor: Vec::new(),
            seed: seed_catalog(),
        })
        .unwrap();

        assert_eq!(catalog.len(), 6);
    }

    #[test]
    fn seed_ids_are_stable_and_namespaced() {
        let products = seed_catalog();
        assert_eq!(products[0].id.as_str(), "seed-001");
        for product in &products {
            assert!(product.id.as_str().starts_with("seed-"));
        }
    }

    #[test]
    fn seed_listings_are_most_recent_first() {
        let products = seed_catalog();
        for pair in products.windows(2) {
            assert!(pair[0].listed_at >= pair[1].listed_at);
        }
    }
}

//! `blueforge-catalog` — the marketplace catalog and its query engine.
//!
//! Two responsibilities live here:
//! - the **catalog store**: an immutable union of the three product sources
//!   (AI-generated, vendor-submitted, seed) in a fixed, deterministic order;
//! - the **query engine**: a pure function from `(catalog, query)` to the
//!   page of products to display (search → category filter → stable sort →
//!   paginate).
//!
//! The engine performs no I/O and never fails: every input combination,
//! including an empty catalog or an out-of-range page, degrades to a valid
//! (possibly empty) result.

pub mod product;
pub mod query;
pub mod seed;
pub mod store;

pub use product::{Product, Rating, Review};
pub use query::{CatalogQuery, QueryPage, SortKey, evaluate, PAGE_SIZE};
pub use store::{Catalog, CatalogSources};

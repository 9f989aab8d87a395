//! The catalog store: an immutable union of the three product sources.

use std::collections::HashSet;

use blueforge_core::{DomainError, DomainResult, ProductId};

use crate::product::Product;

/// The three product sources, in their fixed concatenation order.
///
/// Generated items come first, then vendor items, then the seed catalog.
/// "Newest" sorting relies on this order: each source lists its most recent
/// items first, and freshly generated/submitted items lead the union.
#[derive(Debug, Clone, Default)]
pub struct CatalogSources {
    pub generated: Vec<Product>,
    pub vendor: Vec<Product>,
    pub seed: Vec<Product>,
}

/// The unioned set of all products visible to the marketplace.
///
/// Immutable once assembled; a catalog change means assembling a new one and
/// re-running any queries against it.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    products: Vec<Product>,
}

impl Catalog {
    /// Assemble the catalog from its three sources.
    ///
    /// Id uniqueness across the union is enforced here: the namespace
    /// prefixes make cross-source collisions impossible by construction, but
    /// the check also catches duplicates within a single source. A collision
    /// is a `Conflict` — two different listings must never share an id, or
    /// display and cart behavior would silently conflate them.
    pub fn assemble(sources: CatalogSources) -> DomainResult<Self> {
        let CatalogSources { generated, vendor, seed } = sources;

        let mut products = Vec::with_capacity(generated.len() + vendor.len() + seed.len());
        products.extend(generated);
        products.extend(vendor);
        products.extend(seed);

        let mut seen: HashSet<&str> = HashSet::with_capacity(products.len());
        for product in &products {
            if !seen.insert(product.id.as_str()) {
                return Err(DomainError::conflict(format!(
                    "duplicate product id '{}' in catalog",
                    product.id
                )));
            }
        }

        Ok(Self { products })
    }

    pub fn empty() -> Self {
        Self { products: Vec::new() }
    }

    pub fn products(&self) -> &[Product] {
        &self.products
    }

    pub fn len(&self) -> usize {
        self.products.len()
    }

    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    pub fn get(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }

    /// Distinct categories in first-seen order (feeds the category filter UI).
    pub fn categories(&self) -> Vec<String> {
        let mut seen: HashSet<&str> = HashSet::new();
        let mut categories = Vec::new();
        for product in &self.products {
            if seen.insert(product.category.as_str()) {
                categories.push(product.category.clone());
            }
        }
        categories
    }
}

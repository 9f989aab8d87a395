//! Request/response DTOs and JSON mapping helpers.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blueforge_cart::{Cart, CartLine, CartStatus};
use blueforge_catalog::{CatalogQuery, SortKey};

/// Query-string parameters of `GET /catalog`.
///
/// Everything is optional; missing or unrecognized values fall back to the
/// query defaults rather than failing the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CatalogQueryParams {
    /// Free-text search.
    pub q: Option<String>,
    pub category: Option<String>,
    pub sort: Option<String>,
    pub page: Option<u32>,
}

impl CatalogQueryParams {
    pub fn into_query(self) -> CatalogQuery {
        CatalogQuery {
            search_text: self.q.unwrap_or_default(),
            category: self.category.filter(|c| !c.is_empty()),
            sort: self.sort.as_deref().map(SortKey::parse).unwrap_or_default(),
            page: self.page.unwrap_or(1),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub struct CreateCartRequest {
    /// Owner of the cart; a fresh user id is minted when absent (anonymous
    /// shopper).
    pub user_id: Option<Uuid>,
}

fn default_quantity() -> u32 {
    1
}

#[derive(Debug, Clone, Deserialize)]
pub struct AddItemRequest {
    pub product_id: String,
    #[serde(default = "default_quantity")]
    pub quantity: u32,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    /// Tokenized payment method; defaults to the always-approved test token.
    #[serde(default = "default_card_token")]
    pub card_token: String,
}

fn default_card_token() -> String {
    "tok-ok".to_string()
}

#[derive(Debug, Clone, Deserialize)]
pub struct IdeaRequest {
    pub prompt: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct DeploymentRequest {
    pub product_id: String,
    /// Defaults to the product name.
    pub site_name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct MenuParams {
    pub role: Option<String>,
}

/// Cart representation returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct CartView {
    pub id: String,
    pub user_id: Uuid,
    pub status: CartStatus,
    pub lines: Vec<CartLine>,
    pub total_cents: u64,
    pub item_count: u32,
}

pub fn cart_to_view(id: &blueforge_core::CartId, cart: &Cart) -> CartView {
    CartView {
        id: id.to_string(),
        user_id: *cart.user_id().as_uuid(),
        status: cart.status(),
        lines: cart.lines().to_vec(),
        total_cents: cart.total_cents(),
        item_count: cart.item_count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn params_map_onto_query_defaults() {
        let query = CatalogQueryParams::default().into_query();
        assert_eq!(query, CatalogQuery::default());
    }

    #[test]
    fn params_map_all_fields() {
        let query = CatalogQueryParams {
            q: Some("crypto".to_string()),
            category: Some("Finance".to_string()),
            sort: Some("price-desc".to_string()),
            page: Some(3),
        }
        .into_query();

        assert_eq!(query.search_text, "crypto");
        assert_eq!(query.category.as_deref(), Some("Finance"));
        assert_eq!(query.sort, SortKey::PriceDesc);
        assert_eq!(query.page, 3);
    }

    #[test]
    fn unknown_sort_and_empty_category_degrade() {
        let query = CatalogQueryParams {
            q: None,
            category: Some(String::new()),
            sort: Some("sideways".to_string()),
            page: None,
        }
        .into_query();

        assert_eq!(query.category, None);
        assert_eq!(query.sort, SortKey::Newest);
        assert_eq!(query.page, 1);
    }
}

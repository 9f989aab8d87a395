//! Role-based menu visibility.
//!
//! Visibility is a single pure function of the role. The admin override
//! lives here as one explicit rule instead of conditionals sprinkled through
//! the presentation layer.

use serde::{Deserialize, Serialize};

use crate::roles::Role;

/// Navigable areas of the marketplace.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuItem {
    Marketplace,
    IdeaLab,
    Cart,
    Orders,
    Dashboard,
    /// Vendor area: manage own listings.
    Listings,
    /// Vendor area: sales and payout history.
    Payouts,
    /// Admin area: manage marketplace users.
    UserManagement,
    Settings,
}

/// The menu items visible to a role, in display order.
///
/// Rules:
/// - every role sees the storefront areas (marketplace, idea lab, cart,
///   orders, dashboard) and settings;
/// - vendors additionally see their listings and payouts;
/// - admins see everything any role sees, plus user management — this is
///   the explicit admin override.
pub fn visible_menu(role: Role) -> Vec<MenuItem> {
    use MenuItem::*;

    let mut items = vec![Marketplace, IdeaLab, Cart, Orders, Dashboard];

    match role {
        Role::Customer => {}
        Role::Vendor => {
            items.extend([Listings, Payouts]);
        }
        Role::Admin => {
            items.extend([Listings, Payouts, UserManagement]);
        }
    }

    items.push(Settings);
    items
}

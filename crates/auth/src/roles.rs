use serde::{Deserialize, Deserializer, Serialize};

/// Marketplace role.
///
/// A closed set, deliberately not open-ended strings: every policy decision
/// in this crate matches exhaustively on the variant, so adding a role is a
/// compile-visible change.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    /// A shopper: browses the marketplace, owns carts and orders.
    #[default]
    Customer,
    /// A seller: additionally manages their own listings and payouts.
    Vendor,
    /// Operates the marketplace itself.
    Admin,
}

impl<'de> Deserialize<'de> for Role {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Role::parse(&s))
    }
}

impl Role {
    /// Parse a role name, falling back to `Customer` for anything
    /// unrecognized — the least-privileged interpretation.
    pub fn parse(s: &str) -> Self {
        match s {
            "vendor" => Self::Vendor,
            "admin" => Self::Admin,
            _ => Self::Customer,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Role::Customer => "customer",
            Role::Vendor => "vendor",
            Role::Admin => "admin",
        }
    }

    pub fn is_admin(self) -> bool {
        self == Role::Admin
    }
}

impl core::fmt::Display for Role {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

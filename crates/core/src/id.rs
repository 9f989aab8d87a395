//! Strongly-typed identifiers used across the domain.

use core::str::FromStr;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::DomainError;

/// Identifier of a marketplace user (customer, vendor staff, admin).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(Uuid);

/// Identifier of a vendor account (a seller on the marketplace).
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(Uuid);

/// Identifier of a shopping cart.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CartId(Uuid);

macro_rules! impl_uuid_newtype {
    ($t:ty, $name:literal) => {
        impl $t {
            /// Create a new identifier.
            ///
            /// Uses UUIDv7 (time-ordered). Prefer passing IDs explicitly in tests
            /// for determinism.
            pub fn new() -> Self {
                Self(Uuid::now_v7())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl Default for $t {
            fn default() -> Self {
                Self::new()
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                core::fmt::Display::fmt(&self.0, f)
            }
        }

        impl From<Uuid> for $t {
            fn from(value: Uuid) -> Self {
                Self(value)
            }
        }

        impl From<$t> for Uuid {
            fn from(value: $t) -> Self {
                value.0
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let uuid = Uuid::from_str(s)
                    .map_err(|e| DomainError::invalid_id(format!("{}: {}", $name, e)))?;
                Ok(Self(uuid))
            }
        }
    };
}

impl_uuid_newtype!(UserId, "UserId");
impl_uuid_newtype!(VendorId, "VendorId");
impl_uuid_newtype!(CartId, "CartId");

/// Which catalog source a product id belongs to.
///
/// The three sources mint ids in disjoint prefix namespaces, which is what
/// guarantees id uniqueness across the unioned catalog.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdNamespace {
    /// AI-generated listings (`gen-` prefix).
    Generated,
    /// Vendor-submitted listings (`vnd-` prefix).
    Vendor,
    /// The static seed catalog (`seed-` prefix).
    Seed,
}

impl IdNamespace {
    pub fn prefix(self) -> &'static str {
        match self {
            IdNamespace::Generated => "gen-",
            IdNamespace::Vendor => "vnd-",
            IdNamespace::Seed => "seed-",
        }
    }
}

/// Identifier of a product listing.
///
/// Product ids are strings, not UUIDs: the namespace prefix is part of the
/// identifier and records which source listed the product.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(String);

impl ProductId {
    /// Mint a fresh id in the AI-generated namespace.
    pub fn generated() -> Self {
        Self(format!("gen-{}", Uuid::now_v7()))
    }

    /// Mint a fresh id in the vendor namespace.
    pub fn vendor() -> Self {
        Self(format!("vnd-{}", Uuid::now_v7()))
    }

    /// Seed catalog ids are stable across runs (`seed-001`, `seed-002`, ...).
    pub fn seed(n: u32) -> Self {
        Self(format!("seed-{n:03}"))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The namespace this id was minted in, or `None` for an id that slipped
    /// in without a recognized prefix (e.g. through deserialization).
    pub fn namespace(&self) -> Option<IdNamespace> {
        [IdNamespace::Generated, IdNamespace::Vendor, IdNamespace::Seed]
            .into_iter()
            .find(|ns| self.0.starts_with(ns.prefix()))
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for ProductId {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let id = Self(s.to_string());
        if s.is_empty() || id.namespace().is_none() {
            return Err(DomainError::invalid_id(format!(
                "ProductId: '{s}' has no recognized namespace prefix"
            )));
        }
        Ok(id)
    }
}

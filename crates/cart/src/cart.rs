use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blueforge_catalog::Product;
use blueforge_core::{CartId, DomainError, DomainResult, Entity, ProductId, UserId};

/// Cart line: product reference plus a snapshot of name and price taken at
/// add time, so later catalog changes don't silently reprice a cart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CartLine {
    pub product_id: ProductId,
    pub name: String,
    /// Price in smallest currency unit (cents), snapshotted at add time.
    pub unit_price_cents: u64,
    pub quantity: u32,
}

impl CartLine {
    pub fn subtotal_cents(&self) -> u64 {
        self.unit_price_cents * u64::from(self.quantity)
    }
}

/// Cart lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CartStatus {
    Open,
    CheckedOut,
}

/// A shopping cart owned by one user.
///
/// Carts mutate in place while `Open`; once checked out they are frozen —
/// any further mutation is a conflict.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cart {
    id: CartId,
    user_id: UserId,
    status: CartStatus,
    lines: Vec<CartLine>,
    checked_out_at: Option<DateTime<Utc>>,
}

impl Cart {
    pub fn new(id: CartId, user_id: UserId) -> Self {
        Self {
            id,
            user_id,
            status: CartStatus::Open,
            lines: Vec::new(),
            checked_out_at: None,
        }
    }

    pub fn user_id(&self) -> UserId {
        self.user_id
    }

    pub fn status(&self) -> CartStatus {
        self.status
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn checked_out_at(&self) -> Option<DateTime<Utc>> {
        self.checked_out_at
    }

    pub fn is_open(&self) -> bool {
        self.status == CartStatus::Open
    }

    /// Total across all lines, in cents.
    pub fn total_cents(&self) -> u64 {
        self.lines.iter().map(CartLine::subtotal_cents).sum()
    }

    /// Total number of units across all lines.
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|l| l.quantity).sum()
    }

    fn ensure_open(&self) -> DomainResult<()> {
        if !self.is_open() {
            return Err(DomainError::invariant("checked-out carts cannot be modified"));
        }
        Ok(())
    }

    /// Add a product to the cart, snapshotting its name and price.
    ///
    /// Adding a product already in the cart merges quantities into the
    /// existing line.
    pub fn add_item(&mut self, product: &Product, quantity: u32) -> DomainResult<()> {
        self.ensure_open()?;

        if quantity == 0 {
            return Err(DomainError::validation("quantity must be at least 1"));
        }

        if let Some(line) = self.lines.iter_mut().find(|l| l.product_id == product.id) {
            line.quantity = line
                .quantity
                .checked_add(quantity)
                .ok_or_else(|| DomainError::validation("quantity overflow"))?;
        } else {
            self.lines.push(CartLine {
                product_id: product.id.clone(),
                name: product.name.clone(),
                unit_price_cents: product.price_cents,
                quantity,
            });
        }

        Ok(())
    }

    pub fn remove_item(&mut self, product_id: &ProductId) -> DomainResult<()> {
        self.ensure_open()?;

        let before = self.lines.len();
        self.lines.retain(|l| &l.product_id != product_id);
        if self.lines.len() == before {
            return Err(DomainError::not_found());
        }
        Ok(())
    }

    /// Set the quantity of an existing line; `0` removes the line.
    pub fn set_quantity(&mut self, product_id: &ProductId, quantity: u32) -> DomainResult<()> {
        self.ensure_open()?;

        if quantity == 0 {
            return self.remove_item(product_id);
        }

        match self.lines.iter_mut().find(|l| &l.product_id == product_id) {
            Some(line) => {
                line.quantity = quantity;
                Ok(())
            }
            None => Err(DomainError::not_found()),
        }
    }

    /// Validate that the cart can be checked out and return the amount to
    /// charge. Does not transition state — call `confirm_checkout` once the
    /// charge has succeeded.
    pub fn checkout_total(&self) -> DomainResult<u64> {
        if self.status == CartStatus::CheckedOut {
            return Err(DomainError::conflict("cart is already checked out"));
        }
        if self.lines.is_empty() {
            return Err(DomainError::validation("cannot check out an empty cart"));
        }
        Ok(self.total_cents())
    }

    /// Freeze the cart after a successful charge.
    pub fn confirm_checkout(&mut self, at: DateTime<Utc>) -> DomainResult<()> {
        if self.status == CartStatus::CheckedOut {
            return Err(DomainError::conflict("cart is already checked out"));
        }
        if self.lines.is_empty() {
            return Err(DomainError::validation("cannot check out an empty cart"));
        }
        self.status = CartStatus::CheckedOut;
        self.checked_out_at = Some(at);
        Ok(())
    }
}

impl Entity for Cart {
    type Id = CartId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use blueforge_core::{DomainError, DomainResult, Entity, ProductId, ValueObject};

/// Review rating: an integer between 1 and 5 inclusive.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Rating(u8);

impl Rating {
    pub fn new(value: u8) -> DomainResult<Self> {
        if !(1..=5).contains(&value) {
            return Err(DomainError::validation(format!(
                "rating must be between 1 and 5, got {value}"
            )));
        }
        Ok(Self(value))
    }

    pub fn value(self) -> u8 {
        self.0
    }
}

/// A customer review attached to a product listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Review {
    pub rating: Rating,
    pub author: String,
    pub comment: Option<String>,
    pub submitted_at: DateTime<Utc>,
}

impl Review {
    pub fn new(rating: Rating, author: impl Into<String>, submitted_at: DateTime<Utc>) -> Self {
        Self {
            rating,
            author: author.into(),
            comment: None,
            submitted_at,
        }
    }

    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = Some(comment.into());
        self
    }
}

impl ValueObject for Review {}

/// A product listing: a sellable app blueprint.
///
/// Products are read-only value records once listed. Provenance (which source
/// listed the product) is carried by the id's namespace prefix and is opaque
/// to the query engine.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: ProductId,
    pub name: String,
    pub description: String,
    pub category: String,
    /// Price in smallest currency unit (cents).
    pub price_cents: u64,
    pub reviews: Vec<Review>,
    /// Blueprint metadata: headline features of the app concept.
    pub features: Vec<String>,
    /// Blueprint metadata: suggested implementation stack.
    pub tech_stack: Vec<String>,
    pub listed_at: DateTime<Utc>,
}

impl Product {
    pub fn new(
        id: ProductId,
        name: impl Into<String>,
        description: impl Into<String>,
        category: impl Into<String>,
        price_cents: u64,
        listed_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            description: description.into(),
            category: category.into(),
            price_cents,
            reviews: Vec::new(),
            features: Vec::new(),
            tech_stack: Vec::new(),
            listed_at,
        }
    }

    pub fn with_reviews(mut self, reviews: Vec<Review>) -> Self {
        self.reviews = reviews;
        self
    }

    pub fn with_features(mut self, features: Vec<String>) -> Self {
        self.features = features;
        self
    }

    pub fn with_tech_stack(mut self, tech_stack: Vec<String>) -> Self {
        self.tech_stack = tech_stack;
        self
    }

    /// Arithmetic mean of the review ratings.
    ///
    /// A product with no reviews has an effective mean of `0.0`, so it sorts
    /// below any rated product when ordering by rating (descending).
    pub fn mean_rating(&self) -> f64 {
        if self.reviews.is_empty() {
            return 0.0;
        }
        let sum: u32 = self.reviews.iter().map(|r| u32::from(r.rating.value())).sum();
        f64::from(sum) / self.reviews.len() as f64
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

//! AI idea generation port.

use std::time::Duration;

use chrono::Utc;
use serde::{Deserialize, Serialize};

use blueforge_catalog::Product;
use blueforge_core::ProductId;

use crate::error::IntegrationError;

/// What the user asked the idea lab for.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct IdeaPrompt {
    pub text: String,
}

/// A generated app blueprint, not yet listed.
///
/// Becomes a catalog product (in the `gen-` id namespace) only when the
/// caller decides to list it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BlueprintIdea {
    pub name: String,
    pub description: String,
    pub category: String,
    pub suggested_price_cents: u64,
    pub features: Vec<String>,
    pub tech_stack: Vec<String>,
}

impl BlueprintIdea {
    /// List this idea as a catalog product under a fresh generated id.
    pub fn into_product(self) -> Product {
        Product::new(
            ProductId::generated(),
            self.name,
            self.description,
            self.category,
            self.suggested_price_cents,
            Utc::now(),
        )
        .with_features(self.features)
        .with_tech_stack(self.tech_stack)
    }
}

/// Port to the AI idea generation service.
#[async_trait::async_trait]
pub trait IdeaGenerator: Send + Sync {
    async fn generate(&self, prompt: &IdeaPrompt) -> Result<BlueprintIdea, IntegrationError>;
}

/// Fixed-delay mock generator.
///
/// Derives a deterministic idea from the prompt text, so tests can assert on
/// output without stubbing randomness.
#[derive(Debug, Clone)]
pub struct MockIdeaGenerator {
    delay: Duration,
}

impl MockIdeaGenerator {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockIdeaGenerator {
    fn default() -> Self {
        Self::new(Duration::from_millis(400))
    }
}

#[async_trait::async_trait]
impl IdeaGenerator for MockIdeaGenerator {
    async fn generate(&self, prompt: &IdeaPrompt) -> Result<BlueprintIdea, IntegrationError> {
        let text = prompt.text.trim();
        if text.is_empty() {
            return Err(IntegrationError::Rejected("prompt cannot be empty".to_string()));
        }

        tokio::time::sleep(self.delay).await;

        let category = categorize(text);
        let name = title_case(text);
        tracing::debug!(prompt = text, category, "generated blueprint idea");

        Ok(BlueprintIdea {
            description: format!(
                "An app concept generated from your prompt: {text}. Ships with \
                 a starter data model, API surface, and deployment recipe."
            ),
            category: category.to_string(),
            // Longer prompts read as more ambitious scopes; price accordingly.
            suggested_price_cents: 4_900 + (text.len() as u64 % 8) * 1_000,
            features: vec![
                "User accounts".to_string(),
                "Usage dashboard".to_string(),
                format!("{name} core workflow"),
            ],
            tech_stack: vec!["Rust".to_string(), "Axum".to_string(), "PostgreSQL".to_string()],
            name,
        })
    }
}

fn categorize(text: &str) -> &'static str {
    let lower = text.to_lowercase();
    if ["fitness", "workout", "health", "meal"].iter().any(|k| lower.contains(k)) {
        "Health & Fitness"
    } else if ["shop", "store", "commerce", "sell"].iter().any(|k| lower.contains(k)) {
        "E-commerce"
    } else if ["crypto", "finance", "budget", "invoice"].iter().any(|k| lower.contains(k)) {
        "Finance"
    } else {
        "Productivity"
    }
}

fn title_case(text: &str) -> String {
    let mut words: Vec<String> = text
        .split_whitespace()
        .take(4)
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect();
    words.push("Blueprint".to_string());
    words.join(" ")
}

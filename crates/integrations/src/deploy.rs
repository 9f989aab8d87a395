//! Deployment port: stand up a purchased blueprint as a running site.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use blueforge_core::ProductId;

use crate::error::IntegrationError;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployRequest {
    pub product_id: ProductId,
    /// Human-readable site name; becomes the subdomain slug.
    pub site_name: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeploymentTicket {
    pub ticket_id: Uuid,
    pub product_id: ProductId,
    pub url: String,
    pub issued_at: DateTime<Utc>,
}

/// Port to the deployment provider.
#[async_trait::async_trait]
pub trait DeploymentService: Send + Sync {
    async fn deploy(&self, request: &DeployRequest) -> Result<DeploymentTicket, IntegrationError>;
}

/// Fixed-delay mock deployer: issues a ticket with a deterministic subdomain
/// derived from the site name.
#[derive(Debug, Clone)]
pub struct MockDeploymentService {
    delay: Duration,
}

impl MockDeploymentService {
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }
}

impl Default for MockDeploymentService {
    fn default() -> Self {
        Self::new(Duration::from_millis(800))
    }
}

#[async_trait::async_trait]
impl DeploymentService for MockDeploymentService {
    async fn deploy(&self, request: &DeployRequest) -> Result<DeploymentTicket, IntegrationError> {
        let slug = slugify(&request.site_name);
        if slug.is_empty() {
            return Err(IntegrationError::Rejected(
                "site name must contain at least one alphanumeric character".to_string(),
            ));
        }

        tokio::time::sleep(self.delay).await;

        let ticket = DeploymentTicket {
            ticket_id: Uuid::now_v7(),
            product_id: request.product_id.clone(),
            url: format!("https://{slug}.blueforge.app"),
            issued_at: Utc::now(),
        };
        tracing::debug!(ticket_id = %ticket.ticket_id, url = %ticket.url, "deployment issued");
        Ok(ticket)
    }
}

fn slugify(name: &str) -> String {
    let mut slug = String::with_capacity(name.len());
    let mut last_dash = true;
    for c in name.chars() {
        if c.is_ascii_alphanumeric() {
            slug.push(c.to_ascii_lowercase());
            last_dash = false;
        } else if !last_dash {
            slug.push('-');
            last_dash = true;
        }
    }
    slug.trim_end_matches('-').to_string()
}

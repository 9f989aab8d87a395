//! `blueforge-integrations`
//!
//! **Responsibility:** boundary to the third-party services the marketplace
//! talks to — AI idea generation, payment processing, deployment.
//!
//! Each integration is an explicit async port:
//! - It must not mutate domain state; it returns a result the caller acts on.
//! - Each port ships with a fixed-delay mock that preserves the
//!   "pending → success/failure" contract, so a real networked client can
//!   stand behind the same trait without callers changing.

pub mod deploy;
pub mod error;
pub mod ideas;
pub mod payment;

pub use deploy::{DeployRequest, DeploymentService, DeploymentTicket, MockDeploymentService};
pub use error::IntegrationError;
pub use ideas::{BlueprintIdea, IdeaGenerator, IdeaPrompt, MockIdeaGenerator};
pub use payment::{ChargeRequest, MockPaymentGateway, PaymentGateway, PaymentReceipt};

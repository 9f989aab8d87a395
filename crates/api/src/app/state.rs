//! Application state.
//!
//! Process-wide state lives in one explicit struct passed to handlers via
//! axum `State`, never in globals. Side-effectful collaborators (idea
//! generation, payment, deployment) are injected as trait objects so the
//! fixed-delay mocks and real networked clients are interchangeable.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use blueforge_cart::Cart;
use blueforge_catalog::Catalog;
use blueforge_core::CartId;
use blueforge_integrations::{DeploymentService, IdeaGenerator, PaymentGateway};

#[derive(Clone)]
pub struct AppState {
    pub catalog: Arc<Catalog>,
    pub carts: Arc<RwLock<HashMap<CartId, Cart>>>,
    pub ideas: Arc<dyn IdeaGenerator>,
    pub payments: Arc<dyn PaymentGateway>,
    pub deployments: Arc<dyn DeploymentService>,
}

impl AppState {
    pub fn new(
        catalog: Catalog,
        ideas: Arc<dyn IdeaGenerator>,
        payments: Arc<dyn PaymentGateway>,
        deployments: Arc<dyn DeploymentService>,
    ) -> Self {
        Self {
            catalog: Arc::new(catalog),
            carts: Arc::new(RwLock::new(HashMap::new())),
            ideas,
            payments,
            deployments,
        }
    }
}

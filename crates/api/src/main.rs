use std::sync::Arc;

use blueforge_api::app::state::AppState;
use blueforge_catalog::{seed::seed_catalog, Catalog, CatalogSources};
use blueforge_integrations::{MockDeploymentService, MockIdeaGenerator, MockPaymentGateway};

#[tokio::main]
async fn main() {
    blueforge_observability::init();

    // Generated and vendor sources are empty at boot; listings arrive while
    // the process runs. The seed catalog is always present.
    let catalog = Catalog::assemble(CatalogSources {
        generated: Vec::new(),
        vendor: Vec::new(),
        seed: seed_catalog(),
    })
    .expect("seed catalog must assemble");

    let state = AppState::new(
        catalog,
        Arc::new(MockIdeaGenerator::default()),
        Arc::new(MockPaymentGateway::default()),
        Arc::new(MockDeploymentService::default()),
    );

    let app = blueforge_api::app::build_app(state);

    let addr = std::env::var("BLUEFORGE_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .unwrap_or_else(|e| panic!("failed to bind {addr}: {e}"));

    tracing::info!("listening on {}", listener.local_addr().unwrap());

    axum::serve(listener, app).await.unwrap();
}

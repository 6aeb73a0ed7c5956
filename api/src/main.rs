mod error;
mod routes;
mod services;

use std::sync::Arc;

use axum::Router;
use nutrient_resolver::{NutrientResolver, UsdaClient};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

#[derive(Clone)]
pub struct AppState {
    pub resolver: Arc<NutrientResolver<UsdaClient>>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env())
        .with(tracing_subscriber::fmt::layer())
        .init();

    let port = dotenvy::var("PORT").expect("PORT env var must be set");

    let resolver = NutrientResolver::new(UsdaClient::from_env());
    let state = AppState {
        resolver: Arc::new(resolver),
    };

    let app = Router::<AppState>::new()
        .nest("/nutrition", routes::nutrition::nutrition_routes())
        .nest("/profile", routes::profile::profile_routes())
        .with_state(state);

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{port}")).await?;
    tracing::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;

    Ok(())
}

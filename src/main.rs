use actix_web::{App, HttpServer, web::Data};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;
use user_service::config::AppConfig;
use user_service::openapi::ApiDoc;
use user_service::store::{MongoUserStore, UserStore};
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// User Service Entry Point
///
/// - Loads `.env` (if present) and reads [`AppConfig`] from the environment
/// - Connects to MongoDB once and shares the handle with every worker
/// - Serves the greeting, health and user endpoints plus Swagger UI
/// - Closes the MongoDB client after the server stops
///
/// # Endpoints
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Logging
/// Controlled by `RUST_LOG` (default `info`).
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env().map_err(|e| {
        error!(error = %e, "invalid configuration");
        std::io::Error::other(e)
    })?;

    let mongo = MongoUserStore::connect(&config).await.map_err(|e| {
        error!(error = %e, uri = %config.mongodb_uri, "cannot connect to MongoDB");
        std::io::Error::other(e)
    })?;

    let store: Data<dyn UserStore> = Data::from(Arc::new(mongo.clone()) as Arc<dyn UserStore>);
    let app_config = Data::new(config.clone());

    info!(host = %config.host, port = config.port, "App listening");
    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .app_data(store.clone())
            .app_data(app_config.clone())
            .configure(user_service::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind((config.host.as_str(), config.port))?
    .run()
    .await?;

    mongo.shutdown().await;
    Ok(())
}

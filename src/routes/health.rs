use crate::models::HealthResponse;
use crate::store::UserStore;
use actix_web::{HttpResponse, Responder, get, web};
use tracing::warn;

#[utoipa::path(
    get,
    path = "/health",
    responses((status = 200, description = "Service is up", body = HealthResponse)),
    tag = "Health Check"
)]
#[get("/health")]
pub async fn health(store: web::Data<dyn UserStore>) -> impl Responder {
    let database_up = match store.ping().await {
        Ok(()) => true,
        Err(e) => {
            warn!(error = %e, "user store ping failed");
            false
        }
    };
    HttpResponse::Ok().json(HealthResponse::up(database_up))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(health);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::{MockUserStore, StoreError};
    use actix_web::{App, test};
    use chrono::DateTime;
    use serde_json::from_str;
    use std::sync::Arc;

    async fn call_health(store: MockUserStore) -> HealthResponse {
        let store: Arc<dyn UserStore> = Arc::new(store);
        let app = test::init_service(
            App::new()
                .app_data(web::Data::from(store))
                .configure(configure_routes),
        )
        .await;

        let req = test::TestRequest::get().uri("/health").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        from_str(body_str).unwrap()
    }

    #[actix_web::test]
    async fn test_health_endpoint() {
        let mut store = MockUserStore::new();
        store.expect_ping().times(1).returning(|| Ok(()));

        let health_response = call_health(store).await;

        assert_eq!(health_response.status, "UP");
        assert_eq!(health_response.database, "UP");
        assert!(DateTime::parse_from_rfc3339(&health_response.timestamp).is_ok());
    }

    #[actix_web::test]
    async fn test_health_reports_database_down() {
        let mut store = MockUserStore::new();
        store
            .expect_ping()
            .returning(|| Err(StoreError::Database("server selection timeout".to_string())));

        let health_response = call_health(store).await;

        // Liveness does not depend on the database
        assert_eq!(health_response.status, "UP");
        assert_eq!(health_response.database, "DOWN");
    }
}

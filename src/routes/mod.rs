use actix_web::web;

/// # Greeting Endpoints
///
/// - `GET /` answers `Hello, world!` as plain text
/// - `GET /hello/{first}/{last}` answers a personal greeting
pub mod greeting;

/// # Health Check Endpoint
///
/// Returns the service status, the user store reachability and a timestamp.
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "UP",
///   "database": "UP",
///   "timestamp": "2023-10-05T12:34:56.789Z"
/// }
/// ```
pub mod health;

/// # User Endpoints
///
/// Creates and looks up users. Creation validates the submitted email and
/// password first and answers `400 Bad Request` with the verdict when they
/// are rejected.
///
/// ## Example Request
/// ```json
/// {
///   "name": "Jacques Cousteau",
///   "about": "Sailor, researcher",
///   "email": "jacques@example.com",
///   "avatar": "https://example.com/avatar.jpg",
///   "password": "1amAp0k3m0n%"
/// }
/// ```
pub mod users;

/// # Route Configuration
///
/// Mounts every endpoint at the root path. Handlers expect
/// `web::Data<dyn UserStore>` and `web::Data<AppConfig>` in app data.
///
/// ```text
/// GET  /                    - Plain-text greeting
/// GET  /hello/{first}/{last} - Personal greeting
/// GET  /health              - Service health status
/// GET  /users               - All users
/// POST /users               - Validate and create a user
/// GET  /users/{slug}        - One user by slug
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.configure(greeting::configure_routes)
        .configure(health::configure_routes)
        .configure(users::configure_routes);
}

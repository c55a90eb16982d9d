/// # Health Status Response
///
/// Liveness payload returned by `GET /health`, including the reachability of
/// the user store.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "UP",
///   "database": "DOWN",
///   "timestamp": "2024-03-10T15:30:45.123456789Z"
/// }
/// ```
pub mod health;

/// # User Payloads
///
/// Request, stored-record and response shapes for the `/users` endpoints.
pub mod user;

pub use health::HealthResponse;
pub use user::{CreateUserRequest, UserCreatedResponse, UserRecord};

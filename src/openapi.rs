use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Generated at compile time from the `#[utoipa::path]` annotations on the
/// handlers. Served at `/api-docs/openapi.json` and browsable through
/// Swagger UI at `/swagger-ui/`.
///
/// # Endpoints
/// - Greeting: `GET /`, `GET /hello/{first}/{last}`
/// - Health Check: `GET /health`
/// - Users: `GET /users`, `POST /users`, `GET /users/{slug}`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::greeting::index,
        crate::routes::greeting::hello,
        crate::routes::health::health,
        crate::routes::users::create_user,
        crate::routes::users::list_users,
        crate::routes::users::get_user,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::user::CreateUserRequest,
            crate::models::user::UserRecord,
            crate::models::user::UserCreatedResponse,
            crate::validation::Verdict,
            crate::error::ErrorBody
        )
    ),
    tags(
        (name = "Greeting", description = "Plain-text greetings"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Users", description = "User validation, creation and lookup")
    ),
    info(
        description = "Greeting and user-registration service backed by MongoDB",
        title = "User Service API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;

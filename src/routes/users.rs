use crate::config::AppConfig;
use crate::error::{ApiError, ApiResult};
use crate::models::{CreateUserRequest, UserCreatedResponse};
use crate::store::{UserStore, insert_with_unique_slug};
use crate::utils::generate_url;
use crate::validation::{ValidationError, Verdict, validate_user_input};
use actix_web::{HttpRequest, HttpResponse, error, get, post, web};
use tracing::info;

/// # Create User
///
/// 1. Validates `email` and `password`
/// 2. Allocates a unique slug from `name`
/// 3. Persists the user (the password is not stored), allocating again if a
///    concurrent request claimed the slug first
///
/// ## Responses
/// - **201 Created**: `{message: "success", verdict, url, data}`
/// - **400 Bad Request**: the rejected `Verdict`, e.g.
///   `{"isValidated": false, "message": null, "error": "Wrong email"}`.
///   A body that is not a JSON object gets the `Incorrect data` verdict.
/// - **409 Conflict**: email already registered, or no free slug suffix left
/// - **500 Internal Server Error**: user store failure
#[utoipa::path(
    post,
    path = "/users",
    request_body = CreateUserRequest,
    responses(
        (status = 201, description = "User created", body = UserCreatedResponse),
        (status = 400, description = "Rejected email or password", body = crate::validation::Verdict),
        (status = 409, description = "Email already registered, or every slug suffix for this name is taken", body = crate::error::ErrorBody),
        (status = 500, description = "Server error", body = crate::error::ErrorBody)
    ),
    tag = "Users"
)]
#[post("/users")]
pub async fn create_user(
    req: web::Json<CreateUserRequest>,
    store: web::Data<dyn UserStore>,
    config: web::Data<AppConfig>,
) -> ApiResult<HttpResponse> {
    let request = req.into_inner();

    let verdict = validate_user_input(&request.credentials());
    if !verdict.is_validated() {
        info!(
            reason = verdict.error().unwrap_or_default(),
            "user input rejected"
        );
        return Ok(HttpResponse::BadRequest().json(verdict));
    }

    let user = insert_with_unique_slug(store.get_ref(), &request.name, |slug| {
        request.clone().into_record(slug)
    })
    .await?;
    let url = generate_url(&format!("{}/users", config.public_base_url), &user.slug);
    info!(slug = %user.slug, "user created");

    Ok(HttpResponse::Created().json(UserCreatedResponse::success(verdict, url, user)))
}

#[utoipa::path(
    get,
    path = "/users",
    responses(
        (status = 200, description = "All users, oldest first", body = Vec<crate::models::UserRecord>),
        (status = 500, description = "Server error", body = crate::error::ErrorBody)
    ),
    tag = "Users"
)]
#[get("/users")]
pub async fn list_users(store: web::Data<dyn UserStore>) -> ApiResult<HttpResponse> {
    let users = store.list().await?;
    Ok(HttpResponse::Ok().json(users))
}

#[utoipa::path(
    get,
    path = "/users/{slug}",
    params(("slug" = String, Path, description = "User slug")),
    responses(
        (status = 200, description = "User found", body = crate::models::UserRecord),
        (status = 404, description = "No such user", body = crate::error::ErrorBody)
    ),
    tag = "Users"
)]
#[get("/users/{slug}")]
pub async fn get_user(
    path: web::Path<String>,
    store: web::Data<dyn UserStore>,
) -> ApiResult<HttpResponse> {
    let slug = path.into_inner();
    match store.find_by_slug(&slug).await? {
        Some(user) => Ok(HttpResponse::Ok().json(user)),
        None => Err(ApiError::NotFound(format!("no user with slug {}", slug))),
    }
}

/// Answers unreadable `POST /users` bodies with the same verdict shape as
/// rejected credentials.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> error::Error {
    info!(error = %err, "unreadable user payload");
    let verdict = Verdict::rejected(ValidationError::IncorrectData);
    error::InternalError::from_response(err, HttpResponse::BadRequest().json(verdict)).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(web::JsonConfig::default().error_handler(json_error_handler))
        .service(create_user)
        .service(list_users)
        .service(get_user);
}

#[cfg(test)]
#[path = "users_test.rs"]
mod tests;

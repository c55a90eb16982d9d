use crate::utils::say_hello;
use actix_web::{HttpResponse, Responder, get, web};

pub const GREETING: &str = "Hello, world!";

#[utoipa::path(
    get,
    path = "/",
    responses((status = 200, description = "Greeting", body = String, content_type = "text/plain")),
    tag = "Greeting"
)]
#[get("/")]
pub async fn index() -> impl Responder {
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(GREETING)
}

#[utoipa::path(
    get,
    path = "/hello/{first}/{last}",
    params(
        ("first" = String, Path, description = "First name"),
        ("last" = String, Path, description = "Last name")
    ),
    responses((status = 200, description = "Personal greeting", body = String, content_type = "text/plain")),
    tag = "Greeting"
)]
#[get("/hello/{first}/{last}")]
pub async fn hello(path: web::Path<(String, String)>) -> impl Responder {
    let (first, last) = path.into_inner();
    HttpResponse::Ok()
        .content_type("text/plain; charset=utf-8")
        .body(say_hello(&first, &last))
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(index).service(hello);
}

pub mod config;
pub mod error;
pub mod models;
pub mod openapi;
pub mod routes;
pub mod slug;
pub mod store;
pub mod utils;
pub mod validation;

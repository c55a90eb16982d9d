use chrono::Utc;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
    pub database: String,
    pub timestamp: String,
}

impl HealthResponse {
    /// The service answers requests; `database_up` reflects the last store ping.
    pub fn up(database_up: bool) -> Self {
        Self {
            status: "UP".to_string(),
            database: if database_up { "UP" } else { "DOWN" }.to_string(),
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}

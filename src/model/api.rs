use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Standard error response body returned by every endpoint.
#[derive(Serialize, Deserialize, PartialEq, Clone, Debug, ToSchema)]
pub struct ErrorDto {
    pub error: String,
}

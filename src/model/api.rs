use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct ErrorDto {
    pub error: String,
}

/// Landing page payload describing the service.
#[derive(Serialize, Deserialize)]
pub struct ServiceInfoDto {
    pub service: String,
    pub version: String,
}

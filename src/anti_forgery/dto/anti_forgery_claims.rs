use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Serialize, Deserialize)]
pub struct AntiForgeryClaims {
    pub jti: Uuid,
    pub exp: i64,
}

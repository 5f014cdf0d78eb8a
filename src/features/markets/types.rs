use serde::{Deserialize, Serialize};

/// A tenant's request to open a market on the platform.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarketRequest {
    pub id: String,
    pub name: String,
    pub owner_email: String,
    pub status: String,
    #[serde(default)]
    pub submitted_at: Option<String>,
}

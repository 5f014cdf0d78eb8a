use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRate {
    pub id: String,
    pub region: String,
    pub rate: f64,
    #[serde(default)]
    pub estimated_days: u32,
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShippingRateDraft {
    pub region: String,
    pub rate: f64,
    pub estimated_days: u32,
}

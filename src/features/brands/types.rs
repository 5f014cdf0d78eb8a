use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Brand {
    pub id: String,
    pub name: String,
}

#[derive(Clone, Debug, Serialize)]
pub struct BrandDraft {
    pub name: String,
}

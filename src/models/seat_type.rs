use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SeatType {
    pub id: i64,
    pub name: String,
    pub color: String,
    #[serde(rename = "icon", default)]
    pub icon_key: String,
}

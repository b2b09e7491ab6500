use serde::{Deserialize, Serialize};

/// Employee row and wire representation. `id` is assigned by the store on
/// first save and stays `None` until then.
#[derive(sqlx::FromRow, Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

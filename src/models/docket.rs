use serde::{Deserialize, Serialize};

use super::null_as_default;

/// Status stamped on every docket when it is created.
pub const STATUS_CREATED: &str = "Created";

/// A delivery order tracked by the registry.
///
/// `order_no` is assigned by the registry and never changes afterwards.
/// `truck_no` and `logsheet_no` stay empty until the docket is placed on a
/// logsheet; a later logsheet overwrites both.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Docket {
    pub order_no: String,
    pub customer: String,
    pub pick_up_point: String,
    pub delivery_point: String,
    pub quantity: u64,
    pub volume: f64,
    /// Free-text state label. Only ever set to [`STATUS_CREATED`].
    pub status: String,
    pub truck_no: String,
    pub logsheet_no: String,
}

impl Docket {
    /// Whether this docket currently belongs to the given logsheet.
    pub fn is_on_logsheet(&self, logsheet_no: &str) -> bool {
        !self.logsheet_no.is_empty() && self.logsheet_no == logsheet_no
    }
}

/// Input for creating a docket.
///
/// Every field may be omitted and falls back to its empty value. Registry-owned
/// fields (`OrderNo`, `Status`, `TruckNo`, `LogsheetNo`) are not part of the
/// input; if a client sends them they are ignored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateDocketInput {
    #[serde(alias = "customer", deserialize_with = "null_as_default")]
    pub customer: String,
    #[serde(
        alias = "pickUpPoint",
        alias = "pickuppoint",
        deserialize_with = "null_as_default"
    )]
    pub pick_up_point: String,
    #[serde(
        alias = "deliveryPoint",
        alias = "deliverypoint",
        deserialize_with = "null_as_default"
    )]
    pub delivery_point: String,
    #[serde(alias = "quantity", deserialize_with = "null_as_default")]
    pub quantity: u64,
    #[serde(alias = "volume", deserialize_with = "null_as_default")]
    pub volume: f64,
}

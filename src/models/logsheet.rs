use serde::{Deserialize, Serialize};

use super::{null_as_default, Docket};

/// Input for creating a logsheet: the dockets to load and the truck carrying them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct CreateLogsheetInput {
    /// OrderNos to place on the logsheet, in the order the caller listed them.
    #[serde(alias = "dockets", deserialize_with = "null_as_default")]
    pub dockets: Vec<String>,
    #[serde(
        alias = "truckNo",
        alias = "truckno",
        deserialize_with = "null_as_default"
    )]
    pub truck_no: String,
}

/// Outcome of creating a logsheet.
#[derive(Debug, Clone, PartialEq)]
pub struct LogsheetAssignment {
    pub logsheet_no: String,
    /// Dockets that were updated, in input order.
    pub dockets: Vec<Docket>,
    /// Requested OrderNos that matched no docket, in input order.
    pub skipped: Vec<String>,
}

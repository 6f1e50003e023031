//! Wire types for the transport management API.
//!
//! # Core Concepts
//!
//! - [`Docket`]: one delivery order, keyed by its registry-assigned `OrderNo`.
//! - Logsheet: a group of dockets handed to one truck. There is no logsheet
//!   record; a logsheet is the set of dockets whose `LogsheetNo` carries its
//!   identifier. [`LogsheetAssignment`] is what the registry reports back when
//!   one is created.
//!
//! Field names serialize in PascalCase (`OrderNo`, `TruckNo`, ...) to match the
//! JSON contract clients already speak. Inputs are lenient: they also accept
//! lowercase and camelCase keys, and read `null` or a missing field as empty.

mod docket;
mod logsheet;

pub use docket::*;
pub use logsheet::*;

use serde::{Deserialize, Deserializer};

/// Read an explicit `null` as the field's default value.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

//! In-memory docket registry.
//!
//! The registry owns every docket plus the two identifier sequences. All of it
//! sits behind one mutex; each operation takes the lock for its whole critical
//! section and releases it before returning, so callers never observe a
//! half-applied logsheet or a reused identifier.

mod sequence;

pub use sequence::{format_id, Sequence};

use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::models::*;

pub const ORDER_NO_PREFIX: &str = "TDN";
pub const LOGSHEET_NO_PREFIX: &str = "DT";

#[derive(Debug)]
struct RegistryState {
    dockets: HashMap<String, Docket>,
    docket_seq: Sequence,
    logsheet_seq: Sequence,
}

impl RegistryState {
    fn new() -> Self {
        Self {
            dockets: HashMap::new(),
            docket_seq: Sequence::new(ORDER_NO_PREFIX),
            logsheet_seq: Sequence::new(LOGSHEET_NO_PREFIX),
        }
    }
}

/// Shared handle to the registry. Clones point at the same state.
#[derive(Debug, Clone)]
pub struct Registry {
    state: Arc<Mutex<RegistryState>>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Create an empty registry with both sequences starting at 1.
    pub fn new() -> Self {
        Self {
            state: Arc::new(Mutex::new(RegistryState::new())),
        }
    }

    // No operation panics mid-write, so state behind a poisoned lock is whole.
    fn lock(&self) -> MutexGuard<'_, RegistryState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }

    // ============================================================
    // Docket operations
    // ============================================================

    /// Store a new docket under the next OrderNo with status `Created`.
    pub fn create_docket(&self, input: CreateDocketInput) -> Docket {
        let mut state = self.lock();
        let order_no = state.docket_seq.next_id();

        let docket = Docket {
            order_no: order_no.clone(),
            customer: input.customer,
            pick_up_point: input.pick_up_point,
            delivery_point: input.delivery_point,
            quantity: input.quantity,
            volume: input.volume,
            status: STATUS_CREATED.to_string(),
            truck_no: String::new(),
            logsheet_no: String::new(),
        };
        state.dockets.insert(order_no, docket.clone());
        drop(state);

        tracing::debug!(order_no = %docket.order_no, "docket created");
        docket
    }

    pub fn get_docket(&self, order_no: &str) -> Option<Docket> {
        self.lock().dockets.get(order_no).cloned()
    }

    /// All dockets, in no particular order.
    pub fn list_dockets(&self) -> Vec<Docket> {
        self.lock().dockets.values().cloned().collect()
    }

    pub fn docket_count(&self) -> usize {
        self.lock().dockets.len()
    }

    // ============================================================
    // Logsheet operations
    // ============================================================

    /// Assign a fresh LogsheetNo and stamp it, with the truck, onto every
    /// named docket that exists.
    ///
    /// Unknown OrderNos are skipped and reported back in
    /// [`LogsheetAssignment::skipped`]. A docket already on another logsheet is
    /// moved to this one. The LogsheetNo is consumed even if nothing matched.
    pub fn create_logsheet(&self, input: CreateLogsheetInput) -> LogsheetAssignment {
        let mut state = self.lock();
        let logsheet_no = state.logsheet_seq.next_id();

        let mut dockets = Vec::with_capacity(input.dockets.len());
        let mut skipped = Vec::new();
        for order_no in input.dockets {
            match state.dockets.get_mut(&order_no) {
                Some(docket) => {
                    docket.truck_no = input.truck_no.clone();
                    docket.logsheet_no = logsheet_no.clone();
                    dockets.push(docket.clone());
                }
                None => skipped.push(order_no),
            }
        }
        drop(state);

        tracing::debug!(
            logsheet_no = %logsheet_no,
            truck_no = %input.truck_no,
            assigned = dockets.len(),
            skipped = skipped.len(),
            "logsheet created"
        );

        LogsheetAssignment {
            logsheet_no,
            dockets,
            skipped,
        }
    }

    /// Dockets currently carrying `logsheet_no`, in no particular order.
    /// An empty result means the logsheet is unknown or has no members left.
    pub fn get_logsheet(&self, logsheet_no: &str) -> Vec<Docket> {
        self.lock()
            .dockets
            .values()
            .filter(|d| d.is_on_logsheet(logsheet_no))
            .cloned()
            .collect()
    }
}

/// Minimum number of digits in a generated identifier.
const MIN_WIDTH: usize = 4;

/// Sequential identifier generator (`TDN0001`, `TDN0002`, ...).
///
/// Numbers are zero-padded to four digits. Past 9999 the numeric part simply
/// widens (`TDN10000`), so identifiers stay unique without an upper bound.
#[derive(Debug, Clone)]
pub struct Sequence {
    prefix: &'static str,
    next: u64,
}

impl Sequence {
    /// Create a sequence whose first identifier is numbered 1.
    pub fn new(prefix: &'static str) -> Self {
        Self::starting_at(prefix, 1)
    }

    pub fn starting_at(prefix: &'static str, next: u64) -> Self {
        Self { prefix, next }
    }

    /// Return the current identifier and advance the counter.
    pub fn next_id(&mut self) -> String {
        let id = format_id(self.prefix, self.next);
        self.next += 1;
        id
    }
}

/// Format `prefix` followed by `n`, zero-padded to at least four digits.
pub fn format_id(prefix: &str, n: u64) -> String {
    format!("{prefix}{n:0width$}", width = MIN_WIDTH)
}

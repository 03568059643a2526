use std::cmp::Ordering;
use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Oplog timestamp: wall-clock seconds plus an increment ordinal within
/// that second.
///
/// `(0, 0)` is the null timestamp.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Timestamp {
    secs: u32,
    inc: u32,
}

impl Timestamp {
    pub const NULL: Timestamp = Timestamp { secs: 0, inc: 0 };

    pub const fn new(secs: u32, inc: u32) -> Self {
        Self { secs, inc }
    }

    pub const fn secs(&self) -> u32 {
        self.secs
    }

    pub const fn inc(&self) -> u32 {
        self.inc
    }

    pub const fn is_null(&self) -> bool {
        self.secs == 0 && self.inc == 0
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Timestamp({}, {})", self.secs, self.inc)
    }
}

/// Position in the replicated operation log: a timestamp plus the
/// election term it was written in.
///
/// The default value is the null optime (null timestamp, uninitialized term).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OpTime {
    #[serde(rename = "ts")]
    timestamp: Timestamp,
    #[serde(rename = "t")]
    term: i64,
}

impl OpTime {
    /// Term of an optime that was never written under an election.
    pub const UNINITIALIZED_TERM: i64 = -1;

    pub const fn new(timestamp: Timestamp, term: i64) -> Self {
        Self { timestamp, term }
    }

    pub const fn timestamp(&self) -> Timestamp {
        self.timestamp
    }

    pub const fn term(&self) -> i64 {
        self.term
    }

    pub const fn is_null(&self) -> bool {
        self.timestamp.is_null()
    }
}

impl Default for OpTime {
    fn default() -> Self {
        Self::new(Timestamp::NULL, Self::UNINITIALIZED_TERM)
    }
}

/// Term first: any entry from a later term is newer regardless of timestamp.
impl Ord for OpTime {
    fn cmp(&self, other: &Self) -> Ordering {
        self.term
            .cmp(&other.term)
            .then_with(|| self.timestamp.cmp(&other.timestamp))
    }
}

impl PartialOrd for OpTime {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for OpTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{ ts: {}, t: {} }}", self.timestamp, self.term)
    }
}

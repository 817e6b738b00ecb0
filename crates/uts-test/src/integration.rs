//! End-to-end validation of the wire contract and calendar projections
//!
//! The vectors here are the cross-implementation contract: every port of
//! the library must produce and accept these exact strings for these
//! exact instants.

/// A canonical wire-format vector
pub struct WireVector {
    pub nanos: i64,
    pub text: &'static str,
    /// Whether the textual form carries a fraction
    pub include_nanos: bool,
}

/// Bit-exact format/parse vectors
pub const WIRE_VECTORS: &[WireVector] = &[
    WireVector {
        nanos: 0,
        text: "1970-01-01T00:00:00Z",
        include_nanos: false,
    },
    WireVector {
        nanos: 1_000_000_000_000_000_000,
        text: "2001-09-09T01:46:40Z",
        include_nanos: false,
    },
    WireVector {
        nanos: 1_734_146_001_123_456_789,
        text: "2024-12-14T03:13:21.123456789Z",
        include_nanos: true,
    },
    WireVector {
        nanos: 1_734_146_001_000_000_000,
        text: "2024-12-14T03:13:21Z",
        include_nanos: false,
    },
    WireVector {
        nanos: -1_000_000_000,
        text: "1969-12-31T23:59:59Z",
        include_nanos: false,
    },
];

//! Custom HTTP header names.

/// Total number of records in a collection response.
pub const HEADER_TOTAL_COUNT: &str = "X-Total-Count";

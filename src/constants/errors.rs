//! Error message constants used throughout the application.

// User errors
pub const ERR_USER_NOT_FOUND: &str = "User not found";
pub const ERR_INVALID_USER: &str = "Invalid user";

// Request errors
pub const ERR_INVALID_JSON: &str = "Invalid JSON body";

// Generic errors
pub const ERR_INTERNAL: &str = "Internal server error";

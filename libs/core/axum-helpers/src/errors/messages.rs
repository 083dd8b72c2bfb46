//! Standard message constants for consistent response bodies.

// Success message attached to every processed request body
pub const REQUEST_PROCESSED: &str = "Request processed successfully.";

// Error messages
pub const VALIDATION_FAILED: &str = "Validation failed for the provided input.";
pub const INVALID_JSON: &str = "Invalid JSON format.";
pub const NOT_FOUND_RESOURCE: &str = "Requested resource was not found.";
pub const CONFLICT: &str = "Resource already exists.";
pub const INTERNAL_ERROR: &str = "An unexpected error occurred.";
pub const SERVICE_UNAVAILABLE: &str = "Service temporarily unavailable.";
pub const DB_ERROR: &str = "A database error occurred.";
pub const IO_ERROR: &str = "An I/O error occurred.";

// Error codes used directly by extractors
pub const CODE_VALIDATION: i32 = 1001;

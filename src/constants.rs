/// Client-side timeout for every outbound provider call, in seconds
pub const PROVIDER_TIMEOUT_SECS: u64 = 10;

/// Category recorded for an imported transaction when the aggregator sends no
/// labels and the analysis service cannot classify it either
pub const FALLBACK_CATEGORY: &str = "uncategorized";

// =============================================================================
// Error Messages
// =============================================================================

/// Error message for a user id that is not a UUID
pub const ERR_INVALID_USER_ID: &str = "Invalid user ID";

/// Error message for an insight id that is not a UUID
pub const ERR_INVALID_INSIGHT_ID: &str = "Invalid insight ID";

/// Error message for an insight type outside the accepted set
pub const ERR_INVALID_INSIGHT_TYPE: &str = "Invalid insight type";

/// Error message for a missing user row
pub const ERR_USER_NOT_FOUND: &str = "User not found";

/// Error message for a missing insight row
pub const ERR_INSIGHT_NOT_FOUND: &str = "Insight not found";

/// Error message for a create-user request without an email
pub const ERR_EMAIL_REQUIRED: &str = "Email is required";

/// Error message for a cost-of-living request without a city
pub const ERR_CITY_REQUIRED: &str = "City is required";

/// Error message when the banking aggregator rejects the access token
pub const ERR_INVALID_ACCESS_TOKEN: &str = "Invalid access token";

/// Error message when the banking aggregator call fails
pub const ERR_BANKING_FETCH_FAILED: &str = "Failed to fetch transactions from banking provider";

/// Error message when the pricing API call fails
pub const ERR_COST_OF_LIVING_FETCH_FAILED: &str = "Failed to fetch cost of living data";

//! The paths of the API routes.

/// Returns "OK" when the server is up.
pub const HEALTH: &str = "/api/health";
/// Accepts transactions and returns their analytics and insights.
pub const ANALYTICS_API: &str = "/api/analytics";

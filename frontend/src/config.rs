/// Origin of the backend every feature talks to.
///
/// Fixed at build time; set `LEGAL_DESK_API_BASE` when running `trunk build`
/// to point the bundle somewhere other than a local backend.
pub const API_BASE: &str = match option_env!("LEGAL_DESK_API_BASE") {
    Some(base) => base,
    None => "http://localhost:5000",
};

/// Joins the base origin and an endpoint path without doubling the slash.
pub fn endpoint_url(base: &str, path: &str) -> String {
    format!("{}{}", base.trim_end_matches('/'), path)
}

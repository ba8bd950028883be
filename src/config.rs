#[cfg(debug_assertions)]
pub fn get_backend_url() -> &'static str {
    "http://localhost:5000" // Development URL when running locally
}

#[cfg(not(debug_assertions))]
pub fn get_backend_url() -> &'static str {
    "" // Production URL
}

/// Full URL of the tracking lookup endpoint. The Flask dev server exposes
/// the route as plain `/track`; in production the reverse proxy owns the
/// `/api` prefix and strips it before forwarding.
#[cfg(debug_assertions)]
pub fn get_tracking_url() -> String {
    format!("{}/track", get_backend_url())
}

#[cfg(not(debug_assertions))]
pub fn get_tracking_url() -> String {
    format!("{}/api/track", get_backend_url())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    #[cfg(debug_assertions)]
    fn dev_tracking_url_targets_the_flask_route_directly() {
        assert_eq!(get_tracking_url(), "http://localhost:5000/track");
        assert!(!get_tracking_url().contains("/api"));
    }
}

/// Milliseconds before an in-flight lookup is abandoned. The tracking
/// backend drives a headless browser and can hang; without this the
/// widget would sit in its loading state forever.
pub const TRACKING_TIMEOUT_MS: u32 = 15_000;

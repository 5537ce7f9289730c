//! Wall-clock access for token expiry checks.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

/// Current time in seconds since the Unix epoch.
///
/// `SystemTime` is unavailable on `wasm32-unknown-unknown`, so the browser
/// build reads `Date.now()` instead.
pub fn now_secs() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now() / 1000.0
    }
    #[cfg(not(feature = "hydrate"))]
    {
        std::time::SystemTime::now()
            .duration_since(std::time::UNIX_EPOCH)
            .map_or(0.0, |elapsed| elapsed.as_secs_f64())
    }
}

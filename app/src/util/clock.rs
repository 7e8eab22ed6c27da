//! Wall-clock reading for message timestamps.

/// Current time in milliseconds since the epoch. Returns `0.0` off the
/// browser so native tests stay deterministic.
#[must_use]
pub fn now_ms() -> f64 {
    #[cfg(feature = "csr")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "csr"))]
    {
        0.0
    }
}

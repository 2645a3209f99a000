//! Browser clock and randomness.
//!
//! Both return fixed values outside the browser so SSR and native tests are
//! deterministic.

/// Milliseconds since the Unix epoch (`0.0` outside the browser).
pub fn now_ms() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Date::now()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

/// Uniform roll in `[0, 1)` (`0.0` outside the browser).
pub fn random_unit() -> f64 {
    #[cfg(feature = "hydrate")]
    {
        js_sys::Math::random()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        0.0
    }
}

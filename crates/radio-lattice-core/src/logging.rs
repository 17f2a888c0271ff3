//! Logging facilities for radio-lattice.
//!
//! radio-lattice uses the `tracing` crate for instrumentation. To see logs,
//! install a tracing subscriber in your application:
//!
//! ```ignore
//! fn main() {
//!     tracing_subscriber::fmt::init();
//!     // Your application code...
//! }
//! ```
//!
//! Deprecated API entry points report through [`deprecated_method`] and
//! [`deprecated_signal`], which log at `warn` level under
//! [`targets::DEPRECATED`] so they can be filtered independently.

/// Target names for log filtering.
///
/// Use these with `tracing` directives to filter logs by subsystem.
pub mod targets {
    /// Signal/slot system target.
    pub const SIGNAL: &str = "radio_lattice_core::signal";
    /// Selection group target.
    pub const GROUP: &str = "radio_lattice::group";
    /// Deprecated API usage.
    pub const DEPRECATED: &str = "radio_lattice::deprecated";
}

/// Warn that a deprecated method was called.
pub fn deprecated_method(method: &str, hint: &str) {
    tracing::warn!(
        target: targets::DEPRECATED,
        method,
        "The method '{method}' is deprecated: {hint}"
    );
}

/// Warn that a listener was attached to a deprecated signal.
pub fn deprecated_signal(signal: &str, hint: &str) {
    tracing::warn!(
        target: targets::DEPRECATED,
        signal,
        "The signal '{signal}' is deprecated: {hint}"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_targets_match_module_paths() {
        assert_eq!(targets::SIGNAL, module_path!().replace("logging", "signal"));
        assert!(targets::GROUP.starts_with("radio_lattice::"));
        assert!(targets::DEPRECATED.starts_with("radio_lattice::"));
    }
}

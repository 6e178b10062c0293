//! Profiling support via Tracy.
//!
//! Decoding, flipping, JPEG encoding and buffer reshaping are instrumented
//! with the macros below. They forward to
//! [Tracy](https://github.com/wolfpld/tracy) when the `profiling` Cargo
//! feature is enabled:
//!
//! ```toml
//! [dependencies]
//! glkit-core = { version = "0.1", features = ["profiling"] }
//! ```
//!
//! When profiling is disabled (the default), all macros compile to no-ops.

#[cfg(feature = "profiling")]
pub use tracy_client::{self, span};

/// Create a profiling span for the current scope.
///
/// ```ignore
/// {
///     profile_scope!("flip_rows");
///     // ... work ...
/// }
/// ```
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_scope {
    ($name:expr) => {
        let _profile_span = $crate::profiling::span!($name);
    };
}

/// Create a profiling span (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_scope {
    ($name:expr) => {};
}

/// Create a profiling span covering the enclosing function.
#[macro_export]
#[cfg(feature = "profiling")]
macro_rules! profile_function {
    () => {
        let _profile_span = $crate::profiling::span!();
    };
}

/// Create a profiling span for function (no-op when profiling disabled).
#[macro_export]
#[cfg(not(feature = "profiling"))]
macro_rules! profile_function {
    () => {};
}

pub use profile_function;
pub use profile_scope;

//! Crate error type.
//!
//! Kernel calls never fail: an unsupported `(DistanceKind, ElementEncoding)`
//! pair simply has no entry in the dispatch table (`get_distance` returns
//! `None`), and a mismatched buffer length is a caller-side safety violation
//! documented on [`crate::kernel::KernelFn`], not a runtime check. `Error`
//! covers the setup paths that genuinely can fail: configuration loading and
//! forced-SIMD requests on hardware that doesn't support the requested
//! backend.

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while configuring or initializing the distance table.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// `enable_simd = force` was requested but the current CPU lacks the
    /// required feature set.
    #[error("forced SIMD backend '{requested}' is not supported on this CPU")]
    UnsupportedSimdBackend {
        /// The backend name the caller forced (e.g. "avx512").
        requested: String,
    },

    /// Configuration could not be loaded or deserialized.
    #[error("failed to load configuration: {0}")]
    Config(#[from] figment::Error),
}

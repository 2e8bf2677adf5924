//! Error types for package construction.
//!
//! Every pipeline step fails fast: the first error aborts the remainder of
//! the current platform build, and staged work directories are removed on
//! the way out.

use thiserror::Error;

/// Result type alias for package construction operations
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for package construction
#[derive(Error, Debug)]
pub enum Error {
    /// Build requested on a host that lacks the target platform's native tools
    #[error("can only build {target} installer packages on a {target} host, not {host}")]
    UnsupportedHost {
        /// Platform whose tools are required
        target: &'static str,
        /// Operating system of the executing host
        host: String,
    },

    /// Malformed template text, or a template referencing an undefined field
    #[error("template error: {0}")]
    Template(String),

    /// Local filesystem failure
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Network transport failure or non-2xx response while fetching an asset
    #[error("fetching {url}: {reason}")]
    Fetch {
        /// Asset location that failed
        url: String,
        /// Transport error or unexpected status
        reason: String,
    },

    /// Fetched content did not match its pinned digest
    #[error("sha256 mismatch for {url}: expected {expected}, got {actual}")]
    Integrity {
        /// Asset location that was fetched
        url: String,
        /// Pinned hex digest
        expected: String,
        /// Computed hex digest of the fetched bytes
        actual: String,
    },

    /// An invoked external tool could not be launched
    #[error("failed to launch {tool}: {error}")]
    ToolLaunch {
        /// Tool that failed to start
        tool: String,
        /// Underlying launch error
        error: std::io::Error,
    },

    /// An invoked external tool exited nonzero
    #[error("{tool} failed: {status}")]
    ExternalTool {
        /// Tool that failed
        tool: String,
        /// Its exit status
        status: std::process::ExitStatus,
    },

    /// Requested platform has no (exposed) packager
    #[error("{platform} packages not yet supported")]
    NotSupported {
        /// Platform that was requested
        platform: String,
    },

    /// Configuration violates an invariant required before any build starts
    #[error("invalid configuration: {reason}")]
    InvalidConfig {
        /// What is wrong with the configuration
        reason: String,
    },
}

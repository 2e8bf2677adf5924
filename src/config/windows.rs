//! Windows platform-specific options.

use serde::{Deserialize, Serialize};

/// Configuration details for creating an MSI package.
///
/// Currently empty: the windows packager is not exposed yet and this
/// struct is the extension point its options will land in.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct WindowsOptions {}

//! Darwin platform-specific options.

use serde::{Deserialize, Serialize};

/// Configuration details for creating a darwin `.pkg`.
///
/// Every field except `bin_path` is optional; an empty optional field
/// suppresses the corresponding installer UI element entirely.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", default)]
pub struct DarwinOptions {
    /// Welcome message shown when the installer is launched
    pub welcome_msg: String,

    /// Conclusion message shown when installation is complete
    pub conclusion_msg: String,

    /// Path to a 140x370 png file to use as the installer background
    pub bg_png_path: String,

    /// Minimum os x version, eg: "10.6.0"
    #[serde(rename = "MinOSXVersion")]
    pub min_osx_version: String,

    /// Path to the compatible darwin binary executable to install
    pub bin_path: String,
}

//! Version triple extraction for WiX defines.

use std::sync::OnceLock;

use regex::Regex;

fn version_re() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^v(\d+(\.\d+)*)").expect("version pattern is valid"))
}

/// Splits a "v"-prefixed version such as "v1.9" or "v1.10.2" into its
/// (major, minor, patch) parts. Missing trailing components default to
/// zero.
///
/// A string without a leading `v<digits>` pattern yields (0, 0, 0) rather
/// than an error. Surprising, but deliberate: release tags that do not
/// look like versions (eg "nightly") build with an all-zero MSI version
/// instead of failing the pipeline.
pub fn extract(version: &str) -> (u32, u32, u32) {
    let Some(caps) = version_re().captures(version) else {
        return (0, 0, 0);
    };
    let mut parts = caps[1].split('.').map(|p| p.parse().unwrap_or(0));
    (
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
        parts.next().unwrap_or(0),
    )
}

/// Whether the version is still expected to support legacy Windows (XP).
///
/// True only up to v1.10; the flag selects which minimum-OS condition
/// block the compiler embeds in the installer manifest.
pub fn legacy_os_supported(version: &str) -> bool {
    let (major, minor, _) = extract(version);
    major <= 1 && minor < 11
}

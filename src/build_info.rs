//! Compile-time build information.

include!(concat!(env!("OUT_DIR"), "/build_info.rs"));

/// One-line version banner printed by `--version`.
pub fn version_line() -> String {
    format!("lane-runner {} ({}, {})", PKG_VERSION, BUILD_DATE, BUILD_COMMIT)
}

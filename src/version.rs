// Version information for the SizeWise Node

/// Full version string with feature description
pub const VERSION: &str = "v0.1.0-camera-geometry-2025-08-24";

/// Semantic version number
pub const VERSION_NUMBER: &str = "0.1.0";

/// Build date
pub const BUILD_DATE: &str = "2025-08-24";

/// Supported features in this version
pub const FEATURES: &[&str] = &[
    "reference-calibration",
    "depth-projection",
    "known-average-scaling",
    "frame-summaries",
    "use-case-cache",
    "configurable-known-sizes",
];

/// Get formatted version string for logging
pub fn get_version_string() -> String {
    format!("SizeWise Node {} ({})", VERSION_NUMBER, BUILD_DATE)
}

/// Get full version info for API responses
pub fn get_version_info() -> serde_json::Value {
    serde_json::json!({
        "version": VERSION_NUMBER,
        "build": VERSION,
        "date": BUILD_DATE,
        "features": FEATURES,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constants() {
        assert_eq!(VERSION_NUMBER, "0.1.0");
        assert!(FEATURES.contains(&"reference-calibration"));
        assert!(FEATURES.contains(&"depth-projection"));
    }

    #[test]
    fn test_version_string() {
        let version = get_version_string();
        assert!(version.contains("0.1.0"));
        assert!(version.contains(BUILD_DATE));
    }
}

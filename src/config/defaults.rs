//! Default values for configuration fields.
//!
//! These functions are used by serde for default deserialization.

/// Config file looked up in the project root when `--config` is not given.
pub const CONFIG_FILE: &str = "igdoc.toml";

// ============================================================================
// [templates] Section Defaults
// ============================================================================

pub mod templates {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "templates".into()
    }

    pub fn extension() -> String {
        ".liquid".into()
    }
}

// ============================================================================
// [corpus] Section Defaults
// ============================================================================

pub mod corpus {
    use std::path::PathBuf;

    pub fn dir() -> PathBuf {
        "resources".into()
    }

    pub fn path_prefix() -> String {
        "".into()
    }
}

// ============================================================================
// [render] Section Defaults
// ============================================================================

pub mod render {
    use std::path::PathBuf;

    pub fn language() -> String {
        "en".into()
    }

    pub fn change_summary() -> Option<PathBuf> {
        None
    }
}

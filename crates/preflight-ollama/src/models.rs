//! Data types for installed models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A model present in the daemon's local store
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct InstalledModel {
    /// Model name/ID (e.g., "granite3.1-moe:1b")
    pub name: String,

    /// Model size in bytes
    pub size: u64,

    /// Model digest/hash
    pub digest: String,

    /// When the model was last modified
    pub modified_at: DateTime<Utc>,
}

impl InstalledModel {
    /// Human-readable size, base-1024 units
    pub fn size_display(&self) -> String {
        const UNITS: [&str; 5] = ["B", "KiB", "MiB", "GiB", "TiB"];
        let mut size = self.size as f64;
        let mut unit = 0;
        while size >= 1024.0 && unit < UNITS.len() - 1 {
            size /= 1024.0;
            unit += 1;
        }
        if unit == 0 {
            format!("{} {}", self.size, UNITS[unit])
        } else {
            format!("{:.1} {}", size, UNITS[unit])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn model_with_size(size: u64) -> InstalledModel {
        InstalledModel {
            name: "granite3.1-moe:1b".to_string(),
            size,
            digest: "sha256:abc".to_string(),
            modified_at: Utc::now(),
        }
    }

    #[test]
    fn test_size_display_bytes() {
        assert_eq!(model_with_size(512).size_display(), "512 B");
    }

    #[test]
    fn test_size_display_mebibytes() {
        assert_eq!(model_with_size(5 * 1024 * 1024).size_display(), "5.0 MiB");
    }

    #[test]
    fn test_size_display_gibibytes() {
        let gib = 1024u64 * 1024 * 1024;
        assert_eq!(model_with_size(3 * gib / 2).size_display(), "1.5 GiB");
    }
}

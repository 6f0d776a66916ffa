//! The fixed six-stage bypass pipeline.

use serde::{Deserialize, Serialize};

/// One discrete phase of the bypass pipeline, in execution order.
///
/// The order is total and fixed — stages never skip or reorder — and each
/// stage contributes an equal share of overall progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Download,
    Extract,
    Locate,
    Copy,
    Detect,
    Cleanup,
}

impl Stage {
    /// All stages in pipeline order.
    pub const ALL: [Stage; 6] = [
        Stage::Download,
        Stage::Extract,
        Stage::Locate,
        Stage::Copy,
        Stage::Detect,
        Stage::Cleanup,
    ];

    /// Number of pipeline stages.
    pub const COUNT: usize = Self::ALL.len();

    /// Zero-based position in the pipeline.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Wire identifier used in executor progress events.
    pub fn id(self) -> &'static str {
        match self {
            Self::Download => "download",
            Self::Extract => "extract",
            Self::Locate => "locate",
            Self::Copy => "copy",
            Self::Detect => "detect",
            Self::Cleanup => "cleanup",
        }
    }

    /// Parses a wire identifier. Unknown identifiers are rejected — the
    /// subscription boundary logs and drops them rather than crash.
    pub fn from_id(id: &str) -> Option<Stage> {
        Self::ALL.into_iter().find(|s| s.id() == id)
    }

    /// User-facing label for the stage list.
    pub fn label(self) -> &'static str {
        match self {
            Self::Download => "Downloading bypass files",
            Self::Extract => "Extracting files",
            Self::Locate => "Locating game directory",
            Self::Copy => "Copying bypass files",
            Self::Detect => "Detecting executables",
            Self::Cleanup => "Cleaning up",
        }
    }
}

/// Status of one stage relative to the pipeline's current position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StageStatus {
    Pending,
    Active,
    Completed,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_is_in_index_order() {
        for (i, stage) in Stage::ALL.into_iter().enumerate() {
            assert_eq!(stage.index(), i);
        }
        assert_eq!(Stage::COUNT, 6);
    }

    #[test]
    fn order_is_total() {
        assert!(Stage::Download < Stage::Extract);
        assert!(Stage::Extract < Stage::Locate);
        assert!(Stage::Locate < Stage::Copy);
        assert!(Stage::Copy < Stage::Detect);
        assert!(Stage::Detect < Stage::Cleanup);
    }

    #[test]
    fn id_round_trip() {
        for stage in Stage::ALL {
            assert_eq!(Stage::from_id(stage.id()), Some(stage));
        }
    }

    #[test]
    fn from_id_rejects_unknown() {
        assert_eq!(Stage::from_id("verify"), None);
        assert_eq!(Stage::from_id(""), None);
        assert_eq!(Stage::from_id("Download"), None);
    }

    #[test]
    fn serde_uses_wire_ids() {
        let json = serde_json::to_string(&Stage::Locate).unwrap();
        assert_eq!(json, "\"locate\"");
        let parsed: Stage = serde_json::from_str("\"cleanup\"").unwrap();
        assert_eq!(parsed, Stage::Cleanup);
    }

    #[test]
    fn serde_rejects_unknown_stage() {
        assert!(serde_json::from_str::<Stage>("\"reboot\"").is_err());
    }
}

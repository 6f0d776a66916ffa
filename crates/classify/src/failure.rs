//! Failure classification for executor errors.
//!
//! The executor reports failures as free-form strings. An ordered keyword
//! table maps them onto a small set of user-facing categories, each with
//! its own remediation text, so new categories slot in without touching
//! workflow logic.

use serde::{Deserialize, Serialize};

/// User-facing category of an executor failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum FailureKind {
    /// The provider requires manual interaction before serving large files.
    ConfirmationRequired,
    Timeout,
    /// The provider withheld the file from automated virus scanning.
    VirusScanBlocked,
    NetworkFailure,
    Unknown,
}

struct Rule {
    kind: FailureKind,
    keywords: &'static [&'static str],
}

/// Rule order is load-bearing: the first matching rule wins when keyword
/// sets co-occur in one message.
const RULES: &[Rule] = &[
    Rule {
        kind: FailureKind::ConfirmationRequired,
        keywords: &["confirmation", "confirm"],
    },
    Rule {
        kind: FailureKind::Timeout,
        keywords: &["timeout", "timed out"],
    },
    Rule {
        kind: FailureKind::VirusScanBlocked,
        keywords: &["virus", "scan"],
    },
    Rule {
        kind: FailureKind::NetworkFailure,
        keywords: &["network", "connection", "failed to download", "dns"],
    },
];

impl FailureKind {
    /// Classifies a raw failure message by case-insensitive keyword
    /// matching. Total: every input maps to exactly one category.
    pub fn classify(raw: &str) -> Self {
        let raw = raw.to_ascii_lowercase();
        for rule in RULES {
            if rule.keywords.iter().any(|k| raw.contains(k)) {
                return rule.kind;
            }
        }
        Self::Unknown
    }

    /// Remediation text shown as the primary error message.
    ///
    /// `Unknown` surfaces the raw message verbatim; every other category
    /// keeps the raw text out of the primary line.
    pub fn remediation(&self, raw: &str) -> String {
        match self {
            Self::ConfirmationRequired => {
                "The hosting provider requires manual confirmation for large files. \
                 Try again later or use an alternate download source."
                    .into()
            }
            Self::Timeout => {
                "The operation timed out. Check your internet connection and try again.".into()
            }
            Self::VirusScanBlocked => {
                "The provider withheld this file because it could not be scanned for viruses. \
                 Use an alternate download source."
                    .into()
            }
            Self::NetworkFailure => {
                "The download could not be completed. Verify the link is still valid and \
                 your connection is stable."
                    .into()
            }
            Self::Unknown => raw.to_string(),
        }
    }
}

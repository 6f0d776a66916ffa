//! Hosting provider classification for bypass resource URLs.
//!
//! Providers differ wildly in latency, size limits, and failure modes —
//! a Discord CDN attachment is a direct download, while a Google Drive
//! share link may sit behind a manual confirmation page for large files.
//! The workflow uses the classification to tailor its messaging.

use serde::{Deserialize, Serialize};

/// The hosting service behind a bypass resource URL.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Provider {
    DiscordCdn,
    GoogleDrive,
    GithubRelease,
    MediaFire,
    Mega,
    /// Any host not matched by a known rule.
    Generic,
}

impl Provider {
    /// Classifies a resource URL by substring inspection.
    ///
    /// First match wins; unrecognized hosts fall through to
    /// [`Provider::Generic`]. Never fails.
    pub fn classify(url: &str) -> Self {
        let url = url.to_ascii_lowercase();
        if url.contains("drive.google.com") {
            Self::GoogleDrive
        } else if url.contains("cdn.discordapp.com") {
            Self::DiscordCdn
        } else if url.contains("github.com") || url.contains("githubusercontent.com") {
            Self::GithubRelease
        } else if url.contains("mediafire.com") {
            Self::MediaFire
        } else if url.contains("mega.nz") || url.contains("mega.io") {
            Self::Mega
        } else {
            Self::Generic
        }
    }

    /// User-facing provider name.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::DiscordCdn => "Discord CDN",
            Self::GoogleDrive => "Google Drive",
            Self::GithubRelease => "GitHub",
            Self::MediaFire => "MediaFire",
            Self::Mega => "MEGA",
            Self::Generic => "direct link",
        }
    }

    /// Whether confirmation should warn about large-file, long-wait
    /// downloads. Google Drive share links routinely front multi-hundred-MB
    /// archives behind redirect chains.
    pub fn needs_extended_wait_warning(&self) -> bool {
        matches!(self, Self::GoogleDrive)
    }
}

/// Extracts the file id from a Google Drive share link.
///
/// Handles the `.../file/d/<id>`, `.../file/d/<id>/view`, and
/// `.../file/d/<id>?usp=sharing` forms. Returns `None` for non-Drive URLs
/// or Drive URLs without a `/file/d/` segment.
pub fn gdrive_file_id(url: &str) -> Option<String> {
    if !url.contains("drive.google.com") {
        return None;
    }
    let start = url.find("/file/d/")? + "/file/d/".len();
    let rest = &url[start..];
    let end = rest.find(['/', '?']).unwrap_or(rest.len());
    if end == 0 {
        return None;
    }
    Some(rest[..end].to_string())
}

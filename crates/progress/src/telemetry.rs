//! Byte-level download telemetry and its human-readable form.

use serde::{Deserialize, Serialize};

const BYTES_PER_MIB: f64 = 1024.0 * 1024.0;

/// Download sub-progress, present only while the download stage is active.
///
/// Feeds a secondary progress bar; it does not affect the overall
/// percentage beyond what the download stage's own percent communicates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadTelemetry {
    pub bytes_downloaded: u64,
    /// Total size in bytes; zero when the server did not report one.
    #[serde(default)]
    pub bytes_total: u64,
    /// Transfer speed in bytes/second, when the executor measured one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bytes_per_second: Option<f64>,
}

/// Pre-formatted telemetry strings for the download bar.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TelemetryDisplay {
    /// Percent complete; `None` when the total size is unknown, in which
    /// case no secondary bar is rendered.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub percent: Option<f64>,
    pub text: String,
    /// Speed string; omitted entirely when unmeasured or zero — never
    /// shown as "0.0 MB/s".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub speed: Option<String>,
}

impl DownloadTelemetry {
    /// Formats the telemetry for display. Sizes are reported in MB with
    /// one decimal place.
    pub fn display(&self) -> TelemetryDisplay {
        let downloaded_mib = self.bytes_downloaded as f64 / BYTES_PER_MIB;
        let speed = self
            .bytes_per_second
            .filter(|s| *s > 0.0)
            .map(|s| format!("{:.1} MB/s", s / BYTES_PER_MIB));

        if self.bytes_total > 0 {
            let total_mib = self.bytes_total as f64 / BYTES_PER_MIB;
            TelemetryDisplay {
                percent: Some(self.bytes_downloaded as f64 / self.bytes_total as f64 * 100.0),
                text: format!("{downloaded_mib:.1} MB / {total_mib:.1} MB"),
                speed,
            }
        } else {
            TelemetryDisplay {
                percent: None,
                text: format!("{downloaded_mib:.1} MB downloaded"),
                speed,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MIB: u64 = 1024 * 1024;

    #[test]
    fn known_total_has_percent_and_both_sizes() {
        let t = DownloadTelemetry {
            bytes_downloaded: 256 * MIB,
            bytes_total: 512 * MIB,
            bytes_per_second: None,
        };
        let d = t.display();
        assert_eq!(d.percent, Some(50.0));
        assert_eq!(d.text, "256.0 MB / 512.0 MB");
        assert!(d.speed.is_none());
    }

    #[test]
    fn unknown_total_has_no_percent() {
        let t = DownloadTelemetry {
            bytes_downloaded: 75 * MIB + MIB / 2,
            bytes_total: 0,
            bytes_per_second: None,
        };
        let d = t.display();
        assert!(d.percent.is_none());
        assert_eq!(d.text, "75.5 MB downloaded");
    }

    #[test]
    fn speed_formatted_one_decimal() {
        let t = DownloadTelemetry {
            bytes_downloaded: MIB,
            bytes_total: 10 * MIB,
            bytes_per_second: Some(2.5 * BYTES_PER_MIB),
        };
        assert_eq!(t.display().speed.as_deref(), Some("2.5 MB/s"));
    }

    #[test]
    fn zero_speed_is_omitted() {
        let t = DownloadTelemetry {
            bytes_downloaded: MIB,
            bytes_total: 10 * MIB,
            bytes_per_second: Some(0.0),
        };
        assert!(t.display().speed.is_none());
    }

    #[test]
    fn wire_shape_is_camel_case() {
        let t = DownloadTelemetry {
            bytes_downloaded: 1,
            bytes_total: 2,
            bytes_per_second: Some(3.0),
        };
        let json = serde_json::to_string(&t).unwrap();
        assert!(json.contains("bytesDownloaded"));
        assert!(json.contains("bytesTotal"));
        assert!(json.contains("bytesPerSecond"));
    }

    #[test]
    fn missing_optional_fields_deserialize() {
        let t: DownloadTelemetry = serde_json::from_str(r#"{"bytesDownloaded":42}"#).unwrap();
        assert_eq!(t.bytes_downloaded, 42);
        assert_eq!(t.bytes_total, 0);
        assert!(t.bytes_per_second.is_none());
    }
}

//! Domain types for the bypass workflow.

use serde::{Deserialize, Serialize};

use bypasshub_classify::{FailureKind, Provider};
use bypasshub_progress::ProgressSnapshot;

/// A catalogue entry selected for bypass application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BypassTarget {
    pub app_id: String,
    pub name: String,
    /// Where the bypass payload lives. Must be non-empty to start a
    /// workflow.
    pub resource_url: String,
}

impl BypassTarget {
    /// The hosting provider behind this target's resource URL.
    pub fn provider(&self) -> Provider {
        Provider::classify(&self.resource_url)
    }
}

/// The executor's success payload.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BypassOutcome {
    /// Game install directory the bypass was applied to.
    pub install_dir: String,
    /// Candidate executables discovered under the install directory, in
    /// recommendation order. May be empty.
    pub executables: Vec<String>,
}

/// Events emitted by the workflow for the UI layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum WorkflowEvent {
    /// A target entered confirmation. The provider drives modal copy
    /// (Google Drive gets the large-file warning).
    ConfirmationRequested {
        target: BypassTarget,
        provider: Provider,
    },
    /// The user confirmed and the executor call started.
    Started { provider: Provider },
    /// Progress view-state changed.
    Progress(ProgressSnapshot),
    /// The run completed successfully.
    Succeeded { outcome: BypassOutcome },
    /// The run failed; `message` is the raw diagnostic.
    Failed { kind: FailureKind, message: String },
    /// The workflow returned to idle.
    Reset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_provider_classification() {
        let target = BypassTarget {
            app_id: "582160".into(),
            name: "Test".into(),
            resource_url: "https://cdn.discordapp.com/attachments/1/2/fix.zip".into(),
        };
        assert_eq!(target.provider(), Provider::DiscordCdn);
    }

    #[test]
    fn events_tag_for_ui() {
        let json = serde_json::to_string(&WorkflowEvent::Reset).unwrap();
        assert_eq!(json, r#"{"event":"reset"}"#);

        let json = serde_json::to_string(&WorkflowEvent::Started {
            provider: Provider::GoogleDrive,
        })
        .unwrap();
        assert!(json.contains(r#""event":"started""#));
        assert!(json.contains("googleDrive"));
    }

    #[test]
    fn outcome_wire_shape() {
        let outcome = BypassOutcome {
            install_dir: r"C:\Games\AC".into(),
            executables: vec![r"C:\Games\AC\a.exe".into()],
        };
        let json = serde_json::to_string(&outcome).unwrap();
        assert!(json.contains("installDir"));
        assert!(json.contains("executables"));
    }
}

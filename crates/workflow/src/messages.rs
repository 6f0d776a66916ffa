//! User-facing notification copy.
//!
//! Kept in one place so transition logic stays free of strings.

use bypasshub_classify::Provider;

/// Extra warning shown when confirming a Google Drive target.
pub const EXTENDED_WAIT_WARNING: &str =
    "Large Google Drive downloads can take 10-30 minutes. Keep your connection \
     stable and leave the application open until it finishes.";

/// Warning shown when a run succeeds but no executables were detected.
pub const NO_EXECUTABLES_WARNING: &str =
    "No executable files were detected. You can launch the game manually from \
     its folder.";

/// Starting notification, tailored to the hosting provider.
pub fn starting(provider: Provider, game_name: &str) -> String {
    format!(
        "Starting bypass for {game_name} ({} download)...",
        provider.display_name()
    )
}

/// Success notification.
pub fn applied(game_name: &str) -> String {
    format!("Bypass successfully applied to {game_name}!")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starting_names_the_provider() {
        let msg = starting(Provider::GoogleDrive, "Some Game");
        assert!(msg.contains("Some Game"));
        assert!(msg.contains("Google Drive"));
    }
}

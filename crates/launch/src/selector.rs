//! Launch selection over the candidates from a successful run.

use std::future::Future;
use std::pin::Pin;

use tracing::{info, warn};

use crate::error::LaunchError;

/// Abstract launcher for game executables.
///
/// The embedding app implements this on top of its process-spawning and
/// shell-open facilities. Using a trait keeps selection logic decoupled
/// and testable with mocks.
pub trait GameLauncher: Send + Sync {
    /// Starts the executable at `path` with its parent directory as the
    /// working directory.
    fn launch_executable(
        &self,
        path: &str,
    ) -> Pin<Box<dyn Future<Output = Result<(), LaunchError>> + Send + '_>>;

    /// Opens `path` in the system file browser.
    fn open_directory(
        &self,
        path: &str,
    ) -> Pin<Box<dyn Future<Output = Result<(), LaunchError>> + Send + '_>>;
}

/// Holds the launch candidates from one successful run and the user's
/// current selection.
///
/// The candidate list is produced once by the workflow and read-only
/// afterward; only the selection moves. The first candidate is the
/// recommended default.
#[derive(Debug, Clone, PartialEq)]
pub struct LaunchSelector {
    candidates: Vec<String>,
    selected: Option<usize>,
}

impl LaunchSelector {
    /// Creates a selector, defaulting the selection to the first
    /// candidate when there is one.
    pub fn new(candidates: Vec<String>) -> Self {
        let selected = if candidates.is_empty() { None } else { Some(0) };
        Self {
            candidates,
            selected,
        }
    }

    /// All candidates, in recommendation order.
    pub fn candidates(&self) -> &[String] {
        &self.candidates
    }

    /// The recommended candidate (first in the list).
    pub fn recommended(&self) -> Option<&str> {
        self.candidates.first().map(String::as_str)
    }

    /// The currently selected candidate.
    pub fn selected(&self) -> Option<&str> {
        self.selected.map(|i| self.candidates[i].as_str())
    }

    /// Selects a candidate by path. Returns `false` (selection unchanged)
    /// if the path is not in the candidate list.
    pub fn select(&mut self, path: &str) -> bool {
        match self.candidates.iter().position(|c| c == path) {
            Some(i) => {
                self.selected = Some(i);
                true
            }
            None => {
                warn!(path = %path, "ignoring selection of unknown candidate");
                false
            }
        }
    }

    /// Whether there is anything to launch.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// Launches the selected executable. One external call per
    /// invocation; failure leaves the selection untouched so the user can
    /// retry or choose another candidate.
    pub async fn launch(&self, launcher: &dyn GameLauncher) -> Result<(), LaunchError> {
        let path = self.selected().ok_or(LaunchError::NoSelection)?;
        info!(exe = %path, "launching executable");
        launcher.launch_executable(path).await
    }
}

/// Opens the install directory in the system file browser. Independent of
/// any selection state.
pub async fn open_install_dir(launcher: &dyn GameLauncher, dir: &str) -> Result<(), LaunchError> {
    info!(dir = %dir, "opening install directory");
    launcher.open_directory(dir).await
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockLauncher {
        launched: Mutex<Vec<String>>,
        opened: Mutex<Vec<String>>,
        fail_launch: bool,
    }

    impl GameLauncher for MockLauncher {
        fn launch_executable(
            &self,
            path: &str,
        ) -> Pin<Box<dyn Future<Output = Result<(), LaunchError>> + Send + '_>> {
            let path = path.to_string();
            Box::pin(async move {
                if self.fail_launch {
                    return Err(LaunchError::Launch("executable file not found".into()));
                }
                self.launched.lock().unwrap().push(path);
                Ok(())
            })
        }

        fn open_directory(
            &self,
            path: &str,
        ) -> Pin<Box<dyn Future<Output = Result<(), LaunchError>> + Send + '_>> {
            let path = path.to_string();
            Box::pin(async move {
                self.opened.lock().unwrap().push(path);
                Ok(())
            })
        }
    }

    fn sample_candidates() -> Vec<String> {
        vec![
            r"C:\Game\a.exe".to_string(),
            r"C:\Game\b.exe".to_string(),
        ]
    }

    #[test]
    fn defaults_to_first_candidate() {
        let sel = LaunchSelector::new(sample_candidates());
        assert_eq!(sel.selected(), Some(r"C:\Game\a.exe"));
        assert_eq!(sel.recommended(), Some(r"C:\Game\a.exe"));
    }

    #[test]
    fn empty_candidates_have_no_selection() {
        let sel = LaunchSelector::new(vec![]);
        assert!(sel.is_empty());
        assert!(sel.selected().is_none());
        assert!(sel.recommended().is_none());
    }

    #[test]
    fn select_known_and_unknown() {
        let mut sel = LaunchSelector::new(sample_candidates());
        assert!(sel.select(r"C:\Game\b.exe"));
        assert_eq!(sel.selected(), Some(r"C:\Game\b.exe"));

        assert!(!sel.select(r"C:\Game\other.exe"));
        assert_eq!(sel.selected(), Some(r"C:\Game\b.exe"));
    }

    #[tokio::test]
    async fn launch_uses_selected() {
        let launcher = MockLauncher::default();
        let mut sel = LaunchSelector::new(sample_candidates());
        sel.select(r"C:\Game\b.exe");

        sel.launch(&launcher).await.unwrap();
        assert_eq!(
            *launcher.launched.lock().unwrap(),
            vec![r"C:\Game\b.exe".to_string()]
        );
    }

    #[tokio::test]
    async fn launch_without_selection_errors() {
        let launcher = MockLauncher::default();
        let sel = LaunchSelector::new(vec![]);
        assert!(matches!(
            sel.launch(&launcher).await,
            Err(LaunchError::NoSelection)
        ));
    }

    #[tokio::test]
    async fn launch_failure_keeps_selection() {
        let launcher = MockLauncher {
            fail_launch: true,
            ..Default::default()
        };
        let sel = LaunchSelector::new(sample_candidates());

        let err = sel.launch(&launcher).await.unwrap_err();
        assert!(matches!(err, LaunchError::Launch(_)));
        // Selection survives the failed attempt.
        assert_eq!(sel.selected(), Some(r"C:\Game\a.exe"));
    }

    #[tokio::test]
    async fn open_install_dir_is_selection_independent() {
        let launcher = MockLauncher::default();
        open_install_dir(&launcher, r"C:\Game").await.unwrap();
        assert_eq!(*launcher.opened.lock().unwrap(), vec![r"C:\Game".to_string()]);
    }
}

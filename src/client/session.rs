use crate::Result;
use crate::prompt::StylePreferences;
use std::path::PathBuf;

/// Session-scoped preference store for the client. Seeded with the fixed
/// defaults; the only mutation path is `remember`, which persists the
/// submitted values for the next run.
#[derive(Debug)]
pub struct SessionStore {
    path: PathBuf,
    prefs: StylePreferences,
}

impl SessionStore {
    /// Opens the store at `path`. A missing or unreadable file yields the
    /// seed defaults rather than an error.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let prefs = std::fs::read_to_string(&path)
            .ok()
            .and_then(|s| serde_json::from_str(&s).ok())
            .unwrap_or_default();

        Self { path, prefs }
    }

    pub fn preferences(&self) -> StylePreferences {
        self.prefs.clone()
    }

    /// Persists `prefs` as the new session values.
    pub fn remember(&mut self, prefs: &StylePreferences) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent)?;
            }
        }
        std::fs::write(&self.path, serde_json::to_string_pretty(prefs)?)?;
        self.prefs = prefs.clone();
        Ok(())
    }
}

use std::fs;
use std::hash::{DefaultHasher, Hash, Hasher};
use std::io::Write;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use notify_rust::Notification;
use tracing::{debug, info};

use super::{IconPayload, NotificationClient, tone};
use crate::config::DEFAULT_APP_NAME;

#[cfg(target_os = "macos")]
const ALERT_SOUND: &str = "Glass";

#[cfg(not(target_os = "macos"))]
const ALERT_SOUND: &str = "message-new-instant";

/// Notification backend for the host desktop, built on `notify-rust`.
pub struct DesktopClient {
    app_name: String,
    // Icon bytes are handed to the server as a file path. Servers may load
    // the file after `show` returns, so staged icons outlive the process.
    icon_dir: PathBuf,
}

impl DesktopClient {
    pub fn new() -> Self {
        Self::with_icon_dir(default_icon_dir())
    }

    /// Stage icon files under `icon_dir` instead of the user cache.
    pub fn with_icon_dir(icon_dir: impl Into<PathBuf>) -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.to_string(),
            icon_dir: icon_dir.into(),
        }
    }

    fn show(
        &mut self,
        title: &str,
        message: &str,
        icon: IconPayload,
        sound: Option<&str>,
    ) -> Result<()> {
        let mut notification = Notification::new();
        notification
            .summary(title)
            .body(message)
            .appname(&self.app_name);

        match icon {
            IconPayload::Empty => {}
            IconPayload::Name(name) => {
                notification.icon(&name);
            }
            IconPayload::Bytes(bytes) => {
                let path = self.stage_icon(&bytes)?;
                notification.icon(&path.to_string_lossy());
            }
        }

        if let Some(sound) = sound {
            notification.sound_name(sound);
        }

        info!(title, app_name = %self.app_name, "showing desktop notification");
        notification
            .show()
            .map(|_| ())
            .map_err(|e| anyhow!("notification server error: {}", e))
    }

    /// Write icon bytes to a file named after their hash, so repeated
    /// icons reuse one file and the cache stays bounded by distinct icons.
    fn stage_icon(&self, bytes: &[u8]) -> Result<PathBuf> {
        fs::create_dir_all(&self.icon_dir)
            .with_context(|| format!("cannot create icon directory {:?}", self.icon_dir))?;

        let mut hasher = DefaultHasher::new();
        bytes.hash(&mut hasher);
        let target = self.icon_dir.join(format!("icon-{:016x}", hasher.finish()));

        if target.exists() {
            debug!(path = %target.display(), "reusing staged icon");
            return Ok(target);
        }

        let mut file = tempfile::Builder::new()
            .prefix(".staging-")
            .tempfile_in(&self.icon_dir)
            .context("cannot create temporary icon file")?;
        file.write_all(bytes)
            .context("cannot write temporary icon file")?;
        file.persist(&target)
            .context("cannot move staged icon into place")?;

        debug!(path = %target.display(), len = bytes.len(), "staged icon bytes");
        Ok(target)
    }
}

fn default_icon_dir() -> PathBuf {
    dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("wsl-notify-send")
        .join("icons")
}

impl Default for DesktopClient {
    fn default() -> Self {
        Self::new()
    }
}

impl NotificationClient for DesktopClient {
    fn set_app_name(&mut self, name: &str) {
        self.app_name = name.to_string();
    }

    fn notify(&mut self, title: &str, message: &str, icon: IconPayload) -> Result<()> {
        self.show(title, message, icon, None)
    }

    fn alert(&mut self, title: &str, message: &str, icon: IconPayload) -> Result<()> {
        self.show(title, message, icon, Some(ALERT_SOUND))
    }

    fn beep(&mut self, frequency: f64, duration: i64) -> Result<()> {
        tone::play(frequency, duration)
    }
}

mod desktop;
mod tone;

pub use desktop::DesktopClient;

use anyhow::Result;

/// Icon data handed to a notification backend.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum IconPayload {
    #[default]
    Empty,
    /// Stock icon name resolved by the notification server.
    Name(String),
    /// Raw contents of an icon file.
    Bytes(Vec<u8>),
}

/// The capabilities the dispatcher needs from the host's notification system.
pub trait NotificationClient {
    /// Set the application identity used for subsequent notifications.
    fn set_app_name(&mut self, name: &str);

    /// Show a silent desktop notification.
    fn notify(&mut self, title: &str, message: &str, icon: IconPayload) -> Result<()>;

    /// Show a desktop notification that also plays a sound.
    fn alert(&mut self, title: &str, message: &str, icon: IconPayload) -> Result<()>;

    /// Play a tone of `frequency` Hz for `duration` milliseconds.
    fn beep(&mut self, frequency: f64, duration: i64) -> Result<()>;
}

use clap::Parser;

use crate::config::{Config, DEFAULT_APP_NAME, DEFAULT_DURATION, DEFAULT_FREQUENCY};

const LONG_ABOUT: &str = "\
wsl-notify-send is a cross-platform notification tool for Windows and WSL2.
It provides a clean interface to send desktop notifications, alerts, and beeps.";

const EXAMPLES: &str = "\
Examples:
  wsl-notify-send \"Hello\" \"World\"
  wsl-notify-send --alert \"Warning\" \"Something happened\"
  wsl-notify-send --beep
  wsl-notify-send --icon icon.png \"Info\" \"With custom icon\"
  wsl-notify-send --app-name \"MyApp\" \"Custom\" \"From MyApp\"";

#[derive(Parser, Debug)]
#[command(name = "wsl-notify-send")]
#[command(about = "Send desktop notifications on Windows and WSL2")]
#[command(long_about = LONG_ABOUT, after_help = EXAMPLES)]
#[command(disable_version_flag = true)]
pub struct Cli {
    /// Send alert notification with sound
    #[arg(short, long)]
    pub alert: bool,

    /// Just beep (no notification)
    #[arg(short, long)]
    pub beep: bool,

    /// Icon file path or stock icon name
    #[arg(short, long, default_value = "")]
    pub icon: String,

    /// Application name
    #[arg(long, default_value = DEFAULT_APP_NAME)]
    pub app_name: String,

    /// Beep frequency in Hz
    #[arg(long, default_value_t = DEFAULT_FREQUENCY, allow_negative_numbers = true, hide = true)]
    pub freq: f64,

    /// Beep duration in milliseconds
    #[arg(long, default_value_t = DEFAULT_DURATION, allow_negative_numbers = true, hide = true)]
    pub duration: i64,

    /// Suppress error output
    #[arg(short, long)]
    pub quiet: bool,

    /// Show version information
    #[arg(long)]
    pub version: bool,

    /// Notification title followed by an optional message
    #[arg(value_name = "ARGS")]
    pub args: Vec<String>,
}

impl Cli {
    /// Split into the validated-later configuration and the positional arguments.
    pub fn into_parts(self) -> (Config, Vec<String>) {
        let config = Config {
            alert_mode: self.alert,
            beep_mode: self.beep,
            icon: self.icon,
            app_name: self.app_name,
            frequency: self.freq,
            duration: self.duration,
            quiet: self.quiet,
            version: self.version,
        };
        (config, self.args)
    }
}

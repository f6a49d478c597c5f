use crate::error::ConfigError;
use crate::icon::IconResolver;

pub const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const DEFAULT_APP_NAME: &str = TOOL_NAME;
pub const DEFAULT_FREQUENCY: f64 = 587.0;
pub const DEFAULT_DURATION: i64 = 500;

/// Options for a single invocation, built once from the command line.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub alert_mode: bool,
    pub beep_mode: bool,

    /// Empty, a stock icon name, or a file path.
    pub icon: String,
    pub app_name: String,

    /// Beep frequency in Hz.
    pub frequency: f64,
    /// Beep duration in milliseconds.
    pub duration: i64,

    pub quiet: bool,
    pub version: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            alert_mode: false,
            beep_mode: false,
            icon: String::new(),
            app_name: DEFAULT_APP_NAME.to_string(),
            frequency: DEFAULT_FREQUENCY,
            duration: DEFAULT_DURATION,
            quiet: false,
            version: false,
        }
    }
}

impl Config {
    /// Validate against the process working directory.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.validate_with(&IconResolver::new())
    }

    pub fn validate_with(&self, icons: &IconResolver) -> Result<(), ConfigError> {
        if self.alert_mode && self.beep_mode {
            return Err(ConfigError::BothModes);
        }

        if !self.icon.is_empty() {
            icons.validate(&self.icon)?;
        }

        if self.frequency.is_nan() || self.frequency <= 0.0 {
            return Err(ConfigError::NonPositiveFrequency);
        }

        if self.duration <= 0 {
            return Err(ConfigError::NonPositiveDuration);
        }

        Ok(())
    }
}

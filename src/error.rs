use thiserror::Error;

/// Failures while checking or loading an icon token.
#[derive(Debug, Error)]
pub enum IconError {
    #[error("icon file does not exist: {0}")]
    NotFound(String),

    #[error("cannot access icon file: {0}")]
    Access(std::io::Error),

    #[error("unsupported icon format: {extension} (supported: .png, .jpg, .jpeg, .ico, .bmp)")]
    UnsupportedFormat { extension: String },

    #[error("cannot read icon file: {0}")]
    Read(std::io::Error),
}

/// Configuration validation failures. The first failing check wins.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot use both --alert and --beep modes")]
    BothModes,

    #[error(transparent)]
    Icon(#[from] IconError),

    #[error("frequency must be positive")]
    NonPositiveFrequency,

    #[error("duration must be positive")]
    NonPositiveDuration,
}

/// Everything that can end an invocation early.
///
/// The display strings are matched by [`crate::exit::exit_code`], so the
/// prefixes here must stay stable.
#[derive(Debug, Error)]
pub enum Error {
    #[error("requires at least a title argument")]
    MissingTitle,

    #[error("too many arguments, expected: <title> [message]")]
    TooManyArguments,

    #[error("invalid configuration: {0}")]
    InvalidConfiguration(#[from] ConfigError),

    #[error("failed to process icon: {0}")]
    IconRead(IconError),

    #[error("failed to send notification: {0:#}")]
    Notify(anyhow::Error),

    #[error("failed to send alert: {0:#}")]
    Alert(anyhow::Error),

    #[error("failed to beep: {0:#}")]
    Beep(anyhow::Error),

    #[error("cannot write output: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;

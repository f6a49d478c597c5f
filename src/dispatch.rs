use std::io::Write;

use tracing::{debug, info};

use crate::config::{Config, TOOL_NAME, VERSION};
use crate::error::{Error, Result};
use crate::icon::IconResolver;
use crate::notify::NotificationClient;

/// Maps a parsed invocation onto exactly one backend call.
pub struct Dispatcher<'a, C: NotificationClient + ?Sized> {
    client: &'a mut C,
    icons: IconResolver,
}

impl<'a, C: NotificationClient + ?Sized> Dispatcher<'a, C> {
    pub fn new(client: &'a mut C) -> Self {
        Self {
            client,
            icons: IconResolver::new(),
        }
    }

    /// Resolve relative icon tokens under another directory.
    pub fn with_icons(mut self, icons: IconResolver) -> Self {
        self.icons = icons;
        self
    }

    /// Run the invocation. The version line is written to `out`.
    pub fn run(&mut self, config: &Config, args: &[String], out: &mut dyn Write) -> Result<()> {
        if config.version {
            writeln!(out, "{} version {}", TOOL_NAME, VERSION)?;
            return Ok(());
        }

        check_arg_count(config, args)?;
        config.validate_with(&self.icons)?;

        if config.beep_mode {
            debug!(frequency = config.frequency, duration = config.duration, "beeping");
            return self
                .client
                .beep(config.frequency, config.duration)
                .map_err(Error::Beep);
        }

        let title = args.first().ok_or(Error::MissingTitle)?;
        let message = args.get(1).map(String::as_str).unwrap_or_default();

        if !config.app_name.is_empty() {
            self.client.set_app_name(&config.app_name);
        }

        let icon = self.icons.resolve(&config.icon).map_err(Error::IconRead)?;

        if config.alert_mode {
            info!(title = %title, "sending alert");
            self.client
                .alert(title, message, icon)
                .map_err(Error::Alert)
        } else {
            info!(title = %title, "sending notification");
            self.client
                .notify(title, message, icon)
                .map_err(Error::Notify)
        }
    }
}

/// More than two positional arguments is always an error; a missing title
/// only matters when a notification will actually be sent.
fn check_arg_count(config: &Config, args: &[String]) -> Result<()> {
    if args.len() > 2 {
        return Err(Error::TooManyArguments);
    }
    if args.is_empty() && !config.beep_mode {
        return Err(Error::MissingTitle);
    }
    Ok(())
}

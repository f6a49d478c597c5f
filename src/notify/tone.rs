use std::io::{self, Write};
use std::process::Command;
use std::thread;
use std::time::Duration;

use anyhow::{Context, Result};
use tracing::debug;

/// Play a tone through the platform's beep facility, falling back to the
/// terminal bell for the requested duration.
pub fn play(frequency: f64, duration: i64) -> Result<()> {
    let millis = u64::try_from(duration).context("duration must not be negative")?;

    let mut cmd = tone_command(frequency, millis);
    match cmd.status() {
        Ok(status) if status.success() => return Ok(()),
        Ok(status) => debug!(%status, "tone command failed, using terminal bell"),
        Err(e) => debug!(error = %e, "tone command unavailable, using terminal bell"),
    }

    let mut stderr = io::stderr().lock();
    stderr.write_all(b"\x07")?;
    stderr.flush()?;
    thread::sleep(Duration::from_millis(millis));

    Ok(())
}

#[cfg(target_os = "windows")]
fn tone_command(frequency: f64, millis: u64) -> Command {
    let mut c = Command::new("powershell");
    c.arg("-NoProfile")
        .arg("-Command")
        .arg(format!("[console]::beep({:.0},{})", frequency, millis));
    c
}

#[cfg(not(target_os = "windows"))]
fn tone_command(frequency: f64, millis: u64) -> Command {
    let mut c = Command::new("beep");
    c.arg("-f")
        .arg(frequency.to_string())
        .arg("-l")
        .arg(millis.to_string());
    c
}

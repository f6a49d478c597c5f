use std::io::Write;

pub const SUCCESS: i32 = 0;
pub const GENERAL_ERROR: i32 = 1;
pub const INVALID_ARGUMENTS: i32 = 2;
pub const DELIVERY_FAILED: i32 = 3;

const ARGUMENT_MARKERS: [&str; 3] = ["invalid configuration", "too many arguments", "requires at least"];
const DELIVERY_MARKERS: [&str; 2] = ["failed to send", "failed to beep"];

/// Map an error message to the process exit code. Matching is
/// case-sensitive and argument problems take precedence over delivery ones.
pub fn exit_code(error: Option<&str>) -> i32 {
    let Some(message) = error else {
        return SUCCESS;
    };

    if ARGUMENT_MARKERS.iter().any(|m| message.contains(m)) {
        INVALID_ARGUMENTS
    } else if DELIVERY_MARKERS.iter().any(|m| message.contains(m)) {
        DELIVERY_FAILED
    } else {
        GENERAL_ERROR
    }
}

/// Print the failure (unless quiet) and return the exit code for `result`.
pub fn report<E: std::fmt::Display>(result: Result<(), E>, quiet: bool, err: &mut dyn Write) -> i32 {
    match result {
        Ok(()) => SUCCESS,
        Err(e) => {
            let message = e.to_string();
            if !quiet {
                let _ = writeln!(err, "Error: {}", message);
            }
            exit_code(Some(&message))
        }
    }
}

use std::io::Write;
use std::os::unix::net::UnixStream;
use strum::{Display as StrumDisplay, EnumIter, EnumString};
use thiserror::Error;

pub const SOCKET_PATH: &str = "/tmp/polar-mouse.sock";

/// One line on the control socket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumString, EnumIter, StrumDisplay)]
#[strum(serialize_all = "kebab-case", ascii_case_insensitive)]
pub enum Command {
    Start,
    Stop,
    /// Start when idle, stop when tracking.
    Toggle,
    ToggleMode,
    ToggleNotation,
    Quit,
}

#[derive(Debug, Error)]
pub enum CommandError {
    #[error("Failed to connect to polar-mouse at {path}: {source}. Is polar-mouse running?")]
    Connect {
        path: &'static str,
        source: std::io::Error,
    },
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub fn send(command: Command) -> Result<(), CommandError> {
    let mut stream = UnixStream::connect(SOCKET_PATH).map_err(|source| CommandError::Connect {
        path: SOCKET_PATH,
        source,
    })?;

    writeln!(stream, "{}", command)?;
    Ok(())
}

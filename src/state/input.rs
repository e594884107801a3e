//! Piped standard input capture
//!
//! Input is only read when stdin is redirected from a pipe or a file. An
//! interactive terminal is never read, so the caller cannot block on it.

use crate::error::{LexidoError, LexidoResult};
use std::fs::File;
use std::io::{self, BufRead, IsTerminal};
use std::os::fd::AsFd;
use std::os::unix::fs::FileTypeExt;
use tracing::debug;

/// What standard input is connected to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMode {
    /// Interactive terminal
    Terminal,
    /// Named or anonymous pipe (`cmd | lexido`)
    Pipe,
    /// Regular file redirect (`lexido < file`)
    File,
    /// Anything else: sockets, `/dev/null`, other devices
    Other,
}

impl InputMode {
    /// Classify an open descriptor
    pub fn of(fd: &impl AsFd) -> io::Result<Self> {
        let fd = fd.as_fd();
        if fd.is_terminal() {
            return Ok(Self::Terminal);
        }

        let file = File::from(fd.try_clone_to_owned()?);
        let file_type = file.metadata()?.file_type();

        Ok(if file_type.is_fifo() {
            Self::Pipe
        } else if file_type.is_file() {
            Self::File
        } else {
            Self::Other
        })
    }

    /// Whether input in this mode should be consumed
    pub fn is_redirected(self) -> bool {
        matches!(self, Self::Pipe | Self::File)
    }
}

/// Read standard input if something was piped into it
pub fn capture_stdin() -> LexidoResult<Option<String>> {
    let stdin = io::stdin();
    let mode =
        InputMode::of(&stdin).map_err(|e| LexidoError::io("inspecting standard input", e))?;
    capture(mode, stdin.lock())
}

/// Read `reader` line by line when `mode` is redirected
///
/// Every line, including the last, comes back terminated by `\n`. Bytes
/// that are not valid UTF-8 become U+FFFD.
pub fn capture(mode: InputMode, reader: impl BufRead) -> LexidoResult<Option<String>> {
    if !mode.is_redirected() {
        debug!("Standard input is {:?}, not reading it", mode);
        return Ok(None);
    }

    let mut text = String::new();
    for line in reader.split(b'\n') {
        let mut line = line.map_err(|e| LexidoError::io("reading piped input", e))?;
        if line.last() == Some(&b'\r') {
            line.pop();
        }
        text.push_str(&String::from_utf8_lossy(&line));
        text.push('\n');
    }

    debug!("Captured {} bytes of piped input", text.len());
    Ok(Some(text))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Read};
    use std::process::{Command, Stdio};

    /// Reader that fails the test if anything touches it
    struct Untouchable;

    impl Read for Untouchable {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            panic!("terminal input must not be read");
        }
    }

    impl BufRead for Untouchable {
        fn fill_buf(&mut self) -> io::Result<&[u8]> {
            panic!("terminal input must not be read");
        }

        fn consume(&mut self, _amt: usize) {}
    }

    #[test]
    fn terminal_is_not_read() {
        let captured = capture(InputMode::Terminal, Untouchable).unwrap();
        assert_eq!(captured, None);

        let captured = capture(InputMode::Other, Untouchable).unwrap();
        assert_eq!(captured, None);
    }

    #[test]
    fn piped_lines_are_reconstructed() {
        let captured = capture(InputMode::Pipe, Cursor::new("a\nb")).unwrap();
        assert_eq!(captured.as_deref(), Some("a\nb\n"));
    }

    #[test]
    fn crlf_is_normalized() {
        let captured = capture(InputMode::File, Cursor::new("a\r\nb\r\n")).unwrap();
        assert_eq!(captured.as_deref(), Some("a\nb\n"));
    }

    #[test]
    fn empty_pipe_still_counts_as_input() {
        let captured = capture(InputMode::Pipe, Cursor::new("")).unwrap();
        assert_eq!(captured.as_deref(), Some(""));
    }

    #[test]
    fn invalid_utf8_is_replaced() {
        let listing = b"readme.txt\ncaf\xe9.txt\n".to_vec();
        let captured = capture(InputMode::Pipe, Cursor::new(listing)).unwrap();
        assert_eq!(captured.as_deref(), Some("readme.txt\ncaf\u{FFFD}.txt\n"));
    }

    #[test]
    fn classify_regular_file() {
        let file = tempfile::tempfile().unwrap();
        assert_eq!(InputMode::of(&file).unwrap(), InputMode::File);
    }

    #[test]
    fn classify_pipe() {
        let mut child = Command::new("sh")
            .args(["-c", "exit 0"])
            .stdout(Stdio::piped())
            .spawn()
            .unwrap();
        let stdout = child.stdout.take().unwrap();

        assert_eq!(InputMode::of(&stdout).unwrap(), InputMode::Pipe);
        child.wait().unwrap();
    }

    #[test]
    fn classify_socket_and_null() {
        let (a, _b) = std::os::unix::net::UnixStream::pair().unwrap();
        assert_eq!(InputMode::of(&a).unwrap(), InputMode::Other);

        let null = File::open("/dev/null").unwrap();
        assert_eq!(InputMode::of(&null).unwrap(), InputMode::Other);
    }
}

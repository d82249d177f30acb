//! Clipboard copy that outlives the process.
//!
//! On X11 and Wayland the selection is served by the process that set it, so
//! the copy is handed to a child copy of this binary which keeps serving it
//! until another program takes the clipboard over.

#[cfg(target_os = "linux")]
pub use linux::{copy, serve_if_requested};
#[cfg(not(target_os = "linux"))]
pub use other::{copy, serve_if_requested};

/// Windows and macOS keep the clipboard contents after the process exits.
#[cfg(not(target_os = "linux"))]
mod other {
    use anyhow::{Context, Result};
    use arboard::Clipboard;

    pub fn copy(text: &str) -> Result<()> {
        let mut clipboard = Clipboard::new().context("Failed to open the clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to copy the command to the clipboard")
    }

    pub fn serve_if_requested() -> Option<Result<()>> {
        None
    }
}

#[cfg(target_os = "linux")]
mod linux {
    use std::env;
    use std::io::{self, BufRead, BufReader, Read, Write};
    use std::process::{Command, Stdio};

    use anyhow::{bail, Context, Result};
    use arboard::{Clipboard, SetExtLinux};
    use tracing::debug;

    /// Set in the environment of the child that serves the selection.
    const HELPER_ENV: &str = "GET_FFMPEG_CMD_CLIPBOARD_HELPER";

    /// Line the helper writes once it owns the selection.
    const READY: &str = "ready";

    /// Starts a detached helper holding `text` and waits until it owns the
    /// selection.
    pub fn copy(text: &str) -> Result<()> {
        let exe = env::current_exe().context("Failed to locate the running executable")?;
        let mut child = Command::new(exe)
            .env(HELPER_ENV, "1")
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::null())
            .spawn()
            .context("Failed to start the clipboard helper")?;

        {
            let mut stdin = child.stdin.take().context("Clipboard helper has no stdin")?;
            stdin
                .write_all(text.as_bytes())
                .context("Failed to hand the command to the clipboard helper")?;
        }

        let stdout = child.stdout.take().context("Clipboard helper has no stdout")?;
        wait_ready(BufReader::new(stdout))?;
        debug!(pid = child.id(), "clipboard helper owns the selection");
        Ok(())
    }

    /// Reads the helper's first line; anything but the ready line means it
    /// gave up without owning the selection.
    pub(crate) fn wait_ready<R: BufRead>(mut reader: R) -> Result<()> {
        let mut line = String::new();
        reader
            .read_line(&mut line)
            .context("Failed to read from the clipboard helper")?;
        if line.trim_end() != READY {
            bail!("Failed to copy the command to the clipboard");
        }
        Ok(())
    }

    /// Runs the helper side when this process was started by [`copy`].
    pub fn serve_if_requested() -> Option<Result<()>> {
        env::var_os(HELPER_ENV).map(|_| serve())
    }

    fn serve() -> Result<()> {
        let mut text = String::new();
        io::stdin()
            .read_to_string(&mut text)
            .context("Failed to read the text to copy")?;

        let mut clipboard = Clipboard::new().context("Failed to open the clipboard")?;
        clipboard
            .set_text(text.as_str())
            .context("Failed to copy the command to the clipboard")?;

        let mut out = io::stdout().lock();
        writeln!(out, "{READY}")?;
        out.flush()?;
        drop(out);

        // Blocks until another program replaces the selection.
        clipboard
            .set()
            .wait()
            .text(text)
            .context("Failed to keep serving the clipboard")
    }
}

#[cfg(all(test, target_os = "linux"))]
mod tests {
    use super::linux::wait_ready;
    use std::io::Cursor;

    #[test]
    fn ready_line_confirms_the_copy() {
        assert!(wait_ready(Cursor::new("ready\n")).is_ok());
    }

    #[test]
    fn helper_exiting_early_is_an_error() {
        assert!(wait_ready(Cursor::new("")).is_err());
        assert!(wait_ready(Cursor::new("Error: no display\n")).is_err());
    }
}

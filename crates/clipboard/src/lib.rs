//! Clipboard access for layoutfix.
//!
//! Reads the text to fix and delivers the result through arboard.
//! On Linux, writes land in both CLIPBOARD and PRIMARY selections.

use anyhow::{bail, Context, Result};
use arboard::Clipboard;
use std::ffi::OsString;

#[cfg(target_os = "linux")]
use arboard::{GetExtLinux, LinuxClipboardKind, SetExtLinux};

/// Copy text to system clipboard.
///
/// On Linux the selection lives only as long as the process that owns it,
/// so a detached child keeps serving it until another application takes
/// the clipboard over. The call returns as soon as the child is started.
pub fn copy(text: &str) -> Result<()> {
    if text.is_empty() {
        bail!("Cannot copy empty text");
    }

    #[cfg(target_os = "linux")]
    {
        use fork::{close_fd, fork, setsid, Fork};

        check_display(|name| std::env::var_os(name))?;

        match fork() {
            Ok(Fork::Child) => {
                // Detach from the terminal so closing it does not drop the selection
                let _ = setsid();
                let _ = close_fd();
                let code = if serve_selection(text).is_ok() { 0 } else { 1 };
                std::process::exit(code);
            }
            Ok(Fork::Parent(_)) => Ok(()),
            Err(e) => bail!("Failed to start clipboard owner: {:?}", e),
        }
    }

    #[cfg(not(target_os = "linux"))]
    {
        let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;
        clipboard
            .set_text(text)
            .context("Failed to set clipboard text")?;
        Ok(())
    }
}

/// Own both selections and block until CLIPBOARD is taken by someone else.
#[cfg(target_os = "linux")]
fn serve_selection(text: &str) -> Result<()> {
    let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;

    // Middle-click selection
    let _ = clipboard
        .set()
        .clipboard(LinuxClipboardKind::Primary)
        .text(text.to_string());

    // Ctrl+C/V selection
    clipboard
        .set()
        .clipboard(LinuxClipboardKind::Clipboard)
        .wait()
        .text(text.to_string())
        .context("Failed to set clipboard text")?;

    Ok(())
}

/// Fail early when there is no display server to own a selection.
///
/// The detached child cannot report errors back, so this is the last point
/// where a missing display is visible to the caller.
#[cfg_attr(not(target_os = "linux"), allow(dead_code))]
fn check_display(var: impl Fn(&str) -> Option<OsString>) -> Result<()> {
    let present = ["DISPLAY", "WAYLAND_DISPLAY"]
        .into_iter()
        .any(|name| var(name).is_some_and(|value| !value.is_empty()));
    if !present {
        bail!("No X11 or Wayland display available for the clipboard");
    }
    Ok(())
}

/// Read text from system clipboard.
///
/// On Linux, tries CLIPBOARD selection first, then falls back to PRIMARY.
pub fn paste() -> Result<String> {
    let mut clipboard = Clipboard::new().context("Failed to initialize clipboard")?;

    #[cfg(target_os = "linux")]
    {
        if let Ok(text) = clipboard
            .get()
            .clipboard(LinuxClipboardKind::Clipboard)
            .text()
        {
            if !text.is_empty() {
                return Ok(text);
            }
        }

        let text = clipboard
            .get()
            .clipboard(LinuxClipboardKind::Primary)
            .text()
            .context("Clipboard does not contain text")?;
        Ok(text)
    }

    #[cfg(not(target_os = "linux"))]
    {
        let text = clipboard
            .get_text()
            .context("Clipboard does not contain text")?;
        Ok(text)
    }
}

// cleancopy/src/utils/clipboard.rs
//! System clipboard access through `arboard`.
//!
//! The clipboard is opened per operation: a host without a reachable
//! clipboard (headless CI, SSH sessions) only fails the operations that
//! actually need it. Builds without the `clipboard` feature report the
//! clipboard as unavailable.

use async_trait::async_trait;
use cleancopy_core::{CleanCopyError, ClipboardItem, ClipboardWriter};
use log::debug;

/// The operating system clipboard.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClipboard;

impl SystemClipboard {
    pub fn new() -> Self {
        Self
    }

    #[cfg(feature = "clipboard")]
    fn open() -> Result<arboard::Clipboard, CleanCopyError> {
        arboard::Clipboard::new().map_err(|e| CleanCopyError::ClipboardUnavailable(e.to_string()))
    }

    /// Reads the current plain-text contents. `Ok(None)` means the clipboard holds no text.
    #[cfg(feature = "clipboard")]
    pub fn read_text(&self) -> Result<Option<String>, CleanCopyError> {
        match Self::open()?.get_text() {
            Ok(text) => Ok(Some(text)),
            Err(arboard::Error::ContentNotAvailable) => Ok(None),
            Err(e) => Err(CleanCopyError::ClipboardUnavailable(e.to_string())),
        }
    }

    #[cfg(not(feature = "clipboard"))]
    pub fn read_text(&self) -> Result<Option<String>, CleanCopyError> {
        Err(unsupported())
    }

    #[cfg(feature = "clipboard")]
    pub fn set_text(&self, text: &str) -> Result<(), CleanCopyError> {
        Self::open()?
            .set_text(text.to_owned())
            .map_err(|e| CleanCopyError::ClipboardWrite(e.to_string()))
    }

    #[cfg(not(feature = "clipboard"))]
    pub fn set_text(&self, _text: &str) -> Result<(), CleanCopyError> {
        Err(unsupported())
    }
}

#[cfg(not(feature = "clipboard"))]
fn unsupported() -> CleanCopyError {
    CleanCopyError::ClipboardUnavailable("cleancopy was built without the `clipboard` feature".to_string())
}

#[async_trait]
impl ClipboardWriter for SystemClipboard {
    /// Only the plain-text representation can be placed on the system clipboard.
    async fn write(&self, items: Vec<ClipboardItem>) -> Result<(), CleanCopyError> {
        let text = items
            .iter()
            .find_map(ClipboardItem::plain_text)
            .transpose()?;
        match text {
            Some(text) => self.set_text(text),
            None => {
                debug!("clipboard write carried no plain text; nothing to place");
                Ok(())
            }
        }
    }

    async fn write_text(&self, text: &str) -> Result<(), CleanCopyError> {
        self.set_text(text)
    }
}

/// Copy text to the system clipboard.
pub fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    SystemClipboard::new().set_text(text)?;
    Ok(())
}

// cleancopy-core/src/clipboard.rs
//! Clipboard write capability and its sanitizing decorator.
//!
//! Hosts expose two write entry points: a structured `write` accepting items
//! with several representations (MIME type -> bytes) and a plain-text
//! `write_text`. [`SanitizingClipboard`] sits in front of a real
//! [`ClipboardWriter`], rewrites the `text/plain` representation and then
//! delegates. If preparing the sanitized payload fails, the original payload
//! is delegated instead so a copy is never lost.
//!
//! License: MIT OR APACHE 2.0

use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use log::{debug, error};

use crate::engine::SanitizationEngine;
use crate::errors::CleanCopyError;

/// MIME type of the plain-text representation.
pub const TEXT_PLAIN: &str = "text/plain";

/// One clipboard entry carrying one or more representations of the same content.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClipboardItem {
    representations: Vec<(String, Vec<u8>)>,
}

impl ClipboardItem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Item with a single `text/plain` representation.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new().with(TEXT_PLAIN, text.into().into_bytes())
    }

    /// Adds (or replaces) the representation for `mime`, keeping insertion order.
    pub fn with(mut self, mime: impl Into<String>, data: impl Into<Vec<u8>>) -> Self {
        self.set(mime, data);
        self
    }

    pub fn set(&mut self, mime: impl Into<String>, data: impl Into<Vec<u8>>) {
        let mime = mime.into();
        let data = data.into();
        match self.representations.iter_mut().find(|(m, _)| *m == mime) {
            Some(slot) => slot.1 = data,
            None => self.representations.push((mime, data)),
        }
    }

    pub fn types(&self) -> impl Iterator<Item = &str> {
        self.representations.iter().map(|(m, _)| m.as_str())
    }

    pub fn get(&self, mime: &str) -> Option<&[u8]> {
        self.representations
            .iter()
            .find(|(m, _)| m == mime)
            .map(|(_, d)| d.as_slice())
    }

    /// The `text/plain` representation decoded as UTF-8, if present.
    pub fn plain_text(&self) -> Option<Result<&str, CleanCopyError>> {
        self.get(TEXT_PLAIN).map(|bytes| {
            std::str::from_utf8(bytes).map_err(|_| CleanCopyError::InvalidUtf8(TEXT_PLAIN.to_string()))
        })
    }
}

/// The clipboard write entry points of a host.
#[async_trait]
pub trait ClipboardWriter: Send + Sync {
    /// Writes structured, possibly multi-representation items.
    async fn write(&self, items: Vec<ClipboardItem>) -> Result<(), CleanCopyError>;

    /// Writes plain text.
    async fn write_text(&self, text: &str) -> Result<(), CleanCopyError>;
}

#[async_trait]
impl<W: ClipboardWriter + ?Sized> ClipboardWriter for Arc<W> {
    async fn write(&self, items: Vec<ClipboardItem>) -> Result<(), CleanCopyError> {
        (**self).write(items).await
    }

    async fn write_text(&self, text: &str) -> Result<(), CleanCopyError> {
        (**self).write_text(text).await
    }
}

/// Decorator that sanitizes plain text before delegating to the real writer.
pub struct SanitizingClipboard<W> {
    inner: W,
    engine: Arc<dyn SanitizationEngine>,
}

impl<W: ClipboardWriter> SanitizingClipboard<W> {
    pub fn new(inner: W, engine: Arc<dyn SanitizationEngine>) -> Self {
        Self { inner, engine }
    }

    pub fn inner(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }

    /// Rebuilds `items` with every `text/plain` representation sanitized.
    /// Other representations are copied byte for byte.
    pub fn sanitize_items(&self, items: &[ClipboardItem]) -> Result<Vec<ClipboardItem>, CleanCopyError> {
        items
            .iter()
            .map(|item| -> Result<ClipboardItem, CleanCopyError> {
                let mut rebuilt = ClipboardItem::new();
                for (mime, data) in &item.representations {
                    if mime == TEXT_PLAIN {
                        let text = std::str::from_utf8(data)
                            .map_err(|_| CleanCopyError::InvalidUtf8(mime.clone()))?;
                        rebuilt.set(mime.clone(), self.engine.sanitize(text).into_bytes());
                    } else {
                        rebuilt.set(mime.clone(), data.clone());
                    }
                }
                debug!("created sanitized clipboard item for types={:?}", item.types().collect::<Vec<_>>());
                Ok(rebuilt)
            })
            .collect()
    }
}

#[async_trait]
impl<W: ClipboardWriter> ClipboardWriter for SanitizingClipboard<W> {
    async fn write(&self, items: Vec<ClipboardItem>) -> Result<(), CleanCopyError> {
        debug!("clipboard write called with {} item(s)", items.len());
        match self.sanitize_items(&items) {
            Ok(sanitized) => self.inner.write(sanitized).await,
            Err(e) => {
                error!("error in clipboard write wrapper, falling back: {}", e);
                self.inner.write(items).await
            }
        }
    }

    async fn write_text(&self, text: &str) -> Result<(), CleanCopyError> {
        debug!("clipboard write_text called with text=\"{}\"", text);
        let sanitized = self.engine.sanitize(text);
        debug!("clipboard write_text sanitized to \"{}\"", sanitized);
        self.inner.write_text(&sanitized).await
    }
}

/// Wraps the host writer when it exists. A missing writer means interception is skipped.
pub fn install_interception<W: ClipboardWriter>(
    writer: Option<W>,
    engine: Arc<dyn SanitizationEngine>,
) -> Option<SanitizingClipboard<W>> {
    match writer {
        Some(writer) => Some(SanitizingClipboard::new(writer, engine)),
        None => {
            debug!("clipboard API not accessible, skipping programmatic interception");
            None
        }
    }
}

/// A write recorded by [`MemoryClipboard`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedWrite {
    Items(Vec<ClipboardItem>),
    Text(String),
}

/// In-memory clipboard that records every write. Useful for headless hosts and tests.
#[derive(Debug, Default)]
pub struct MemoryClipboard {
    writes: Mutex<Vec<RecordedWrite>>,
}

impl MemoryClipboard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn writes(&self) -> Vec<RecordedWrite> {
        self.writes.lock().map(|w| w.clone()).unwrap_or_default()
    }

    /// Plain text of the most recent write, whichever entry point was used.
    pub fn last_text(&self) -> Option<String> {
        match self.writes().pop()? {
            RecordedWrite::Text(text) => Some(text),
            RecordedWrite::Items(items) => items
                .iter()
                .find_map(|item| item.plain_text().and_then(Result::ok).map(str::to_string)),
        }
    }

    fn record(&self, write: RecordedWrite) -> Result<(), CleanCopyError> {
        self.writes
            .lock()
            .map_err(|_| CleanCopyError::Fatal("memory clipboard lock poisoned".to_string()))?
            .push(write);
        Ok(())
    }
}

#[async_trait]
impl ClipboardWriter for MemoryClipboard {
    async fn write(&self, items: Vec<ClipboardItem>) -> Result<(), CleanCopyError> {
        self.record(RecordedWrite::Items(items))
    }

    async fn write_text(&self, text: &str) -> Result<(), CleanCopyError> {
        self.record(RecordedWrite::Text(text.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_replaces_existing_representation_in_place() {
        let item = ClipboardItem::new()
            .with("text/html", "<a>")
            .with(TEXT_PLAIN, "a")
            .with("text/html", "<b>");
        assert_eq!(item.types().collect::<Vec<_>>(), vec!["text/html", TEXT_PLAIN]);
        assert_eq!(item.get("text/html"), Some(&b"<b>"[..]));
    }

    #[test]
    fn plain_text_reports_invalid_utf8() {
        let item = ClipboardItem::new().with(TEXT_PLAIN, vec![0xff, 0xfe]);
        assert!(matches!(item.plain_text(), Some(Err(CleanCopyError::InvalidUtf8(_)))));
        assert!(ClipboardItem::new().plain_text().is_none());
    }
}

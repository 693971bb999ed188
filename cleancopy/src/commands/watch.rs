//! `watch` command: rewrite tracked URLs as they land on the system clipboard.
//!
//! Every new clipboard text is treated like a copy event: it is passed to
//! [`handle_copy`] and written back only when the handler changed it. The
//! last text seen (ours or the user's) is remembered so a rewrite is not
//! processed again on the next tick.

use anyhow::{Context, Result};
use log::{debug, info, warn};
use std::future::Future;
use std::sync::Arc;
use std::time::Duration;

use cleancopy_core::{
    handle_copy, ClipboardItem, ClipboardWriter, CopyOutcome, SanitizationEngine, SanitizingClipboard,
};

use crate::cli::WatchCommand;
use crate::commands::{build_engine, info_msg, success_msg, warn_msg};
use crate::ui::theme::ThemeMap;
use crate::utils::clipboard::SystemClipboard;

/// State carried between polls.
pub struct ClipboardWatcher<W> {
    engine: Arc<dyn SanitizationEngine>,
    writer: W,
    last_seen: Option<String>,
}

impl<W: ClipboardWriter> ClipboardWatcher<W> {
    pub fn new(engine: Arc<dyn SanitizationEngine>, writer: W) -> Self {
        Self {
            engine,
            writer,
            last_seen: None,
        }
    }

    /// Processes one observed clipboard text. Returns the rewrite, if one was written.
    pub async fn observe(&mut self, current: Option<String>) -> Result<Option<String>> {
        if current == self.last_seen {
            return Ok(None);
        }
        self.last_seen = current.clone();

        let text = match current {
            Some(text) if !text.is_empty() => text,
            _ => return Ok(None),
        };

        let mut payload = ClipboardItem::new();
        match handle_copy(self.engine.as_ref(), Some(&text), &mut payload) {
            CopyOutcome::Sanitized(clean) => {
                self.writer
                    .write(vec![payload])
                    .await
                    .context("Failed to write sanitized text back to the clipboard")?;
                self.last_seen = Some(clean.clone());
                Ok(Some(clean))
            }
            CopyOutcome::Unchanged | CopyOutcome::Empty => Ok(None),
        }
    }
}

pub async fn run(cmd: WatchCommand, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    let engine = build_engine(&cmd.blacklist)?;
    let system = SystemClipboard::new();

    // Probe once up front so a missing clipboard is reported instead of polled forever.
    let first = system.read_text().context("Clipboard is not available")?;

    // The decorator guards anything placed through the writer, including our own rewrites.
    let writer = SanitizingClipboard::new(system, Arc::clone(&engine));
    let mut watcher = ClipboardWatcher::new(engine, writer);

    if cmd.once {
        return report(watcher.observe(first).await, quiet, theme_map);
    }

    if !quiet {
        info_msg(
            format!("Watching the clipboard every {} ms. Press Ctrl-C to stop.", cmd.interval_ms),
            theme_map,
        );
    }
    report(watcher.observe(first).await, quiet, theme_map)?;

    let shutdown = async {
        let _ = tokio::signal::ctrl_c().await;
        info!("Ctrl-C received, stopping clipboard watch.");
    };
    poll_until(
        &mut watcher,
        || system.read_text().map_err(anyhow::Error::from),
        Duration::from_millis(cmd.interval_ms),
        shutdown,
        quiet,
        theme_map,
    )
    .await;
    Ok(())
}

/// Polls `read` every `period` and feeds each result to the watcher until `shutdown` completes.
///
/// `shutdown` is created once and polled across iterations, so a signal that
/// arrives while a rewrite is being written is still seen on the next turn.
pub async fn poll_until<W, R, S>(
    watcher: &mut ClipboardWatcher<W>,
    mut read: R,
    period: Duration,
    shutdown: S,
    quiet: bool,
    theme_map: &ThemeMap,
) where
    W: ClipboardWriter,
    R: FnMut() -> Result<Option<String>>,
    S: Future<Output = ()>,
{
    let mut ticker = tokio::time::interval(period);
    tokio::pin!(shutdown);
    loop {
        tokio::select! {
            _ = &mut shutdown => break,
            _ = ticker.tick() => {
                match read() {
                    Ok(current) => {
                        if let Err(e) = report(watcher.observe(current).await, quiet, theme_map) {
                            warn_msg(format!("{:#}", e), theme_map);
                        }
                    }
                    Err(e) => debug!("clipboard read failed, retrying next tick: {}", e),
                }
            }
        }
    }
}

fn report(result: Result<Option<String>>, quiet: bool, theme_map: &ThemeMap) -> Result<()> {
    match result {
        Ok(Some(clean)) => {
            if !quiet {
                success_msg(format!("Sanitized clipboard -> {}", clean), theme_map);
            }
            Ok(())
        }
        Ok(None) => Ok(()),
        Err(e) => {
            warn!("clipboard rewrite failed: {:#}", e);
            Err(e)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::ThemeStyle;
    use cleancopy_core::{Blacklist, MemoryClipboard, UrlSanitizer};

    fn watcher() -> ClipboardWatcher<Arc<MemoryClipboard>> {
        let engine: Arc<dyn SanitizationEngine> =
            Arc::new(UrlSanitizer::new(Arc::new(Blacklist::from_names(["fbclid"]))));
        ClipboardWatcher::new(engine, Arc::new(MemoryClipboard::new()))
    }

    #[test_log::test(tokio::test)]
    async fn rewrites_new_tracked_url_once() {
        let mut watcher = watcher();
        let url = Some("https://example.com/?fbclid=1&a=2".to_string());

        let rewritten = watcher.observe(url.clone()).await.unwrap();
        assert_eq!(rewritten.as_deref(), Some("https://example.com/?a=2"));
        assert_eq!(watcher.writer.last_text().as_deref(), Some("https://example.com/?a=2"));

        // Our own rewrite shows up on the next poll and is left alone.
        assert_eq!(watcher.observe(rewritten).await.unwrap(), None);
        assert_eq!(watcher.writer.writes().len(), 1);
    }

    #[tokio::test]
    async fn stop_signal_raised_mid_poll_ends_the_loop() {
        let mut watcher = watcher();
        let (tx, rx) = tokio::sync::oneshot::channel::<()>();
        let mut tx = Some(tx);
        let mut reads = 0;

        // The stop request fires from inside the first read, while that tick is still being handled.
        let read = || -> Result<Option<String>> {
            reads += 1;
            if let Some(tx) = tx.take() {
                let _ = tx.send(());
            }
            Ok(Some("https://example.com/?fbclid=1".to_string()))
        };
        let shutdown = async {
            let _ = rx.await;
        };

        tokio::time::timeout(
            Duration::from_secs(5),
            poll_until(&mut watcher, read, Duration::from_millis(1), shutdown, true, &ThemeStyle::default_theme_map()),
        )
        .await
        .expect("watch loop did not stop");

        assert!(reads >= 1);
        assert_eq!(watcher.writer.last_text().as_deref(), Some("https://example.com/"));
    }

    #[tokio::test]
    async fn ignores_plain_text_and_empty_clipboard() {
        let mut watcher = watcher();
        assert_eq!(watcher.observe(Some("hello".into())).await.unwrap(), None);
        assert_eq!(watcher.observe(None).await.unwrap(), None);
        assert!(watcher.writer.writes().is_empty());
    }
}

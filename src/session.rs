//! The session controller: panel commands in, notifications out.
//!
//! A [`Session`] owns the document and the font source for its whole
//! lifetime and holds no other state: every inventory it reports is
//! recomputed from the document at that moment. Notifications go out
//! through an unbounded channel so the app loop can drain them to stdout
//! while a batch is still running.

use std::path::PathBuf;

use tokio::sync::mpsc::UnboundedSender;

use fontswap_document::Document;
use fontswap_fonts::{FontError, FontFamilyGroup, FontName, FontSource};
use fontswap_protocol::{Command, Notification};

use crate::{catalog, replace, scan};

/// What the app loop should do after a command is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionFlow {
    /// Keep reading commands.
    Continue,
    /// Open `url` externally, then keep reading.
    OpenLink(String),
    /// Terminate the session.
    Shutdown,
}

pub struct Session<F> {
    doc: Document,
    fonts: F,
    tx: UnboundedSender<Notification>,
    /// Where to save the document after a successful batch, if anywhere.
    write_back: Option<PathBuf>,
}

impl<F: FontSource> Session<F> {
    pub fn new(
        doc: Document,
        fonts: F,
        tx: UnboundedSender<Notification>,
        write_back: Option<PathBuf>,
    ) -> Self {
        Self {
            doc,
            fonts,
            tx,
            write_back,
        }
    }

    pub fn document(&self) -> &Document {
        &self.doc
    }

    /// Send the opening notification: current inventory, full catalog,
    /// selection flag. A catalog failure aborts startup.
    pub async fn start(&mut self) -> Result<(), FontError> {
        let selection_fonts = self.selection_fonts();
        let all_fonts = catalog::fetch_catalog(&self.fonts).await?;
        self.send(Notification::Init {
            selection_fonts,
            all_fonts,
            has_selection: self.doc.has_selection(),
        });
        Ok(())
    }

    /// Dispatch one inbound message.
    pub async fn handle(&mut self, command: Command) -> SessionFlow {
        match command {
            Command::ReplaceBatch { from_list, to } => {
                self.replace_batch(&from_list, &to).await;
                SessionFlow::Continue
            }
            Command::Cancel => {
                log::info!("Session cancelled");
                SessionFlow::Shutdown
            }
            Command::OpenLink { url } => SessionFlow::OpenLink(url),
            Command::SelectionChange { selection } => {
                self.selection_changed(selection);
                SessionFlow::Continue
            }
        }
    }

    /// The selection changed: apply new ids when supplied, then re-scan
    /// and re-report.
    pub fn selection_changed(&mut self, selection: Option<Vec<String>>) {
        if let Some(ids) = selection {
            self.doc.set_selection(ids);
        }
        self.send_selection_update();
    }

    /// Replace each font of `from_list` with `to`, strictly in order,
    /// streaming a progress notification per replaced range.
    ///
    /// The shared target is loaded once up front; a load failure (then or
    /// mid-batch) aborts remaining pairs with a single error notification
    /// and no rollback of ranges already applied.
    async fn replace_batch(&mut self, from_list: &[FontName], to: &FontName) {
        if let Err(err) = self.fonts.load_font(to).await {
            self.report_load_failure(err);
            return;
        }

        let pair_count = from_list.len();
        let mut total = 0usize;
        for (index, from) in from_list.iter().enumerate() {
            log::info!("Replacing {from} -> {to} ({}/{pair_count})", index + 1);
            // The active node set is re-resolved per pair: earlier pairs
            // may have changed what the selection's text uses.
            let roots = self.doc.active_paths();
            let message = format!(
                "Replacing {}/{}: {} {}...",
                index + 1,
                pair_count,
                from.family,
                from.style
            );
            let tx = self.tx.clone();
            let result = replace::replace_fonts(
                &mut self.doc,
                &roots,
                from,
                to,
                &self.fonts,
                |count| {
                    let _ = tx.send(Notification::Progress {
                        message: message.clone(),
                        count: total + count,
                    });
                },
            )
            .await;
            match result {
                Ok(count) => total += count,
                Err(err) => {
                    self.report_load_failure(err);
                    return;
                }
            }
        }

        self.send(Notification::Success {
            message: format!("Replaced {total} instance(s)"),
        });
        self.write_back();
        self.send_selection_update();
    }

    fn report_load_failure(&self, err: FontError) {
        log::error!("Replace batch aborted: {err}");
        self.send(Notification::Error {
            message: err.to_string(),
        });
    }

    fn send_selection_update(&self) {
        self.send(Notification::SelectionUpdate {
            selection_fonts: self.selection_fonts(),
            has_selection: self.doc.has_selection(),
        });
    }

    fn selection_fonts(&self) -> Vec<FontFamilyGroup> {
        scan::collect_fonts(&self.doc, &self.doc.active_paths())
    }

    fn send(&self, notification: Notification) {
        if self.tx.send(notification).is_err() {
            log::warn!("Notification channel closed; panel is gone");
        }
    }

    fn write_back(&self) {
        if let Some(path) = &self.write_back {
            match self.doc.save(path) {
                Ok(()) => log::info!("Saved document to {}", path.display()),
                Err(err) => {
                    log::error!("Failed to save document to {}: {err}", path.display());
                }
            }
        }
    }
}

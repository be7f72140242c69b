//! The interactive session loop over stdin/stdout.
//!
//! Reads line-delimited JSON commands from stdin until the stream is
//! closed or the session is cancelled, and writes notifications to stdout.
//! All logging goes to stderr (or a file) so the protocol stream stays
//! clean.

use std::path::PathBuf;

use anyhow::{Context, Result};
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc;

use fontswap_document::Document;
use fontswap_fonts::FontSource;
use fontswap_protocol::{parse_command, send_notification};

use crate::session::{Session, SessionFlow};

/// Run a session to completion: send `init`, then serve commands until
/// EOF or `cancel`.
pub async fn run<F: FontSource>(
    doc: Document,
    fonts: F,
    write_back: Option<PathBuf>,
) -> Result<()> {
    let (tx, mut rx) = mpsc::unbounded_channel();

    // Writer task: drain notifications to stdout in send order, so
    // progress streams while a batch is still replacing.
    let writer = tokio::spawn(async move {
        let mut stdout = std::io::stdout();
        while let Some(notification) = rx.recv().await {
            if let Err(err) = send_notification(&mut stdout, &notification) {
                log::error!("Failed to write notification: {err}");
                break;
            }
        }
    });

    let mut session = Session::new(doc, fonts, tx, write_back);
    session
        .start()
        .await
        .context("failed to fetch the font catalog")?;

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }
        let command = match parse_command(trimmed) {
            Ok(command) => command,
            Err(err) => {
                log::warn!("Ignoring malformed command: {err}");
                continue;
            }
        };
        match session.handle(command).await {
            SessionFlow::Continue => {}
            SessionFlow::OpenLink(url) => {
                log::info!("Opening external link: {url}");
                if let Err(err) = open::that_detached(&url) {
                    log::warn!("Failed to open {url}: {err}");
                }
            }
            SessionFlow::Shutdown => break,
        }
    }

    // Dropping the session drops the sender; the writer drains what is
    // left and exits.
    drop(session);
    let _ = writer.await;
    log::info!("Session ended");
    Ok(())
}

//! Panel wire protocol: line-delimited JSON over stdin/stdout.
//!
//! This crate contains the minimal set of types needed to speak to the
//! interactive panel: incoming command deserialization, outgoing
//! notification serialization, and newline framing. Every message is a
//! single JSON object on one line, tagged by its `type` field.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use fontswap_fonts::{FontFamilyGroup, FontName};

// ---------------------------------------------------------------------------
// Inbound messages
// ---------------------------------------------------------------------------

/// A message from the panel (or the host driver) to the core.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Command {
    /// Replace every font in `from_list` with `to`, pair by pair, in the
    /// given order.
    #[serde(rename_all = "camelCase")]
    ReplaceBatch {
        from_list: Vec<FontName>,
        to: FontName,
    },

    /// Terminate the session.
    Cancel,

    /// Open `url` in an external viewer. Passed through unvalidated.
    OpenLink { url: String },

    /// Host event: the document selection changed. When `selection` is
    /// present it carries the new node ids; when absent the core just
    /// re-queries and re-reports.
    SelectionChange {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        selection: Option<Vec<String>>,
    },
}

// ---------------------------------------------------------------------------
// Outbound messages
// ---------------------------------------------------------------------------

/// A message from the core to the panel.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case")]
pub enum Notification {
    /// First message of a session: fonts used by the active node set,
    /// the full catalog, and whether a selection is active.
    #[serde(rename_all = "camelCase")]
    Init {
        selection_fonts: Vec<FontFamilyGroup>,
        all_fonts: Vec<FontFamilyGroup>,
        has_selection: bool,
    },

    /// Refreshed inventory after a selection change or a completed batch.
    #[serde(rename_all = "camelCase")]
    SelectionUpdate {
        selection_fonts: Vec<FontFamilyGroup>,
        has_selection: bool,
    },

    /// One replaced range; `count` is the running total across the batch.
    Progress { message: String, count: usize },

    /// The whole batch completed.
    Success { message: String },

    /// The target font failed to load; the batch was aborted.
    Error { message: String },
}

// ---------------------------------------------------------------------------
// Framing
// ---------------------------------------------------------------------------

/// Send a notification to a writer as a single newline-terminated JSON
/// line, flushing so the panel sees it immediately.
pub fn send_notification(out: &mut impl Write, notification: &Notification) -> io::Result<()> {
    let json = serde_json::to_string(notification).map_err(io::Error::other)?;
    writeln!(out, "{json}")?;
    out.flush()
}

/// Parse one inbound line into a [`Command`].
pub fn parse_command(line: &str) -> Result<Command, serde_json::Error> {
    serde_json::from_str(line.trim())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_replace_batch_wire_shape() {
        let json = r#"{
            "type": "replace-batch",
            "fromList": [{ "family": "Arial", "style": "Regular" }],
            "to": { "family": "Arial", "style": "Bold" }
        }"#;
        let command = parse_command(json).unwrap();
        assert_eq!(
            command,
            Command::ReplaceBatch {
                from_list: vec![FontName::new("Arial", "Regular")],
                to: FontName::new("Arial", "Bold"),
            }
        );
    }

    #[test]
    fn test_cancel_and_open_link_parse() {
        assert_eq!(parse_command(r#"{"type":"cancel"}"#).unwrap(), Command::Cancel);
        assert_eq!(
            parse_command(r#"{"type":"open-link","url":"https://example.com"}"#).unwrap(),
            Command::OpenLink {
                url: "https://example.com".into()
            }
        );
    }

    #[test]
    fn test_selection_change_payload_is_optional() {
        assert_eq!(
            parse_command(r#"{"type":"selection-change"}"#).unwrap(),
            Command::SelectionChange { selection: None }
        );
        assert_eq!(
            parse_command(r#"{"type":"selection-change","selection":["t1"]}"#).unwrap(),
            Command::SelectionChange {
                selection: Some(vec!["t1".into()])
            }
        );
    }

    #[test]
    fn test_unknown_type_is_rejected() {
        assert!(parse_command(r#"{"type":"reticulate"}"#).is_err());
        assert!(parse_command("not json").is_err());
    }

    #[test]
    fn test_init_field_names() {
        let notification = Notification::Init {
            selection_fonts: vec![FontFamilyGroup {
                family: "Arial".into(),
                styles: vec!["Regular".into()],
            }],
            all_fonts: Vec::new(),
            has_selection: true,
        };
        let value = serde_json::to_value(&notification).unwrap();
        assert_eq!(value["type"], "init");
        assert_eq!(value["selectionFonts"][0]["family"], "Arial");
        assert_eq!(value["selectionFonts"][0]["styles"][0], "Regular");
        assert!(value["allFonts"].as_array().unwrap().is_empty());
        assert_eq!(value["hasSelection"], true);
    }

    #[test]
    fn test_selection_update_field_names() {
        let value = serde_json::to_value(Notification::SelectionUpdate {
            selection_fonts: Vec::new(),
            has_selection: false,
        })
        .unwrap();
        assert_eq!(value["type"], "selection-update");
        assert_eq!(value["hasSelection"], false);
    }

    #[test]
    fn test_progress_and_terminal_messages() {
        let value = serde_json::to_value(Notification::Progress {
            message: "Replacing 1/1: Arial Regular...".into(),
            count: 3,
        })
        .unwrap();
        assert_eq!(value["type"], "progress");
        assert_eq!(value["count"], 3);

        let value = serde_json::to_value(Notification::Success {
            message: "Replaced 3 instance(s)".into(),
        })
        .unwrap();
        assert_eq!(value["type"], "success");

        let value = serde_json::to_value(Notification::Error {
            message: "Could not load font: Arial Bold".into(),
        })
        .unwrap();
        assert_eq!(value["type"], "error");
    }

    #[test]
    fn test_send_notification_is_one_line() {
        let mut out = Vec::new();
        send_notification(
            &mut out,
            &Notification::Success {
                message: "Replaced 1 instance(s)".into(),
            },
        )
        .unwrap();
        let text = String::from_utf8(out).unwrap();
        assert!(text.ends_with('\n'));
        assert_eq!(text.lines().count(), 1);
    }
}

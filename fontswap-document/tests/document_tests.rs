//! Integration tests for document JSON persistence.

use fontswap_document::{Document, FrameNode, Node, RangeFont, TextNode, TextRun};
use fontswap_fonts::FontName;

fn inter(style: &str) -> FontName {
    FontName::new("Inter", style)
}

fn sample_json() -> &'static str {
    r#"{
        "name": "Sample",
        "pages": [
            {
                "name": "Page 1",
                "children": [
                    {
                        "type": "text",
                        "id": "t1",
                        "name": "Title",
                        "runs": [
                            { "text": "Hi ", "font": { "family": "Inter", "style": "Regular" } },
                            { "text": "there", "font": { "family": "Inter", "style": "Bold" } }
                        ]
                    },
                    {
                        "type": "frame",
                        "id": "f1",
                        "children": [
                            { "type": "shape", "id": "s1", "name": "Rect" }
                        ]
                    }
                ]
            }
        ]
    }"#
}

#[test]
fn test_load_expands_runs_to_characters() {
    let doc: Document = serde_json::from_str(sample_json()).unwrap();
    let text = doc.node_at(&[0]).and_then(Node::as_text).unwrap();
    assert_eq!(text.characters(), "Hi there");
    assert_eq!(text.len(), 8);
    assert_eq!(
        text.range_font(0, 1),
        Some(RangeFont::Uniform(inter("Regular")))
    );
    assert_eq!(text.range_font(0, 8), Some(RangeFont::Mixed));
}

#[test]
fn test_save_and_reload_round_trips() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.json");

    let doc: Document = serde_json::from_str(sample_json()).unwrap();
    doc.save(&path).unwrap();
    let reloaded = Document::load(&path).unwrap();
    assert_eq!(doc, reloaded);
}

#[test]
fn test_saved_runs_are_recompacted() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("doc.json");

    let mut doc: Document = serde_json::from_str(sample_json()).unwrap();
    doc.node_at_mut(&[0])
        .and_then(Node::as_text_mut)
        .unwrap()
        .set_range_font(0, 3, &inter("Bold"));
    doc.save(&path).unwrap();

    let json = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();
    let runs = &value["pages"][0]["children"][0]["runs"];
    // The whole node is now Bold: one maximal run survives compaction.
    assert_eq!(runs.as_array().unwrap().len(), 1);
    assert_eq!(runs[0]["text"], "Hi there");
    assert_eq!(runs[0]["font"]["style"], "Bold");
}

#[test]
fn test_load_missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Document::load(&dir.path().join("absent.json")).unwrap_err();
    assert!(err.to_string().contains("I/O error"));
}

#[test]
fn test_empty_document_constructs() {
    let doc = Document::new("Untitled");
    assert!(doc.current_page().unwrap().children.is_empty());
    assert!(doc.active_paths().is_empty());
    assert!(!doc.has_selection());
}

#[test]
fn test_frames_nest() {
    let inner = Node::Text(TextNode::new(
        "t9",
        "",
        vec![TextRun::new("deep", inter("Regular"))],
    ));
    let tree = Node::Frame(FrameNode {
        id: "outer".into(),
        name: String::new(),
        children: vec![Node::Frame(FrameNode {
            id: "inner".into(),
            name: String::new(),
            children: vec![inner],
        })],
    });
    let mut doc = Document::new("Nested");
    doc.pages[0].children.push(tree);
    assert_eq!(doc.find_path("t9"), Some(vec![0, 0, 0]));
}

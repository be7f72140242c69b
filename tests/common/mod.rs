//! Shared helpers for fontswap integration tests.
#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Mutex;

use fontswap_document::{Document, Node, TextNode, TextRun};
use fontswap_fonts::{FontError, FontName, FontSource};

/// A scripted font source: a fixed catalog, optional per-font load
/// failures, and an optional limit after which every load fails.
pub struct ScriptedFonts {
    available: Vec<FontName>,
    failing: HashSet<FontName>,
    fail_after: Option<usize>,
    loads: Mutex<Vec<FontName>>,
}

impl ScriptedFonts {
    pub fn new(available: Vec<FontName>) -> Self {
        Self {
            available,
            failing: HashSet::new(),
            fail_after: None,
            loads: Mutex::new(Vec::new()),
        }
    }

    /// Every load of `font` fails.
    pub fn failing(mut self, font: FontName) -> Self {
        self.failing.insert(font);
        self
    }

    /// Loads start failing once `count` have succeeded.
    pub fn fail_after(mut self, count: usize) -> Self {
        self.fail_after = Some(count);
        self
    }

    pub fn load_count(&self) -> usize {
        self.loads.lock().unwrap().len()
    }
}

impl FontSource for ScriptedFonts {
    async fn available_fonts(&self) -> Result<Vec<FontName>, FontError> {
        Ok(self.available.clone())
    }

    async fn load_font(&self, font: &FontName) -> Result<(), FontError> {
        if self.failing.contains(font) {
            return Err(FontError::LoadFailed(font.clone()));
        }
        let mut loads = self.loads.lock().unwrap();
        if self.fail_after.is_some_and(|limit| loads.len() >= limit) {
            return Err(FontError::LoadFailed(font.clone()));
        }
        loads.push(font.clone());
        Ok(())
    }
}

pub fn font(family: &str, style: &str) -> FontName {
    FontName::new(family, style)
}

pub fn text_node(id: &str, text: &str, font: FontName) -> Node {
    Node::Text(TextNode::new(id, "", vec![TextRun::new(text, font)]))
}

/// A one-page document with the given top-level nodes.
pub fn document(children: Vec<Node>) -> Document {
    let mut doc = Document::new("Test");
    doc.pages[0].children = children;
    doc
}

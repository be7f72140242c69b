//! Document nodes: text, frames, and shapes.

use fontswap_fonts::FontName;
use serde::{Deserialize, Serialize};

/// Font assignment reported for a character range.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RangeFont {
    /// Every character in the range shares this font.
    Uniform(FontName),
    /// The range spans more than one distinct font.
    ///
    /// Only multi-character queries can produce this; single-character
    /// queries are always definite or absent.
    Mixed,
}

/// A maximal run of characters sharing one font, as stored on disk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextRun {
    pub text: String,
    pub font: FontName,
}

impl TextRun {
    pub fn new(text: impl Into<String>, font: FontName) -> Self {
        Self {
            text: text.into(),
            font,
        }
    }
}

/// A node in the document tree.
///
/// Dispatch is explicit pattern matching over the tag; there is no node
/// class hierarchy.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Node {
    Text(TextNode),
    Frame(FrameNode),
    Shape(ShapeNode),
}

impl Node {
    pub fn id(&self) -> &str {
        match self {
            Node::Text(node) => &node.id,
            Node::Frame(node) => &node.id,
            Node::Shape(node) => &node.id,
        }
    }

    /// Child nodes; empty for anything that is not a frame.
    pub fn children(&self) -> &[Node] {
        match self {
            Node::Frame(node) => &node.children,
            Node::Text(_) | Node::Shape(_) => &[],
        }
    }

    pub fn as_text(&self) -> Option<&TextNode> {
        match self {
            Node::Text(node) => Some(node),
            _ => None,
        }
    }

    pub fn as_text_mut(&mut self) -> Option<&mut TextNode> {
        match self {
            Node::Text(node) => Some(node),
            _ => None,
        }
    }
}

/// A container node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FrameNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A leaf node with no text content (rectangles, vectors, images, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShapeNode {
    pub id: String,
    #[serde(default)]
    pub name: String,
}

/// A text node: a character sequence with one font per character.
///
/// The character/font alignment is an internal invariant; all access goes
/// through the range API below. On disk the node is a list of runs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "TextNodeRepr", into = "TextNodeRepr")]
pub struct TextNode {
    pub(crate) id: String,
    pub(crate) name: String,
    characters: String,
    fonts: Vec<FontName>,
}

impl TextNode {
    pub fn new(id: impl Into<String>, name: impl Into<String>, runs: Vec<TextRun>) -> Self {
        let mut characters = String::new();
        let mut fonts = Vec::new();
        for run in runs {
            let count = run.text.chars().count();
            characters.push_str(&run.text);
            fonts.extend(std::iter::repeat_n(run.font, count));
        }
        TextNode {
            id: id.into(),
            name: name.into(),
            characters,
            fonts,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn characters(&self) -> &str {
        &self.characters
    }

    /// Number of characters (not bytes).
    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Font assigned to the half-open character range `start..end`.
    ///
    /// Empty and out-of-bounds ranges are absent. A range covering more
    /// than one distinct font collapses to [`RangeFont::Mixed`].
    pub fn range_font(&self, start: usize, end: usize) -> Option<RangeFont> {
        if start >= end || end > self.fonts.len() {
            return None;
        }
        let first = &self.fonts[start];
        if self.fonts[start + 1..end].iter().all(|font| font == first) {
            Some(RangeFont::Uniform(first.clone()))
        } else {
            Some(RangeFont::Mixed)
        }
    }

    /// Assign `font` to every character in `start..end` (clamped to the
    /// node's length).
    pub fn set_range_font(&mut self, start: usize, end: usize, font: &FontName) {
        let end = end.min(self.fonts.len());
        for slot in &mut self.fonts[start.min(end)..end] {
            *slot = font.clone();
        }
    }

    /// Maximal runs in character order. Adjacent characters with the same
    /// font always land in the same run.
    pub fn runs(&self) -> Vec<TextRun> {
        let mut runs: Vec<TextRun> = Vec::new();
        for (ch, font) in self.characters.chars().zip(&self.fonts) {
            match runs.last_mut() {
                Some(run) if run.font == *font => run.text.push(ch),
                _ => runs.push(TextRun::new(ch.to_string(), font.clone())),
            }
        }
        runs
    }
}

/// On-disk shape of a text node.
#[derive(Serialize, Deserialize)]
struct TextNodeRepr {
    id: String,
    #[serde(default)]
    name: String,
    #[serde(default)]
    runs: Vec<TextRun>,
}

impl From<TextNodeRepr> for TextNode {
    fn from(repr: TextNodeRepr) -> Self {
        TextNode::new(repr.id, repr.name, repr.runs)
    }
}

impl From<TextNode> for TextNodeRepr {
    fn from(node: TextNode) -> Self {
        let runs = node.runs();
        TextNodeRepr {
            id: node.id,
            name: node.name,
            runs,
        }
    }
}

//! Layered document tree model with per-character font assignments.
//!
//! A [`Document`] holds pages of heterogeneous nodes: text nodes with one
//! font per character, frames with children, and plain shapes. The
//! interesting surface is the range-level font API on [`TextNode`]: a
//! half-open character range reports either a definite [`FontName`] or
//! the [`RangeFont::Mixed`] sentinel, and assignment rewrites a range in
//! place.
//!
//! Documents persist as JSON; text is stored run-compacted on disk and
//! expanded to per-character assignments in memory.

mod document;
mod error;
mod node;

pub use document::{Document, NodePath, Page};
pub use error::DocumentError;
pub use node::{FrameNode, Node, RangeFont, ShapeNode, TextNode, TextRun};

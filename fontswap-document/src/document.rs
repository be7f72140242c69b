//! The document: pages, selection, and node addressing.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;
use crate::node::Node;

/// Index path of a node relative to the current page: the first element
/// indexes the page's top-level children, the rest descend through frame
/// children.
pub type NodePath = Vec<usize>;

/// One page of top-level nodes.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub children: Vec<Node>,
}

/// A design document: named pages of node trees.
///
/// The current page index and the selection are runtime state, not part of
/// the persisted file. Selection ids always refer to nodes on the current
/// page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Document {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub pages: Vec<Page>,
    #[serde(skip)]
    current_page: usize,
    #[serde(skip)]
    selection: Vec<String>,
}

impl Document {
    /// A new document with a single empty page.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pages: vec![Page::default()],
            current_page: 0,
            selection: Vec::new(),
        }
    }

    /// Read a document from a JSON file.
    pub fn load(path: &Path) -> Result<Self, DocumentError> {
        let text = fs::read_to_string(path)?;
        let document: Document = serde_json::from_str(&text)?;
        log::info!(
            "Loaded document '{}' ({} page(s)) from {}",
            document.name,
            document.pages.len(),
            path.display()
        );
        Ok(document)
    }

    /// Write the document to a JSON file, run-compacted.
    pub fn save(&self, path: &Path) -> Result<(), DocumentError> {
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn current_page(&self) -> Option<&Page> {
        self.pages.get(self.current_page)
    }

    /// Switch the current page. Clears the selection; ids on another page
    /// would be meaningless.
    pub fn set_current_page(&mut self, index: usize) -> Result<(), DocumentError> {
        if index >= self.pages.len() {
            return Err(DocumentError::UnknownPage(index));
        }
        self.current_page = index;
        self.selection.clear();
        Ok(())
    }

    pub fn has_selection(&self) -> bool {
        !self.selection.is_empty()
    }

    pub fn selection(&self) -> &[String] {
        &self.selection
    }

    /// Replace the selection. Ids not found on the current page are
    /// dropped with a warning. Returns how many ids were kept.
    pub fn set_selection(&mut self, ids: Vec<String>) -> usize {
        let mut kept = Vec::with_capacity(ids.len());
        for id in ids {
            if self.find_path(&id).is_some() {
                kept.push(id);
            } else {
                log::warn!("Ignoring unknown node id in selection: {id}");
            }
        }
        let count = kept.len();
        self.selection = kept;
        count
    }

    pub fn clear_selection(&mut self) {
        self.selection.clear();
    }

    /// Paths of the active node set: the selected nodes (in selection
    /// order) when a selection exists, otherwise every top-level node of
    /// the current page.
    pub fn active_paths(&self) -> Vec<NodePath> {
        if self.has_selection() {
            self.selection
                .iter()
                .filter_map(|id| self.find_path(id))
                .collect()
        } else {
            match self.current_page() {
                Some(page) => (0..page.children.len()).map(|index| vec![index]).collect(),
                None => Vec::new(),
            }
        }
    }

    pub fn node_at(&self, path: &[usize]) -> Option<&Node> {
        let page = self.current_page()?;
        let (&first, rest) = path.split_first()?;
        let mut node = page.children.get(first)?;
        for &index in rest {
            node = node.children().get(index)?;
        }
        Some(node)
    }

    pub fn node_at_mut(&mut self, path: &[usize]) -> Option<&mut Node> {
        let page = self.pages.get_mut(self.current_page)?;
        let (&first, rest) = path.split_first()?;
        let mut node = page.children.get_mut(first)?;
        for &index in rest {
            node = match node {
                Node::Frame(frame) => frame.children.get_mut(index)?,
                Node::Text(_) | Node::Shape(_) => return None,
            };
        }
        Some(node)
    }

    /// Path of the node with `id` on the current page, depth-first.
    pub fn find_path(&self, id: &str) -> Option<NodePath> {
        let page = self.current_page()?;
        for (index, node) in page.children.iter().enumerate() {
            if let Some(path) = find_in(node, id, vec![index]) {
                return Some(path);
            }
        }
        None
    }
}

fn find_in(node: &Node, id: &str, path: NodePath) -> Option<NodePath> {
    if node.id() == id {
        return Some(path);
    }
    for (index, child) in node.children().iter().enumerate() {
        let mut child_path = path.clone();
        child_path.push(index);
        if let Some(found) = find_in(child, id, child_path) {
            return Some(found);
        }
    }
    None
}

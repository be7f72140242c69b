//! Font inventory over a node set.

use fontswap_document::{Document, Node, NodePath, RangeFont};
use fontswap_fonts::{FontFamilyGroup, FontName, group_by_family};

/// Every distinct (family, style) used by text reachable from `roots`,
/// grouped by family with families and styles sorted.
///
/// Read-only; scanning the same unmutated document twice yields identical
/// output. An empty node set yields an empty vec.
pub fn collect_fonts(doc: &Document, roots: &[NodePath]) -> Vec<FontFamilyGroup> {
    let mut used = Vec::new();
    for path in roots {
        if let Some(node) = doc.node_at(path) {
            visit(node, &mut used);
        }
    }
    group_by_family(used)
}

fn visit(node: &Node, used: &mut Vec<FontName>) {
    if let Node::Text(text) = node {
        // Single-character probes are the only reliable run-boundary
        // oracle; wider queries collapse to the mixed sentinel.
        for index in 0..text.len() {
            if let Some(RangeFont::Uniform(font)) = text.range_font(index, index + 1) {
                used.push(font);
            }
        }
    }
    for child in node.children() {
        visit(child, used);
    }
}

//! Run detection and sequential font replacement.

use std::ops::Range;

use fontswap_document::{Document, Node, NodePath, RangeFont, TextNode};
use fontswap_fonts::{FontError, FontName, FontSource};

/// Maximal contiguous character ranges of `text` assigned exactly to
/// `source`, in order of start index.
///
/// Linear scan with an open-run marker: a run opens at the first matching
/// character and closes at the first non-matching index or at the
/// one-past-the-end sentinel position. Returned ranges never overlap and
/// adjacent matching characters always share a range.
pub fn matching_ranges(text: &TextNode, source: &FontName) -> Vec<Range<usize>> {
    let mut ranges = Vec::new();
    let mut start: Option<usize> = None;
    for index in 0..=text.len() {
        let matches = matches!(
            text.range_font(index, index + 1),
            Some(RangeFont::Uniform(ref font)) if font == source
        );
        match (matches, start) {
            (true, None) => start = Some(index),
            (false, Some(open)) => {
                ranges.push(open..index);
                start = None;
            }
            _ => {}
        }
    }
    ranges
}

/// Replace every maximal run of `from` with `to` across all text nodes
/// reachable from `roots`, depth-first, a node's own text before its
/// children.
///
/// Each range is applied individually: the target is (re-)loaded, the
/// range is rewritten, and `on_progress` observes the running count.
/// Ranges are strictly sequential; a load failure aborts the remainder
/// and leaves already-replaced ranges in place.
pub async fn replace_fonts<F, P>(
    doc: &mut Document,
    roots: &[NodePath],
    from: &FontName,
    to: &FontName,
    fonts: &F,
    mut on_progress: P,
) -> Result<usize, FontError>
where
    F: FontSource,
    P: FnMut(usize),
{
    let mut replaced = 0;
    for path in text_node_paths(doc, roots) {
        let ranges = match doc.node_at(&path).and_then(Node::as_text) {
            Some(text) => matching_ranges(text, from),
            None => continue,
        };
        for range in ranges {
            // The load is idempotent; keeping it inside the loop preserves
            // the load-before-assign ordering for every individual range.
            fonts.load_font(to).await?;
            if let Some(text) = doc.node_at_mut(&path).and_then(Node::as_text_mut) {
                text.set_range_font(range.start, range.end, to);
            }
            replaced += 1;
            on_progress(replaced);
        }
    }
    Ok(replaced)
}

/// Depth-first paths of every text node reachable from `roots`.
fn text_node_paths(doc: &Document, roots: &[NodePath]) -> Vec<NodePath> {
    let mut paths = Vec::new();
    for root in roots {
        if let Some(node) = doc.node_at(root) {
            collect(node, root, &mut paths);
        }
    }
    paths
}

fn collect(node: &Node, path: &[usize], out: &mut Vec<NodePath>) {
    if matches!(node, Node::Text(_)) {
        out.push(path.to_vec());
    }
    for (index, child) in node.children().iter().enumerate() {
        let mut child_path = path.to_vec();
        child_path.push(index);
        collect(child, &child_path, out);
    }
}

// results/view_index.rs
//! Flat lookup over the scanned view hierarchy

use crate::types::ViewElementData;
use std::collections::HashMap;

/// Element id → element, for the root and every descendant
pub type ViewElementIndex<'a> = HashMap<&'a str, &'a ViewElementData>;

/// Walk the tree with an explicit stack, visiting nodes in document order
///
/// When two elements share an id, the one visited later wins.
pub fn build_view_element_index(root: Option<&ViewElementData>) -> ViewElementIndex<'_> {
    let mut index = HashMap::new();
    let mut stack: Vec<&ViewElementData> = root.into_iter().collect();

    while let Some(element) = stack.pop() {
        index.insert(element.axe_view_id.as_str(), element);
        stack.extend(element.children.iter().rev());
    }

    index
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_covers_every_node() {
        let tree = ViewElementData::new("a").with_children(vec![
            ViewElementData::new("b").with_children(vec![ViewElementData::new("c")]),
            ViewElementData::new("d"),
        ]);

        let index = build_view_element_index(Some(&tree));
        assert_eq!(index.len(), 4);
        for id in ["a", "b", "c", "d"] {
            assert_eq!(index[id].axe_view_id, id);
        }
    }

    #[test]
    fn test_absent_tree_is_empty() {
        assert!(build_view_element_index(None).is_empty());
    }

    #[test]
    fn test_later_duplicate_overwrites() {
        let tree = ViewElementData::new("root").with_children(vec![
            ViewElementData::new("dup").with_text("first"),
            ViewElementData::new("dup").with_text("second"),
        ]);

        let index = build_view_element_index(Some(&tree));
        assert_eq!(index.len(), 2);
        assert_eq!(index["dup"].text.as_deref(), Some("second"));
    }

    #[test]
    fn test_deep_tree_does_not_overflow() {
        let mut node = ViewElementData::new("leaf");
        for depth in 0..100_000 {
            node = ViewElementData::new(&format!("n{}", depth)).with_children(vec![node]);
        }

        let index = build_view_element_index(Some(&node));
        assert_eq!(index.len(), 100_001);

        // Dropping a 100k-deep owned tree recursively would overflow the test stack
        let mut children = std::mem::take(&mut node.children);
        while let Some(mut child) = children.pop() {
            children.append(&mut child.children);
        }
    }
}

//! Ordered, duplicate-free set of collected clues.
//!
//! Backed by an unbalanced binary search tree keyed on the clue text. The
//! number of distinct clues in a case is small, so depth stays shallow.

use std::cmp::Ordering;

#[derive(Debug)]
struct Node {
    clue: String,
    left: Option<Box<Node>>,
    right: Option<Box<Node>>,
}

impl Node {
    fn leaf(clue: &str) -> Box<Self> {
        Box::new(Node {
            clue: clue.to_string(),
            left: None,
            right: None,
        })
    }
}

#[derive(Debug, Default)]
pub struct ClueSet {
    root: Option<Box<Node>>,
    len: usize,
}

impl ClueSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a clue. Returns `true` when the clue was not already present.
    /// Empty clues are ignored.
    pub fn insert(&mut self, clue: &str) -> bool {
        if clue.is_empty() {
            return false;
        }
        let mut slot = &mut self.root;
        while let Some(node) = slot {
            slot = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => &mut node.left,
                Ordering::Greater => &mut node.right,
                Ordering::Equal => return false,
            };
        }
        *slot = Some(Node::leaf(clue));
        self.len += 1;
        true
    }

    pub fn contains(&self, clue: &str) -> bool {
        let mut cur = self.root.as_deref();
        while let Some(node) = cur {
            cur = match clue.cmp(node.clue.as_str()) {
                Ordering::Less => node.left.as_deref(),
                Ordering::Greater => node.right.as_deref(),
                Ordering::Equal => return true,
            };
        }
        false
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// In-order (alphabetical) traversal. Can be called any number of times.
    pub fn iter(&self) -> Iter<'_> {
        let mut it = Iter { stack: Vec::new() };
        it.push_left(self.root.as_deref());
        it
    }
}

impl<'a> IntoIterator for &'a ClueSet {
    type Item = &'a str;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// In-order iterator over a [`ClueSet`], driven by an explicit stack.
pub struct Iter<'a> {
    stack: Vec<&'a Node>,
}

impl<'a> Iter<'a> {
    fn push_left(&mut self, mut cur: Option<&'a Node>) {
        while let Some(node) = cur {
            self.stack.push(node);
            cur = node.left.as_deref();
        }
    }
}

impl<'a> Iterator for Iter<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.stack.pop()?;
        self.push_left(node.right.as_deref());
        Some(node.clue.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn collect(set: &ClueSet) -> Vec<&str> {
        set.iter().collect()
    }

    #[test]
    fn empty_set_enumerates_nothing() {
        let set = ClueSet::new();
        assert!(set.is_empty());
        assert_eq!(set.iter().count(), 0);
    }

    #[test]
    fn insert_orders_and_dedups() {
        let mut set = ClueSet::new();
        for clue in ["Pegada suja", "Livro rasgado", "Luva encharcada", "Pegada suja"] {
            set.insert(clue);
        }
        assert_eq!(
            collect(&set),
            vec!["Livro rasgado", "Luva encharcada", "Pegada suja"]
        );
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn insert_reports_novelty() {
        let mut set = ClueSet::new();
        assert!(set.insert("b"));
        assert!(!set.insert("b"));
        assert!(!set.insert(""));
        assert!(set.contains("b"));
        assert!(!set.contains("a"));
    }

    #[test]
    fn traversal_is_restartable() {
        let mut set = ClueSet::new();
        set.insert("m");
        set.insert("a");
        set.insert("z");
        let first = collect(&set);
        let second: Vec<&str> = (&set).into_iter().collect();
        assert_eq!(first, second);
        assert_eq!(first, vec!["a", "m", "z"]);
    }

    #[test]
    fn any_insertion_order_is_sorted_and_unique() {
        let words = ["delta", "alpha", "echo", "charlie", "bravo", "alpha", "echo", "golf", "foxtrot"];
        // Rotate the input to vary tree shape.
        for shift in 0..words.len() {
            let mut set = ClueSet::new();
            for i in 0..words.len() {
                set.insert(words[(i + shift) % words.len()]);
            }
            let out = collect(&set);
            assert!(out.windows(2).all(|w| w[0] < w[1]), "not strictly sorted: {:?}", out);
            for w in words {
                assert!(out.contains(&w));
            }
            assert_eq!(out.len(), 7);
        }
    }

    #[test]
    fn byte_order_is_used_for_accents() {
        let mut set = ClueSet::new();
        set.insert("Óculos");
        set.insert("Zebra");
        set.insert("abc");
        // Uppercase ASCII < lowercase ASCII < multi-byte UTF-8.
        assert_eq!(collect(&set), vec!["Zebra", "abc", "Óculos"]);
    }
}

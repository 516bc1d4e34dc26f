//! Singleton-or-list normalization
//!
//! XML trees store a child that occurs once as a bare value and a repeated
//! child as a list. Every extractor goes through [`to_list`] so the
//! difference never leaks past the tree.

/// A value that may itself be a sequence of values of the same type.
pub trait Sequence: Sized {
    /// The items when this value is a sequence, `None` when it is a single value.
    fn as_items(&self) -> Option<&[Self]>;
}

/// Normalize an optional value into an ordered list.
///
/// - absent → empty list
/// - sequence → its items, in order
/// - single value → one-element list
#[must_use]
pub fn to_list<T: Sequence>(value: Option<&T>) -> Vec<&T> {
    match value {
        None => Vec::new(),
        Some(value) => match value.as_items() {
            Some(items) => items.iter().collect(),
            None => vec![value],
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, PartialEq)]
    enum Node {
        Leaf(u32),
        Many(Vec<Node>),
    }

    impl Sequence for Node {
        fn as_items(&self) -> Option<&[Self]> {
            match self {
                Node::Many(items) => Some(items),
                Node::Leaf(_) => None,
            }
        }
    }

    #[test]
    fn test_absent_is_empty() {
        assert!(to_list::<Node>(None).is_empty());
    }

    #[test]
    fn test_single_value_is_wrapped() {
        let leaf = Node::Leaf(7);
        assert_eq!(to_list(Some(&leaf)), vec![&Node::Leaf(7)]);
    }

    #[test]
    fn test_sequence_keeps_order() {
        let many = Node::Many(vec![Node::Leaf(2), Node::Leaf(4), Node::Leaf(0)]);
        assert_eq!(
            to_list(Some(&many)),
            vec![&Node::Leaf(2), &Node::Leaf(4), &Node::Leaf(0)]
        );
    }
}

//! Cursors over a parse tree.
//!
//! A [`Cursor`] is the stateful counterpart of a [`ParseNode`]. It always
//! holds one current value of its subtree and moves to the next one with
//! [`Cursor::advance`], like one wheel of an odometer:
//!
//! - a literal has a single value, so advancing it always carries;
//! - a concatenation is a mixed-radix counter whose last term is the least
//!   significant digit;
//! - a choice steps through its alternatives in source order, letting the
//!   selected alternative run through all of its own values first.
//!
//! Advancing a cursor through every value brings it back to exactly the state
//! it was built in.
//!
//! Building, advancing, and reading a cursor recurse once per level of brace
//! nesting, so their stack use grows with the depth of the tree.

use brex_core::tree::{NodeKind, ParseNode};

/// Outcome of [`Cursor::advance`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Carry {
    /// The cursor wrapped around to its initial state; the increment must be
    /// passed on to the next more significant cursor.
    Carried,

    /// The cursor moved to a value it has not produced in this cycle.
    NotCarried,
}

/// A stateful enumerator over the values of one parse tree node.
///
/// Literal cursors borrow their text from the tree they were built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cursor<'a> {
    Literal(LiteralCursor<'a>),
    Concatenation(ConcatenationCursor<'a>),
    Choice(ChoiceCursor<'a>),
}

impl<'a> Cursor<'a> {
    /// Move to the next value, reporting whether the cursor wrapped around.
    pub fn advance(&mut self) -> Carry {
        match self {
            Cursor::Literal(cursor) => cursor.advance(),
            Cursor::Concatenation(cursor) => cursor.advance(),
            Cursor::Choice(cursor) => cursor.advance(),
        }
    }

    /// Append the current value to `out`.
    pub fn write_current(&self, out: &mut String) {
        match self {
            Cursor::Literal(cursor) => cursor.write_current(out),
            Cursor::Concatenation(cursor) => cursor.write_current(out),
            Cursor::Choice(cursor) => cursor.write_current(out),
        }
    }

    /// Get the current value as a new string.
    pub fn current_value(&self) -> String {
        let mut value = String::new();
        self.write_current(&mut value);
        value
    }
}

/// Cursor over a fixed piece of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LiteralCursor<'a> {
    value: &'a str,
}

impl<'a> LiteralCursor<'a> {
    /// Create a literal cursor over `value`.
    pub fn new(value: &'a str) -> Self {
        Self { value }
    }

    /// Returns the text, borrowed from the parse tree.
    pub fn value(&self) -> &'a str {
        self.value
    }

    /// A literal has exactly one value, so it always wraps around.
    pub fn advance(&mut self) -> Carry {
        Carry::Carried
    }

    /// Append the text to `out`.
    pub fn write_current(&self, out: &mut String) {
        out.push_str(self.value);
    }
}

/// Cursor over adjacent terms; the last term cycles fastest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConcatenationCursor<'a> {
    children: Vec<Cursor<'a>>,
}

impl<'a> ConcatenationCursor<'a> {
    /// Create a concatenation cursor over its term cursors, in source order.
    pub fn new(children: Vec<Cursor<'a>>) -> Self {
        Self { children }
    }

    /// Returns the child cursors in source order.
    pub fn children(&self) -> &[Cursor<'a>] {
        &self.children
    }

    /// Advance the last term, carrying leftward while terms wrap around.
    ///
    /// Carries only when every term wrapped, which leaves all of them in their
    /// initial state. A concatenation with no terms always carries.
    pub fn advance(&mut self) -> Carry {
        for child in self.children.iter_mut().rev() {
            if child.advance() == Carry::NotCarried {
                return Carry::NotCarried;
            }
        }
        Carry::Carried
    }

    /// Append the current value of every term to `out`, in order.
    pub fn write_current(&self, out: &mut String) {
        for child in &self.children {
            child.write_current(out);
        }
    }
}

/// Cursor over alternatives, visited in source order.
///
/// `selected` is `None` only when there are no alternatives.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChoiceCursor<'a> {
    children: Vec<Cursor<'a>>,
    selected: Option<usize>,
}

impl<'a> ChoiceCursor<'a> {
    /// Create a choice cursor selecting its first alternative.
    pub fn new(children: Vec<Cursor<'a>>) -> Self {
        let selected = if children.is_empty() { None } else { Some(0) };
        Self { children, selected }
    }

    /// Returns the child cursors in source order.
    pub fn children(&self) -> &[Cursor<'a>] {
        &self.children
    }

    /// Index of the selected alternative, or `None` with no alternatives.
    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    /// Advance the selected alternative; once it wraps, select the next one.
    ///
    /// Carries when the last alternative wraps, selecting the first again.
    /// A choice with no alternatives always carries and never changes.
    pub fn advance(&mut self) -> Carry {
        let Some(selected) = self.selected else {
            return Carry::Carried;
        };

        if self.children[selected].advance() == Carry::NotCarried {
            return Carry::NotCarried;
        }

        let next = selected + 1;
        if next == self.children.len() {
            self.selected = Some(0);
            Carry::Carried
        } else {
            self.selected = Some(next);
            Carry::NotCarried
        }
    }

    /// Append the current value of the selected alternative to `out`.
    pub fn write_current(&self, out: &mut String) {
        if let Some(selected) = self.selected {
            self.children[selected].write_current(out);
        }
    }
}

/// Build the cursor tree for `node`.
///
/// The returned cursor borrows literal text from `node` and starts at the
/// first value of the expansion.
pub fn build_cursor(node: &ParseNode) -> Cursor<'_> {
    match node.kind() {
        NodeKind::Literal => Cursor::Literal(LiteralCursor::new(node.source())),
        NodeKind::Concatenation => {
            Cursor::Concatenation(ConcatenationCursor::new(build_children(node)))
        }
        NodeKind::Choice => Cursor::Choice(ChoiceCursor::new(build_children(node))),
    }
}

fn build_children(node: &ParseNode) -> Vec<Cursor<'_>> {
    node.children().iter().map(build_cursor).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn literal(value: &str) -> Cursor<'_> {
        Cursor::Literal(LiteralCursor::new(value))
    }

    fn choice<'a>(children: Vec<Cursor<'a>>) -> Cursor<'a> {
        Cursor::Choice(ChoiceCursor::new(children))
    }

    fn concatenation<'a>(children: Vec<Cursor<'a>>) -> Cursor<'a> {
        Cursor::Concatenation(ConcatenationCursor::new(children))
    }

    #[test]
    fn test_literal_always_carries() {
        let mut cursor = literal("hello");

        assert_eq!(cursor.current_value(), "hello");
        assert_eq!(cursor.advance(), Carry::Carried);
        assert_eq!(cursor.advance(), Carry::Carried);
        assert_eq!(cursor.current_value(), "hello");
    }

    #[test]
    fn test_choice_steps_through_alternatives() {
        let mut cursor = choice(vec![literal("a"), literal("b"), literal("c")]);

        assert_eq!(cursor.current_value(), "a");
        assert_eq!(cursor.advance(), Carry::NotCarried);
        assert_eq!(cursor.current_value(), "b");
        assert_eq!(cursor.advance(), Carry::NotCarried);
        assert_eq!(cursor.current_value(), "c");
        assert_eq!(cursor.advance(), Carry::Carried);
        assert_eq!(cursor.current_value(), "a");
    }

    #[test]
    fn test_choice_exhausts_selected_alternative_first() {
        // {x,{y,z}w}
        let mut cursor = choice(vec![
            literal("x"),
            concatenation(vec![choice(vec![literal("y"), literal("z")]), literal("w")]),
        ]);

        let mut values = vec![cursor.current_value()];
        while cursor.advance() == Carry::NotCarried {
            values.push(cursor.current_value());
        }

        assert_eq!(values, vec!["x", "yw", "zw"]);
    }

    #[test]
    fn test_concatenation_last_term_cycles_fastest() {
        let mut cursor = concatenation(vec![
            choice(vec![literal("a"), literal("b")]),
            choice(vec![literal("c"), literal("d")]),
        ]);

        let mut values = vec![cursor.current_value()];
        let mut carries = Vec::new();
        loop {
            let carry = cursor.advance();
            carries.push(carry);
            if carry == Carry::Carried {
                break;
            }
            values.push(cursor.current_value());
        }

        assert_eq!(values, vec!["ac", "ad", "bc", "bd"]);
        assert_eq!(
            carries,
            vec![
                Carry::NotCarried,
                Carry::NotCarried,
                Carry::NotCarried,
                Carry::Carried
            ]
        );
    }

    #[test]
    fn test_full_cycle_restores_initial_state() {
        let mut cursor = concatenation(vec![
            literal("x"),
            choice(vec![
                literal("a"),
                concatenation(vec![literal("b"), choice(vec![literal("c"), literal("d")])]),
            ]),
            choice(vec![literal("e"), literal("f")]),
        ]);
        let initial = cursor.clone();

        while cursor.advance() == Carry::NotCarried {}

        assert_eq!(cursor, initial);
    }

    #[test]
    fn test_empty_concatenation_carries() {
        let mut cursor = concatenation(Vec::new());

        assert_eq!(cursor.current_value(), "");
        assert_eq!(cursor.advance(), Carry::Carried);
    }

    #[test]
    fn test_empty_choice_keeps_sentinel() {
        let mut cursor = ChoiceCursor::new(Vec::new());

        assert_eq!(cursor.selected(), None);
        assert_eq!(cursor.advance(), Carry::Carried);
        assert_eq!(cursor.selected(), None);

        let mut out = String::from("prefix");
        cursor.write_current(&mut out);
        assert_eq!(out, "prefix");
    }

    #[test]
    fn test_build_cursor_mirrors_tree() {
        let tree = ParseNode::concatenation(
            0,
            "ab{c,d}",
            vec![
                ParseNode::literal(0, "ab"),
                ParseNode::choice(
                    2,
                    "{c,d}",
                    vec![ParseNode::literal(3, "c"), ParseNode::literal(5, "d")],
                ),
            ],
        );

        let cursor = build_cursor(&tree);

        assert_eq!(
            cursor,
            concatenation(vec![literal("ab"), choice(vec![literal("c"), literal("d")])])
        );
        assert_eq!(cursor.current_value(), "abc");
    }

    #[test]
    fn test_build_cursor_borrows_tree_text() {
        let tree = ParseNode::concatenation(
            0,
            "ab{c,d}",
            vec![
                ParseNode::literal(0, "ab"),
                ParseNode::choice(
                    2,
                    "{c,d}",
                    vec![ParseNode::literal(3, "c"), ParseNode::literal(5, "d")],
                ),
            ],
        );

        let Cursor::Concatenation(root) = build_cursor(&tree) else {
            panic!("Expected concatenation cursor");
        };
        let [Cursor::Literal(head), Cursor::Choice(alternatives)] = root.children() else {
            panic!("Expected a literal followed by a choice");
        };

        assert!(std::ptr::eq(head.value(), tree.children()[0].source()));
        let values: Vec<&str> = alternatives
            .children()
            .iter()
            .map(|child| match child {
                Cursor::Literal(leaf) => leaf.value(),
                other => panic!("Expected literal cursor, got {other:?}"),
            })
            .collect();
        assert_eq!(values, vec!["c", "d"]);
    }

    #[test]
    fn test_build_cursor_selects_first_alternative() {
        let tree = ParseNode::choice(
            0,
            "{x,y}",
            vec![ParseNode::literal(1, "x"), ParseNode::literal(3, "y")],
        );

        match build_cursor(&tree) {
            Cursor::Choice(choice) => assert_eq!(choice.selected(), Some(0)),
            other => panic!("Expected choice cursor, got {other:?}"),
        }
    }
}

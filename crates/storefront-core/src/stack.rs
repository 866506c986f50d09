//! # Stack
//!
//! A generic last-in-first-out container.
//!
//! ```text
//!   push(c)          pop() → c         peek() → b
//!  ┌─────┐           ┌─────┐           ┌─────┐
//!  │  c  │ ◄── top   │     │           │     │
//!  │  b  │           │  b  │ ◄── top   │  b  │ ◄── top (kept)
//!  │  a  │           │  a  │           │  a  │
//!  └─────┘           └─────┘           └─────┘
//! ```
//!
//! Underflow is an error, never a default value: `pop`/`peek` on an empty
//! stack return [`StackError::Empty`]. The stack is owned by a single caller
//! and carries no synchronization.

use crate::error::StackError;

/// Last-in-first-out container backed by a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    /// Creates an empty stack.
    pub const fn new() -> Self {
        Stack { items: Vec::new() }
    }

    /// Creates an empty stack with room for `capacity` items.
    ///
    /// Capacity is a hint only; pushes never fail.
    pub fn with_capacity(capacity: usize) -> Self {
        Stack {
            items: Vec::with_capacity(capacity),
        }
    }

    /// Puts `item` on top of the stack.
    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    /// Removes and returns the top item.
    ///
    /// ## Example
    /// ```rust
    /// use storefront_core::stack::Stack;
    ///
    /// let mut stack = Stack::new();
    /// stack.push(1);
    /// assert_eq!(stack.pop(), Ok(1));
    /// assert!(stack.pop().is_err());
    /// ```
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items
            .pop()
            .ok_or(StackError::Empty { operation: "pop" })
    }

    /// Returns the top item without removing it.
    pub fn peek(&self) -> Result<&T, StackError> {
        self.items
            .last()
            .ok_or(StackError::Empty { operation: "peek" })
    }

    /// Returns true if the stack holds no items.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Number of items on the stack (the stack's size).
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Removes every item.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates from the bottom of the stack to the top.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

/// Pushes items in iteration order; the last item ends up on top.
impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Stack {
            items: iter.into_iter().collect(),
        }
    }
}

impl<T> Extend<T> for Stack<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        self.items.extend(iter);
    }
}

impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_push_adds_to_top() {
        let mut stack = Stack::new();
        stack.push(1);

        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Ok(&1));
    }

    #[test]
    fn test_pop_returns_and_removes_top() {
        let mut stack: Stack<_> = [1, 2].into_iter().collect();

        assert_eq!(stack.pop(), Ok(2));
        assert_eq!(stack.len(), 1);
        assert_eq!(stack.peek(), Ok(&1));
    }

    #[test]
    fn test_pop_empty_is_error() {
        let mut stack: Stack<i32> = Stack::new();
        assert_eq!(stack.pop(), Err(StackError::Empty { operation: "pop" }));
    }

    #[test]
    fn test_peek_keeps_top() {
        let mut stack = Stack::new();
        stack.push("a");
        stack.push("b");

        assert_eq!(stack.peek(), Ok(&"b"));
        assert_eq!(stack.len(), 2);
    }

    #[test]
    fn test_peek_empty_is_error() {
        let stack: Stack<i32> = Stack::default();
        assert_eq!(stack.peek(), Err(StackError::Empty { operation: "peek" }));
    }

    #[test]
    fn test_is_empty() {
        let mut stack = Stack::with_capacity(4);
        assert!(stack.is_empty());

        stack.push(1);
        assert!(!stack.is_empty());
    }

    #[test]
    fn test_clear() {
        let mut stack: Stack<_> = (0..5).collect();
        stack.clear();

        assert_eq!(stack.len(), 0);
        assert!(stack.is_empty());
        assert!(stack.pop().is_err());
    }

    #[test]
    fn test_iter_bottom_to_top() {
        let mut stack = Stack::new();
        stack.extend(["a", "b", "c"]);

        let order: Vec<_> = stack.iter().copied().collect();
        assert_eq!(order, vec!["a", "b", "c"]);
    }

    proptest! {
        /// Property: push then pop returns the value and restores the size
        #[test]
        fn prop_push_pop_round_trip(
            initial in proptest::collection::vec(any::<i32>(), 0..32),
            value in any::<i32>(),
        ) {
            let mut stack: Stack<i32> = initial.into_iter().collect();
            let before = stack.len();

            stack.push(value);
            prop_assert_eq!(stack.pop(), Ok(value));
            prop_assert_eq!(stack.len(), before);
        }

        /// Property: size is pushes minus successful pops
        #[test]
        fn prop_len_tracks_pushes_and_pops(ops in proptest::collection::vec(any::<bool>(), 0..64)) {
            let mut stack = Stack::new();
            let mut expected = 0usize;

            for push in ops {
                if push {
                    stack.push(());
                    expected += 1;
                } else if stack.pop().is_ok() {
                    expected -= 1;
                }
                prop_assert_eq!(stack.len(), expected);
            }
        }

        /// Property: clear after N pushes leaves nothing behind
        #[test]
        fn prop_clear_empties(n in 0usize..64) {
            let mut stack: Stack<usize> = (0..n).collect();
            stack.clear();
            prop_assert_eq!(stack.len(), 0);
        }
    }
}

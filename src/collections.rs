use crate::error::{DomainError, Result};
use std::cmp::Ordering;
use std::fmt;
use std::iter::FromIterator;

// =============================================================================
// Generic helpers
// =============================================================================

pub fn first<T>(items: &[T]) -> Result<&T> {
    items
        .first()
        .ok_or_else(|| DomainError::invalid_operation("List is empty"))
}

pub fn last<T>(items: &[T]) -> Result<&T> {
    items
        .last()
        .ok_or_else(|| DomainError::invalid_operation("List is empty"))
}

/// Returns `b` unless `a` is strictly greater.
pub fn max_of<T: PartialOrd>(a: T, b: T) -> T {
    if a > b {
        a
    } else {
        b
    }
}

/// Returns `b` unless `a` is strictly smaller.
pub fn min_of<T: PartialOrd>(a: T, b: T) -> T {
    if a < b {
        a
    } else {
        b
    }
}

pub fn make_pair<A, B>(first: A, second: B) -> Pair<A, B> {
    Pair::new(first, second)
}

// =============================================================================
// Stack<T>
// =============================================================================

/// LIFO stack backed by a `Vec`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn push(&mut self, item: T) {
        self.items.push(item);
    }

    pub fn pop(&mut self) -> Option<T> {
        self.items.pop()
    }

    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Like `pop`, but an empty stack is an error rather than `None`.
    pub fn try_pop(&mut self) -> Result<T> {
        self.pop()
            .ok_or_else(|| DomainError::invalid_operation("Stack is empty"))
    }

    pub fn try_peek(&self) -> Result<&T> {
        self.peek()
            .ok_or_else(|| DomainError::invalid_operation("Stack is empty"))
    }

    pub fn clear(&mut self) {
        self.items.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

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

// =============================================================================
// Pair<A, B>
// =============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pair<A, B> {
    pub first: A,
    pub second: B,
}

impl<A, B> Pair<A, B> {
    pub fn new(first: A, second: B) -> Self {
        Pair { first, second }
    }

    pub fn swap(self) -> Pair<B, A> {
        Pair::new(self.second, self.first)
    }

    pub fn into_tuple(self) -> (A, B) {
        (self.first, self.second)
    }
}

impl<A, B> From<(A, B)> for Pair<A, B> {
    fn from((first, second): (A, B)) -> Self {
        Pair::new(first, second)
    }
}

impl<A: fmt::Display, B: fmt::Display> fmt::Display for Pair<A, B> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.first, self.second)
    }
}

// =============================================================================
// Boxed<T>: a single comparable value
// =============================================================================

/// Wraps one value and compares by it. `PartialOrd` so floats qualify; two
/// values that do not compare (NaN) are neither greater nor less.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boxed<T: PartialOrd> {
    item: T,
}

impl<T: PartialOrd> Boxed<T> {
    pub fn new(item: T) -> Self {
        Boxed { item }
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    pub fn into_inner(self) -> T {
        self.item
    }

    pub fn is_greater_than(&self, other: &Boxed<T>) -> bool {
        self.item.partial_cmp(&other.item) == Some(Ordering::Greater)
    }

    pub fn is_less_than(&self, other: &Boxed<T>) -> bool {
        self.item.partial_cmp(&other.item) == Some(Ordering::Less)
    }

    /// `other` wins ties.
    pub fn max<'a>(&'a self, other: &'a Boxed<T>) -> &'a Boxed<T> {
        if self.is_greater_than(other) {
            self
        } else {
            other
        }
    }
}

impl<T: PartialOrd + fmt::Display> fmt::Display for Boxed<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Box contains: {}", self.item)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_and_last() {
        let numbers = [1, 2, 3, 4, 5];
        assert_eq!(first(&numbers), Ok(&1));
        assert_eq!(last(&numbers), Ok(&5));

        let names = vec!["Alice", "Bob", "Carol"];
        assert_eq!(last(&names).copied(), Ok("Carol"));

        let empty: [u8; 0] = [];
        assert!(first(&empty).unwrap_err().is_invalid_operation());
        assert!(last(&empty).is_err());
    }

    #[test]
    fn test_max_and_min() {
        assert_eq!(max_of(15, 7), 15);
        assert_eq!(min_of(15, 7), 7);
        assert_eq!(max_of(3.5, 2.25), 3.5);
        assert_eq!(min_of("apple", "zebra"), "apple");
        assert_eq!(max_of("apple", "zebra"), "zebra");
    }

    #[test]
    fn test_stack_is_lifo() {
        let mut numbers: Stack<i32> = [10, 20, 30, 40, 50].into_iter().collect();
        assert_eq!(numbers.peek(), Some(&50));
        assert_eq!(numbers.pop(), Some(50));
        assert_eq!(numbers.pop(), Some(40));
        assert_eq!(numbers.len(), 3);

        let mut words = Stack::new();
        words.extend(["Apple", "Banana", "Cherry"]);
        words.pop();
        words.pop();
        assert_eq!(words.try_peek(), Ok(&"Apple"));
        assert_eq!(words.len(), 1);
    }

    #[test]
    fn test_empty_stack() {
        let mut stack: Stack<String> = Stack::default();
        assert!(stack.is_empty());
        assert_eq!(stack.pop(), None);
        assert_eq!(stack.peek(), None);
        assert_eq!(stack.try_pop().unwrap_err().to_string(), "Stack is empty");

        stack.push("x".into());
        stack.clear();
        assert!(stack.try_peek().is_err());
    }

    #[test]
    fn test_pair() {
        let alice = make_pair("Alice", 25);
        let bob = Pair::new("Bob", 30);
        assert_eq!(alice.to_string(), "(Alice, 25)");
        assert_ne!(alice, bob);
        assert_eq!(alice, Pair::from(("Alice", 25)));

        let swapped = Pair::new(42, 0.5).swap();
        assert_eq!(swapped.into_tuple(), (0.5, 42));
    }

    #[test]
    fn test_boxed_comparisons() {
        let a = Boxed::new(10);
        let b = Boxed::new(20);
        assert!(!a.is_greater_than(&b));
        assert!(a.is_less_than(&b));
        assert_eq!(a.max(&b).item(), &20);

        let x = Boxed::new("apple");
        let y = Boxed::new("zebra");
        assert_eq!(x.max(&y).to_string(), "Box contains: zebra");

        let m = Boxed::new(3.5);
        let n = Boxed::new(2.25);
        assert!(m.is_greater_than(&n));
        assert_eq!(m.max(&n).into_inner(), 3.5);
    }

    #[test]
    fn test_boxed_nan_is_unordered() {
        let nan = Boxed::new(f64::NAN);
        let one = Boxed::new(1.0);
        assert!(!nan.is_greater_than(&one));
        assert!(!nan.is_less_than(&one));
        assert_eq!(nan.max(&one).item(), &1.0);
    }
}

//! Orderings used to compare the values stored in a tree.
//!
//! A tree takes its ordering once, at construction, and keeps it for its whole life.
//! The ordering must be a strict weak ordering: irreflexive, transitive, and with
//! transitive incomparability. Nothing checks this. With a broken ordering the tree
//! stays memory safe, but lookups may miss values and `check_structure` may complain.

/// A "less than" relation over `T`.
pub trait StrictWeakOrder<T: ?Sized> {
    /// Returns `true` if `a` orders strictly before `b`.
    fn less(&self, a: &T, b: &T) -> bool;

    /// Two values are equivalent when neither orders before the other.
    /// A tree never holds two equivalent values.
    fn equivalent(&self, a: &T, b: &T) -> bool {
        !self.less(a, b) && !self.less(b, a)
    }
}

/// The natural order of `T`, given by its [`Ord`] implementation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NaturalOrder;

impl<T: Ord + ?Sized> StrictWeakOrder<T> for NaturalOrder {
    fn less(&self, a: &T, b: &T) -> bool {
        a < b
    }
}

/// Any comparison closure can be used as an ordering.
///```
/// use spica::SplayTree;
///
/// let mut tree = SplayTree::with_order(|a: &i32, b: &i32| a.abs() < b.abs());
/// tree.insert(-3);
/// assert!(!tree.insert(3).1); // equivalent to -3 under this order
/// ```
impl<T: ?Sized, F> StrictWeakOrder<T> for F
where
    F: Fn(&T, &T) -> bool,
{
    fn less(&self, a: &T, b: &T) -> bool {
        self(a, b)
    }
}

/// Flips another ordering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Reversed<O>(pub O);

impl<T: ?Sized, O: StrictWeakOrder<T>> StrictWeakOrder<T> for Reversed<O> {
    fn less(&self, a: &T, b: &T) -> bool {
        self.0.less(b, a)
    }
}

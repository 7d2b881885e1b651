//! An ordered set backed by a splay tree.
//!
//! Every insertion and every successful search moves the touched value to the root,
//! so recently used values are cheap to reach again. Values are ordered by a
//! [`StrictWeakOrder`] given at construction, [`NaturalOrder`] by default.
//!
//!```
//! use spica::SplayTree;
//!
//! let mut tree: SplayTree<i32> = vec![4, 6, 3, 1, 4, 2, 8, 5].into_iter().collect();
//! assert_eq!(tree.len(), 7);
//! assert_eq!(tree.find(&3).get(), Some(&3));
//! assert_eq!(tree.root_value(), Some(&3));
//! assert_eq!(tree.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5, 6, 8]);
//! tree.check_structure().unwrap();
//! ```
//!
//! Removing values is not supported: `erase` always returns
//! [`SplayError::NotImplemented`].

pub mod error;
pub mod order;
pub mod trees;

pub use error::SplayError;
pub use order::{NaturalOrder, Reversed, StrictWeakOrder};
pub use trees::*;
pub use trees::cursor::{Cursor, Iter, Position};
pub use trees::debug::DumpItem;
pub use trees::splay::SplayTree;

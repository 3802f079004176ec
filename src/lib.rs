//! This crate provides a queue of strings built on a cyclic doubly-linked list
//! with owned nodes.
//!
//! The [`Queue`] inserts and removes elements at both ends in constant time, and
//! transforms itself in place: deleting the middle element or every duplicate
//! run, reversing in blocks, sorting, pruning to a monotonic sequence. Several
//! queues can be merged into one with [`merge_all`].
//!
//! Here is a quick example showing how the queue works.
//!
//! ```
//! use cyclic_queue::Queue;
//!
//! let mut queue = Queue::from_values(["dog", "cat", "eel", "ant"]).unwrap();
//! queue.insert_head("bee").unwrap();
//! assert_eq!(queue.size(), 5);
//!
//! queue.delete_mid().unwrap(); // removes "cat", at index 5 / 2
//! queue.reverse_k(2); // same as `swap`
//! assert_eq!(queue.values().collect::<Vec<_>>(), vec!["dog", "bee", "ant", "eel"]);
//!
//! queue.sort(false);
//! assert_eq!(queue.values().collect::<Vec<_>>(), vec!["ant", "bee", "dog", "eel"]);
//!
//! assert_eq!(queue.descend(), 1);
//! assert_eq!(queue.remove_head().map(|e| e.into_value()), Some("eel".to_string()));
//! ```
//!
//! # Memory Layout
//!
//! The queue is a [`List`] of [`Element`]s. The memory layout of the list is
//! like the following graph:
//! ```text
//!          ┌─────────────────────────────────────────────────────────────────────┐
//!          ↓                                                     (Ghost) Node N  │
//!    ╔═══════════╗           ╔═══════════╗                        ┌───────────┐  │
//!    ║   next    ║ ────────→ ║   next    ║ ────────→ ┄┄ ────────→ │   next    │ ─┘
//!    ╟───────────╢           ╟───────────╢     Node 2, 3, ...     ├───────────┤
//! ┌─ ║   prev    ║ ←──────── ║   prev    ║ ←──────── ┄┄ ←──────── │   prev    │
//! │  ╟───────────╢           ╟───────────╢                        ├───────────┤
//! │  ║ payload T ║           ║ payload T ║                        ┊No payload ┊
//! │  ╚═══════════╝           ╚═══════════╝                        └╌╌╌╌╌╌╌╌╌╌╌┘
//! │      Node 0                  Node 1                               ↑   ↑
//! └───────────────────────────────────────────────────────────────────┘   │
//! ╔═══════════╗                                                           │
//! ║   ghost   ║ ──────────────────────────────────────────────────────────┘
//! ╚═══════════╝
//!     List
//! ```
//! The `List` holds nothing but a pointer `ghost` to the ghost node. There is no
//! length field: [`List::len`] and [`Queue::size`] count the nodes.
//!
//! Each node is allocated on heap and holds:
//! - the `next` pointer to the next element (or the ghost node if it is the last
//!   element);
//! - the `prev` pointer to the previous element (or the ghost node if it is the
//!   first element);
//! - the payload `T`, except the ghost node, which has *NO* payload.
//!
//! In an empty list, the `next` and `prev` pointers of the ghost node point to
//! itself. Otherwise `ghost.next` is the first element and `ghost.prev` the last.
//!
//! In convention, in a list with length *n*, the nodes are indexed by 0, 1, ...,
//! *n* - 1, and the ghost node is always indexed by *n*.
//!
//! # Iteration
//!
//! [`Iter`] is a double-ended iterator, fused and non-cyclic. The cursor
//! [`CursorMut`] can move either way, pass through the ghost node and remove
//! elements where it stands.
//!
//! ```
//! use cyclic_queue::List;
//!
//! let mut list = List::from_iter([1, 2, 3, 4]);
//!
//! let mut cursor = list.cursor_start_mut();
//! cursor.move_next_cyclic();
//! cursor.move_next_cyclic();
//! assert_eq!(cursor.remove(), Some(3)); // becomes [1, 2, 4], points to 4
//! assert_eq!(cursor.backspace(), Some(2)); // becomes [1, 4], points to 4
//! assert_eq!(cursor.current(), Some(&4));
//!
//! assert_eq!(list.iter().rev().collect::<Vec<_>>(), vec![&4, &1]);
//! ```
//!
//! # Logging
//!
//! Queue operations emit [`tracing`] events at the `trace` and `debug` levels.
//! Install any subscriber to see them.
//!
//! # Link Checks
//!
//! Debug builds verify the links of a list after every structural algorithm and
//! panic on a broken list. The `check-links` feature keeps these checks in
//! release builds too.
//!
//! [`List`]: crate::List
//! [`Iter`]: crate::Iter
//! [`CursorMut`]: crate::list::cursor::CursorMut

#[doc(inline)]
pub use chain::{Chain, QueueContext};
#[doc(inline)]
pub use list::iterator::{IntoIter, Iter};
#[doc(inline)]
pub use list::List;
#[doc(inline)]
pub use queue::{merge_all, Element, Queue, QueueError};

pub use ghost_cell::GhostToken;

pub mod chain;
pub mod list;
pub mod queue;

use crate::list::{List, Node};
use std::fmt;
use std::fmt::Formatter;
use std::ptr::NonNull;

/// A cursor over a `List` with editing operations.
///
/// In a list with length *n*, there are *n* + 1 valid locations for the cursor:
/// the *n* elements and the ghost node of the list.
///
/// The references a `CursorMut` yields are tied to the cursor itself, so no
/// element can be borrowed across a [`CursorMut::remove`].
///
/// ```compile_fail
/// use cyclic_queue::List;
///
/// let mut list = List::from_iter([1, 2, 3]);
/// let mut cursor = list.cursor_start_mut();
/// let first = cursor.current();
/// cursor.remove();
/// println!("{:?}", first);
/// ```
///
/// # Examples
///
/// (The ghost node of the list is denoted by `#`).
/// ```
/// use cyclic_queue::List;
///
/// // Create a list: [ A B C D #]
/// let mut list = List::from_iter(['A', 'B', 'C', 'D']);
///
/// // Create a cursor at start: [|A B C D #]
/// let mut cursor = list.cursor_start_mut();
/// assert_eq!(cursor.peek_next(), Some(&'B'));
///
/// // Remove the current element and move onto the next: [|B C D #]
/// assert_eq!(cursor.remove(), Some('A'));
/// assert_eq!(cursor.current(), Some(&'B'));
///
/// // Step back onto the ghost node, cyclically: [ B C D|#]
/// assert!(cursor.move_prev().is_err());
/// cursor.move_prev_cyclic();
/// assert_eq!(cursor.current(), None);
///
/// // Remove the element before the cursor: [ B C|#]
/// assert_eq!(cursor.backspace(), Some('D'));
/// assert_eq!(list.into_iter().collect::<String>(), "BC");
/// ```
pub struct CursorMut<'a, T: 'a> {
    current: NonNull<Node<T>>,
    list: &'a mut List<T>,
}

// Private methods
impl<'a, T: 'a> CursorMut<'a, T> {
    pub(crate) fn new(list: &'a mut List<T>, current: NonNull<Node<T>>) -> Self {
        Self { current, list }
    }
    fn is_ghost_node(&self) -> bool {
        self.current == self.list.ghost_node()
    }
    fn is_front_node(&self) -> bool {
        self.prev_node() == self.list.ghost_node()
    }
    fn next_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `current.next` is always valid since it is a cyclic list.
        unsafe { Node::next(self.current) }
    }
    fn prev_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `current.prev` is always valid since it is a cyclic list.
        unsafe { Node::prev(self.current) }
    }
}

impl<'a, T: 'a> CursorMut<'a, T> {
    /// Returns `true` if the `List` is empty. See [`List::is_empty`].
    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    /// Move the cursor to the next position, where passing
    /// through the ghost node is allowed.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn move_next_cyclic(&mut self) {
        self.current = self.next_node();
    }

    /// Move the cursor to the previous position, where passing
    /// through the ghost node is allowed.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn move_prev_cyclic(&mut self) {
        self.current = self.prev_node();
    }

    /// Move the cursor to the previous position, or return an error
    /// when it would move from the first node onto the ghost node.
    ///
    /// This operation should compute in *O*(*1*) time.
    pub fn move_prev(&mut self) -> Result<(), &'static str> {
        if !self.is_empty() && !self.is_front_node() {
            self.move_prev_cyclic();
            return Ok(());
        }
        Err("`move_prev` across ghost boundary")
    }

    /// Returns the element at the cursor, or `None` at the ghost node.
    pub fn current(&self) -> Option<&T> {
        if self.is_ghost_node() {
            return None;
        }
        // SAFETY: it is safe because non-ghost nodes must hold a
        // valid element.
        unsafe { Some(&self.current.as_ref().element) }
    }

    /// Returns the element after the cursor, or `None` if the next node is
    /// the ghost node.
    pub fn peek_next(&self) -> Option<&T> {
        let next = self.next_node();
        if next == self.list.ghost_node() {
            return None;
        }
        // SAFETY: `next` is a non-ghost node.
        Some(unsafe { &next.as_ref().element })
    }

    /// Remove the element at the cursor and move to the next node. Returns
    /// `None` at the ghost node.
    pub fn remove(&mut self) -> Option<T> {
        if self.is_ghost_node() {
            return None;
        }
        let next = self.next_node();
        // SAFETY: `self.current` is a valid non-ghost node in the list, so it is safe.
        let node = unsafe { self.list.detach_node(self.current) };
        self.current = next;
        Some(Node::into_element(node))
    }

    /// Remove the element before the cursor. Returns `None` at the first node.
    pub fn backspace(&mut self) -> Option<T> {
        self.move_prev().ok().and_then(|_| self.remove())
    }
}

impl<'a, T: fmt::Debug + 'a> fmt::Debug for CursorMut<'a, T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("list", &self.list)
            .field("current", &self.current())
            .finish()
    }
}

unsafe impl<T: Send> Send for CursorMut<'_, T> {}

unsafe impl<T: Sync> Sync for CursorMut<'_, T> {}

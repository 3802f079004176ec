use crate::list::{List, Node};
use std::ptr::NonNull;

/// Walk `head..end` with a slow pointer (one step) and a fast pointer (two
/// steps) until the fast one reaches `end`. Returns the node before the
/// middle and the middle node itself, which sits at index `len / 2`.
///
/// For a one-node chain both returned nodes are `head`.
///
/// It is unsafe because `head..end` must be a non-empty chain of live nodes
/// reaching `end` by `next` links.
pub(super) unsafe fn middle_of_chain<T>(
    head: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
) -> (NonNull<Node<T>>, NonNull<Node<T>>) {
    let (mut before, mut slow, mut fast) = (head, head, head);
    while fast != end && Node::next(fast) != end {
        fast = Node::next(Node::next(fast));
        before = slow;
        slow = Node::next(slow);
    }
    (before, slow)
}

impl<T> List<T> {
    /// Removes the middle element and returns it, or `None` if the list is empty.
    ///
    /// The middle is the element at index `len / 2`, so for an even length it is
    /// the later of the two central elements.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c', 'd', 'e']);
    /// assert_eq!(list.remove_middle(), Some('c'));
    /// assert_eq!(list.remove_middle(), Some('d'));
    /// assert_eq!(list.into_iter().collect::<String>(), "abe");
    /// ```
    pub fn remove_middle(&mut self) -> Option<T> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: the list is not empty, so `front..ghost` is a non-empty chain,
        // and the middle node is never the ghost node.
        let node = unsafe {
            let (_, middle) = middle_of_chain(self.front_node(), self.ghost_node());
            self.detach_node(middle)
        };
        self.check_links();
        Some(Node::into_element(node))
    }
}

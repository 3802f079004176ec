use std::fmt::{Debug, Formatter};
use std::marker::PhantomData;
use std::ptr::{self, NonNull};

use crate::list::cursor::CursorMut;
use crate::Iter;

pub mod cursor;
pub mod iterator;

mod algorithms;

/// The `List` is a doubly-linked list with owned nodes, implemented as a cyclic list
/// around a payload-less ghost node.
///
/// Inserting or removing at either end, or at a known node, takes constant time.
/// No length is cached: [`List::len`] walks the ring and takes *O*(*n*) time.
///
/// # Naming Conventions
///
/// - `front..=back`: a closed range of list nodes, both inclusive;
/// - `start..end`: a half-open range of list nodes, left inclusive and right
///   exclusive (probably the ghost node).
pub struct List<T> {
    ghost: NonNull<Node<Erased>>,
    _marker: PhantomData<Box<Node<T>>>,
}

#[repr(C)]
pub(crate) struct Node<T> {
    pub(crate) next: NonNull<Node<T>>,
    pub(crate) prev: NonNull<Node<T>>,
    pub(crate) element: T,
}

#[derive(Default)]
struct Erased;

/// Nodes fragment detached from a list, used in block reversal and
/// splicing.
///
/// When detached from a list, reading of `front.prev` and `back.next`
/// is invalid.
pub(crate) struct DetachedNodes<T> {
    pub(crate) front: NonNull<Node<T>>,
    pub(crate) back: NonNull<Node<T>>,
    _marker: PhantomData<Box<Node<T>>>,
}

/// Links `prev -> next` and `next -> prev`.
///
/// Both pointers must refer to live nodes (or the ghost node) of the same list.
pub(crate) unsafe fn connect<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    Node::set_next(prev, next);
    Node::set_prev(next, prev);
}

// private methods
impl<T> List<T> {
    pub(crate) fn ghost_node(&self) -> NonNull<Node<T>> {
        self.ghost.cast()
    }
    pub(crate) fn front_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.next` is always valid (either `ghost` itself, or the first element
        // in the list).
        unsafe { Node::next(self.ghost_node()) }
    }
    pub(crate) fn back_node(&self) -> NonNull<Node<T>> {
        // SAFETY: `ghost.prev` is always valid (either `ghost` itself, or the last element
        // in the list).
        unsafe { Node::prev(self.ghost_node()) }
    }

    /// Detach a single node `node` from the list, and return it as a box.
    ///
    /// The links of the returned node are left stale.
    ///
    /// It is unsafe because it does not check whether `node` belongs to the list,
    /// or whether it is the ghost node.
    pub(crate) unsafe fn detach_node(&mut self, node: NonNull<Node<T>>) -> Box<Node<T>> {
        let node = Box::from_raw(node.as_ptr());
        connect(node.prev, node.next);
        node
    }

    /// Attach a single node `node` to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_node(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        node: NonNull<Node<T>>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, node);
        connect(node, next);
    }

    /// Link `node` immediately after `pos`. With `pos` at the ghost node this
    /// is a head insertion, with `pos` at the back node a tail insertion.
    pub(crate) unsafe fn attach_after(&mut self, pos: NonNull<Node<T>>, node: NonNull<Node<T>>) {
        self.attach_node(pos, Node::next(pos), node);
    }

    /// Detach a range of nodes `front..=back` from the list, and return the detached
    /// nodes.
    ///
    /// It is unsafe because it does not check whether `front..=back` is a valid range
    /// (i.e. `front` must **NOT** be at the right of `back`), or whether it belongs
    /// to the list.
    pub(crate) unsafe fn detach_nodes(
        &mut self,
        front: NonNull<Node<T>>,
        back: NonNull<Node<T>>,
    ) -> DetachedNodes<T> {
        connect(Node::prev(front), Node::next(back));
        DetachedNodes::new(front, back)
    }

    /// Attach a range of detached nodes to the list, between `prev` and `next`.
    ///
    /// It is unsafe because it does not check whether `prev` and `next` belongs
    /// to the list, or whether the `prev` and `next` is adjacent (only in
    /// `#[cfg(debug_assertions)]`).
    pub(crate) unsafe fn attach_nodes(
        &mut self,
        prev: NonNull<Node<T>>,
        next: NonNull<Node<T>>,
        detached: DetachedNodes<T>,
    ) {
        #[cfg(debug_assertions)]
        assert_adjacent(prev, next);
        connect(prev, detached.front);
        connect(detached.back, next);
    }

    /// Detach all nodes from the list, and return the detached nodes, or return
    /// `None` if the list is empty.
    pub(crate) fn detach_all_nodes(&mut self) -> Option<DetachedNodes<T>> {
        if self.is_empty() {
            return None;
        }
        // SAFETY: `front_node()..=back_node()` is a valid range of a non-empty list.
        unsafe { Some(self.detach_nodes(self.front_node(), self.back_node())) }
    }

    /// Walk the ring in both directions and check that every node is linked
    /// back by its neighbours.
    pub(crate) fn links_are_consistent(&self) -> bool {
        let ghost = self.ghost_node();
        let (mut forward, mut backward) = (0_usize, 0_usize);
        let mut node = ghost;
        // SAFETY: every `next`/`prev` reachable from the ghost node is a live node.
        unsafe {
            loop {
                let next = Node::next(node);
                if Node::prev(next) != node {
                    return false;
                }
                node = next;
                if node == ghost {
                    break;
                }
                forward += 1;
            }
            loop {
                node = Node::prev(node);
                if node == ghost {
                    break;
                }
                backward += 1;
            }
        }
        forward == backward
    }

    #[inline]
    pub(crate) fn check_links(&self) {
        #[cfg(any(debug_assertions, feature = "check-links"))]
        assert!(self.links_are_consistent(), "list links are broken");
    }
}

impl<T> List<T> {
    /// Create an empty `List`
    ///
    /// # Examples
    /// ```
    /// use cyclic_queue::List;
    /// let list: List<u32> = List::new();
    /// assert!(list.is_empty());
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self {
            ghost: new_ghost(),
            _marker: PhantomData,
        }
    }

    /// Returns `true` if the `List` is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.front_node() == self.ghost_node()
    }

    /// Returns `true` if the `List` holds exactly one element.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert!(!list.is_singular());
    /// list.push_back(1);
    /// assert!(list.is_singular());
    /// list.push_back(2);
    /// assert!(!list.is_singular());
    /// ```
    #[inline]
    pub fn is_singular(&self) -> bool {
        !self.is_empty() && self.front_node() == self.back_node()
    }

    /// Returns the length of the `List` by walking it.
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
    /// let mut list = List::new();
    /// list.push_front(2);
    /// list.push_front(1);
    /// list.push_back(3);
    /// assert_eq!(list.len(), 3);
    /// ```
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Removes all elements from the `List`.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time.
    #[inline]
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }

    /// Provides a reference to the front element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn front(&self) -> Option<&T> {
        self.iter().next()
    }

    /// Provides a reference to the back element, or `None` if the list is
    /// empty.
    #[inline]
    pub fn back(&self) -> Option<&T> {
        self.iter().next_back()
    }

    /// Adds an element first in the list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_front(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the ghost node belongs to the list.
        unsafe { self.attach_after(self.ghost_node(), node) }
    }

    /// Removes the first element and returns it, or `None` if the list is
    /// empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::new();
    /// assert_eq!(list.pop_front(), None);
    ///
    /// list.push_front(1);
    /// list.push_front(3);
    /// assert_eq!(list.pop_front(), Some(3));
    /// assert_eq!(list.pop_front(), Some(1));
    /// assert_eq!(list.pop_front(), None);
    /// ```
    pub fn pop_front(&mut self) -> Option<T> {
        self.cursor_start_mut().remove()
    }

    /// Appends an element to the back of a list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn push_back(&mut self, elt: T) {
        let node = Node::new_detached(elt);
        // SAFETY: the back node (or the ghost node, when empty) belongs to the list.
        unsafe { self.attach_after(self.back_node(), node) }
    }

    /// Removes the last element from a list and returns it, or `None` if
    /// it is empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time.
    pub fn pop_back(&mut self) -> Option<T> {
        self.cursor_end_mut().backspace()
    }

    /// Provides a cursor with editing operations at the first node.
    ///
    /// The cursor is pointing to the ghost node if the list is empty.
    pub fn cursor_start_mut(&mut self) -> CursorMut<'_, T> {
        let front = self.front_node();
        CursorMut::new(self, front)
    }

    /// Provides a cursor with editing operations at the ghost node.
    pub fn cursor_end_mut(&mut self) -> CursorMut<'_, T> {
        let ghost = self.ghost_node();
        CursorMut::new(self, ghost)
    }

    /// Provides a forward iterator.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self)
    }

    /// Moves all elements from `other` to the end of the list.
    ///
    /// This reuses all the nodes from `other` and moves them into `self`. After
    /// this operation, `other` becomes empty.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(1) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list1 = List::from_iter(['a']);
    /// let mut list2 = List::from_iter(['b', 'c']);
    ///
    /// list1.append(&mut list2);
    ///
    /// assert_eq!(list1.iter().collect::<String>(), "abc");
    /// assert!(list2.is_empty());
    /// ```
    pub fn append(&mut self, other: &mut Self) {
        if let Some(detached) = other.detach_all_nodes() {
            // `self.back_node()` and `self.ghost_node()` are valid
            // nodes in the list and they are adjacent, so it is safe.
            unsafe { self.attach_nodes(self.back_node(), self.ghost_node(), detached) }
        }
    }
}

impl<T: Debug> Debug for List<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Node<T> {
    /// Create a detached node with given element. Its links are dangling
    /// until it is attached.
    pub(crate) fn new_detached(element: T) -> NonNull<Node<T>> {
        let node = Box::new(Node {
            next: NonNull::dangling(),
            prev: NonNull::dangling(),
            element,
        });
        NonNull::from(Box::leak(node))
    }

    pub(crate) fn into_element(self: Box<Self>) -> T {
        self.element
    }

    // The link accessors go through raw pointers and never create a
    // `&Node<T>`, so they are also valid on the ghost node, whose allocation
    // is only a `Node<Erased>`.

    #[inline]
    pub(crate) unsafe fn next(this: NonNull<Self>) -> NonNull<Self> {
        ptr::addr_of!((*this.as_ptr()).next).read()
    }

    #[inline]
    pub(crate) unsafe fn prev(this: NonNull<Self>) -> NonNull<Self> {
        ptr::addr_of!((*this.as_ptr()).prev).read()
    }

    #[inline]
    pub(crate) unsafe fn set_next(this: NonNull<Self>, next: NonNull<Self>) {
        ptr::addr_of_mut!((*this.as_ptr()).next).write(next);
    }

    #[inline]
    pub(crate) unsafe fn set_prev(this: NonNull<Self>, prev: NonNull<Self>) {
        ptr::addr_of_mut!((*this.as_ptr()).prev).write(prev);
    }
}

impl<T> DetachedNodes<T> {
    /// It is unsafe because it must be guaranteed that `front..=back` is
    /// a valid range.
    unsafe fn new(front: NonNull<Node<T>>, back: NonNull<Node<T>>) -> Self {
        Self {
            front,
            back,
            _marker: PhantomData,
        }
    }

    /// Reverse the order of the detached nodes by swapping the links of
    /// every node in `front..=back`.
    ///
    /// The outer links stay stale: after the swap `front.next` and
    /// `back.prev` point outside the range until re-attached.
    pub(crate) fn reverse(self) -> Self {
        let (front, back) = (self.front, self.back);
        let mut node = front;
        // SAFETY: `front..=back` is a valid range, every node in it is live.
        unsafe {
            loop {
                let n = node.as_mut();
                std::mem::swap(&mut n.next, &mut n.prev);
                if node == back {
                    break;
                }
                // the old `next`, now stored in `prev`
                node = n.prev;
            }
            Self::new(back, front)
        }
    }
}

fn new_ghost() -> NonNull<Node<Erased>> {
    let ghost = Node::new_detached(Erased::default());
    // SAFETY:
    // - `ghost.next`, `ghost.prev` is initialized immediately after creating `ghost`.
    // - `ghost.element` is never read as a `T`, so it is erased out.
    unsafe {
        Node::set_next(ghost, ghost);
        Node::set_prev(ghost, ghost);
    }
    ghost
}

#[cfg(debug_assertions)]
fn assert_adjacent<T>(prev: NonNull<Node<T>>, next: NonNull<Node<T>>) {
    unsafe {
        assert_eq!(Node::next(prev), next);
        assert_eq!(Node::prev(next), prev);
    }
}

impl<T> Drop for List<T> {
    fn drop(&mut self) {
        self.clear();
        // SAFETY: the ghost node was leaked from a box in `new_ghost` and
        // nothing links to it any more.
        unsafe { drop(Box::from_raw(self.ghost.as_ptr())) }
    }
}

unsafe impl<T: Send> Send for List<T> {}

unsafe impl<T: Sync> Sync for List<T> {}

// Ensure that `List` and its read-only iterators are covariant in their type parameters.
#[allow(dead_code)]
fn assert_covariance() {
    fn a<'a>(x: List<&'static str>) -> List<&'a str> {
        x
    }
    fn b<'i, 'a>(x: Iter<'i, &'static str>) -> Iter<'i, &'a str> {
        x
    }
}

#[cfg(test)]
mod tests {
    use crate::list::List;
    use std::cell::RefCell;

    #[test]
    fn list_create() {
        let mut list = List::<i32>::new();
        assert!(list.is_empty());
        assert!(!list.is_singular());
        list.push_back(1);
        assert!(!list.is_empty());
        assert!(list.is_singular());
        assert_eq!(list.pop_back(), Some(1));
        assert!(list.is_empty());
        assert!(list.links_are_consistent());
    }

    #[test]
    fn list_drop() {
        #[derive(Debug)]
        struct DropChecker<'a, T: Copy> {
            value: T,
            dropped: &'a RefCell<Vec<T>>,
        }
        impl<'a, T: Copy> DropChecker<'a, T> {
            fn new(value: T, dropped: &'a RefCell<Vec<T>>) -> Self {
                Self { value, dropped }
            }
        }
        impl<'a, T: Copy> Drop for DropChecker<'a, T> {
            fn drop(&mut self) {
                self.dropped.borrow_mut().push(self.value);
            }
        }
        let dropped = RefCell::new(Vec::<i32>::new());
        let mut list = List::new();
        list.push_back(DropChecker::new(1, &dropped));
        list.push_back(DropChecker::new(2, &dropped));
        list.push_back(DropChecker::new(3, &dropped));
        drop(list);
        assert_eq!(dropped.borrow().as_slice(), &[1, 2, 3]);
    }

    #[test]
    fn list_push_and_pop() {
        let mut list = List::new();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);

        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert_eq!(list.pop_front(), None);
        assert_eq!(list.pop_back(), None);

        list.push_back(1);
        assert_eq!(list.back(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.pop_back(), None);
        assert!(list.is_empty());

        list.push_front(1);
        list.push_front(2);
        list.push_back(3);
        assert_eq!(list.len(), 3);
        assert!(list.links_are_consistent());
        assert_eq!(list.back(), Some(&3));
        assert_eq!(list.front(), Some(&2));
        assert_eq!(list.pop_front(), Some(2));
        assert_eq!(list.pop_back(), Some(3));

        assert_eq!(list.front(), Some(&1));
        assert_eq!(list.pop_front(), Some(1));
        assert_eq!(list.front(), None);
        assert_eq!(list.back(), None);
        assert!(list.is_empty());
        assert!(list.links_are_consistent());
    }

    #[test]
    fn list_append() {
        fn test_append(list: &[i32], other: &[i32]) {
            let mut list = List::from_iter(list.iter().copied());
            let mut other_list = List::from_iter(other.iter().copied());
            let expected: Vec<i32> = list.iter().chain(other.iter()).copied().collect();

            list.append(&mut other_list);
            assert!(other_list.is_empty());
            assert!(other_list.links_are_consistent());
            assert!(list.links_are_consistent());
            assert_eq!(list.iter().copied().collect::<Vec<_>>(), expected);
        }
        test_append(&[0, 1, 2, 3, 4], &[5, 6]);
        test_append(&[0, 1, 2, 3, 4], &[]);
        test_append(&[0], &[1]);
        test_append(&[], &[0, 1]);
        test_append(&[], &[]);
    }

    #[test]
    fn detached_reverse() {
        let mut list = List::from_iter(0..5);
        let detached = list.detach_all_nodes().unwrap();
        assert!(list.is_empty());
        let reversed = detached.reverse();
        unsafe { list.attach_nodes(list.ghost_node(), list.ghost_node(), reversed) };
        assert!(list.links_are_consistent());
        assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![4, 3, 2, 1, 0]);
    }
}

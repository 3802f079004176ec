use super::middle::middle_of_chain;
use crate::list::{List, Node};
use std::cmp::Ordering;
use std::mem;
use std::ptr::NonNull;

impl<T> List<T> {
    /// Sort the list.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n* * log(*n*)) time and
    /// *O*(log(*n*)) stack.
    ///
    /// # Current Implementation
    ///
    /// The current algorithm is a top-down merge sort over the nodes themselves.
    /// There is no extra temporary storage during merging.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([5, 2, 4, 3, 1]);
    ///
    /// list.sort();
    ///
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    /// ```
    pub fn sort(&mut self)
    where
        T: Ord,
    {
        merge_sort(self, |a, b| a.lt(b));
    }

    /// Sort the list with a comparator function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// The comparator function must define a total ordering for the
    /// elements in the list. If the ordering is not total, the order
    /// of the elements is unspecified.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut v = List::from_iter([5, 4, 1, 3, 2]);
    /// v.sort_by(|a, b| a.cmp(b));
    /// assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![1, 2, 3, 4, 5]);
    ///
    /// // reverse sorting
    /// v.sort_by(|a, b| b.cmp(a));
    /// assert_eq!(v.iter().copied().collect::<Vec<_>>(), vec![5, 4, 3, 2, 1]);
    /// ```
    pub fn sort_by<F>(&mut self, mut compare: F)
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        merge_sort(self, |a, b| compare(a, b) == Ordering::Less)
    }

    /// Sorts the list with a key extraction function.
    ///
    /// This sort is stable (i.e., does not reorder equal elements).
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut v = List::from_iter([-5i32, 4, 1, -3, 2]);
    ///
    /// v.sort_by_key(|k| k.abs());
    /// assert_eq!(v.into_iter().collect::<Vec<_>>(), vec![1, 2, -3, 4, -5]);
    /// ```
    pub fn sort_by_key<K, F>(&mut self, mut f: F)
    where
        F: FnMut(&T) -> K,
        K: Ord,
    {
        merge_sort(self, |a, b| f(a).lt(&f(b)));
    }
}

fn merge_sort<T, F>(list: &mut List<T>, mut less: F)
where
    F: FnMut(&T, &T) -> bool,
{
    if list.is_empty() || list.is_singular() {
        return;
    }
    let ghost = list.ghost_node();
    let front = list.front_node();
    // The ring is read as a forward chain `front..ghost`: only `next` links
    // are rewritten while sorting, `prev` links are rebuilt afterwards.
    let guard = RestoreOnUnwind { ghost };
    // SAFETY: `front..ghost` is the whole chain of a list with at least two
    // nodes, and the ghost node is never moved.
    unsafe {
        let head = merge_sort_chain(front, ghost, &mut less);
        mem::forget(guard);
        rethread(ghost, head);
    }
    list.check_links();
}

/// Rebuilds every `next` link from the `prev` links when a comparison
/// panics. Until `rethread` runs, the `prev` links still form the ring as it
/// was before the sort, so the list is left unsorted but whole.
struct RestoreOnUnwind<T> {
    ghost: NonNull<Node<T>>,
}

impl<T> Drop for RestoreOnUnwind<T> {
    fn drop(&mut self) {
        let mut node = self.ghost;
        // SAFETY: every node reachable by `prev` from the ghost node is a live
        // node of the list.
        unsafe {
            loop {
                let prev = Node::prev(node);
                Node::set_next(prev, node);
                node = prev;
                if node == self.ghost {
                    break;
                }
            }
        }
    }
}

unsafe fn merge_sort_chain<T, F>(
    head: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    if head == end || Node::next(head) == end {
        return head;
    }
    // Cut `head..end` into `head..=before` and `mid..end`.
    let (before, mid) = middle_of_chain(head, end);
    Node::set_next(before, end);

    let left = merge_sort_chain(head, end, less);
    let right = merge_sort_chain(mid, end, less);
    merge_chains(left, right, end, less)
}

/// Merge two sorted chains, both terminated by `end`, into one chain.
///
/// A node from `right` is taken only if it is strictly less than the
/// current node of `left`, so equal elements keep their relative order.
unsafe fn merge_chains<T, F>(
    mut left: NonNull<Node<T>>,
    mut right: NonNull<Node<T>>,
    end: NonNull<Node<T>>,
    less: &mut F,
) -> NonNull<Node<T>>
where
    F: FnMut(&T, &T) -> bool,
{
    let mut head = end;
    let mut tail = None;
    while left != end && right != end {
        let node = if less(&right.as_ref().element, &left.as_ref().element) {
            let node = right;
            right = Node::next(node);
            node
        } else {
            let node = left;
            left = Node::next(node);
            node
        };
        push_chain(&mut head, &mut tail, node);
    }
    // The rest is already terminated by `end`.
    let rest = if left != end { left } else { right };
    if rest != end {
        push_chain(&mut head, &mut tail, rest);
    }
    head
}

unsafe fn push_chain<T>(
    head: &mut NonNull<Node<T>>,
    tail: &mut Option<NonNull<Node<T>>>,
    node: NonNull<Node<T>>,
) {
    match tail {
        Some(tail) => Node::set_next(*tail, node),
        None => *head = node,
    }
    *tail = Some(node);
}

/// Close the chain `head..ghost` into a ring again, fixing every `prev`
/// link in one forward pass.
unsafe fn rethread<T>(ghost: NonNull<Node<T>>, head: NonNull<Node<T>>) {
    Node::set_next(ghost, head);
    let (mut prev, mut node) = (ghost, head);
    while node != ghost {
        Node::set_prev(node, prev);
        prev = node;
        node = Node::next(node);
    }
    Node::set_prev(ghost, prev);
}

use crate::list::{List, Node};
use std::cmp::Ordering;
use std::ptr::NonNull;

impl<T> List<T> {
    /// Removes every element that has a strictly smaller element anywhere after
    /// it, leaving a non-decreasing list. Returns the remaining length.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([5, 3, 4, 1, 2]);
    /// assert_eq!(list.retain_non_decreasing(), 2);
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![1, 2]);
    /// ```
    pub fn retain_non_decreasing(&mut self) -> usize
    where
        T: Ord,
    {
        self.retain_non_decreasing_by(|a, b| a.cmp(b))
    }

    /// Like [`List::retain_non_decreasing`], with a comparator function.
    pub fn retain_non_decreasing_by<F>(&mut self, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        retain_from_back(self, |element, bound| {
            compare(element, bound) != Ordering::Greater
        })
    }

    /// Removes every element that has a strictly greater element anywhere after
    /// it, leaving a non-increasing list. Returns the remaining length.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([5, 3, 4, 1, 2]);
    /// assert_eq!(list.retain_non_increasing(), 3);
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![5, 4, 2]);
    /// ```
    pub fn retain_non_increasing(&mut self) -> usize
    where
        T: Ord,
    {
        self.retain_non_increasing_by(|a, b| a.cmp(b))
    }

    /// Like [`List::retain_non_increasing`], with a comparator function.
    pub fn retain_non_increasing_by<F>(&mut self, mut compare: F) -> usize
    where
        F: FnMut(&T, &T) -> Ordering,
    {
        retain_from_back(self, |element, bound| {
            compare(element, bound) != Ordering::Less
        })
    }
}

/// Scan from the back and keep an element iff `keep(element, bound)` holds,
/// where `bound` is the last kept element. The back element is always kept.
fn retain_from_back<T, F>(list: &mut List<T>, mut keep: F) -> usize
where
    F: FnMut(&T, &T) -> bool,
{
    let ghost = list.ghost_node();
    let mut node = list.back_node();
    let mut bound: Option<NonNull<Node<T>>> = None;
    let mut kept = 0;
    while node != ghost {
        // SAFETY: `node` is a non-ghost node of the list; `bound` is a kept node,
        // so it is never detached while referenced.
        unsafe {
            let prev = Node::prev(node);
            let retained = match bound {
                None => true,
                Some(bound) => keep(&node.as_ref().element, &bound.as_ref().element),
            };
            if retained {
                bound = Some(node);
                kept += 1;
            } else {
                drop(list.detach_node(node));
            }
            node = prev;
        }
    }
    list.check_links();
    kept
}

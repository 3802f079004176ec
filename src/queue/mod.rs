//! The string queue: a [`List`] of owned [`Element`]s with the whole-queue
//! transformations built on the list algorithms.
use crate::chain::{Chain, QueueContext};
use crate::list::List;
use crate::Iter;
use ghost_cell::GhostToken;
use std::fmt;
use tracing::{debug, trace};

pub use element::Element;
pub use error::QueueError;
pub use merge::merge_all;

mod element;
mod error;
mod merge;

/// A queue of strings on a cyclic doubly-linked list.
///
/// Elements are inserted and removed at both ends in constant time. The size
/// is not cached: [`Queue::size`] walks the queue.
///
/// # Examples
///
/// ```
/// use cyclic_queue::Queue;
///
/// let mut queue = Queue::new();
/// queue.insert_tail("b").unwrap();
/// queue.insert_head("a").unwrap();
/// queue.insert_tail("c").unwrap();
/// assert_eq!(queue.size(), 3);
///
/// let mut buf = [0_u8; 8];
/// let element = queue.remove_head_into(&mut buf).unwrap();
/// assert_eq!(element.value(), "a");
/// assert_eq!(&buf[..2], b"a\0");
/// element.release();
///
/// assert_eq!(queue.remove_tail().unwrap().value(), "c");
/// assert_eq!(queue.values().collect::<Vec<_>>(), vec!["b"]);
/// ```
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Queue {
    list: List<Element>,
}

impl Queue {
    pub fn new() -> Self {
        Self { list: List::new() }
    }

    /// Builds a queue holding copies of `values`, front to back.
    pub fn from_values<'a, I>(values: I) -> Result<Self, QueueError>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut queue = Self::new();
        for value in values {
            queue.insert_tail(value)?;
        }
        Ok(queue)
    }

    pub fn is_empty(&self) -> bool {
        self.list.is_empty()
    }

    pub fn is_singular(&self) -> bool {
        self.list.is_singular()
    }

    /// Number of elements, counted by walking the queue in *O*(*n*) time.
    pub fn size(&self) -> usize {
        self.list.len()
    }

    pub fn front(&self) -> Option<&Element> {
        self.list.front()
    }

    pub fn back(&self) -> Option<&Element> {
        self.list.back()
    }

    pub fn iter(&self) -> Iter<'_, Element> {
        self.list.iter()
    }

    /// The element values, front to back.
    pub fn values(&self) -> impl DoubleEndedIterator<Item = &str> + '_ {
        self.list.iter().map(Element::value)
    }

    pub fn as_list(&self) -> &List<Element> {
        &self.list
    }

    /// Copies `value` into a new element at the head of the queue.
    ///
    /// On failure nothing is inserted.
    pub fn insert_head(&mut self, value: &str) -> Result<(), QueueError> {
        let element = Element::new(value).map_err(|err| {
            debug!(%err, "insert_head failed");
            err
        })?;
        self.list.push_front(element);
        Ok(())
    }

    /// Copies `value` into a new element at the tail of the queue.
    ///
    /// On failure nothing is inserted.
    pub fn insert_tail(&mut self, value: &str) -> Result<(), QueueError> {
        let element = Element::new(value).map_err(|err| {
            debug!(%err, "insert_tail failed");
            err
        })?;
        self.list.push_back(element);
        Ok(())
    }

    /// Unlinks the head element and hands it over, or returns `None` if the
    /// queue is empty.
    pub fn remove_head(&mut self) -> Option<Element> {
        self.list.pop_front()
    }

    /// Like [`Queue::remove_head`], and also copies the value into `buf` as
    /// [`Element::copy_to`] does.
    pub fn remove_head_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.list.pop_front()?;
        element.copy_to(buf);
        Some(element)
    }

    /// Unlinks the tail element and hands it over, or returns `None` if the
    /// queue is empty.
    pub fn remove_tail(&mut self) -> Option<Element> {
        self.list.pop_back()
    }

    /// Like [`Queue::remove_tail`], and also copies the value into `buf` as
    /// [`Element::copy_to`] does.
    pub fn remove_tail_into(&mut self, buf: &mut [u8]) -> Option<Element> {
        let element = self.list.pop_back()?;
        element.copy_to(buf);
        Some(element)
    }

    /// Deletes the element at index `size / 2`: the middle one, or the later
    /// of the two middle ones for an even size.
    pub fn delete_mid(&mut self) -> Result<(), QueueError> {
        let element = self.list.remove_middle().ok_or(QueueError::Empty)?;
        trace!(value = element.value(), "deleted middle element");
        element.release();
        Ok(())
    }

    /// Deletes every element that has an equal neighbour, so that only values
    /// without an adjacent duplicate remain. Returns how many were deleted.
    ///
    /// Only adjacent elements are compared; sort the queue first to delete
    /// every value that occurs more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_values(["1", "1", "2", "3", "3", "3"]).unwrap();
    /// assert_eq!(queue.delete_dup(), Ok(5));
    /// assert_eq!(queue.values().collect::<Vec<_>>(), vec!["2"]);
    /// ```
    pub fn delete_dup(&mut self) -> Result<usize, QueueError> {
        if self.is_empty() {
            return Err(QueueError::Empty);
        }
        let removed = self.list.remove_duplicate_runs();
        trace!(removed, "deleted duplicate runs");
        Ok(removed)
    }

    /// Swaps every two adjacent elements; a last odd element stays in place.
    pub fn swap(&mut self) {
        self.list.reverse_in_blocks(2);
    }

    /// Reverses the whole queue.
    pub fn reverse(&mut self) {
        self.list.reverse();
    }

    /// Reverses every consecutive block of `k` elements from the head. A
    /// trailing block shorter than `k` keeps its order.
    pub fn reverse_k(&mut self, k: usize) {
        self.list.reverse_in_blocks(k);
    }

    /// Stable merge sort by the bytes of the values.
    pub fn sort(&mut self, descending: bool) {
        if descending {
            self.list.sort_by(|a, b| b.cmp(a));
        } else {
            self.list.sort();
        }
        trace!(descending, "sorted queue");
    }

    /// Deletes every element that has a strictly smaller element anywhere after
    /// it. Returns the remaining size.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::Queue;
    ///
    /// let mut queue = Queue::from_values(["5", "3", "4", "1", "2"]).unwrap();
    /// assert_eq!(queue.ascend(), 2);
    /// assert_eq!(queue.values().collect::<Vec<_>>(), vec!["1", "2"]);
    /// ```
    pub fn ascend(&mut self) -> usize {
        let kept = self.list.retain_non_decreasing();
        trace!(kept, "pruned to a non-decreasing queue");
        kept
    }

    /// Deletes every element that has a strictly greater element anywhere after
    /// it. Returns the remaining size.
    pub fn descend(&mut self) -> usize {
        let kept = self.list.retain_non_increasing();
        trace!(kept, "pruned to a non-increasing queue");
        kept
    }

    /// Moves every element of `other` to the tail of `self` in *O*(1).
    pub fn append(&mut self, other: &mut Queue) {
        self.list.append(&mut other.list);
    }

    /// Merges `queues` into the first of them and sorts it, leaving the
    /// others empty. Returns the merged size, or `0` if `queues` is empty.
    ///
    /// A shorthand for building a [`Chain`](crate::Chain) and calling
    /// [`merge_all`].
    pub fn merge_all<'q, I>(queues: I, descending: bool) -> usize
    where
        I: IntoIterator<Item = &'q mut Queue>,
    {
        GhostToken::new(|token| {
            let mut chain = Chain::new(token);
            for (id, queue) in queues.into_iter().enumerate() {
                chain.push_back(QueueContext::new(queue, id));
            }
            merge_all(&mut chain, descending)
        })
    }
}

impl fmt::Debug for Queue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.values()).finish()
    }
}

impl<'a> IntoIterator for &'a Queue {
    type Item = &'a Element;
    type IntoIter = Iter<'a, Element>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::{Queue, QueueError};
    use rand::seq::SliceRandom;
    use rand::{Rng, SeedableRng};
    use rand_chacha::ChaCha8Rng;

    fn queue(values: &[&str]) -> Queue {
        Queue::from_values(values.iter().copied()).unwrap()
    }

    fn values(queue: &Queue) -> Vec<&str> {
        assert!(queue.as_list().links_are_consistent());
        queue.values().collect()
    }

    #[test]
    fn insert_and_remove() {
        let mut q = Queue::new();
        assert!(q.is_empty());
        assert_eq!(q.size(), 0);
        for (i, value) in ["a", "b", "c", "d"].iter().enumerate() {
            q.insert_tail(value).unwrap();
            assert_eq!(q.size(), i + 1);
        }
        q.insert_head("z").unwrap();
        assert_eq!(values(&q), vec!["z", "a", "b", "c", "d"]);
        assert_eq!(q.front().map(|e| e.value()), Some("z"));
        assert_eq!(q.back().map(|e| e.value()), Some("d"));

        assert_eq!(q.remove_head().unwrap().value(), "z");
        assert_eq!(q.remove_tail().unwrap().value(), "d");
        assert_eq!(values(&q), vec!["a", "b", "c"]);
        while let Some(element) = q.remove_head() {
            element.release();
        }
        assert!(q.is_empty());
        assert!(q.remove_head().is_none());
        assert!(q.remove_tail().is_none());
    }

    #[test]
    fn insert_head_then_remove_head_round_trips() {
        let mut q = queue(&["x", "y"]);
        q.insert_head("meerkat").unwrap();
        let mut buf = [0_u8; 5];
        let element = q.remove_head_into(&mut buf).unwrap();
        assert_eq!(element.value(), "meerkat");
        assert_eq!(&buf, b"meer\0");

        let mut buf = [0xff_u8; 3];
        let element = q.remove_tail_into(&mut buf).unwrap();
        assert_eq!(element.value(), "y");
        assert_eq!(&buf, &[b'y', 0, 0xff]);

        let mut empty = Queue::new();
        let mut buf = [0xff_u8; 3];
        assert!(empty.remove_head_into(&mut buf).is_none());
        assert!(empty.remove_tail_into(&mut buf).is_none());
        assert_eq!(buf, [0xff; 3]);
    }

    #[test]
    fn delete_mid_removes_later_center() {
        let mut q = queue(&["a", "b", "c", "d", "e"]);
        assert_eq!(q.delete_mid(), Ok(()));
        assert_eq!(values(&q), vec!["a", "b", "d", "e"]);
        assert_eq!(q.delete_mid(), Ok(()));
        assert_eq!(values(&q), vec!["a", "b", "e"]);

        let mut q = queue(&["a", "b", "c", "d"]);
        assert_eq!(q.delete_mid(), Ok(()));
        assert_eq!(values(&q), vec!["a", "b", "d"]);

        let mut q = queue(&["a"]);
        assert_eq!(q.delete_mid(), Ok(()));
        assert!(q.is_empty());
        assert_eq!(q.delete_mid(), Err(QueueError::Empty));
    }

    #[test]
    fn delete_dup_adjacent_runs() {
        let mut q = queue(&["1", "1", "2", "3", "3", "3"]);
        assert_eq!(q.delete_dup(), Ok(5));
        assert_eq!(values(&q), vec!["2"]);

        let mut q = queue(&["solo"]);
        assert_eq!(q.delete_dup(), Ok(0));
        assert_eq!(values(&q), vec!["solo"]);

        let mut q = queue(&["ab", "a", "a", "ab"]);
        assert_eq!(q.delete_dup(), Ok(2));
        assert_eq!(values(&q), vec!["ab", "ab"]);

        assert_eq!(Queue::new().delete_dup(), Err(QueueError::Empty));
    }

    #[test]
    fn swap_and_reverse() {
        let mut q = queue(&["a", "b", "c", "d", "e"]);
        q.swap();
        assert_eq!(values(&q), vec!["b", "a", "d", "c", "e"]);

        let mut q = queue(&["a", "b", "c", "d"]);
        q.reverse_k(4);
        assert_eq!(values(&q), vec!["d", "c", "b", "a"]);
        q.reverse();
        assert_eq!(values(&q), vec!["a", "b", "c", "d"]);
        q.reverse_k(3);
        assert_eq!(values(&q), vec!["c", "b", "a", "d"]);
        q.reverse_k(1);
        assert_eq!(values(&q), vec!["c", "b", "a", "d"]);

        let mut q = Queue::new();
        q.swap();
        q.reverse();
        q.reverse_k(2);
        assert!(q.is_empty());
    }

    #[test]
    fn sort_ascending_then_descending() {
        let mut q = queue(&["pear", "Apple", "fig", "apple", "fig", ""]);
        q.sort(false);
        let ascending = values(&q).into_iter().map(String::from).collect::<Vec<_>>();
        assert_eq!(ascending, vec!["", "Apple", "apple", "fig", "fig", "pear"]);

        let before = q.clone();
        q.sort(false);
        assert_eq!(q, before);

        q.sort(true);
        let mut descending = values(&q).into_iter().map(String::from).collect::<Vec<_>>();
        descending.reverse();
        assert_eq!(descending, ascending);
    }

    #[test]
    fn ascend_and_descend() {
        let mut q = queue(&["5", "3", "4", "1", "2"]);
        assert_eq!(q.ascend(), 2);
        assert_eq!(values(&q), vec!["1", "2"]);

        let mut q = queue(&["5", "3", "4", "1", "2"]);
        assert_eq!(q.descend(), 3);
        assert_eq!(values(&q), vec!["5", "4", "2"]);

        assert_eq!(Queue::new().ascend(), 0);
        assert_eq!(Queue::new().descend(), 0);
        assert_eq!(queue(&["x"]).ascend(), 1);
        assert_eq!(queue(&["x"]).descend(), 1);
    }

    #[test]
    fn debug_lists_values() {
        assert_eq!(format!("{:?}", queue(&["a", "b"])), r#"["a", "b"]"#);
    }

    #[test]
    fn random_operations_against_vec() {
        const WORDS: [&str; 6] = ["ant", "bee", "cat", "cat", "dog", "eel"];
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let mut q = Queue::new();
        let mut model: Vec<String> = Vec::new();

        for _ in 0..2000 {
            match rng.gen_range(0..10) {
                0 | 1 => {
                    let word = WORDS.choose(&mut rng).copied().unwrap_or("ant");
                    q.insert_head(word).unwrap();
                    model.insert(0, word.to_string());
                }
                2 | 3 => {
                    let word = WORDS.choose(&mut rng).copied().unwrap_or("ant");
                    q.insert_tail(word).unwrap();
                    model.push(word.to_string());
                }
                4 => {
                    let expected = if model.is_empty() { None } else { Some(model.remove(0)) };
                    assert_eq!(q.remove_head().map(|e| e.into_value()), expected);
                }
                5 => {
                    assert_eq!(q.remove_tail().map(|e| e.into_value()), model.pop());
                }
                6 => {
                    let result = q.delete_mid();
                    if model.is_empty() {
                        assert_eq!(result, Err(QueueError::Empty));
                    } else {
                        model.remove(model.len() / 2);
                        assert_eq!(result, Ok(()));
                    }
                }
                7 => {
                    let k = rng.gen_range(0..5);
                    q.reverse_k(k);
                    if k >= 2 {
                        for chunk in model.chunks_exact_mut(k) {
                            chunk.reverse();
                        }
                    }
                }
                8 => {
                    let descending = rng.gen_bool(0.5);
                    q.sort(descending);
                    model.sort();
                    if descending {
                        model.reverse();
                    }
                }
                _ => {
                    if model.len() > 12 {
                        q.ascend();
                        let mut kept: Vec<String> = Vec::new();
                        for value in model.iter().rev() {
                            if kept.last().map_or(true, |min| value <= min) {
                                kept.push(value.clone());
                            }
                        }
                        kept.reverse();
                        model = kept;
                    }
                }
            }
            assert_eq!(values(&q), model);
        }
    }
}

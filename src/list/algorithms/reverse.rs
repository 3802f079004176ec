use crate::list::{List, Node};

impl<T> List<T> {
    /// Reverses the order of the list in place.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c', 'd']);
    /// list.reverse();
    /// assert_eq!(list.into_iter().collect::<String>(), "dcba");
    /// ```
    pub fn reverse(&mut self) {
        if let Some(detached) = self.detach_all_nodes() {
            let ghost = self.ghost_node();
            // SAFETY: the list is empty after detaching, so the ghost node is
            // adjacent to itself.
            unsafe { self.attach_nodes(ghost, ghost, detached.reverse()) }
        }
        self.check_links();
    }

    /// Reverses every consecutive block of `k` elements, starting from the front.
    ///
    /// A trailing block with fewer than `k` elements keeps its order. A `k` below
    /// 2 leaves the list unchanged; `k == 2` swaps adjacent pairs, and `k == len`
    /// reverses the whole list.
    ///
    /// # Complexity
    ///
    /// This operation should compute in *O*(*n*) time and *O*(1) memory.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter(['a', 'b', 'c', 'd', 'e']);
    /// list.reverse_in_blocks(2);
    /// assert_eq!(list.iter().collect::<String>(), "badce");
    ///
    /// list.reverse_in_blocks(3);
    /// assert_eq!(list.iter().collect::<String>(), "dabce");
    /// ```
    pub fn reverse_in_blocks(&mut self, k: usize) {
        if k < 2 || self.is_empty() || self.is_singular() {
            return;
        }
        let ghost = self.ghost_node();
        let mut before = ghost;
        // SAFETY: `before` is always a node of the list (or the ghost node), and
        // `front..=back` is a range of `k` non-ghost nodes that follows it.
        unsafe {
            loop {
                let front = Node::next(before);
                let (mut back, mut after, mut count) = (front, front, 0);
                while after != ghost && count < k {
                    back = after;
                    after = Node::next(after);
                    count += 1;
                }
                if count < k {
                    break;
                }
                let block = self.detach_nodes(front, back).reverse();
                self.attach_nodes(before, after, block);
                // the old front closes the reversed block
                before = front;
            }
        }
        self.check_links();
    }
}

#[cfg(test)]
mod tests {
    use crate::List;

    fn reversed_in_blocks(input: &[i32], k: usize) -> Vec<i32> {
        let mut list = List::from_iter(input.iter().copied());
        list.reverse_in_blocks(k);
        assert!(list.links_are_consistent());
        list.into_iter().collect()
    }

    #[test]
    fn reverse_whole() {
        for len in 0..6 {
            let mut list = List::from_iter(0..len);
            list.reverse();
            assert!(list.links_are_consistent());
            assert_eq!(list.into_iter().collect::<Vec<_>>(), (0..len).rev().collect::<Vec<_>>());
        }
    }

    #[test]
    fn reverse_in_blocks_cases() {
        assert_eq!(reversed_in_blocks(&[1, 2, 3, 4, 5], 2), vec![2, 1, 4, 3, 5]);
        assert_eq!(reversed_in_blocks(&[1, 2, 3, 4], 4), vec![4, 3, 2, 1]);
        assert_eq!(reversed_in_blocks(&[1, 2, 3, 4, 5, 6, 7, 8], 3), vec![3, 2, 1, 6, 5, 4, 7, 8]);
        assert_eq!(reversed_in_blocks(&[1, 2, 3], 5), vec![1, 2, 3]);
        assert_eq!(reversed_in_blocks(&[1, 2, 3], 1), vec![1, 2, 3]);
        assert_eq!(reversed_in_blocks(&[1, 2, 3], 0), vec![1, 2, 3]);
        assert_eq!(reversed_in_blocks(&[1], 2), vec![1]);
        assert_eq!(reversed_in_blocks(&[], 2), Vec::<i32>::new());
    }

    #[test]
    fn reverse_in_blocks_matches_chunks() {
        let input: Vec<i32> = (0..23).collect();
        for k in 2..25 {
            let mut expected: Vec<i32> = Vec::new();
            for chunk in input.chunks(k) {
                if chunk.len() == k {
                    expected.extend(chunk.iter().rev());
                } else {
                    expected.extend(chunk);
                }
            }
            assert_eq!(reversed_in_blocks(&input, k), expected, "k = {}", k);
        }
    }
}

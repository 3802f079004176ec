use crate::list::List;

impl<T> List<T> {
    /// Removes every element that belongs to a run of two or more adjacent equal
    /// elements, and returns how many were removed.
    ///
    /// Only neighbours are compared: sort the list first to drop every value
    /// that occurs more than once.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut list = List::from_iter([1, 1, 2, 3, 3, 3, 1]);
    /// assert_eq!(list.remove_duplicate_runs(), 5);
    /// assert_eq!(list.into_iter().collect::<Vec<_>>(), vec![2, 1]);
    /// ```
    pub fn remove_duplicate_runs(&mut self) -> usize
    where
        T: PartialEq,
    {
        self.remove_duplicate_runs_by(|a, b| a == b)
    }

    /// Like [`List::remove_duplicate_runs`], with a custom equality.
    pub fn remove_duplicate_runs_by<F>(&mut self, mut same: F) -> usize
    where
        F: FnMut(&T, &T) -> bool,
    {
        let mut removed = 0;
        // whether the current element is equal to the one removed before it
        let mut in_run = false;
        let mut cursor = self.cursor_start_mut();
        loop {
            let joins_next = match cursor.current() {
                None => break,
                Some(current) => cursor.peek_next().map_or(false, |next| same(current, next)),
            };
            if joins_next || in_run {
                cursor.remove();
                removed += 1;
            } else {
                cursor.move_next_cyclic();
            }
            in_run = joins_next;
        }
        self.check_links();
        removed
    }
}

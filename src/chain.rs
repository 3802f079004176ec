//! A doubly-linked chain of queue contexts, used to hand a set of queues to
//! [`merge_all`](crate::merge_all).
//!
//! The chain shares each node between its two neighbours with [`StaticRc`]
//! halves, and guards every node with a [`GhostCell`] branded by a
//! [`GhostToken`], so no `unsafe` is needed to walk or relink it. The chain
//! owns its token, and drains itself when dropped.
//!
//! # Examples
//!
//! ```
//! use cyclic_queue::{merge_all, Chain, GhostToken, Queue, QueueContext};
//!
//! let mut a = Queue::from_values(["b", "d"]).unwrap();
//! let mut b = Queue::from_values(["c", "a"]).unwrap();
//!
//! let merged = GhostToken::new(|token| {
//!     let mut chain = Chain::new(token);
//!     chain.push_back(QueueContext::new(&mut a, 0));
//!     chain.push_back(QueueContext::absent(1));
//!     chain.push_back(QueueContext::new(&mut b, 2));
//!     assert_eq!(chain.len(), 3);
//!     merge_all(&mut chain, false)
//! });
//! assert_eq!(merged, 4);
//! assert_eq!(a.values().collect::<Vec<_>>(), vec!["a", "b", "c", "d"]);
//! assert!(b.is_empty());
//! ```
use crate::queue::Queue;
use ghost_cell::{GhostCell, GhostToken};
use static_rc::StaticRc;
use std::ops::Deref;

/// One queue taking part in a merge. It borrows the queue, it does not own it.
///
/// A context may also stand for an absent queue, which a merge skips.
#[derive(Debug)]
pub struct QueueContext<'q> {
    queue: Option<&'q mut Queue>,
    id: usize,
}

impl<'q> QueueContext<'q> {
    pub fn new(queue: &'q mut Queue, id: usize) -> Self {
        Self {
            queue: Some(queue),
            id,
        }
    }

    pub fn absent(id: usize) -> Self {
        Self { queue: None, id }
    }

    pub fn id(&self) -> usize {
        self.id
    }

    pub fn queue(&self) -> Option<&Queue> {
        self.queue.as_deref()
    }

    pub fn into_queue(self) -> Option<&'q mut Queue> {
        self.queue
    }
}

pub struct Chain<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    token: GhostToken<'id>,
}

struct Node<'id, T> {
    links: [Option<NodePtr<'id, T>>; 2],
    elem: T,
}

type NodePtr<'id, T> = Half<GhostCell<'id, Node<'id, T>>>;

type Half<T> = StaticRc<T, 1, 2>;
type Full<T> = StaticRc<T, 2, 2>;

impl<'id, T> Node<'id, T> {
    const NEXT: usize = 0;
    fn next(&self) -> Option<&NodePtr<'id, T>> {
        self.links[Self::NEXT].as_ref()
    }
    fn new(elem: T) -> Self {
        let links = [None, None];
        Self { elem, links }
    }
}

impl<'id, T> Chain<'id, T> {
    const HEAD: usize = 0;
    const TAIL: usize = 1;

    fn head(&self) -> Option<&NodePtr<'id, T>> {
        self.links[Self::HEAD].as_ref()
    }
    fn push_at(&mut self, side: usize, elem: T) {
        let oppo = 1 - side;
        let token = &mut self.token;
        let (left, right) = Full::split(Full::new(GhostCell::new(Node::new(elem))));
        match self.links[side].take() {
            Some(this_side) => {
                this_side.deref().borrow_mut(token).links[oppo] = Some(left);
                right.deref().borrow_mut(token).links[side] = Some(this_side);
            }
            None => self.links[oppo] = Some(left),
        }
        self.links[side] = Some(right);
    }
    fn pop_at(&mut self, side: usize) -> Option<T> {
        debug_assert!(side < 2);
        let oppo = 1 - side;
        let token = &mut self.token;
        let right = self.links[side].take()?;
        let left = match right.deref().borrow_mut(token).links[side].take() {
            Some(this_side) => {
                let left = this_side.deref().borrow_mut(token).links[oppo]
                    .take()
                    .expect("a linked node holds both of its halves");
                self.links[side] = Some(this_side);
                left
            }
            None => self.links[oppo]
                .take()
                .expect("a single node is held by both ends"),
        };
        Some(Full::into_box(Full::join(left, right)).into_inner().elem)
    }
}

impl<'id, T> Chain<'id, T> {
    /// Creates an empty chain that owns `token` for its whole life.
    pub fn new(token: GhostToken<'id>) -> Self {
        let links = [None, None];
        Self { links, token }
    }
    pub fn is_empty(&self) -> bool {
        self.head().is_none()
    }
    /// Counts the elements by walking the chain.
    pub fn len(&self) -> usize {
        let mut len = 0;
        let mut node = self.head();
        while let Some(ptr) = node {
            len += 1;
            node = ptr.deref().borrow(&self.token).next();
        }
        len
    }
    pub fn push_back(&mut self, elem: T) {
        self.push_at(Self::TAIL, elem);
    }
    pub fn pop_back(&mut self) -> Option<T> {
        self.pop_at(Self::TAIL)
    }
    pub fn push_front(&mut self, elem: T) {
        self.push_at(Self::HEAD, elem);
    }
    pub fn pop_front(&mut self) -> Option<T> {
        self.pop_at(Self::HEAD)
    }
    pub fn clear(&mut self) {
        while self.pop_front().is_some() {}
    }
}

// Each node must be rejoined from its two halves before it is freed, so the
// halves are never dropped one by one.
impl<'id, T> Drop for Chain<'id, T> {
    fn drop(&mut self) {
        self.clear();
    }
}

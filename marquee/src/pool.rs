use alloc::vec::Vec;
use core::fmt;

struct Node<T> {
    value: Option<T>,
    next: Option<usize>,
}

/// A FIFO of reusable instances, stored as a singly linked list over a slab.
///
/// `enqueue` appends at the tail and `dequeue` pops the head, both in `O(1)`. Freed slots are
/// recycled, so a pool that oscillates around a steady size stops allocating.
pub struct ReuseQueue<T> {
    nodes: Vec<Node<T>>,
    free: Vec<usize>,
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl<T> ReuseQueue<T> {
    pub fn new() -> Self {
        Self {
            nodes: Vec::new(),
            free: Vec::new(),
            head: None,
            tail: None,
            len: 0,
        }
    }

    pub fn enqueue(&mut self, value: T) {
        let node = Node {
            value: Some(value),
            next: None,
        };
        let slot = match self.free.pop() {
            Some(slot) => {
                self.nodes[slot] = node;
                slot
            }
            None => {
                self.nodes.push(node);
                self.nodes.len() - 1
            }
        };
        match self.tail {
            Some(tail) => self.nodes[tail].next = Some(slot),
            None => self.head = Some(slot),
        }
        self.tail = Some(slot);
        self.len += 1;
    }

    pub fn dequeue(&mut self) -> Option<T> {
        let head = self.head?;
        let node = &mut self.nodes[head];
        let value = node.value.take();
        debug_assert!(value.is_some(), "linked slot without a value");
        self.head = node.next.take();
        if self.head.is_none() {
            self.tail = None;
        }
        self.free.push(head);
        self.len -= 1;
        value
    }

    pub fn front(&self) -> Option<&T> {
        self.head.and_then(|h| self.nodes[h].value.as_ref())
    }

    pub fn rear(&self) -> Option<&T> {
        self.tail.and_then(|t| self.nodes[t].value.as_ref())
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Drops every held instance and releases the slab.
    pub fn clear(&mut self) {
        self.nodes.clear();
        self.free.clear();
        self.head = None;
        self.tail = None;
        self.len = 0;
    }

    /// Iterates from head (next to be dequeued) to tail.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter {
            nodes: &self.nodes,
            cursor: self.head,
            remaining: self.len,
        }
    }
}

impl<T> Default for ReuseQueue<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: fmt::Debug> fmt::Debug for ReuseQueue<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

pub struct Iter<'a, T> {
    nodes: &'a [Node<T>],
    cursor: Option<usize>,
    remaining: usize,
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        let slot = self.cursor?;
        let node = &self.nodes[slot];
        self.cursor = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        node.value.as_ref()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<'a, T> IntoIterator for &'a ReuseQueue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

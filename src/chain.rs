//! Singly-linked node chain with a fixed upper bound on its length.
//!
//! Every node is owned by its predecessor, the first one by the chain
//! itself. Removal always happens at the head; the insertion end is chosen
//! by the [`Discipline`] type parameter, which is what separates the queue
//! from the stack.

use std::iter::FusedIterator;
use std::marker::PhantomData;
use std::ptr::NonNull;

use crate::error::{CapacityError, ContainerKind, EmptyError, Rejected};


struct Node<T> {
    value: T,
    next: Link<T>
}


// Nodes are allocated with `Box::leak` and reclaimed with `Box::from_raw` in
// `remove`, so no `Box` is alive while the chain hands out raw links.
type Link<T> = Option<NonNull<Node<T>>>;


/// End of the chain that receives new nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum End {
    Head,
    Tail
}


pub trait Discipline {
    const INSERT_AT: End;
    const KIND: ContainerKind;
}


/// First in, first out: insert at the tail, remove at the head.
#[derive(Debug)]
pub struct Fifo;


/// Last in, first out: insert and remove at the head.
#[derive(Debug)]
pub struct Lifo;


impl Discipline for Fifo {
    const INSERT_AT: End = End::Tail;
    const KIND: ContainerKind = ContainerKind::Queue;
}


impl Discipline for Lifo {
    const INSERT_AT: End = End::Head;
    const KIND: ContainerKind = ContainerKind::Stack;
}


pub struct BoundedChain<T, D: Discipline> {
    capacity: usize,
    len: usize,
    head: Link<T>,
    // Last node reachable from `head`. Only kept for `End::Tail` insertion,
    // always `None` otherwise.
    tail: Link<T>,
    marker: PhantomData<(Box<Node<T>>, D)>
}


impl<T, D: Discipline> BoundedChain<T, D> {
    pub fn with_capacity(capacity: usize) -> BoundedChain<T, D> {
        BoundedChain {
            capacity: capacity,
            len: 0,
            head: None,
            tail: None,
            marker: PhantomData
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn check_room(&self) -> Result<(), CapacityError> {
        if self.capacity == 0 {
            Err(CapacityError::ZeroCapacity { kind: D::KIND })
        } else if self.len == self.capacity {
            Err(CapacityError::Full { kind: D::KIND, capacity: self.capacity })
        } else {
            Ok(())
        }
    }

    /// Links `value` in at the discipline's insertion end.
    ///
    /// A full (or zero-capacity) chain is left untouched: the refusal is
    /// logged and the value comes back inside the error.
    pub fn insert(&mut self, value: T) -> Result<(), Rejected<T>> {
        if let Err(reason) = self.check_room() {
            tracing::warn!(kind = %D::KIND, capacity = self.capacity, len = self.len, "{}", reason);
            return Err(Rejected::new(value, reason));
        }
        match D::INSERT_AT {
            End::Head => self.link_head(value),
            End::Tail => self.link_tail(value)
        }
        self.len += 1;
        Ok(())
    }

    fn link_head(&mut self, value: T) {
        let node = Box::leak(Box::new(Node { value: value, next: self.head }));
        self.head = Some(NonNull::from(node));
    }

    fn link_tail(&mut self, value: T) {
        let node = NonNull::from(Box::leak(Box::new(Node { value: value, next: None })));
        match self.tail {
            // SAFETY: `tail` is the last live node of this chain; only its
            // `next` field is written, through the raw pointer.
            Some(tail) => unsafe { (*tail.as_ptr()).next = Some(node) },
            None => self.head = Some(node)
        }
        self.tail = Some(node);
    }

    /// Unlinks the head node and returns its value.
    pub fn remove(&mut self) -> Result<T, EmptyError> {
        let head = self.head.ok_or(EmptyError { kind: D::KIND })?;
        // SAFETY: `head` came from `Box::leak` in this chain and is unlinked
        // right here, so it is reclaimed exactly once.
        let node = unsafe { Box::from_raw(head.as_ptr()) };
        self.head = node.next;
        if self.head.is_none() {
            self.tail = None;
        }
        self.len -= 1;
        Ok(node.value)
    }

    pub fn peek(&self) -> Result<&T, EmptyError> {
        // SAFETY: `head` is live for as long as `self` is borrowed.
        self.head.map(|node| unsafe { &(*node.as_ptr()).value }).ok_or(EmptyError { kind: D::KIND })
    }

    pub fn peek_mut(&mut self) -> Result<&mut T, EmptyError> {
        // SAFETY: as in `peek`, with `self` borrowed exclusively.
        self.head.map(|node| unsafe { &mut (*node.as_ptr()).value }).ok_or(EmptyError { kind: D::KIND })
    }

    /// Releases every node, one at a time. Capacity is kept.
    pub fn clear(&mut self) {
        if self.len > 0 {
            tracing::trace!(kind = %D::KIND, len = self.len, "releasing node chain");
        }
        while self.remove().is_ok() {}
    }

    /// Drops the current contents and takes over `capacity`.
    pub fn reset(&mut self, capacity: usize) {
        self.clear();
        self.capacity = capacity;
    }

    pub fn iter(&self) -> Iter<'_, T> {
        Iter { next: self.head, remaining: self.len, marker: PhantomData }
    }
}


// Every node is exclusively owned by the chain, same as `std`'s `LinkedList`.
unsafe impl<T: Send, D: Discipline> Send for BoundedChain<T, D> {}
unsafe impl<T: Sync, D: Discipline> Sync for BoundedChain<T, D> {}


impl<T, D: Discipline> Drop for BoundedChain<T, D> {
    fn drop(&mut self) {
        self.clear();
    }
}


/// Borrowing walk from the head of a chain to its last node.
pub struct Iter<'a, T: 'a> {
    next: Link<T>,
    remaining: usize,
    marker: PhantomData<&'a Node<T>>
}


impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        self.next.map(|node| {
            // SAFETY: the chain is borrowed for `'a`, so no node is freed or
            // mutated while the walk is alive.
            let node = unsafe { &*node.as_ptr() };
            self.next = node.next;
            self.remaining -= 1;
            &node.value
        })
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}


impl<'a, T> ExactSizeIterator for Iter<'a, T> {}


impl<'a, T> FusedIterator for Iter<'a, T> {}


impl<'a, T> Clone for Iter<'a, T> {
    fn clone(&self) -> Iter<'a, T> {
        Iter { next: self.next, remaining: self.remaining, marker: PhantomData }
    }
}


#[cfg(test)]
mod tests {
    use super::{BoundedChain, Discipline, End, Fifo, Lifo};
    use crate::error::{CapacityError, ContainerKind, EmptyError};
    use std::io::{self, Write};
    use std::sync::{Arc, Mutex};
    use tracing::subscriber::with_default;
    use tracing_subscriber::fmt;

    fn assert_links<T, D: Discipline>(chain: &BoundedChain<T, D>) {
        assert_eq!(chain.iter().count(), chain.len());
        assert!(chain.len() <= chain.capacity());
        let mut last = chain.head;
        while let Some(node) = last.and_then(|node| unsafe { node.as_ref().next }) {
            last = Some(node);
        }
        match D::INSERT_AT {
            End::Tail => assert_eq!(chain.tail, last),
            End::Head => assert!(chain.tail.is_none())
        }
    }

    #[test]
    fn test_fifo_links() {
        let mut chain: BoundedChain<i32, Fifo> = BoundedChain::with_capacity(3);
        for value in 1..4 {
            chain.insert(value).unwrap();
            assert_links(&chain);
        }
        assert_eq!(chain.iter().cloned().collect::<Vec<_>>(), vec![1, 2, 3]);
        assert_eq!(chain.remove(), Ok(1));
        assert_links(&chain);
        chain.insert(4).unwrap();
        assert_links(&chain);
        assert_eq!(chain.iter().cloned().collect::<Vec<_>>(), vec![2, 3, 4]);
    }

    #[test]
    fn test_lifo_links() {
        let mut chain: BoundedChain<i32, Lifo> = BoundedChain::with_capacity(3);
        for value in 1..4 {
            chain.insert(value).unwrap();
            assert_links(&chain);
        }
        assert_eq!(chain.iter().cloned().collect::<Vec<_>>(), vec![3, 2, 1]);
        assert_eq!(chain.remove(), Ok(3));
        assert_links(&chain);
    }

    #[test]
    fn test_insert_after_remove_appends_at_tail() {
        let mut chain: BoundedChain<String, Fifo> = BoundedChain::with_capacity(4);
        chain.insert(String::from("a")).unwrap();
        chain.insert(String::from("b")).unwrap();
        assert_eq!(chain.remove().unwrap(), "a");
        chain.insert(String::from("c")).unwrap();
        assert_links(&chain);

        chain.peek_mut().unwrap().push('!');
        chain.insert(String::from("d")).unwrap();
        assert_eq!(chain.remove().unwrap(), "b!");
        assert_eq!(chain.remove().unwrap(), "c");
        chain.insert(String::from("e")).unwrap();
        assert_links(&chain);
        assert_eq!(chain.iter().cloned().collect::<Vec<_>>(), vec!["d", "e"]);
    }

    #[test]
    fn test_lifo_keeps_no_tail() {
        let mut chain: BoundedChain<i32, Lifo> = BoundedChain::with_capacity(2);
        chain.insert(1).unwrap();
        assert!(chain.tail.is_none());
        chain.insert(2).unwrap();
        assert_eq!(chain.remove(), Ok(2));
        chain.insert(3).unwrap();
        assert!(chain.tail.is_none());
        assert_links(&chain);
    }

    #[test]
    fn test_drain_resets_tail() {
        let mut chain: BoundedChain<i32, Fifo> = BoundedChain::with_capacity(2);
        chain.insert(1).unwrap();
        chain.insert(2).unwrap();
        chain.remove().unwrap();
        chain.remove().unwrap();
        assert!(chain.tail.is_none());
        assert_eq!(chain.remove(), Err(EmptyError { kind: ContainerKind::Queue }));
        chain.insert(5).unwrap();
        assert_links(&chain);
        assert_eq!(chain.peek(), Ok(&5));
    }

    #[test]
    fn test_check_room() {
        let zero: BoundedChain<u8, Lifo> = BoundedChain::with_capacity(0);
        assert_eq!(zero.check_room(), Err(CapacityError::ZeroCapacity { kind: ContainerKind::Stack }));

        let mut one: BoundedChain<u8, Lifo> = BoundedChain::with_capacity(1);
        assert_eq!(one.check_room(), Ok(()));
        one.insert(9).unwrap();
        assert_eq!(one.check_room(), Err(CapacityError::Full { kind: ContainerKind::Stack, capacity: 1 }));
        assert_eq!(one.insert(10).unwrap_err().into_inner(), 10);
        assert_eq!(one.len(), 1);
    }

    struct CaptureWriter {
        buffer: Arc<Mutex<Vec<u8>>>
    }

    impl Write for CaptureWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.buffer.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_rejection_is_logged() {
        let buffer: Arc<Mutex<Vec<u8>>> = Arc::new(Mutex::new(Vec::new()));
        let writer_source = buffer.clone();
        let subscriber = fmt::SubscriberBuilder::default()
            .with_writer(move || CaptureWriter { buffer: writer_source.clone() })
            .with_ansi(false)
            .finish();

        with_default(subscriber, || {
            let mut chain: BoundedChain<i32, Fifo> = BoundedChain::with_capacity(1);
            chain.insert(1).unwrap();
            assert!(chain.insert(2).is_err());
            let mut zero: BoundedChain<i32, Lifo> = BoundedChain::with_capacity(0);
            assert!(zero.insert(3).is_err());
        });

        let logs = String::from_utf8(buffer.lock().unwrap().clone()).unwrap();
        assert!(logs.contains("WARN"));
        assert!(logs.contains("queue is full (capacity 1)"));
        assert!(logs.contains("stack has capacity of 0"));
    }

    #[test]
    fn test_reset_takes_new_capacity() {
        let mut chain: BoundedChain<i32, Fifo> = BoundedChain::with_capacity(2);
        chain.insert(1).unwrap();
        chain.reset(5);
        assert!(chain.is_empty());
        assert_eq!(chain.capacity(), 5);
        assert_links(&chain);
    }

    #[test]
    fn test_long_chain_teardown() {
        let count = 200_000;
        let mut chain: BoundedChain<usize, Lifo> = BoundedChain::with_capacity(count);
        for value in 0..count {
            chain.insert(value).unwrap();
        }
        drop(chain);
    }

    #[test]
    fn test_iter_is_restartable() {
        let mut chain: BoundedChain<i32, Fifo> = BoundedChain::with_capacity(3);
        chain.insert(7).unwrap();
        chain.insert(8).unwrap();
        let iter = chain.iter();
        assert_eq!(iter.len(), 2);
        assert_eq!(iter.clone().collect::<Vec<_>>(), vec![&7, &8]);
        assert_eq!(iter.collect::<Vec<_>>(), vec![&7, &8]);
        assert_eq!(chain.iter().count(), 2);
    }
}

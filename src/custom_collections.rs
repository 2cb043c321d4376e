use std::fmt;
use std::iter::FromIterator;

use crate::chain::{BoundedChain, Fifo, Iter, Lifo};
use crate::error::{EmptyError, Rejected};


/// First-in, first-out container holding at most `total_capacity()` items.
///
/// ```
/// use bounded_chains::Queue;
///
/// let mut queue = Queue::with_capacity(2);
/// queue.enqueue(1).unwrap();
/// queue.enqueue(2).unwrap();
/// assert!(queue.enqueue(3).is_err());
/// assert_eq!(queue.dequeue(), Ok(1));
/// ```
pub struct Queue<T> {
    chain: BoundedChain<T, Fifo>
}


impl<T> Queue<T> {
    /// Creates an empty queue. A capacity of 0 is accepted, but every
    /// insertion into such a queue is refused.
    pub fn with_capacity(capacity: usize) -> Queue<T> {
        Queue { chain: BoundedChain::with_capacity(capacity) }
    }

    /// Builds a queue sized exactly to `items`, the first item at the front.
    pub fn from_items<I: IntoIterator<Item=T>>(items: I) -> Queue<T> {
        let items: Vec<T> = items.into_iter().collect();
        let mut queue = Queue::with_capacity(items.len());
        queue.fill(items);
        queue
    }

    /// Appends `item` behind the rear element.
    ///
    /// When the queue is full (or has no capacity at all) nothing changes:
    /// a warning is logged and the item is returned in the error.
    pub fn enqueue(&mut self, item: T) -> Result<(), Rejected<T>> {
        self.chain.insert(item)
    }

    pub fn dequeue(&mut self) -> Result<T, EmptyError> {
        self.chain.remove()
    }

    pub fn front(&self) -> Result<&T, EmptyError> {
        self.chain.peek()
    }

    pub fn front_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.chain.peek_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn total_capacity(&self) -> usize {
        self.chain.capacity()
    }

    pub fn clear(&mut self) {
        self.chain.clear()
    }

    /// Front to rear.
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    // Callers size the queue for `items` beforehand.
    fn fill<I: IntoIterator<Item=T>>(&mut self, items: I) {
        for item in items {
            let _ = self.enqueue(item);
        }
    }
}


impl<T: Clone> Clone for Queue<T> {
    fn clone(&self) -> Queue<T> {
        let mut queue = Queue::with_capacity(self.total_capacity());
        queue.fill(self.iter().cloned());
        queue
    }

    /// Assignment: the current nodes are released and the capacity of
    /// `source` is adopted before its elements are copied over.
    fn clone_from(&mut self, source: &Queue<T>) {
        self.chain.reset(source.total_capacity());
        self.fill(source.iter().cloned());
    }
}


impl<T> FromIterator<T> for Queue<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iterable: I) -> Queue<T> {
        Queue::from_items(iterable)
    }
}


impl<T, const N: usize> From<[T; N]> for Queue<T> {
    fn from(items: [T; N]) -> Queue<T> {
        Queue::from_items(items)
    }
}


impl<'a, T> IntoIterator for &'a Queue<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}


impl<T: PartialEq> PartialEq for Queue<T> {
    fn eq(&self, other: &Queue<T>) -> bool {
        self.total_capacity() == other.total_capacity() && self.iter().eq(other.iter())
    }
}


impl<T: Eq> Eq for Queue<T> {}


impl<T: fmt::Debug> fmt::Debug for Queue<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}


/// Last-in, first-out container holding at most `total_capacity()` items.
///
/// ```
/// use bounded_chains::Stack;
///
/// let mut stack = Stack::from_items(vec!["a", "b", "c"]);
/// assert_eq!(stack.top(), Ok(&"c"));
/// assert_eq!(stack.pop(), Ok("c"));
/// ```
pub struct Stack<T> {
    chain: BoundedChain<T, Lifo>
}


impl<T> Stack<T> {
    /// Creates an empty stack. A capacity of 0 is accepted, but every
    /// insertion into such a stack is refused.
    pub fn with_capacity(capacity: usize) -> Stack<T> {
        Stack { chain: BoundedChain::with_capacity(capacity) }
    }

    /// Builds a stack sized exactly to `items`. Items are pushed in order,
    /// so the last one ends up on top.
    pub fn from_items<I: IntoIterator<Item=T>>(items: I) -> Stack<T> {
        let items: Vec<T> = items.into_iter().collect();
        let mut stack = Stack::with_capacity(items.len());
        stack.fill(items);
        stack
    }

    /// Places `item` on top.
    ///
    /// When the stack is full (or has no capacity at all) nothing changes:
    /// a warning is logged and the item is returned in the error.
    pub fn push(&mut self, item: T) -> Result<(), Rejected<T>> {
        self.chain.insert(item)
    }

    pub fn pop(&mut self) -> Result<T, EmptyError> {
        self.chain.remove()
    }

    pub fn top(&self) -> Result<&T, EmptyError> {
        self.chain.peek()
    }

    pub fn top_mut(&mut self) -> Result<&mut T, EmptyError> {
        self.chain.peek_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.chain.is_empty()
    }

    pub fn len(&self) -> usize {
        self.chain.len()
    }

    pub fn total_capacity(&self) -> usize {
        self.chain.capacity()
    }

    pub fn clear(&mut self) {
        self.chain.clear()
    }

    /// Top to bottom.
    pub fn iter(&self) -> Iter<'_, T> {
        self.chain.iter()
    }

    // Callers size the stack for `items` beforehand.
    fn fill<I: IntoIterator<Item=T>>(&mut self, items: I) {
        for item in items {
            let _ = self.push(item);
        }
    }
}


impl<T: Clone> Stack<T> {
    /// Pushes copies of `source` so that they come out in the same order.
    ///
    /// Walking `source` top to bottom and pushing directly would reverse it,
    /// so the copies are staged on a temporary stack first and popped back.
    fn copy_from(&mut self, source: &Stack<T>) {
        let mut staging = Stack::with_capacity(source.total_capacity());
        staging.fill(source.iter().cloned());
        while let Ok(item) = staging.pop() {
            let _ = self.push(item);
        }
    }
}


impl<T: Clone> Clone for Stack<T> {
    fn clone(&self) -> Stack<T> {
        let mut stack = Stack::with_capacity(self.total_capacity());
        stack.copy_from(self);
        stack
    }

    /// Assignment: the current nodes are released and the capacity of
    /// `source` is adopted before its elements are copied over.
    fn clone_from(&mut self, source: &Stack<T>) {
        self.chain.reset(source.total_capacity());
        self.copy_from(source);
    }
}


impl<T> FromIterator<T> for Stack<T> {
    fn from_iter<I: IntoIterator<Item=T>>(iterable: I) -> Stack<T> {
        Stack::from_items(iterable)
    }
}


impl<T, const N: usize> From<[T; N]> for Stack<T> {
    fn from(items: [T; N]) -> Stack<T> {
        Stack::from_items(items)
    }
}


impl<'a, T> IntoIterator for &'a Stack<T> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}


impl<T: PartialEq> PartialEq for Stack<T> {
    fn eq(&self, other: &Stack<T>) -> bool {
        self.total_capacity() == other.total_capacity() && self.iter().eq(other.iter())
    }
}


impl<T: Eq> Eq for Stack<T> {}


impl<T: fmt::Debug> fmt::Debug for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_list().entries(self.iter()).finish()
    }
}

use std::error::Error;
use std::fmt;


/// Which of the two bounded containers an error or diagnostic refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContainerKind {
    Queue,
    Stack
}


impl fmt::Display for ContainerKind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            ContainerKind::Queue => write!(f, "queue"),
            ContainerKind::Stack => write!(f, "stack")
        }
    }
}


/// Why an insertion was refused.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
pub enum CapacityError {
    #[error("{kind} has capacity of 0")]
    ZeroCapacity { kind: ContainerKind },
    #[error("{kind} is full (capacity {capacity})")]
    Full { kind: ContainerKind, capacity: usize }
}


/// Access to the front/top of a container that holds no elements.
#[derive(Debug, thiserror::Error, Clone, Copy, PartialEq, Eq)]
#[error("{kind} is empty")]
pub struct EmptyError {
    pub kind: ContainerKind
}


/// An insertion that was skipped. The container is left untouched and the
/// item is handed back to the caller.
#[derive(Clone, PartialEq, Eq)]
pub struct Rejected<T> {
    item: T,
    reason: CapacityError
}


impl<T> Rejected<T> {
    pub fn new(item: T, reason: CapacityError) -> Rejected<T> {
        Rejected { item: item, reason: reason }
    }

    pub fn reason(&self) -> CapacityError {
        self.reason
    }

    pub fn item(&self) -> &T {
        &self.item
    }

    /// Returns the value that could not be inserted.
    pub fn into_inner(self) -> T {
        self.item
    }
}


// Hand-written so that `T` does not need to be `Debug` to print the reason.
impl<T> fmt::Debug for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Rejected").field("reason", &self.reason).finish_non_exhaustive()
    }
}


impl<T> fmt::Display for Rejected<T> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "insertion rejected: {}", self.reason)
    }
}


impl<T> Error for Rejected<T> {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        Some(&self.reason)
    }
}


#[cfg(test)]
mod tests {
    use super::{CapacityError, ContainerKind, EmptyError, Rejected};

    #[test]
    fn test_messages() {
        let zero = CapacityError::ZeroCapacity { kind: ContainerKind::Queue };
        let full = CapacityError::Full { kind: ContainerKind::Stack, capacity: 3 };
        assert_eq!(zero.to_string(), "queue has capacity of 0");
        assert_eq!(full.to_string(), "stack is full (capacity 3)");
        assert_eq!(EmptyError { kind: ContainerKind::Stack }.to_string(), "stack is empty");
    }

    #[test]
    fn test_rejected_hands_item_back() {
        let reason = CapacityError::Full { kind: ContainerKind::Queue, capacity: 1 };
        let rejected = Rejected::new(String::from("late"), reason);
        assert_eq!(rejected.reason(), reason);
        assert_eq!(rejected.item(), "late");
        assert_eq!(rejected.to_string(), "insertion rejected: queue is full (capacity 1)");
        assert_eq!(rejected.into_inner(), "late");
    }
}

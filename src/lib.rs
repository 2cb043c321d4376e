//! Bounded FIFO and LIFO containers over singly-linked node chains.
//!
//! Both [`Queue`] and [`Stack`] take their capacity at construction and never
//! grow past it. An insertion into a full container is skipped and logged;
//! reading from an empty one yields an [`EmptyError`].


mod chain;
mod custom_collections;
mod error;

pub mod cli;
pub mod demo;


pub use chain::Iter;
pub use custom_collections::{Queue, Stack};
pub use error::{CapacityError, ContainerKind, EmptyError, Rejected};

//! Hand-written sequential containers used as traversal frontiers.

mod queue;
mod stack;

pub use self::{
    queue::{Iter as QueueIter, LinkedQueue},
    stack::{Iter as StackIter, LinkedStack},
};

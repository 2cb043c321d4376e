//! Scripted walkthroughs of both containers, written to any text sink.
//!
//! Each run exercises the full public contract: filling up to capacity,
//! overflowing, inspecting, draining, reading from an empty container, and
//! building, copying and assigning string containers.

use std::fmt::Display;
use std::io::{self, Write};
use std::iter::FromIterator;

use crate::custom_collections::{Queue, Stack};
use crate::error::{EmptyError, Rejected};


/// Largest capacity a walkthrough accepts; every element is echoed to the
/// output, so larger runs are refused up front.
pub const MAX_CAPACITY: usize = 1024;


#[derive(Debug, thiserror::Error)]
enum ScenarioError {
    #[error(transparent)]
    Io(#[from] io::Error),
    #[error(transparent)]
    Empty(#[from] EmptyError)
}


const NAMES: [&str; 3] = ["Alice", "Bob", "Charlie"];


fn check_capacity(capacity: usize) -> io::Result<()> {
    if capacity > MAX_CAPACITY {
        let message = format!("capacity {} exceeds the walkthrough limit of {}", capacity, MAX_CAPACITY);
        return Err(io::Error::new(io::ErrorKind::InvalidInput, message));
    }
    Ok(())
}


fn write_items<'a, W, I, T>(out: &mut W, items: I) -> io::Result<()>
    where W: Write, I: IntoIterator<Item=&'a T>, T: Display + 'a
{
    for item in items {
        writeln!(out, "{}", item)?;
    }
    Ok(())
}


fn sample_values(capacity: usize) -> Vec<u64> {
    (1..=capacity as u64).map(|n| n * 10).collect()
}


// One past the last sample value.
fn overflow_value(capacity: usize) -> u64 {
    (capacity as u64).saturating_add(1).saturating_mul(10)
}


fn joined(values: &[u64]) -> String {
    values.iter().map(|value| value.to_string()).collect::<Vec<_>>().join(", ")
}


/// Runs `scenario`, reporting an empty-container failure to `out` the way a
/// caller recovering from it would. I/O failures are passed through.
fn run_guarded<W, F>(out: &mut W, scenario: F) -> io::Result<()>
    where W: Write, F: FnOnce(&mut W) -> Result<(), ScenarioError>
{
    match scenario(out) {
        Ok(()) => Ok(()),
        Err(ScenarioError::Empty(error)) => writeln!(out, "Error caught: {}", error),
        Err(ScenarioError::Io(error)) => Err(error)
    }
}


/// Builds a container from `NAMES`, then prints it, a clone of it, and
/// `assigned` after assigning the original into it.
fn copies<W, C>(out: &mut W, label: &str, mut assigned: C, capacity: fn(&C) -> usize) -> io::Result<()>
    where W: Write, C: Clone + FromIterator<String>, for<'a> &'a C: IntoIterator<Item=&'a String>
{
    let names: C = NAMES.iter().map(|name| name.to_string()).collect();
    writeln!(out, "Initializer list {}:", label)?;
    write_items(out, &names)?;

    let copy = names.clone();
    writeln!(out, "Copied {}:", label)?;
    write_items(out, &copy)?;

    assigned.clone_from(&names);
    writeln!(out, "Assigned {} (capacity {}):", label, capacity(&assigned))?;
    write_items(out, &assigned)
}


pub fn run_queue_demo<W: Write>(out: &mut W, capacity: usize) -> io::Result<()> {
    check_capacity(capacity)?;
    run_guarded(out, |out| queue_basics(out, capacity))?;
    copies(out, "queue", Queue::with_capacity(5), Queue::total_capacity)
}


fn queue_basics<W: Write>(out: &mut W, capacity: usize) -> Result<(), ScenarioError> {
    let mut queue = Queue::with_capacity(capacity);
    writeln!(out, "Created queue with capacity: {}", queue.total_capacity())?;

    let values = sample_values(capacity);
    for &value in &values {
        report_rejection(out, queue.enqueue(value))?;
    }
    writeln!(out, "Queue after enqueueing {}:", joined(&values))?;
    write_items(out, &queue)?;

    let extra = overflow_value(capacity);
    writeln!(out, "Trying to enqueue {} (should be full)...", extra)?;
    report_rejection(out, queue.enqueue(extra))?;

    writeln!(out, "Dequeued: {}", queue.dequeue()?)?;
    writeln!(out, "Front after dequeue: {}", queue.front()?)?;

    report_rejection(out, queue.enqueue(extra))?;
    writeln!(out, "Queue after enqueueing {}:", extra)?;
    write_items(out, &queue)?;

    while let Ok(value) = queue.dequeue() {
        writeln!(out, "Dequeued: {}", value)?;
    }
    writeln!(out, "Queue empty? {}", yes_no(queue.is_empty()))?;

    writeln!(out, "Trying to dequeue from empty queue...")?;
    queue.dequeue()?;
    Ok(())
}


pub fn run_stack_demo<W: Write>(out: &mut W, capacity: usize) -> io::Result<()> {
    check_capacity(capacity)?;
    run_guarded(out, |out| stack_basics(out, capacity))?;
    copies(out, "stack", Stack::with_capacity(5), Stack::total_capacity)
}


fn stack_basics<W: Write>(out: &mut W, capacity: usize) -> Result<(), ScenarioError> {
    let mut stack = Stack::with_capacity(capacity);
    writeln!(out, "Created stack with capacity: {}", stack.total_capacity())?;

    let values = sample_values(capacity);
    for &value in &values {
        report_rejection(out, stack.push(value))?;
    }
    writeln!(out, "Stack after pushing {}:", joined(&values))?;
    write_items(out, &stack)?;

    let extra = overflow_value(capacity);
    writeln!(out, "Trying to push {} (should be full)...", extra)?;
    report_rejection(out, stack.push(extra))?;

    writeln!(out, "Top element: {}", stack.top()?)?;
    writeln!(out, "Popped: {}", stack.pop()?)?;
    writeln!(out, "Stack after pop:")?;
    write_items(out, &stack)?;

    report_rejection(out, stack.push(extra))?;
    writeln!(out, "Stack after pushing {}:", extra)?;
    write_items(out, &stack)?;

    while let Ok(value) = stack.pop() {
        writeln!(out, "Popped: {}", value)?;
    }
    writeln!(out, "Stack empty? {}", yes_no(stack.is_empty()))?;

    writeln!(out, "Trying to pop from empty stack...")?;
    stack.pop()?;
    Ok(())
}


fn report_rejection<W: Write, T>(out: &mut W, outcome: Result<(), Rejected<T>>) -> io::Result<()> {
    match outcome {
        Ok(()) => Ok(()),
        Err(rejected) => writeln!(out, "Skipped: {}", rejected.reason())
    }
}


fn yes_no(flag: bool) -> &'static str {
    if flag { "Yes" } else { "No" }
}

//! Frontier structures which decide the order states are explored in.

use std::cmp::{Ord, Ordering, PartialOrd};
use std::collections::{BinaryHeap, VecDeque};
use std::default::Default;

/// Trait used to implement queues of search nodes
/// which have not been explored yet.
pub trait SearchQueue {
    type Item;

    fn pop(&mut self) -> Option<Self::Item>;

    fn push(&mut self, item: Self::Item);

    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Last in, first out.
#[derive(Debug)]
pub struct Stack<T> {
    items: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack { items: Vec::new() }
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Stack::new()
    }
}

impl<T> SearchQueue for Stack<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.items.pop()
    }

    fn push(&mut self, item: Self::Item) {
        self.items.push(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// First in, first out.
#[derive(Debug)]
pub struct Queue<T> {
    items: VecDeque<T>,
}

impl<T> Queue<T> {
    pub fn new() -> Self {
        Queue {
            items: VecDeque::new(),
        }
    }
}

impl<T> Default for Queue<T> {
    fn default() -> Self {
        Queue::new()
    }
}

impl<T> SearchQueue for Queue<T> {
    type Item = T;

    fn pop(&mut self) -> Option<Self::Item> {
        self.items.pop_front()
    }

    fn push(&mut self, item: Self::Item) {
        self.items.push_back(item);
    }

    fn len(&self) -> usize {
        self.items.len()
    }
}

/// Wrapper for queued items which sorts by priority, then by
/// the order in which items were pushed. The item itself is
/// never compared.
#[derive(Debug)]
struct Prioritized<T, P> {
    priority: P,
    sequence: usize,
    item: T,
}

impl<T, P> PartialEq for Prioritized<T, P>
where
    P: PartialOrd,
{
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<T, P> Eq for Prioritized<T, P> where P: PartialOrd {}

// BinaryHeap is a max-heap, so both keys are flipped to pop
// the lowest priority first, and the earliest push among equals.
impl<T, P> Ord for Prioritized<T, P>
where
    P: PartialOrd,
{
    fn cmp(&self, other: &Self) -> Ordering {
        compare(&other.priority, &self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

/// Total order over priorities. Values which can't be compared with
/// themselves (`NaN`) go after every other value, and equal each other.
fn compare<P: PartialOrd>(a: &P, b: &P) -> Ordering {
    match a.partial_cmp(b) {
        Some(ordering) => ordering,
        None => match (a.partial_cmp(a).is_some(), b.partial_cmp(b).is_some()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        },
    }
}

impl<T, P> PartialOrd for Prioritized<T, P>
where
    P: PartialOrd,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// A min-priority queue.
///
/// Items with equal priority are popped in the order they were
/// pushed, which keeps searches reproducible. `NaN` priorities are
/// popped after all others.
#[derive(Debug)]
pub struct PriorityQueue<T, P> {
    heap: BinaryHeap<Prioritized<T, P>>,
    counter: usize,
}

impl<T, P> PriorityQueue<T, P>
where
    P: PartialOrd,
{
    pub fn new() -> Self {
        PriorityQueue {
            heap: BinaryHeap::new(),
            counter: 0,
        }
    }

    pub fn push(&mut self, item: T, priority: P) {
        self.heap.push(Prioritized {
            priority,
            sequence: self.counter,
            item,
        });
        self.counter += 1;
    }

    /// Remove the item with the lowest priority.
    pub fn pop(&mut self) -> Option<T> {
        self.heap.pop().map(|p| p.item)
    }

    /// Priority of the item which would be popped next.
    pub fn peek_priority(&self) -> Option<&P> {
        self.heap.peek().map(|p| &p.priority)
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}

impl<T, P> Default for PriorityQueue<T, P>
where
    P: PartialOrd,
{
    fn default() -> Self {
        PriorityQueue::new()
    }
}

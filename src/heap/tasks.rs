//! A to-do list on top of [MinHeap]: tasks come out ordered by due date,
//! tasks due at the same instant in the order they were added.

use super::MinHeap;
use crate::format::format_due;
use chrono::{Local, NaiveDateTime};
use core::fmt;
use std::cmp::Ordering;
use tracing::debug;
use tracing_attributes::instrument;

/// Heap entry: a task label and its due date.
///
/// Ordered by due date (earlier is smaller), then by label so that the ordering
/// agrees with equality.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TaskNode {
    pub task: String,
    pub due: NaiveDateTime,
}

impl TaskNode {
    pub fn new(task: impl Into<String>, due: NaiveDateTime) -> Self {
        TaskNode { task: task.into(), due }
    }

    pub fn is_late(&self, now: NaiveDateTime) -> bool {
        self.due < now
    }
}

impl Ord for TaskNode {
    fn cmp(&self, other: &Self) -> Ordering {
        self.due.cmp(&other.due).then_with(|| self.task.cmp(&other.task))
    }
}

impl PartialOrd for TaskNode {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for TaskNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}, Due: {}", self.task, format_due(&self.due))
    }
}

/// A task together with its insertion sequence number, used to break ties on the due date
#[derive(Debug, Clone)]
struct Pending {
    sequence: u64,
    node: TaskNode,
}

impl Ord for Pending {
    fn cmp(&self, other: &Self) -> Ordering {
        self.node
            .due
            .cmp(&other.node.due)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Pending {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Pending {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Pending {}

/// Priority queue of tasks, earliest due date first.
#[derive(Debug, Clone, Default)]
pub struct TaskHeap {
    heap: MinHeap<Pending>,
    next_sequence: u64,
}

impl TaskHeap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        TaskHeap {
            heap: MinHeap::with_capacity(capacity),
            next_sequence: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    #[instrument(level = "trace", skip(self, task))]
    pub fn add(&mut self, task: impl Into<String>, due: NaiveDateTime) {
        let node = TaskNode::new(task, due);
        debug!(task = %node.task, "adding task");
        self.heap.push(Pending {
            sequence: self.next_sequence,
            node,
        });
        self.next_sequence += 1;
    }

    /// The task due next, without removing it
    pub fn peek(&self) -> Option<&TaskNode> {
        self.heap.peek().map(|pending| &pending.node)
    }

    /// Removes and returns the task due next
    #[instrument(level = "trace", skip(self))]
    pub fn finish_task(&mut self) -> Option<TaskNode> {
        let finished = self.heap.pop().map(|pending| pending.node);
        if let Some(node) = &finished {
            debug!(task = %node.task, remaining = self.heap.len(), "finished task");
        }
        finished
    }

    /// Outstanding tasks in storage order (not sorted)
    pub fn iter(&self) -> impl Iterator<Item = &TaskNode> {
        self.heap.iter().map(|pending| &pending.node)
    }

    /// Lists all outstanding tasks in storage order. Tasks due before `now` are marked `LATE:`.
    pub fn describe_at(&self, now: NaiveDateTime) -> String {
        let count = self.len();
        let mut out = format!("{count} outstanding task{}\n", if count == 1 { "" } else { "s" });
        self.iter().enumerate().for_each(|(index, node)| {
            let late = if node.is_late(now) { "LATE: " } else { "" };
            out.push_str(&format!("{late}{index}: {node}\n"));
        });
        out
    }
}

impl fmt::Display for TaskHeap {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.describe_at(Local::now().naive_local()))
    }
}

use std::fmt;
use std::str::FromStr;

use tracing::{debug, trace};

use crate::error::ParseTaskError;
use crate::heap::{BinaryHeap, Compare};

type Action = Box<dyn Fn(&str, i32)>;

/// A named unit of work with a priority and the side effect it runs.
pub struct Task {
    name: String,
    priority: i32,
    action: Action,
}

impl Task {
    /// A task whose action prints a line to stdout.
    pub fn new(name: impl Into<String>, priority: i32) -> Self {
        Task::with_action(name, priority, |name, priority| {
            println!(
                "Running the job with name {} and priority {}",
                name, priority
            )
        })
    }

    pub fn with_action<F>(name: impl Into<String>, priority: i32, action: F) -> Self
    where
        F: Fn(&str, i32) + 'static,
    {
        Task {
            name: name.into(),
            priority,
            action: Box::new(action),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn priority(&self) -> i32 {
        self.priority
    }

    pub fn execute(&self) {
        (self.action)(&self.name, self.priority)
    }
}

impl fmt::Debug for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Task")
            .field("name", &self.name)
            .field("priority", &self.priority)
            .finish()
    }
}

/// Parses `name=priority`; the name may itself contain '='.
impl FromStr for Task {
    type Err = ParseTaskError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (name, value) = s
            .rsplit_once('=')
            .ok_or_else(|| ParseTaskError::MissingSeparator(s.to_string()))?;
        let name = name.trim();
        if name.is_empty() {
            return Err(ParseTaskError::EmptyName(s.to_string()));
        }
        let priority = value
            .trim()
            .parse()
            .map_err(|_| ParseTaskError::InvalidPriority {
                name: name.to_string(),
                value: value.to_string(),
            })?;
        Ok(Task::new(name, priority))
    }
}

/// Ranks tasks by strictly greater priority.
#[derive(Debug, Default, Clone, Copy)]
pub struct ByPriority;

impl Compare<Task> for ByPriority {
    fn greater_than(&self, a: &Task, b: &Task) -> bool {
        a.priority > b.priority
    }
}

/// Runs queued tasks highest priority first.
#[derive(Debug, Default)]
pub struct PriorityScheduler {
    queue: BinaryHeap<Task, ByPriority>,
}

impl PriorityScheduler {
    pub fn new() -> Self {
        PriorityScheduler {
            queue: BinaryHeap::with_comparator(ByPriority),
        }
    }

    pub fn enqueue(&mut self, task: Task) {
        debug!(name = %task.name, priority = task.priority, "enqueued task");
        self.queue.insert(task);
    }

    /// The task `run_next` would execute.
    pub fn peek(&self) -> Option<&Task> {
        self.queue.peek_max()
    }

    /// Execute the highest-priority task and remove it from the queue.
    /// An empty queue is a no-op and returns None.
    pub fn run_next(&mut self) -> Option<Task> {
        match self.queue.peek_max() {
            Some(task) => {
                debug!(name = %task.name, priority = task.priority, "running task");
                task.execute();
            }
            None => {
                trace!("run_next on empty queue");
                return None;
            }
        }
        self.queue.remove_max()
    }

    /// Run every queued task, returning how many ran.
    pub fn run_all(&mut self) -> usize {
        let mut ran = 0;
        while self.run_next().is_some() {
            ran += 1;
        }
        ran
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }

    pub fn len(&self) -> usize {
        self.queue.len()
    }
}

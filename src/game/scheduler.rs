//! Delayed tasks driven by an external millisecond clock
//!
//! Nothing here sleeps or spawns: the owner calls [`Scheduler::due`] with the
//! current time and applies whatever fired.

/// Handle for cancelling a scheduled task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskToken(u64);

#[derive(Debug, Clone)]
struct ScheduledTask<A> {
    token: TaskToken,
    fire_at: u64,
    action: A,
}

/// Fire-once timers keyed by token
#[derive(Debug, Clone)]
pub struct Scheduler<A> {
    next_token: u64,
    tasks: Vec<ScheduledTask<A>>,
}

impl<A> Default for Scheduler<A> {
    fn default() -> Self {
        Self {
            next_token: 0,
            tasks: Vec::new(),
        }
    }
}

impl<A> Scheduler<A> {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule `action` to fire `delay_ms` after `now`
    pub fn schedule(&mut self, now: u64, delay_ms: u64, action: A) -> TaskToken {
        let token = TaskToken(self.next_token);
        self.next_token += 1;
        self.tasks.push(ScheduledTask {
            token,
            fire_at: now.saturating_add(delay_ms),
            action,
        });
        token
    }

    /// Cancel a pending task
    ///
    /// Returns false if the task already fired or was cancelled.
    pub fn cancel(&mut self, token: TaskToken) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.token != token);
        self.tasks.len() != before
    }

    #[must_use]
    pub fn is_pending(&self, token: TaskToken) -> bool {
        self.tasks.iter().any(|task| task.token == token)
    }

    /// Remove and return every task due at `now`
    ///
    /// Ordered by fire time, ties broken by scheduling order.
    pub fn due(&mut self, now: u64) -> Vec<A> {
        let (mut fired, pending): (Vec<_>, Vec<_>) = std::mem::take(&mut self.tasks)
            .into_iter()
            .partition(|task| task.fire_at <= now);
        self.tasks = pending;
        fired.sort_by_key(|task| (task.fire_at, task.token));
        fired.into_iter().map(|task| task.action).collect()
    }

    /// Earliest pending fire time
    #[must_use]
    pub fn next_deadline(&self) -> Option<u64> {
        self.tasks.iter().map(|task| task.fire_at).min()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }
}

//! Cancellable delayed actions, single-threaded and cooperative.
//!
//! There is no background timer thread: the host pumps the scheduler from
//! its event loop with [`Scheduler::take_due`]. Every task is addressable
//! through its [`CancelHandle`], so a pending action can always be withdrawn
//! before a stale callback fires against a replaced snapshot.

use std::time::{Duration, Instant};

/// Token for withdrawing a scheduled task.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub struct CancelHandle(u64);

struct Task<Ctx> {
    id: u64,
    due: Instant,
    run: Box<dyn FnOnce(&mut Ctx)>,
}

/// A queue of delayed callbacks over some context type.
pub struct Scheduler<Ctx> {
    tasks: Vec<Task<Ctx>>,
    next_id: u64,
}

impl<Ctx> Scheduler<Ctx> {
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: 0,
        }
    }

    /// Schedule `run` to fire once `delay` has elapsed from now.
    pub fn schedule(
        &mut self,
        delay: Duration,
        run: impl FnOnce(&mut Ctx) + 'static,
    ) -> CancelHandle {
        self.schedule_at(Instant::now() + delay, run)
    }

    /// Schedule `run` for an absolute deadline.
    pub fn schedule_at(
        &mut self,
        due: Instant,
        run: impl FnOnce(&mut Ctx) + 'static,
    ) -> CancelHandle {
        let id = self.next_id;
        self.next_id += 1;
        self.tasks.push(Task {
            id,
            due,
            run: Box::new(run),
        });
        CancelHandle(id)
    }

    /// Withdraw a task. Returns false when it already fired or was cancelled.
    pub fn cancel(&mut self, handle: CancelHandle) -> bool {
        let before = self.tasks.len();
        self.tasks.retain(|task| task.id != handle.0);
        self.tasks.len() != before
    }

    pub fn cancel_all(&mut self) {
        self.tasks.clear();
    }

    pub fn is_idle(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Remove every task whose deadline has passed and hand back its
    /// callback, earliest deadline first. The caller invokes them with its
    /// context; splitting removal from invocation keeps the borrow of the
    /// scheduler out of the callbacks' way.
    pub fn take_due(&mut self, now: Instant) -> Vec<Box<dyn FnOnce(&mut Ctx)>> {
        let mut due: Vec<Task<Ctx>> = Vec::new();
        let mut i = 0;
        while i < self.tasks.len() {
            if self.tasks[i].due <= now {
                due.push(self.tasks.remove(i));
            } else {
                i += 1;
            }
        }
        due.sort_by_key(|task| (task.due, task.id));
        due.into_iter().map(|task| task.run).collect()
    }
}

impl<Ctx> Default for Scheduler<Ctx> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pump(scheduler: &mut Scheduler<Vec<u32>>, log: &mut Vec<u32>, now: Instant) {
        for run in scheduler.take_due(now) {
            run(log);
        }
    }

    #[test]
    fn test_fires_only_once_due() {
        let start = Instant::now();
        let mut scheduler: Scheduler<Vec<u32>> = Scheduler::new();
        let mut log = Vec::new();

        scheduler.schedule_at(start + Duration::from_millis(100), |l| l.push(1));
        pump(&mut scheduler, &mut log, start);
        assert!(log.is_empty());
        assert!(!scheduler.is_idle());

        pump(&mut scheduler, &mut log, start + Duration::from_millis(100));
        assert_eq!(log, vec![1]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn test_cancel_prevents_firing() {
        let start = Instant::now();
        let mut scheduler: Scheduler<Vec<u32>> = Scheduler::new();
        let mut log = Vec::new();

        let handle = scheduler.schedule_at(start + Duration::from_millis(10), |l| l.push(1));
        assert!(scheduler.cancel(handle));
        assert!(!scheduler.cancel(handle));

        pump(&mut scheduler, &mut log, start + Duration::from_secs(1));
        assert!(log.is_empty());
    }

    #[test]
    fn test_due_tasks_run_in_deadline_order() {
        let start = Instant::now();
        let mut scheduler: Scheduler<Vec<u32>> = Scheduler::new();
        let mut log = Vec::new();

        scheduler.schedule_at(start + Duration::from_millis(30), |l| l.push(3));
        scheduler.schedule_at(start + Duration::from_millis(10), |l| l.push(1));
        scheduler.schedule_at(start + Duration::from_millis(20), |l| l.push(2));

        pump(&mut scheduler, &mut log, start + Duration::from_millis(50));
        assert_eq!(log, vec![1, 2, 3]);
    }

    #[test]
    fn test_cancel_all() {
        let start = Instant::now();
        let mut scheduler: Scheduler<Vec<u32>> = Scheduler::new();
        let mut log = Vec::new();

        scheduler.schedule_at(start, |l| l.push(1));
        scheduler.schedule_at(start, |l| l.push(2));
        scheduler.cancel_all();

        pump(&mut scheduler, &mut log, start + Duration::from_secs(1));
        assert!(log.is_empty());
    }
}

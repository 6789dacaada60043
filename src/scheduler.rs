//! Cancellable one-shot timers.

use gloo_timers::callback::Timeout;

/// Runs a task once after a delay. Dropping the returned handle cancels the
/// task if it has not fired yet.
pub trait Scheduler {
    type Handle;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Self::Handle;
}

/// Browser `setTimeout` via `gloo_timers`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TimeoutScheduler;

impl Scheduler for TimeoutScheduler {
    type Handle = Timeout;

    fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> Timeout {
        Timeout::new(delay_ms, task)
    }
}

/// Deterministic clock for tests; time only moves on [`ManualScheduler::advance`].
#[cfg(test)]
pub(crate) mod manual {
    use super::Scheduler;
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};

    struct Task {
        id: u64,
        due: u64,
        run: Box<dyn FnOnce()>,
    }

    #[derive(Default)]
    struct Queue {
        now: u64,
        next_id: u64,
        tasks: Vec<Task>,
    }

    #[derive(Clone, Default)]
    pub struct ManualScheduler {
        queue: Rc<RefCell<Queue>>,
    }

    pub struct ManualHandle {
        id: u64,
        queue: Weak<RefCell<Queue>>,
    }

    impl Drop for ManualHandle {
        fn drop(&mut self) {
            if let Some(queue) = self.queue.upgrade() {
                if let Ok(mut q) = queue.try_borrow_mut() {
                    q.tasks.retain(|t| t.id != self.id);
                }
            }
        }
    }

    impl ManualScheduler {
        pub fn pending(&self) -> usize {
            self.queue.borrow().tasks.len()
        }

        /// Move the clock forward, running every task that comes due in order.
        pub fn advance(&self, ms: u64) {
            let target = self.queue.borrow().now + ms;
            loop {
                let next = {
                    let mut q = self.queue.borrow_mut();
                    let due_idx = q
                        .tasks
                        .iter()
                        .enumerate()
                        .filter(|(_, t)| t.due <= target)
                        .min_by_key(|(_, t)| (t.due, t.id))
                        .map(|(i, _)| i);
                    match due_idx {
                        Some(i) => {
                            let task = q.tasks.remove(i);
                            q.now = task.due;
                            Some(task)
                        }
                        None => {
                            q.now = target;
                            None
                        }
                    }
                };
                match next {
                    Some(task) => (task.run)(),
                    None => break,
                }
            }
        }
    }

    impl Scheduler for ManualScheduler {
        type Handle = ManualHandle;

        fn schedule(&self, delay_ms: u32, task: Box<dyn FnOnce()>) -> ManualHandle {
            let mut q = self.queue.borrow_mut();
            let id = q.next_id;
            q.next_id += 1;
            let due = q.now + u64::from(delay_ms);
            q.tasks.push(Task { id, due, run: task });
            ManualHandle {
                id,
                queue: Rc::downgrade(&self.queue),
            }
        }
    }

    mod tests {
        use super::*;
        use std::cell::Cell;

        #[test]
        fn fires_only_after_delay() {
            let scheduler = ManualScheduler::default();
            let fired = Rc::new(Cell::new(false));
            let flag = fired.clone();
            let _handle = scheduler.schedule(300, Box::new(move || flag.set(true)));

            scheduler.advance(299);
            assert!(!fired.get());
            scheduler.advance(1);
            assert!(fired.get());
            assert_eq!(scheduler.pending(), 0);
        }

        #[test]
        fn dropping_handle_cancels() {
            let scheduler = ManualScheduler::default();
            let fired = Rc::new(Cell::new(false));
            let flag = fired.clone();
            let handle = scheduler.schedule(10, Box::new(move || flag.set(true)));
            drop(handle);

            scheduler.advance(100);
            assert!(!fired.get());
        }
    }
}

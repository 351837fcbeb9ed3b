//! Round countdown and generation-guarded one-shot tasks.

/// Converts a host tick length in seconds to whole milliseconds. Negative and
/// NaN lengths count as zero; anything too long for `u64` saturates.
pub fn secs_to_ms(dt: f64) -> u64 {
    if dt.is_nan() || dt <= 0.0 {
        return 0;
    }
    // float-to-int casts saturate, infinity included
    (dt * 1000.0).round() as u64
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CountdownStatus {
    Running,
    /// Returned by the single tick that reaches zero.
    Expired,
    /// Already at zero before this tick.
    Idle,
}

/// A round's time budget, counted down in milliseconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Countdown {
    budget_ms: u64,
    remaining_ms: u64,
}

impl Countdown {
    pub fn new(budget_ms: u64) -> Self {
        Self {
            budget_ms,
            remaining_ms: budget_ms,
        }
    }

    pub fn budget_ms(&self) -> u64 {
        self.budget_ms
    }

    pub fn remaining_ms(&self) -> u64 {
        self.remaining_ms
    }

    pub fn budget_secs(&self) -> f64 {
        self.budget_ms as f64 / 1000.0
    }

    pub fn remaining_secs(&self) -> f64 {
        self.remaining_ms as f64 / 1000.0
    }

    pub fn tick(&mut self, dt_ms: u64) -> CountdownStatus {
        if self.remaining_ms == 0 {
            return CountdownStatus::Idle;
        }
        self.remaining_ms = self.remaining_ms.saturating_sub(dt_ms);
        if self.remaining_ms == 0 {
            CountdownStatus::Expired
        } else {
            CountdownStatus::Running
        }
    }

    /// Adds time back, never past the budget.
    pub fn refund(&mut self, ms: u64) {
        self.remaining_ms = self.remaining_ms.saturating_add(ms).min(self.budget_ms);
    }
}

#[derive(Clone, Debug)]
struct Pending<T> {
    due_ms: u64,
    generation: u64,
    task: T,
}

/// One-shot delayed tasks measured on the host's wall clock.
///
/// Each task remembers the generation it was scheduled in. `invalidate` moves
/// to a new generation, so anything scheduled before it can never fire.
#[derive(Clone, Debug)]
pub struct Scheduler<T> {
    now_ms: u64,
    generation: u64,
    pending: Vec<Pending<T>>,
}

impl<T> Default for Scheduler<T> {
    fn default() -> Self {
        Self {
            now_ms: 0,
            generation: 0,
            pending: Vec::new(),
        }
    }
}

impl<T> Scheduler<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn schedule(&mut self, delay_ms: u64, task: T) {
        self.pending.push(Pending {
            due_ms: self.now_ms.saturating_add(delay_ms),
            generation: self.generation,
            task,
        });
    }

    pub fn invalidate(&mut self) {
        self.generation += 1;
        self.pending.clear();
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }

    /// Moves the clock forward and returns the current-generation tasks that
    /// came due, earliest first.
    pub fn advance(&mut self, dt_ms: u64) -> Vec<T> {
        self.now_ms = self.now_ms.saturating_add(dt_ms);
        let now = self.now_ms;
        let generation = self.generation;
        let mut due: Vec<Pending<T>> = Vec::new();
        let mut keep = Vec::with_capacity(self.pending.len());
        for p in self.pending.drain(..) {
            if p.generation != generation {
                continue;
            }
            if p.due_ms <= now {
                due.push(p);
            } else {
                keep.push(p);
            }
        }
        self.pending = keep;
        due.sort_by_key(|p| p.due_ms);
        due.into_iter().map(|p| p.task).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn countdown_expires_once() {
        let mut c = Countdown::new(300);
        assert_eq!(c.tick(100), CountdownStatus::Running);
        assert_eq!(c.tick(100), CountdownStatus::Running);
        assert_eq!(c.tick(100), CountdownStatus::Expired);
        assert_eq!(c.tick(100), CountdownStatus::Idle);
        assert_eq!(c.remaining_ms(), 0);
    }

    #[test]
    fn refund_caps_at_budget() {
        let mut c = Countdown::new(12_000);
        c.tick(1_000);
        c.refund(3_000);
        assert_eq!(c.remaining_ms(), 12_000);
    }

    #[test]
    fn tick_length_conversion() {
        assert_eq!(secs_to_ms(0.1), 100);
        assert_eq!(secs_to_ms(1.5), 1_500);
        assert_eq!(secs_to_ms(-1.0), 0);
        assert_eq!(secs_to_ms(f64::NAN), 0);
        assert_eq!(secs_to_ms(f64::NEG_INFINITY), 0);
        assert_eq!(secs_to_ms(f64::INFINITY), u64::MAX);
        assert_eq!(secs_to_ms(1e30), u64::MAX);
    }

    #[test]
    fn huge_steps_saturate_the_clock() {
        let mut s = Scheduler::new();
        s.schedule(600, "clear");
        assert_eq!(s.advance(u64::MAX), vec!["clear"]);
        s.schedule(600, "late");
        assert_eq!(s.advance(u64::MAX), vec!["late"]);

        let mut c = Countdown::new(12_000);
        assert_eq!(c.tick(u64::MAX), CountdownStatus::Expired);
        c.refund(u64::MAX);
        assert_eq!(c.remaining_ms(), 12_000);
    }

    #[test]
    fn scheduler_fires_when_due() {
        let mut s = Scheduler::new();
        s.schedule(600, "clear");
        assert!(s.advance(500).is_empty());
        assert_eq!(s.advance(100), vec!["clear"]);
        assert!(!s.has_pending());
    }

    #[test]
    fn invalidated_tasks_never_fire() {
        let mut s = Scheduler::new();
        s.schedule(100, 1);
        s.invalidate();
        s.schedule(200, 2);
        assert_eq!(s.advance(1_000), vec![2]);
    }
}

//! Delayed and repeating events, advanced by the fixed timestep.
//!
//! Games schedule a numeric event id; when the timer runs out the id is
//! returned from `tick` and surfaces as a `Signal::Timer` in the next update.

/// Handle to a scheduled timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerId(pub u32);

#[derive(Debug, Clone)]
struct Timer {
    id: TimerId,
    event: u32,
    remaining: f32,
    /// Re-arm interval for repeating timers.
    interval: Option<f32>,
}

#[derive(Debug, Default)]
pub struct TimerQueue {
    timers: Vec<Timer>,
    next_id: u32,
}

impl TimerQueue {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&mut self, event: u32, delay: f32, interval: Option<f32>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        self.timers.push(Timer {
            id,
            event,
            remaining: delay.max(0.0),
            interval,
        });
        id
    }

    /// Fire `event` once after `delay` seconds.
    pub fn after(&mut self, delay: f32, event: u32) -> TimerId {
        self.push(event, delay, None)
    }

    /// Fire `event` every `interval` seconds until cancelled.
    pub fn every(&mut self, interval: f32, event: u32) -> TimerId {
        let interval = interval.max(f32::EPSILON);
        self.push(event, interval, Some(interval))
    }

    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|t| t.id != id);
        self.timers.len() != before
    }

    /// Cancel every timer that would fire `event`.
    pub fn cancel_event(&mut self, event: u32) {
        self.timers.retain(|t| t.event != event);
    }

    pub fn is_pending(&self, event: u32) -> bool {
        self.timers.iter().any(|t| t.event == event)
    }

    /// Advance all timers. Returns fired event ids in scheduling order.
    pub fn tick(&mut self, dt: f32) -> Vec<u32> {
        let mut fired = Vec::new();
        for timer in &mut self.timers {
            timer.remaining -= dt;
            while timer.remaining <= 0.0 {
                fired.push(timer.event);
                match timer.interval {
                    Some(interval) => timer.remaining += interval,
                    None => break,
                }
            }
        }
        self.timers.retain(|t| t.interval.is_some() || t.remaining > 0.0);
        fired
    }

    pub fn len(&self) -> usize {
        self.timers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    pub fn clear(&mut self) {
        self.timers.clear();
    }
}

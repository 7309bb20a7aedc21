use crate::constants::TIME_EPSILON;
use crate::state::PresentationState;

#[derive(Debug, Clone, Copy, PartialEq)]
struct Armed {
    key: PresentationState, // State the timer was armed for
    elapsed: f64,
}

/// Repeating autoplay timer driven by frame time. Holds at most one pending deadline.
#[derive(Debug)]
pub struct AutoplayTimer {
    interval: f64,
    armed: Option<Armed>,
}

impl AutoplayTimer {
    pub fn new(interval: f32) -> Self {
        Self { interval: interval as f64, armed: None }
    }

    #[cfg(test)]
    pub fn is_armed(&self) -> bool {
        self.armed.is_some()
    }

    /// Seconds until the next tick, if armed.
    #[cfg(test)]
    pub fn remaining(&self) -> Option<f32> {
        self.armed.map(|armed| (self.interval - armed.elapsed) as f32)
    }

    /// Re-arms for `state` when it differs from what the timer was armed for.
    /// An unchanged state keeps the running deadline.
    pub fn sync(&mut self, state: PresentationState) {
        if self.armed.is_some_and(|armed| armed.key == state) {
            return;
        }
        self.cancel();
        if state.autoplaying {
            self.armed = Some(Armed { key: state, elapsed: 0.0 });
        }
    }

    pub fn cancel(&mut self) {
        self.armed = None;
    }

    /// Advances the deadline by `dt`. Returns true when the interval elapsed;
    /// the timer then keeps repeating until the next `sync` with a new state.
    pub fn advance(&mut self, dt: f32) -> bool {
        let Some(armed) = self.armed.as_mut() else {
            return false;
        };
        armed.elapsed += dt as f64;
        // Frame steps never sum exactly to the interval
        if armed.elapsed + TIME_EPSILON as f64 >= self.interval {
            armed.elapsed = (armed.elapsed - self.interval).max(0.0);
            true
        } else {
            false
        }
    }
}

//! Eased scroll plans for the list panels.
//!
//! List scrolling glides on a quadratic ease sampled at a fixed timer
//! increment. The curve is precomputed into an offset sequence the caller
//! steps through; the final step always lands exactly on the target.

/// Milliseconds between animation steps.
pub const STEP_MS: f64 = 20.0;

/// Default scroll animation duration, milliseconds.
pub const DEFAULT_DURATION_MS: f64 = 300.0;

/// Quadratic ease-in-out.
///
/// `t` is the current time, `b` the start value, `c` the total change and
/// `d` the duration, all in the same units the caller picked.
#[must_use]
pub fn ease_in_out_quad(t: f64, b: f64, c: f64, d: f64) -> f64 {
    let mut t = t / (d / 2.0);
    if t < 1.0 {
        return c / 2.0 * t * t + b;
    }
    t -= 1.0;
    -c / 2.0 * (t * (t - 2.0) - 1.0) + b
}

/// A precomputed scroll animation between two offsets.
#[derive(Debug, Clone, PartialEq)]
pub struct ScrollPlan {
    offsets: Vec<f64>,
}

impl ScrollPlan {
    /// Plan a vertical glide from `start` to `target` over `duration_ms`.
    #[must_use]
    pub fn vertical(start: f64, target: f64, duration_ms: f64) -> Self {
        let change = target - start;
        let steps = (duration_ms / STEP_MS).ceil().max(1.0) as usize;
        let mut offsets = Vec::with_capacity(steps);
        for step in 1..steps {
            let t = step as f64 * STEP_MS;
            offsets.push(ease_in_out_quad(t, start, change, duration_ms));
        }
        offsets.push(target);
        Self { offsets }
    }

    /// The offset sequence, in playback order.
    #[must_use]
    pub fn offsets(&self) -> &[f64] {
        &self.offsets
    }

    #[must_use]
    pub fn steps(&self) -> usize {
        self.offsets.len()
    }

    /// Where the plan ends; equals the requested target.
    #[must_use]
    pub fn final_offset(&self) -> f64 {
        self.offsets.last().copied().unwrap_or(0.0)
    }
}

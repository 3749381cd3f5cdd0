//! Pointer-drag tracking and momentum decay for horizontal row scrollers.
//!
//! A drag spans multiple discrete pointer events correlated by one
//! [`RowDrag`] value; releasing it may hand off to a [`Momentum`] decay that
//! a per-frame loop drains until the velocity falls below the threshold. The
//! frame loop itself lives in the row component; everything here is pure.

/// Multiplier applied to pointer travel while dragging a row.
pub const DRAG_WALK_MULTIPLIER: f64 = 1.5;

/// Scale from pointer velocity (px/ms) to momentum velocity units.
pub const VELOCITY_SCALE: f64 = 10.0;

/// Per-frame decay factor for momentum velocity.
pub const MOMENTUM_DECELERATION: f64 = 0.95;

/// Momentum below this magnitude stops the decay loop (and never starts it).
pub const MOMENTUM_MIN_VELOCITY: f64 = 0.5;

/// Scale from momentum velocity to per-frame scroll distance.
pub const MOMENTUM_STEP_SCALE: f64 = 5.0;

/// Releases faster than this suppress the click that follows the drag.
pub const CLICK_SUPPRESS_VELOCITY: f64 = 1.0;

/// Horizontal travel after which a row reveals it has been scrolled.
pub const SCROLL_HINT_THRESHOLD_PX: f64 = 10.0;

#[derive(Debug, Clone, Copy, PartialEq)]
/// One in-progress horizontal drag on a row scroller.
pub struct RowDrag {
    start_x: f64,
    scroll_origin: f64,
    last_x: f64,
    last_time_ms: f64,
    /// Latest measured velocity, carried into momentum on release.
    pub velocity: f64,
}

impl RowDrag {
    /// Starts tracking a drag at the given pointer position and scroll offset.
    pub fn begin(page_x: f64, scroll_left: f64, now_ms: f64) -> Self {
        Self {
            start_x: page_x,
            scroll_origin: scroll_left,
            last_x: page_x,
            last_time_ms: now_ms,
            velocity: 0.0,
        }
    }

    /// Feeds a pointer move and returns the scroll offset the row should take.
    pub fn update(&mut self, page_x: f64, now_ms: f64) -> f64 {
        let walk = (page_x - self.start_x) * DRAG_WALK_MULTIPLIER;
        let dt = (now_ms - self.last_time_ms).max(1.0);
        let dx = page_x - self.last_x;
        self.velocity = dx / dt * VELOCITY_SCALE;
        self.last_x = page_x;
        self.last_time_ms = now_ms;
        self.scroll_origin - walk
    }

    /// Whether the click following this drag should be swallowed.
    pub fn suppresses_click(&self) -> bool {
        self.velocity.abs() > CLICK_SUPPRESS_VELOCITY
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
/// Decaying momentum applied after a drag release.
pub struct Momentum {
    velocity: f64,
    done: bool,
}

impl Momentum {
    /// Builds momentum from a release velocity; `None` below the threshold.
    pub fn from_release(velocity: f64) -> Option<Self> {
        (velocity.abs() >= MOMENTUM_MIN_VELOCITY).then_some(Self {
            velocity,
            done: false,
        })
    }

    /// Advances one frame, returning the scroll delta to apply, or `None`
    /// once the decay has terminated.
    ///
    /// The delta is applied before the termination check, matching a loop
    /// that always performs the step it scheduled.
    pub fn step(&mut self) -> Option<f64> {
        if self.done {
            return None;
        }
        self.velocity *= MOMENTUM_DECELERATION;
        let delta = -self.velocity * MOMENTUM_STEP_SCALE;
        if self.velocity.abs() <= MOMENTUM_MIN_VELOCITY {
            self.done = true;
        }
        Some(delta)
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn drag_walk_is_scaled_against_the_scroll_origin() {
        let mut drag = RowDrag::begin(100.0, 400.0, 0.0);
        assert_eq!(drag.update(140.0, 16.0), 400.0 - 60.0);
        assert_eq!(drag.update(60.0, 32.0), 400.0 + 60.0);
    }

    #[test]
    fn drag_velocity_tracks_the_latest_move() {
        let mut drag = RowDrag::begin(0.0, 0.0, 0.0);
        drag.update(32.0, 16.0);
        assert_eq!(drag.velocity, 20.0);
        drag.update(32.0, 32.0);
        assert_eq!(drag.velocity, 0.0);
    }

    #[test]
    fn slow_releases_produce_no_momentum() {
        assert_eq!(Momentum::from_release(0.49), None);
        assert_eq!(Momentum::from_release(-0.3), None);
        assert!(Momentum::from_release(0.5).is_some());
        assert!(Momentum::from_release(-4.0).is_some());
    }

    #[test]
    fn momentum_decays_monotonically_and_terminates() {
        let mut momentum = Momentum::from_release(8.0).expect("momentum");
        let mut previous = f64::INFINITY;
        let mut steps = 0;
        while let Some(delta) = momentum.step() {
            assert!(delta < 0.0, "positive velocity scrolls content left");
            assert!(delta.abs() < previous);
            previous = delta.abs();
            steps += 1;
            assert!(steps < 200, "decay must terminate");
        }
        assert!(steps > 1);
        assert_eq!(momentum.step(), None);
    }

    #[test]
    fn fast_release_suppresses_the_trailing_click() {
        let mut drag = RowDrag::begin(0.0, 0.0, 0.0);
        drag.update(64.0, 16.0);
        assert!(drag.suppresses_click());

        let mut slow = RowDrag::begin(0.0, 0.0, 0.0);
        slow.update(1.0, 16.0);
        assert!(!slow.suppresses_click());
    }
}

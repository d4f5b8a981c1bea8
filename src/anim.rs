// ---------------------------------------------------------------------------
// Easing
// ---------------------------------------------------------------------------

/// How the dot transition accelerates. Circle-in is the house style; the
/// rest are selectable from the UI.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Ease {
    Linear,
    #[default]
    CircleIn,
    Smoothstep,
    SineInOut,
}

impl Ease {
    pub const ALL: [Ease; 4] = [Ease::Linear, Ease::CircleIn, Ease::Smoothstep, Ease::SineInOut];

    /// Map linear progress in [0,1] to eased progress in [0,1].
    pub fn apply(self, t: f64) -> f64 {
        let x = t.clamp(0.0, 1.0);
        match self {
            Ease::Linear => x,
            Ease::CircleIn => 1.0 - (1.0 - x * x).sqrt(),
            Ease::Smoothstep => x * x * (3.0 - 2.0 * x),
            Ease::SineInOut => 0.5 - 0.5 * (std::f64::consts::PI * x).cos(),
        }
    }

    /// Display name for the easing selector.
    pub fn label(self) -> &'static str {
        match self {
            Ease::Linear => "Linear",
            Ease::CircleIn => "Circle in",
            Ease::Smoothstep => "Smoothstep",
            Ease::SineInOut => "Sine in-out",
        }
    }
}

// ---------------------------------------------------------------------------
// Transition – animated move to the active projection
// ---------------------------------------------------------------------------

/// Seconds between the trigger and the first movement.
pub const TRANSITION_DELAY: f64 = 0.1;
/// Seconds the movement takes once started.
pub const TRANSITION_DURATION: f64 = 0.5;

/// An in-flight dot transition: every dot's data-space position at trigger
/// time, interpolated toward the active projection. A re-trigger mid-flight
/// simply snapshots the blended positions and starts over.
#[derive(Debug, Clone)]
pub struct Transition {
    from: Vec<[f64; 2]>,
    started_at: f64,
    ease: Ease,
}

impl Transition {
    /// Start a transition at `started_at` (seconds, same clock as `now` in
    /// the other methods) from the given snapshot positions.
    pub fn new(from: Vec<[f64; 2]>, started_at: f64, ease: Ease) -> Self {
        Transition {
            from,
            started_at,
            ease,
        }
    }

    /// Eased progress in [0,1]; 0 while the delay has not elapsed.
    pub fn progress(&self, now: f64) -> f64 {
        let elapsed = now - self.started_at - TRANSITION_DELAY;
        self.ease.apply(elapsed / TRANSITION_DURATION)
    }

    pub fn is_finished(&self, now: f64) -> bool {
        now >= self.started_at + TRANSITION_DELAY + TRANSITION_DURATION
    }

    /// Blend one dot from its snapshot position toward `target`. Dots with
    /// no snapshot (dataset replaced mid-flight) jump straight to the target.
    pub fn blend(&self, index: usize, target: [f64; 2], now: f64) -> [f64; 2] {
        let t = self.progress(now);
        match self.from.get(index) {
            Some(&[x0, y0]) => [lerp(x0, target[0], t), lerp(y0, target[1], t)],
            None => target,
        }
    }
}

fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_fixes_the_endpoints() {
        for ease in Ease::ALL {
            assert!(ease.apply(0.0).abs() < 1e-12, "{ease:?} at 0");
            assert!((ease.apply(1.0) - 1.0).abs() < 1e-12, "{ease:?} at 1");
        }
    }

    #[test]
    fn circle_in_starts_slow() {
        let mid = Ease::CircleIn.apply(0.5);
        assert!((mid - (1.0 - 0.75f64.sqrt())).abs() < 1e-12);
        assert!(mid < 0.5);
    }

    #[test]
    fn progress_is_zero_during_the_delay() {
        let tr = Transition::new(vec![[0.0, 0.0]], 10.0, Ease::Linear);
        assert_eq!(tr.progress(10.0), 0.0);
        assert_eq!(tr.progress(10.0 + TRANSITION_DELAY), 0.0);
        assert!(!tr.is_finished(10.0));
    }

    #[test]
    fn transition_finishes_after_delay_plus_duration() {
        let tr = Transition::new(vec![[0.0, 0.0]], 10.0, Ease::Linear);
        let end = 10.0 + TRANSITION_DELAY + TRANSITION_DURATION;
        assert!(!tr.is_finished(end - 0.01));
        assert!(tr.is_finished(end));
        assert!((tr.progress(end) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn blend_moves_between_snapshot_and_target() {
        let tr = Transition::new(vec![[0.0, 0.0]], 0.0, Ease::Linear);
        let halfway = TRANSITION_DELAY + TRANSITION_DURATION / 2.0;
        let end = TRANSITION_DELAY + TRANSITION_DURATION;

        assert_eq!(tr.blend(0, [2.0, 4.0], 0.0), [0.0, 0.0]);

        let [x, y] = tr.blend(0, [2.0, 4.0], halfway);
        assert!((x - 1.0).abs() < 1e-9);
        assert!((y - 2.0).abs() < 1e-9);

        let [x, y] = tr.blend(0, [2.0, 4.0], end);
        assert!((x - 2.0).abs() < 1e-9);
        assert!((y - 4.0).abs() < 1e-9);
    }

    #[test]
    fn blend_without_snapshot_jumps_to_target() {
        let tr = Transition::new(Vec::new(), 0.0, Ease::Linear);
        assert_eq!(tr.blend(5, [1.0, 1.0], 0.0), [1.0, 1.0]);
    }
}

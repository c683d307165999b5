// File: crates/scatter-core/src/transition.rs
// Summary: Time-sampled axis transitions with cubic in-out easing.

use std::time::{Duration, Instant};

use crate::axis::Axis;
use crate::scale::Domain;

/// Animation of one axis: marker coordinates and the axis domain move together.
#[derive(Clone, Debug)]
pub struct Transition {
    pub axis: Axis,
    pub start: Instant,
    pub duration: Duration,
    from: Vec<f64>,
    to: Vec<f64>,
    domain_from: Domain,
    domain_to: Domain,
}

impl Transition {
    pub fn new(
        axis: Axis,
        start: Instant,
        duration: Duration,
        from: Vec<f64>,
        to: Vec<f64>,
        domain_from: Domain,
        domain_to: Domain,
    ) -> Self {
        debug_assert_eq!(from.len(), to.len());
        Self { axis, start, duration, from, to, domain_from, domain_to }
    }

    /// Linear time fraction in [0, 1].
    pub fn progress(&self, now: Instant) -> f64 {
        if self.duration.is_zero() {
            return 1.0;
        }
        let elapsed = now.saturating_duration_since(self.start).as_secs_f64();
        (elapsed / self.duration.as_secs_f64()).clamp(0.0, 1.0)
    }

    pub fn is_finished(&self, now: Instant) -> bool {
        self.progress(now) >= 1.0
    }

    /// Interpolated coordinates at `now`. Exactly the targets once finished.
    pub fn sample(&self, now: Instant) -> Vec<f64> {
        if self.is_finished(now) {
            return self.to.clone();
        }
        let t = ease_cubic_in_out(self.progress(now));
        self.from.iter().zip(&self.to).map(|(&a, &b)| lerp(a, b, t)).collect()
    }

    pub fn sample_domain(&self, now: Instant) -> Domain {
        if self.is_finished(now) {
            return self.domain_to;
        }
        let t = ease_cubic_in_out(self.progress(now));
        (lerp(self.domain_from.0, self.domain_to.0, t), lerp(self.domain_from.1, self.domain_to.1, t))
    }

    pub fn target_domain(&self) -> Domain {
        self.domain_to
    }
}

#[inline]
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a * (1.0 - t) + b * t
}

/// Symmetric cubic easing: slow start, slow finish.
pub fn ease_cubic_in_out(t: f64) -> f64 {
    let t = t * 2.0;
    if t <= 1.0 {
        t * t * t / 2.0
    } else {
        let t = t - 2.0;
        (t * t * t + 2.0) / 2.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn easing_endpoints_and_midpoint() {
        assert_eq!(ease_cubic_in_out(0.0), 0.0);
        assert_eq!(ease_cubic_in_out(0.5), 0.5);
        assert_eq!(ease_cubic_in_out(1.0), 1.0);
        assert!(ease_cubic_in_out(0.25) < 0.25);
        assert!(ease_cubic_in_out(0.75) > 0.75);
    }

    #[test]
    fn samples_between_endpoints() {
        let t0 = Instant::now();
        let tr = Transition::new(
            Axis::X,
            t0,
            Duration::from_millis(750),
            vec![0.0, 100.0],
            vec![100.0, 0.0],
            (0.0, 1.0),
            (10.0, 11.0),
        );
        assert_eq!(tr.sample(t0), vec![0.0, 100.0]);
        let mid = tr.sample(t0 + Duration::from_millis(375));
        assert!((mid[0] - 50.0).abs() < 1e-9);
        assert_eq!(tr.sample(t0 + Duration::from_millis(750)), vec![100.0, 0.0]);
        assert_eq!(tr.sample_domain(t0 + Duration::from_secs(5)), (10.0, 11.0));
        assert!(tr.is_finished(t0 + Duration::from_millis(750)));
    }

    #[test]
    fn zero_duration_finishes_immediately() {
        let t0 = Instant::now();
        let tr = Transition::new(Axis::Y, t0, Duration::ZERO, vec![1.0], vec![2.0], (0.0, 1.0), (0.0, 2.0));
        assert!(tr.is_finished(t0));
        assert_eq!(tr.sample(t0), vec![2.0]);
    }
}

use std::time::Duration;

use tracing::trace;

/// Growth state of one bar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BarAnimation {
    pub index: usize,
    pub x: f64,
    pub baseline: f64,
    /// Current tip of the drawn segment.
    pub position: f64,
    pub target: f64,
    pub step: f64,
    /// Time after the scheduler start before the first step.
    pub delay: Duration,
    pub generation: u64,
}

impl BarAnimation {
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.position == self.target
    }

    /// Moves the tip one step toward the target without overshooting.
    fn advance(&mut self) {
        self.position = if self.target >= self.baseline {
            (self.position + self.step).min(self.target)
        } else {
            (self.position - self.step).max(self.target)
        };
    }
}

/// Segment to stroke for one animation step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationStep {
    pub index: usize,
    pub x: f64,
    pub baseline: f64,
    pub position: f64,
}

/// Frame-driven scheduler for staggered bar growth.
///
/// The host calls [`AnimationScheduler::advance`] once per display refresh.
/// [`AnimationScheduler::restart`] bumps the generation; animations queued
/// under an older generation are dropped without drawing.
#[derive(Debug, Clone, Default)]
pub struct AnimationScheduler {
    generation: u64,
    elapsed: Duration,
    pending: Vec<BarAnimation>,
}

impl AnimationScheduler {
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub fn is_idle(&self) -> bool {
        self.pending.is_empty()
    }

    #[must_use]
    pub fn pending(&self) -> &[BarAnimation] {
        &self.pending
    }

    /// Starts a new generation and resets the stagger clock.
    pub fn restart(&mut self) -> u64 {
        self.generation = self.generation.wrapping_add(1);
        self.elapsed = Duration::ZERO;
        self.generation
    }

    /// Queues a bar growing from `baseline` to `target`.
    pub fn schedule(
        &mut self,
        index: usize,
        x: f64,
        baseline: f64,
        target: f64,
        step: f64,
        delay: Duration,
    ) {
        self.pending.push(BarAnimation {
            index,
            x,
            baseline,
            position: baseline,
            target,
            step,
            delay,
            generation: self.generation,
        });
    }

    /// Advances the clock by `delta` and steps every due animation once.
    pub fn advance(&mut self, delta: Duration) -> Vec<AnimationStep> {
        let generation = self.generation;
        let before = self.pending.len();
        self.pending.retain(|animation| animation.generation == generation);
        if self.pending.len() != before {
            let dropped = before - self.pending.len();
            trace!(dropped, generation, "dropped stale bar animations");
        }

        self.elapsed += delta;
        let elapsed = self.elapsed;
        let mut steps = Vec::new();
        for animation in self
            .pending
            .iter_mut()
            .filter(|animation| animation.delay <= elapsed)
        {
            animation.advance();
            trace!(
                index = animation.index,
                position = animation.position,
                target = animation.target,
                "bar animation step"
            );
            steps.push(AnimationStep {
                index: animation.index,
                x: animation.x,
                baseline: animation.baseline,
                position: animation.position,
            });
        }
        self.pending.retain(|animation| !animation.is_finished());
        steps
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::AnimationScheduler;

    #[test]
    fn bars_grow_in_fixed_steps_and_stop_at_target() {
        let mut scheduler = AnimationScheduler::default();
        scheduler.schedule(0, 10.0, 36.0, 46.0, 4.0, Duration::ZERO);

        let positions: Vec<f64> = (0..3)
            .flat_map(|_| scheduler.advance(Duration::from_millis(16)))
            .map(|step| step.position)
            .collect();
        assert_eq!(positions, vec![40.0, 44.0, 46.0]);
        assert!(scheduler.is_idle());
    }

    #[test]
    fn stagger_delays_later_bars() {
        let mut scheduler = AnimationScheduler::default();
        scheduler.schedule(0, 10.0, 0.0, 100.0, 4.0, Duration::ZERO);
        scheduler.schedule(1, 20.0, 0.0, 100.0, 4.0, Duration::from_millis(200));

        let first = scheduler.advance(Duration::ZERO);
        assert_eq!(first.len(), 1);
        let later = scheduler.advance(Duration::from_millis(200));
        assert_eq!(later.len(), 2);
    }

    #[test]
    fn restart_drops_stale_generation() {
        let mut scheduler = AnimationScheduler::default();
        scheduler.schedule(0, 10.0, 0.0, 100.0, 4.0, Duration::ZERO);
        scheduler.restart();

        assert!(scheduler.advance(Duration::from_millis(16)).is_empty());
        assert!(scheduler.is_idle());
    }

    #[test]
    fn negative_bars_grow_downward() {
        let mut scheduler = AnimationScheduler::default();
        scheduler.schedule(0, 10.0, 50.0, 45.0, 4.0, Duration::ZERO);
        let steps: Vec<f64> = (0..2)
            .flat_map(|_| scheduler.advance(Duration::ZERO))
            .map(|step| step.position)
            .collect();
        assert_eq!(steps, vec![46.0, 45.0]);
    }
}

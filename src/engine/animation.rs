use rand::Rng;

use super::types::Animation;

const VISUALIZER_RANGE: (f32, f32) = (0.0, 100.0);
const WAVEFORM_RANGE: (f32, f32) = (20.0, 80.0);
const VISUALIZER_REST: f32 = 10.0;
const WAVEFORM_REST: f32 = 20.0;

/// Produces animation frames: random bars while playing, a flat resting
/// pattern otherwise.
#[derive(Debug, Clone)]
pub(super) struct Animator {
    visualizer_bars: usize,
    waveform_bars: usize,
    rotation_step: f64,
}

impl Animator {
    pub(super) fn new(visualizer_bars: usize, waveform_bars: usize, rotation_step: f64) -> Self {
        Self {
            visualizer_bars,
            waveform_bars,
            rotation_step,
        }
    }

    /// Resting frame at the given rotation.
    pub(super) fn resting(&self, rotation: f64) -> Animation {
        Animation {
            rotation,
            visualizer: vec![VISUALIZER_REST; self.visualizer_bars],
            waveform: vec![WAVEFORM_REST; self.waveform_bars],
        }
    }

    /// Put `anim` back at rest without touching its rotation.
    pub(super) fn rest(&self, anim: &mut Animation) {
        *anim = self.resting(anim.rotation);
    }

    /// Advance one tick. Only meaningful while playing.
    pub(super) fn step(&self, anim: &mut Animation, rng: &mut impl Rng) {
        anim.rotation += self.rotation_step;
        anim.visualizer = (0..self.visualizer_bars)
            .map(|_| rng.gen_range(VISUALIZER_RANGE.0..=VISUALIZER_RANGE.1))
            .collect();
        anim.waveform = (0..self.waveform_bars)
            .map(|_| rng.gen_range(WAVEFORM_RANGE.0..=WAVEFORM_RANGE.1))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resting_pattern_is_flat() {
        let a = Animator::new(16, 50, 3.0).resting(42.0);
        assert_eq!(a.rotation, 42.0);
        assert_eq!(a.visualizer, vec![10.0; 16]);
        assert_eq!(a.waveform, vec![20.0; 50]);
    }

    #[test]
    fn step_stays_in_bounds_and_rotates() {
        let animator = Animator::new(16, 50, 3.0);
        let mut a = animator.resting(0.0);
        let mut rng = rand::thread_rng();
        for i in 1..=200 {
            animator.step(&mut a, &mut rng);
            assert_eq!(a.rotation, 3.0 * i as f64);
            assert_eq!(a.visualizer.len(), 16);
            assert_eq!(a.waveform.len(), 50);
            assert!(a.visualizer.iter().all(|v| (0.0..=100.0).contains(v)));
            assert!(a.waveform.iter().all(|v| (20.0..=80.0).contains(v)));
        }
    }
}

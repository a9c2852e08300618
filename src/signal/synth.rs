// ---------------------------------------------------------------------------
// Synthetic PPG generator – stands in for a real acquisition source
// ---------------------------------------------------------------------------

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_f64(&mut self) -> f64 {
        (self.next_u64() >> 11) as f64 / (1u64 << 53) as f64
    }

    /// Box-Muller transform for normal distribution
    fn gauss(&mut self, mean: f64, std_dev: f64) -> f64 {
        let u1 = self.next_f64().max(1e-15);
        let u2 = self.next_f64();
        let z = (-2.0 * u1.ln()).sqrt() * (2.0 * std::f64::consts::PI * u2).cos();
        mean + std_dev * z
    }
}

fn gaussian(x: f64, mu: f64, sigma: f64, amplitude: f64) -> f64 {
    amplitude * (-(x - mu).powi(2) / (2.0 * sigma.powi(2))).exp()
}

/// One cardiac cycle of a PPG pulse, `phase` in [0, 1): a systolic peak
/// followed by a smaller dicrotic wave.
fn pulse_shape(phase: f64) -> f64 {
    gaussian(phase, 0.30, 0.09, 1.0) + gaussian(phase, 0.62, 0.11, 0.35)
}

/// Simulate a PPG-like waveform.
///
/// Deterministic for a given seed: a periodic pulse train at
/// `heart_rate_bpm`, a slow respiratory baseline drift, and additive
/// Gaussian noise. Amplitudes stay well inside ±2 so the viewer's fixed
/// axis range fits the whole trace.
pub fn simulate_ppg(duration_secs: f64, sampling_rate: u32, heart_rate_bpm: f64, seed: u64) -> Vec<f64> {
    let mut rng = SimpleRng::new(seed);
    let n = (duration_secs * sampling_rate as f64) as usize;
    let beat_period = 60.0 / heart_rate_bpm;
    let respiration_hz = 0.25;

    (0..n)
        .map(|i| {
            let t = i as f64 / sampling_rate as f64;
            let phase = (t / beat_period).fract();
            let drift = 0.15 * (2.0 * std::f64::consts::PI * respiration_hz * t).sin();
            pulse_shape(phase) + drift + rng.gauss(0.0, 0.01)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn sample_count_matches_duration() {
        let signal = simulate_ppg(2.0, 100, 120.0, 42);
        assert_eq!(signal.len(), 200);
    }

    #[test]
    fn deterministic_for_same_seed() {
        let a = simulate_ppg(1.0, 100, 120.0, 7);
        let b = simulate_ppg(1.0, 100, 120.0, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn stays_within_plot_range() {
        let signal = simulate_ppg(10.0, 100, 120.0, 42);
        assert!(signal.iter().all(|&v| v.abs() < 2.0));
    }

    #[test]
    fn pulse_repeats_at_heart_rate() {
        // At 120 bpm and 100 Hz the beat period is exactly 50 samples, so
        // the noiseless pulse component must line up beat to beat.
        let beat_period = 60.0 / 120.0;
        let t0: f64 = 10.0 / 100.0;
        let t1 = t0 + beat_period;
        assert_relative_eq!(
            pulse_shape((t0 / beat_period).fract()),
            pulse_shape((t1 / beat_period).fract()),
            epsilon = 1e-12
        );
    }
}

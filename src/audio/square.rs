//! Square-wave voice driven by a phase accumulator.
//!
//! The output is `+amplitude` for the first half of each cycle and `-amplitude` for the
//! second. Pitch and volume move one step per buffer, never inside one, so a buffer is
//! always a clean run of a single frequency and level.

use std::sync::Arc;

use tracing::trace;

use super::monitor::SynthMonitor;

/// Steps in the pitch/volume sweep. 0..=12 covers one octave, one semitone per step.
pub const STEP_COUNT: u8 = 13;

/// Same output rate as the NES APU mixer.
pub const DEFAULT_SAMPLE_RATE: u32 = 44_100;
pub const DEFAULT_BASE_FREQUENCY: f64 = 440.0;
pub const DEFAULT_MAX_AMPLITUDE: i16 = 8_000;
/// Samples per synth callback.
pub const DEFAULT_BUFFER_LEN: usize = 2_048;

/// Frequency of `step` on the semitone ladder above `base`.
pub fn frequency_for_step(base: f64, step: u8) -> f64 {
    base * 2f64.powf(step as f64 / 12.0)
}

/// Linear integer ramp: 0 at step 0, `max` at `STEP_COUNT - 1`. Steps past the end
/// of the ramp are held at `max`.
pub fn amplitude_for_step(max: i16, step: u8) -> i16 {
    let step = step.min(STEP_COUNT - 1);
    (max as i32 * step as i32 / (STEP_COUNT as i32 - 1)) as i16
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SynthConfig {
    pub sample_rate: u32,
    pub base_frequency: f64,
    pub max_amplitude: i16,
    pub buffer_len: usize,
}

impl Default for SynthConfig {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            base_frequency: DEFAULT_BASE_FREQUENCY,
            max_amplitude: DEFAULT_MAX_AMPLITUDE,
            buffer_len: DEFAULT_BUFFER_LEN,
        }
    }
}

impl SynthConfig {
    /// Highest frequency the sweep reaches.
    pub fn top_frequency(&self) -> f64 {
        frequency_for_step(self.base_frequency, STEP_COUNT - 1)
    }
}

/// Position in the current cycle plus the two sweep counters.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SynthesisState {
    /// Fraction of the current cycle, always in [0, 1).
    pub phase: f64,
    pub pitch_step: u8,
    pub volume_step: u8,
}

impl SynthesisState {
    /// Advance by `increment` (< 1.0) and wrap once.
    pub(crate) fn advance_phase(&mut self, increment: f64) {
        self.phase += increment;
        if self.phase >= 1.0 {
            self.phase -= 1.0;
        }
    }

    pub(crate) fn advance_steps(&mut self) {
        self.pitch_step = (self.pitch_step + 1) % STEP_COUNT;
        self.volume_step = (self.volume_step + 1) % STEP_COUNT;
    }
}

pub struct SquareSynth {
    config: SynthConfig,
    pub(crate) state: SynthesisState,
    monitor: Arc<SynthMonitor>,
}

impl SquareSynth {
    pub fn new(config: SynthConfig, monitor: Arc<SynthMonitor>) -> Self {
        Self {
            config,
            state: SynthesisState::default(),
            monitor,
        }
    }

    pub fn config(&self) -> &SynthConfig {
        &self.config
    }

    pub fn state(&self) -> &SynthesisState {
        &self.state
    }

    /// Fill `out` with one buffer of samples, publish the steps it used, then step
    /// pitch and volume.
    pub fn fill(&mut self, out: &mut [i16]) {
        let frequency = frequency_for_step(self.config.base_frequency, self.state.pitch_step);
        let increment = frequency / self.config.sample_rate as f64;
        debug_assert!(increment < 1.0, "{frequency} Hz at {} Hz", self.config.sample_rate);
        let amplitude = amplitude_for_step(self.config.max_amplitude, self.state.volume_step);

        for sample in out.iter_mut() {
            self.state.advance_phase(increment);
            *sample = if self.state.phase < 0.5 {
                amplitude
            } else {
                -amplitude
            };
        }

        trace!(
            pitch_step = self.state.pitch_step,
            volume_step = self.state.volume_step,
            frequency,
            amplitude,
            len = out.len(),
            "square buffer"
        );

        self.monitor
            .publish(self.state.pitch_step, self.state.volume_step);
        self.state.advance_steps();
    }
}

//! Read-only view of the synth's step counters for the display.
//!
//! The audio thread is the only writer. Both steps are packed into one
//! `AtomicU32` so a reader always sees a pair from the same buffer; it may be
//! one buffer behind, which is fine for presentation.

use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};

use super::square::{SynthConfig, amplitude_for_step, frequency_for_step};

/// Steps published after the most recent buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SynthSnapshot {
    pub pitch_step: u8,
    pub volume_step: u8,
    /// Buffers generated so far.
    pub buffers: u64,
}

impl SynthSnapshot {
    pub fn frequency(&self, config: &SynthConfig) -> f64 {
        frequency_for_step(config.base_frequency, self.pitch_step)
    }

    pub fn amplitude(&self, config: &SynthConfig) -> i16 {
        amplitude_for_step(config.max_amplitude, self.volume_step)
    }
}

#[derive(Debug, Default)]
pub struct SynthMonitor {
    /// bits 0-7 = volume step, 8-15 = pitch step.
    steps: AtomicU32,
    buffers: AtomicU64,
}

impl SynthMonitor {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn publish(&self, pitch_step: u8, volume_step: u8) {
        let packed = (pitch_step as u32) << 8 | volume_step as u32;
        self.steps.store(packed, Ordering::Release);
        self.buffers.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> SynthSnapshot {
        let packed = self.steps.load(Ordering::Acquire);
        SynthSnapshot {
            pitch_step: (packed >> 8) as u8,
            volume_step: packed as u8,
            buffers: self.buffers.load(Ordering::Relaxed),
        }
    }
}

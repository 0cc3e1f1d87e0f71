//! rodio adapter: the output thread pulls samples one at a time, the synth is asked
//! for a whole buffer whenever the previous one runs out.

use std::time::Duration;

use rodio::Source;

use super::square::SquareSynth;

pub struct SquareSource {
    synth: SquareSynth,
    buffer: Vec<i16>,
    pos: usize,
}

impl SquareSource {
    pub fn new(synth: SquareSynth) -> Self {
        let len = synth.config().buffer_len.max(1);
        Self {
            synth,
            buffer: vec![0; len],
            // Start drained so the first pull generates buffer 0.
            pos: len,
        }
    }
}

impl Iterator for SquareSource {
    type Item = i16;

    fn next(&mut self) -> Option<i16> {
        if self.pos >= self.buffer.len() {
            self.synth.fill(&mut self.buffer);
            self.pos = 0;
        }
        let sample = self.buffer[self.pos];
        self.pos += 1;
        Some(sample)
    }
}

impl Source for SquareSource {
    fn current_frame_len(&self) -> Option<usize> {
        None
    }

    fn channels(&self) -> u16 {
        1
    }

    fn sample_rate(&self) -> u32 {
        self.synth.config().sample_rate
    }

    fn total_duration(&self) -> Option<Duration> {
        None
    }
}

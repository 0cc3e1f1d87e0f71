//! Command line options.

use anyhow::{Result, ensure};
use clap::Parser;
use tracing::Level;

use crate::audio::square::{
    DEFAULT_BASE_FREQUENCY, DEFAULT_BUFFER_LEN, DEFAULT_MAX_AMPLITUDE, DEFAULT_SAMPLE_RATE,
    SynthConfig,
};

#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Config {
    /// Output sample rate in Hz.
    #[arg(long, default_value_t = DEFAULT_SAMPLE_RATE)]
    pub sample_rate: u32,

    /// Pitch of sweep step 0, in Hz.
    #[arg(long, default_value_t = DEFAULT_BASE_FREQUENCY)]
    pub base_frequency: f64,

    /// Peak sample value at the loudest volume step.
    #[arg(long, default_value_t = DEFAULT_MAX_AMPLITUDE)]
    pub max_amplitude: i16,

    /// Samples generated per synth callback; pitch and volume step once per buffer.
    #[arg(long, default_value_t = DEFAULT_BUFFER_LEN)]
    pub buffer_len: usize,

    /// Frame loop rate.
    #[arg(long, default_value_t = 60)]
    pub fps: u32,

    /// Don't open an audio stream.
    #[arg(long)]
    pub mute: bool,

    /// More logging (-v info, -vv debug, -vvv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl Config {
    pub fn synth(&self) -> SynthConfig {
        SynthConfig {
            sample_rate: self.sample_rate,
            base_frequency: self.base_frequency,
            max_amplitude: self.max_amplitude,
            buffer_len: self.buffer_len,
        }
    }

    pub fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            2 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }

    /// Reject settings the synth or frame loop can't run with.
    pub fn validate(&self) -> Result<()> {
        ensure!(self.sample_rate > 0, "sample rate must be positive");
        ensure!(self.buffer_len > 0, "buffer length must be positive");
        ensure!(self.fps > 0, "fps must be positive");
        ensure!(
            self.base_frequency.is_finite() && self.base_frequency > 0.0,
            "base frequency must be a positive number of Hz, got {}",
            self.base_frequency
        );
        ensure!(self.max_amplitude >= 0, "max amplitude must not be negative");
        let top = self.synth().top_frequency();
        ensure!(
            top < self.sample_rate as f64,
            "sweep reaches {top:.1} Hz, which needs a sample rate above {}",
            self.sample_rate
        );
        Ok(())
    }
}

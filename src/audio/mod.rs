//! Single square-wave voice.
//!
//! - **square**: phase-accumulator generator with a per-buffer pitch/volume sweep.
//! - **monitor**: atomic snapshot of the sweep position for the display.
//! - **source**: `rodio::Source` wrapper, pulled by the output thread.
//!
//! No mixing, envelopes or length counters; this is not an APU.

pub mod monitor;
pub mod source;
pub mod square;

#[cfg(test)]
mod tests;

//! padtone: keyboard as two NES controllers, plus one square-wave voice.
//!
//! Checks that keyboard input can stand in for a two-player
//! [NES controller](https://www.nesdev.org/wiki/Standard_controller) pair and that a basic
//! audio voice can be driven in real time next to it.
//!
//! ## Modules
//!
//! - **controller** – key bindings, key state, and the 8-bit controller register
//!   (bit 0 = A … bit 7 = Right)
//! - **audio** – phase-accumulator square wave with a per-buffer pitch/volume sweep, an
//!   atomic snapshot for the display, and the `rodio` source that plays it
//! - **display** – framebuffer, window title and terminal line built from the above
//! - **config** – command line options

pub mod audio;
pub mod config;
pub mod controller;
pub mod display;

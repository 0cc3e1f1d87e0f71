//! Presentation of controller registers and synth state.
//!
//! Everything here is recomputed from the encoder and the synth snapshot every frame.
//! Three outputs: a 720×480 framebuffer for the minifb window, the window title, and a
//! coloured terminal line printed when a register changes.

use ansi_term::Colour::{Green, Red};

use crate::audio::monitor::SynthSnapshot;
use crate::audio::square::{STEP_COUNT, SynthConfig};
use crate::controller::encoder::{ButtonView, InputEncoder, Player};

pub const WIDTH: usize = 720;
pub const HEIGHT: usize = 480;

const BACKGROUND: u32 = 0x000000;
const PRESSED: u32 = 0x00C000;
const RELEASED: u32 = 0x800000;
const PITCH_BAR: u32 = 0x3C7EEC;
const VOLUME_BAR: u32 = 0xDCC878;
const TRACK: u32 = 0x202020;

const MARGIN: usize = 40;
const CELL: usize = 70;
const CELL_GAP: usize = 12;
const ROW_TOP: [usize; 2] = [40, 140];
const BAR_HEIGHT: usize = 40;
const PITCH_TOP: usize = 280;
const VOLUME_TOP: usize = 360;

/// Binary rendering of a register, bit 7 first.
pub fn register_bits(value: u8) -> String {
    format!("{value:08b}")
}

/// `C1: 00010001 | C2: 00000000 | pitch 3 (523.3 Hz) | volume 3 (2000)`
pub fn window_title(registers: [u8; 2], snapshot: &SynthSnapshot, config: &SynthConfig) -> String {
    format!(
        "C1: {} | C2: {} | pitch {} ({:.1} Hz) | volume {} ({})",
        register_bits(registers[0]),
        register_bits(registers[1]),
        snapshot.pitch_step,
        snapshot.frequency(config),
        snapshot.volume_step,
        snapshot.amplitude(config),
    )
}

fn button_labels(buttons: impl Iterator<Item = ButtonView>) -> String {
    buttons
        .map(|b| {
            if b.pressed {
                Green.bold().paint(format!("{}: Pressed", b.label)).to_string()
            } else {
                Red.paint(format!("{}: Released", b.label)).to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(", ")
}

/// One terminal line per controller: raw bits, then `label: Pressed` (green) or
/// `label: Released` (red) for every button.
pub fn status_line<K: Copy + PartialEq + std::fmt::Debug>(encoder: &InputEncoder<K>) -> String {
    Player::ALL
        .iter()
        .enumerate()
        .map(|(i, &player)| {
            format!(
                "C{} {}  {}",
                i + 1,
                register_bits(encoder.register(player)),
                button_labels(encoder.buttons(player))
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Framebuffer for the minifb window (0xRRGGBB per pixel, row-major).
pub struct Panel {
    pub framebuffer: Vec<u32>,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    pub fn new() -> Self {
        Self {
            framebuffer: vec![BACKGROUND; WIDTH * HEIGHT],
        }
    }

    /// Redraw: one row of eight cells per controller (bit 7 leftmost, like
    /// `register_bits`), then the pitch and volume bars.
    pub fn draw(&mut self, registers: [u8; 2], snapshot: &SynthSnapshot) {
        self.framebuffer.fill(BACKGROUND);

        for (register, top) in registers.into_iter().zip(ROW_TOP) {
            for column in 0..8 {
                let bit = 7 - column;
                let colour = if register & (1 << bit) != 0 {
                    PRESSED
                } else {
                    RELEASED
                };
                let left = MARGIN + column * (CELL + CELL_GAP);
                self.fill_rect(left, top, CELL, CELL, colour);
            }
        }

        self.draw_bar(PITCH_TOP, snapshot.pitch_step, PITCH_BAR);
        self.draw_bar(VOLUME_TOP, snapshot.volume_step, VOLUME_BAR);
    }

    fn draw_bar(&mut self, top: usize, step: u8, colour: u32) {
        let full = WIDTH - 2 * MARGIN;
        let filled = full * step as usize / (STEP_COUNT as usize - 1);
        self.fill_rect(MARGIN, top, full, BAR_HEIGHT, TRACK);
        self.fill_rect(MARGIN, top, filled, BAR_HEIGHT, colour);
    }

    /// Clipped to the framebuffer.
    fn fill_rect(&mut self, left: usize, top: usize, width: usize, height: usize, colour: u32) {
        let right = (left + width).min(WIDTH);
        let bottom = (top + height).min(HEIGHT);
        for y in top.min(bottom)..bottom {
            let row = y * WIDTH;
            self.framebuffer[row + left.min(right)..row + right].fill(colour);
        }
    }

    pub fn pixel(&self, x: usize, y: usize) -> u32 {
        self.framebuffer[y * WIDTH + x]
    }
}

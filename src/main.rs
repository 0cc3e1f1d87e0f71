//! padtone entry point.
//!
//! Opens the audio stream and a window, then runs the frame loop: poll keys, encode,
//! draw. Usage: padtone [--base-frequency HZ] [--buffer-len N] [--mute] [-v]

use std::process::ExitCode;
use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use clap::Parser;
use minifb::{KeyRepeat, Window, WindowOptions};
use rodio::{OutputStream, Sink};
use tracing::{Level, debug, error, info, warn};
use tracing_subscriber::util::SubscriberInitExt;

use padtone::{
    audio::{monitor::SynthMonitor, source::SquareSource, square::SquareSynth},
    config::Config,
    controller::keymap::{QUIT_KEY, default_encoder},
    display::{self, HEIGHT, Panel, WIDTH},
};

/// Playing square voice. Dropping the stream closes the device.
struct AudioOut {
    _stream: OutputStream,
    sink: Sink,
}

fn setup_logging(level: Level) {
    tracing_subscriber::fmt()
        .with_max_level(level)
        .compact()
        .finish()
        .init();
}

/// The synth moves into rodio's output thread here; only the monitor stays behind.
fn start_audio(config: &Config, monitor: Arc<SynthMonitor>) -> Result<AudioOut> {
    let (stream, handle) = OutputStream::try_default().context("no audio output device")?;
    let sink = Sink::try_new(&handle).context("failed to create audio sink")?;
    let synth = SquareSynth::new(config.synth(), monitor);
    sink.append(SquareSource::new(synth));
    info!(
        sample_rate = config.sample_rate,
        buffer_len = config.buffer_len,
        base_frequency = config.base_frequency,
        "audio started"
    );
    Ok(AudioOut {
        _stream: stream,
        sink,
    })
}

fn open_window() -> Result<Window> {
    let window = Window::new(
        "padtone",
        WIDTH,
        HEIGHT,
        WindowOptions {
            resize: false,
            ..WindowOptions::default()
        },
    )
    .context("failed to create window")?;
    Ok(window)
}

fn run(config: &Config) -> Result<()> {
    config.validate()?;
    let synth_config = config.synth();
    let monitor = Arc::new(SynthMonitor::new());

    // Audio is optional: a failed device only costs the tone.
    let audio = if config.mute {
        None
    } else {
        match start_audio(config, Arc::clone(&monitor)) {
            Ok(audio) => Some(audio),
            Err(err) => {
                warn!("continuing without audio: {err:#}");
                None
            }
        }
    };

    let mut window = open_window()?;
    let mut encoder = default_encoder();
    let mut panel = Panel::new();
    let frame_duration = Duration::from_secs(1) / config.fps;

    let mut last_registers = encoder.registers();
    let mut last_title = String::new();
    let mut was_active = true;
    let mut running = true;

    while running {
        let frame_start = Instant::now();

        for key in window.get_keys_pressed(KeyRepeat::No) {
            if key == QUIT_KEY {
                running = false;
            }
            encoder.record_transition(key, true);
        }
        for key in window.get_keys_released() {
            encoder.record_transition(key, false);
        }

        // Key-ups are not delivered while unfocused; drop held buttons instead of
        // leaving them stuck.
        let active = window.is_active();
        if was_active && !active {
            debug!("focus lost, releasing all buttons");
            encoder.release_all();
        }
        was_active = active;

        let registers = encoder.registers();
        if registers != last_registers {
            println!("{}", display::status_line(&encoder));
            last_registers = registers;
        }

        // May trail the audio thread by a buffer.
        let snapshot = monitor.snapshot();
        panel.draw(registers, &snapshot);
        let title = display::window_title(registers, &snapshot, &synth_config);
        if title != last_title {
            window.set_title(&title);
            last_title = title;
        }
        window
            .update_with_buffer(&panel.framebuffer, WIDTH, HEIGHT)
            .context("failed to update window")?;

        running &= window.is_open();

        let elapsed = frame_start.elapsed();
        if elapsed < frame_duration {
            std::thread::sleep(frame_duration - elapsed);
        }
    }

    if let Some(audio) = audio {
        audio.sink.stop();
        debug!(buffers = monitor.snapshot().buffers, "audio stopped");
    }
    info!("shut down");
    Ok(())
}

fn main() -> ExitCode {
    let config = Config::parse();
    setup_logging(config.log_level());

    match run(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

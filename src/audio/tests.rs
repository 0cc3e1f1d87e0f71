use std::sync::Arc;

use rodio::Source;

use crate::audio::{
    monitor::{SynthMonitor, SynthSnapshot},
    source::SquareSource,
    square::{
        STEP_COUNT, SquareSynth, SynthConfig, SynthesisState, amplitude_for_step,
        frequency_for_step,
    },
};

fn new_synth(config: SynthConfig) -> (SquareSynth, Arc<SynthMonitor>) {
    let monitor = Arc::new(SynthMonitor::new());
    (SquareSynth::new(config, Arc::clone(&monitor)), monitor)
}

/// 16 Hz output with a 1 Hz base: step 12 is 2 Hz, exactly 1/8 cycle per sample.
fn tiny_config() -> SynthConfig {
    SynthConfig {
        sample_rate: 16,
        base_frequency: 1.0,
        max_amplitude: 1200,
        buffer_len: 16,
    }
}

#[test]
fn step_zero_is_base_frequency() {
    assert_eq!(frequency_for_step(440.0, 0), 440.0);
    assert_eq!(frequency_for_step(261.63, 0), 261.63);
}

#[test]
fn step_twelve_is_one_octave_up() {
    assert_eq!(frequency_for_step(440.0, 12), 880.0);
    assert_eq!(frequency_for_step(100.0, 12), 200.0);
}

#[test]
fn semitone_ladder_is_increasing() {
    let freqs: Vec<f64> = (0..STEP_COUNT).map(|s| frequency_for_step(440.0, s)).collect();
    assert!(freqs.windows(2).all(|w| w[1] > w[0]));
    assert!((freqs[7] - 659.255).abs() < 0.01); // perfect fifth
}

#[test]
fn amplitude_ramp_endpoints() {
    assert_eq!(amplitude_for_step(8000, 0), 0);
    assert_eq!(amplitude_for_step(8000, STEP_COUNT - 1), 8000);
    assert_eq!(amplitude_for_step(1200, 1), 100);
    assert_eq!(amplitude_for_step(i16::MAX, STEP_COUNT - 1), i16::MAX);
}

#[test]
fn amplitude_holds_past_last_step() {
    assert_eq!(amplitude_for_step(8000, STEP_COUNT), 8000);
    assert_eq!(amplitude_for_step(8000, 255), 8000);
    assert_eq!(amplitude_for_step(i16::MAX, 255), i16::MAX);
}

#[test]
fn first_sample_follows_the_first_advance() {
    let (mut synth, _) = new_synth(tiny_config());
    synth.state = SynthesisState {
        phase: 0.375,
        pitch_step: 12,
        volume_step: 12,
    };
    let mut buffer = vec![0; 2];
    synth.fill(&mut buffer);
    // 0.375 -> 0.5 is already the low half.
    assert_eq!(buffer, [-1200, -1200]);
}

#[test]
fn steps_wrap_after_last_step() {
    let mut state = SynthesisState {
        pitch_step: STEP_COUNT - 1,
        volume_step: STEP_COUNT - 1,
        ..SynthesisState::default()
    };
    state.advance_steps();
    assert_eq!(state.pitch_step, 0);
    assert_eq!(state.volume_step, 0);
}

#[test]
fn phase_stays_below_one_after_wrap() {
    let mut state = SynthesisState::default();
    for increment in [0.001, 0.0997, 0.25, 0.5, 0.73, 0.999] {
        for _ in 0..10_000 {
            state.advance_phase(increment);
            assert!(
                (0.0..1.0).contains(&state.phase),
                "phase {} after +{increment}",
                state.phase
            );
        }
    }
}

#[test]
fn phase_stays_in_range_across_buffers() {
    let (mut synth, _) = new_synth(SynthConfig::default());
    let mut buffer = vec![0; 512];
    for _ in 0..3 * STEP_COUNT as usize {
        synth.fill(&mut buffer);
        assert!((0.0..1.0).contains(&synth.state().phase));
    }
}

#[test]
fn first_buffer_is_silent() {
    let (mut synth, _) = new_synth(SynthConfig::default());
    let mut buffer = vec![1; 256];
    synth.fill(&mut buffer);
    assert!(buffer.iter().all(|&s| s == 0));
}

#[test]
fn square_wave_has_half_duty() {
    let (mut synth, _) = new_synth(tiny_config());
    synth.state = SynthesisState {
        phase: 0.0,
        pitch_step: 12,
        volume_step: 12,
    };
    let mut buffer = vec![0; 16];
    synth.fill(&mut buffer);

    // Sign is taken after each advance: phases 1/8, 2/8, ... 8/8 (wrapped to 0).
    assert_eq!(buffer[0..3], [1200; 3]);
    assert_eq!(buffer[3..7], [-1200; 4]);
    assert_eq!(buffer[7..11], [1200; 4]);
    assert_eq!(buffer[11..15], [-1200; 4]);
    assert_eq!(buffer[15], 1200);
    // Two whole cycles: back where it started.
    assert_eq!(synth.state().phase, 0.0);
}

#[test]
fn level_is_constant_within_a_buffer() {
    let (mut synth, _) = new_synth(SynthConfig::default());
    let mut buffer = vec![0; 1024];
    for n in 0..STEP_COUNT {
        synth.fill(&mut buffer);
        let amplitude = amplitude_for_step(SynthConfig::default().max_amplitude, n);
        assert!(
            buffer.iter().all(|&s| s == amplitude || s == -amplitude),
            "buffer {n}"
        );
    }
}

#[test]
fn sweep_advances_once_per_buffer_and_wraps() {
    let (mut synth, monitor) = new_synth(SynthConfig::default());
    let mut buffer = vec![0; 64];
    for n in 0..2 * STEP_COUNT as u64 {
        synth.fill(&mut buffer);
        let snap = monitor.snapshot();
        let expected = (n % STEP_COUNT as u64) as u8;
        assert_eq!(snap.pitch_step, expected);
        assert_eq!(snap.volume_step, expected);
        assert_eq!(snap.buffers, n + 1);
    }
    assert_eq!(synth.state().pitch_step, 0);
}

#[test]
fn monitor_starts_at_zero() {
    let monitor = SynthMonitor::new();
    assert_eq!(monitor.snapshot(), SynthSnapshot::default());
}

#[test]
fn monitor_keeps_pitch_and_volume_apart() {
    let monitor = SynthMonitor::new();
    monitor.publish(12, 3);
    let snap = monitor.snapshot();
    assert_eq!((snap.pitch_step, snap.volume_step), (12, 3));

    let config = SynthConfig::default();
    assert_eq!(snap.frequency(&config), 880.0);
    assert_eq!(snap.amplitude(&config), 2000);
}

#[test]
fn source_refills_once_per_buffer() {
    let config = SynthConfig {
        buffer_len: 4,
        ..SynthConfig::default()
    };
    let (synth, monitor) = new_synth(config);
    let mut source = SquareSource::new(synth);

    assert_eq!(monitor.snapshot().buffers, 0);
    let first: Vec<i16> = source.by_ref().take(4).collect();
    assert_eq!(first, [0; 4]);
    assert_eq!(monitor.snapshot().buffers, 1);

    source.next();
    assert_eq!(monitor.snapshot().buffers, 2);
    assert_eq!(monitor.snapshot().volume_step, 1);
}

#[test]
fn source_reports_mono_stream_at_config_rate() {
    let config = SynthConfig {
        sample_rate: 48_000,
        ..SynthConfig::default()
    };
    let (synth, _) = new_synth(config);
    let source = SquareSource::new(synth);
    assert_eq!(source.channels(), 1);
    assert_eq!(source.sample_rate(), 48_000);
    assert_eq!(source.total_duration(), None);
}

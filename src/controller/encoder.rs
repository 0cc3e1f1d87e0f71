//! Key transitions to controller registers.

use tracing::debug;

use super::binding::{BUTTON_COUNT, BindingSet, KeyBinding};

/// Controller port. Port 1 is $4016 on the NES, port 2 is $4017.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Player {
    One = 0,
    Two = 1,
}

impl Player {
    pub const ALL: [Player; 2] = [Player::One, Player::Two];

    fn index(self) -> usize {
        self as usize
    }
}

/// Held/released flags, index-aligned with a controller's `BindingSet`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct KeyState(pub [bool; BUTTON_COUNT]);

/// Build the 8-bit register: OR of the flag value of every pressed binding.
pub fn compute_register<K>(state: &KeyState, bindings: &[KeyBinding<K>; BUTTON_COUNT]) -> u8 {
    state
        .0
        .iter()
        .zip(bindings)
        .filter(|(pressed, _)| **pressed)
        .fold(0, |register, (_, binding)| register | binding.value)
}

/// One button as seen by the display: label, flag value and whether it is held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ButtonView {
    pub label: &'static str,
    pub value: u8,
    pub pressed: bool,
}

/// Owns the bindings and key state of both controllers.
pub struct InputEncoder<K> {
    bindings: [BindingSet<K>; 2],
    states: [KeyState; 2],
}

impl<K: Copy + PartialEq + std::fmt::Debug> InputEncoder<K> {
    pub fn new(player_one: BindingSet<K>, player_two: BindingSet<K>) -> Self {
        Self {
            bindings: [player_one, player_two],
            states: [KeyState::default(); 2],
        }
    }

    /// Apply one key-down/key-up. Every binding using `key` is updated, in both
    /// controllers. Returns false when no binding uses `key`.
    pub fn record_transition(&mut self, key: K, pressed: bool) -> bool {
        let mut matched = false;
        for (set, state) in self.bindings.iter().zip(self.states.iter_mut()) {
            for i in set.positions(key) {
                state.0[i] = pressed;
                matched = true;
            }
        }
        if matched {
            debug!(?key, pressed, "key transition");
        }
        matched
    }

    /// Release every button on both controllers.
    pub fn release_all(&mut self) {
        self.states = [KeyState::default(); 2];
    }

    pub fn key_state(&self, player: Player) -> &KeyState {
        &self.states[player.index()]
    }

    pub fn register(&self, player: Player) -> u8 {
        let i = player.index();
        compute_register(&self.states[i], self.bindings[i].bindings())
    }

    pub fn registers(&self) -> [u8; 2] {
        [self.register(Player::One), self.register(Player::Two)]
    }

    /// Per-button view of one controller, in button order.
    pub fn buttons(&self, player: Player) -> impl Iterator<Item = ButtonView> + '_ {
        let i = player.index();
        self.bindings[i]
            .bindings()
            .iter()
            .zip(self.states[i].0)
            .map(|(binding, pressed)| ButtonView {
                label: binding.label,
                value: binding.value,
                pressed,
            })
    }
}

//! Default keyboard layout.
//!
//! Controller 2 takes Select/Start on 6/2 so no key is shared with controller 1
//! (same coin/start pairing arcade front-ends use for player 2).

use minifb::Key;

use super::binding::BindingSet;
use super::encoder::InputEncoder;

/// Closes the window.
pub const QUIT_KEY: Key = Key::Escape;

/// A, B, Select, Start, Up, Down, Left, Right.
pub const PLAYER_ONE_KEYS: [Key; 8] = [
    Key::LeftAlt,
    Key::LeftCtrl,
    Key::Key5,
    Key::Key1,
    Key::Up,
    Key::Down,
    Key::Left,
    Key::Right,
];

/// A, B, Select, Start, Up, Down, Left, Right.
pub const PLAYER_TWO_KEYS: [Key; 8] = [
    Key::S,
    Key::A,
    Key::Key6,
    Key::Key2,
    Key::R,
    Key::F,
    Key::D,
    Key::G,
];

/// Encoder with both default binding sets.
pub fn default_encoder() -> InputEncoder<Key> {
    InputEncoder::new(
        BindingSet::new(PLAYER_ONE_KEYS),
        BindingSet::new(PLAYER_TWO_KEYS),
    )
}

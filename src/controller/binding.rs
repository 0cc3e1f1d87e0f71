//! Buttons and key bindings.
//!
//! Bit layout matches the standard NES controller read order:
//! bit 0 = A, 1 = B, 2 = Select, 3 = Start, 4 = Up, 5 = Down, 6 = Left, 7 = Right.

/// Number of buttons on one controller.
pub const BUTTON_COUNT: usize = 8;

/// One button of the NES controller. Discriminant is the bit position.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Button {
    A = 0,
    B = 1,
    Select = 2,
    Start = 3,
    Up = 4,
    Down = 5,
    Left = 6,
    Right = 7,
}

impl Button {
    /// All buttons in bit order.
    pub const ALL: [Button; BUTTON_COUNT] = [
        Button::A,
        Button::B,
        Button::Select,
        Button::Start,
        Button::Up,
        Button::Down,
        Button::Left,
        Button::Right,
    ];

    /// Single-bit flag value of this button in the controller register.
    pub const fn flag(self) -> u8 {
        1 << self as u8
    }

    pub const fn label(self) -> &'static str {
        match self {
            Button::A => "A",
            Button::B => "B",
            Button::Select => "Select",
            Button::Start => "Start",
            Button::Up => "Up",
            Button::Down => "Down",
            Button::Left => "Left",
            Button::Right => "Right",
        }
    }
}

/// A physical key bound to one button flag.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KeyBinding<K> {
    pub key: K,
    /// Flag value OR'd into the register while the key is held.
    pub value: u8,
    pub label: &'static str,
}

/// The eight bindings of one controller, in button order.
///
/// Built from one key per button so every flag value appears exactly once.
/// Not mutable after construction.
#[derive(Clone, Debug)]
pub struct BindingSet<K> {
    bindings: [KeyBinding<K>; BUTTON_COUNT],
}

impl<K: Copy + PartialEq> BindingSet<K> {
    /// `keys[i]` is bound to `Button::ALL[i]`.
    pub fn new(keys: [K; BUTTON_COUNT]) -> Self {
        let bindings = std::array::from_fn(|i| {
            let button = Button::ALL[i];
            KeyBinding {
                key: keys[i],
                value: button.flag(),
                label: button.label(),
            }
        });
        Self { bindings }
    }

    pub fn bindings(&self) -> &[KeyBinding<K>; BUTTON_COUNT] {
        &self.bindings
    }

    /// Indices of every binding using `key`, in button order.
    pub fn positions(&self, key: K) -> impl Iterator<Item = usize> + '_ {
        self.bindings
            .iter()
            .enumerate()
            .filter(move |(_, b)| b.key == key)
            .map(|(i, _)| i)
    }
}

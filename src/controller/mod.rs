//! Keyboard-to-controller mapping for two NES controllers.
//!
//! Each controller has eight [key bindings](binding::KeyBinding), one per button, and a
//! [`KeyState`](encoder::KeyState) updated on every key transition. The
//! [controller register](https://www.nesdev.org/wiki/Standard_controller) is derived from
//! the two on demand and is never stored.

pub mod binding;
pub mod encoder;
pub mod keymap;

//! Keyboard input handling for the render loop.
//!
//! One key code is polled per cycle via the display window; this module maps
//! it to an action. Matching is case-insensitive and unrecognized keys are
//! ignored.

use crate::display::Toggle;

/// How long each cycle blocks waiting for a key, in milliseconds.
pub const POLL_TIMEOUT_MS: i32 = 30;

/// Result of mapping one polled key code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    /// Terminate the main loop.
    Quit,
    /// Invert one display toggle.
    Toggle(Toggle),
    /// No key pressed, or key not recognized.
    None,
}

/// Map a raw key code from the window poll to an action.
///
/// `wait_key` returns -1 when no key was pressed within the timeout.
pub fn map_key(key: i32) -> KeyAction {
    let Some(c) = u32::try_from(key).ok().and_then(char::from_u32) else {
        return KeyAction::None;
    };

    match c.to_ascii_lowercase() {
        'q' => KeyAction::Quit,
        'e' => KeyAction::Toggle(Toggle::Edges),
        'f' => KeyAction::Toggle(Toggle::Faces),
        'g' => KeyAction::Toggle(Toggle::Grayscale),
        'b' => KeyAction::Toggle(Toggle::Blur),
        _ => KeyAction::None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quit_key() {
        assert_eq!(map_key('q' as i32), KeyAction::Quit);
        assert_eq!(map_key('Q' as i32), KeyAction::Quit);
    }

    #[test]
    fn test_toggle_keys_lowercase() {
        assert_eq!(map_key('e' as i32), KeyAction::Toggle(Toggle::Edges));
        assert_eq!(map_key('f' as i32), KeyAction::Toggle(Toggle::Faces));
        assert_eq!(map_key('g' as i32), KeyAction::Toggle(Toggle::Grayscale));
        assert_eq!(map_key('b' as i32), KeyAction::Toggle(Toggle::Blur));
    }

    #[test]
    fn test_toggle_keys_uppercase() {
        assert_eq!(map_key('E' as i32), KeyAction::Toggle(Toggle::Edges));
        assert_eq!(map_key('F' as i32), KeyAction::Toggle(Toggle::Faces));
        assert_eq!(map_key('G' as i32), KeyAction::Toggle(Toggle::Grayscale));
        assert_eq!(map_key('B' as i32), KeyAction::Toggle(Toggle::Blur));
    }

    #[test]
    fn test_no_key_pressed() {
        // wait_key signals "no key" with -1
        assert_eq!(map_key(-1), KeyAction::None);
    }

    #[test]
    fn test_unrecognized_keys_ignored() {
        assert_eq!(map_key('x' as i32), KeyAction::None);
        assert_eq!(map_key(' ' as i32), KeyAction::None);
        assert_eq!(map_key(27), KeyAction::None); // ESC is not a quit key here
        assert_eq!(map_key('1' as i32), KeyAction::None);
    }

    #[test]
    fn test_quit_is_only_terminal_key() {
        for code in 0..128 {
            let action = map_key(code);
            if action == KeyAction::Quit {
                let c = char::from_u32(code as u32).unwrap().to_ascii_lowercase();
                assert_eq!(c, 'q');
            }
        }
    }
}

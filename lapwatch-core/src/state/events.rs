//! Commands that trigger run state transitions

use crate::keys::Key;

/// Commands recognised by the stopwatch
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Start counting (`A`)
    Start,
    /// Stop counting, keep elapsed time (`B`)
    Stop,
    /// Stop counting and clear elapsed time (`C`)
    Reset,
}

impl Command {
    /// Map a key to its command
    ///
    /// Only `A`, `B` and `C` are bound; digits, `D`, `*` and `#` have no
    /// action.
    pub fn from_key(key: Key) -> Option<Self> {
        match key {
            Key::A => Some(Command::Start),
            Key::B => Some(Command::Stop),
            Key::C => Some(Command::Reset),
            _ => None,
        }
    }

    /// Check if this command clears the elapsed time
    pub fn clears_time(&self) -> bool {
        matches!(self, Command::Reset)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keys::KEYMAP;

    #[test]
    fn test_bound_keys() {
        assert_eq!(Command::from_key(Key::A), Some(Command::Start));
        assert_eq!(Command::from_key(Key::B), Some(Command::Stop));
        assert_eq!(Command::from_key(Key::C), Some(Command::Reset));
    }

    #[test]
    fn test_unbound_keys() {
        let bound = [Key::A, Key::B, Key::C];
        for row in KEYMAP.iter() {
            for &key in row.iter() {
                if !bound.contains(&key) {
                    assert_eq!(Command::from_key(key), None, "{:?}", key);
                }
            }
        }
    }

    #[test]
    fn test_only_reset_clears() {
        assert!(Command::Reset.clears_time());
        assert!(!Command::Start.clears_time());
        assert!(!Command::Stop.clears_time());
    }
}

//! Keypad scanner trait

use crate::keys::Key;

/// Something that reports the currently pressed key
pub trait KeyScanner {
    /// Scan once
    ///
    /// Returns `None` when no key is down. May block while debouncing a
    /// detected press.
    fn scan(&mut self) -> Option<Key>;
}

impl<T: KeyScanner + ?Sized> KeyScanner for &mut T {
    fn scan(&mut self) -> Option<Key> {
        T::scan(self)
    }
}

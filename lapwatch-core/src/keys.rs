//! Keypad symbols and the 4x4 matrix layout

/// Number of keypad rows (driven)
pub const ROWS: usize = 4;

/// Number of keypad columns (sampled)
pub const COLS: usize = 4;

/// A key on the 4x4 membrane keypad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Num0,
    Num1,
    Num2,
    Num3,
    Num4,
    Num5,
    Num6,
    Num7,
    Num8,
    Num9,
    A,
    B,
    C,
    D,
    Star,
    Hash,
}

/// Row-major key layout as printed on the keypad
pub static KEYMAP: [[Key; COLS]; ROWS] = [
    [Key::Num1, Key::Num2, Key::Num3, Key::A],
    [Key::Num4, Key::Num5, Key::Num6, Key::B],
    [Key::Num7, Key::Num8, Key::Num9, Key::C],
    [Key::Star, Key::Num0, Key::Hash, Key::D],
];

impl Key {
    /// Key at a matrix position, or None if out of range
    pub fn at(row: usize, col: usize) -> Option<Self> {
        KEYMAP.get(row)?.get(col).copied()
    }

    /// Legend printed on the key
    pub fn as_char(&self) -> char {
        match self {
            Key::Num0 => '0',
            Key::Num1 => '1',
            Key::Num2 => '2',
            Key::Num3 => '3',
            Key::Num4 => '4',
            Key::Num5 => '5',
            Key::Num6 => '6',
            Key::Num7 => '7',
            Key::Num8 => '8',
            Key::Num9 => '9',
            Key::A => 'A',
            Key::B => 'B',
            Key::C => 'C',
            Key::D => 'D',
            Key::Star => '*',
            Key::Hash => '#',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const LEGEND: [[char; COLS]; ROWS] = [
        ['1', '2', '3', 'A'],
        ['4', '5', '6', 'B'],
        ['7', '8', '9', 'C'],
        ['*', '0', '#', 'D'],
    ];

    #[test]
    fn test_keymap_matches_legend() {
        for row in 0..ROWS {
            for col in 0..COLS {
                let key = Key::at(row, col).unwrap();
                assert_eq!(key.as_char(), LEGEND[row][col]);
            }
        }
    }

    #[test]
    fn test_at_out_of_range() {
        assert_eq!(Key::at(4, 0), None);
        assert_eq!(Key::at(0, 4), None);
    }
}

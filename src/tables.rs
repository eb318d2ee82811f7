//! RM4SCC symbol table: 4-bar patterns for '0'..='9' then 'A'..='Z'.

use crate::Bar::{self, Down, Long, Short, Up};

pub(crate) const SYMBOL_COUNT: usize = 36;

/// Every entry has exactly two ascender bars and two descender bars; all 36
/// patterns are distinct (checked by the test suite).
pub(crate) const SYMBOLS: [[Bar; 4]; SYMBOL_COUNT] = [
    [Short, Short, Long, Long],  // 0
    [Short, Down, Up, Long],     // 1
    [Short, Down, Long, Up],     // 2
    [Down, Short, Up, Long],     // 3
    [Down, Short, Long, Up],     // 4
    [Down, Down, Up, Up],        // 5
    [Short, Up, Down, Long],     // 6
    [Short, Long, Short, Long],  // 7
    [Short, Long, Down, Up],     // 8
    [Down, Up, Short, Long],     // 9
    [Down, Up, Down, Up],        // A
    [Down, Long, Short, Up],     // B
    [Short, Up, Long, Down],     // C
    [Short, Long, Up, Down],     // D
    [Short, Long, Long, Short],  // E
    [Down, Up, Up, Down],        // F
    [Down, Up, Long, Short],     // G
    [Down, Long, Up, Short],     // H
    [Up, Short, Down, Long],     // I
    [Up, Down, Short, Long],     // J
    [Up, Down, Down, Up],        // K
    [Long, Short, Short, Long],  // L
    [Long, Short, Down, Up],     // M
    [Long, Down, Short, Up],     // N
    [Up, Short, Long, Down],     // O
    [Up, Down, Up, Down],        // P
    [Up, Down, Long, Short],     // Q
    [Long, Short, Up, Down],     // R
    [Long, Short, Long, Short],  // S
    [Long, Down, Up, Short],     // T
    [Up, Up, Down, Down],        // U
    [Up, Long, Short, Down],     // V
    [Up, Long, Down, Short],     // W
    [Long, Up, Short, Down],     // X
    [Long, Up, Down, Short],     // Y
    [Long, Long, Short, Short],  // Z
];

/// Looks up the 4-bar pattern encoding `character`, case-insensitively.
/// Returns `None` for anything other than a digit or an ASCII letter.
pub const fn pattern(character: char) -> Option<[Bar; 4]> {
    match character.to_ascii_uppercase() {
        c @ '0'..='9' => Some(SYMBOLS[c as usize - '0' as usize]),
        c @ 'A'..='Z' => Some(SYMBOLS[c as usize - 'A' as usize + 10]),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_two_ascenders_two_descenders_per_pattern() {
        for (i, pattern) in SYMBOLS.iter().enumerate() {
            let tops: u32 = pattern.iter().map(|b| b.top_value()).sum();
            let bottoms: u32 = pattern.iter().map(|b| b.bottom_value()).sum();
            assert_eq!(tops, 2, "pattern {i} has {tops} ascenders");
            assert_eq!(bottoms, 2, "pattern {i} has {bottoms} descenders");
        }
    }

    #[test]
    fn test_patterns_are_distinct() {
        for i in 0..SYMBOL_COUNT {
            for j in i + 1..SYMBOL_COUNT {
                assert_ne!(SYMBOLS[i], SYMBOLS[j], "patterns {i} and {j} collide");
            }
        }
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        for c in 'a'..='z' {
            assert_eq!(pattern(c), pattern(c.to_ascii_uppercase()));
        }
    }

    #[test]
    fn test_lookup_known_patterns() {
        assert_eq!(pattern('0'), Some([Short, Short, Long, Long]));
        assert_eq!(pattern('B'), Some([Down, Long, Short, Up]));
        assert_eq!(pattern('z'), Some([Long, Long, Short, Short]));
    }

    #[test]
    fn test_lookup_rejects_unsupported() {
        for c in ['#', ' ', '-', 'é', '\n', '!'] {
            assert_eq!(pattern(c), None);
        }
    }
}

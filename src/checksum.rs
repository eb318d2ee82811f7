//! Checksum character derivation from accumulated bar weights.
//!
//! Each data pattern contributes a binary-weighted sum per track (ascender
//! and descender). Both totals are reduced modulo 6 and the two residues
//! select, per bar position, whether the checksum character extends into the
//! corresponding track.

use crate::Bar;

/// Positional weights applied to each bar of a pattern, most significant
/// first. The rightmost bar never contributes.
pub const WEIGHTS: [u32; 4] = [4, 2, 1, 0];

/// Per-position track extensions keyed by the modulo-6 residue. `% 6` makes
/// any other index impossible.
const EXTENSIONS: [[bool; 4]; 6] = [
    [true, true, false, false],
    [false, false, true, true],
    [false, true, false, true],
    [false, true, true, false],
    [true, false, false, true],
    [true, false, true, false],
];

/// Weighted sum of the pattern's ascender-track occupancy, in 0..=7.
pub const fn pattern_top_value(pattern: &[Bar; 4]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < 4 {
        total += pattern[i].top_value() * WEIGHTS[i];
        i += 1;
    }
    total
}

/// Weighted sum of the pattern's descender-track occupancy, in 0..=7.
pub const fn pattern_bottom_value(pattern: &[Bar; 4]) -> u32 {
    let mut total = 0;
    let mut i = 0;
    while i < 4 {
        total += pattern[i].bottom_value() * WEIGHTS[i];
        i += 1;
    }
    total
}

/// Builds the checksum character from the accumulated track sums.
pub(crate) const fn from_track_sums(top_sum: u32, bottom_sum: u32) -> [Bar; 4] {
    let top = EXTENSIONS[(top_sum % 6) as usize];
    let bottom = EXTENSIONS[(bottom_sum % 6) as usize];
    [
        Bar::from_tracks(top[0], bottom[0]),
        Bar::from_tracks(top[1], bottom[1]),
        Bar::from_tracks(top[2], bottom[2]),
        Bar::from_tracks(top[3], bottom[3]),
    ]
}

/// Computes the checksum character over a sequence of data patterns.
pub fn checksum(patterns: &[[Bar; 4]]) -> [Bar; 4] {
    let mut top_sum = 0;
    let mut bottom_sum = 0;
    for pattern in patterns {
        top_sum += pattern_top_value(pattern);
        bottom_sum += pattern_bottom_value(pattern);
    }
    from_track_sums(top_sum, bottom_sum)
}

//! No-std RM4SCC (Royal Mail 4-state Customer Code) encoder.
//!
//! RM4SCC encodes digits and uppercase letters as groups of four bars, each
//! bar in one of four states depending on whether it extends into the
//! ascender and/or descender track. A barcode is a start sentinel, the data
//! characters, one computed checksum character and a stop sentinel.
//!
//! No allocation is performed: bars are written into a caller-provided slice.
//!
//! ```
//! use rm4scc::{encode, rm4scc_len, Bar};
//!
//! let mut storage = [Bar::default(); rm4scc_len!(8)];
//! let barcode = encode("BX11LT1A", &mut storage).unwrap();
//! assert_eq!(barcode.len(), 38);
//! assert_eq!(barcode[0], Bar::Up);
//! ```
#![cfg_attr(not(test), no_std)]

mod tables;
pub mod checksum;
mod encoder;
mod render;

pub use tables::pattern;
pub use encoder::{encode, Rm4sccEncoder};
pub use render::{Rm4sccRender, ASCENDER_ROWS, TRACK_ROWS, DESCENDER_ROWS, BAR_ROWS};

use core::fmt;

/// One printed mark of a 4-state barcode.
///
/// Every bar covers the central track; its state records whether it also
/// extends up into the ascender track and/or down into the descender track.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Bar {
    /// Track only, neither ascender nor descender.
    #[default]
    Short,
    /// Ascender only.
    Up,
    /// Descender only.
    Down,
    /// Both ascender and descender.
    Long,
}

impl Bar {
    /// 1 if this bar occupies the ascender track, 0 otherwise.
    #[inline]
    pub const fn top_value(self) -> u32 {
        matches!(self, Bar::Up | Bar::Long) as u32
    }

    /// 1 if this bar occupies the descender track, 0 otherwise.
    #[inline]
    pub const fn bottom_value(self) -> u32 {
        matches!(self, Bar::Down | Bar::Long) as u32
    }

    /// Combines the two track extension states back into a bar.
    pub const fn from_tracks(top: bool, bottom: bool) -> Self {
        match (top, bottom) {
            (false, false) => Bar::Short,
            (true, false) => Bar::Up,
            (false, true) => Bar::Down,
            (true, true) => Bar::Long,
        }
    }
}

/// Single bar marking the beginning of every barcode.
pub const START_BAR: Bar = Bar::Up;
/// Single bar marking the end of every barcode.
pub const STOP_BAR: Bar = Bar::Long;

/// Number of bars in a barcode holding `chars` data characters: four per data
/// character, four for the checksum character and the two sentinels.
pub const fn barcode_len(chars: usize) -> usize {
    (chars + 1) * 4 + 2
}

/// Const-friendly version of [barcode_len] for sizing storage arrays.
#[macro_export]
macro_rules! rm4scc_len {
    ($chars:expr) => {
        (($chars) + 1) * 4 + 2
    };
}

/// Width in modules of the raster produced by [Rm4sccRender] at scale 1 for a
/// barcode of `bars` bars (1-module bars separated by 1-module gaps).
#[macro_export]
macro_rules! rm4scc_width {
    ($bars:expr) => {
        ($bars) * 2 - 1
    };
}

/// An input character outside the RM4SCC alphabet (digits and letters).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UnsupportedCharacter {
    /// The offending character, as supplied (before upper-casing).
    pub character: char,
    /// Zero-based character position in the appended input.
    pub position: usize,
}

impl fmt::Display for UnsupportedCharacter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "unsupported character {:?} at position {}",
            self.character, self.position
        )
    }
}

impl core::error::Error for UnsupportedCharacter {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_track_values() {
        assert_eq!(Bar::Short.top_value(), 0);
        assert_eq!(Bar::Short.bottom_value(), 0);
        assert_eq!(Bar::Up.top_value(), 1);
        assert_eq!(Bar::Up.bottom_value(), 0);
        assert_eq!(Bar::Down.top_value(), 0);
        assert_eq!(Bar::Down.bottom_value(), 1);
        assert_eq!(Bar::Long.top_value(), 1);
        assert_eq!(Bar::Long.bottom_value(), 1);
    }

    #[test]
    fn test_from_tracks_round_trips() {
        for bar in [Bar::Short, Bar::Up, Bar::Down, Bar::Long] {
            let rebuilt = Bar::from_tracks(bar.top_value() == 1, bar.bottom_value() == 1);
            assert_eq!(rebuilt, bar);
        }
    }

    #[test]
    fn test_barcode_len() {
        assert_eq!(barcode_len(0), 6);
        assert_eq!(barcode_len(8), 38);
        assert_eq!(rm4scc_len!(8), barcode_len(8));
    }

    #[test]
    fn test_error_display() {
        let err = UnsupportedCharacter { character: '#', position: 1 };
        assert_eq!(err.to_string(), "unsupported character '#' at position 1");
    }
}

//! Barcode assembly: start sentinel, data characters, checksum, stop sentinel.

use crate::{barcode_len, checksum, tables, Bar, UnsupportedCharacter, START_BAR, STOP_BAR};

/// Writes an RM4SCC bar sequence into caller-provided storage.
///
/// The encoder appends four bars per data character and accumulates the
/// weighted track sums as it goes, so sealing only has to emit the checksum
/// character and the stop sentinel. Input may be split across several
/// `append_*` calls; the reported error position counts characters from the
/// first append.
///
/// ```
/// use rm4scc::{rm4scc_len, Bar, Rm4sccEncoder};
///
/// let mut storage = [Bar::default(); rm4scc_len!(8)];
/// let barcode = Rm4sccEncoder::new(&mut storage)
///     .append_str("BX11LT")?
///     .append_str("1A")?
///     .seal();
/// assert_eq!(barcode.len(), 38);
/// # Ok::<(), rm4scc::UnsupportedCharacter>(())
/// ```
#[derive(Debug)]
pub struct Rm4sccEncoder<'a> {
    storage: &'a mut [Bar],
    used: usize,
    chars: usize,
    top_sum: u32,
    bottom_sum: u32,
}

impl<'a> Rm4sccEncoder<'a> {
    /// Creates an encoder over `storage` and writes the start sentinel.
    /// Storage must hold at least an empty barcode; [crate::rm4scc_len]
    /// gives the size needed for a known character count.
    pub fn new(storage: &'a mut [Bar]) -> Self {
        assert!(
            storage.len() >= barcode_len(0),
            "storage must hold at least an empty barcode (6 bars)"
        );
        storage[0] = START_BAR;
        Self { storage, used: 1, chars: 0, top_sum: 0, bottom_sum: 0 }
    }

    /// Returns the number of bars already written.
    pub fn count(&self) -> usize {
        self.used
    }

    /// Returns the number of data characters that still fit.
    pub fn available(&self) -> usize {
        (self.storage.len() - barcode_len(0)) / 4 - self.chars
    }

    /// Appends one data character. Fails without writing anything if the
    /// character is not a digit or an ASCII letter.
    pub fn append_char(mut self, character: char) -> Result<Self, UnsupportedCharacter> {
        let pattern = tables::pattern(character)
            .ok_or(UnsupportedCharacter { character, position: self.chars })?;
        self.push_pattern(&pattern);
        Ok(self)
    }

    /// Appends every character of `s` in order, upper-casing on the fly.
    /// Fails on the first unmappable character; the barcode under
    /// construction is unusable after a failure.
    pub fn append_str(mut self, s: &str) -> Result<Self, UnsupportedCharacter> {
        for character in s.chars() {
            let pattern = tables::pattern(character)
                .ok_or(UnsupportedCharacter { character, position: self.chars })?;
            self.push_pattern(&pattern);
        }
        Ok(self)
    }

    fn push_pattern(&mut self, pattern: &[Bar; 4]) {
        assert!(
            self.used + 4 <= self.storage.len() - 5,
            "storage is full, size it with rm4scc_len!"
        );
        self.top_sum += checksum::pattern_top_value(pattern);
        self.bottom_sum += checksum::pattern_bottom_value(pattern);
        self.storage[self.used..self.used + 4].copy_from_slice(pattern);
        self.used += 4;
        self.chars += 1;
    }

    /// Writes the checksum character and the stop sentinel, returning the
    /// finished barcode slice.
    pub fn seal(self) -> &'a mut [Bar] {
        let Self { storage, used, top_sum, bottom_sum, .. } = self;
        let check = checksum::from_track_sums(top_sum, bottom_sum);
        storage[used..used + 4].copy_from_slice(&check);
        storage[used + 4] = STOP_BAR;
        &mut storage[..used + 5]
    }
}

/// Encodes `input` into `storage` and returns the barcode slice, which is
/// always `4 * (N + 1) + 2` bars long for N input characters.
///
/// Characters are upper-cased before lookup; anything outside `0`-`9` and
/// `A`-`Z` fails with the offending character and its position, and no
/// barcode is produced.
///
/// # Panics
///
/// Panics if `storage` is shorter than [barcode_len] of the input length.
pub fn encode<'a>(
    input: &str,
    storage: &'a mut [Bar],
) -> Result<&'a [Bar], UnsupportedCharacter> {
    assert!(
        storage.len() >= barcode_len(input.chars().count()),
        "storage is too small for the input, size it with rm4scc_len!"
    );
    Ok(Rm4sccEncoder::new(storage).append_str(input)?.seal())
}

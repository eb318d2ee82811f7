//! Rasterization of a bar sequence onto a module grid.
//!
//! Bars are one module wide and separated by one-module gaps. The grid is
//! split vertically into three bands: the ascender track, the central track
//! (always inked) and the descender track. Whether a bar inks the outer
//! bands follows its track values.

use crate::Bar;

/// Module rows of the ascender band.
pub const ASCENDER_ROWS: u32 = 3;
/// Module rows of the central track band, inked by every bar.
pub const TRACK_ROWS: u32 = 2;
/// Module rows of the descender band.
pub const DESCENDER_ROWS: u32 = 3;
/// Total module rows of the raster at scale 1.
pub const BAR_ROWS: u32 = ASCENDER_ROWS + TRACK_ROWS + DESCENDER_ROWS;

/// Renders a bar sequence as a boolean raster, row by row.
///
/// ```
/// use rm4scc::{encode, rm4scc_len, rm4scc_width, Bar, Rm4sccRender, BAR_ROWS};
///
/// const W: usize = rm4scc_width!(rm4scc_len!(0));
/// const H: usize = BAR_ROWS as usize;
///
/// let mut storage = [Bar::default(); rm4scc_len!(0)];
/// let barcode = encode("", &mut storage)?;
///
/// let mut raster = [false; W * H];
/// Rm4sccRender::new(barcode).fill_bits(&mut raster);
/// # Ok::<(), rm4scc::UnsupportedCharacter>(())
/// ```
#[derive(Debug, Clone)]
pub struct Rm4sccRender<'a> {
    bars: &'a [Bar],
    scale: (u16, u16),
    inverted: bool,
}

impl<'a> Rm4sccRender<'a> {
    pub const fn new(bars: &'a [Bar]) -> Self {
        Self { bars, scale: (1, 1), inverted: false }
    }

    /// Width of the raster in samples: 1-module bars with 1-module gaps,
    /// times the horizontal scale.
    pub const fn width(&self) -> u32 {
        ((self.bars.len() * 2) as u32).saturating_sub(1) * self.scale.0 as u32
    }

    /// Height of the raster in samples.
    pub const fn height(&self) -> u32 {
        BAR_ROWS * self.scale.1 as u32
    }

    /// Returns the scale as (scale X axis, scale Y axis).
    pub const fn scale(&self) -> (u16, u16) {
        self.scale
    }

    /// Sets the number of samples per module on each axis.
    pub const fn set_scale(mut self, scale: (u16, u16)) -> Self {
        assert!(scale.0 > 0 && scale.1 > 0, "scale must be at least (1, 1)");
        self.scale = scale;
        self
    }

    /// Returns whether samples are rendered with inverted values.
    pub const fn inverted(&self) -> bool {
        self.inverted
    }

    /// Marks whether this barcode should be rendered with inverted values.
    pub const fn set_inverted(mut self, inverted: bool) -> Self {
        self.inverted = inverted;
        self
    }

    /// Iterates over the raster row-major, one boolean per sample.
    pub fn bits(&self) -> impl Iterator<Item = bool> + 'a {
        let (sx, sy) = (self.scale.0 as u32, self.scale.1 as u32);
        let inverted = self.inverted;
        let bars = self.bars;
        let width = self.width();
        (0..self.height()).flat_map(move |y| {
            let band = y / sy;
            (0..width).map(move |x| {
                let module = (x / sx) as usize;
                // Odd modules are the gaps between bars.
                let on = module % 2 == 0 && {
                    let bar = bars[module / 2];
                    if band < ASCENDER_ROWS {
                        bar.top_value() == 1
                    } else if band < ASCENDER_ROWS + TRACK_ROWS {
                        true
                    } else {
                        bar.bottom_value() == 1
                    }
                };
                on ^ inverted
            })
        })
    }

    /// Fills `target` with `on`/`off` samples, row-major.
    pub fn fill<P: Clone>(&self, target: &mut [P], on: &P, off: &P) {
        for (i, bit) in self.bits().enumerate() {
            target[i] = if bit { on.clone() } else { off.clone() };
        }
    }

    pub fn fill_bits(&self, target: &mut [bool]) {
        self.fill(target, &true, &false);
    }

    /// Packs the raster into `target` MSB first, eight samples per byte with
    /// no row padding. `target` must be zeroed beforehand.
    pub fn fill_bitmap(&self, target: &mut [u8]) {
        for (i, bit) in self.bits().enumerate() {
            if bit {
                target[i / 8] |= 1 << (7 - (i % 8));
            }
        }
    }
}

#[cfg(feature = "embedded-graphics")]
mod eg {
    use embedded_graphics::prelude::*;
    use embedded_graphics::Pixel;

    use super::Rm4sccRender;

    impl<'a> Rm4sccRender<'a> {
        /// Draws every inked sample as a pixel of `color`, with the top-left
        /// corner of the raster at `offset`.
        pub fn draw_at<D>(
            &self,
            target: &mut D,
            offset: Point,
            color: D::Color,
        ) -> Result<(), D::Error>
        where
            D: DrawTarget,
        {
            let width = self.width();
            target.draw_iter(self.bits().enumerate().filter_map(|(i, on)| {
                on.then(|| {
                    let x = (i as u32 % width) as i32;
                    let y = (i as u32 / width) as i32;
                    Pixel(offset + Point::new(x, y), color)
                })
            }))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bar::*;

    fn raster(bars: &[Bar]) -> Vec<bool> {
        Rm4sccRender::new(bars).bits().collect()
    }

    #[test]
    fn test_dimensions() {
        let bars = [Short, Up, Down];
        let render = Rm4sccRender::new(&bars);
        assert_eq!(render.width(), 5);
        assert_eq!(render.height(), 8);

        let scaled = render.set_scale((3, 2));
        assert_eq!(scaled.width(), 15);
        assert_eq!(scaled.height(), 16);

        assert_eq!(Rm4sccRender::new(&[]).width(), 0);
    }

    #[test]
    fn test_single_bar_bands() {
        // A short bar only inks the central track rows (3..5).
        let short = raster(&[Short]);
        assert_eq!(short.len(), 8);
        for (y, on) in short.iter().enumerate() {
            assert_eq!(*on, (3..5).contains(&y), "row {y}");
        }

        // A long bar inks the full column.
        assert!(raster(&[Long]).iter().all(|&on| on));

        // Up inks ascender + track, Down inks track + descender.
        let up = raster(&[Up]);
        assert!(up[..5].iter().all(|&on| on) && !up[5..].iter().any(|&on| on));
        let down = raster(&[Down]);
        assert!(!down[..3].iter().any(|&on| on) && down[3..].iter().all(|&on| on));
    }

    #[test]
    fn test_gap_columns_are_blank() {
        let bits = raster(&[Long, Long]);
        // width 3, the middle column is the gap
        for y in 0..8 {
            assert!(!bits[y * 3 + 1], "gap inked at row {y}");
        }
    }

    #[test]
    fn test_scaling_repeats_samples() {
        let bits: Vec<bool> = Rm4sccRender::new(&[Up])
            .set_scale((2, 1))
            .bits()
            .collect();
        let reference = raster(&[Up]);
        assert_eq!(bits.len(), reference.len() * 2);
        for (i, &on) in reference.iter().enumerate() {
            assert_eq!(bits[2 * i], on);
            assert_eq!(bits[2 * i + 1], on);
        }
    }

    #[test]
    fn test_inversion_flips_every_sample() {
        let normal = raster(&[Up, Down]);
        let inverted: Vec<bool> = Rm4sccRender::new(&[Up, Down])
            .set_inverted(true)
            .bits()
            .collect();
        assert_eq!(normal.len(), inverted.len());
        assert!(normal.iter().zip(&inverted).all(|(a, b)| *a != *b));
    }

    #[test]
    fn test_fill_bitmap_packs_msb_first() {
        let bars = [Long];
        let render = Rm4sccRender::new(&bars);
        let mut bitmap = [0u8; 1];
        render.fill_bitmap(&mut bitmap);
        // 1x8 raster of a long bar: every sample inked.
        assert_eq!(bitmap, [0xFF]);
    }
}

//! Pixel buffer
//!
//! A `width × height` grid of [`Rgb`] values indexed `(x, y)`. `x` is the
//! outer axis: pixels are stored, and serialized onto the wire, x-major
//! (`index = x * height + y`).

use alloc::vec;
use alloc::vec::Vec;

use crate::color::Rgb;
use crate::error::Error;
use crate::rotation::Rotation;

/// Default buffer width (one panel)
pub const DEFAULT_WIDTH: usize = 16;

/// Default buffer height (one panel)
pub const DEFAULT_HEIGHT: usize = 16;

/// Resizable RGB pixel grid
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Rgb>,
}

impl Default for PixelBuffer {
    fn default() -> Self {
        Self::new(DEFAULT_WIDTH, DEFAULT_HEIGHT)
    }
}

impl PixelBuffer {
    /// Create a black buffer
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![Rgb::BLACK; width * height],
        }
    }

    /// Build a buffer from pixel data in storage order
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Rgb>) -> Result<Self, Error> {
        if width.checked_mul(height) != Some(pixels.len()) {
            return Err(Error::ShapeMismatch);
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    /// Build a buffer by evaluating `f(x, y)` for every pixel
    pub fn from_fn(width: usize, height: usize, mut f: impl FnMut(usize, usize) -> Rgb) -> Self {
        let mut pixels = Vec::with_capacity(width * height);
        for x in 0..width {
            for y in 0..height {
                pixels.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            pixels,
        }
    }

    /// Reallocate to a new shape; every pixel becomes black
    ///
    /// Negative dimensions, or a shape too large to allocate, fail with
    /// [`Error::InvalidDimension`] and leave the buffer untouched.
    pub fn resize(&mut self, width: i32, height: i32) -> Result<(), Error> {
        let width = usize::try_from(width).map_err(|_| Error::InvalidDimension)?;
        let height = usize::try_from(height).map_err(|_| Error::InvalidDimension)?;
        let len = width
            .checked_mul(height)
            .filter(|len| len.checked_mul(3).is_some())
            .ok_or(Error::InvalidDimension)?;

        let mut pixels = Vec::new();
        pixels
            .try_reserve_exact(len)
            .map_err(|_| Error::InvalidDimension)?;
        pixels.resize(len, Rgb::BLACK);

        *self = Self {
            width,
            height,
            pixels,
        };
        Ok(())
    }

    /// Buffer width (first axis)
    pub fn width(&self) -> usize {
        self.width
    }

    /// Buffer height (second axis)
    pub fn height(&self) -> usize {
        self.height
    }

    /// `(width, height)`
    pub fn shape(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Pixel data in storage order
    pub fn pixels(&self) -> &[Rgb] {
        &self.pixels
    }

    /// Consume the buffer, returning its pixel data
    pub fn into_pixels(self) -> Vec<Rgb> {
        self.pixels
    }

    fn index(&self, x: i32, y: i32) -> Option<usize> {
        let x = usize::try_from(x).ok()?;
        let y = usize::try_from(y).ok()?;
        if x < self.width && y < self.height {
            Some(x * self.height + y)
        } else {
            None
        }
    }

    /// Read without bounds conversion; callers guarantee `x < width, y < height`
    #[inline]
    fn at(&self, x: usize, y: usize) -> Rgb {
        self.pixels[x * self.height + y]
    }

    /// Read a pixel
    pub fn get(&self, x: i32, y: i32) -> Result<Rgb, Error> {
        self.index(x, y)
            .map(|i| self.pixels[i])
            .ok_or(Error::IndexOutOfRange)
    }

    /// Write a pixel
    pub fn set(&mut self, x: i32, y: i32, rgb: Rgb) -> Result<(), Error> {
        let i = self.index(x, y).ok_or(Error::IndexOutOfRange)?;
        self.pixels[i] = rgb;
        Ok(())
    }

    /// Write a pixel, ignoring coordinates outside the buffer
    pub fn set_safe(&mut self, x: i32, y: i32, rgb: Rgb) {
        if let Some(i) = self.index(x, y) {
            self.pixels[i] = rgb;
        }
    }

    /// Set every pixel
    pub fn fill(&mut self, rgb: Rgb) {
        self.pixels.fill(rgb);
    }

    /// Set every pixel to black
    pub fn clear(&mut self) {
        self.fill(Rgb::BLACK);
    }

    /// Circularly shift along the second (y) axis
    ///
    /// The pixel at `(x, y)` moves to `(x, (y + delta) mod height)`.
    pub fn roll_horizontal(&mut self, delta: i32) {
        if self.height == 0 {
            return;
        }
        let shift = wrap(delta, self.height);
        for column in self.pixels.chunks_exact_mut(self.height) {
            column.rotate_right(shift);
        }
    }

    /// Circularly shift along the first (x) axis
    ///
    /// The pixel at `(x, y)` moves to `((x + delta) mod width, y)`.
    pub fn roll_vertical(&mut self, delta: i32) {
        if self.width == 0 {
            return;
        }
        let shift = wrap(delta, self.width);
        self.pixels.rotate_right(shift * self.height);
    }

    /// Copy of this buffer rotated counter-clockwise
    ///
    /// Odd quarter turns swap width and height. For one quarter turn,
    /// `out(i, j) = in(j, height - 1 - i)`.
    pub fn rotated(&self, rotation: Rotation) -> PixelBuffer {
        let (w, h) = (self.width, self.height);
        match rotation {
            Rotation::Deg0 => self.clone(),
            Rotation::Deg90 => Self::from_fn(h, w, |i, j| self.at(j, h - 1 - i)),
            Rotation::Deg180 => Self::from_fn(w, h, |i, j| self.at(w - 1 - i, h - 1 - j)),
            Rotation::Deg270 => Self::from_fn(h, w, |i, j| self.at(w - 1 - j, i)),
        }
    }

    /// Copy of the `width × height` region whose corner is at `(x, y)`
    ///
    /// The result always has the requested shape; cells whose source lies
    /// outside this buffer are black.
    pub fn window(&self, x: i32, y: i32, width: usize, height: usize) -> PixelBuffer {
        Self::from_fn(width, height, |i, j| {
            let sx = i64::from(x) + i as i64;
            let sy = i64::from(y) + j as i64;
            match (i32::try_from(sx), i32::try_from(sy)) {
                (Ok(sx), Ok(sy)) => self.get(sx, sy).unwrap_or(Rgb::BLACK),
                _ => Rgb::BLACK,
            }
        })
    }

    /// Iterate over `(x, y, pixel)` in storage order
    pub fn iter(&self) -> impl Iterator<Item = (usize, usize, Rgb)> + '_ {
        let height = self.height;
        self.pixels
            .iter()
            .enumerate()
            .map(move |(i, &rgb)| (i / height, i % height, rgb))
    }
}

/// Reduce a signed shift into `0..len`
fn wrap(delta: i32, len: usize) -> usize {
    i64::from(delta).rem_euclid(len as i64) as usize
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Buffer where every pixel encodes its own coordinates
    fn coordinate_buffer(width: usize, height: usize) -> PixelBuffer {
        PixelBuffer::from_fn(width, height, |x, y| Rgb::new(x as u8, y as u8, 7))
    }

    #[test]
    fn test_default_is_16x16_black() {
        let buffer = PixelBuffer::default();
        assert_eq!(buffer.shape(), (16, 16));
        assert!(buffer.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_set_get() {
        let mut buffer = PixelBuffer::default();
        buffer.set(3, 9, Rgb::new(1, 2, 3)).unwrap();
        assert_eq!(buffer.get(3, 9), Ok(Rgb::new(1, 2, 3)));
        assert_eq!(buffer.get(9, 3), Ok(Rgb::BLACK));
        // x-major storage
        assert_eq!(buffer.pixels()[3 * 16 + 9], Rgb::new(1, 2, 3));
    }

    #[test]
    fn test_checked_access_out_of_range() {
        let mut buffer = PixelBuffer::new(4, 2);
        assert_eq!(buffer.get(4, 0), Err(Error::IndexOutOfRange));
        assert_eq!(buffer.get(0, 2), Err(Error::IndexOutOfRange));
        assert_eq!(buffer.get(-1, 0), Err(Error::IndexOutOfRange));
        assert_eq!(buffer.set(0, -1, Rgb::WHITE), Err(Error::IndexOutOfRange));
        assert_eq!(buffer.set(4, 1, Rgb::WHITE), Err(Error::IndexOutOfRange));
    }

    #[test]
    fn test_set_safe_out_of_range_is_noop() {
        let mut buffer = coordinate_buffer(5, 3);
        let before = buffer.clone();
        for (x, y) in [(-1, 0), (0, -1), (5, 0), (0, 3), (i32::MAX, i32::MIN)] {
            buffer.set_safe(x, y, Rgb::WHITE);
        }
        assert_eq!(buffer, before);

        buffer.set_safe(4, 2, Rgb::WHITE);
        assert_eq!(buffer.get(4, 2), Ok(Rgb::WHITE));
    }

    #[test]
    fn test_resize_zero_fills() {
        let mut buffer = PixelBuffer::default();
        buffer.fill(Rgb::WHITE);
        buffer.resize(32, 8).unwrap();
        assert_eq!(buffer.shape(), (32, 8));
        assert_eq!(buffer.pixels().len(), 256);
        assert!(buffer.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_resize_negative_fails_unchanged() {
        let mut buffer = coordinate_buffer(4, 4);
        let before = buffer.clone();
        assert_eq!(buffer.resize(-1, 4), Err(Error::InvalidDimension));
        assert_eq!(buffer.resize(4, -16), Err(Error::InvalidDimension));
        assert_eq!(buffer, before);
    }

    #[test]
    fn test_resize_oversized_fails_unchanged() {
        let mut buffer = coordinate_buffer(4, 4);
        let before = buffer.clone();
        assert_eq!(
            buffer.resize(i32::MAX, i32::MAX),
            Err(Error::InvalidDimension)
        );
        assert_eq!(buffer, before);
        assert_eq!(buffer.set(0, 0, Rgb::WHITE), Ok(()));
    }

    #[test]
    fn test_resize_to_empty() {
        let mut buffer = PixelBuffer::default();
        buffer.resize(0, 0).unwrap();
        assert_eq!(buffer.shape(), (0, 0));
        buffer.roll_horizontal(3);
        buffer.roll_vertical(-3);
        assert_eq!(buffer.rotated(Rotation::Deg90).shape(), (0, 0));
    }

    #[test]
    fn test_from_pixels_shape_checked() {
        let pixels = vec![Rgb::WHITE; 12];
        assert!(PixelBuffer::from_pixels(4, 3, pixels.clone()).is_ok());
        assert_eq!(
            PixelBuffer::from_pixels(4, 4, pixels),
            Err(Error::ShapeMismatch)
        );
    }

    #[test]
    fn test_fill_and_clear() {
        let mut buffer = PixelBuffer::new(3, 3);
        buffer.fill(Rgb::new(9, 8, 7));
        assert!(buffer.pixels().iter().all(|&p| p == Rgb::new(9, 8, 7)));
        buffer.clear();
        assert!(buffer.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_roll_horizontal_moves_along_y() {
        let mut buffer = coordinate_buffer(3, 4);
        buffer.roll_horizontal(1);
        // pixel from (x, y) lands at (x, y + 1)
        assert_eq!(buffer.get(2, 1), Ok(Rgb::new(2, 0, 7)));
        assert_eq!(buffer.get(2, 0), Ok(Rgb::new(2, 3, 7)));
    }

    #[test]
    fn test_roll_vertical_moves_along_x() {
        let mut buffer = coordinate_buffer(3, 4);
        buffer.roll_vertical(-1);
        // pixel from (x, y) lands at (x - 1, y)
        assert_eq!(buffer.get(0, 2), Ok(Rgb::new(1, 2, 7)));
        assert_eq!(buffer.get(2, 2), Ok(Rgb::new(0, 2, 7)));
    }

    #[test]
    fn test_roll_wraps_past_axis_length() {
        let mut a = coordinate_buffer(5, 7);
        let mut b = a.clone();
        a.roll_horizontal(7 * 3 + 2);
        b.roll_horizontal(2);
        assert_eq!(a, b);
    }

    #[test]
    fn test_rotate_quarter_turn() {
        // numpy.rot90([[1, 2], [3, 4]]) == [[2, 4], [1, 3]]
        let buffer = PixelBuffer::from_pixels(
            2,
            2,
            vec![
                Rgb::new(1, 0, 0),
                Rgb::new(2, 0, 0),
                Rgb::new(3, 0, 0),
                Rgb::new(4, 0, 0),
            ],
        )
        .unwrap();
        let rotated = buffer.rotated(Rotation::Deg90);
        let reds: Vec<u8> = rotated.pixels().iter().map(|p| p.r).collect();
        assert_eq!(reds, [2, 4, 1, 3]);

        let rotated = buffer.rotated(Rotation::Deg270);
        let reds: Vec<u8> = rotated.pixels().iter().map(|p| p.r).collect();
        assert_eq!(reds, [3, 1, 4, 2]);

        let rotated = buffer.rotated(Rotation::Deg180);
        let reds: Vec<u8> = rotated.pixels().iter().map(|p| p.r).collect();
        assert_eq!(reds, [4, 3, 2, 1]);
    }

    #[test]
    fn test_rotate_non_square_swaps_shape() {
        let buffer = coordinate_buffer(32, 16);
        let rotated = buffer.rotated(Rotation::Deg90);
        assert_eq!(rotated.shape(), (16, 32));
        // out(i, j) = in(j, h - 1 - i)
        assert_eq!(rotated.get(0, 31), Ok(Rgb::new(31, 15, 7)));
        assert_eq!(buffer.rotated(Rotation::Deg180).shape(), (32, 16));
        assert_eq!(buffer.rotated(Rotation::Deg270).shape(), (16, 32));
    }

    #[test]
    fn test_window_pads_outside_with_black() {
        let buffer = coordinate_buffer(20, 20);
        let window = buffer.window(10, 12, 16, 16);
        assert_eq!(window.shape(), (16, 16));
        assert_eq!(window.get(0, 0), Ok(Rgb::new(10, 12, 7)));
        assert_eq!(window.get(9, 7), Ok(Rgb::new(19, 19, 7)));
        assert_eq!(window.get(10, 0), Ok(Rgb::BLACK));
        assert_eq!(window.get(0, 8), Ok(Rgb::BLACK));

        let window = buffer.window(-2, 0, 4, 4);
        assert_eq!(window.get(0, 0), Ok(Rgb::BLACK));
        assert_eq!(window.get(2, 0), Ok(Rgb::new(0, 0, 7)));
    }

    #[test]
    fn test_window_entirely_outside() {
        let buffer = coordinate_buffer(4, 4);
        let window = buffer.window(100, 100, 16, 16);
        assert!(window.pixels().iter().all(|&p| p == Rgb::BLACK));
        let window = buffer.window(i32::MAX, i32::MIN, 2, 2);
        assert!(window.pixels().iter().all(|&p| p == Rgb::BLACK));
    }

    #[test]
    fn test_iter_storage_order() {
        let buffer = coordinate_buffer(2, 3);
        let coords: Vec<(usize, usize)> = buffer.iter().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(coords, [(0, 0), (0, 1), (0, 2), (1, 0), (1, 1), (1, 2)]);
    }

    proptest! {
        #[test]
        fn prop_set_then_get(x in 0i32..16, y in 0i32..16, r in any::<u8>(), g in any::<u8>(), b in any::<u8>()) {
            let mut buffer = PixelBuffer::default();
            buffer.set(x, y, Rgb::new(r, g, b)).unwrap();
            prop_assert_eq!(buffer.get(x, y), Ok(Rgb::new(r, g, b)));
        }

        #[test]
        fn prop_four_quarter_turns_is_identity(w in 0usize..12, h in 0usize..12, seed in any::<u8>()) {
            let buffer = PixelBuffer::from_fn(w, h, |x, y| Rgb::new(x as u8, y as u8, seed));
            let mut rotated = buffer.clone();
            for _ in 0..4 {
                rotated = rotated.rotated(Rotation::Deg90);
            }
            prop_assert_eq!(rotated, buffer);
        }

        #[test]
        fn prop_roll_is_reversible(w in 1usize..10, h in 1usize..10, d in -10_000i32..10_000) {
            let original = coordinate_buffer(w, h);
            let mut buffer = original.clone();
            buffer.roll_horizontal(d);
            buffer.roll_horizontal(-d);
            buffer.roll_vertical(d);
            buffer.roll_vertical(-d);
            prop_assert_eq!(buffer, original);
        }

        #[test]
        fn prop_set_safe_outside_is_noop(x in any::<i32>(), y in any::<i32>()) {
            prop_assume!(!(0..16).contains(&x) || !(0..16).contains(&y));
            let mut buffer = coordinate_buffer(16, 16);
            let before = buffer.clone();
            buffer.set_safe(x, y, Rgb::WHITE);
            prop_assert_eq!(buffer, before);
        }
    }
}

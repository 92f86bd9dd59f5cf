//! Drawing primitives
//!
//! [`Draw`] adds shape and per-pixel helpers to [`PixelBuffer`]. Shapes are
//! plotted through [`PixelBuffer::set_safe`], so anything outside the
//! buffer is clipped instead of failing.

use unicorn_core::{Error, PixelBuffer, Rgb};

use crate::color::hsv_to_rgb;

/// Drawing operations on a pixel buffer
pub trait Draw {
    /// Straight line from `(x0, y0)` to `(x1, y1)`, both ends included
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: impl Into<Rgb>);

    /// Circle outline around `(x, y)`; a negative radius draws a point
    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: impl Into<Rgb>);

    /// Rectangle outline with corners `(x, y)` and `(x + w, y + h)`
    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: impl Into<Rgb>);

    /// Filled rectangle covering the same cells as [`Draw::draw_rect`]
    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: impl Into<Rgb>);

    /// Set one pixel from HSV
    fn set_pixel_hsv(&mut self, x: i32, y: i32, h: f32, s: f32, v: f32) -> Result<(), Error>;

    /// Set one pixel from HSV, ignoring coordinates outside the buffer
    fn set_pixel_hsv_safe(&mut self, x: i32, y: i32, h: f32, s: f32, v: f32);

    /// Exchange the colours of two pixels
    fn swap_pixels(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), Error>;

    /// Recolour every pixel with `shader(x, y)`
    fn shade<F, C>(&mut self, shader: F)
    where
        F: FnMut(usize, usize) -> C,
        C: Into<Rgb>;

    /// Fill the whole buffer with one colour
    fn fill_color(&mut self, color: impl Into<Rgb>);
}

impl Draw for PixelBuffer {
    fn draw_line(&mut self, x0: i32, y0: i32, x1: i32, y1: i32, color: impl Into<Rgb>) {
        let rgb = color.into();

        // Integer Bresenham over all octants
        let dx = (i64::from(x1) - i64::from(x0)).abs();
        let dy = -(i64::from(y1) - i64::from(y0)).abs();
        let sx = if x0 < x1 { 1 } else { -1 };
        let sy = if y0 < y1 { 1 } else { -1 };
        let mut err = dx + dy;
        let (mut x, mut y) = (x0, y0);

        loop {
            self.set_safe(x, y, rgb);
            if x == x1 && y == y1 {
                break;
            }
            let e2 = 2 * err;
            if e2 >= dy {
                err += dy;
                x += sx;
            }
            if e2 <= dx {
                err += dx;
                y += sy;
            }
        }
    }

    fn draw_circle(&mut self, x: i32, y: i32, radius: i32, color: impl Into<Rgb>) {
        let rgb = color.into();
        let (x, y) = (i64::from(x), i64::from(y));
        let radius = i64::from(radius.max(0));

        let (width, height) = self.shape();
        if x + radius < 0
            || y + radius < 0
            || x - radius >= width as i64
            || y - radius >= height as i64
        {
            return;
        }

        // Midpoint circle, one octant mirrored eight ways
        let mut f = 1 - radius;
        let mut ddf_x = 1;
        let mut ddf_y = -2 * radius;
        let mut dx = 0;
        let mut dy = radius;

        plot_wide(self, x, y + radius, rgb);
        plot_wide(self, x, y - radius, rgb);
        plot_wide(self, x + radius, y, rgb);
        plot_wide(self, x - radius, y, rgb);

        while dx < dy {
            if f >= 0 {
                dy -= 1;
                ddf_y += 2;
                f += ddf_y;
            }
            dx += 1;
            ddf_x += 2;
            f += ddf_x;

            for (px, py) in [
                (x + dx, y + dy),
                (x - dx, y + dy),
                (x + dx, y - dy),
                (x - dx, y - dy),
                (x + dy, y + dx),
                (x - dy, y + dx),
                (x + dy, y - dx),
                (x - dy, y - dx),
            ] {
                plot_wide(self, px, py, rgb);
            }
        }
    }

    fn draw_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: impl Into<Rgb>) {
        let rgb = color.into();
        // Edges are axis-aligned, so saturating only trims the clipped part
        let (x1, y1) = (x.saturating_add(w), y.saturating_add(h));
        self.draw_line(x, y, x1, y, rgb);
        self.draw_line(x1, y, x1, y1, rgb);
        self.draw_line(x1, y1, x, y1, rgb);
        self.draw_line(x, y1, x, y, rgb);
    }

    fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: impl Into<Rgb>) {
        let rgb = color.into();
        let (x1, y1) = (x.saturating_add(w), y.saturating_add(h));
        for row in y.min(y1)..=y.max(y1) {
            self.draw_line(x, row, x1, row, rgb);
        }
    }

    fn set_pixel_hsv(&mut self, x: i32, y: i32, h: f32, s: f32, v: f32) -> Result<(), Error> {
        self.set(x, y, hsv_to_rgb(h, s, v))
    }

    fn set_pixel_hsv_safe(&mut self, x: i32, y: i32, h: f32, s: f32, v: f32) {
        self.set_safe(x, y, hsv_to_rgb(h, s, v));
    }

    fn swap_pixels(&mut self, x0: i32, y0: i32, x1: i32, y1: i32) -> Result<(), Error> {
        let first = self.get(x0, y0)?;
        let second = self.get(x1, y1)?;
        self.set(x0, y0, second)?;
        self.set(x1, y1, first)
    }

    fn shade<F, C>(&mut self, mut shader: F)
    where
        F: FnMut(usize, usize) -> C,
        C: Into<Rgb>,
    {
        let (width, height) = self.shape();
        *self = PixelBuffer::from_fn(width, height, |x, y| shader(x, y).into());
    }

    fn fill_color(&mut self, color: impl Into<Rgb>) {
        self.fill(color.into());
    }
}

/// Plot a point given in widened coordinates, dropping anything that does
/// not fit the buffer's coordinate type
fn plot_wide(buffer: &mut PixelBuffer, x: i64, y: i64, rgb: Rgb) {
    if let (Ok(x), Ok(y)) = (i32::try_from(x), i32::try_from(y)) {
        buffer.set_safe(x, y, rgb);
    }
}

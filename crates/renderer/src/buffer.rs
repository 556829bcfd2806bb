/// One RGBA pixel.
pub type Rgba = [u8; 4];

const CHANNELS: usize = 4;

/// Fixed-size RGBA pixel grid, row-major, allocated once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    width:  usize,
    height: usize,
    data:   Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a `width × height` buffer with every pixel set to `fill`.
    pub fn new(width: usize, height: usize, fill: Rgba) -> Self {
        let data = fill.repeat(width * height);
        Self { width, height, data }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Raw bytes, `width * height * 4` long.
    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    /// Pixel at `(x, y)`, or `None` outside the grid.
    pub fn pixel(&self, x: usize, y: usize) -> Option<Rgba> {
        let i = self.index(x, y)?;
        let mut px = [0; CHANNELS];
        px.copy_from_slice(&self.data[i..i + CHANNELS]);
        Some(px)
    }

    /// Overwrite the pixel at `(x, y)`.  Writes outside the grid are ignored.
    pub fn set_pixel(&mut self, x: usize, y: usize, px: Rgba) {
        if let Some(i) = self.index(x, y) {
            self.data[i..i + CHANNELS].copy_from_slice(&px);
        }
    }

    /// Move every column one step left, dropping column 0.  The rightmost
    /// column keeps its old contents until the caller overwrites it.
    pub fn shift_left(&mut self) {
        if self.width < 2 {
            return;
        }
        let stride = self.width * CHANNELS;
        for row in self.data.chunks_exact_mut(stride) {
            row.copy_within(CHANNELS.., 0);
        }
    }

    /// Fill column `x` top to bottom, choosing each row's colour with `pick(y)`.
    pub fn fill_column(&mut self, x: usize, mut pick: impl FnMut(usize) -> Rgba) {
        if x >= self.width {
            return;
        }
        for y in 0..self.height {
            self.set_pixel(x, y, pick(y));
        }
    }

    fn index(&self, x: usize, y: usize) -> Option<usize> {
        (x < self.width && y < self.height).then(|| (y * self.width + x) * CHANNELS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BG: Rgba = [0, 0, 34, 255];
    const FG: Rgba = [0, 255, 255, 255];

    #[test]
    fn new_buffer_is_filled() {
        let buf = PixelBuffer::new(4, 3, BG);
        assert_eq!(buf.as_bytes().len(), 4 * 3 * 4);
        for y in 0..3 {
            for x in 0..4 {
                assert_eq!(buf.pixel(x, y), Some(BG));
            }
        }
    }

    #[test]
    fn out_of_range_access_is_inert() {
        let mut buf = PixelBuffer::new(2, 2, BG);
        assert_eq!(buf.pixel(2, 0), None);
        assert_eq!(buf.pixel(0, 2), None);
        buf.set_pixel(5, 5, FG);
        assert_eq!(buf, PixelBuffer::new(2, 2, BG));
    }

    #[test]
    fn shift_left_moves_columns_and_keeps_last() {
        let mut buf = PixelBuffer::new(3, 2, BG);
        buf.set_pixel(1, 0, FG);
        buf.set_pixel(2, 1, [9, 9, 9, 255]);

        buf.shift_left();

        assert_eq!(buf.pixel(0, 0), Some(FG));
        assert_eq!(buf.pixel(1, 0), Some(BG));
        assert_eq!(buf.pixel(1, 1), Some([9, 9, 9, 255]));
        // Column 2 still holds its previous value.
        assert_eq!(buf.pixel(2, 1), Some([9, 9, 9, 255]));
    }

    #[test]
    fn single_column_shift_is_noop() {
        let mut buf = PixelBuffer::new(1, 2, FG);
        buf.shift_left();
        assert_eq!(buf.pixel(0, 1), Some(FG));
    }

    #[test]
    fn fill_column_uses_row_picker() {
        let mut buf = PixelBuffer::new(2, 4, BG);
        buf.fill_column(1, |y| if y < 1 { BG } else { FG });
        assert_eq!(buf.pixel(1, 0), Some(BG));
        assert_eq!(buf.pixel(1, 3), Some(FG));
        assert_eq!(buf.pixel(0, 3), Some(BG));
    }
}

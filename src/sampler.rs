// Reads raw RGBA bytes straight out of a decoded image.
// No color-space conversion and no screen-density scaling: the bytes in the
// buffer are the value.

use crate::error::Error;
use crate::types::Rgba;

pub const BYTES_PER_PIXEL: usize = 4;

/// Read the four channel bytes of pixel (x,y) in a tightly packed RGBA buffer
/// that is `width` pixels wide.
///
/// `index = (y * width + x) * 4`. The height is whatever the buffer length
/// implies, so a coordinate past the last row (or a column past `width`,
/// which would alias into the next row) is an `OutOfRange` error.
pub fn sample(bytes: &[u8], width: usize, x: usize, y: usize) -> Result<Rgba, Error> {
    let height = match width.checked_mul(BYTES_PER_PIXEL) {
        Some(0) | None => 0,
        Some(row_bytes) => bytes.len() / row_bytes,
    };
    if x >= width || y >= height {
        return Err(Error::OutOfRange { x, y, width, height });
    }

    let i = (y * width + x) * BYTES_PER_PIXEL;
    Ok(Rgba::new(bytes[i], bytes[i + 1], bytes[i + 2], bytes[i + 3]))
}

/// Borrowed view over a decoded RGBA8 image.
/// Invariant: `bytes.len() == width * height * 4`.
#[derive(Clone, Copy, Debug)]
pub struct PixelBuffer<'a> {
    bytes: &'a [u8],
    width: usize,
    height: usize,
}

impl<'a> PixelBuffer<'a> {
    pub fn new(bytes: &'a [u8], width: usize, height: usize) -> Result<Self, Error> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(BYTES_PER_PIXEL))
            .ok_or(Error::BufferSize { expected: usize::MAX, actual: bytes.len() })?;
        if bytes.len() != expected {
            return Err(Error::BufferSize { expected, actual: bytes.len() });
        }
        Ok(Self { bytes, width, height })
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    #[inline]
    pub fn sample(&self, x: usize, y: usize) -> Result<Rgba, Error> {
        sample(self.bytes, self.width, x, y)
    }

    /// Red channel only; this is what the density painter reads.
    #[inline]
    pub fn red(&self, x: usize, y: usize) -> Result<u8, Error> {
        Ok(self.sample(x, y)?.r)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    // 2x2 image, every byte distinct so a wrong index can't pass by accident.
    const BYTES: [u8; 16] = [
        10, 11, 12, 13, /* (0,0) */ 20, 21, 22, 23, /* (1,0) */
        30, 31, 32, 33, /* (0,1) */ 40, 41, 42, 43, /* (1,1) */
    ];

    #[test]
    fn reads_each_corner_of_a_2x2_buffer() {
        let buf = PixelBuffer::new(&BYTES, 2, 2).unwrap();
        assert_eq!(buf.sample(0, 0).unwrap(), Rgba::new(10, 11, 12, 13));
        assert_eq!(buf.sample(1, 0).unwrap(), Rgba::new(20, 21, 22, 23)); // top-right
        assert_eq!(buf.sample(0, 1).unwrap(), Rgba::new(30, 31, 32, 33)); // bottom-left
        assert_eq!(buf.sample(1, 1).unwrap(), Rgba::new(40, 41, 42, 43));
        assert_eq!(buf.red(1, 1).unwrap(), 40);
    }

    #[test]
    fn column_past_width_does_not_alias_into_next_row() {
        // (2,0) would be index 8, which is pixel (0,1) if unchecked.
        let err = sample(&BYTES, 2, 2, 0).unwrap_err();
        assert_eq!(err, Error::OutOfRange { x: 2, y: 0, width: 2, height: 2 });
    }

    #[test]
    fn row_past_height_is_out_of_range() {
        let buf = PixelBuffer::new(&BYTES, 2, 2).unwrap();
        assert!(matches!(buf.sample(0, 2), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn zero_width_buffer_rejects_everything() {
        assert!(matches!(sample(&[], 0, 0, 0), Err(Error::OutOfRange { .. })));
    }

    #[test]
    fn huge_dimensions_are_errors_not_overflow() {
        let err = sample(&BYTES, usize::MAX, 1, 0).unwrap_err();
        assert_eq!(err, Error::OutOfRange { x: 1, y: 0, width: usize::MAX, height: 0 });

        let err = PixelBuffer::new(&BYTES, usize::MAX, 2).unwrap_err();
        assert_eq!(err, Error::BufferSize { expected: usize::MAX, actual: 16 });
    }

    #[test]
    fn rejects_buffer_with_wrong_length() {
        let err = PixelBuffer::new(&BYTES[..15], 2, 2).unwrap_err();
        assert_eq!(err, Error::BufferSize { expected: 16, actual: 15 });
    }
}

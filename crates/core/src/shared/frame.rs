use image::imageops::FilterType;
use image::{RgbImage, RgbaImage};

pub const CHANNELS: usize = 3;

/// A single decoded video frame: contiguous RGB bytes in row-major order.
///
/// Channel order is fixed to RGB when the frame leaves the decoder; the
/// rest of the pipeline never reorders channels.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    data: Vec<u8>,
    width: u32,
    height: u32,
    index: usize,
}

impl Frame {
    pub fn new(data: Vec<u8>, width: u32, height: u32, index: usize) -> Self {
        assert_eq!(
            data.len(),
            (width as usize) * (height as usize) * CHANNELS,
            "data length must equal width * height * 3"
        );
        Self {
            data,
            width,
            height,
            index,
        }
    }

    /// A frame filled with one color.
    pub fn filled(width: u32, height: u32, rgb: [u8; 3], index: usize) -> Self {
        let data = rgb
            .iter()
            .copied()
            .cycle()
            .take(width as usize * height as usize * CHANNELS)
            .collect();
        Self::new(data, width, height, index)
    }

    pub fn data(&self) -> &[u8] {
        &self.data
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn pixel(&self, x: u32, y: u32) -> [u8; 3] {
        let offset = self.offset(x, y);
        [
            self.data[offset],
            self.data[offset + 1],
            self.data[offset + 2],
        ]
    }

    /// Writes one pixel; coordinates outside the frame are ignored.
    pub fn put_pixel(&mut self, x: i32, y: i32, rgb: [u8; 3]) {
        if x < 0 || y < 0 || x >= self.width as i32 || y >= self.height as i32 {
            return;
        }
        let offset = self.offset(x as u32, y as u32);
        self.data[offset..offset + CHANNELS].copy_from_slice(&rgb);
    }

    /// Scales the frame to `target_width`, keeping the aspect ratio.
    ///
    /// The new height is truncated, never below one row. A frame already at
    /// the target width is returned unchanged.
    pub fn resized_to_width(self, target_width: u32) -> Frame {
        if self.width == target_width || self.width == 0 || target_width == 0 {
            return self;
        }
        let ratio = target_width as f64 / self.width as f64;
        let target_height = ((self.height as f64 * ratio) as u32).max(1);
        let index = self.index;

        let img = RgbImage::from_raw(self.width, self.height, self.data)
            .expect("Frame data length must match dimensions");
        let resized =
            image::imageops::resize(&img, target_width, target_height, FilterType::Triangle);
        Frame::new(resized.into_raw(), target_width, target_height, index)
    }

    /// Expands RGB into the RGBA layout the animation encoder consumes.
    pub fn to_rgba_image(&self) -> RgbaImage {
        let mut rgba = Vec::with_capacity(self.data.len() / CHANNELS * 4);
        for px in self.data.chunks_exact(CHANNELS) {
            rgba.extend_from_slice(px);
            rgba.push(u8::MAX);
        }
        RgbaImage::from_raw(self.width, self.height, rgba)
            .expect("RGBA buffer length must match dimensions")
    }

    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }
}

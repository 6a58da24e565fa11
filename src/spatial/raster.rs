//! Collaborator interfaces between the engine and pixel storage

use image::RgbaImage;

use crate::analysis::palette::Color;
use crate::spatial::grid::BoundingBox;

/// Readable sample image consumed by rule extraction
pub trait ImageSource {
    /// Region holding valid pixels
    fn bounds(&self) -> BoundingBox;

    /// Color at `(x, y)`; only called for coordinates inside `bounds`
    fn color_at(&self, x: i32, y: i32) -> Color;
}

/// Produced image handed to encoders or displays
pub trait ImageSink {
    /// Region the image covers
    fn bounds(&self) -> BoundingBox;

    /// Color at `(x, y)`, or `None` when the coordinate was never assigned
    fn color_at(&self, x: i32, y: i32) -> Option<Color>;
}

impl ImageSource for RgbaImage {
    fn bounds(&self) -> BoundingBox {
        BoundingBox::from_size(self.width() as usize, self.height() as usize)
    }

    fn color_at(&self, x: i32, y: i32) -> Color {
        self.get_pixel_checked(x as u32, y as u32)
            .copied()
            .map_or(Color::TRANSPARENT, Color::from)
    }
}

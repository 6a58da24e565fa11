//! PNG decoding of samples and encoding of generated canvases

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::analysis::palette::Color;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::raster::ImageSink;

/// Load a sample image from disk as RGBA8
///
/// # Errors
///
/// Returns an error if:
/// - The file at the given path cannot be opened or read
/// - The file is not a valid image format
pub fn load_sample<P: AsRef<Path>>(path: P) -> Result<RgbaImage> {
    let path = path.as_ref();
    let img = image::open(path).map_err(|e| AlgorithmError::ImageLoad {
        path: path.to_path_buf(),
        source: e,
    })?;
    Ok(img.to_rgba8())
}

/// Render any image sink into an RGBA buffer
///
/// Coordinates that were never assigned are filled with `background`.
pub fn render<S: ImageSink + ?Sized>(sink: &S, background: Color) -> RgbaImage {
    let bounds = sink.bounds();
    let [min_x, min_y] = bounds.min;

    ImageBuffer::from_fn(bounds.width() as u32, bounds.height() as u32, |x, y| {
        Rgba::from(
            sink.color_at(min_x + x as i32, min_y + y as i32)
                .unwrap_or(background),
        )
    })
}

/// Export a generated image as PNG with a transparent background
///
/// # Errors
///
/// Returns an error if:
/// - The image has no area
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_canvas_as_png<S: ImageSink + ?Sized, P: AsRef<Path>>(
    sink: &S,
    output_path: P,
) -> Result<()> {
    let output_path = output_path.as_ref();
    if sink.bounds().area() == 0 {
        return Err(AlgorithmError::InvalidSourceData {
            reason: "Generated image has no pixels".to_string(),
        });
    }

    let img = render(sink, Color::TRANSPARENT);

    if let Some(parent) = output_path.parent() {
        std::fs::create_dir_all(parent).map_err(|e| AlgorithmError::FileSystem {
            path: parent.to_path_buf(),
            operation: "create directory",
            source: e,
        })?;
    }

    img.save(output_path)
        .map_err(|e| AlgorithmError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

//! PNG export of assembled images with optional pattern highlighting

use std::collections::BTreeSet;
use std::path::Path;

use image::{ImageBuffer, Rgba};

use crate::io::configuration::{
    PNG_CLEAR_COLOR, PNG_HIGHLIGHT_COLOR, PNG_SCALE, PNG_SET_COLOR,
};
use crate::io::error::{PuzzleError, Result};
use crate::spatial::assembly::PixelSource;

/// Pick the export colour of one image pixel
fn pixel_color(set: bool, highlighted: bool) -> Rgba<u8> {
    let rgba = match (set, highlighted) {
        (true, true) => PNG_HIGHLIGHT_COLOR,
        (true, false) => PNG_SET_COLOR,
        (false, _) => PNG_CLEAR_COLOR,
    };
    Rgba(rgba)
}

/// Export an image as a PNG, scaling every pixel to a
/// [`PNG_SCALE`]-sized square
///
/// Pixels listed in `highlights` as `(x, y)` are drawn in the highlight
/// colour when set.
///
/// # Errors
///
/// Returns an error if:
/// - The image is empty
/// - The parent directory cannot be created
/// - The image cannot be saved to the specified path
pub fn export_image_as_png(
    image: &impl PixelSource,
    highlights: &BTreeSet<(usize, usize)>,
    output_path: &Path,
) -> Result<()> {
    let size = image.size();
    if size == 0 {
        return Err(crate::io::error::invalid_parameter(
            "image",
            &size,
            &"cannot export an empty image",
        ));
    }

    let side = u32::try_from(size)
        .ok()
        .and_then(|side| side.checked_mul(PNG_SCALE))
        .ok_or_else(|| {
            crate::io::error::invalid_parameter("image", &size, &"image too large for PNG export")
        })?;

    let img = ImageBuffer::from_fn(side, side, |px, py| {
        let x = (px / PNG_SCALE) as usize;
        let y = (py / PNG_SCALE) as usize;
        pixel_color(image.pixel(x, y), highlights.contains(&(x, y)))
    });

    if let Some(parent) = output_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent).map_err(|e| PuzzleError::FileSystem {
                path: parent.to_path_buf(),
                operation: "create directory",
                source: e,
            })?;
        }
    }

    img.save(output_path)
        .map_err(|e| PuzzleError::ImageExport {
            path: output_path.to_path_buf(),
            source: e,
        })?;

    Ok(())
}

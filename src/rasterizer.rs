// SPDX-License-Identifier: MPL-2.0
//! Vector-to-raster conversion.
//!
//! [`Rasterizer`] is the seam between the icon cache and the rendering
//! backend. [`ResvgRasterizer`] is the production implementation; tests
//! substitute closures to observe how often rasterization happens.

use crate::error::{Error, Result};
use resvg::usvg;

/// Converts an SVG document into encoded raster bytes of a fixed size.
pub trait Rasterizer: Send + Sync {
    /// Rasterizes `svg` to exactly `width` x `height` pixels.
    ///
    /// # Errors
    ///
    /// Implementations fail on malformed vector input or zero dimensions.
    fn rasterize(&self, svg: &[u8], width: u32, height: u32) -> Result<Vec<u8>>;
}

impl<F> Rasterizer for F
where
    F: Fn(&[u8], u32, u32) -> Result<Vec<u8>> + Send + Sync,
{
    fn rasterize(&self, svg: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
        self(svg, width, height)
    }
}

/// Renders with resvg into a tiny-skia pixmap and encodes the result as PNG.
///
/// The document's natural size is stretched onto the target box, matching
/// how square Material icons are meant to be scaled.
#[derive(Debug, Default, Clone, Copy)]
pub struct ResvgRasterizer;

impl ResvgRasterizer {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Rasterizer for ResvgRasterizer {
    fn rasterize(&self, svg: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
        if width == 0 || height == 0 {
            return Err(Error::InvalidInput(format!(
                "cannot rasterize to {}x{}",
                width, height
            )));
        }

        let tree = usvg::Tree::from_data(svg, &usvg::Options::default())
            .map_err(|e| Error::Rasterization(e.to_string()))?;

        let natural = tree.size();
        let scale_x = width as f32 / natural.width();
        let scale_y = height as f32 / natural.height();
        let transform = tiny_skia::Transform::from_scale(scale_x, scale_y);

        let mut pixmap = tiny_skia::Pixmap::new(width, height).ok_or_else(|| {
            Error::Rasterization(format!("failed to allocate {}x{} pixmap", width, height))
        })?;

        resvg::render(&tree, transform, &mut pixmap.as_mut());

        pixmap
            .encode_png()
            .map_err(|e| Error::Rasterization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image_rs::GenericImageView;

    const SQUARE: &str = r#"<svg xmlns="http://www.w3.org/2000/svg" viewBox="0 0 24 24" width="24" height="24"><rect width="24" height="24" fill="blue"/></svg>"#;

    #[test]
    fn output_has_requested_dimensions() {
        let png = ResvgRasterizer
            .rasterize(SQUARE.as_bytes(), 48, 48)
            .expect("svg should rasterize");
        let decoded = image_rs::load_from_memory(&png).expect("output should be a png");
        assert_eq!(decoded.dimensions(), (48, 48));
    }

    #[test]
    fn non_square_targets_stretch_the_source() {
        let png = ResvgRasterizer
            .rasterize(SQUARE.as_bytes(), 10, 4)
            .expect("svg should rasterize");
        let decoded = image_rs::load_from_memory(&png).unwrap().to_rgba8();
        assert_eq!(decoded.dimensions(), (10, 4));
        assert_eq!(decoded.get_pixel(9, 3).0, [0, 0, 255, 255]);
    }

    #[test]
    fn zero_size_is_invalid_input() {
        match ResvgRasterizer.rasterize(SQUARE.as_bytes(), 0, 24) {
            Err(Error::InvalidInput(_)) => {}
            other => panic!("expected InvalidInput, got {other:?}"),
        }
    }

    #[test]
    fn malformed_source_is_rasterization_error() {
        match ResvgRasterizer.rasterize(b"<svg>oops", 24, 24) {
            Err(Error::Rasterization(message)) => assert!(!message.is_empty()),
            other => panic!("expected Rasterization error, got {other:?}"),
        }
    }

    #[test]
    fn closures_act_as_rasterizers() {
        let fixed = |_: &[u8], w: u32, h: u32| -> Result<Vec<u8>> { Ok(vec![w as u8, h as u8]) };
        assert_eq!(fixed.rasterize(b"", 3, 5).unwrap(), vec![3, 5]);
    }
}

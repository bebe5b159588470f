//! Writing rendered images to disk.

use std::path::PathBuf;

use prism_math::Interval;
use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};
use crate::renderer::ImageBuffer;
use crate::Color;

/// Where and how the finished image is written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputOptions {
    /// Output file; the format follows the extension
    pub path: PathBuf,
    /// Display gamma applied when quantizing
    pub gamma: f64,
}

impl Default for OutputOptions {
    fn default() -> Self {
        Self {
            path: PathBuf::from("output.png"),
            gamma: 2.2,
        }
    }
}

/// Apply gamma correction.
#[inline]
pub fn linear_to_gamma(linear: f64, gamma: f64) -> f64 {
    if linear > 0.0 {
        linear.powf(1.0 / gamma)
    } else {
        0.0
    }
}

/// Convert a linear color to 8-bit channels.
pub fn color_to_rgb8(color: Color, gamma: f64) -> [u8; 3] {
    let quantize = |c: f64| {
        let display = Interval::UNIT.clamp(linear_to_gamma(c, gamma));
        (255.0 * display).round() as u8
    };
    [quantize(color.x), quantize(color.y), quantize(color.z)]
}

/// Quantize the buffer into an 8-bit RGB image.
pub fn to_rgb_image(buffer: &ImageBuffer, gamma: f64) -> RenderResult<image::RgbImage> {
    if !(gamma > 0.0 && gamma.is_finite()) {
        return Err(RenderError::InvalidGamma(gamma));
    }

    Ok(image::RgbImage::from_fn(buffer.width(), buffer.height(), |x, y| {
        image::Rgb(color_to_rgb8(buffer.pixel_color(x, y), gamma))
    }))
}

/// Save the buffer according to `options`.
pub fn save_image(buffer: &ImageBuffer, options: &OutputOptions) -> RenderResult<()> {
    let rgb = to_rgb_image(buffer, options.gamma)?;
    rgb.save(&options.path)?;
    log::debug!("Saved {}x{} image to {}", buffer.width(), buffer.height(), options.path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_to_gamma() {
        assert_eq!(linear_to_gamma(0.0, 2.2), 0.0);
        assert_eq!(linear_to_gamma(-1.0, 2.2), 0.0);
        assert!((linear_to_gamma(1.0, 2.2) - 1.0).abs() < 1e-12);
        assert!((linear_to_gamma(0.25, 2.0) - 0.5).abs() < 1e-12);
    }

    #[test]
    fn test_color_to_rgb8_clamps() {
        assert_eq!(color_to_rgb8(Color::new(2.0, -1.0, 1.0), 2.2), [255, 0, 255]);
        assert_eq!(color_to_rgb8(Color::new(0.25, 0.25, 0.25), 2.0), [128, 128, 128]);
    }

    #[test]
    fn test_rejects_bad_gamma() {
        let buffer = ImageBuffer::new(2, 2);
        assert!(matches!(to_rgb_image(&buffer, 0.0), Err(RenderError::InvalidGamma(_))));
        assert!(matches!(to_rgb_image(&buffer, f64::NAN), Err(RenderError::InvalidGamma(_))));
    }

    #[test]
    fn test_to_rgb_image_layout() {
        let mut buffer = ImageBuffer::new(3, 2);
        buffer.set_pixel_color(2, 1, Color::new(1.0, 0.0, 0.0));

        let rgb = to_rgb_image(&buffer, 2.2).unwrap();
        assert_eq!(rgb.dimensions(), (3, 2));
        assert_eq!(rgb.get_pixel(2, 1).0, [255, 0, 0]);
        assert_eq!(rgb.get_pixel(0, 0).0, [0, 0, 0]);
    }

    #[test]
    fn test_save_image_writes_png() {
        let path = std::env::temp_dir().join(format!("prism_output_{}.png", std::process::id()));
        let options = OutputOptions {
            path: path.clone(),
            ..Default::default()
        };

        save_image(&ImageBuffer::new(4, 4), &options).unwrap();
        assert_eq!(image::image_dimensions(&path).unwrap(), (4, 4));
        std::fs::remove_file(path).unwrap();
    }

    #[test]
    fn test_unknown_extension_is_an_error() {
        let options = OutputOptions {
            path: std::env::temp_dir().join("prism_output.notaformat"),
            ..Default::default()
        };
        assert!(matches!(
            save_image(&ImageBuffer::new(1, 1), &options),
            Err(RenderError::Image(_))
        ));
    }
}

use std::io::{BufRead, Seek};

use crate::error::Result;
use crate::image::{Image, PixelFormat};

impl Image {
    /// Reads an image from a PNG file.
    pub fn read_png<R: BufRead + Seek>(input: R) -> Result<Image> {
        let mut decoder = png::Decoder::new(input);
        decoder.set_transformations(
            png::Transformations::STRIP_16 | png::Transformations::EXPAND,
        );
        let info = decoder.read_header_info()?;
        let (width, height) = (info.width, info.height);
        let mut reader = decoder.read_info()?;

        let (color_type, bit_depth) = reader.output_color_type();
        assert!(bit_depth == png::BitDepth::Eight);
        let pixel_format = match color_type {
            png::ColorType::Rgba => PixelFormat::RGBA,
            png::ColorType::Rgb => PixelFormat::RGB,
            png::ColorType::GrayscaleAlpha => PixelFormat::GrayAlpha,
            png::ColorType::Grayscale => PixelFormat::Gray,
            _ => unreachable!(), // EXPAND prevents paletted output
        };

        let mut image = Image::new(pixel_format, width, height);
        assert_eq!(Some(image.data().len()), reader.output_buffer_size());
        reader.next_frame(image.data_mut())?;
        reader.finish()?;
        Ok(image)
    }
}

//! Conversion of decoded images into the legacy uncompressed and
//! RLE-compressed icon payload formats.

use crate::icontype::Encoding;
use crate::image::{Image, PixelFormat};

/// Longest run a single 0x80..0xFF control byte can encode.
const MAX_RUN_LENGTH: usize = 130;
/// Longest literal span a single 0x00..0x7F control byte can encode.
const MAX_LITERAL_LENGTH: usize = 128;
/// Shortest repeat worth a run record.
const MIN_RUN_LENGTH: usize = 3;

/// Encodes the image into the data payload for a legacy (non-PNG) icon
/// encoding.  The image must be in RGBA format.
pub(crate) fn encode(image: &Image, encoding: Encoding) -> Vec<u8> {
    debug_assert_eq!(image.pixel_format(), PixelFormat::RGBA);
    match encoding {
        Encoding::Mask8 => extract_channel(image, 3),
        Encoding::Rle24 => {
            let mut payload = Vec::new();
            for channel in 0..3 {
                compress(&extract_channel(image, channel), &mut payload);
            }
            payload
        }
        Encoding::Argb32 => {
            let mut payload = b"ARGB".to_vec();
            for channel in [3, 0, 1, 2] {
                compress(&extract_channel(image, channel), &mut payload);
            }
            payload
        }
        Encoding::Png => unreachable!("PNG payloads are stored verbatim"),
    }
}

/// Returns one byte per pixel in row-major order, taken from the given
/// channel (0=red, 1=green, 2=blue, 3=alpha) of each RGBA pixel.
fn extract_channel(image: &Image, channel: usize) -> Vec<u8> {
    image.data().iter().skip(channel).step_by(4).copied().collect()
}

/// Compresses one channel plane with the ICNS variant of PackBits and
/// appends the result to `output`.
///
/// A control byte below 0x80 is followed by `control + 1` verbatim bytes; a
/// control byte of 0x80 or above is followed by one byte repeated
/// `control - 0x80 + 3` times.  A run record is emitted whenever at least
/// three consecutive bytes match.  Unlike the classic Macintosh PackBits
/// scheme there is no two's-complement control byte and no 0x80 no-op.
fn compress(plane: &[u8], output: &mut Vec<u8>) {
    let mut literal: Vec<u8> = Vec::new();
    let mut index = 0;
    while index < plane.len() {
        let value = plane[index];
        let mut run_length = 1;
        while run_length < MAX_RUN_LENGTH
            && index + run_length < plane.len()
            && plane[index + run_length] == value
        {
            run_length += 1;
        }
        if run_length >= MIN_RUN_LENGTH {
            flush_literal(&mut literal, output);
            output.push((0x80 + (run_length - MIN_RUN_LENGTH)) as u8);
            output.push(value);
            index += run_length;
        } else {
            literal.push(value);
            if literal.len() == MAX_LITERAL_LENGTH {
                flush_literal(&mut literal, output);
            }
            index += 1;
        }
    }
    flush_literal(&mut literal, output);
}

/// Emits a pending literal record, if any.
fn flush_literal(literal: &mut Vec<u8>, output: &mut Vec<u8>) {
    if !literal.is_empty() {
        output.push((literal.len() - 1) as u8);
        output.append(literal);
    }
}

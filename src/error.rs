use std::io;

use thiserror::Error;

use crate::icontype::OSType;

/// Errors that can occur while reading, writing, or building ICNS data.
#[derive(Debug, Error)]
pub enum Error {
    /// The file header or an element header is malformed: wrong magic
    /// literal, or a length field that is too small or overruns the data.
    #[error("malformed icns data: {0}")]
    Format(String),

    /// The requested OSType is not in the supported icon type table.
    #[error("unsupported icon type '{0}'")]
    UnsupportedType(OSType),

    /// The source image could not be decoded as a PNG file.
    #[cfg(feature = "pngio")]
    #[error("invalid image data: {0}")]
    InvalidImage(#[from] png::DecodingError),

    /// The decoded source image is not square.
    #[error("image must be square (got {width}x{height})")]
    NotSquare {
        /// Width of the rejected image, in pixels.
        width: u32,
        /// Height of the rejected image, in pixels.
        height: u32,
    },

    /// The decoded source image does not have the pixel size its icon type
    /// requires.
    #[error("image must be {expected}x{expected} for '{ostype}' \
             (got {actual}x{actual})")]
    WrongSize {
        /// The icon type the image was meant for.
        ostype: OSType,
        /// Pixel size required by that icon type.
        expected: u32,
        /// Pixel size of the rejected image.
        actual: u32,
    },

    /// An underlying reader or writer failed.
    #[error(transparent)]
    Io(#[from] io::Error),
}

impl Error {
    /// Classifies a read failure during parsing: running out of bytes in the
    /// middle of a structure is a format problem, anything else is a real
    /// I/O failure.
    pub(crate) fn from_read(err: io::Error) -> Error {
        if err.kind() == io::ErrorKind::UnexpectedEof {
            Error::Format("unexpected end of icns data".to_string())
        } else {
            Error::Io(err)
        }
    }
}

/// A specialized `Result` type for ICNS operations.
pub type Result<T> = std::result::Result<T, Error>;

//! Library for reading and writing Apple Icon Image (.icns) files.
//!
//! See https://en.wikipedia.org/wiki/Apple_Icon_Image_format for more
//! information about the file format.
//!
//! An ICNS file is a small envelope -- the magic literal `icns` followed by
//! a big-endian total length -- wrapping a sequence of icon elements.  Each
//! element is a four-byte [`OSType`], a big-endian record length, and a data
//! payload.  Modern icon types store a PNG file verbatim; legacy types store
//! raw or RLE-compressed channel planes.
//!
//! Reading a file yields the elements as raw type/payload pairs; no pixel
//! decoding happens on read.  New elements are built from encoded PNG data
//! with [`IconFamily::append_image`], which converts the pixels to the
//! legacy payload format when the icon type calls for one.
//!
//! # Example
//!
//! ```no_run
//! use apple_icns::{IconFamily, OSType};
//! use std::fs::File;
//! use std::io::{BufReader, BufWriter};
//! use std::str::FromStr;
//!
//! let file = BufReader::new(File::open("input.icns").unwrap());
//! let mut family = IconFamily::read(file).unwrap();
//!
//! let png_data = std::fs::read("512x512.png").unwrap();
//! let ostype = OSType::from_str("ic09").unwrap();
//! family.append_image(&png_data, ostype).unwrap();
//!
//! let out = BufWriter::new(File::create("output.icns").unwrap());
//! family.write(out).unwrap();
//! ```

#![warn(missing_docs)]

mod bitmap;
mod element;
mod error;
mod family;
mod icontype;
mod image;
#[cfg(feature = "pngio")]
mod pngio;

pub use crate::element::IconElement;
pub use crate::error::{Error, Result};
pub use crate::family::IconFamily;
pub use crate::icontype::{Encoding, IconType, OSType};
pub use crate::image::{Image, PixelFormat};

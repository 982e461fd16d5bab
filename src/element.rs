use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

#[cfg(feature = "pngio")]
use crate::bitmap;
use crate::error::{Error, Result};
#[cfg(feature = "pngio")]
use crate::icontype::Encoding;
use crate::icontype::{IconType, OSType};
#[cfg(feature = "pngio")]
use crate::image::Image;

/// The length of an icon element header, in bytes:
const ICON_ELEMENT_HEADER_LENGTH: u32 = 8;

/// One entry in an ICNS file: a four-byte OSType followed by a
/// length-prefixed data payload.
pub struct IconElement {
    ostype: OSType,
    data: Vec<u8>,
}

impl IconElement {
    /// Creates an icon element with the given OSType and data payload.
    pub fn new(ostype: OSType, data: Vec<u8>) -> IconElement {
        IconElement { ostype, data }
    }

    /// Creates an icon element for the given icon type from an encoded PNG
    /// file.  The PNG must decode to a square image whose size matches the
    /// icon type's required size.  For PNG-encoded icon types the file bytes
    /// are stored verbatim; for legacy types the decoded pixels are converted
    /// to the type's payload format.
    #[cfg(feature = "pngio")]
    pub fn from_png(png_data: &[u8], ostype: OSType) -> Result<IconElement> {
        let icon_type = IconType::from_ostype(ostype)
            .ok_or(Error::UnsupportedType(ostype))?;
        let image = Image::read_png(io::Cursor::new(png_data))?;
        if image.width() != image.height() {
            return Err(Error::NotSquare {
                width: image.width(),
                height: image.height(),
            });
        }
        if image.width() != icon_type.pixel_size() {
            return Err(Error::WrongSize {
                ostype,
                expected: icon_type.pixel_size(),
                actual: image.width(),
            });
        }
        let data = match icon_type.encoding() {
            Encoding::Png => png_data.to_vec(),
            encoding => bitmap::encode(&image.to_rgba(), encoding),
        };
        Ok(IconElement::new(ostype, data))
    }

    /// Returns the OSType for this element (e.g. `it32` or `ic10`).
    pub fn ostype(&self) -> OSType {
        self.ostype
    }

    /// Returns the icon type this element stores, or `None` if its OSType is
    /// not in the supported type table.
    pub fn icon_type(&self) -> Option<IconType> {
        IconType::from_ostype(self.ostype)
    }

    /// Returns the element's data payload.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Returns the encoded length of the element, in bytes, including the
    /// eight-byte header.  Always computed from the current payload.
    pub fn total_length(&self) -> u32 {
        ICON_ELEMENT_HEADER_LENGTH + (self.data.len() as u32)
    }

    /// Reads an icon element from within an ICNS file.
    pub fn read<R: Read>(mut reader: R) -> Result<IconElement> {
        let mut raw_ostype = [0u8; 4];
        reader.read_exact(&mut raw_ostype).map_err(Error::from_read)?;
        let element_length =
            reader.read_u32::<BigEndian>().map_err(Error::from_read)?;
        if element_length < ICON_ELEMENT_HEADER_LENGTH {
            return Err(Error::Format(format!(
                "invalid element length ({})",
                element_length
            )));
        }
        let data_length = element_length - ICON_ELEMENT_HEADER_LENGTH;
        let mut data = vec![0u8; data_length as usize];
        reader.read_exact(&mut data).map_err(Error::from_read)?;
        Ok(IconElement::new(OSType(raw_ostype), data))
    }

    /// Writes the icon element to within an ICNS file.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        let OSType(raw_ostype) = self.ostype;
        writer.write_all(&raw_ostype)?;
        writer.write_u32::<BigEndian>(self.total_length())?;
        writer.write_all(&self.data)?;
        Ok(())
    }
}

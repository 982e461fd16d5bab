use std::fmt;

/// One entry of the supported icon type table: an OSType together with the
/// square pixel size it requires and the encoding of its data payload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct IconType {
    ostype: OSType,
    pixel_size: u32,
    encoding: Encoding,
}

/// The fixed table of icon types this library knows how to build.  This is
/// the single source of truth for which OSTypes are valid and what size and
/// encoding each requires.
const SUPPORTED_TYPES: &[IconType] = &[
    IconType::new(*b"is32", 16, Encoding::Rle24),
    IconType::new(*b"il32", 32, Encoding::Rle24),
    IconType::new(*b"ih32", 48, Encoding::Rle24),
    IconType::new(*b"it32", 128, Encoding::Rle24),
    IconType::new(*b"s8mk", 16, Encoding::Mask8),
    IconType::new(*b"l8mk", 32, Encoding::Mask8),
    IconType::new(*b"h8mk", 48, Encoding::Mask8),
    IconType::new(*b"t8mk", 128, Encoding::Mask8),
    IconType::new(*b"ic04", 16, Encoding::Argb32),
    IconType::new(*b"ic05", 32, Encoding::Argb32),
    IconType::new(*b"icsb", 18, Encoding::Argb32),
    IconType::new(*b"icp4", 16, Encoding::Png),
    IconType::new(*b"icp5", 32, Encoding::Png),
    IconType::new(*b"icp6", 64, Encoding::Png),
    IconType::new(*b"ic07", 128, Encoding::Png),
    IconType::new(*b"ic08", 256, Encoding::Png),
    IconType::new(*b"ic09", 512, Encoding::Png),
    IconType::new(*b"ic10", 1024, Encoding::Png),
    IconType::new(*b"ic11", 32, Encoding::Png),
    IconType::new(*b"ic12", 64, Encoding::Png),
    IconType::new(*b"ic13", 256, Encoding::Png),
    IconType::new(*b"ic14", 512, Encoding::Png),
    IconType::new(*b"icsB", 36, Encoding::Png),
    IconType::new(*b"sb24", 24, Encoding::Png),
    IconType::new(*b"SB24", 48, Encoding::Png),
];

impl IconType {
    const fn new(raw_ostype: [u8; 4], pixel_size: u32, encoding: Encoding) -> IconType {
        IconType {
            ostype: OSType(raw_ostype),
            pixel_size,
            encoding,
        }
    }

    /// Get the icon type associated with the given OSType, if any.
    ///
    /// # Examples
    /// ```
    /// use apple_icns::{Encoding, IconType, OSType};
    /// let icon_type = IconType::from_ostype(OSType(*b"ic10")).unwrap();
    /// assert_eq!(icon_type.pixel_size(), 1024);
    /// assert_eq!(icon_type.encoding(), Encoding::Png);
    /// assert!(IconType::from_ostype(OSType(*b"zzzz")).is_none());
    /// ```
    pub fn from_ostype(ostype: OSType) -> Option<IconType> {
        SUPPORTED_TYPES.iter().find(|t| t.ostype == ostype).copied()
    }

    /// Returns the OSType that identifies this icon type.
    pub fn ostype(self) -> OSType {
        self.ostype
    }

    /// Returns the width and height this icon type requires, in pixels.
    /// "Retina" types count in pixels, not screen points, so e.g. `ic14`
    /// (256x256@2x) is 512.
    pub fn pixel_size(self) -> u32 {
        self.pixel_size
    }

    /// Returns the encoding used for this icon type's data payload.
    pub fn encoding(self) -> Encoding {
        self.encoding
    }
}

/// A Macintosh OSType (also known as a ResType), used in ICNS files to
/// identify the type of each icon element.
#[derive(Clone, Copy, Debug, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct OSType(pub [u8; 4]);

impl fmt::Display for OSType {
    fn fmt(&self, out: &mut fmt::Formatter) -> Result<(), fmt::Error> {
        let OSType(raw) = self;
        for &byte in raw {
            write!(out, "{}", char::from(byte))?;
        }
        Ok(())
    }
}

impl std::str::FromStr for OSType {
    type Err = String;

    fn from_str(input: &str) -> Result<OSType, String> {
        let bytes = input.as_bytes();
        if bytes.len() != 4 {
            Err(format!("OSType string must be 4 bytes (was {})", bytes.len()))
        } else {
            let mut raw = [0u8; 4];
            raw.clone_from_slice(bytes);
            Ok(OSType(raw))
        }
    }
}

/// Method of encoding an image within an icon element's data payload.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Encoding {
    /// Payload is a PNG file, stored verbatim.
    Png,
    /// Payload is an uncompressed 8-bit alpha mask.
    Mask8,
    /// Payload is the RLE-compressed red, green, and blue channel planes,
    /// in that order.
    Rle24,
    /// Payload is an `ARGB` tag followed by the RLE-compressed alpha, red,
    /// green, and blue channel planes, in that order.
    Argb32,
}

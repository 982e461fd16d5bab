use std::io::{self, Read, Write};

use byteorder::{BigEndian, ReadBytesExt, WriteBytesExt};

use crate::element::IconElement;
use crate::error::{Error, Result};
#[cfg(feature = "pngio")]
use crate::icontype::OSType;

/// The first four bytes of an ICNS file:
const ICNS_MAGIC_LITERAL: &[u8; 4] = b"icns";

/// The length of an icon family header, in bytes:
const ICON_FAMILY_HEADER_LENGTH: u32 = 8;

/// A set of icons stored in a single ICNS file.
pub struct IconFamily {
    /// The icon elements stored in the ICNS file, in file order.
    pub elements: Vec<IconElement>,
}

impl IconFamily {
    /// Creates a new, empty icon family.
    pub fn new() -> IconFamily {
        IconFamily { elements: Vec::new() }
    }

    /// Returns true if the icon family contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Builds an icon element for the given icon type from an encoded PNG
    /// file and appends it to the family.  No deduplication is performed;
    /// appending the same image twice yields two elements.  On error the
    /// family is left unchanged.
    #[cfg(feature = "pngio")]
    pub fn append_image(&mut self, png_data: &[u8], ostype: OSType) -> Result<()> {
        self.elements.push(IconElement::from_png(png_data, ostype)?);
        Ok(())
    }

    /// Builds an icon element for the given icon type from an encoded PNG
    /// file and inserts it at the given position.  On error the family is
    /// left unchanged.
    ///
    /// # Panics
    ///
    /// Panics if `index` is greater than the number of elements.
    #[cfg(feature = "pngio")]
    pub fn insert_image(
        &mut self,
        png_data: &[u8],
        ostype: OSType,
        index: usize,
    ) -> Result<()> {
        let element = IconElement::from_png(png_data, ostype)?;
        self.elements.insert(index, element);
        Ok(())
    }

    /// Removes and returns the element at the given position.
    ///
    /// # Panics
    ///
    /// Panics if `index` is out of bounds.
    pub fn remove_image(&mut self, index: usize) -> IconElement {
        self.elements.remove(index)
    }

    /// Reads an icon family from an ICNS file.  Elements are kept as raw
    /// type/payload pairs; no pixel decoding is performed.  Any bytes after
    /// the file length declared in the header are ignored.
    pub fn read<R: Read>(mut reader: R) -> Result<IconFamily> {
        let mut magic = [0u8; 4];
        reader.read_exact(&mut magic).map_err(Error::from_read)?;
        if magic != *ICNS_MAGIC_LITERAL {
            return Err(Error::Format(
                "not an icns file (wrong magic literal)".to_string(),
            ));
        }
        let file_length =
            reader.read_u32::<BigEndian>().map_err(Error::from_read)?;
        let mut file_position = ICON_FAMILY_HEADER_LENGTH;
        let mut family = IconFamily::new();
        while file_position < file_length {
            let element = IconElement::read(reader.by_ref())?;
            file_position += element.total_length();
            family.elements.push(element);
        }
        Ok(family)
    }

    /// Writes the icon family to an ICNS file.
    pub fn write<W: Write>(&self, mut writer: W) -> io::Result<()> {
        writer.write_all(ICNS_MAGIC_LITERAL)?;
        writer.write_u32::<BigEndian>(self.total_length())?;
        for element in &self.elements {
            element.write(writer.by_ref())?;
        }
        Ok(())
    }

    /// Returns the encoded length of the file, in bytes, including the
    /// eight-byte header.  Always computed from the current elements.
    pub fn total_length(&self) -> u32 {
        let mut length = ICON_FAMILY_HEADER_LENGTH;
        for element in &self.elements {
            length += element.total_length();
        }
        length
    }
}

impl Default for IconFamily {
    fn default() -> IconFamily {
        IconFamily::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::icontype::OSType;
    use std::io::Cursor;

    #[test]
    fn write_empty_icon_family() {
        let family = IconFamily::new();
        assert!(family.is_empty());
        assert_eq!(family.total_length(), 8);
        let mut output: Vec<u8> = vec![];
        family.write(&mut output).expect("write failed");
        assert_eq!(b"icns\0\0\0\x08", &output as &[u8]);
    }

    #[test]
    fn read_icon_family_with_fake_elements() {
        let input: Cursor<&[u8]> =
            Cursor::new(b"icns\0\0\0\x1fquux\0\0\0\x0efoobarbaz!\0\0\0\x09#");
        let family = IconFamily::read(input).expect("read failed");
        assert_eq!(2, family.elements.len());
        assert_eq!(OSType(*b"quux"), family.elements[0].ostype());
        assert_eq!(6, family.elements[0].data().len());
        assert_eq!(OSType(*b"baz!"), family.elements[1].ostype());
        assert_eq!(1, family.elements[1].data().len());
    }

    #[test]
    fn write_icon_family_with_fake_elements() {
        let mut family = IconFamily::new();
        family
            .elements
            .push(IconElement::new(OSType(*b"quux"), b"foobar".to_vec()));
        family
            .elements
            .push(IconElement::new(OSType(*b"baz!"), b"#".to_vec()));
        let mut output: Vec<u8> = vec![];
        family.write(&mut output).expect("write failed");
        assert_eq!(
            b"icns\0\0\0\x1fquux\0\0\0\x0efoobarbaz!\0\0\0\x09#",
            &output as &[u8]
        );
    }

    #[test]
    fn read_ten_elements() {
        let mut family = IconFamily::new();
        for i in 0..10u8 {
            family
                .elements
                .push(IconElement::new(OSType(*b"quux"), vec![i; 3]));
        }
        let mut encoded: Vec<u8> = vec![];
        family.write(&mut encoded).expect("write failed");
        let family =
            IconFamily::read(Cursor::new(&encoded)).expect("read failed");
        assert_eq!(10, family.elements.len());
        for (i, element) in family.elements.iter().enumerate() {
            assert_eq!(element.data(), &[i as u8; 3]);
        }
    }

    #[test]
    fn trailing_bytes_are_ignored() {
        let input: Cursor<&[u8]> =
            Cursor::new(b"icns\0\0\0\x10quux\0\0\0\x08EXTRA");
        let family = IconFamily::read(input).expect("read failed");
        assert_eq!(1, family.elements.len());
        assert_eq!(0, family.elements[0].data().len());
    }

    #[test]
    fn read_bad_magic() {
        let input: Cursor<&[u8]> = Cursor::new(b"nope\0\0\0\x08");
        let err = IconFamily::read(input).err().unwrap();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn read_file_length_overruns_data() {
        // Header claims 32 bytes but the data ends early.
        let input: Cursor<&[u8]> = Cursor::new(b"icns\0\0\0\x20quux");
        let err = IconFamily::read(input).err().unwrap();
        assert!(matches!(err, Error::Format(_)));
    }

    #[test]
    fn total_length_tracks_elements() {
        let mut family = IconFamily::new();
        assert_eq!(family.total_length(), 8);
        family
            .elements
            .push(IconElement::new(OSType(*b"quux"), vec![0u8; 10]));
        assert_eq!(family.total_length(), 8 + 18);
        family
            .elements
            .push(IconElement::new(OSType(*b"baz!"), vec![0u8; 2]));
        assert_eq!(family.total_length(), 8 + 18 + 10);
    }

    #[test]
    fn remove_image() {
        let mut family = IconFamily::new();
        family
            .elements
            .push(IconElement::new(OSType(*b"quux"), b"foo".to_vec()));
        family
            .elements
            .push(IconElement::new(OSType(*b"baz!"), b"bar".to_vec()));
        let removed = family.remove_image(0);
        assert_eq!(removed.ostype(), OSType(*b"quux"));
        assert_eq!(1, family.elements.len());
        assert_eq!(OSType(*b"baz!"), family.elements[0].ostype());
    }
}

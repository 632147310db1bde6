//! stemscale-io - Image I/O for page buffers and diagnostic charts
//!
//! Reads and writes [`Pix`] images as PNG (feature `png-format`) or binary
//! PNM (feature `pnm`). The measurement pipeline uses it to dump the erased
//! working image and the histogram chart; tests use it for fixtures.
//!
//! # Examples
//!
//! ```no_run
//! use stemscale_core::{Pix, PixelDepth};
//! use stemscale_io::{ImageFormat, read_image, write_image};
//!
//! let pix = Pix::new(64, 32, PixelDepth::Bit1).unwrap();
//! write_image(&pix, "/tmp/page.png", ImageFormat::Png).unwrap();
//! let back = read_image("/tmp/page.png").unwrap();
//! assert!(pix.equals(&back));
//! ```

mod error;
pub mod format;
#[cfg(feature = "png-format")]
pub mod png;
#[cfg(feature = "pnm")]
pub mod pnm;

pub use error::{IoError, IoResult};
pub use format::{detect_format, detect_format_from_bytes};

use stemscale_core::Pix;
use std::fs::File;
use std::io::{BufReader, BufWriter, Cursor, Write};
use std::path::Path;

/// Supported image file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ImageFormat {
    /// Portable Network Graphics
    Png,
    /// Binary portable any-map (P4 / P5 / P6)
    Pnm,
}

impl ImageFormat {
    /// Conventional file extension, without the dot
    pub fn extension(self) -> &'static str {
        match self {
            ImageFormat::Png => "png",
            ImageFormat::Pnm => "pnm",
        }
    }

    /// Guess a format from a file extension (case-insensitive)
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(ImageFormat::Png),
            "pnm" | "pbm" | "pgm" | "ppm" => Some(ImageFormat::Pnm),
            _ => None,
        }
    }
}

/// Read an image from a file, detecting its format from the header bytes.
pub fn read_image<P: AsRef<Path>>(path: P) -> IoResult<Pix> {
    let format = detect_format(&path)?;
    let reader = BufReader::new(File::open(path)?);
    read_image_format(reader, format)
}

/// Read an image from an in-memory buffer.
pub fn read_image_mem(data: &[u8]) -> IoResult<Pix> {
    let format = detect_format_from_bytes(data)?;
    read_image_format(Cursor::new(data), format)
}

fn read_image_format<R: std::io::BufRead + std::io::Seek>(
    reader: R,
    format: ImageFormat,
) -> IoResult<Pix> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::read_png(reader),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::read_pnm(reader),
        #[allow(unreachable_patterns)]
        other => Err(IoError::UnsupportedFormat(format!(
            "{other:?} support is not enabled"
        ))),
    }
}

/// Write an image to a file in the given format.
///
/// The parent directory must already exist.
pub fn write_image<P: AsRef<Path>>(pix: &Pix, path: P, format: ImageFormat) -> IoResult<()> {
    let mut writer = BufWriter::new(File::create(path)?);
    write_image_format(pix, &mut writer, format)?;
    writer.flush()?;
    Ok(())
}

/// Encode an image into an in-memory buffer.
pub fn write_image_mem(pix: &Pix, format: ImageFormat) -> IoResult<Vec<u8>> {
    let mut buffer = Vec::new();
    write_image_format(pix, &mut buffer, format)?;
    Ok(buffer)
}

fn write_image_format<W: Write>(pix: &Pix, writer: W, format: ImageFormat) -> IoResult<()> {
    match format {
        #[cfg(feature = "png-format")]
        ImageFormat::Png => png::write_png(pix, writer),
        #[cfg(feature = "pnm")]
        ImageFormat::Pnm => pnm::write_pnm(pix, writer),
        #[allow(unreachable_patterns)]
        other => {
            let _ = writer;
            Err(IoError::UnsupportedFormat(format!(
                "{other:?} support is not enabled"
            )))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_mapping() {
        assert_eq!(ImageFormat::Png.extension(), "png");
        assert_eq!(ImageFormat::from_extension("PGM"), Some(ImageFormat::Pnm));
        assert_eq!(ImageFormat::from_extension("tif"), None);
    }
}

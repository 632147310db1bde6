//! Format sniffing from leading bytes

use std::fs::File;
use std::io::Read;
use std::path::Path;

use crate::{ImageFormat, IoError, IoResult};

const PNG_SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', b'\r', b'\n', 0x1A, b'\n'];

/// Raw PNM magics: bitmap, graymap, pixmap
const PNM_MAGICS: [&[u8; 2]; 3] = [b"P4", b"P5", b"P6"];

/// Sniff the format of the file at `path`.
pub fn detect_format<P: AsRef<Path>>(path: P) -> IoResult<ImageFormat> {
    let mut head = Vec::with_capacity(PNG_SIGNATURE.len());
    File::open(path)?
        .take(PNG_SIGNATURE.len() as u64)
        .read_to_end(&mut head)?;
    detect_format_from_bytes(&head)
}

/// Sniff the format of an encoded image.
///
/// Only raw (binary) PNM is recognized; the plain-text `P1`..`P3`
/// variants are refused.
pub fn detect_format_from_bytes(data: &[u8]) -> IoResult<ImageFormat> {
    if data.starts_with(&PNG_SIGNATURE) {
        return Ok(ImageFormat::Png);
    }
    match data.get(..2) {
        Some(magic) if PNM_MAGICS.iter().any(|m| m.as_slice() == magic) => Ok(ImageFormat::Pnm),
        Some(magic) => Err(IoError::UnsupportedFormat(format!(
            "unrecognized signature {:02x?}",
            magic
        ))),
        None => Err(IoError::InvalidData(format!(
            "{} byte(s) are too few to identify an image",
            data.len()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_png_signature() {
        let mut data = PNG_SIGNATURE.to_vec();
        data.extend_from_slice(&[0, 0, 0, 13]);
        assert_eq!(detect_format_from_bytes(&data).unwrap(), ImageFormat::Png);
        assert!(detect_format_from_bytes(&PNG_SIGNATURE[..5]).is_err());
    }

    #[test]
    fn test_raw_pnm_only() {
        for header in [&b"P4\n8 2\n"[..], b"P5\n100 100\n255\n", b"P6 1 1 255 "] {
            assert_eq!(detect_format_from_bytes(header).unwrap(), ImageFormat::Pnm);
        }
        assert!(matches!(
            detect_format_from_bytes(b"P1\n"),
            Err(IoError::UnsupportedFormat(_))
        ));
    }

    #[test]
    fn test_too_short() {
        assert!(matches!(
            detect_format_from_bytes(b"P"),
            Err(IoError::InvalidData(_))
        ));
        assert!(detect_format_from_bytes(b"").is_err());
    }
}

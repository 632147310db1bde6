//! PNM (Portable Any Map) format support
//!
//! Reads and writes PBM (P4 binary), PGM (P5 binary) and PPM (P6 binary).
//! PBM shares the `Pix` convention that 1 is black. ASCII variants are not
//! supported.

use crate::{IoError, IoResult};
use stemscale_core::{Pix, PixMut, PixelDepth, color};
use std::io::{BufRead, Read, Write};

/// Read a binary PNM image (P4/P5/P6) from a reader.
///
/// Returns a `Pix` at 1 bpp (PBM), 8 bpp (PGM) or 32 bpp (PPM).
/// Only `maxval = 255` is accepted for PGM and PPM.
pub fn read_pnm<R: BufRead>(mut reader: R) -> IoResult<Pix> {
    let magic = read_token(&mut reader)?;
    let depth = match magic.as_str() {
        "P4" => PixelDepth::Bit1,
        "P5" => PixelDepth::Bit8,
        "P6" => PixelDepth::Bit32,
        other => {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM magic: {other}"
            )));
        }
    };
    let width = read_number(&mut reader)?;
    let height = read_number(&mut reader)?;
    if depth != PixelDepth::Bit1 {
        let maxval = read_number(&mut reader)?;
        if maxval != 255 {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported PNM maxval: {maxval}"
            )));
        }
    }

    let bytes_per_row = match depth {
        PixelDepth::Bit1 => width.div_ceil(8),
        PixelDepth::Bit8 => width,
        PixelDepth::Bit32 => width * 3,
    } as usize;
    let mut row = vec![0u8; bytes_per_row];
    let mut pix_mut = PixMut::new(width, height, depth)?;

    for y in 0..height {
        reader.read_exact(&mut row).map_err(|e| {
            IoError::InvalidData(format!("truncated PNM raster at row {y}: {e}"))
        })?;
        for x in 0..width {
            let val = match depth {
                PixelDepth::Bit1 => u32::from((row[(x / 8) as usize] >> (7 - (x % 8))) & 1),
                PixelDepth::Bit8 => u32::from(row[x as usize]),
                PixelDepth::Bit32 => {
                    let idx = x as usize * 3;
                    color::compose_rgb(row[idx], row[idx + 1], row[idx + 2])
                }
            };
            pix_mut.set_pixel_unchecked(x, y, val);
        }
    }

    Ok(pix_mut.into())
}

/// Write a `Pix` as binary PNM to a writer.
///
/// Chooses P4 (1 bpp), P5 (8 bpp) or P6 (32 bpp) from the pixel depth.
pub fn write_pnm<W: Write>(pix: &Pix, mut writer: W) -> IoResult<()> {
    let (width, height) = (pix.width(), pix.height());
    match pix.depth() {
        PixelDepth::Bit1 => writeln!(writer, "P4\n{width} {height}")?,
        PixelDepth::Bit8 => writeln!(writer, "P5\n{width} {height}\n255")?,
        PixelDepth::Bit32 => writeln!(writer, "P6\n{width} {height}\n255")?,
    }

    for y in 0..height {
        let row: Vec<u8> = match pix.depth() {
            PixelDepth::Bit1 => {
                let mut row = vec![0u8; width.div_ceil(8) as usize];
                for x in 0..width {
                    if pix.get_pixel_unchecked(x, y) != 0 {
                        row[(x / 8) as usize] |= 1 << (7 - (x % 8));
                    }
                }
                row
            }
            PixelDepth::Bit8 => (0..width)
                .map(|x| pix.get_pixel_unchecked(x, y) as u8)
                .collect(),
            PixelDepth::Bit32 => (0..width)
                .flat_map(|x| {
                    let (r, g, b) = color::extract_rgb(pix.get_pixel_unchecked(x, y));
                    [r, g, b]
                })
                .collect(),
        };
        writer.write_all(&row)?;
    }
    Ok(())
}

/// Read one header token, skipping whitespace and `#` comments.
///
/// Consumes the single whitespace byte that terminates the token.
fn read_token<R: BufRead>(reader: &mut R) -> IoResult<String> {
    let mut token = String::new();
    let mut byte = [0u8; 1];
    loop {
        if reader.read(&mut byte)? == 0 {
            if token.is_empty() {
                return Err(IoError::InvalidData("unexpected end of PNM header".to_string()));
            }
            return Ok(token);
        }
        let c = byte[0];
        if c == b'#' && token.is_empty() {
            let mut comment = Vec::new();
            reader.read_until(b'\n', &mut comment)?;
        } else if c.is_ascii_whitespace() {
            if !token.is_empty() {
                return Ok(token);
            }
        } else {
            token.push(c as char);
        }
    }
}

fn read_number<R: BufRead>(reader: &mut R) -> IoResult<u32> {
    let token = read_token(reader)?;
    token
        .parse()
        .map_err(|_| IoError::InvalidData(format!("invalid PNM header value: {token}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn test_pbm_roundtrip() {
        let mut pm = PixMut::new(11, 3, PixelDepth::Bit1).unwrap();
        pm.set_pixel(0, 0, 1).unwrap();
        pm.set_pixel(10, 2, 1).unwrap();
        let pix: Pix = pm.into();

        let mut buffer = Vec::new();
        write_pnm(&pix, &mut buffer).unwrap();
        assert!(buffer.starts_with(b"P4\n11 3\n"));
        let back = read_pnm(Cursor::new(buffer)).unwrap();
        assert!(pix.equals(&back));
    }

    #[test]
    fn test_pgm_with_comment() {
        let mut data = b"P5\n# made by hand\n3 1\n255\n".to_vec();
        data.extend_from_slice(&[0, 128, 255]);
        let pix = read_pnm(Cursor::new(data)).unwrap();
        assert_eq!(pix.depth(), PixelDepth::Bit8);
        assert_eq!(pix.get_pixel(1, 0), Some(128));
        assert_eq!(pix.get_pixel(2, 0), Some(255));
    }

    #[test]
    fn test_truncated_raster() {
        let data = b"P5\n4 2\n255\n\x00\x01".to_vec();
        assert!(matches!(
            read_pnm(Cursor::new(data)),
            Err(IoError::InvalidData(_))
        ));
    }

    #[test]
    fn test_reject_ascii_and_maxval() {
        assert!(read_pnm(Cursor::new(b"P1\n1 1\n1\n".to_vec())).is_err());
        assert!(read_pnm(Cursor::new(b"P5\n1 1\n65535\n\x00\x00".to_vec())).is_err());
    }
}

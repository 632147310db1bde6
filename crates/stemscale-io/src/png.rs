//! PNG image format support
//!
//! Binary images are stored as 1-bit grayscale. PNG treats 0 as black while
//! a binary `Pix` treats 1 as foreground (black), so bits are inverted on
//! both read and write.

use std::io::{BufRead, Seek, Write};

use png::{BitDepth, ColorType, Decoder, Encoder};
use stemscale_core::{Pix, PixMut, PixelDepth, color};

use crate::{IoError, IoResult};

/// Decode a PNG stream.
///
/// 1-bit gray gives a 1 bpp `Pix`, 8-bit gray gives 8 bpp, and 8-bit RGB
/// or RGBA gives 32 bpp with the alpha channel dropped.
pub fn read_png<R: BufRead + Seek>(reader: R) -> IoResult<Pix> {
    let mut reader = Decoder::new(reader)
        .read_info()
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let (width, height) = reader.info().size();
    let (color_type, bit_depth) = (reader.info().color_type, reader.info().bit_depth);
    let (depth, samples) = match (color_type, bit_depth) {
        (ColorType::Grayscale, BitDepth::One) => (PixelDepth::Bit1, 1),
        (ColorType::Grayscale, BitDepth::Eight) => (PixelDepth::Bit8, 1),
        (ColorType::Rgb, BitDepth::Eight) => (PixelDepth::Bit32, 3),
        (ColorType::Rgba, BitDepth::Eight) => (PixelDepth::Bit32, 4),
        other => {
            return Err(IoError::UnsupportedFormat(format!("PNG {other:?}")));
        }
    };

    let size = reader
        .output_buffer_size()
        .ok_or_else(|| IoError::DecodeError("PNG frame too large".to_string()))?;
    let mut buf = vec![0; size];
    let frame = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::DecodeError(e.to_string()))?;

    let mut pix = PixMut::new(width, height, depth)?;
    for (y, row) in buf[..frame.buffer_size()]
        .chunks_exact(frame.line_size)
        .take(height as usize)
        .enumerate()
    {
        for x in 0..width {
            let val = decode_sample(row, x as usize, depth, samples);
            pix.set_pixel_unchecked(x, y as u32, val);
        }
    }
    Ok(pix.into())
}

fn decode_sample(row: &[u8], x: usize, depth: PixelDepth, samples: usize) -> u32 {
    match depth {
        // PNG gray 0 is black, which is binary foreground
        PixelDepth::Bit1 => u32::from((row[x / 8] >> (7 - x % 8)) & 1 == 0),
        PixelDepth::Bit8 => u32::from(row[x]),
        PixelDepth::Bit32 => {
            let px = &row[x * samples..x * samples + 3];
            color::compose_rgb(px[0], px[1], px[2])
        }
    }
}

/// Encode `pix` as PNG: 1-bit gray, 8-bit gray or 8-bit RGB.
pub fn write_png<W: Write>(pix: &Pix, writer: W) -> IoResult<()> {
    let (width, height) = (pix.width(), pix.height());
    let (color_type, bit_depth, line_size) = match pix.depth() {
        PixelDepth::Bit1 => (ColorType::Grayscale, BitDepth::One, width.div_ceil(8)),
        PixelDepth::Bit8 => (ColorType::Grayscale, BitDepth::Eight, width),
        PixelDepth::Bit32 => (ColorType::Rgb, BitDepth::Eight, 3 * width),
    };

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(color_type);
    encoder.set_depth(bit_depth);
    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::EncodeError(e.to_string()))?;

    let mut data = vec![0u8; line_size as usize * height as usize];
    for (y, row) in data.chunks_exact_mut(line_size as usize).enumerate() {
        encode_row(pix, y as u32, row);
    }
    writer
        .write_image_data(&data)
        .map_err(|e| IoError::EncodeError(e.to_string()))
}

fn encode_row(pix: &Pix, y: u32, row: &mut [u8]) {
    for x in 0..pix.width() {
        let val = pix.get_pixel_unchecked(x, y);
        let x = x as usize;
        match pix.depth() {
            PixelDepth::Bit1 if val == 0 => row[x / 8] |= 0x80 >> (x % 8),
            PixelDepth::Bit1 => {}
            PixelDepth::Bit8 => row[x] = val as u8,
            PixelDepth::Bit32 => {
                let (r, g, b) = color::extract_rgb(val);
                row[3 * x..3 * x + 3].copy_from_slice(&[r, g, b]);
            }
        }
    }
}

//! Minimal PNG writer for RGBA8 bitmaps
//!
//! Emits a single IDAT chunk of zlib-compressed scanlines with filter type 0.
//! Chunk checksums use the CRC-32 that ships with `flate2`.

use crate::bitmap::Bitmap;
use crate::error::ExportError;
use flate2::write::ZlibEncoder;
use flate2::{Compression, Crc};
use std::io::Write;

/// PNG file signature
pub const SIGNATURE: [u8; 8] = [0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A];

const BIT_DEPTH: u8 = 8;
const COLOR_TYPE_RGBA: u8 = 6;
const FILTER_NONE: u8 = 0;

/// Encode bitmap as PNG bytes
///
/// # Errors
/// - `ExportError::EmptySurface` if either dimension is zero
/// - `ExportError::Compression` if the zlib stream fails
pub fn encode(bitmap: &Bitmap) -> Result<Vec<u8>, ExportError> {
    let (width, height) = (bitmap.width(), bitmap.height());
    if width == 0 || height == 0 {
        return Err(ExportError::EmptySurface { width, height });
    }

    let mut ihdr = Vec::with_capacity(13);
    ihdr.extend_from_slice(&width.to_be_bytes());
    ihdr.extend_from_slice(&height.to_be_bytes());
    ihdr.extend_from_slice(&[BIT_DEPTH, COLOR_TYPE_RGBA, 0, 0, 0]);

    let stride = width as usize * 4;
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::default());
    for row in bitmap.pixels().chunks_exact(stride) {
        encoder.write_all(&[FILTER_NONE])?;
        encoder.write_all(row)?;
    }
    let idat = encoder.finish()?;

    let mut out = Vec::with_capacity(SIGNATURE.len() + idat.len() + 64);
    out.extend_from_slice(&SIGNATURE);
    write_chunk(&mut out, *b"IHDR", &ihdr);
    write_chunk(&mut out, *b"IDAT", &idat);
    write_chunk(&mut out, *b"IEND", &[]);
    Ok(out)
}

#[allow(clippy::cast_possible_truncation)]
fn write_chunk(out: &mut Vec<u8>, kind: [u8; 4], data: &[u8]) {
    let mut crc = Crc::new();
    crc.update(&kind);
    crc.update(data);

    out.extend_from_slice(&(data.len() as u32).to_be_bytes());
    out.extend_from_slice(&kind);
    out.extend_from_slice(data);
    out.extend_from_slice(&crc.sum().to_be_bytes());
}

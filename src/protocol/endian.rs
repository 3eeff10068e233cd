//! Endian Codec
//!
//! Element-wise conversion between host integers and the big-endian wire
//! representation. Pure functions over caller-owned slices; slice-length
//! mismatches are contract violations (asserted), never runtime errors.

/// Write one 16-bit value in network byte order
pub fn put_u16(dst: &mut [u8], value: u16) {
    assert!(dst.len() >= 2, "destination too short for u16");
    dst[..2].copy_from_slice(&value.to_be_bytes());
}

/// Write one 32-bit value in network byte order
pub fn put_u32(dst: &mut [u8], value: u32) {
    assert!(dst.len() >= 4, "destination too short for u32");
    dst[..4].copy_from_slice(&value.to_be_bytes());
}

/// Read one 16-bit value from network byte order
pub fn get_u16(src: &[u8]) -> u16 {
    assert!(src.len() >= 2, "source too short for u16");
    u16::from_be_bytes([src[0], src[1]])
}

/// Read one 32-bit value from network byte order
pub fn get_u32(src: &[u8]) -> u32 {
    assert!(src.len() >= 4, "source too short for u32");
    u32::from_be_bytes([src[0], src[1], src[2], src[3]])
}

/// Write an array of 16-bit readings in network byte order, element-wise
///
/// The destination must hold exactly `2 * values.len()` bytes from its start.
pub fn put_u16_slice(dst: &mut [u8], values: &[u16]) {
    assert!(
        dst.len() >= 2 * values.len(),
        "destination too short for u16 array"
    );
    for (chunk, value) in dst.chunks_exact_mut(2).zip(values.iter()) {
        chunk.copy_from_slice(&value.to_be_bytes());
    }
}

/// Read an array of 16-bit readings from network byte order, element-wise
pub fn get_u16_slice(src: &[u8], values: &mut [u16]) {
    assert!(
        src.len() >= 2 * values.len(),
        "source too short for u16 array"
    );
    for (chunk, value) in src.chunks_exact(2).zip(values.iter_mut()) {
        *value = u16::from_be_bytes([chunk[0], chunk[1]]);
    }
}

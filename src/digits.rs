//! Integer to ASCII conversion.
//!
//! Both conversions fill a caller-provided scratch array from the end and
//! return the used tail, so no allocation takes place.


/// Maximum number of decimal digits of a 64-bit unsigned integer.
///
/// 2^64 - 1 is approximately 1.8 * 10^19.
pub const MAX_DIGITS: usize = 20;

/// Bit position of the most significant nibble of a 64-bit value.
pub const LAST_NIBBLE_FIRST_BIT: u32 = 60;

/// Maximum number of hexadecimal digits of a 64-bit value.
pub const HEX_DIGITS: usize = (LAST_NIBBLE_FIRST_BIT / 4 + 1) as usize;

const _: () = assert!(HEX_DIGITS * 4 == u64::BITS as usize);

pub type DecimalBuffer = [u8; MAX_DIGITS];
pub type HexBuffer = [u8; HEX_DIGITS];

/// Renders `value` in decimal.
///
/// # Returns
///
/// The digits, most significant first. Zero renders as a single `0`.
pub fn u64_to_decimal(mut value: u64, buf: &mut DecimalBuffer) -> &[u8] {
    let mut start = MAX_DIGITS;
    loop {
        start -= 1;
        #[allow(clippy::cast_possible_truncation, reason = "remainder is below 10")]
        let digit = (value % 10) as u8;
        buf[start] = b'0' + digit;
        value /= 10;
        if value == 0 {
            break;
        }
    }
    &buf[start..]
}

/// Renders `value` in hexadecimal without leading zeros.
///
/// Nibbles are extracted from bit [`LAST_NIBBLE_FIRST_BIT`] downwards.
pub fn u64_to_hex(value: u64, uppercase: bool, buf: &mut HexBuffer) -> &[u8] {
    let mut len = 0;
    let mut shift = LAST_NIBBLE_FIRST_BIT;
    loop {
        #[allow(clippy::cast_possible_truncation, reason = "masked to a nibble")]
        let nibble = ((value >> shift) & 0xf) as u8;

        // skip leading zeros but always keep the last nibble
        if len != 0 || nibble != 0 || shift == 0 {
            buf[len] = nibble_to_ascii(nibble, uppercase);
            len += 1;
        }

        if shift == 0 {
            break;
        }
        shift -= 4;
    }
    &buf[..len]
}

/// Converts a nibble (0..=15) to its hexadecimal digit.
pub const fn nibble_to_ascii(nibble: u8, uppercase: bool) -> u8 {
    if nibble < 10 {
        b'0' + nibble
    } else if uppercase {
        b'A' + (nibble - 10)
    } else {
        b'a' + (nibble - 10)
    }
}

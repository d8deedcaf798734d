//! Parser for a single `%` directive.

use crate::error::{PrintfError, Result};

/// Largest width or precision a directive may ask for.
pub const MAX_FIELD_WIDTH: usize = 4096;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Flags {
    pub left_justify: bool,
    pub zero_pad: bool,
    pub alternate: bool,
    pub plus_sign: bool,
    pub space_sign: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Specifier {
    SignedDecimal,
    UnsignedDecimal,
    Hex { uppercase: bool },
    Char,
    Str,
    Pointer,
    Percent,
}

impl Specifier {
    fn from_byte(ch: u8) -> Option<Self> {
        let specifier = match ch {
            b'd' | b'i' => Self::SignedDecimal,
            b'u' => Self::UnsignedDecimal,
            b'x' => Self::Hex { uppercase: false },
            b'X' => Self::Hex { uppercase: true },
            b'c' => Self::Char,
            b's' => Self::Str,
            b'p' => Self::Pointer,
            b'%' => Self::Percent,
            _ => return None,
        };
        Some(specifier)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Conversion {
    pub flags: Flags,
    pub width: Option<usize>,
    pub precision: Option<usize>,
    pub specifier: Specifier,
    /// The specifier byte as written, used for error reporting.
    pub byte: u8,
}

/// Parses the directive that follows a `%`.
///
/// # Returns
///
/// The conversion and the number of bytes it occupied after the `%`.
pub fn parse(bytes: &[u8]) -> Result<(Conversion, usize)> {
    let mut ix = 0;

    let mut flags = Flags::default();
    while let Some(&ch) = bytes.get(ix) {
        match ch {
            b'-' => flags.left_justify = true,
            b'0' => flags.zero_pad = true,
            b'#' => flags.alternate = true,
            b'+' => flags.plus_sign = true,
            b' ' => flags.space_sign = true,
            _ => break,
        }
        ix += 1;
    }

    let width = parse_number(bytes, &mut ix)?;

    let precision = if bytes.get(ix) == Some(&b'.') {
        ix += 1;
        // a lone '.' means a precision of zero
        Some(parse_number(bytes, &mut ix)?.unwrap_or(0))
    } else {
        None
    };

    // every integer argument is already 64 bits wide
    while let Some(b'h' | b'l' | b'z' | b'j' | b't') = bytes.get(ix) {
        ix += 1;
    }

    let &byte = bytes.get(ix).ok_or(PrintfError::IncompleteConversion)?;
    let specifier = Specifier::from_byte(byte).ok_or(PrintfError::UnsupportedSpecifier(byte))?;

    Ok((
        Conversion {
            flags,
            width,
            precision,
            specifier,
            byte,
        },
        ix + 1,
    ))
}

fn parse_number(bytes: &[u8], ix: &mut usize) -> Result<Option<usize>> {
    let start = *ix;
    let mut num: usize = 0;
    while let Some(&ch) = bytes.get(*ix) {
        if !ch.is_ascii_digit() {
            break;
        }
        num = num.saturating_mul(10).saturating_add(usize::from(ch - b'0'));
        if num > MAX_FIELD_WIDTH {
            return Err(PrintfError::FieldTooWide);
        }
        *ix += 1;
    }
    Ok(if *ix == start { None } else { Some(num) })
}

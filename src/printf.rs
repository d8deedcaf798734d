//! Formatted output in the manner of C `printf`.
//!
//! The format string is a byte slice and the variadic list is a slice of
//! [`Argument`]. Every integer argument is 64 bits wide, so length modifiers
//! in the format string are accepted and ignored.
//!
//! Supported conversions: `%d %i %u %x %X %c %s %p %%` with the flags
//! `- 0 # + space`, a width and a precision.

#[cfg(test)]
mod tests;

use crate::argument::Argument;
use crate::conversion::{self, Conversion, Specifier};
use crate::digits::{
    DecimalBuffer, HEX_DIGITS, HexBuffer, MAX_DIGITS, u64_to_decimal, u64_to_hex,
};
use crate::error::{PrintfError, Result};
use crate::printer::Printer;

/// Counts the bytes handed to the wrapped printer.
pub struct Formatter<'a, P: Printer + ?Sized> {
    printer: &'a mut P,
    count: usize,
    translate_newlines: bool,
}

impl<'a, P: Printer + ?Sized> Formatter<'a, P> {
    pub fn new(printer: &'a mut P) -> Self {
        Self {
            printer,
            count: 0,
            translate_newlines: false,
        }
    }

    /// Emit `\r\n` for every `\n`, as serial terminals expect.
    #[must_use]
    pub fn translate_newlines(mut self, enabled: bool) -> Self {
        self.translate_newlines = enabled;
        self
    }

    /// Number of bytes written so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn write_byte(&mut self, byte: u8) {
        if self.translate_newlines && byte == b'\n' {
            self.printer.pb(b'\r');
            self.count += 1;
        }
        self.printer.pb(byte);
        self.count += 1;
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        if self.translate_newlines {
            for &byte in bytes {
                self.write_byte(byte);
            }
        } else {
            self.printer.p(bytes);
            self.count += bytes.len();
        }
    }

    fn pad(&mut self, byte: u8, n: usize) {
        for _ in 0..n {
            self.write_byte(byte);
        }
    }

    /// Renders `format` with `args`.
    ///
    /// Rendering stops at the first failing directive; whatever was written
    /// before it stays written.
    ///
    /// # Returns
    ///
    /// The number of bytes written by this call.
    pub fn format(&mut self, format: &[u8], args: &[Argument<'_>]) -> Result<usize> {
        let start = self.count;
        let available = args.len();
        let mut args = args.iter().enumerate();
        let mut ix = 0;

        while ix < format.len() {
            // copy the literal run up to the next directive in one go
            let literal_end = format[ix..]
                .iter()
                .position(|&c| c == b'%')
                .map_or(format.len(), |pos| ix + pos);
            if literal_end > ix {
                self.write_bytes(&format[ix..literal_end]);
                ix = literal_end;
                continue;
            }

            let (conv, used) = conversion::parse(&format[ix + 1..])?;
            ix += 1 + used;

            if conv.specifier == Specifier::Percent {
                self.write_byte(b'%');
                continue;
            }

            let (index, arg) = args
                .next()
                .ok_or(PrintfError::MissingArgument { index: available })?;
            self.conversion(&conv, index, arg)?;
        }

        Ok(self.count - start)
    }

    fn conversion(&mut self, conv: &Conversion, index: usize, arg: &Argument<'_>) -> Result<()> {
        let mismatch = PrintfError::ArgumentMismatch {
            index,
            specifier: conv.byte,
        };

        match conv.specifier {
            Specifier::SignedDecimal => {
                let value = arg.as_i64().ok_or(mismatch)?;
                let sign: &[u8] = if value < 0 {
                    b"-"
                } else if conv.flags.plus_sign {
                    b"+"
                } else if conv.flags.space_sign {
                    b" "
                } else {
                    b""
                };
                let mut buf: DecimalBuffer = [0; MAX_DIGITS];
                let digits = u64_to_decimal(value.unsigned_abs(), &mut buf);
                self.number(conv, sign, digits);
            }
            Specifier::UnsignedDecimal => {
                let value = arg.as_u64().ok_or(mismatch)?;
                let mut buf: DecimalBuffer = [0; MAX_DIGITS];
                let digits = u64_to_decimal(value, &mut buf);
                self.number(conv, b"", digits);
            }
            Specifier::Hex { uppercase } => {
                let value = arg.as_u64().ok_or(mismatch)?;
                let prefix: &[u8] = match (conv.flags.alternate && value != 0, uppercase) {
                    (false, _) => b"",
                    (true, false) => b"0x",
                    (true, true) => b"0X",
                };
                let mut buf: HexBuffer = [0; HEX_DIGITS];
                let digits = u64_to_hex(value, uppercase, &mut buf);
                self.number(conv, prefix, digits);
            }
            Specifier::Pointer => {
                let address = match *arg {
                    Argument::Pointer(address) => address as u64,
                    Argument::Unsigned(address) => address,
                    _ => return Err(mismatch),
                };
                let mut buf: HexBuffer = [0; HEX_DIGITS];
                let digits = u64_to_hex(address, false, &mut buf);
                self.number(conv, b"0x", digits);
            }
            Specifier::Char => {
                let mut utf8 = [0u8; 4];
                let encoded: &[u8] = match *arg {
                    Argument::Char(ch) => ch.encode_utf8(&mut utf8).as_bytes(),
                    _ => {
                        #[allow(clippy::cast_possible_truncation, reason = "C takes the low byte")]
                        let byte = arg.as_u64().ok_or(mismatch)? as u8;
                        utf8[0] = byte;
                        &utf8[..1]
                    }
                };
                self.justified(conv, encoded);
            }
            Specifier::Str => {
                let Argument::Str(bytes) = *arg else {
                    return Err(mismatch);
                };
                let len = conv.precision.map_or(bytes.len(), |p| p.min(bytes.len()));
                self.justified(conv, &bytes[..len]);
            }
            Specifier::Percent => self.write_byte(b'%'),
        }

        Ok(())
    }

    /// Writes `bytes` space-padded to the conversion width.
    fn justified(&mut self, conv: &Conversion, bytes: &[u8]) {
        let padding = conv.width.unwrap_or(0).saturating_sub(bytes.len());
        if !conv.flags.left_justify {
            self.pad(b' ', padding);
        }
        self.write_bytes(bytes);
        if conv.flags.left_justify {
            self.pad(b' ', padding);
        }
    }

    /// Writes a number as `prefix`, precision zeros, `digits`, padded to the
    /// conversion width.
    fn number(&mut self, conv: &Conversion, prefix: &[u8], digits: &[u8]) {
        // zero with a zero precision prints no digits
        let digits = if conv.precision == Some(0) && digits == b"0" {
            &digits[..0]
        } else {
            digits
        };
        let precision_zeros = conv.precision.unwrap_or(0).saturating_sub(digits.len());
        let len = prefix.len() + precision_zeros + digits.len();
        let padding = conv.width.unwrap_or(0).saturating_sub(len);

        let zero_pad =
            conv.flags.zero_pad && !conv.flags.left_justify && conv.precision.is_none();

        if !conv.flags.left_justify && !zero_pad {
            self.pad(b' ', padding);
        }
        self.write_bytes(prefix);
        if zero_pad {
            self.pad(b'0', padding);
        }
        self.pad(b'0', precision_zeros);
        self.write_bytes(digits);
        if conv.flags.left_justify {
            self.pad(b' ', padding);
        }
    }
}

/// Renders `format` with `args` to `printer`.
///
/// # Returns
///
/// The number of bytes written.
pub fn printf<P: Printer + ?Sized>(
    printer: &mut P,
    format: &[u8],
    args: &[Argument<'_>],
) -> Result<usize> {
    Formatter::new(printer).format(format, args)
}

/// Renders `format` with `args` into `buf`.
///
/// Output that does not fit is dropped. Like C `snprintf`, the returned count
/// is the length the complete output needs, so a value above `N` means the
/// buffer truncated it.
pub fn sprintf<const N: usize>(
    buf: &mut heapless::Vec<u8, N>,
    format: &[u8],
    args: &[Argument<'_>],
) -> Result<usize> {
    Formatter::new(buf).format(format, args)
}

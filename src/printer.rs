use crate::digits::nibble_to_ascii;

/// A byte sink such as a UART transmit register or a memory buffer.
pub trait Printer {
    /// Prints a byte.
    fn pb(&mut self, byte: u8);

    /// Prints a slice of bytes.
    fn p(&mut self, bytes: &[u8]) {
        for &byte in bytes {
            self.pb(byte);
        }
    }

    /// Prints a carriage return and line feed.
    fn nl(&mut self) {
        self.p(b"\r\n");
    }

    /// Prints a slice of bytes followed by a carriage return and line feed.
    fn pl(&mut self, bytes: &[u8]) {
        self.p(bytes);
        self.nl();
    }

    /// Prints a 32-bit unsigned integer as hexadecimal.
    #[allow(clippy::cast_possible_truncation, reason = "intended behavior")]
    fn p_hex_u32(&mut self, i: u32, separate_half_words: bool) {
        self.p_hex_u8((i >> 24) as u8);
        self.p_hex_u8((i >> 16) as u8);
        if separate_half_words {
            self.pb(b':');
        }
        self.p_hex_u8((i >> 8) as u8);
        self.p_hex_u8(i as u8);
    }

    /// Prints a 8-bit unsigned integer as hexadecimal.
    fn p_hex_u8(&mut self, i: u8) {
        self.p_hex_nibble(i >> 4);
        self.p_hex_nibble(i & 0x0f);
    }

    /// Prints a 4-bit unsigned integer as hexadecimal.
    fn p_hex_nibble(&mut self, nibble: u8) {
        self.pb(nibble_to_ascii(nibble, true));
    }
}

impl<P: Printer + ?Sized> Printer for &mut P {
    fn pb(&mut self, byte: u8) {
        (**self).pb(byte);
    }

    fn p(&mut self, bytes: &[u8]) {
        (**self).p(bytes);
    }
}

/// Bytes past capacity are dropped.
impl<const N: usize> Printer for heapless::Vec<u8, N> {
    fn pb(&mut self, byte: u8) {
        let _ = self.push(byte);
    }

    fn p(&mut self, bytes: &[u8]) {
        let len = bytes.len().min(N - self.len());
        let _ = self.extend_from_slice(&bytes[..len]);
    }
}

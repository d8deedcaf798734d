//! A `printf` for serial consoles.
//!
//! Formats C-style format strings with 64-bit integer, character, string and
//! pointer arguments and writes the result byte by byte to a [`Printer`],
//! usually a UART transmit register.
//!
//! ```ignore
//! CONSOLE.install(uart);
//! printf!("heap at %p, %u bytes free\n", heap_start, free)?;
//! ```

#![cfg_attr(not(test), no_std)]

pub mod argument;
pub mod console;
pub mod conversion;
pub mod digits;
pub mod error;
pub mod logger;
pub mod printer;
pub mod printf;

pub use argument::Argument;
pub use console::{CONSOLE, Console, PrinterWriter};
pub use digits::{LAST_NIBBLE_FIRST_BIT, MAX_DIGITS};
pub use error::{PrintfError, Result};
pub use logger::UartLogger;
pub use printer::Printer;
pub use printf::{Formatter, printf, sprintf};

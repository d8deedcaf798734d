//! The process-wide console the `printf!` family writes to.

use crate::argument::Argument;
use crate::error::{PrintfError, Result};
use crate::printer::Printer;
use crate::printf::Formatter;
use core::fmt;
use spin::Mutex;

pub type ConsolePrinter = dyn Printer + Send;

pub struct Console {
    printer: Mutex<Option<&'static mut ConsolePrinter>>,
}

/// The console behind `printf!`, `print!` and the logger.
pub static CONSOLE: Console = Console::new();

impl Console {
    pub const fn new() -> Self {
        Self {
            printer: Mutex::new(None),
        }
    }

    /// Routes all further output to `printer`.
    pub fn install(&self, printer: &'static mut ConsolePrinter) {
        *self.printer.lock() = Some(printer);
    }

    pub fn is_installed(&self) -> bool {
        self.printer.lock().is_some()
    }

    /// Runs `f` on the installed printer while holding the console lock.
    pub fn with<R>(&self, f: impl FnOnce(&mut ConsolePrinter) -> R) -> Result<R> {
        let mut guard = self.printer.lock();
        let printer = guard.as_deref_mut().ok_or(PrintfError::ConsoleNotInstalled)?;
        Ok(f(printer))
    }

    /// Renders `format` with `args`, translating `\n` into `\r\n`.
    pub fn printf(&self, format: &[u8], args: &[Argument<'_>]) -> Result<usize> {
        self.with(|printer| {
            Formatter::new(printer)
                .translate_newlines(true)
                .format(format, args)
        })?
    }

    /// Renders Rust format arguments, translating `\n` into `\r\n`.
    pub fn print_fmt(&self, args: fmt::Arguments<'_>) -> Result<()> {
        self.with(|printer| {
            let mut writer = PrinterWriter::new(printer);
            // writer never fails, only a Display impl can
            let _ = fmt::Write::write_fmt(&mut writer, args);
        })
    }
}

impl Default for Console {
    fn default() -> Self {
        Self::new()
    }
}

/// Formats the arguments and writes them to [`CONSOLE`].
#[doc(hidden)]
pub fn print_fmt(args: fmt::Arguments<'_>) {
    let _ = CONSOLE.print_fmt(args);
}

/// Bridges `core::fmt` and `ufmt` onto a [`Printer`].
pub struct PrinterWriter<'a, P: Printer + ?Sized> {
    formatter: Formatter<'a, P>,
}

impl<'a, P: Printer + ?Sized> PrinterWriter<'a, P> {
    pub fn new(printer: &'a mut P) -> Self {
        Self {
            formatter: Formatter::new(printer).translate_newlines(true),
        }
    }

    pub fn count(&self) -> usize {
        self.formatter.count()
    }
}

impl<P: Printer + ?Sized> fmt::Write for PrinterWriter<'_, P> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.formatter.write_bytes(s.as_bytes());
        Ok(())
    }
}

impl<P: Printer + ?Sized> ufmt::uWrite for PrinterWriter<'_, P> {
    type Error = core::convert::Infallible;

    fn write_str(&mut self, s: &str) -> core::result::Result<(), Self::Error> {
        self.formatter.write_bytes(s.as_bytes());
        Ok(())
    }
}

/// Formats a C-style string with the provided arguments and writes it to the
/// console.
#[macro_export]
macro_rules! printf {
    ($format:expr $(, $arg:expr)* $(,)?) => {
        $crate::console::CONSOLE.printf(
            ::core::convert::AsRef::<[u8]>::as_ref($format),
            &[$($crate::argument::Argument::from($arg)),*],
        )
    };
}

/// Like `printf!` but writes to the given [`Printer`](crate::printer::Printer).
#[macro_export]
macro_rules! fprintf {
    ($printer:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::printf::printf(
            $printer,
            ::core::convert::AsRef::<[u8]>::as_ref($format),
            &[$($crate::argument::Argument::from($arg)),*],
        )
    };
}

/// Like `printf!` but writes to a `heapless::Vec<u8, N>`.
#[macro_export]
macro_rules! sprintf {
    ($buf:expr, $format:expr $(, $arg:expr)* $(,)?) => {
        $crate::printf::sprintf(
            $buf,
            ::core::convert::AsRef::<[u8]>::as_ref($format),
            &[$($crate::argument::Argument::from($arg)),*],
        )
    };
}

/// Formats Rust format arguments and writes them to the console.
#[macro_export]
macro_rules! print {
    ($($arg:tt)*) => {{
        $crate::console::print_fmt(::core::format_args!($($arg)*));
    }};
}

#[macro_export]
macro_rules! println {
    () => ($crate::print!("\n"));
    ($($arg:tt)*) => {{
        $crate::console::print_fmt(::core::format_args!(
            "{}\n",
            ::core::format_args!($($arg)*)
        ));
    }};
}

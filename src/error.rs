use core::fmt;

pub type Result<T> = core::result::Result<T, PrintfError>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintfError {
    /// The format string ended inside a `%` directive.
    IncompleteConversion,
    /// The conversion character is not one of `diuxXcsp%`.
    UnsupportedSpecifier(u8),
    /// The directive at `index` has no argument.
    MissingArgument { index: usize },
    /// The argument at `index` cannot be rendered by `specifier`.
    ArgumentMismatch { index: usize, specifier: u8 },
    /// A width or precision above `MAX_FIELD_WIDTH`.
    FieldTooWide,
    /// Nothing has been installed on the console yet.
    ConsoleNotInstalled,
}

impl PrintfError {
    /// The C-style return code for this error.
    pub const fn status(&self) -> i32 {
        -1
    }
}

impl fmt::Display for PrintfError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::IncompleteConversion => f.write_str("format string ends inside a conversion"),
            Self::UnsupportedSpecifier(ch) => {
                write!(f, "unsupported conversion specifier '{}'", ch.escape_ascii())
            }
            Self::MissingArgument { index } => write!(f, "missing argument {index}"),
            Self::ArgumentMismatch { index, specifier } => write!(
                f,
                "argument {index} does not match specifier '%{}'",
                specifier.escape_ascii()
            ),
            Self::FieldTooWide => f.write_str("field width or precision too large"),
            Self::ConsoleNotInstalled => f.write_str("no console installed"),
        }
    }
}

impl core::error::Error for PrintfError {}

/// Collapses a printf result into the C convention: count on success, `-1`
/// on failure.
pub fn status(result: Result<usize>) -> i32 {
    match result {
        Ok(count) => i32::try_from(count).unwrap_or(i32::MAX),
        Err(err) => err.status(),
    }
}

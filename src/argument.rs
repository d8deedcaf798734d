/// One entry of the variadic argument list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Argument<'a> {
    Signed(i64),
    Unsigned(u64),
    Char(char),
    Str(&'a [u8]),
    Pointer(usize),
}

impl Argument<'_> {
    /// Two's complement view of an integer argument.
    #[allow(clippy::cast_possible_wrap, reason = "C reinterprets mismatched signedness")]
    pub const fn as_i64(&self) -> Option<i64> {
        match *self {
            Self::Signed(i) => Some(i),
            Self::Unsigned(u) => Some(u as i64),
            _ => None,
        }
    }

    /// Unsigned view of an integer argument.
    #[allow(clippy::cast_sign_loss, reason = "C reinterprets mismatched signedness")]
    pub const fn as_u64(&self) -> Option<u64> {
        match *self {
            Self::Signed(i) => Some(i as u64),
            Self::Unsigned(u) => Some(u),
            _ => None,
        }
    }
}

macro_rules! impl_from_int {
    ($variant:ident, $wide:ty, $($t:ty),*) => {
        $(
            impl From<$t> for Argument<'_> {
                #[allow(clippy::cast_lossless, reason = "widening to 64 bits")]
                fn from(value: $t) -> Self {
                    Self::$variant(value as $wide)
                }
            }
        )*
    };
}

impl_from_int!(Signed, i64, i8, i16, i32, i64, isize);
impl_from_int!(Unsigned, u64, u8, u16, u32, u64, usize);

impl From<char> for Argument<'_> {
    fn from(value: char) -> Self {
        Self::Char(value)
    }
}

impl<'a> From<&'a str> for Argument<'a> {
    fn from(value: &'a str) -> Self {
        Self::Str(value.as_bytes())
    }
}

impl<'a> From<&'a [u8]> for Argument<'a> {
    fn from(value: &'a [u8]) -> Self {
        Self::Str(value)
    }
}

impl<'a, const N: usize> From<&'a [u8; N]> for Argument<'a> {
    fn from(value: &'a [u8; N]) -> Self {
        Self::Str(value)
    }
}

impl<T> From<*const T> for Argument<'_> {
    fn from(value: *const T) -> Self {
        Self::Pointer(value as usize)
    }
}

impl<T> From<*mut T> for Argument<'_> {
    fn from(value: *mut T) -> Self {
        Self::Pointer(value as usize)
    }
}

use super::{Formatter, printf, sprintf};
use crate::argument::Argument;
use crate::error::PrintfError;
use heapless::Vec;

type Out = Vec<u8, 128>;

fn render(format: &str, args: &[Argument<'_>]) -> Out {
    let mut out = Out::new();
    let count = printf(&mut out, format.as_bytes(), args).unwrap();
    assert_eq!(count, out.len());
    out
}

#[test]
fn literal_text_passes_through() {
    assert_eq!(render("hello, uart", &[]).as_slice(), b"hello, uart");
    assert_eq!(render("", &[]).as_slice(), b"");
}

#[test]
fn percent_escape_takes_no_argument() {
    assert_eq!(render("100%%", &[]).as_slice(), b"100%");
    assert_eq!(
        render("%d%% of %d", &[7i32.into(), 9i32.into()]).as_slice(),
        b"7% of 9"
    );
}

#[test]
fn signed_decimal() {
    assert_eq!(render("%d", &[0i32.into()]).as_slice(), b"0");
    assert_eq!(render("%i", &[(-42i64).into()]).as_slice(), b"-42");
    assert_eq!(
        render("%lld", &[i64::MIN.into()]).as_slice(),
        b"-9223372036854775808"
    );
    assert_eq!(render("%+d % d", &[5i8.into(), 5i8.into()]).as_slice(), b"+5  5");
}

#[test]
fn unsigned_decimal() {
    assert_eq!(
        render("%u", &[u64::MAX.into()]).as_slice(),
        b"18446744073709551615"
    );
    assert_eq!(render("%lu", &[(-1i64).into()]).as_slice(), b"18446744073709551615");
}

#[test]
fn signed_reinterprets_unsigned_argument() {
    assert_eq!(render("%d", &[u64::MAX.into()]).as_slice(), b"-1");
}

#[test]
fn hexadecimal() {
    assert_eq!(render("%x", &[0xdead_beefu32.into()]).as_slice(), b"deadbeef");
    assert_eq!(render("%X", &[0xdead_beefu32.into()]).as_slice(), b"DEADBEEF");
    assert_eq!(render("%x", &[0u8.into()]).as_slice(), b"0");
    assert_eq!(render("%llx", &[u64::MAX.into()]).as_slice(), b"ffffffffffffffff");
    assert_eq!(render("%x", &[(-1i32).into()]).as_slice(), b"ffffffffffffffff");
}

#[test]
fn hexadecimal_alternate_form() {
    assert_eq!(render("%#x", &[255u8.into()]).as_slice(), b"0xff");
    assert_eq!(render("%#X", &[255u8.into()]).as_slice(), b"0XFF");
    assert_eq!(render("%#x", &[0u8.into()]).as_slice(), b"0");
    assert_eq!(render("%#010x", &[0x1234u16.into()]).as_slice(), b"0x00001234");
}

#[test]
fn width_and_justification() {
    assert_eq!(render("[%5d]", &[42i32.into()]).as_slice(), b"[   42]");
    assert_eq!(render("[%-5d]", &[42i32.into()]).as_slice(), b"[42   ]");
    assert_eq!(render("[%05d]", &[(-42i32).into()]).as_slice(), b"[-0042]");
    assert_eq!(render("[%-05d]", &[42i32.into()]).as_slice(), b"[42   ]");
    assert_eq!(render("[%2d]", &[12345i32.into()]).as_slice(), b"[12345]");
}

#[test]
fn integer_precision_is_minimum_digits() {
    assert_eq!(render("%.4u", &[7u8.into()]).as_slice(), b"0007");
    assert_eq!(render("[%8.4x]", &[0xabu8.into()]).as_slice(), b"[    00ab]");
    // precision disables zero padding
    assert_eq!(render("[%08.3d]", &[5i32.into()]).as_slice(), b"[     005]");
    // zero precision drops the digit of a zero value
    assert_eq!(
        render("[%.0d][%.0x][%5.0u]", &[0i32.into(), 0u8.into(), 0u8.into()]).as_slice(),
        b"[][][     ]"
    );
    assert_eq!(render("[%#.0x][%+.0d]", &[0u8.into(), 0i32.into()]).as_slice(), b"[][+]");
    assert_eq!(render("%.0u", &[7u8.into()]).as_slice(), b"7");
}

#[test]
fn characters() {
    assert_eq!(render("%c%c", &['o'.into(), 'k'.into()]).as_slice(), b"ok");
    assert_eq!(render("%c", &['é'.into()]).as_slice(), "é".as_bytes());
    assert_eq!(render("%c", &[0x141u16.into()]).as_slice(), b"A");
    assert_eq!(render("[%3c]", &['z'.into()]).as_slice(), b"[  z]");
}

#[test]
fn strings() {
    assert_eq!(render("%s!", &["uart".into()]).as_slice(), b"uart!");
    assert_eq!(render("%s", &[b"bytes".into()]).as_slice(), b"bytes");
    assert_eq!(render("[%-6s]", &["ab".into()]).as_slice(), b"[ab    ]");
    assert_eq!(render("[%6s]", &["ab".into()]).as_slice(), b"[    ab]");
    assert_eq!(render("%.3s", &["truncated".into()]).as_slice(), b"tru");
}

#[test]
fn pointers() {
    assert_eq!(render("%p", &[Argument::Pointer(0x2000)]).as_slice(), b"0x2000");
    assert_eq!(render("%p", &[0u32.into()]).as_slice(), b"0x0");
    assert_eq!(
        render("%p", &[Argument::Pointer(0)]).as_slice(),
        b"0x0"
    );
}

#[test]
fn missing_argument_keeps_earlier_output() {
    let mut out = Out::new();
    let result = printf(&mut out, b"a=%d b=%d", &[1i32.into()]);
    assert_eq!(result, Err(PrintfError::MissingArgument { index: 1 }));
    assert_eq!(out.as_slice(), b"a=1 b=");
}

#[test]
fn mismatched_argument() {
    let mut out = Out::new();
    let result = printf(&mut out, b"%d %s", &[1i32.into(), 2i32.into()]);
    assert_eq!(
        result,
        Err(PrintfError::ArgumentMismatch {
            index: 1,
            specifier: b's'
        })
    );

    let result = printf(&mut out, b"%x", &["str".into()]);
    assert_eq!(
        result,
        Err(PrintfError::ArgumentMismatch {
            index: 0,
            specifier: b'x'
        })
    );
}

#[test]
fn malformed_directives() {
    let mut out = Out::new();
    assert_eq!(
        printf(&mut out, b"50%", &[]),
        Err(PrintfError::IncompleteConversion)
    );
    assert_eq!(
        printf(&mut out, b"%f", &[Argument::Signed(1)]),
        Err(PrintfError::UnsupportedSpecifier(b'f'))
    );
}

#[test]
fn extra_arguments_are_ignored() {
    assert_eq!(render("%d", &[1i32.into(), 2i32.into()]).as_slice(), b"1");
}

#[test]
fn sprintf_reports_untruncated_length() {
    let mut buf = Vec::<u8, 8>::new();
    let count = sprintf(&mut buf, b"value=%u", &[123_456u32.into()]).unwrap();
    assert_eq!(count, 12);
    assert_eq!(buf.as_slice(), b"value=12");
}

#[test]
fn newline_translation_is_counted() {
    let mut out = Out::new();
    let count = Formatter::new(&mut out)
        .translate_newlines(true)
        .format(b"%s\n", &["line".into()])
        .unwrap();
    assert_eq!(out.as_slice(), b"line\r\n");
    assert_eq!(count, 6);
}

#[test]
fn formatter_accumulates_across_calls() {
    let mut out = Out::new();
    let mut fmt = Formatter::new(&mut out);
    assert_eq!(fmt.format(b"ab", &[]), Ok(2));
    assert_eq!(fmt.format(b"%u", &[100u8.into()]), Ok(3));
    assert_eq!(fmt.count(), 5);
}

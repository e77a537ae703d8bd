use crate::error::Error;

/// Widths and precisions beyond this are treated as absent; the scan jumps
/// to end-of-string, discarding the remainder of the format.
const MAX_NUM: usize = 1_000_000;

/// One `%...<kind>` unit: a rendering action plus a byte consumption.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) struct Directive {
    pub kind: char,
    pub little_endian: bool,
    pub width: Option<usize>,
    pub precision: Option<usize>,
}

/// A piece of the format string: literal text or a parsed directive.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub(crate) enum Segment<'a> {
    Literal(&'a str),
    Directive(Directive),
}

/// Reads an unsigned decimal literal starting at `start`.
///
/// Returns `(value, present, next)`. A magnitude beyond [`MAX_NUM`]
/// reports no number and forces `next` to end-of-string, which aborts the
/// enclosing scan.
pub(crate) fn parse_num(s: &[u8], start: usize) -> (usize, bool, usize) {
    let end = s.len();
    let mut num = 0usize;
    let mut is_num = false;
    let mut i = start;
    while i < end && s[i].is_ascii_digit() {
        if num > MAX_NUM {
            return (0, false, end);
        }
        num = num * 10 + usize::from(s[i] - b'0');
        is_num = true;
        i += 1;
    }
    (num, is_num, i)
}

/// Scan a format string left to right, feeding each segment to `handler`.
///
/// Grammar after a `%`: optional `-` (little-endian), optional decimal
/// width, optional `.precision`, then a single kind character. A format
/// string that ends mid-directive drops the partial directive silently.
pub(crate) fn scan<'a>(
    fmt: &'a str,
    mut handler: impl FnMut(Segment<'a>) -> Result<(), Error>,
) -> Result<(), Error> {
    let s = fmt.as_bytes();
    let end = s.len();
    let mut i = 0;
    while i < end {
        let last = i;
        while i < end && s[i] != b'%' {
            i += 1;
        }
        if i > last {
            handler(Segment::Literal(&fmt[last..i]))?;
        }
        i += 1;
        if i >= end {
            break;
        }
        let mut d = Directive {
            kind: '\0',
            little_endian: false,
            width: None,
            precision: None,
        };
        if s[i] == b'-' {
            d.little_endian = true;
            i += 1;
            if i >= end {
                break;
            }
        }
        if s[i].is_ascii_digit() {
            let (num, is_num, next) = parse_num(s, i);
            i = next;
            if is_num {
                d.width = Some(num);
            }
            if i >= end {
                break;
            }
        }
        if s[i] == b'.' {
            i += 1;
            if i >= end {
                break;
            }
            let (num, is_num, next) = parse_num(s, i);
            i = next;
            if is_num {
                d.precision = Some(num);
            }
            if i >= end {
                break;
            }
        }
        // The scan only stops on ASCII bytes, so `i` is a char boundary.
        let kind = fmt[i..].chars().next().unwrap_or('\0');
        d.kind = kind;
        i += kind.len_utf8();
        handler(Segment::Directive(d))?;
    }
    Ok(())
}

//! The execution engine: drives parsed directives against the byte cursor.

use core::fmt;

use itertools::Itertools;

use crate::args::ArgList;
use crate::error::Error;
use crate::parser::{self, Directive, Segment};

/// Per-call state: the input buffer, the read cursor, the supplemental
/// arguments and the output sink. Created at the start of one render call
/// and discarded at its end; nothing is shared across calls.
pub(crate) struct Dumper<'a, 'w, W> {
    input: &'a [u8],
    pos: usize,
    args: ArgList<'a>,
    out: &'w mut W,
}

impl<'a, 'w, W: fmt::Write> Dumper<'a, 'w, W> {
    pub fn new(input: &'a [u8], args: ArgList<'a>, out: &'w mut W) -> Self {
        Self {
            input,
            pos: 0,
            args,
            out,
        }
    }

    /// Execute a format string against the remaining buffer. Template
    /// dispatch re-enters here with the nested format, sharing the cursor.
    pub fn run(&mut self, format: &str) -> Result<(), Error> {
        parser::scan(format, |segment| match segment {
            Segment::Literal(text) => Ok(self.out.write_str(text)?),
            Segment::Directive(d) => self.exec(&d),
        })
    }

    fn remaining(&self) -> usize {
        self.input.len() - self.pos
    }

    /// Consume exactly `width` bytes at the cursor.
    fn take(&mut self, width: usize) -> Result<&'a [u8], Error> {
        if width > self.remaining() {
            return Err(Error::OutOfRange {
                at: self.pos,
                wanted: width,
                len: self.input.len(),
            });
        }
        let bytes = &self.input[self.pos..self.pos + width];
        self.pos += width;
        Ok(bytes)
    }

    /// Consume bytes for a text-like directive; width defaults to the
    /// remaining buffer.
    fn take_text(&mut self, d: &Directive) -> Result<&'a [u8], Error> {
        let width = d.width.unwrap_or_else(|| self.remaining());
        self.take(width)
    }

    /// Consume bytes for an integer-like directive (width defaults to 4)
    /// and assemble them into an `i64` honoring the byte-order flag.
    ///
    /// Widths beyond 8 are unsupported: the excess bytes are consumed but
    /// cannot contribute to the 64-bit container.
    fn fetch_int(&mut self, d: &Directive) -> Result<i64, Error> {
        let width = d.width.unwrap_or(4);
        let bytes = self.take(width)?;
        let mut val: i64 = 0;
        if d.little_endian {
            for (w, &b) in bytes.iter().enumerate() {
                if w < 8 {
                    val |= i64::from(b) << (8 * w);
                }
            }
        } else {
            for &b in bytes {
                val = (val << 8) | i64::from(b);
            }
        }
        Ok(val)
    }

    fn exec(&mut self, d: &Directive) -> Result<(), Error> {
        match d.kind {
            '%' => self.out.write_char('%')?,
            'p' => {
                let bytes = self.take_text(d)?;
                hex_dump(&mut *self.out, bytes)?;
            }
            'q' => {
                let bytes = self.take_text(d)?;
                quote(&mut *self.out, bytes)?;
            }
            's' => {
                let bytes = self.take_text(d)?;
                self.out.write_str(&String::from_utf8_lossy(bytes))?;
            }
            'x' => {
                let x = self.fetch_int(d)?;
                write_int(&mut *self.out, x, 16)?;
            }
            'd' => {
                let x = self.fetch_int(d)?;
                write_int(&mut *self.out, x, 10)?;
            }
            'b' => match d.precision {
                Some(index) => self.exec_flags(d, index)?,
                None => {
                    let x = self.fetch_int(d)?;
                    write_int(&mut *self.out, x, 2)?;
                }
            },
            'e' => {
                let key = self.fetch_int(d)?;
                match d.precision {
                    Some(index) => {
                        let table = self.args.enum_table(index)?;
                        match table.get(&key) {
                            Some(name) => self.out.write_str(name)?,
                            None => write_int(&mut *self.out, key, 10)?,
                        }
                    }
                    None => write_int(&mut *self.out, key, 10)?,
                }
            }
            't' => {
                let key = self.fetch_int(d)?;
                match d.precision {
                    Some(index) => {
                        let table = self.args.template_table(index)?;
                        match table.get(&key) {
                            Some(nested) => self.run(nested)?,
                            None => write_int(&mut *self.out, key, 10)?,
                        }
                    }
                    None => write_int(&mut *self.out, key, 10)?,
                }
            }
            'i' => {
                let x = self.fetch_int(d)?;
                let factor = self.args.scale(0)?;
                let value = x as f64 * factor;
                match d.precision {
                    Some(places) => write!(self.out, "{:.*}", places, value)?,
                    None => write_scientific(&mut *self.out, value, 6)?,
                }
            }
            other => write!(self.out, "%%UNKOWN%{}", other)?,
        }
        Ok(())
    }

    /// Flag decomposition: match masks in descending order, clearing their
    /// bits; leftover bits render as a trailing hex entry.
    fn exec_flags(&mut self, d: &Directive, index: usize) -> Result<(), Error> {
        let x = self.fetch_int(d)?;
        let table = self.args.flag_table(index)?;
        let mut rest = x;
        let mut names: Vec<String> = Vec::new();
        for (&mask, &name) in table.iter().rev() {
            if mask != 0 && rest & mask == mask {
                names.push(name.to_owned());
                rest &= !mask;
            }
        }
        if rest != 0 {
            names.push(format!("0x{:x}", rest));
        }
        write!(self.out, "({})", names.iter().join("|"))?;
        Ok(())
    }
}

/// Sign-magnitude integer rendering: a negative value is a `-` followed by
/// the magnitude in the given base, in every base.
fn write_int<W: fmt::Write>(out: &mut W, x: i64, radix: u32) -> fmt::Result {
    if x < 0 {
        out.write_char('-')?;
    }
    let mag = x.unsigned_abs();
    match radix {
        16 => write!(out, "{:x}", mag),
        2 => write!(out, "{:b}", mag),
        _ => write!(out, "{}", mag),
    }
}

/// printf-style scientific notation: the exponent carries a sign and is at
/// least 2 digits, unlike Rust's `{:e}`.
fn write_scientific<W: fmt::Write>(out: &mut W, value: f64, precision: usize) -> fmt::Result {
    if !value.is_finite() {
        return write!(out, "{}", value);
    }
    let formatted = format!("{:.*e}", precision, value);
    let mut parts = formatted.splitn(2, 'e');
    let mantissa = parts.next().unwrap_or(&formatted);
    let exponent: i32 = parts.next().and_then(|e| e.parse().ok()).unwrap_or(0);
    write!(out, "{}e{:+03}", mantissa, exponent)
}

fn ascii_column_char(b: u8) -> char {
    if (0x20..=0x7e).contains(&b) {
        b as char
    } else {
        '.'
    }
}

/// Classic hex dump: 16 bytes per line, 8-digit hex offset relative to the
/// dumped region, an extra gap after the 8th byte, and an ASCII column.
/// The final partial line is space-padded so the ASCII column aligns.
fn hex_dump<W: fmt::Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    for (line, chunk) in bytes.chunks(16).enumerate() {
        write!(out, "{:08x}  ", line * 16)?;
        for slot in 0..16 {
            match chunk.get(slot) {
                Some(b) => write!(out, "{:02x} ", b)?,
                None => out.write_str("   ")?,
            }
            if slot == 7 {
                out.write_char(' ')?;
            }
        }
        out.write_char(' ')?;
        out.write_char('|')?;
        for &b in chunk {
            out.write_char(ascii_column_char(b))?;
        }
        out.write_str("|\n")?;
    }
    Ok(())
}

/// Double-quoted rendering: printable ASCII passes through, quote and
/// backslash are escaped, everything else becomes `\xHH`.
fn quote<W: fmt::Write>(out: &mut W, bytes: &[u8]) -> fmt::Result {
    out.write_char('"')?;
    for &b in bytes {
        match b {
            b'"' => out.write_str("\\\"")?,
            b'\\' => out.write_str("\\\\")?,
            0x20..=0x7e => out.write_char(b as char)?,
            _ => write!(out, "\\x{:02x}", b)?,
        }
    }
    out.write_char('"')?;
    Ok(())
}

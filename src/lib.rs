//! `printf` for byte buffers.
//!
//! Like `printf`, a format string drives the output; unlike `printf`, every
//! directive also consumes bytes from a shared cursor into the input buffer.
//! A short format string can therefore describe the layout of an arbitrary
//! binary record and produce a readable dump of it without per-field
//! unpacking code.
//!
//! The width part of a directive is the number of bytes it consumes. The
//! following directive letters are understood:
//!
//! | letter | meaning |
//! |---|---|
//! | `%p` | hex dump of the consumed bytes |
//! | `%q` | double-quoted string, non-printable bytes as `\xHH` |
//! | `%s` | raw string |
//! | `%d` | decimal integer |
//! | `%x` | hex integer |
//! | `%b` | binary integer; with a precision, flag decomposition via a [`Arg::Flags`] table |
//! | `%e` | enumerated value; the precision is the index of a [`Arg::Enum`] table |
//! | `%t` | template dispatch; the precision is the index of a [`Arg::Template`] table |
//! | `%i` | integer scaled by a [`Arg::Scale`] factor; the precision is a decimal-places count |
//!
//! Multi-byte integers are assembled in network byte order by default; a
//! leading `-` in the width field (e.g. `%-4d`) selects little-endian
//! assembly instead.
//!
//! A directive whose width exceeds the bytes remaining in the buffer fails
//! the whole call with [`Error::OutOfRange`]. Malformed format text never
//! fails the call: an unknown directive letter degrades to a literal
//! marker, and a format string that ends in the middle of a directive
//! drops it silently.
//!
//! Template tables may name format strings that themselves dispatch into
//! template tables; the recursion depth is whatever the tables encode, so
//! self-referential tables are the caller's responsibility.

mod args;
mod dumper;
mod error;
mod output;
mod parser;

pub use args::{Arg, EnumTable, FlagTable, TemplateTable};
pub use error::Error;
pub use output::{print, render, render_to};

//! Public entry points over the execution engine.

use core::fmt;

use crate::args::{Arg, ArgList};
use crate::dumper::Dumper;
use crate::error::Error;

/// Render `buf` under the control of `format` and return the accumulated
/// text.
///
/// The call is pure: it owns its cursor and output buffer exclusively and
/// leaves no state behind, so identical inputs always produce identical
/// output and concurrent calls never interfere.
pub fn render(buf: &[u8], format: &str, args: &[Arg]) -> Result<String, Error> {
    let mut out = String::new();
    render_to(&mut out, buf, format, args)?;
    Ok(out)
}

/// Render into an arbitrary [`fmt::Write`] sink. Decoding semantics are
/// identical to [`render`].
pub fn render_to(
    w: &mut impl fmt::Write,
    buf: &[u8],
    format: &str,
    args: &[Arg],
) -> Result<(), Error> {
    Dumper::new(buf, ArgList::new(args), w).run(format)
}

/// Render to standard output. A forwarding wrapper over [`render`]; there
/// is no shared state behind it.
pub fn print(buf: &[u8], format: &str, args: &[Arg]) -> Result<(), Error> {
    let text = render(buf, format, args)?;
    std::print!("{}", text);
    Ok(())
}

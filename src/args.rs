use std::collections::BTreeMap;

use crate::error::Error;

/// Maps an extracted integer key to a display name (`%e`).
pub type EnumTable<'a> = BTreeMap<i64, &'a str>;

/// Maps an extracted integer key to a nested format string (`%t`).
pub type TemplateTable<'a> = BTreeMap<i64, &'a str>;

/// Maps a single-bit mask to a flag name (`%b` with a precision).
pub type FlagTable<'a> = BTreeMap<i64, &'a str>;

/// Supplemental argument kinds.
///
/// Directives address these positionally through their precision field
/// (`%4.0e` looks up argument 0). The engine checks the kind at the point
/// of use; a mismatch is a hard [`Error::ArgMismatch`], never a silent
/// misread.
#[derive(Debug, Copy, Clone)]
pub enum Arg<'a> {
    Enum(&'a EnumTable<'a>),
    Template(&'a TemplateTable<'a>),
    Flags(&'a FlagTable<'a>),
    Scale(f64),
}

impl Arg<'_> {
    fn kind(&self) -> &'static str {
        match self {
            Arg::Enum(_) => "enum table",
            Arg::Template(_) => "template table",
            Arg::Flags(_) => "flag table",
            Arg::Scale(_) => "scale factor",
        }
    }
}

/// List of supplemental arguments.
#[derive(Debug, Copy, Clone)]
pub(crate) struct ArgList<'a> {
    args: &'a [Arg<'a>],
}

impl<'a> ArgList<'a> {
    pub fn new(args: &'a [Arg<'a>]) -> Self {
        Self { args }
    }

    fn get(&self, index: usize) -> Result<&Arg<'a>, Error> {
        self.args.get(index).ok_or(Error::MissingArg { index })
    }

    fn mismatch(index: usize, expected: &'static str, found: &Arg) -> Error {
        Error::ArgMismatch {
            index,
            expected,
            found: found.kind(),
        }
    }

    pub fn enum_table(&self, index: usize) -> Result<&'a EnumTable<'a>, Error> {
        match self.get(index)? {
            Arg::Enum(t) => Ok(t),
            other => Err(Self::mismatch(index, "enum table", other)),
        }
    }

    pub fn template_table(&self, index: usize) -> Result<&'a TemplateTable<'a>, Error> {
        match self.get(index)? {
            Arg::Template(t) => Ok(t),
            other => Err(Self::mismatch(index, "template table", other)),
        }
    }

    pub fn flag_table(&self, index: usize) -> Result<&'a FlagTable<'a>, Error> {
        match self.get(index)? {
            Arg::Flags(t) => Ok(t),
            other => Err(Self::mismatch(index, "flag table", other)),
        }
    }

    pub fn scale(&self, index: usize) -> Result<f64, Error> {
        match self.get(index)? {
            Arg::Scale(f) => Ok(*f),
            other => Err(Self::mismatch(index, "scale factor", other)),
        }
    }
}

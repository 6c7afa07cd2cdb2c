use std::{io, str::Utf8Error};

#[cfg(feature = "miette")]
use miette::{Diagnostic, SourceSpan};
use thiserror::Error;

#[cfg(not(feature = "miette"))]
type SourceSpan = (usize, usize);

#[derive(Debug, Error)]
#[cfg_attr(feature = "miette", derive(Diagnostic))]
pub enum FormatError {
    /// The template was rejected before scanning began.
    #[error(transparent)]
    #[cfg_attr(feature = "miette", diagnostic(transparent))]
    InvalidTemplate(#[from] InvalidTemplate),

    /// An I/O error passed through from [`Formatter::format_into`](crate::Formatter::format_into).
    #[error(transparent)]
    #[cfg_attr(feature = "miette", diagnostic(code(stencil::io)))]
    Io(#[from] io::Error),
}

/// A template given as bytes was not valid UTF-8.
#[derive(Debug, Error)]
#[cfg_attr(feature = "miette", derive(Diagnostic))]
#[cfg_attr(feature = "miette", diagnostic(code(stencil::invalid_template)))]
#[error("invalid template: {source}")]
pub struct InvalidTemplate {
    #[cfg_attr(feature = "miette", source_code)]
    #[cfg_attr(not(feature = "miette"), allow(dead_code))]
    pub(crate) src: String,

    #[cfg_attr(feature = "miette", label("not valid UTF-8"))]
    #[cfg_attr(not(feature = "miette"), allow(dead_code))]
    pub(crate) at: SourceSpan,

    pub(crate) source: Utf8Error,
}

impl InvalidTemplate {
    pub(crate) fn new(bytes: &[u8], source: Utf8Error) -> Self {
        // The lossy copy is identical up to the first invalid sequence, which
        // it replaces with a single U+FFFD.
        let offset = source.valid_up_to();
        Self {
            src: String::from_utf8_lossy(bytes).into_owned(),
            at: (offset, char::REPLACEMENT_CHARACTER.len_utf8()).into(),
            source,
        }
    }

    /// Byte offset of the first invalid sequence in the original input.
    pub fn valid_up_to(&self) -> usize {
        self.source.valid_up_to()
    }
}

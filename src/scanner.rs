use std::{convert::Infallible, io, iter::FusedIterator};

#[cfg(feature = "tracing")]
use tracing::{debug, trace};

use crate::{Delimiters, Values};

/// A delimiter-bounded span found in a template.
///
/// Offsets are in bytes and always lie on `char` boundaries.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placeholder<'t> {
    /// Start of the prefix.
    pub start: usize,
    /// End of the suffix, exclusive.
    pub end: usize,
    /// Everything between the prefix and the suffix.
    pub key: &'t str,
}

/// The single-pass placeholder scan.
///
/// Starting from the search position, the next prefix is located, then the
/// closest suffix after it; the text in between is the key. Scanning then
/// resumes right after that suffix, whether or not the key was substituted.
/// The scan stops at the first prefix with no suffix after it.
///
/// This means the first prefix is always paired with the nearest suffix, even
/// when a later pairing would look better nested:
///
/// ```
/// use stencil::{Delimiters, Scanner};
///
/// let delimiters = Delimiters::default();
/// let keys: Vec<_> = Scanner::new(&delimiters).keys("${a${b}c}").collect();
/// assert_eq!(keys, ["a${b"]);
/// ```
///
/// Substituted values are written to the output and never scanned.
#[derive(Clone, Copy, Debug)]
pub struct Scanner<'d> {
    delimiters: &'d Delimiters,
}

impl<'d> Scanner<'d> {
    pub fn new(delimiters: &'d Delimiters) -> Self {
        Self { delimiters }
    }

    pub fn delimiters(&self) -> &'d Delimiters {
        self.delimiters
    }

    /// Every span the scan visits, mapped or not, in order.
    pub fn placeholders<'t>(&self, template: &'t str) -> Placeholders<'t, 'd> {
        Placeholders {
            template,
            prefix: self.delimiters.prefix(),
            suffix: self.delimiters.suffix(),
            pos: Some(0),
        }
    }

    /// The keys of [`Scanner::placeholders`], repeats included.
    pub fn keys<'t>(&self, template: &'t str) -> impl Iterator<Item = &'t str> + 'd
    where
        't: 'd,
    {
        self.placeholders(template).map(|placeholder| placeholder.key)
    }

    /// Substitute every mapped placeholder in `template`.
    pub fn render(&self, template: &str, values: &(impl Values + ?Sized)) -> String {
        let mut out = String::with_capacity(template.len());
        let res: Result<(), Infallible> = self.scan(template, values, |text| {
            out.push_str(text);
            Ok(())
        });
        match res {
            Ok(()) => out,
            Err(never) => match never {},
        }
    }

    /// Like [`Scanner::render`], but writing to `writer` as the scan proceeds.
    pub fn render_into(
        &self,
        writer: &mut dyn io::Write,
        template: &str,
        values: &(impl Values + ?Sized),
    ) -> io::Result<()> {
        self.scan(template, values, |text| writer.write_all(text.as_bytes()))
    }

    fn scan<E>(
        &self,
        template: &str,
        values: &(impl Values + ?Sized),
        mut emit: impl FnMut(&str) -> Result<(), E>,
    ) -> Result<(), E> {
        let mut last = 0;
        #[cfg(feature = "tracing")]
        let (mut substituted, mut unresolved) = (0usize, 0usize);

        for placeholder in self.placeholders(template) {
            if let Some(value) = values.get_value(placeholder.key) {
                emit(&template[last..placeholder.start])?;
                emit(value.as_ref())?;
                last = placeholder.end;
                #[cfg(feature = "tracing")]
                {
                    substituted += 1;
                }
            } else {
                #[cfg(feature = "tracing")]
                {
                    unresolved += 1;
                    trace!(key = placeholder.key, at = placeholder.start, "leaving unmapped placeholder");
                }
            }
        }

        emit(&template[last..])?;

        #[cfg(feature = "tracing")]
        debug!(
            len = template.len(),
            substituted, unresolved, "formatted template"
        );

        Ok(())
    }
}

/// Iterator over the spans of a template, see [`Scanner::placeholders`].
#[derive(Clone, Debug)]
pub struct Placeholders<'t, 'd> {
    template: &'t str,
    prefix: &'d str,
    suffix: &'d str,
    /// Where the next prefix search starts; `None` once the scan is over.
    pos: Option<usize>,
}

impl<'t> Iterator for Placeholders<'t, '_> {
    type Item = Placeholder<'t>;

    fn next(&mut self) -> Option<Self::Item> {
        let pos = self.pos?;

        let found = self.template[pos..].find(self.prefix).and_then(|offset| {
            let start = pos + offset;
            let key_start = start + self.prefix.len();
            let key_end = key_start + self.template[key_start..].find(self.suffix)?;
            Some((start, key_start, key_end))
        });

        let Some((start, key_start, key_end)) = found else {
            self.pos = None;
            return None;
        };
        let end = key_end + self.suffix.len();

        // A zero-width span (both delimiters empty) would be found again at
        // the same position, so step over the next character instead.
        self.pos = if end == start {
            self.template[end..]
                .chars()
                .next()
                .map(|c| end + c.len_utf8())
        } else {
            Some(end)
        };

        Some(Placeholder {
            start,
            end,
            key: &self.template[key_start..key_end],
        })
    }
}

impl FusedIterator for Placeholders<'_, '_> {}

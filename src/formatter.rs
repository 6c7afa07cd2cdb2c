use std::{io, str};

use crate::{Delimiters, FormatError, InvalidTemplate, PlaceholderStore, Scanner, Value, Values};

/// A template formatter with its own values and delimiters.
///
/// Placeholders are keys surrounded by the configured prefix and suffix
/// (`${` and `}` by default). Values are provided with [`put`](Self::put) or
/// [`put_all`](Self::put_all) and substituted by [`format`](Self::format).
/// A key may appear any number of times and in any order; placeholders with
/// no value are left as they are.
///
/// Values persist between calls until [`clear`](Self::clear) is called.
///
/// ```
/// use stencil::Formatter;
///
/// let mut formatter = Formatter::new();
/// formatter.put("fruit", "Apple");
/// formatter.put("name", "John");
/// assert_eq!(
///     formatter.format("Example: ${fruit}, ${number}, ${name}"),
///     "Example: Apple, ${number}, John",
/// );
/// ```
#[derive(Clone, Debug, Default)]
pub struct Formatter {
    delimiters: Delimiters,
    store: PlaceholderStore,
}

impl Formatter {
    /// A formatter using `${` and `}`.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_delimiters(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Delimiters::new(prefix, suffix).into()
    }

    pub fn delimiters(&self) -> &Delimiters {
        &self.delimiters
    }

    pub fn store(&self) -> &PlaceholderStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut PlaceholderStore {
        &mut self.store
    }

    pub fn scanner(&self) -> Scanner<'_> {
        Scanner::new(&self.delimiters)
    }

    /// Map `key` to `value`. `key` is the text between the delimiters.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.store.put(key, value);
    }

    /// Map every pair, overwriting keys that already have a value.
    pub fn put_all<K, V>(&mut self, values: impl IntoIterator<Item = (K, V)>)
    where
        K: Into<String>,
        V: Into<Value>,
    {
        self.store.put_all(values);
    }

    /// Remove all values.
    pub fn clear(&mut self) {
        self.store.clear();
    }

    pub fn lookup(&self, key: &str) -> Option<&Value> {
        self.store.lookup(key)
    }

    /// Replace every mapped placeholder in `template`.
    pub fn format(&self, template: &str) -> String {
        self.scanner().render(template, &self.store)
    }

    /// Format `template` straight into `writer`.
    pub fn format_into(
        &self,
        writer: &mut dyn io::Write,
        template: &str,
    ) -> Result<(), FormatError> {
        self.scanner()
            .render_into(writer, template, &self.store)
            .map_err(FormatError::from)
    }

    /// Format a template given as bytes.
    ///
    /// The bytes are checked to be UTF-8 before anything is scanned.
    ///
    /// ```
    /// use stencil::{FormatError, Formatter};
    ///
    /// let mut formatter = Formatter::new();
    /// formatter.put("x", 1);
    /// assert_eq!(formatter.format_bytes(b"${x}").unwrap(), "1");
    /// assert!(matches!(
    ///     formatter.format_bytes(b"${x} \xc3"),
    ///     Err(FormatError::InvalidTemplate(_)),
    /// ));
    /// ```
    pub fn format_bytes(&self, template: &[u8]) -> Result<String, FormatError> {
        let template =
            str::from_utf8(template).map_err(|err| InvalidTemplate::new(template, err))?;
        Ok(self.format(template))
    }

    /// Keys of placeholders in `template` that have no value, in order.
    pub fn unresolved_keys<'t>(
        &'t self,
        template: &'t str,
    ) -> impl Iterator<Item = &'t str> + 't {
        self.scanner()
            .placeholders(template)
            .map(|placeholder| placeholder.key)
            .filter(move |key| self.store.get_value(key).is_none())
    }
}

impl From<Delimiters> for Formatter {
    fn from(delimiters: Delimiters) -> Self {
        Self {
            delimiters,
            store: PlaceholderStore::new(),
        }
    }
}

#[cfg(test)]
mod test {
    use std::io;

    use crate::{placeholders, FormatError, Formatter};

    #[test]
    fn store_persists_between_calls() {
        let mut formatter = Formatter::new();
        formatter.put("a", "x");
        assert_eq!(formatter.format("${a}"), "x");
        assert_eq!(formatter.format("${a}${a}"), "xx");
    }

    #[test]
    fn empty_key() {
        let mut formatter = Formatter::new();
        assert_eq!(formatter.format("[${}]"), "[${}]");
        formatter.put("", "empty");
        assert_eq!(formatter.format("[${}]"), "[empty]");
    }

    #[test]
    fn dangling_prefix_keeps_trailing_text() {
        let mut formatter = Formatter::new();
        formatter.put("a", "A");
        assert_eq!(formatter.format("${a} and ${a"), "A and ${a");
    }

    #[test]
    fn nested_looking_placeholder() {
        let mut formatter = Formatter::new();
        formatter.put("b", "B");
        assert_eq!(formatter.format("${a${b}c}"), "${a${b}c}");

        formatter.put("a${b", "X");
        assert_eq!(formatter.format("${a${b}c}"), "Xc}");
    }

    #[test]
    fn prefix_equal_to_suffix() {
        let mut formatter = Formatter::with_delimiters("%", "%");
        formatter.put_all(placeholders! { "a" => 1, "b" => 2, "c" => 3 });
        assert_eq!(formatter.format("%a%b%c%"), "1b3");
    }

    #[test]
    fn unresolved() {
        let mut formatter = Formatter::new();
        formatter.put("0", "zero");
        let keys: Vec<_> = formatter.unresolved_keys("${0} ${1} ${2} ${1}").collect();
        assert_eq!(keys, ["1", "2", "1"]);
    }

    #[test]
    fn format_into_writer() {
        let mut formatter = Formatter::new();
        formatter.put("n", 3);
        let mut buf = Vec::new();
        formatter.format_into(&mut buf, "${n} apples").unwrap();
        assert_eq!(buf, b"3 apples");
    }

    struct Broken;

    impl io::Write for Broken {
        fn write(&mut self, _: &[u8]) -> io::Result<usize> {
            Err(io::ErrorKind::BrokenPipe.into())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn format_into_passes_io_errors() {
        let err = Formatter::new().format_into(&mut Broken, "text").unwrap_err();
        assert!(matches!(err, FormatError::Io(e) if e.kind() == io::ErrorKind::BrokenPipe));
    }

    #[test]
    fn format_bytes_rejects_invalid_utf8() {
        let mut formatter = Formatter::new();
        formatter.put("a", "A");
        assert_eq!(formatter.format_bytes("${a} ü".as_bytes()).unwrap(), "A ü");

        let err = formatter.format_bytes(b"${a}\x80").unwrap_err();
        match err {
            FormatError::InvalidTemplate(invalid) => assert_eq!(invalid.valid_up_to(), 4),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn accessors() {
        let mut formatter = Formatter::with_delimiters("[[", "]]");
        formatter.store_mut().put("k", 'v');
        assert_eq!(formatter.delimiters().prefix(), "[[");
        assert_eq!(formatter.store().len(), 1);
        assert_eq!(
            formatter.lookup("k").map(ToString::to_string).as_deref(),
            Some("v")
        );
        assert_eq!(formatter.scanner().keys("[[k]] [[j]]").count(), 2);
    }
}

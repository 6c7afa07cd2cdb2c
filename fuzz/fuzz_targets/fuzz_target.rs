#![no_main]

use libfuzzer_sys::fuzz_target;
use stencil::Formatter;

fuzz_target!(|input: (&str, &str, &str, &str)| {
    let (prefix, suffix, key, template) = input;

    let mut formatter = Formatter::with_delimiters(prefix, suffix);
    assert_eq!(formatter.format(template), template);

    formatter.put(key, "value");
    let output = formatter.format(template);
    if !formatter.scanner().keys(template).any(|k| k == key) {
        assert_eq!(output, template);
    }
});

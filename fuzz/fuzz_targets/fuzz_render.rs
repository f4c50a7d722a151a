#![no_main]

use error_factory::{Arg, template};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };

    // First line is the template, the rest are values
    let mut lines = text.split('\n');
    let template_text = lines.next().unwrap_or_default();
    let values: Vec<Arg<'_>> = lines.map(Arg::from).collect();

    let rendered = template::render(template_text, &values);
    let chars: Vec<char> = rendered.chars().collect();
    assert!(chars.windows(2).all(|w| !(w[0].is_whitespace() && w[1].is_whitespace())));
});

#![no_main]

use error_factory::{Arg, DEFAULT_CODE, ErrorFactory};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|input: (u32, u32, String, Vec<String>)| {
    let (configured, requested, template_text, values) = input;

    let factory = ErrorFactory::new([(configured, template_text)]);
    let args: Vec<Arg<'_>> = values.iter().map(Arg::from).collect();
    let err = factory.create(requested, &args);

    if requested != configured {
        assert_eq!(err.code(), DEFAULT_CODE);
    }
});

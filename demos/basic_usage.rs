use error_factory::{Arg, ErrorFactory, Result, templates};

fn load_user(errors: &ErrorFactory, name: &str) -> Result<u32> {
    // Simulate a lookup failure for an unknown account
    if name != "simon" {
        return Err(errors.create(404, &[Arg::from(name)]));
    }
    Ok(7)
}

fn main() {
    let errors = ErrorFactory::new(templates! {
        404 => "no such user {0}",
        500 => "internal error while {0}: {1}",
    });

    println!("--- Basic Usage Example ---\n");

    match load_user(&errors, "mallory") {
        Ok(id) => println!("found user {}", id),
        Err(err) => {
            println!("1. [DISPLAY] {}", err);
            println!("2. [CODE]    {}", err.code());
        }
    }

    // Missing values leave no double spaces behind
    let err = errors.create(500, &[Arg::from("saving"), Arg::MISSING]);
    println!("3. [PARTIAL] {:?}", err.message());

    // Unknown code: the supplied message is used, code falls back to 0
    let err = errors.create(999, &[Arg::from("something odd happened")]);
    println!("4. [UNKNOWN] code={} message={:?}", err.code(), err.message());
}

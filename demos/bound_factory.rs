use error_factory::{Arg, ErrorFactory, create_error};

fn main() {
    println!("--- Bound Factory Example ---\n");

    // Only the creation operation is kept; the factory lives inside it.
    let goodbye = ErrorFactory::using([(100, "goodbye {0}")]);
    let hello = ErrorFactory::using([(100, "hi {0}")]);

    let a = create_error!(goodbye, 100, "simon");
    let b = create_error!(hello, 100, "simon");
    println!("goodbye factory: {}", a);
    println!("hello factory:   {}", b);

    // Plain call form, without the macro
    let c = goodbye(100.into(), &[Arg::from("world")]);
    println!("direct call:     {}", c);

    // A raw message never touches the templates
    let d = create_error!(hello, "a custom error message");
    println!("raw message:     code={} {}", d.code(), d);
}

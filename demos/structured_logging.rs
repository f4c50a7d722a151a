use error_factory::{Arg, ErrorFactory, TemplateConfig};

fn main() {
    println!("--- Structured Logging Example ---\n");

    // Strict loading surfaces configuration mistakes at start-up
    let rejected = TemplateConfig::try_from_entries([("1", "ok {0}"), ("two", "bad key")]);
    if let Err(err) = rejected {
        println!("[CONFIG] rejected: {}", err);
    }

    let errors = ErrorFactory::new([("1", "quota exceeded for {0}: {1} of {2}")]);
    let err = errors.create(1, &[Arg::from("simon"), Arg::from(120), Arg::from(100)]);

    // Field access for structured sinks
    err.with_log_record(|record| {
        println!("   code:    {}", record.code());
        println!("   message: {}", record.message());
        println!("   default: {}", record.is_default());
    });

    // Single-line form, with the message bounded
    let mut line = String::new();
    if err.log_record().write_to(&mut line).is_ok() {
        println!("\n[LINE] {}", line);
    }
}

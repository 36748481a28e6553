//! Validating form input with a guard
//!
//! Run with `cargo run -p fieldguard-validator --example form_validation`.

use fieldguard_validator::prelude::*;
use serde_json::json;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let guard = Guard::new(rules! {
        "a" => [required, equals("123")],
        "b" => [required, truthy()],
        "c" => [one_of(["spam", "eggs", "bacon"])],
        "d" => [not(range(1, 100))],
        "e" => [length(0, 5)?],
        "h" => [required, pattern(r"\d\d%")?],
    });

    let query = json!({"a": "123", "b": "yes", "c": "spam"});
    let body = json!({"d": "123", "e": " 1236 ", "h": "11%"});
    let sources = [query, body].map(|v| v.as_object().cloned().unwrap_or_default());

    match guard.check_sources(sources) {
        Ok(values) => println!("accepted: {}", serde_json::Value::Object(values)),
        Err(rejected) => println!("{rejected}"),
    }

    let bad = json!({"a": "124", "d": "13"});
    let outcome = validate(guard.rules(), bad.as_object().ok_or("not an object")?);
    println!("{}", serde_json::to_string_pretty(&outcome)?);

    Ok(())
}

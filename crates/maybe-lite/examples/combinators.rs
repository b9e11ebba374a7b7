use maybe_lite::{Maybe, MaybeError};

fn parse_port(raw: Option<&str>) -> Result<Maybe<u16>, MaybeError> {
    let port = Maybe::of(raw)
        .filter(|s| !s.is_empty())
        .map(|s| s.parse::<u16>().ok())?
        .flat_map(Maybe::of)
        .filter(|p| *p >= 1024);
    Ok(port)
}

fn main() -> Result<(), MaybeError> {
    for raw in [Some("8080"), Some("80"), Some(""), Some("nope"), None] {
        let port = parse_port(raw)?;
        println!("{raw:?} -> {port} (or {})", port.or_else(3000).unwrap_or_default());
    }

    // A present slot holding null is not absence.
    let held = Maybe::<u16>::some_null();
    println!("{held} == {}: {}", Maybe::<u16>::none(), held == Maybe::none());
    held.if_present(|p| println!("consumer still runs, payload = {p:?}"));
    Ok(())
}

/// Query string editing example
use tiny_query_string::{EnvSource, QueryEngine, get_all, get_one, remove_one, set_one};

fn main() -> tiny_query_string::Result<()> {
    let url = "https://example.com/search?q=rust&page=2#results";

    // Read
    println!("q: {:?}", get_one("q", url)?); // Value("rust")
    println!("debug: {:?}", get_one("debug", url)?); // Absent
    for (name, value) in get_all(url)?.iter() {
        println!("  {name} = {value:?}");
    }
    println!();

    // Write (replace in place, then append before the fragment)
    let url = set_one("page", 3, url)?;
    println!("After set: {url}"); // https://example.com/search?q=rust&page=3#results
    let url = set_one("lang", "en gb", &url)?;
    println!("After set: {url}"); // https://example.com/search?q=rust&page=3&lang=en%20gb#results
    println!();

    // Remove
    let url = remove_one("q", &url)?;
    println!("After remove: {url}"); // https://example.com/search?page=3&lang=en%20gb#results
    println!();

    // Fall back to the CGI QUERY_STRING variable when no text is given
    let engine = QueryEngine::with_source(EnvSource::default());
    println!("QUERY_STRING entries: {:?}", engine.get_all(None)?);

    Ok(())
}

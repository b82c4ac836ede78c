pub fn run() -> anyhow::Result<()> {
    println!("coursefinder {}", env!("CARGO_PKG_VERSION"));
    println!("Content-based course recommendations over a prebuilt similarity matrix");
    Ok(())
}

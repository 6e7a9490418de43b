use std::path::Path;

use beanpost_import::load;
use beancount_sql::{import, ImportOptions};

fn run() -> Result<(), Box<dyn std::error::Error>> {
    let filename = std::env::args().nth(1).ok_or("filename argument")?;
    let loaded = load(Path::new(&filename))?;

    let stdout = std::io::stdout();
    import(&mut stdout.lock(), &loaded.ledger, &ImportOptions::default())?;
    Ok(())
}

fn main() {
    if let Err(e) = run() {
        println!("Error: {}", e);
    }
}

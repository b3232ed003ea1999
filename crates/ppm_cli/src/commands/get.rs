//! Get command implementation.

use ppm_core::{CoreError, Store};

/// Runs the get command.
///
/// Prints the bare password so the output can be piped.
pub fn run(store: &Store, app: &str) -> Result<(), Box<dyn std::error::Error>> {
    let password = store.get(app).ok_or_else(|| CoreError::not_found(app))?;
    println!("{password}");
    Ok(())
}

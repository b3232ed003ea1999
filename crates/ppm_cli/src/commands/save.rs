//! Save command implementation.

use crate::output;
use ppm_core::Store;

/// Runs the save command.
pub fn run(store: &mut Store) -> Result<(), Box<dyn std::error::Error>> {
    store.save()?;
    output::message("saved!");
    Ok(())
}

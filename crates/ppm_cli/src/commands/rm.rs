//! Remove command implementation.

use crate::output;
use ppm_core::Store;

/// Runs the rm command.
pub fn run(store: &mut Store, app: &str) -> Result<(), Box<dyn std::error::Error>> {
    store.remove(app)?;
    output::message(&format!("'{app}' deleted"));
    Ok(())
}

//! Add command implementation.

use crate::output;
use ppm_core::Store;

/// Runs the add command.
pub fn run(store: &mut Store, app: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    store.add(app, password)?;
    output::message(&format!("'{app}' added"));
    Ok(())
}

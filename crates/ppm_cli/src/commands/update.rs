//! Update command implementation.

use crate::output;
use ppm_core::{CoreError, Store};

/// Runs the update command.
pub fn run(store: &mut Store, app: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    match store.update(app, password) {
        Ok(()) => {
            output::message(&format!("'{app}' updated"));
            Ok(())
        }
        Err(CoreError::NotFound { .. }) => {
            Err(format!("'{app}' not found, use 'add' to add a new user").into())
        }
        Err(e) => Err(e.into()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn update_missing_suggests_add() {
        let mut store = Store::open_in_memory("secret").unwrap();
        let err = run(&mut store, "missing-key", "x").unwrap_err();
        assert_eq!(
            err.to_string(),
            "'missing-key' not found, use 'add' to add a new user"
        );
        assert!(store.is_empty());
    }
}

//! List command implementation.

use crate::output;
use ppm_core::Store;
use serde::Serialize;

/// One listed entry.
#[derive(Debug, Serialize)]
pub struct ListedEntry<'a> {
    /// Application or user name.
    pub app: &'a str,
    /// Stored password.
    pub password: &'a str,
}

/// Runs the list command.
pub fn run(store: &Store, format: &str) -> Result<(), Box<dyn std::error::Error>> {
    match format {
        "json" => {
            println!("{}", to_json(store)?);
        }
        _ => {
            for (app, password) in store.list() {
                output::entry(app, password);
            }
        }
    }
    Ok(())
}

fn to_json(store: &Store) -> serde_json::Result<String> {
    let entries: Vec<ListedEntry<'_>> = store
        .list()
        .map(|(app, password)| ListedEntry { app, password })
        .collect();
    serde_json::to_string_pretty(&entries)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn json_lists_every_entry() {
        let mut store = Store::open_in_memory("secret").unwrap();
        store.add("github", "pw1").unwrap();
        store.add("mail", "pw2").unwrap();

        let json: serde_json::Value = serde_json::from_str(&to_json(&store).unwrap()).unwrap();
        let entries = json.as_array().unwrap();
        assert_eq!(entries.len(), 2);
        assert!(entries
            .iter()
            .any(|e| e["app"] == "github" && e["password"] == "pw1"));
        assert!(entries
            .iter()
            .any(|e| e["app"] == "mail" && e["password"] == "pw2"));
    }

    #[test]
    fn json_empty_store() {
        let store = Store::open_in_memory("secret").unwrap();
        assert_eq!(to_json(&store).unwrap(), "[]");
    }
}

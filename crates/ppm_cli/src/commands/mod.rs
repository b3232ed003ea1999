//! CLI command implementations.

pub mod add;
pub mod get;
pub mod list;
pub mod rm;
pub mod save;
pub mod update;

use crate::{output, Commands};
use ppm_core::Store;

impl Commands {
    /// Returns `true` for commands that change the entries.
    pub fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Add { .. } | Self::Update { .. } | Self::Rm { .. }
        )
    }
}

/// Runs one store command.
pub fn run(store: &mut Store, command: Commands) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Commands::Add { app, password } => add::run(store, &app, &password),
        Commands::Update { app, password } => update::run(store, &app, &password),
        Commands::List { format } => list::run(store, &format),
        Commands::Get { app } => get::run(store, &app),
        Commands::Rm { app } => rm::run(store, &app),
        Commands::Save => save::run(store),
    }
}

/// Runs one command in one-shot mode, returning `true` on success.
///
/// The store is saved only after a successful command that changed the
/// entries. Read-only commands never write the file.
pub fn run_once(store: &mut Store, command: Commands) -> bool {
    let mutates = command.mutates();
    if let Err(e) = run(store, command) {
        output::error(&*e);
        return false;
    }
    if mutates {
        if let Err(e) = store.save() {
            output::error(&e);
            return false;
        }
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use ppm_core::Config;
    use ppm_storage::InMemoryBackend;

    fn open(backend: &InMemoryBackend, passphrase: &str) -> Store {
        Store::open_with_backend(Config::default(), Box::new(backend.clone()), passphrase)
            .unwrap()
    }

    fn saved_store() -> InMemoryBackend {
        let backend = InMemoryBackend::new();
        let mut store = open(&backend, "secret");
        store.add("github", "pw1").unwrap();
        store.save().unwrap();
        backend
    }

    #[test]
    fn run_once_read_only_leaves_file_untouched() {
        let backend = saved_store();
        let before = backend.data().unwrap();

        let mut store = open(&backend, "wrong");
        run_once(
            &mut store,
            Commands::List {
                format: "text".into(),
            },
        );
        run_once(&mut store, Commands::Get { app: "github".into() });
        store.close();

        assert_eq!(backend.data().unwrap(), before);
        assert_eq!(open(&backend, "secret").get("github"), Some("pw1"));
    }

    #[test]
    fn run_once_saves_after_change() {
        let backend = saved_store();
        let mut store = open(&backend, "secret");
        assert!(run_once(
            &mut store,
            Commands::Add {
                app: "mail".into(),
                password: "pw2".into(),
            },
        ));

        let reopened = open(&backend, "secret");
        assert_eq!(reopened.get("mail"), Some("pw2"));
        assert_eq!(reopened.get("github"), Some("pw1"));
    }

    #[test]
    fn run_once_failed_change_does_not_save() {
        let backend = saved_store();
        let before = backend.data().unwrap();
        let mut store = open(&backend, "secret");
        assert!(!run_once(&mut store, Commands::Rm { app: "bank".into() }));
        assert_eq!(backend.data().unwrap(), before);
    }

    #[test]
    fn mutating_commands() {
        let add = Commands::Add {
            app: "github".into(),
            password: "pw1".into(),
        };
        assert!(add.mutates());
        assert!(Commands::Rm { app: "github".into() }.mutates());
        assert!(!Commands::Get { app: "github".into() }.mutates());
        assert!(!Commands::Save.mutates());
    }

    #[test]
    fn run_dispatches_to_store() {
        let mut store = Store::open_in_memory("secret").unwrap();
        run(
            &mut store,
            Commands::Add {
                app: "github".into(),
                password: "pw1".into(),
            },
        )
        .unwrap();
        run(
            &mut store,
            Commands::Update {
                app: "github".into(),
                password: "pw2".into(),
            },
        )
        .unwrap();
        assert_eq!(store.get("github"), Some("pw2"));

        run(&mut store, Commands::Rm { app: "github".into() }).unwrap();
        assert!(store.is_empty());
        assert!(run(&mut store, Commands::Rm { app: "github".into() }).is_err());
    }
}

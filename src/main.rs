use std::process::ExitCode;

use tracing::{error, info, warn};

use keyward::{Config, CredentialStore, Role};

const CONFIG_PATH: &str = "keyward.toml";

fn main() -> ExitCode {
    // Load configuration
    let config = match Config::load_with_env(CONFIG_PATH) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Failed to load {CONFIG_PATH}: {e}");
            eprintln!("Using default configuration.");
            let mut config = Config::default();
            config.apply_env_overrides();
            config
        }
    };

    // Initialize logging
    if let Err(e) = keyward::logging::init(&config.logging) {
        eprintln!("Failed to initialize logging: {e}");
        keyward::logging::init_console_only(&config.logging.level);
    }

    if let Err(e) = config.validate() {
        error!("{e}");
        return ExitCode::FAILURE;
    }

    let store = CredentialStore::open(&config.store.path);
    match store.load_users() {
        Ok(table) => {
            let unrecognized = table.iter().filter(|u| !u.role.is_recognized()).count();
            info!(
                users = table.len(),
                admins = table.count_role(&Role::Admin),
                regular = table.count_role(&Role::Regular),
                "Password file loaded"
            );
            if unrecognized > 0 {
                warn!(count = unrecognized, "Users with unrecognized roles");
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("Could not load password file: {e}");
            ExitCode::FAILURE
        }
    }
}

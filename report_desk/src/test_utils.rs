//! Shared test initialization for every test module in the crate

use std::sync::Once;

const TEST_DEFAULTS: &[(&str, &str)] = &[
    ("GENERIC_DATA_STORE_TYPE", "sqlite"),
    (
        "GENERIC_DATA_STORE_URL",
        "sqlite:file:report_desk_test?mode=memory&cache=shared",
    ),
    ("GENERIC_CACHE_STORE_TYPE", "memory"),
    ("GENERIC_CACHE_STORE_URL", "memory"),
];

/// Centralized test initialization
///
/// Loads `.env_test` once, falling back to in-memory SQLite and an in-memory
/// cache for any store variable left unset, then makes sure every table exists.
pub async fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }

        for (key, value) in TEST_DEFAULTS {
            if std::env::var(key).is_err() {
                // Runs before any store LazyLock is read and before other threads touch the env
                unsafe { std::env::set_var(key, value) };
            }
        }
    });

    ensure_database_initialized().await;
}

async fn ensure_database_initialized() {
    if let Err(e) = crate::userdb::init().await {
        eprintln!("Warning: Failed to initialize UserStore: {e}");
    }
    if let Err(e) = crate::authority::init().await {
        eprintln!("Warning: Failed to initialize AuthorityStore: {e}");
    }
    if let Err(e) = crate::report::init().await {
        eprintln!("Warning: Failed to initialize report table: {e}");
    }
}

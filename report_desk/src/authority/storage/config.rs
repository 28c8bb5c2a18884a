use std::{env, sync::LazyLock};

use crate::storage::DB_TABLE_PREFIX;

/// Authorities table name
pub(super) static DB_TABLE_AUTHORITIES: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_AUTHORITIES")
        .unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "authorities"))
});

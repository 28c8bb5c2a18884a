use std::{env, sync::LazyLock};

use crate::storage::DB_TABLE_PREFIX;

/// Reports table name
pub(crate) static DB_TABLE_REPORTS: LazyLock<String> = LazyLock::new(|| {
    env::var("DB_TABLE_REPORTS").unwrap_or_else(|_| format!("{}{}", *DB_TABLE_PREFIX, "reports"))
});

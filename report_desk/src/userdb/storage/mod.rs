mod config;
mod postgres;
mod sqlite;
mod store_type;

pub(crate) use config::DB_TABLE_USERS;
pub(crate) use store_type::UserStore;

mod errors;
mod storage;
mod types;

pub use errors::AuthorityError;
pub(crate) use storage::AuthorityStore;
pub use types::Authority;

pub(crate) async fn init() -> Result<(), AuthorityError> {
    AuthorityStore::init().await
}

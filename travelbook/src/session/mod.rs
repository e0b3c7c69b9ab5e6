//! Session state persisted between invocations.

mod storage;
mod store;

pub use storage::LocalStorage;
pub use store::Session;

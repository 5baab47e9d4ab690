mod file_store;
mod memory_store;

pub use self::file_store::FileCredentialStore;
pub use self::memory_store::MemoryCredentialStore;

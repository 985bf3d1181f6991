//! Session persistence.
//!
//! The engine persists through the [`KeyValueStore`] port. The session is
//! spread over five fixed keys (see [`codec`]); hosts provide the medium:
//!
//! - [`MemoryStore`]: in-memory, optional quota (tests, ephemeral sessions)
//! - [`FileStore`]: one fsynced JSON file (desktop/CLI hosts)

pub mod store;
pub mod codec;
pub mod memory;
pub mod file;

pub use store::KeyValueStore;
pub use codec::{load_session, save_session, SESSION_KEYS};
pub use memory::MemoryStore;
pub use file::FileStore;

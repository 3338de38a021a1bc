pub mod errors;
pub mod models;

pub use errors::{
    LoadError,
    PersistenceError,
    SessionError,
};
pub use models::{
    EntryId,
    FilterMode,
    Status,
    StatusCounts,
    WordEntry,
};

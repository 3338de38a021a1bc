//! Vocabulary flashcards: a spreadsheet of English words with Turkish
//! translations, drawn one at a time and tagged as learned, repeat or not learned.

pub mod cli;
pub mod core;
pub mod gui;
pub mod logging;
pub mod persistence;
pub mod session;
pub mod vocabulary;

pub use crate::{
    core::{
        EntryId,
        FilterMode,
        LoadError,
        SessionError,
        Status,
        StatusCounts,
        WordEntry,
    },
    session::{
        Advance,
        Progress,
        RandomSampler,
        Sampler,
        Session,
        SessionMode,
    },
    vocabulary::VocabularyTable,
};

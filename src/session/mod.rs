pub mod sampler;

pub use sampler::{
    RandomSampler,
    Sampler,
};
use serde::{
    Deserialize,
    Serialize,
};
use tracing::{
    debug,
    info,
};

use crate::{
    core::{
        EntryId,
        FilterMode,
        SessionError,
        Status,
        StatusCounts,
        WordEntry,
    },
    vocabulary::VocabularyTable,
};

/// How the session reacts when the filtered set runs dry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SessionMode {
    /// Free filtering; an empty category is reported and the current word stays.
    #[default]
    Browse,
    /// Only pending words are drawn; the session ends once every word is learned.
    Drill,
}

impl SessionMode {
    pub fn initial_filter(&self) -> FilterMode {
        match self {
            SessionMode::Browse => FilterMode::All,
            SessionMode::Drill => FilterMode::Pending,
        }
    }
}

/// Outcome of drawing a new word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Drawn(EntryId),
    NoWordsAvailable,
    AllLearned,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub counts: StatusCounts,
    pub percent_learned: f64,
}

impl Progress {
    pub fn from_counts(counts: StatusCounts) -> Self {
        let percent_learned = if counts.total == 0 {
            0.0
        } else {
            counts.learned as f64 / counts.total as f64 * 100.0
        };
        Self { counts, percent_learned }
    }
}

/// English terms grouped by status, each group in table order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StatusListing {
    pub learned: Vec<String>,
    pub repeat: Vec<String>,
    pub not_learned: Vec<String>,
}

impl StatusListing {
    pub fn column(&self, status: Status) -> &[String] {
        match status {
            Status::Learned => &self.learned,
            Status::Repeat => &self.repeat,
            Status::NotLearned => &self.not_learned,
        }
    }
}

/// What the card shows for the current word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardView<'a> {
    pub id: EntryId,
    pub english: &'a str,
    pub example_sentence: &'a str,
    pub translation: Option<&'a str>,
    pub status: Status,
}

pub struct Session<S: Sampler = RandomSampler> {
    table: VocabularyTable,
    sampler: S,
    mode: SessionMode,
    filter: FilterMode,
    current: Option<EntryId>,
    revealed: bool,
    finished: bool,
}

impl<S: Sampler> Session<S> {
    /// Starts with no current word; call [`Session::advance`] to draw the first one.
    pub fn new(table: VocabularyTable, mode: SessionMode, sampler: S) -> Self {
        Self {
            table,
            sampler,
            mode,
            filter: mode.initial_filter(),
            current: None,
            revealed: false,
            finished: false,
        }
    }

    pub fn table(&self) -> &VocabularyTable {
        &self.table
    }

    pub fn mode(&self) -> SessionMode {
        self.mode
    }

    pub fn filter(&self) -> FilterMode {
        self.filter
    }

    pub fn current_id(&self) -> Option<EntryId> {
        self.current
    }

    pub fn current(&self) -> Option<&WordEntry> {
        self.current.and_then(|id| self.table.get(id))
    }

    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }

    pub fn filtered(&self, mode: FilterMode) -> Vec<EntryId> {
        self.table.filtered(mode)
    }

    /// Changing the filter always draws again, even when it did not change.
    pub fn set_filter(&mut self, mode: FilterMode) -> Advance {
        debug!(filter = %mode, "Filter changed");
        self.filter = mode;
        self.advance()
    }

    /// Once a drill has ended, only [`Session::reload`] starts it again.
    pub fn advance(&mut self) -> Advance {
        if self.finished {
            return Advance::AllLearned;
        }

        let candidates = self.table.filtered(self.filter);

        if candidates.is_empty() {
            if self.mode == SessionMode::Drill && self.table.counts().pending() == 0 {
                info!(words = self.table.len(), "Every word is learned, ending session");
                self.current = None;
                self.revealed = false;
                self.finished = true;
                return Advance::AllLearned;
            }
            debug!(filter = %self.filter, "No words in the selected category");
            return Advance::NoWordsAvailable;
        }

        let id = candidates[self.sampler.pick(candidates.len())];
        self.current = Some(id);
        self.revealed = false;
        debug!(entry = %id, candidates = candidates.len(), "Drew word");
        Advance::Drawn(id)
    }

    pub fn reveal(&mut self) -> Result<&str, SessionError> {
        let id = self.current.ok_or(SessionError::NoCurrentEntry)?;
        let entry = self.table.get(id).ok_or(SessionError::NoCurrentEntry)?;
        self.revealed = true;
        Ok(entry.turkish.as_str())
    }

    /// Tags the current word and immediately moves on to another draw.
    pub fn set_status(&mut self, status: Status) -> Result<Advance, SessionError> {
        let id = self.current.ok_or(SessionError::NoCurrentEntry)?;
        if !self.table.set_status(id, status) {
            return Err(SessionError::NoCurrentEntry);
        }
        debug!(entry = %id, status = %status, "Status changed");
        Ok(self.advance())
    }

    pub fn progress(&self) -> Progress {
        Progress::from_counts(self.table.counts())
    }

    pub fn listing(&self) -> StatusListing {
        let column = |status: Status| -> Vec<String> {
            self.table.english_with_status(status).map(String::from).collect()
        };
        StatusListing {
            learned: column(Status::Learned),
            repeat: column(Status::Repeat),
            not_learned: column(Status::NotLearned),
        }
    }

    pub fn card(&self) -> Option<CardView<'_>> {
        let id = self.current?;
        let entry = self.table.get(id)?;
        Some(CardView {
            id,
            english: &entry.english,
            example_sentence: &entry.example_sentence,
            translation: self.revealed.then_some(entry.turkish.as_str()),
            status: entry.status(),
        })
    }

    /// Replaces the vocabulary and starts over with a fresh draw.
    pub fn reload(&mut self, table: VocabularyTable) -> Advance {
        info!(words = table.len(), "Reloading vocabulary");
        self.table = table;
        self.filter = self.mode.initial_filter();
        self.current = None;
        self.revealed = false;
        self.finished = false;
        self.advance()
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;

    /// Hands out indexes from a fixed script, then falls back to the first candidate.
    struct Scripted(VecDeque<usize>);

    impl Scripted {
        fn new(picks: &[usize]) -> Self {
            Self(picks.iter().copied().collect())
        }
    }

    impl Sampler for Scripted {
        fn pick(&mut self, len: usize) -> usize {
            self.0.pop_front().unwrap_or(0).min(len - 1)
        }
    }

    fn table(words: &[(&str, &str)]) -> VocabularyTable {
        VocabularyTable::from_entries(
            words
                .iter()
                .map(|(english, turkish)| {
                    WordEntry::new(*english, *turkish, format!("Example with {english}."))
                })
                .collect(),
        )
    }

    fn cat_and_dog(mode: SessionMode, picks: &[usize]) -> Session<Scripted> {
        Session::new(table(&[("cat", "kedi"), ("dog", "köpek")]), mode, Scripted::new(picks))
    }

    #[test]
    fn test_new_session_has_no_current_word() {
        let session = cat_and_dog(SessionMode::Browse, &[]);
        assert_eq!(session.current_id(), None);
        assert_eq!(session.filter(), FilterMode::All);
        assert!(session.card().is_none());
    }

    #[test]
    fn test_advance_uses_the_sampler() {
        let mut session = cat_and_dog(SessionMode::Browse, &[1, 0]);
        assert_eq!(session.advance(), Advance::Drawn(EntryId(1)));
        assert_eq!(session.current().unwrap().english, "dog");
        assert_eq!(session.advance(), Advance::Drawn(EntryId(0)));
        assert_eq!(session.current().unwrap().english, "cat");
    }

    #[test]
    fn test_sampler_indexes_into_the_filtered_set() {
        let mut session = Session::new(
            table(&[("a", "1"), ("b", "2"), ("c", "3")]),
            SessionMode::Browse,
            Scripted::new(&[2, 0]),
        );
        session.advance();
        // "c" is the only repeat word
        session.set_status(Status::Repeat).unwrap();
        assert_eq!(session.set_filter(FilterMode::Repeat), Advance::Drawn(EntryId(2)));
    }

    #[test]
    fn test_scenario_cat_learned() {
        let mut session = cat_and_dog(SessionMode::Browse, &[0]);
        session.advance();
        assert_eq!(session.current().unwrap().english, "cat");

        session.set_status(Status::Learned).unwrap();

        let progress = session.progress();
        assert_eq!(
            progress.counts,
            StatusCounts { learned: 1, repeat: 0, not_learned: 1, total: 2 }
        );
        assert_eq!(progress.percent_learned, 50.0);
        assert_eq!(session.table().get(EntryId(0)).unwrap().status(), Status::Learned);
    }

    #[test]
    fn test_set_status_is_durable_and_advances() {
        let mut session = cat_and_dog(SessionMode::Browse, &[1, 1]);
        session.advance();
        session.reveal().unwrap();

        let outcome = session.set_status(Status::Repeat).unwrap();

        assert_eq!(outcome, Advance::Drawn(EntryId(1)));
        assert_eq!(session.table().get(EntryId(1)).unwrap().status(), Status::Repeat);
        assert!(!session.is_revealed());
    }

    #[test]
    fn test_set_status_without_current_word() {
        let mut session = cat_and_dog(SessionMode::Browse, &[]);
        assert_eq!(session.set_status(Status::Learned), Err(SessionError::NoCurrentEntry));
        assert_eq!(session.reveal(), Err(SessionError::NoCurrentEntry));
        assert_eq!(session.progress().counts.learned, 0);
    }

    #[test]
    fn test_reveal_is_idempotent_and_keeps_status() {
        let mut session = cat_and_dog(SessionMode::Browse, &[1]);
        session.advance();

        assert_eq!(session.reveal(), Ok("köpek"));
        assert_eq!(session.reveal(), Ok("köpek"));
        assert_eq!(session.current().unwrap().status(), Status::NotLearned);
        assert_eq!(session.card().unwrap().translation, Some("köpek"));
    }

    #[test]
    fn test_advance_hides_translation() {
        let mut session = cat_and_dog(SessionMode::Browse, &[0, 0]);
        session.advance();
        session.reveal().unwrap();
        assert!(session.is_revealed());

        session.advance();
        assert!(!session.is_revealed());
        assert_eq!(session.card().unwrap().translation, None);
    }

    #[test]
    fn test_empty_filter_keeps_current_word() {
        let mut session = Session::new(
            table(&[("cat", "kedi")]),
            SessionMode::Browse,
            Scripted::new(&[]),
        );
        session.advance();
        session.reveal().unwrap();

        assert_eq!(session.set_filter(FilterMode::Repeat), Advance::NoWordsAvailable);
        assert!(session.filtered(FilterMode::Repeat).is_empty());
        assert_eq!(session.current_id(), Some(EntryId(0)));
        assert!(session.is_revealed());
        assert!(!session.is_finished());
    }

    #[test]
    fn test_set_filter_always_redraws() {
        let mut session = cat_and_dog(SessionMode::Browse, &[0, 1]);
        session.advance();
        assert_eq!(session.set_filter(FilterMode::All), Advance::Drawn(EntryId(1)));
    }

    #[test]
    fn test_set_filter_restricts_candidates() {
        let mut session = Session::new(
            table(&[("a", "1"), ("b", "2"), ("c", "3"), ("d", "4")]),
            SessionMode::Browse,
            RandomSampler::seeded(3),
        );
        session.advance();
        for _ in 0..6 {
            session.set_status(Status::Learned).unwrap();
        }

        for _ in 0..20 {
            if let Advance::Drawn(id) = session.set_filter(FilterMode::Learned) {
                assert_eq!(session.table().get(id).unwrap().status(), Status::Learned);
            }
        }
        let learned = session.filtered(FilterMode::Learned);
        assert!(learned
            .iter()
            .all(|id| session.table().get(*id).unwrap().status() == Status::Learned));
        assert_eq!(session.filtered(FilterMode::All).len(), 4);
    }

    #[test]
    fn test_counts_invariant_through_a_session() {
        let mut session = Session::new(
            table(&[("a", "1"), ("b", "2"), ("c", "3")]),
            SessionMode::Browse,
            RandomSampler::seeded(11),
        );
        session.advance();
        let statuses = [Status::Learned, Status::Repeat, Status::NotLearned, Status::Learned];
        for status in statuses.into_iter().cycle().take(12) {
            session.set_status(status).unwrap();
            let counts = session.progress().counts;
            assert_eq!(counts.total, 3);
            assert_eq!(counts.learned + counts.repeat + counts.not_learned, counts.total);
        }
    }

    #[test]
    fn test_progress_of_empty_table() {
        let session = Session::new(table(&[]), SessionMode::Browse, Scripted::new(&[]));
        let progress = session.progress();
        assert_eq!(progress.counts.total, 0);
        assert_eq!(progress.percent_learned, 0.0);
    }

    #[test]
    fn test_empty_table_in_browse_mode() {
        let mut session = Session::new(table(&[]), SessionMode::Browse, Scripted::new(&[]));
        assert_eq!(session.advance(), Advance::NoWordsAvailable);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_drill_single_word_all_learned() {
        let mut session =
            Session::new(table(&[("cat", "kedi")]), SessionMode::Drill, Scripted::new(&[]));
        assert_eq!(session.filter(), FilterMode::Pending);
        assert_eq!(session.advance(), Advance::Drawn(EntryId(0)));

        assert_eq!(session.set_status(Status::Learned), Ok(Advance::AllLearned));
        assert!(session.is_finished());
        assert_eq!(session.current_id(), None);
        assert_eq!(session.advance(), Advance::AllLearned);
    }

    #[test]
    fn test_finished_drill_stays_finished() {
        let mut session =
            Session::new(table(&[("cat", "kedi")]), SessionMode::Drill, Scripted::new(&[]));
        session.advance();
        session.set_status(Status::Learned).unwrap();

        assert_eq!(session.set_filter(FilterMode::All), Advance::AllLearned);
        assert_eq!(session.set_filter(FilterMode::Learned), Advance::AllLearned);
        assert!(session.is_finished());
        assert_eq!(session.current_id(), None);
        assert!(session.card().is_none());
    }

    #[test]
    fn test_drill_skips_learned_words() {
        let mut session = cat_and_dog(SessionMode::Drill, &[0, 0, 0]);
        session.advance();
        session.set_status(Status::Learned).unwrap();

        // only "dog" is pending now
        assert_eq!(session.current_id(), Some(EntryId(1)));
        assert_eq!(session.set_status(Status::Repeat), Ok(Advance::Drawn(EntryId(1))));
        assert!(!session.is_finished());
    }

    #[test]
    fn test_drill_with_other_filter_reports_no_words() {
        let mut session = cat_and_dog(SessionMode::Drill, &[]);
        session.advance();
        assert_eq!(session.set_filter(FilterMode::Learned), Advance::NoWordsAvailable);
        assert!(!session.is_finished());
    }

    #[test]
    fn test_listing_groups_by_status() {
        let mut session = Session::new(
            table(&[("a", "1"), ("b", "2"), ("c", "3")]),
            SessionMode::Browse,
            Scripted::new(&[0, 0, 1]),
        );
        session.advance();
        session.set_status(Status::Learned).unwrap();
        // the filter is still All, so the second draw lands on "a" again
        session.set_status(Status::Repeat).unwrap();

        let listing = session.listing();
        assert_eq!(listing.learned, Vec::<String>::new());
        assert_eq!(listing.repeat, vec!["a".to_string()]);
        assert_eq!(listing.not_learned, vec!["b".to_string(), "c".to_string()]);
        assert_eq!(listing.column(Status::Repeat), &["a".to_string()]);
    }

    #[test]
    fn test_reload_resets_state() {
        let mut session = cat_and_dog(SessionMode::Drill, &[0]);
        session.advance();
        session.set_status(Status::Learned).unwrap();
        session.set_status(Status::Learned).unwrap();
        assert!(session.is_finished());

        let outcome = session.reload(table(&[("sun", "güneş")]));

        assert_eq!(outcome, Advance::Drawn(EntryId(0)));
        assert!(!session.is_finished());
        assert_eq!(session.filter(), FilterMode::Pending);
        assert_eq!(session.progress().counts.learned, 0);
        assert_eq!(session.card().unwrap().english, "sun");
    }
}

use std::{
    fmt,
    str::FromStr,
};

use serde::{
    Deserialize,
    Serialize,
};

/// Row position of an entry in the loaded table. Stable for the whole process.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntryId(pub usize);

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    #[default]
    NotLearned,
    Repeat,
    Learned,
}

impl Status {
    pub const ALL: [Status; 3] = [Status::Learned, Status::Repeat, Status::NotLearned];

    pub fn key(&self) -> &'static str {
        match self {
            Status::NotLearned => "not_learned",
            Status::Repeat => "repeat",
            Status::Learned => "learned",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Status {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "not_learned" => Ok(Status::NotLearned),
            "repeat" => Ok(Status::Repeat),
            "learned" => Ok(Status::Learned),
            other => Err(format!("unknown status '{other}'")),
        }
    }
}

/// Which entries are eligible for the next random draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FilterMode {
    #[default]
    All,
    #[serde(rename = "learned")]
    Learned,
    #[serde(rename = "repeat")]
    Repeat,
    #[serde(rename = "not_learned")]
    NotLearned,
    /// Everything that is not learned yet.
    #[serde(rename = "pending")]
    Pending,
}

impl FilterMode {
    /// The choices offered by the filter selector, in display order.
    pub const SELECTABLE: [FilterMode; 4] =
        [FilterMode::All, FilterMode::Learned, FilterMode::Repeat, FilterMode::NotLearned];

    pub fn key(&self) -> &'static str {
        match self {
            FilterMode::All => "All",
            FilterMode::Learned => "learned",
            FilterMode::Repeat => "repeat",
            FilterMode::NotLearned => "not_learned",
            FilterMode::Pending => "pending",
        }
    }

    pub fn matches(&self, status: Status) -> bool {
        match self {
            FilterMode::All => true,
            FilterMode::Learned => status == Status::Learned,
            FilterMode::Repeat => status == Status::Repeat,
            FilterMode::NotLearned => status == Status::NotLearned,
            FilterMode::Pending => status != Status::Learned,
        }
    }
}

impl From<Status> for FilterMode {
    fn from(status: Status) -> Self {
        match status {
            Status::NotLearned => FilterMode::NotLearned,
            Status::Repeat => FilterMode::Repeat,
            Status::Learned => FilterMode::Learned,
        }
    }
}

impl fmt::Display for FilterMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for FilterMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "All" => Ok(FilterMode::All),
            "pending" => Ok(FilterMode::Pending),
            other => other.parse::<Status>().map(FilterMode::from),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordEntry {
    pub english: String,
    pub turkish: String,
    pub example_sentence: String,
    pub(crate) status: Status,
}

impl WordEntry {
    pub fn new(
        english: impl Into<String>,
        turkish: impl Into<String>,
        example_sentence: impl Into<String>,
    ) -> Self {
        Self {
            english: english.into(),
            turkish: turkish.into(),
            example_sentence: example_sentence.into(),
            status: Status::NotLearned,
        }
    }

    pub fn status(&self) -> Status {
        self.status
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusCounts {
    pub learned: usize,
    pub repeat: usize,
    pub not_learned: usize,
    pub total: usize,
}

impl StatusCounts {
    pub fn pending(&self) -> usize {
        self.repeat + self.not_learned
    }
}

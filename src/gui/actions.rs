use std::path::PathBuf;

use crate::core::{
    FilterMode,
    Status,
};

// Clicks are collected while drawing and applied once the frame is laid out
#[derive(Debug, Clone, PartialEq)]
pub enum UiAction {
    // Session
    Reveal,
    SetStatus(Status),
    SetFilter(FilterMode),

    // Windows
    ToggleLists,
    OpenFile(PathBuf),
    Quit,
}

pub struct ActionQueue {
    actions: Vec<UiAction>,
}

impl ActionQueue {
    pub fn new() -> Self {
        Self { actions: Vec::new() }
    }

    pub fn push(&mut self, action: UiAction) {
        self.actions.push(action);
    }

    pub fn drain(&mut self) -> std::vec::Drain<'_, UiAction> {
        self.actions.drain(..)
    }
}

impl Default for ActionQueue {
    fn default() -> Self {
        Self::new()
    }
}

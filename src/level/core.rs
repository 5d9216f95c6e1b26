use std::collections::HashSet;

use log::{debug, warn};

use crate::counter::MAX_BASE;
use crate::level::errors::LevelError;
use crate::op::Op;

/// One puzzle: a start value, a goal, a move budget, and an ordered row of
/// buttons.
///
/// Validated on construction, so every button of an existing level is
/// known to resolve. Button order matters: digit `i` of a candidate
/// sequence selects `buttons()[i]`, which fixes the enumeration order of
/// the search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Level {
    index: u32,
    moves: u32,
    goal: i64,
    start: i64,
    buttons: Vec<String>,
}

impl Level {
    /// Most buttons a level may carry, one per counter digit.
    pub const MAX_BUTTONS: usize = MAX_BASE as usize;

    /// Build and validate a level definition.
    ///
    /// # Errors
    ///
    /// Rejects a zero `index` or `moves`, an empty button row, more than
    /// [`Level::MAX_BUTTONS`] buttons, a duplicated button, and any button
    /// token the operation grammar does not recognize.
    pub fn new<S: Into<String>>(
        index: u32,
        moves: u32,
        goal: i64,
        start: i64,
        buttons: impl IntoIterator<Item = S>,
    ) -> Result<Self, LevelError> {
        let buttons: Vec<String> = buttons.into_iter().map(Into::into).collect();
        debug!(
            "Validating level {}: {} buttons, {} moves, {} -> {}",
            index,
            buttons.len(),
            moves,
            start,
            goal
        );

        if index == 0 {
            warn!("Rejecting level with index 0");
            return Err(LevelError::InvalidIndex);
        }
        if moves == 0 {
            warn!("Rejecting level {} with an empty move budget", index);
            return Err(LevelError::InvalidMoves);
        }
        if buttons.is_empty() {
            warn!("Rejecting level {} without buttons", index);
            return Err(LevelError::NoButtons);
        }
        if buttons.len() > Self::MAX_BUTTONS {
            warn!("Rejecting level {} with {} buttons", index, buttons.len());
            return Err(LevelError::TooManyButtons(buttons.len()));
        }

        let mut seen = HashSet::new();
        for button in &buttons {
            if !seen.insert(button.as_str()) {
                warn!("Rejecting level {} with duplicate button {:?}", index, button);
                return Err(LevelError::DuplicateButton(button.clone()));
            }
            Op::resolve(button).map_err(|source| LevelError::UnresolvableButton {
                token: button.clone(),
                source,
            })?;
        }

        Ok(Self {
            index,
            moves,
            goal,
            start,
            buttons,
        })
    }

    pub fn index(&self) -> u32 {
        self.index
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn goal(&self) -> i64 {
        self.goal
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn buttons(&self) -> &[String] {
        &self.buttons
    }

    /// Button at a digit position, `None` past the end of the row.
    pub fn button_at(&self, position: usize) -> Option<&str> {
        self.buttons.get(position).map(String::as_str)
    }
}

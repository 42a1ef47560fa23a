use core::fmt;

/// How much of a clue the player has uncovered.
///
/// Ordered `Hidden < Question < Answer`; a clue only ever moves forward.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// State after one click.
    pub const fn advance(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => Question,
            Question => Answer,
            Answer => Answer,
        }
    }

    pub const fn css_class(self) -> &'static str {
        use RevealState::*;
        match self {
            Hidden => "initial",
            Question => "clue",
            Answer => "answer",
        }
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    showing: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            showing: RevealState::Hidden,
        }
    }

    pub fn showing(&self) -> RevealState {
        self.showing
    }

    /// Text matching the current state, `None` while hidden.
    pub fn visible_text(&self) -> Option<&str> {
        match self.showing {
            RevealState::Hidden => None,
            RevealState::Question => Some(&self.question),
            RevealState::Answer => Some(&self.answer),
        }
    }

    /// Moves one step forward and reports whether anything changed.
    pub(crate) fn advance(&mut self) -> bool {
        let next = self.showing.advance();
        let changed = next != self.showing;
        self.showing = next;
        changed
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

impl Category {
    pub fn new(title: impl Into<String>, clues: Vec<Clue>) -> Self {
        Self {
            title: title.into(),
            clues,
        }
    }

    /// Stand-in for a category the service could not deliver.
    pub fn placeholder() -> Self {
        Self::default()
    }

    pub fn is_placeholder(&self) -> bool {
        self.title.is_empty() && self.clues.is_empty()
    }
}

/// Address of one body cell: column is the category, row is the clue.
///
/// Renders as `"{category}-{clue}"`, the id carried by the table cell.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CellId {
    pub category: usize,
    pub clue: usize,
}

impl CellId {
    pub const fn new(category: usize, clue: usize) -> Self {
        Self { category, clue }
    }
}

impl fmt::Display for CellId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.category, self.clue)
    }
}

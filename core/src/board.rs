use crate::*;

/// What the presentation layer has to do after a click.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RenderInstruction {
    /// Replace the cell content with `text` and style it for `state`.
    Show {
        cell: CellId,
        state: RevealState,
        text: String,
    },
    Unchanged,
}

impl RenderInstruction {
    pub const fn has_update(&self) -> bool {
        matches!(self, Self::Show { .. })
    }
}

/// Categories in play, in column order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    pub fn new(categories: Vec<Category>) -> Self {
        Self { categories }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub(crate) fn push(&mut self, category: Category) {
        self.categories.push(category);
    }

    /// Longest clue column.
    pub fn row_count(&self) -> usize {
        self.categories
            .iter()
            .map(|category| category.clues.len())
            .max()
            .unwrap_or(0)
    }

    pub fn clue_at(&self, cell: CellId) -> Result<&Clue> {
        self.categories
            .get(cell.category)
            .and_then(|category| category.clues.get(cell.clue))
            .ok_or(BoardError::InvalidCell)
    }

    fn clue_at_mut(&mut self, cell: CellId) -> Result<&mut Clue> {
        self.categories
            .get_mut(cell.category)
            .and_then(|category| category.clues.get_mut(cell.clue))
            .ok_or(BoardError::InvalidCell)
    }

    /// Applies one click to `cell`.
    pub fn reveal(&mut self, cell: CellId) -> Result<RenderInstruction> {
        let clue = self.clue_at_mut(cell)?;
        if !clue.advance() {
            return Ok(RenderInstruction::Unchanged);
        }

        let state = clue.showing();
        let text = clue.visible_text().unwrap_or_default().to_string();
        log::debug!("cell {} now showing {:?}", cell, state);
        Ok(RenderInstruction::Show { cell, state, text })
    }
}

use crate::*;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GridCell {
    pub id: CellId,
    pub state: RevealState,
    /// `None` while the clue is concealed.
    pub text: Option<String>,
    /// Pads a short column; there is no clue behind it.
    pub filler: bool,
}

/// Table layout of a board: one header per category, one body row per clue index.
///
/// A non-empty board always gets at least [`NUM_CLUES_PER_CATEGORY`] rows.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Grid {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<GridCell>>,
}

impl Grid {
    pub fn from_board(board: &Board) -> Self {
        let headers = board
            .categories()
            .iter()
            .map(|category| category.title.clone())
            .collect();

        let row_count = if board.is_empty() {
            0
        } else {
            board.row_count().max(NUM_CLUES_PER_CATEGORY)
        };

        // rows are always as wide as the header, short columns get concealed filler
        let rows = (0..row_count)
            .map(|clue| {
                (0..board.len())
                    .map(|category| {
                        let id = CellId::new(category, clue);
                        match board.clue_at(id) {
                            Ok(clue) => GridCell {
                                id,
                                state: clue.showing(),
                                text: clue.visible_text().map(str::to_string),
                                filler: false,
                            },
                            Err(_) => GridCell {
                                id,
                                state: RevealState::Hidden,
                                text: None,
                                filler: true,
                            },
                        }
                    })
                    .collect()
            })
            .collect();

        Self { headers, rows }
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }

    pub fn cells(&self) -> impl Iterator<Item = &GridCell> {
        self.rows.iter().flatten()
    }
}

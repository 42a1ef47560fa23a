use crate::*;

/// A fetch that did not make it onto the board.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupFailure {
    CategoryList(FetchError),
    Category {
        column: usize,
        id: CategoryId,
        error: FetchError,
    },
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SetupReport {
    pub failures: Vec<SetupFailure>,
}

impl SetupReport {
    pub fn is_clean(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn failed_categories(&self) -> usize {
        self.failures
            .iter()
            .filter(|failure| matches!(failure, SetupFailure::Category { .. }))
            .count()
    }

    pub fn category_list_failed(&self) -> bool {
        self.failures
            .iter()
            .any(|failure| matches!(failure, SetupFailure::CategoryList(_)))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AssembledBoard {
    pub board: Board,
    pub report: SetupReport,
}

/// Fetches a fresh board one category at a time, keeping column order.
///
/// Failures degrade the board instead of aborting: a missing category list
/// leaves it empty, a missing category leaves a placeholder in its column.
pub async fn assemble_board<A: TriviaApi>(fetcher: &mut CategoryFetcher<A>) -> AssembledBoard {
    let mut board = Board::default();
    let mut report = SetupReport::default();

    let ids = match fetcher.fetch_category_ids().await {
        Ok(ids) => ids,
        Err(error) => {
            report.failures.push(SetupFailure::CategoryList(error));
            return AssembledBoard { board, report };
        }
    };

    for (column, id) in ids.into_iter().enumerate() {
        match fetcher.fetch_category(id).await {
            Ok(category) => board.push(category),
            Err(error) => {
                report
                    .failures
                    .push(SetupFailure::Category { column, id, error });
                board.push(Category::placeholder());
            }
        }
    }

    log::debug!(
        "assembled {} categories with {} failures",
        board.len(),
        report.failures.len()
    );
    AssembledBoard { board, report }
}

/// Proof that a setup sequence was started; handed back to finish it.
#[derive(Debug)]
#[must_use]
pub struct SetupTicket(());

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SetupOutcome {
    Started(SetupReport),
    AlreadyLoading,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ControllerState {
    Idle,
    Loading,
    Ready,
}

/// Owns the board and serializes game setups against clicks.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardController {
    board: Board,
    state: ControllerState,
    last_report: SetupReport,
}

impl BoardController {
    pub fn new() -> Self {
        Self {
            board: Board::default(),
            state: ControllerState::Idle,
            last_report: SetupReport::default(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn state(&self) -> ControllerState {
        self.state
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.state, ControllerState::Loading)
    }

    pub fn last_report(&self) -> &SetupReport {
        &self.last_report
    }

    pub fn trigger_label(&self) -> &'static str {
        use ControllerState::*;
        match self.state {
            Idle => "Start!",
            Loading => "Loading...",
            Ready => "Restart!",
        }
    }

    /// Enters the loading state, clearing the board.
    ///
    /// Returns `None` if a setup is already in flight.
    pub fn begin_setup(&mut self) -> Option<SetupTicket> {
        if self.is_loading() {
            log::debug!("setup already in flight, ignoring trigger");
            return None;
        }
        self.state = ControllerState::Loading;
        self.board = Board::default();
        self.last_report = SetupReport::default();
        Some(SetupTicket(()))
    }

    pub fn finish_setup(
        &mut self,
        _ticket: SetupTicket,
        assembled: AssembledBoard,
    ) -> &SetupReport {
        let AssembledBoard { board, report } = assembled;
        if !report.is_clean() {
            log::warn!("board set up with {} failed fetches", report.failures.len());
        }
        self.board = board;
        self.last_report = report;
        self.state = ControllerState::Ready;
        &self.last_report
    }

    pub async fn setup_and_start<A: TriviaApi>(
        &mut self,
        fetcher: &mut CategoryFetcher<A>,
    ) -> SetupOutcome {
        let Some(ticket) = self.begin_setup() else {
            return SetupOutcome::AlreadyLoading;
        };
        let assembled = assemble_board(fetcher).await;
        SetupOutcome::Started(self.finish_setup(ticket, assembled).clone())
    }

    pub fn handle_cell_click(&mut self, cell: CellId) -> Result<RenderInstruction> {
        if self.is_loading() {
            return Ok(RenderInstruction::Unchanged);
        }
        self.board.reveal(cell)
    }

    pub fn grid(&self) -> Grid {
        Grid::from_board(&self.board)
    }
}

impl Default for BoardController {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::*;
    use futures::executor::block_on;

    #[test]
    fn setup_fills_board_in_id_order() {
        let api = ScriptedApi::with_categories(6, 5);
        let mut fetcher = CategoryFetcher::with_seed(&api, 5);
        let mut controller = BoardController::new();

        let outcome = block_on(controller.setup_and_start(&mut fetcher));

        assert_eq!(outcome, SetupOutcome::Started(SetupReport::default()));
        assert_eq!(controller.state(), ControllerState::Ready);
        let fetched = api.category_calls.borrow().clone();
        let titles: Vec<_> = controller
            .board()
            .categories()
            .iter()
            .map(|c| c.title.clone())
            .collect();
        let expected: Vec<_> = fetched.iter().map(|id| format!("category {}", id)).collect();
        assert_eq!(titles, expected);
        for category in controller.board().categories() {
            assert_eq!(category.clues.len(), NUM_CLUES_PER_CATEGORY);
            assert!(
                category
                    .clues
                    .iter()
                    .all(|clue| clue.showing() == RevealState::Hidden)
            );
        }
    }

    #[test]
    fn failing_category_leaves_placeholder_column() {
        let api = ScriptedApi::with_categories(6, 5).fail_category(4, FetchError::Status(500));
        let mut fetcher = CategoryFetcher::with_seed(&api, 11);
        let mut controller = BoardController::new();

        let outcome = block_on(controller.setup_and_start(&mut fetcher));

        let column = api
            .category_calls
            .borrow()
            .iter()
            .position(|&id| id == 4)
            .unwrap();
        assert_eq!(
            outcome,
            SetupOutcome::Started(SetupReport {
                failures: vec![SetupFailure::Category {
                    column,
                    id: 4,
                    error: FetchError::Status(500),
                }],
            })
        );
        let board = controller.board();
        assert_eq!(board.len(), NUM_CATEGORIES);
        for (i, category) in board.categories().iter().enumerate() {
            if i == column {
                assert!(category.is_placeholder());
            } else {
                assert_eq!(category.clues.len(), NUM_CLUES_PER_CATEGORY);
                assert!(!category.title.is_empty());
            }
        }

        let grid = controller.grid();
        assert_eq!(grid.headers.len(), NUM_CATEGORIES);
        assert_eq!(grid.headers[column], "");
    }

    #[test]
    fn category_list_failure_leaves_empty_board() {
        let api = ScriptedApi::unavailable();
        let mut fetcher = CategoryFetcher::with_seed(&api, 0);
        let mut controller = BoardController::new();

        let SetupOutcome::Started(report) = block_on(controller.setup_and_start(&mut fetcher))
        else {
            panic!("setup should have started");
        };

        assert!(report.category_list_failed());
        assert!(controller.board().is_empty());
        assert!(api.category_calls.borrow().is_empty());
        assert_eq!(controller.trigger_label(), "Restart!");
    }

    #[test]
    fn trigger_while_loading_fetches_nothing() {
        let api = ScriptedApi::with_categories(6, 5);
        let mut fetcher = CategoryFetcher::with_seed(&api, 0);
        let mut controller = BoardController::new();

        let ticket = controller.begin_setup().unwrap();
        assert_eq!(controller.trigger_label(), "Loading...");
        assert!(controller.begin_setup().is_none());

        let outcome = block_on(controller.setup_and_start(&mut fetcher));

        assert_eq!(outcome, SetupOutcome::AlreadyLoading);
        assert_eq!(api.total_calls(), 0);

        let assembled = block_on(assemble_board(&mut fetcher));
        controller.finish_setup(ticket, assembled);
        assert!(!controller.is_loading());
        assert_eq!(api.category_list_calls.get(), 1);
    }

    #[test]
    fn restart_replaces_board_with_hidden_clues() {
        let api = ScriptedApi::with_categories(10, 8);
        let mut fetcher = CategoryFetcher::with_seed(&api, 2);
        let mut controller = BoardController::new();
        assert_eq!(controller.trigger_label(), "Start!");

        block_on(controller.setup_and_start(&mut fetcher));
        let cell = CellId::new(0, 0);
        controller.handle_cell_click(cell).unwrap();
        controller.handle_cell_click(cell).unwrap();
        assert_eq!(
            controller.board().clue_at(cell).unwrap().showing(),
            RevealState::Answer
        );

        block_on(controller.setup_and_start(&mut fetcher));

        assert_eq!(
            controller.board().clue_at(cell).unwrap().showing(),
            RevealState::Hidden
        );
        assert_eq!(api.category_list_calls.get(), 2);
    }

    #[test]
    fn clicks_are_ignored_while_loading() {
        let mut controller = BoardController::new();
        let _ticket = controller.begin_setup().unwrap();

        assert_eq!(
            controller.handle_cell_click(CellId::new(0, 0)),
            Ok(RenderInstruction::Unchanged)
        );
    }

    #[test]
    fn click_sequence_is_monotonic() {
        let api = ScriptedApi::with_categories(6, 5);
        let mut fetcher = CategoryFetcher::with_seed(&api, 8);
        let mut controller = BoardController::new();
        block_on(controller.setup_and_start(&mut fetcher));

        let cell = CellId::new(5, 4);
        let clue = controller.board().clue_at(cell).unwrap().clone();
        let mut previous = RevealState::Hidden;
        for n in 1..=6 {
            let instruction = controller.handle_cell_click(cell).unwrap();
            let current = controller.board().clue_at(cell).unwrap().showing();
            assert!(current >= previous);
            match n {
                1 => assert_eq!(
                    instruction,
                    RenderInstruction::Show {
                        cell,
                        state: RevealState::Question,
                        text: clue.question.clone(),
                    }
                ),
                2 => assert_eq!(
                    instruction,
                    RenderInstruction::Show {
                        cell,
                        state: RevealState::Answer,
                        text: clue.answer.clone(),
                    }
                ),
                _ => assert_eq!(instruction, RenderInstruction::Unchanged),
            }
            previous = current;
        }
    }
}

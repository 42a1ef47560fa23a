use crate::http::HttpTriviaApi;
use crate::utils::*;
use jeopardy_core as trivia;
use trivia::{AssembledBoard, BoardController, CellId, GridCell, RevealState, SetupReport};
use yew::prelude::*;

pub(crate) enum Msg {
    Start,
    Loaded(AssembledBoard),
    CellClicked(CellId),
}

#[derive(Properties, Clone, PartialEq)]
struct CellProps {
    cell: GridCell,
    callback: Callback<CellId>,
}

#[function_component(CellView)]
fn cell_component(props: &CellProps) -> Html {
    use RevealState::*;

    let CellProps { cell, callback } = props.clone();
    let id = cell.id;

    if cell.filler {
        return html! { <td id={id.to_string()} class="cell filler"/> };
    }

    let class = classes!(
        "cell",
        cell.state.css_class(),
        matches!(cell.state, Answer).then_some("green")
    );

    let onclick = Callback::from(move |_: MouseEvent| {
        log::trace!("{} clicked", id);
        callback.emit(id);
    });

    html! {
        <td id={id.to_string()} {class} {onclick}>
            {
                match cell.text {
                    None => html! { <i class="fas fa-question-circle fa-3x"/> },
                    Some(text) => html! { {text} },
                }
            }
        </td>
    }
}

/// Short message about fetches that did not make it onto the board.
pub(crate) fn failure_notice(report: &SetupReport, columns: usize) -> Option<String> {
    if report.category_list_failed() {
        return Some("Could not load categories, try again.".to_string());
    }
    match report.failed_categories() {
        0 => None,
        failed => Some(format!(
            "{} of {} categories could not be loaded.",
            failed, columns
        )),
    }
}

#[derive(Properties, Debug, Clone, PartialEq)]
pub(crate) struct GameProps {
    pub base_url: String,
    /// Fixed sampling seed, random per game when absent
    #[prop_or_default]
    pub seed: Option<u64>,
}

pub(crate) struct GameView {
    controller: BoardController,
    api: HttpTriviaApi,
    seed: Option<u64>,
    pending: Option<trivia::SetupTicket>,
}

impl GameView {
    fn start(&mut self, ctx: &Context<Self>) -> bool {
        let Some(ticket) = self.controller.begin_setup() else {
            return false;
        };
        self.pending = Some(ticket);

        let api = self.api.clone();
        let seed = self.seed.unwrap_or_else(js_random_seed);
        log::debug!("starting game with seed {}", seed);
        ctx.link().send_future(async move {
            let mut fetcher = trivia::CategoryFetcher::with_seed(api, seed);
            Msg::Loaded(trivia::assemble_board(&mut fetcher).await)
        });
        true
    }

    fn finish(&mut self, assembled: AssembledBoard) -> bool {
        let Some(ticket) = self.pending.take() else {
            log::warn!("board arrived without a pending setup");
            return false;
        };
        self.controller.finish_setup(ticket, assembled);
        log::info!("board ready with {} categories", self.controller.board().len());
        true
    }

    fn click(&mut self, cell: CellId) -> bool {
        match self.controller.handle_cell_click(cell) {
            Ok(instruction) => instruction.has_update(),
            Err(err) => {
                log::error!("click on {}: {}", cell, err);
                false
            }
        }
    }
}

impl Component for GameView {
    type Message = Msg;
    type Properties = GameProps;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        Self {
            controller: BoardController::new(),
            api: HttpTriviaApi::new(props.base_url.clone()),
            seed: props.seed,
            pending: None,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        use Msg::*;

        match msg {
            Start => self.start(ctx),
            Loaded(assembled) => self.finish(assembled),
            CellClicked(cell) => self.click(cell),
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let loading = self.controller.is_loading();
        let grid = self.controller.grid();
        let notice = failure_notice(self.controller.last_report(), grid.column_count());

        let cb_start = ctx.link().callback(|e: MouseEvent| {
            e.stop_propagation();
            Msg::Start
        });
        let cb_cell = ctx.link().callback(Msg::CellClicked);

        html! {
            <div class="jeopardy">
                <header>
                    <h1>{"Jeopardy!"}</h1>
                    <button
                        id="start"
                        class={classes!(loading.then_some("disabled"))}
                        disabled={loading}
                        onclick={cb_start}
                    >
                        {self.controller.trigger_label()}
                    </button>
                </header>
                if loading {
                    <div id="spin-container">
                        <i class="fa fa-spin fa-spinner"/>
                    </div>
                }
                if let Some(notice) = notice {
                    <p class="notice">{notice}</p>
                }
                <table id="jeopardy">
                    <thead id="header">
                        if !grid.headers.is_empty() {
                            <tr>
                                { for grid.headers.iter().map(|title| html! { <th>{title}</th> }) }
                            </tr>
                        }
                    </thead>
                    <tbody id="body">
                        {
                            for grid.rows.iter().map(|row| html! {
                                <tr>
                                    {
                                        for row.iter().map(|cell| html! {
                                            <CellView cell={cell.clone()} callback={cb_cell.clone()}/>
                                        })
                                    }
                                </tr>
                            })
                        }
                    </tbody>
                </table>
            </div>
        }
    }
}

//! Forecast TUI - current conditions and a multi-day forecast for a city

use std::cell::RefCell;
use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::Duration;

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use forecast::action::Action;
use forecast::api::{DEFAULT_BASE_URL, ForecastClient};
use forecast::components::{Component, ForecastDisplay, ForecastDisplayProps};
use forecast::effect::{Effect, fetch_forecast_action};
use forecast::logging;
use forecast::reducer::reducer;
use forecast::state::{AppState, DEFAULT_DAYS, LOADING_ANIM_TICK_MS};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};

/// Forecast TUI - look up current weather and a daily forecast by city
#[derive(Parser, Debug)]
#[command(name = "forecast")]
#[command(about = "Current conditions and a multi-day forecast from a forecast service")]
struct Args {
    /// City to pre-fill; when given, the forecast is fetched on start
    #[arg(long, short)]
    city: Option<String>,

    /// Forecast length to pre-fill (sent to the service as typed)
    #[arg(long, default_value = DEFAULT_DAYS)]
    days: String,

    /// Base URL of the forecast service
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    api_url: String,

    /// Append diagnostics to this file (filter with RUST_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum ForecastComponentId {
    Display,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum ForecastContext {
    Main,
}

impl EventRoutingState<ForecastComponentId, ForecastContext> for AppState {
    fn focused(&self) -> Option<ForecastComponentId> {
        Some(ForecastComponentId::Display)
    }

    fn modal(&self) -> Option<ForecastComponentId> {
        None
    }

    fn binding_context(&self, id: ForecastComponentId) -> ForecastContext {
        match id {
            ForecastComponentId::Display => ForecastContext::Main,
        }
    }

    fn default_context(&self) -> ForecastContext {
        ForecastContext::Main
    }
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let Args {
        city,
        days,
        api_url,
        log_file,
        debug: debug_args,
    } = Args::parse();

    logging::init(log_file.as_deref())?;

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let initial_action = city.is_some().then_some(Action::ForecastSubmit);
    let state = debug
        .load_state_or_else_async(move || async move {
            Ok::<AppState, io::Error>(AppState::new(city.unwrap_or_default(), days))
        })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);
    let client = ForecastClient::new(api_url);
    info!(base_url = client.base_url(), "forecast client ready");

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(
        &mut terminal,
        &debug,
        store,
        client,
        initial_action,
        replay_actions,
    )
    .await;

    // ===== Cleanup =====
    if use_alt_screen {
        disable_raw_mode()?;
        execute!(
            terminal.backend_mut(),
            LeaveAlternateScreen,
            DisableMouseCapture
        )?;
        terminal.show_cursor()?;
    }

    let run_output = result?;
    run_output.write_render_output()?;
    debug
        .save_actions(action_recorder.as_ref())
        .map_err(debug_error)?;

    Ok(())
}

struct ForecastUi {
    display: ForecastDisplay,
}

impl ForecastUi {
    fn new() -> Self {
        Self {
            display: ForecastDisplay::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<ForecastComponentId>,
    ) {
        event_ctx.set_component_area(ForecastComponentId::Display, area);

        let props = ForecastDisplayProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.display.render(frame, area, props);
    }

    fn handle_display_event(
        &mut self,
        event: &EventKind,
        state: &AppState,
    ) -> HandlerResponse<Action> {
        let props = ForecastDisplayProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .display
            .handle_event(event, props)
            .into_iter()
            .collect();
        if actions.is_empty() {
            HandlerResponse::ignored()
        } else {
            HandlerResponse {
                actions,
                consumed: true,
                needs_render: false,
            }
        }
    }
}

fn debug_error(error: DebugSessionError) -> io::Error {
    io::Error::other(format!("debug session error: {error}"))
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    debug: &DebugSession,
    store: impl EffectStoreLike<AppState, Action, Effect>,
    client: ForecastClient,
    initial_action: Option<Action>,
    replay_actions: Vec<ReplayItem<Action>>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(ForecastUi::new()));
    let mut bus: EventBus<AppState, Action, ForecastComponentId, ForecastContext> =
        EventBus::new();
    let keybindings: Keybindings<ForecastContext> = Keybindings::new();

    let ui_display = Rc::clone(&ui);
    bus.register(ForecastComponentId::Display, move |event, state| {
        ui_display
            .borrow_mut()
            .handle_display_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            initial_action,
            Some(Action::Quit),
            |runtime| {
                if debug.render_once() {
                    return;
                }

                runtime.subscriptions().interval(
                    "tick",
                    Duration::from_millis(LOADING_ANIM_TICK_MS),
                    || Action::Tick,
                );
            },
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(&client, effect, ctx),
        )
        .await
}

/// Handle effects by spawning tasks
fn handle_effect(client: &ForecastClient, effect: Effect, ctx: &mut EffectContext<Action>) {
    match effect {
        Effect::FetchForecast(query) => {
            info!(city = %query.city, days = %query.days, "fetching forecast");
            let client = client.clone();
            ctx.tasks().spawn("forecast", async move {
                fetch_forecast_action(&client, query).await
            });
        }
    }
}

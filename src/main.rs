//! Weather panel - look up current conditions for a city

use std::cell::RefCell;
use std::fs::File;
use std::io;
use std::path::Path;
use std::rc::Rc;
use std::sync::{Arc, Mutex};

use clap::Parser;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Frame, Terminal, backend::CrosstermBackend, layout::Rect};
use tracing::info;
use tracing_subscriber::EnvFilter;
use tui_dispatch::{
    EffectContext, EffectStoreLike, EffectStoreWithMiddleware, EventBus, EventContext, EventKind,
    EventRoutingState, HandlerResponse, Keybindings, RenderContext, TaskKey,
};
use tui_dispatch_debug::debug::DebugLayer;
use tui_dispatch_debug::{
    DebugCliArgs, DebugRunOutput, DebugSession, DebugSessionError, ReplayItem,
};
use weather_panel::action::Action;
use weather_panel::api::WeatherClient;
use weather_panel::components::{Component, WeatherPanel, WeatherPanelProps};
use weather_panel::config::{API_KEY_ENV, DEFAULT_BASE_URL, DEFAULT_CITY, PanelConfig};
use weather_panel::effect::Effect;
use weather_panel::reducer::reducer;
use weather_panel::state::AppState;

/// Current-weather lookup panel backed by OpenWeather
#[derive(Parser, Debug)]
#[command(name = "weather-panel")]
#[command(about = "Look up current weather conditions for a city")]
struct Args {
    /// OpenWeather API key (also read from .env)
    #[arg(long, env = API_KEY_ENV, default_value = "", hide_env_values = true)]
    api_key: String,

    /// City looked up on startup
    #[arg(long, short, default_value = DEFAULT_CITY)]
    city: String,

    /// Provider base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,

    /// Log file (the terminal is busy drawing the UI)
    #[arg(long, default_value = "weather-panel.log")]
    log_file: String,

    #[command(flatten)]
    debug: DebugCliArgs,
}

#[derive(tui_dispatch::ComponentId, Clone, Copy, PartialEq, Eq, Hash, Debug)]
enum WeatherComponentId {
    Panel,
}

#[derive(tui_dispatch::BindingContext, Clone, Copy, PartialEq, Eq, Hash)]
enum WeatherContext {
    Main,
    Alert,
}

impl EventRoutingState<WeatherComponentId, WeatherContext> for AppState {
    fn focused(&self) -> Option<WeatherComponentId> {
        Some(WeatherComponentId::Panel)
    }

    fn modal(&self) -> Option<WeatherComponentId> {
        None
    }

    fn binding_context(&self, _id: WeatherComponentId) -> WeatherContext {
        if self.has_alert() {
            WeatherContext::Alert
        } else {
            WeatherContext::Main
        }
    }

    fn default_context(&self) -> WeatherContext {
        WeatherContext::Main
    }
}

fn init_logging(path: &str) -> io::Result<()> {
    let file = File::create(Path::new(path))?;
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .try_init()
        .map_err(|e| io::Error::other(format!("logging setup failed: {e}")))
}

#[tokio::main]
async fn main() -> io::Result<()> {
    // A missing .env is fine; the key may come from the real environment.
    let _ = dotenvy::dotenv();

    let Args {
        api_key,
        city,
        base_url,
        log_file,
        debug: debug_args,
    } = Args::parse();

    init_logging(&log_file)?;

    let config = PanelConfig::new(api_key)
        .with_base_url(base_url)
        .with_default_city(city);
    info!(?config, "starting weather panel");

    let debug = DebugSession::new(debug_args);

    // Export JSON schemas if requested
    debug.save_state_schema::<AppState>().map_err(debug_error)?;
    debug.save_actions_schema::<Action>().map_err(debug_error)?;

    let state = debug
        .load_state_or_else_async(|| async { Ok::<AppState, io::Error>(AppState::new()) })
        .await
        .map_err(debug_error)?;

    let replay_actions = debug.load_replay_items().map_err(debug_error)?;

    let (middleware, action_recorder) = debug.middleware_with_recorder();
    let store = EffectStoreWithMiddleware::new(state, reducer, middleware);

    // ===== Terminal setup =====
    let use_alt_screen = debug.use_alt_screen();
    let mut stdout = io::stdout();
    if use_alt_screen {
        enable_raw_mode()?;
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    }
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let client = Arc::new(WeatherClient::new(config));
    let result = run_app(&mut terminal, &debug, store, replay_actions, client).await;

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

struct WeatherUi {
    panel: WeatherPanel,
}

impl WeatherUi {
    fn new() -> Self {
        Self {
            panel: WeatherPanel::new(),
        }
    }

    fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        state: &AppState,
        render_ctx: RenderContext,
        event_ctx: &mut EventContext<WeatherComponentId>,
    ) {
        event_ctx.set_component_area(WeatherComponentId::Panel, area);

        let props = WeatherPanelProps {
            state,
            is_focused: render_ctx.is_focused(),
        };
        self.panel.render(frame, area, props);
    }

    fn handle_event(&mut self, event: &EventKind, state: &AppState) -> HandlerResponse<Action> {
        let props = WeatherPanelProps {
            state,
            is_focused: true,
        };
        let actions: Vec<_> = self
            .panel
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
    replay_actions: Vec<ReplayItem<Action>>,
    client: Arc<WeatherClient>,
) -> io::Result<DebugRunOutput<AppState>> {
    let ui = Rc::new(RefCell::new(WeatherUi::new()));
    let mut bus: EventBus<AppState, Action, WeatherComponentId, WeatherContext> = EventBus::new();
    let keybindings: Keybindings<WeatherContext> = Keybindings::new();

    let ui_panel = Rc::clone(&ui);
    bus.register(WeatherComponentId::Panel, move |event, state| {
        ui_panel.borrow_mut().handle_event(&event.kind, state)
    });

    // Re-render on terminal resize (no action needed, just redraw)
    bus.register_global(|event, _state| match event.kind {
        EventKind::Resize(_, _) => HandlerResponse::ignored().with_render(),
        _ => HandlerResponse::ignored(),
    });

    let initial_city = client.config().default_city.clone();

    debug
        .run_effect_app_with_bus(
            terminal,
            store,
            DebugLayer::simple(),
            replay_actions,
            Some(Action::SearchSubmit(initial_city)),
            Some(Action::Quit),
            |_runtime| {},
            &mut bus,
            &keybindings,
            |frame, area, state, render_ctx, event_ctx| {
                ui.borrow_mut()
                    .render(frame, area, state, render_ctx, event_ctx);
            },
            |action| matches!(action, Action::Quit),
            move |effect, ctx| handle_effect(effect, ctx, Arc::clone(&client)),
        )
        .await
}

/// Handle effects by spawning tasks.
///
/// Every search gets its own task key (see [`Effect::task_name`]), so a newer
/// search never cancels an older one; whichever resolves last is shown.
fn handle_effect(effect: Effect, ctx: &mut EffectContext<Action>, client: Arc<WeatherClient>) {
    let key = TaskKey::new(effect.task_name());
    match effect {
        Effect::FetchWeather { request_id, city } => {
            info!(request_id, %city, "searching");
            ctx.tasks().spawn(key, async move {
                match client.current_weather(&city).await {
                    Ok(weather) => Action::SearchDidLoad { request_id, weather },
                    Err(error) => Action::SearchDidError { request_id, error },
                }
            });
        }
    }
}

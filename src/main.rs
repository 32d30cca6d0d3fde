use anyhow::{Context, Result};
use clap::Parser;
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, layout::Rect, Terminal};
use std::{collections::VecDeque, io, time::Duration};
use tokio::sync::mpsc;

use camptui::{
    api::{CampsiteClient, NewComment},
    cache::CacheDb,
    config::Config,
    handlers::GestureTracker,
    logic::gesture::GestureThresholds,
    messages::{Command, Msg},
    model::{Model, Settings},
    services::{self, clipboard, ApiRequest, SysfsProbe},
    ui, update, utils,
};

/// Campsite directory TUI
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Enable debug logging to {temp_dir}/camptui-debug.log
    #[arg(short, long)]
    debug: bool,

    /// Enable vim keybindings (hjkl)
    #[arg(long)]
    vim: bool,

    /// Path to config file (default: platform-specific, see docs)
    #[arg(short, long)]
    config: Option<String>,

    /// Backend base URL (overrides the config file)
    #[arg(long)]
    base_url: Option<String>,
}

/// Runtime: owns the model, service channels and the favorites store
struct App {
    model: Model,
    api_tx: mpsc::UnboundedSender<ApiRequest>,
    api_rx: mpsc::UnboundedReceiver<Msg>,
    connectivity_rx: mpsc::UnboundedReceiver<Msg>,
    cache: CacheDb,
    clipboard_command: Option<String>,
    gesture_tracker: GestureTracker,
    /// Campsite card area from the last frame
    card_area: Option<Rect>,
}

impl App {
    fn new(config: Config, cache: CacheDb) -> Self {
        let settings = Settings {
            base_url: config.base_url.clone(),
            gesture: GestureThresholds {
                favorite: config.gesture.favorite_threshold,
                comment: config.gesture.comment_threshold,
            },
            vim_mode: config.vim_mode,
            clipboard_available: config.clipboard_command.is_some(),
        };

        let client = CampsiteClient::new(config.base_url.clone());
        let (api_tx, api_rx) = services::spawn_api_service(client);
        let connectivity_rx = services::spawn_connectivity_monitor(
            SysfsProbe::default(),
            Duration::from_secs(config.connectivity_poll_secs.max(1)),
        );

        Self {
            model: Model::new(settings),
            api_tx,
            api_rx,
            connectivity_rx,
            cache,
            clipboard_command: config.clipboard_command,
            gesture_tracker: GestureTracker::new(config.gesture.cell_width_dp),
            card_area: None,
        }
    }

    /// Load stored favorites and request the backend collections
    fn start(&mut self) {
        let favorites = match self.cache.get_favorites() {
            Ok(ids) => ids,
            Err(e) => {
                log::warn!("Failed to load favorites: {:#}", e);
                Vec::new()
            }
        };
        self.dispatch(Msg::FavoritesLoaded(favorites));

        let commands = update::init(&mut self.model);
        self.run_commands(commands);
    }

    /// Run a message through the reducer, then every command and follow-up
    /// message it produces
    fn dispatch(&mut self, msg: Msg) {
        let mut queue = VecDeque::from([msg]);
        while let Some(msg) = queue.pop_front() {
            let commands = update::update(&mut self.model, msg);
            for command in commands {
                if let Some(follow_up) = self.execute(command) {
                    queue.push_back(follow_up);
                }
            }
        }
    }

    fn run_commands(&mut self, commands: Vec<Command>) {
        for command in commands {
            if let Some(msg) = self.execute(command) {
                self.dispatch(msg);
            }
        }
    }

    /// Execute a command; synchronous effects answer with a message
    fn execute(&mut self, command: Command) -> Option<Msg> {
        log::debug!("Executing {:?}", command);
        match command {
            Command::Fetch(resource) => {
                self.send_api(ApiRequest::Fetch(resource));
                None
            }
            Command::PostComment {
                campsite_id,
                rating,
                author,
                text,
            } => {
                let comment = NewComment::now(campsite_id, rating, author, text);
                self.send_api(ApiRequest::PostComment(comment));
                None
            }
            Command::PostFavorite(campsite_id) => Some(Msg::FavoriteAdded(
                self.cache
                    .add_favorite(campsite_id)
                    .map(|_| campsite_id)
                    .map_err(|e| format!("{:#}", e)),
            )),
            Command::DeleteFavorite(campsite_id) => Some(Msg::FavoriteRemoved(
                self.cache
                    .remove_favorite(campsite_id)
                    .map(|_| campsite_id)
                    .map_err(|e| format!("{:#}", e)),
            )),
            Command::CopyToClipboard { title, text } => {
                let result = match &self.clipboard_command {
                    Some(cmd) => clipboard::copy_to_clipboard(cmd, &text)
                        .map(|_| title)
                        .map_err(|e| format!("{:#}", e)),
                    None => Err("no clipboard_command configured".to_string()),
                };
                Some(Msg::ShareCopied(result))
            }
        }
    }

    fn send_api(&self, request: ApiRequest) {
        if let Err(e) = self.api_tx.send(request) {
            log::warn!("API service unavailable: {}", e);
        }
    }

    /// Drain service channels without blocking
    fn drain_services(&mut self) {
        while let Ok(msg) = self.api_rx.try_recv() {
            self.dispatch(msg);
        }
        while let Ok(msg) = self.connectivity_rx.try_recv() {
            self.dispatch(msg);
        }
    }

    fn handle_event(&mut self, event: Event) {
        match event {
            Event::Key(key) => self.dispatch(Msg::KeyPress(key)),
            Event::Mouse(mouse) => {
                if let Some(sample) = self.gesture_tracker.handle(mouse, self.card_area) {
                    self.dispatch(Msg::Gesture(sample));
                }
            }
            _ => {}
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    utils::init_logging(args.debug)?;

    let mut config = Config::load(args.config)?;

    // Override config with CLI flags
    if args.vim {
        config.vim_mode = true;
    }
    if let Some(base_url) = args.base_url {
        config.base_url = base_url;
    }
    log::info!("Backend: {}", config.base_url);

    let cache = CacheDb::new().context("Failed to open favorites store")?;
    let mut app = App::new(config, cache);
    app.start();

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_app(&mut terminal, &mut app).await;

    // Cleanup terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;

    result
}

async fn run_app<B: ratatui::backend::Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<()> {
    loop {
        terminal.draw(|f| {
            app.card_area = ui::render(f, &app.model);
        })?;

        if app.model.ui.should_quit {
            break;
        }

        app.drain_services();
        app.dispatch(Msg::Tick);

        if event::poll(Duration::from_millis(100))? {
            let event = event::read()?;
            app.handle_event(event);
        }

        // Let background tasks make progress between frames
        tokio::task::yield_now().await;
    }

    Ok(())
}

mod app;
mod config;
mod geo;
mod logging;
mod navigation;
mod ui;

use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::handler;
use crate::app::state::AppState;
use crate::geo::manager::GeoManager;
use crate::geo::GeoClient;
use crate::navigation::{HandoffNavigator, Navigator};
use anyhow::{Context, Result};
use crossterm::{
    event::EventStream,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use futures::StreamExt;
use ratatui::prelude::*;
use std::io;
use tokio::sync::mpsc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    // Install panic hook to restore terminal
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = restore_terminal();
        original_hook(info);
    }));

    // Load config
    let cfg = config::load_config()?;
    if let Some(path) = logging::init(&cfg.logging)? {
        info!(log = %path.display(), "ecoleta starting");
    }
    let client = GeoClient::new(&cfg.api).context("Invalid [api] configuration")?;

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Run app
    let mut navigator = HandoffNavigator::new();
    let result = run_app(&mut terminal, cfg, client, &mut navigator).await;

    // Restore terminal
    restore_terminal()?;

    if let Err(e) = result {
        error!(error = %e, "exiting with error");
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }

    // Deliver the hand-off to whatever reads our stdout
    if let Some(handoff) = navigator.take() {
        println!("{}", handoff.to_json()?);
    }

    Ok(())
}

fn restore_terminal() -> Result<()> {
    disable_raw_mode()?;
    execute!(io::stdout(), LeaveAlternateScreen)?;
    Ok(())
}

async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    cfg: config::AppConfig,
    client: GeoClient,
    navigator: &mut dyn Navigator,
) -> Result<()> {
    let (event_tx, mut event_rx) = mpsc::unbounded_channel::<AppEvent>();

    let mut state = AppState::new(cfg);
    let mut geo = GeoManager::new(client, event_tx.clone());

    // Spawn terminal input task
    let term_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut reader = EventStream::new();
        loop {
            match reader.next().await {
                Some(Ok(event)) => {
                    if term_tx.send(AppEvent::Terminal(event)).is_err() {
                        break;
                    }
                }
                Some(Err(_)) => break,
                None => break,
            }
        }
    });

    // Spawn tick task (10 FPS = 100ms)
    let tick_tx = event_tx.clone();
    tokio::spawn(async move {
        let mut interval = tokio::time::interval(std::time::Duration::from_millis(100));
        loop {
            interval.tick().await;
            if tick_tx.send(AppEvent::Tick).is_err() {
                break;
            }
        }
    });

    // Initial fetches
    for action in state.mount() {
        dispatch(action, &mut state, &mut geo, navigator);
    }

    // Initial render
    terminal.draw(|f| ui::render(f, &state))?;

    // Main event loop
    loop {
        let event = event_rx.recv().await;
        let Some(event) = event else { break };

        let actions = handler::handle_event(&mut state, event);
        for action in actions {
            dispatch(action, &mut state, &mut geo, navigator);
        }

        if state.should_quit {
            break;
        }

        // Conditional render (only if dirty)
        if state.dirty {
            terminal.draw(|f| ui::render(f, &state))?;
            state.dirty = false;
        }
    }

    // Leaving the screen: nothing in flight may land afterwards
    geo.shutdown();
    Ok(())
}

fn dispatch(
    action: Action,
    state: &mut AppState,
    geo: &mut GeoManager,
    navigator: &mut dyn Navigator,
) {
    match action {
        Action::FetchStates { request_id } => geo.fetch_states(request_id),
        Action::FetchCities {
            request_id,
            state_code,
        } => geo.fetch_cities(request_id, state_code),
        Action::CancelCities => geo.cancel_cities(),
        Action::Navigate { route, params } => match navigator.navigate(route, params) {
            Ok(()) => state.should_quit = true,
            Err(e) => {
                error!(error = %e, "navigation failed");
                state.status_message = Some(format!("Navigation failed: {}", e));
                state.dirty = true;
            }
        },
        Action::Quit => state.should_quit = true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::navigation::{NavigationParams, Route};

    struct RejectingNavigator;

    impl Navigator for RejectingNavigator {
        fn navigate(&mut self, _route: Route, _params: NavigationParams) -> Result<()> {
            anyhow::bail!("no Points screen registered")
        }
    }

    fn setup() -> (AppState, GeoManager) {
        let cfg = config::AppConfig::default();
        let client = GeoClient::new(&cfg.api).unwrap();
        let (tx, _rx) = mpsc::unbounded_channel();
        (AppState::new(cfg), GeoManager::new(client, tx))
    }

    fn navigate_action() -> Action {
        Action::Navigate {
            route: Route::Points,
            params: NavigationParams {
                uf: "SP".to_string(),
                city: "Campinas".to_string(),
            },
        }
    }

    #[test]
    fn test_navigate_hands_off_and_quits() {
        let (mut state, mut geo) = setup();
        let mut navigator = HandoffNavigator::new();
        dispatch(navigate_action(), &mut state, &mut geo, &mut navigator);

        assert!(state.should_quit);
        assert!(state.status_message.is_none());
        let handoff = navigator.take().unwrap();
        assert_eq!(handoff.params.uf, "SP");
        assert_eq!(handoff.params.city, "Campinas");
    }

    #[test]
    fn test_navigation_error_stays_on_screen() {
        let (mut state, mut geo) = setup();
        state.dirty = false;
        dispatch(navigate_action(), &mut state, &mut geo, &mut RejectingNavigator);

        assert!(!state.should_quit);
        assert!(state.dirty);
        assert_eq!(
            state.status_message.as_deref(),
            Some("Navigation failed: no Points screen registered")
        );
    }

    #[test]
    fn test_quit_action() {
        let (mut state, mut geo) = setup();
        dispatch(Action::Quit, &mut state, &mut geo, &mut RejectingNavigator);
        assert!(state.should_quit);
    }
}

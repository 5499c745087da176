use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::*;
use crossterm::event::{Event as CEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

const PAGE: isize = 10;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::StatesLoaded {
            request_id,
            records,
        } => {
            state.apply_states(request_id, records);
            vec![]
        }
        AppEvent::StatesFailed { request_id, error } => {
            state.fail_states(request_id, error);
            vec![]
        }
        AppEvent::CitiesLoaded {
            request_id,
            state_code,
            records,
        } => {
            state.apply_cities(request_id, &state_code, records);
            vec![]
        }
        AppEvent::CitiesFailed {
            request_id,
            state_code,
            error,
        } => {
            state.fail_cities(request_id, &state_code, error);
            vec![]
        }
        AppEvent::Tick => handle_tick(state),
    }
}

fn handle_tick(state: &mut AppState) -> Vec<Action> {
    state.tick_count = state.tick_count.wrapping_add(1);
    // Spinner animation
    if state.is_loading() {
        state.dirty = true;
    }
    vec![]
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) if key.kind == KeyEventKind::Press => {
            state.dirty = true;
            handle_key(state, key)
        }
        CEvent::Resize(_, _) => {
            state.dirty = true;
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    // An open dropdown captures all input
    if state.popup.is_some() {
        return handle_popup_key(state, key);
    }

    state.status_message = None;

    match key.code {
        KeyCode::Tab | KeyCode::Down => {
            state.set_focus(state.focus.next());
            vec![]
        }
        KeyCode::BackTab | KeyCode::Up => {
            state.set_focus(state.focus.prev());
            vec![]
        }
        KeyCode::Enter | KeyCode::Char(' ') => match state.focus {
            FocusField::Submit => vec![state.submit()],
            _ => {
                state.open_popup();
                vec![]
            }
        },
        KeyCode::Char('r') => state.retry_failed(),
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],
        _ => vec![],
    }
}

fn handle_popup_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    match key.code {
        KeyCode::Esc => state.close_popup(),
        KeyCode::Up => state.popup_move(-1),
        KeyCode::Down => state.popup_move(1),
        KeyCode::PageUp => state.popup_move(-PAGE),
        KeyCode::PageDown => state.popup_move(PAGE),
        KeyCode::Home => state.popup_home(),
        KeyCode::End => state.popup_end(),
        KeyCode::Enter => return state.confirm_popup(),
        KeyCode::Char(c) if !c.is_control() && !c.is_whitespace() => state.popup_jump(c),
        _ => {}
    }
    vec![]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::AppConfig;
    use crate::geo::{CityRecord, StateRecord};
    use crate::navigation::{NavigationParams, Route};
    use crossterm::event::KeyEventState;

    fn key(code: KeyCode) -> AppEvent {
        AppEvent::Terminal(CEvent::Key(KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }))
    }

    fn states_loaded(request_id: u64, codes: &[&str]) -> AppEvent {
        AppEvent::StatesLoaded {
            request_id,
            records: codes
                .iter()
                .map(|c| StateRecord {
                    short_code: Some(c.to_string()),
                })
                .collect(),
        }
    }

    fn cities_loaded(request_id: u64, state_code: &str, names: &[&str]) -> AppEvent {
        AppEvent::CitiesLoaded {
            request_id,
            state_code: state_code.to_string(),
            records: names
                .iter()
                .map(|n| CityRecord {
                    name: Some(n.to_string()),
                })
                .collect(),
        }
    }

    fn mounted() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.mount();
        handle_event(&mut state, states_loaded(1, &["RJ", "SP"]));
        state
    }

    #[test]
    fn test_pick_state_city_and_submit() {
        let mut state = mounted();

        // Open the state dropdown and pick SP
        assert!(handle_event(&mut state, key(KeyCode::Enter)).is_empty());
        handle_event(&mut state, key(KeyCode::Char('s')));
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![Action::FetchCities {
                request_id: 2,
                state_code: "SP".into()
            }]
        );

        handle_event(&mut state, cities_loaded(2, "SP", &["Campinas", "Santos"]));
        assert_eq!(state.cities.options.len(), 2);

        // City dropdown, pick Santos
        handle_event(&mut state, key(KeyCode::Tab));
        handle_event(&mut state, key(KeyCode::Enter));
        handle_event(&mut state, key(KeyCode::End));
        assert!(handle_event(&mut state, key(KeyCode::Enter)).is_empty());
        assert_eq!(state.selection.city_name, "Santos");

        // Submit
        handle_event(&mut state, key(KeyCode::Tab));
        assert_eq!(state.focus, FocusField::Submit);
        let actions = handle_event(&mut state, key(KeyCode::Enter));
        assert_eq!(
            actions,
            vec![Action::Navigate {
                route: Route::Points,
                params: NavigationParams {
                    uf: "SP".into(),
                    city: "Santos".into()
                }
            }]
        );
    }

    #[test]
    fn test_submit_with_nothing_selected() {
        let mut state = AppState::new(AppConfig::default());
        handle_event(&mut state, key(KeyCode::BackTab));
        assert_eq!(state.focus, FocusField::Submit);
        let actions = handle_event(&mut state, key(KeyCode::Char(' ')));
        assert_eq!(
            actions,
            vec![Action::Navigate {
                route: Route::Points,
                params: NavigationParams {
                    uf: String::new(),
                    city: String::new()
                }
            }]
        );
    }

    #[test]
    fn test_stale_city_result_is_ignored() {
        let mut state = mounted();
        state.select_state("SP");
        state.select_state("RJ");

        handle_event(&mut state, cities_loaded(2, "SP", &["Campinas"]));
        assert!(state.cities.options.is_empty());
        handle_event(&mut state, cities_loaded(3, "RJ", &["Niterói"]));
        assert_eq!(state.cities.options, vec![SelectOption::new("Niterói")]);
    }

    #[test]
    fn test_failure_then_retry_key() {
        let mut state = AppState::new(AppConfig::default());
        state.mount();
        handle_event(
            &mut state,
            AppEvent::StatesFailed {
                request_id: 1,
                error: "could not connect".into(),
            },
        );
        assert_eq!(
            state.states.status,
            LoadStatus::Failed("could not connect".into())
        );

        let actions = handle_event(&mut state, key(KeyCode::Char('r')));
        assert_eq!(actions, vec![Action::FetchStates { request_id: 2 }]);
    }

    #[test]
    fn test_popup_captures_quit_keys() {
        let mut state = mounted();
        handle_event(&mut state, key(KeyCode::Enter));
        assert!(state.popup.is_some());

        // 'q' jumps inside the list, Esc only closes the popup
        assert!(handle_event(&mut state, key(KeyCode::Char('q'))).is_empty());
        assert!(handle_event(&mut state, key(KeyCode::Esc)).is_empty());
        assert!(state.popup.is_none());

        assert_eq!(handle_event(&mut state, key(KeyCode::Esc)), vec![Action::Quit]);
    }

    #[test]
    fn test_ctrl_c_quits_from_popup() {
        let mut state = mounted();
        handle_event(&mut state, key(KeyCode::Enter));
        let ctrl_c = AppEvent::Terminal(CEvent::Key(KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::empty(),
        }));
        assert_eq!(handle_event(&mut state, ctrl_c), vec![Action::Quit]);
    }

    #[test]
    fn test_key_release_is_ignored() {
        let mut state = mounted();
        let release = AppEvent::Terminal(CEvent::Key(KeyEvent {
            code: KeyCode::Enter,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Release,
            state: KeyEventState::empty(),
        }));
        handle_event(&mut state, release);
        assert!(state.popup.is_none());
    }

    #[test]
    fn test_tick_marks_dirty_only_while_loading() {
        let mut state = mounted();
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(!state.dirty);
        assert_eq!(state.tick_count, 1);

        state.select_state("SP");
        state.dirty = false;
        handle_event(&mut state, AppEvent::Tick);
        assert!(state.dirty);
    }
}

use crate::app::action::Action;
use crate::app::event::RequestId;
use crate::config::AppConfig;
use crate::geo::{CityRecord, StateRecord};
use crate::navigation::{NavigationParams, Route};
use tracing::debug;

const SPINNER: [&str; 4] = ["|", "/", "-", "\\"];

/// One dropdown entry. `value` is `None` only for the placeholder row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    pub label: String,
    pub value: Option<String>,
}

impl SelectOption {
    /// An option whose label and value are the same text.
    pub fn new(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value: Some(value),
        }
    }

    pub fn placeholder(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: None,
        }
    }

    pub fn is_placeholder(&self) -> bool {
        self.value.is_none()
    }
}

/// Map state records to options keyed by short code, skipping records
/// without one.
pub fn state_options(records: &[StateRecord]) -> Vec<SelectOption> {
    records
        .iter()
        .filter_map(|r| r.short_code.as_deref())
        .map(str::trim)
        .filter(|code| !code.is_empty())
        .map(SelectOption::new)
        .collect()
}

/// Map city records to options keyed by name, skipping records without one.
pub fn city_options(records: &[CityRecord]) -> Vec<SelectOption> {
    records
        .iter()
        .filter_map(|r| r.name.as_deref())
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(SelectOption::new)
        .collect()
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum LoadStatus {
    #[default]
    Idle,
    Loading,
    Loaded,
    Failed(String),
}

/// Options of one dropdown together with the state of the request that
/// fills them.
#[derive(Debug, Default)]
pub struct OptionList {
    pub options: Vec<SelectOption>,
    pub status: LoadStatus,
    /// Id of the request whose result is still expected.
    pub pending: Option<RequestId>,
}

impl OptionList {
    fn start(&mut self, request_id: RequestId) {
        self.options.clear();
        self.status = LoadStatus::Loading;
        self.pending = Some(request_id);
    }

    /// Apply a result. Returns `false` when `request_id` is not the pending
    /// request, in which case nothing changes.
    fn finish(&mut self, request_id: RequestId, options: Vec<SelectOption>) -> bool {
        if self.pending != Some(request_id) {
            return false;
        }
        self.options = options;
        self.status = LoadStatus::Loaded;
        self.pending = None;
        true
    }

    fn fail(&mut self, request_id: RequestId, error: String) -> bool {
        if self.pending != Some(request_id) {
            return false;
        }
        self.options.clear();
        self.status = LoadStatus::Failed(error);
        self.pending = None;
        true
    }

    fn reset(&mut self) {
        self.options.clear();
        self.status = LoadStatus::Idle;
        self.pending = None;
    }

    pub fn position(&self, value: &str) -> Option<usize> {
        self.options
            .iter()
            .position(|o| o.value.as_deref() == Some(value))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.status, LoadStatus::Failed(_))
    }
}

/// The chosen state and city. Empty strings mean "nothing selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LocationSelection {
    pub state_code: String,
    pub city_name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusField {
    State,
    City,
    Submit,
}

impl FocusField {
    pub fn next(self) -> Self {
        match self {
            FocusField::State => FocusField::City,
            FocusField::City => FocusField::Submit,
            FocusField::Submit => FocusField::State,
        }
    }

    pub fn prev(self) -> Self {
        match self {
            FocusField::State => FocusField::Submit,
            FocusField::City => FocusField::State,
            FocusField::Submit => FocusField::City,
        }
    }
}

/// An open dropdown list. Row 0 is the placeholder, row `n` is option `n - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DropdownPopup {
    pub field: FocusField,
    pub highlighted: usize,
}

pub struct AppState {
    pub config: AppConfig,
    pub selection: LocationSelection,
    pub states: OptionList,
    pub cities: OptionList,
    pub focus: FocusField,
    pub popup: Option<DropdownPopup>,
    pub next_request_id: RequestId,
    pub tick_count: u64,
    pub should_quit: bool,
    pub dirty: bool,
    pub status_message: Option<String>,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        Self {
            config,
            selection: LocationSelection::default(),
            states: OptionList::default(),
            cities: OptionList::default(),
            focus: FocusField::State,
            popup: None,
            next_request_id: 0,
            tick_count: 0,
            should_quit: false,
            dirty: true,
            status_message: None,
        }
    }

    fn allocate_request_id(&mut self) -> RequestId {
        self.next_request_id += 1;
        self.next_request_id
    }

    /// Actions to run once when the screen comes up.
    pub fn mount(&mut self) -> Vec<Action> {
        vec![self.load_states()]
    }

    pub fn load_states(&mut self) -> Action {
        let request_id = self.allocate_request_id();
        self.states.start(request_id);
        self.dirty = true;
        Action::FetchStates { request_id }
    }

    pub fn apply_states(&mut self, request_id: RequestId, records: Vec<StateRecord>) {
        let options = state_options(&records);
        if options.len() != records.len() {
            debug!(
                skipped = records.len() - options.len(),
                "state records without short code"
            );
        }
        if self.states.finish(request_id, options) {
            self.dirty = true;
        } else {
            debug!(request_id, "discarding stale state list");
        }
    }

    pub fn fail_states(&mut self, request_id: RequestId, error: String) {
        if self.states.fail(request_id, error) {
            self.dirty = true;
        }
    }

    /// Issue the city request for the selected state. Does nothing while no
    /// state is selected.
    pub fn load_cities(&mut self) -> Option<Action> {
        if self.selection.state_code.is_empty() {
            return None;
        }
        let request_id = self.allocate_request_id();
        self.cities.start(request_id);
        self.dirty = true;
        Some(Action::FetchCities {
            request_id,
            state_code: self.selection.state_code.clone(),
        })
    }

    pub fn apply_cities(
        &mut self,
        request_id: RequestId,
        state_code: &str,
        records: Vec<CityRecord>,
    ) {
        if state_code != self.selection.state_code {
            debug!(request_id, state_code, "discarding cities of deselected state");
            return;
        }
        if self.cities.finish(request_id, city_options(&records)) {
            self.dirty = true;
        } else {
            debug!(request_id, state_code, "discarding stale city list");
        }
    }

    pub fn fail_cities(&mut self, request_id: RequestId, state_code: &str, error: String) {
        if state_code == self.selection.state_code && self.cities.fail(request_id, error) {
            self.dirty = true;
        }
    }

    /// Change the selected state. The city list is cleared at once and, for a
    /// non-empty code, refetched.
    pub fn select_state(&mut self, code: &str) -> Vec<Action> {
        if code == self.selection.state_code {
            return vec![];
        }
        self.selection.state_code = code.to_string();
        if self.config.behavior.reset_city_on_state_change {
            self.selection.city_name.clear();
        }
        let was_pending = self.cities.pending.is_some();
        self.cities.reset();
        self.dirty = true;

        match self.load_cities() {
            Some(action) => vec![action],
            None if was_pending => vec![Action::CancelCities],
            None => vec![],
        }
    }

    pub fn select_city(&mut self, name: &str) {
        self.selection.city_name = name.to_string();
        self.dirty = true;
    }

    /// Hand the current selection to the next screen, as is.
    pub fn submit(&self) -> Action {
        Action::Navigate {
            route: Route::Points,
            params: NavigationParams {
                uf: self.selection.state_code.clone(),
                city: self.selection.city_name.clone(),
            },
        }
    }

    /// Reissue every request whose last attempt failed.
    pub fn retry_failed(&mut self) -> Vec<Action> {
        let mut actions = Vec::new();
        if self.states.is_failed() {
            actions.push(self.load_states());
        }
        if self.cities.is_failed() {
            actions.extend(self.load_cities());
        }
        actions
    }

    pub fn list_for(&self, field: FocusField) -> Option<&OptionList> {
        match field {
            FocusField::State => Some(&self.states),
            FocusField::City => Some(&self.cities),
            FocusField::Submit => None,
        }
    }

    pub fn placeholder_for(&self, field: FocusField) -> &str {
        match field {
            FocusField::State => &self.config.ui.state_placeholder,
            _ => &self.config.ui.city_placeholder,
        }
    }

    pub fn selected_value(&self, field: FocusField) -> &str {
        match field {
            FocusField::State => &self.selection.state_code,
            _ => &self.selection.city_name,
        }
    }

    pub fn set_focus(&mut self, focus: FocusField) {
        self.focus = focus;
        self.dirty = true;
    }

    pub fn open_popup(&mut self) {
        let field = self.focus;
        let Some(list) = self.list_for(field) else {
            return;
        };
        let highlighted = list
            .position(self.selected_value(field))
            .map(|i| i + 1)
            .unwrap_or(0);
        self.popup = Some(DropdownPopup { field, highlighted });
        self.dirty = true;
    }

    pub fn close_popup(&mut self) {
        self.popup = None;
        self.dirty = true;
    }

    /// Number of rows in the open popup, placeholder included.
    pub fn popup_len(&self) -> usize {
        self.popup
            .and_then(|p| self.list_for(p.field))
            .map(|l| l.options.len() + 1)
            .unwrap_or(0)
    }

    pub fn popup_move(&mut self, delta: isize) {
        let len = self.popup_len();
        if let Some(popup) = self.popup.as_mut() {
            let max = len.saturating_sub(1) as isize;
            popup.highlighted = (popup.highlighted as isize + delta).clamp(0, max) as usize;
            self.dirty = true;
        }
    }

    pub fn popup_home(&mut self) {
        if let Some(popup) = self.popup.as_mut() {
            popup.highlighted = 0;
            self.dirty = true;
        }
    }

    pub fn popup_end(&mut self) {
        let last = self.popup_len().saturating_sub(1);
        if let Some(popup) = self.popup.as_mut() {
            popup.highlighted = last;
            self.dirty = true;
        }
    }

    /// Move the highlight to the next option whose label starts with `c`,
    /// wrapping around.
    pub fn popup_jump(&mut self, c: char) {
        let Some(popup) = self.popup else { return };
        let Some(list) = self.list_for(popup.field) else {
            return;
        };
        let needle = c.to_lowercase().to_string();
        let n = list.options.len();
        let found = (0..n)
            .map(|step| (popup.highlighted + step) % n)
            .find(|&i| list.options[i].label.to_lowercase().starts_with(&needle));
        if let (Some(i), Some(popup)) = (found, self.popup.as_mut()) {
            popup.highlighted = i + 1;
            self.dirty = true;
        }
    }

    /// Select the highlighted row of the open popup and close it.
    pub fn confirm_popup(&mut self) -> Vec<Action> {
        let Some(popup) = self.popup.take() else {
            return vec![];
        };
        self.dirty = true;
        let value = match popup.highlighted {
            0 => String::new(),
            row => self
                .list_for(popup.field)
                .and_then(|l| l.options.get(row - 1))
                .and_then(|o| o.value.clone())
                .unwrap_or_default(),
        };
        match popup.field {
            FocusField::State => self.select_state(&value),
            FocusField::City => {
                self.select_city(&value);
                vec![]
            }
            FocusField::Submit => vec![],
        }
    }

    pub fn is_loading(&self) -> bool {
        self.states.status == LoadStatus::Loading || self.cities.status == LoadStatus::Loading
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER[(self.tick_count / 2) as usize % SPINNER.len()]
    }

    pub fn status_line(&self) -> String {
        if let Some(ref msg) = self.status_message {
            return msg.clone();
        }
        format!(
            "States: {} | Cities: {}",
            describe(&self.states),
            describe(&self.cities)
        )
    }
}

fn describe(list: &OptionList) -> String {
    match &list.status {
        LoadStatus::Idle => "-".to_string(),
        LoadStatus::Loading => "loading".to_string(),
        LoadStatus::Loaded => list.options.len().to_string(),
        LoadStatus::Failed(_) => "failed".to_string(),
    }
}

use crate::geo::{CityRecord, StateRecord};
use crossterm::event::Event as CrosstermEvent;

/// Tag carried by every fetch so late results can be matched to the request
/// that is still current.
pub type RequestId = u64;

#[derive(Debug)]
pub enum AppEvent {
    /// Terminal input event
    Terminal(CrosstermEvent),

    /// State list fetch finished
    StatesLoaded {
        request_id: RequestId,
        records: Vec<StateRecord>,
    },
    StatesFailed {
        request_id: RequestId,
        error: String,
    },

    /// City list fetch for `state_code` finished
    CitiesLoaded {
        request_id: RequestId,
        state_code: String,
        records: Vec<CityRecord>,
    },
    CitiesFailed {
        request_id: RequestId,
        state_code: String,
        error: String,
    },

    /// Tick for UI refresh
    Tick,
}

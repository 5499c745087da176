use crate::app::event::RequestId;
use crate::navigation::{NavigationParams, Route};

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    FetchStates { request_id: RequestId },
    FetchCities { request_id: RequestId, state_code: String },
    CancelCities,
    Navigate { route: Route, params: NavigationParams },
    Quit,
}

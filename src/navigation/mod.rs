//! Navigation to the screen that follows the picker.
//!
//! The picker does not know what the next screen does. It only hands a route
//! and its parameters to a [`Navigator`]. The binary uses
//! [`HandoffNavigator`], which keeps the hand-off until the terminal has been
//! restored and then prints it as one JSON line for the next program.

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Route {
    /// Collection points for the chosen location.
    Points,
}

/// Parameters of the [`Route::Points`] screen, forwarded exactly as selected.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavigationParams {
    pub uf: String,
    pub city: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Handoff {
    pub route: Route,
    pub params: NavigationParams,
}

impl Handoff {
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).context("Failed to serialize navigation hand-off")
    }
}

pub trait Navigator {
    fn navigate(&mut self, route: Route, params: NavigationParams) -> Result<()>;
}

/// Keeps the most recent hand-off for the caller to deliver on exit.
#[derive(Debug, Default)]
pub struct HandoffNavigator {
    handoff: Option<Handoff>,
}

impl HandoffNavigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn take(&mut self) -> Option<Handoff> {
        self.handoff.take()
    }
}

impl Navigator for HandoffNavigator {
    fn navigate(&mut self, route: Route, params: NavigationParams) -> Result<()> {
        info!(?route, uf = %params.uf, city = %params.city, "navigating");
        self.handoff = Some(Handoff { route, params });
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handoff_json() {
        let mut nav = HandoffNavigator::new();
        nav.navigate(
            Route::Points,
            NavigationParams {
                uf: "SP".into(),
                city: "São Paulo".into(),
            },
        )
        .unwrap();

        let handoff = nav.take().unwrap();
        assert_eq!(
            handoff.to_json().unwrap(),
            r#"{"route":"Points","params":{"uf":"SP","city":"São Paulo"}}"#
        );
        assert!(nav.take().is_none());
    }

    #[test]
    fn test_empty_selection_is_forwarded_unchanged() {
        let mut nav = HandoffNavigator::new();
        nav.navigate(
            Route::Points,
            NavigationParams {
                uf: String::new(),
                city: String::new(),
            },
        )
        .unwrap();
        assert_eq!(
            nav.take().unwrap().to_json().unwrap(),
            r#"{"route":"Points","params":{"uf":"","city":""}}"#
        );
    }
}

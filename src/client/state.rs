//! Fetch lifecycle of the client view.

use serde_json::Value;
use strum::{Display, IntoStaticStr};
use tracing::error;

use crate::api::EnvironmentInfo;
use crate::error::FetchError;

/// Message shown to the viewer for every kind of fetch failure.
pub const FETCH_ERROR_MESSAGE: &str = "Error fetching environment data";

/// Coarse phase of a [`FetchState`], used as log field and metric label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum FetchPhase {
    Loading,
    Success,
    Error,
}

/// State of one mount of the client view.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchState {
    /// Initial state; the fetch is pending.
    Loading,
    /// The fetch resolved with this JSON body.
    Success(Value),
    /// The fetch failed; holds the viewer-facing message.
    Error(String),
}

impl FetchState {
    /// Phase of this state.
    pub fn phase(&self) -> FetchPhase {
        match self {
            FetchState::Loading => FetchPhase::Loading,
            FetchState::Success(_) => FetchPhase::Success,
            FetchState::Error(_) => FetchPhase::Error,
        }
    }

    /// Whether no further transition can happen for this mount.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, FetchState::Loading)
    }

    /// Received body, if the fetch succeeded.
    pub fn payload(&self) -> Option<&Value> {
        match self {
            FetchState::Success(body) => Some(body),
            _ => None,
        }
    }

    /// Typed view of the received body. `None` unless the fetch succeeded
    /// with a complete payload.
    pub fn environment_info(&self) -> Option<EnvironmentInfo> {
        self.payload()
            .and_then(|body| serde_json::from_value(body.clone()).ok())
    }
}

/// Map the outcome of the single fetch to the next state.
///
/// Failure detail goes to the log only.
pub fn on_fetch_result(result: Result<Value, FetchError>) -> FetchState {
    match result {
        Ok(body) => FetchState::Success(body),
        Err(e) => {
            error!(error = %e, "Error fetching data");
            FetchState::Error(FETCH_ERROR_MESSAGE.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn resolved_fetch_is_success() {
        let state = on_fetch_result(Ok(json!({ "appName": "X" })));

        assert_eq!(state, FetchState::Success(json!({ "appName": "X" })));
        assert_eq!(state.phase(), FetchPhase::Success);
        assert!(state.is_terminal());
    }

    #[test]
    fn failed_fetch_uses_fixed_message() {
        let state = on_fetch_result(Err(FetchError::Status(503)));

        assert_eq!(state, FetchState::Error(FETCH_ERROR_MESSAGE.to_string()));
        assert_eq!(state.phase(), FetchPhase::Error);
    }

    #[test]
    fn failure_detail_is_not_in_state() {
        let state = on_fetch_result(Err(FetchError::Simulated("socket hang up".to_string())));

        match state {
            FetchState::Error(message) => assert!(!message.contains("socket hang up")),
            other => panic!("unexpected state {:?}", other),
        }
    }

    #[test]
    fn loading_is_not_terminal() {
        assert!(!FetchState::Loading.is_terminal());
        assert!(FetchState::Loading.payload().is_none());
    }

    #[test]
    fn partial_payload_has_no_typed_view() {
        let state = FetchState::Success(json!({ "appName": "X" }));
        assert!(state.environment_info().is_none());
    }

    #[test]
    fn full_payload_has_typed_view() {
        let info = EnvironmentInfo::snapshot("test", chrono::Utc::now());
        let state = FetchState::Success(serde_json::to_value(&info).unwrap());

        assert_eq!(state.environment_info(), Some(info));
    }

    #[test]
    fn phase_labels_are_lowercase() {
        assert_eq!(FetchPhase::Loading.to_string(), "loading");
        let label: &'static str = FetchPhase::Success.into();
        assert_eq!(label, "success");
        let label: &'static str = FetchPhase::Error.into();
        assert_eq!(label, "error");
    }
}

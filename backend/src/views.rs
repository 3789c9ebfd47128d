use crate::error::{ActionError, BhoomiResult};
use crate::models::{AssistantAnswer, ClassificationResult, YieldPrediction};
use crate::services::adapters::WeatherReport;
use serde::Serialize;
use std::collections::HashMap;
use std::sync::{Arc, Mutex, MutexGuard};

/// Status of one kind of user action: loading flag, last good result and
/// last error. Every `begin` issues a fresh token; only the completion
/// carrying the newest token is applied.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ActionState<T> {
    pub latest_token: u64,
    pub loading: bool,
    pub result: Option<T>,
    pub error: Option<ActionError>,
}

impl<T> Default for ActionState<T> {
    fn default() -> Self {
        Self {
            latest_token: 0,
            loading: false,
            result: None,
            error: None,
        }
    }
}

impl<T> ActionState<T> {
    pub fn begin(&mut self) -> u64 {
        self.latest_token += 1;
        self.loading = true;
        self.latest_token
    }

    pub fn is_current(&self, token: u64) -> bool {
        token == self.latest_token
    }

    /// Returns false and leaves the state untouched when `token` is stale.
    pub fn complete(&mut self, token: u64, outcome: &BhoomiResult<T>) -> bool
    where
        T: Clone,
    {
        if !self.is_current(token) {
            return false;
        }
        self.loading = false;
        match outcome {
            Ok(value) => {
                self.result = Some(value.clone());
                self.error = None;
            }
            // keep the last good result on screen
            Err(e) => self.error = Some(ActionError::from(e)),
        }
        true
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionViews {
    pub selected_location: Option<String>,
    pub weather: ActionState<WeatherReport>,
    pub yield_prediction: ActionState<YieldPrediction>,
    pub insect: ActionState<ClassificationResult>,
    pub assistant: ActionState<AssistantAnswer>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Weather,
    Yield,
    Insect,
    Assistant,
}

const DEFAULT_MAX_SESSIONS: usize = 10_000;

struct Sessions {
    entries: HashMap<String, (u64, SessionViews)>,
    // bumped on every write; lowest stamp is evicted first
    clock: u64,
    capacity: usize,
}

/// Per-session view state, capped at `capacity` sessions with the least
/// recently written one evicted first. Reads never create entries. The
/// lock is only held for synchronous updates.
#[derive(Clone)]
pub struct ViewRegistry {
    sessions: Arc<Mutex<Sessions>>,
}

impl Default for ViewRegistry {
    fn default() -> Self {
        Self::with_capacity(DEFAULT_MAX_SESSIONS)
    }
}

impl ViewRegistry {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            sessions: Arc::new(Mutex::new(Sessions {
                entries: HashMap::new(),
                clock: 0,
                capacity: capacity.max(1),
            })),
        }
    }

    fn lock(&self) -> MutexGuard<'_, Sessions> {
        self.sessions
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    pub fn with_session<R>(
        &self,
        session_key: &str,
        f: impl FnOnce(&mut SessionViews) -> R,
    ) -> R {
        let mut sessions = self.lock();
        sessions.clock += 1;
        let stamp = sessions.clock;

        if !sessions.entries.contains_key(session_key)
            && sessions.entries.len() >= sessions.capacity
        {
            let oldest = sessions
                .entries
                .iter()
                .min_by_key(|(_, (touched, _))| *touched)
                .map(|(key, _)| key.clone());
            if let Some(key) = oldest {
                tracing::debug!("Evicting view state of session {}", key);
                sessions.entries.remove(&key);
            }
        }

        let entry = sessions
            .entries
            .entry(session_key.to_string())
            .or_insert_with(|| (stamp, SessionViews::default()));
        entry.0 = stamp;
        f(&mut entry.1)
    }

    /// The session's views, or empty views for an unknown session.
    pub fn snapshot(&self, session_key: &str) -> SessionViews {
        self.lock()
            .entries
            .get(session_key)
            .map(|(_, views)| views.clone())
            .unwrap_or_default()
    }

    pub fn begin(&self, session_key: &str, kind: ViewKind) -> u64 {
        let token = self.with_session(session_key, |v| match kind {
            ViewKind::Weather => v.weather.begin(),
            ViewKind::Yield => v.yield_prediction.begin(),
            ViewKind::Insect => v.insect.begin(),
            ViewKind::Assistant => v.assistant.begin(),
        });
        tracing::debug!("session={} {:?} request token {}", session_key, kind, token);
        token
    }

    pub fn selected_location(&self, session_key: &str) -> Option<String> {
        self.lock()
            .entries
            .get(session_key)
            .and_then(|(_, views)| views.selected_location.clone())
    }

    pub fn set_selected_location(&self, session_key: &str, location: String) {
        self.with_session(session_key, |v| v.selected_location = Some(location));
    }

    #[cfg(test)]
    fn session_count(&self) -> usize {
        self.lock().entries.len()
    }
}

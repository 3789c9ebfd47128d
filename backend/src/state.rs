use crate::config::AppConfig;
use crate::marketplace::ListingSource;
use crate::services::FarmServices;
use crate::views::ViewRegistry;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub listings: Arc<dyn ListingSource>,
    pub services: Arc<dyn FarmServices>,
    pub views: ViewRegistry,
}

impl AppState {
    pub fn new(
        config: AppConfig,
        listings: Arc<dyn ListingSource>,
        services: Arc<dyn FarmServices>,
    ) -> Self {
        Self {
            views: ViewRegistry::with_capacity(config.max_sessions),
            config: Arc::new(config),
            listings,
            services,
        }
    }
}

/// Who is calling, resolved once per request by the session middleware and
/// handed to handlers as an extension.
#[derive(Clone, Default, Debug, Serialize, Deserialize)]
pub struct SessionContext {
    pub session_key: String,
    pub user_id: Option<i32>,
    pub username: Option<String>,
}

impl SessionContext {
    pub fn anonymous() -> Self {
        Self {
            session_key: "anonymous".to_string(),
            ..Self::default()
        }
    }
}

use crate::espn::EspnClient;

/// Shared by every handler; cloning is cheap since the HTTP client is pooled.
#[derive(Debug, Clone)]
pub struct AppState {
    pub espn: EspnClient,
}

impl AppState {
    pub fn new(espn: EspnClient) -> Self {
        AppState { espn }
    }
}

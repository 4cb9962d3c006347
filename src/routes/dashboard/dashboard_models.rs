use askama::Template;

use super::progress_source::{FetchError, ProgressSource};
use crate::demo::{DEMO_EMAIL, DEMO_PASSWORD, SEED_COMMAND};
use crate::routes::demo_progress::demo_progress_models::DemoProgressResponse;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchFailure {
    NotSeeded,
    Unavailable,
}

impl FetchFailure {
    pub fn message(&self) -> String {
        match self {
            Self::NotSeeded => format!("Run {SEED_COMMAND} first"),
            Self::Unavailable => "Failed to load".to_string(),
        }
    }
}

impl From<&FetchError> for FetchFailure {
    fn from(err: &FetchError) -> Self {
        match err {
            FetchError::Status(404) => Self::NotSeeded,
            _ => Self::Unavailable,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum DashboardState {
    /// Before the single fetch has finished. `/dashboard` renders on the
    /// server after that fetch, so a browser only ever receives the `Failed`
    /// or `Ready` markup; this state exists for the view model's start.
    #[default]
    Loading,
    Failed(FetchFailure),
    Ready(DemoProgressResponse),
}

impl DashboardState {
    /// Leave `Loading` with the outcome of a single fetch.
    pub async fn load(source: &dyn ProgressSource) -> Self {
        Self::from_fetch(source.fetch_progress().await)
    }

    pub fn from_fetch(result: Result<DemoProgressResponse, FetchError>) -> Self {
        match result {
            Ok(progress) => Self::Ready(progress),
            Err(e) => Self::Failed(FetchFailure::from(&e)),
        }
    }
}

#[derive(Template)]
#[template(path = "dashboard.html")]
pub struct DashboardPage<'a> {
    pub state: &'a DashboardState,
    pub demo_email: &'a str,
    pub demo_password: &'a str,
    pub seed_command: &'a str,
}

impl<'a> DashboardPage<'a> {
    pub fn new(state: &'a DashboardState) -> Self {
        Self {
            state,
            demo_email: DEMO_EMAIL,
            demo_password: DEMO_PASSWORD,
            seed_command: SEED_COMMAND,
        }
    }
}

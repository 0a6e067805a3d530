use std::time::Duration;

use crate::{
    domain::{ComparisonRow, DomainProfile, Entity, SearchOutcome},
    error::UiError,
    services::BackendClient,
};

/// Search lifecycle of one session. Not-found and transport failures have no
/// phase of their own: the error area is the only section they reveal, so
/// they land in [`Controller::error`] instead.
#[derive(Debug, Clone, PartialEq)]
pub enum Phase {
    Idle,
    Candidates {
        list: Vec<Entity>,
        selected: Option<String>,
    },
    Detail(Entity),
}

/// The search UI controller: owns the backend client and all session state.
/// Render functions receive the state explicitly; nothing lives in globals.
pub struct Controller {
    client: BackendClient,
    profile: &'static DomainProfile,
    detail_delay: Duration,
    pub query: String,
    pub phase: Phase,
    pub comparison: Option<Vec<ComparisonRow>>,
    pub error: Option<String>,
}

impl Controller {
    pub fn new(
        client: BackendClient,
        profile: &'static DomainProfile,
        detail_delay: Duration,
    ) -> Self {
        Controller {
            client,
            profile,
            detail_delay,
            query: String::new(),
            phase: Phase::Idle,
            comparison: None,
            error: None,
        }
    }

    pub fn profile(&self) -> &'static DomainProfile {
        self.profile
    }

    /// Pause between marking a candidate and committing its detail view.
    pub fn detail_delay(&self) -> Duration {
        self.detail_delay
    }

    /// The entity whose identifier drives comparison fetches, if any.
    pub fn selection(&self) -> Option<&Entity> {
        match &self.phase {
            Phase::Detail(entity) => Some(entity),
            Phase::Candidates {
                list,
                selected: Some(id),
            } => list.iter().find(|candidate| &candidate.id == id),
            _ => None,
        }
    }

    pub async fn submit_search(&mut self, raw_query: &str) -> Result<(), UiError> {
        let result = self.run_search(raw_query).await;
        self.record(result)
    }

    async fn run_search(&mut self, raw_query: &str) -> Result<(), UiError> {
        let profile = self.profile;
        let query = raw_query.trim();
        if query.is_empty() {
            // Validation failures leave whatever is on screen in place.
            return Err(UiError::Validation(profile.labels.empty_query.to_string()));
        }

        self.query = query.to_string();
        self.error = None;
        self.phase = Phase::Idle;
        self.comparison = None;

        match self.client.search(query).await {
            Ok(SearchOutcome::Resolved(entity)) => {
                self.phase = Phase::Detail(entity);
                Ok(())
            }
            Ok(SearchOutcome::Candidates(list)) => {
                self.phase = Phase::Candidates {
                    list,
                    selected: None,
                };
                Ok(())
            }
            Ok(SearchOutcome::NotFound(message)) => Err(UiError::NotFound(
                message.unwrap_or_else(|| profile.labels.search_not_found.to_string()),
            )),
            Err(e) => {
                log::error!("Search request failed: {:?}", e);
                Err(UiError::Transport(format!(
                    "{}: {}",
                    profile.labels.search_failed_prefix, e
                )))
            }
        }
    }

    /// Marks exactly one candidate as selected. Re-selecting the same id
    /// toggles nothing; ids outside the rendered list are ignored. Returns
    /// whether a candidate is now marked.
    pub fn select_candidate(&mut self, id: &str) -> bool {
        match &mut self.phase {
            Phase::Candidates { list, selected } => {
                match list.iter().any(|candidate| candidate.id == id) {
                    true => {
                        *selected = Some(id.to_string());
                        true
                    }
                    false => {
                        log::error!("Ignoring unknown candidate id: {}", id);
                        false
                    }
                }
            }
            _ => false,
        }
    }

    /// Promotes the currently marked candidate to the detail view and hides
    /// the candidate list. Called after the cosmetic delay has elapsed; if a
    /// later selection overwrote the mark in the meantime, that one wins.
    pub fn commit_selection(&mut self) {
        let marked = match &self.phase {
            Phase::Candidates {
                list,
                selected: Some(id),
            } => list.iter().find(|candidate| &candidate.id == id).cloned(),
            _ => None,
        };

        if let Some(entity) = marked {
            self.phase = Phase::Detail(entity);
        }
    }

    pub async fn fetch_comparison(&mut self) -> Result<(), UiError> {
        let result = self.run_comparison().await;
        self.record(result)
    }

    async fn run_comparison(&mut self) -> Result<(), UiError> {
        let profile = self.profile;
        let id = match self.selection() {
            Some(entity) => entity.id.clone(),
            None => {
                return Err(UiError::Validation(
                    profile.labels.no_selection.to_string(),
                ))
            }
        };

        self.error = None;
        self.comparison = None;

        match self.client.price_comparison(&id).await {
            Ok(rows) => match rows.is_empty() {
                true => Err(UiError::NotFound(
                    profile.labels.comparison_not_found.to_string(),
                )),
                false => {
                    self.comparison = Some(rows);
                    Ok(())
                }
            },
            Err(e) => {
                log::error!("Price comparison request failed: {:?}", e);
                Err(UiError::Transport(format!(
                    "{}: {}",
                    profile.labels.comparison_failed_prefix, e
                )))
            }
        }
    }

    /// Back to the initial empty page. Idempotent, always succeeds.
    pub fn reset_search(&mut self) {
        self.query.clear();
        self.phase = Phase::Idle;
        self.comparison = None;
        self.error = None;
    }

    fn record(&mut self, result: Result<(), UiError>) -> Result<(), UiError> {
        if let Err(e) = &result {
            self.error = Some(e.message().to_string());
        }
        result
    }
}

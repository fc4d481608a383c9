use super::Phase;
use crate::client::TransportError;
use crate::model::{AnalysisResponse, FormFactor};
use crate::pipeline::{FilterCriteria, ReportView, SortSpec, build_view};
use crate::request::{AnalyzeRequest, ValidationError, normalize};

const LOG_TARGET: &str = "   session";

/// Permission to perform one submission. The ticket's generation identifies the
/// submission when its outcome is reported back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Ticket {
    pub generation: u64,
    pub request: AnalyzeRequest,
}

/// The state of one interactive analysis flow.
///
/// Each submission bumps a generation counter. Outcomes are accepted only for the
/// latest generation, so a slow response to an older submission can never replace
/// the result of a newer one.
#[derive(Debug, Clone)]
pub struct AnalysisSession {
    phase: Phase,
    generation: u64,
    max_urls: usize,
    response: Option<AnalysisResponse>,
    criteria: FilterCriteria,
    sort: SortSpec,
}

impl AnalysisSession {
    #[must_use]
    pub fn new(max_urls: usize) -> Self {
        Self {
            phase: Phase::Idle,
            generation: 0,
            max_urls,
            response: None,
            criteria: FilterCriteria::default(),
            sort: SortSpec::default(),
        }
    }

    #[must_use]
    pub const fn phase(&self) -> &Phase {
        &self.phase
    }

    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    #[must_use]
    pub const fn response(&self) -> Option<&AnalysisResponse> {
        self.response.as_ref()
    }

    #[must_use]
    pub const fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    #[must_use]
    pub const fn sort(&self) -> &SortSpec {
        &self.sort
    }

    /// Start a new submission from raw user input.
    ///
    /// Any previous response and all filter and sort settings are discarded, whatever
    /// phase the session was in. On success the session is `Submitting` and the
    /// returned ticket carries the request to send.
    pub fn submit<S: AsRef<str>>(&mut self, inputs: &[S], form_factor: FormFactor) -> Result<Ticket, ValidationError> {
        self.generation += 1;
        self.phase = Phase::Validating;
        self.response = None;
        self.criteria.clear();
        self.sort.clear();

        match normalize(inputs, form_factor, self.max_urls) {
            Ok(request) => {
                self.phase = Phase::Submitting;
                log::debug!(target: LOG_TARGET, "Submission #{} accepted with {} URL(s)", self.generation, request.urls.len());
                Ok(Ticket {
                    generation: self.generation,
                    request,
                })
            }
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Submission #{} rejected: {e}", self.generation);
                self.phase = Phase::ValidationFailed(e.clone());
                Err(e)
            }
        }
    }

    /// Record the outcome of the submission identified by `generation`.
    ///
    /// Returns `false`, leaving the session untouched, when a newer submission has
    /// started since.
    pub fn complete(&mut self, generation: u64, outcome: Result<AnalysisResponse, TransportError>) -> bool {
        if generation != self.generation || self.phase != Phase::Submitting {
            log::debug!(
                target: LOG_TARGET,
                "Ignoring outcome of submission #{generation}; current is #{} ({})",
                self.generation,
                self.phase.name()
            );
            return false;
        }

        match outcome {
            Ok(response) => {
                self.response = Some(response);
                self.phase = Phase::Ready;
            }
            Err(e) => {
                self.response = None;
                self.phase = Phase::Failed(e.to_string());
            }
        }

        true
    }

    pub fn set_criteria(&mut self, criteria: FilterCriteria) {
        self.criteria = criteria;
    }

    pub fn set_sort(&mut self, sort: SortSpec) {
        self.sort = sort;
    }

    /// Reset filters and sorting to show every result in response order.
    pub fn clear_all(&mut self) {
        self.criteria.clear();
        self.sort.clear();
    }

    /// The current view, when a response is available.
    #[must_use]
    pub fn view(&self) -> Option<ReportView<'_>> {
        self.response.as_ref().map(|r| build_view(r, &self.criteria, &self.sort))
    }
}

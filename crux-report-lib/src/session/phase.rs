use crate::request::ValidationError;

/// Where an analysis session currently stands.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Idle,

    /// Input is being checked. Transient; a submission always leaves this phase before
    /// returning.
    Validating,

    /// The last submission was rejected before any request was sent.
    ValidationFailed(ValidationError),

    /// A request is in flight.
    Submitting,

    /// The last request failed; holds the user-facing message.
    Failed(String),

    /// A response is available.
    Ready,
}

impl Phase {
    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self, Self::Validating | Self::Submitting)
    }

    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Idle => "idle",
            Self::Validating => "validating",
            Self::ValidationFailed(_) => "validation failed",
            Self::Submitting => "submitting",
            Self::Failed(_) => "failed",
            Self::Ready => "ready",
        }
    }
}

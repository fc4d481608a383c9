//! Analysis session state machine
//!
//! ```text
//! Idle -> Validating -> ValidationFailed
//!                    -> Submitting -> Ready | Failed
//! ```
//!
//! A new submission may start from any phase and always re-enters `Validating`,
//! dropping the previous response and resetting filters and sorting.

mod analysis_session;
mod phase;

pub use analysis_session::{AnalysisSession, Ticket};
pub use phase::Phase;

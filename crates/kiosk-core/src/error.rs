use thiserror::Error;

use crate::models::session::SessionState;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("session is {0} and no longer accepts readings")]
    Closed(SessionState),

    #[error("cannot move session from {from} to {to}")]
    InvalidTransition { from: SessionState, to: SessionState },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error(
    "unknown category '{0}' (expected one of: cardiovascular, respiratory, metabolic, lipid, \
     hematology, anthropometric, body_composition, sensory)"
)]
pub struct UnknownCategory(pub String);

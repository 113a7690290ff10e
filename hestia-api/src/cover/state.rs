use serde_derive::Serialize;
use std::fmt;

/// The observable lifecycle state of a cover. An entity that can't
/// determine its state reports `None` instead of a `State` value.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum State {
    Opening,
    Closing,
    Closed,
    Open,
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            State::Opening => write!(f, "opening"),
            State::Closing => write!(f, "closing"),
            State::Closed => write!(f, "closed"),
            State::Open => write!(f, "open"),
        }
    }
}

// Computes the composite state from the three independent signals.
// The precedence is fixed: an opening cover is `Opening` no matter
// what the other signals say, then a closing cover is `Closing`, and
// only then is the closed signal consulted. An unknown closed signal
// makes the whole state unknown.

pub(super) fn derive_state(
    is_opening: Option<bool>,
    is_closing: Option<bool>,
    is_closed: Option<bool>,
) -> Option<State> {
    if is_opening == Some(true) {
        return Some(State::Opening);
    }

    if is_closing == Some(true) {
        return Some(State::Closing);
    }

    is_closed.map(|closed| if closed { State::Closed } else { State::Open })
}

/// The attribute payload published alongside a cover's state. A
/// position the device doesn't report is omitted from the payload
/// entirely.
#[derive(Debug, PartialEq, Serialize)]
pub struct StateAttributes {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_position: Option<u8>,

    #[serde(skip_serializing_if = "Option::is_none")]
    pub current_tilt_position: Option<u8>,
}

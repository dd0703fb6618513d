use std::fmt;


/// Progress of a sequential run over `len` tasks.
///
/// `Pending(i)` means task `i` is the one being awaited. A run never reaches
/// `Pending(len)`: the last success moves straight to `Succeeded`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SequenceState {
    Pending(usize),
    Succeeded,
    Failed,
}

impl SequenceState {
    pub fn start(len: usize) -> Self {
        if len == 0 {
            SequenceState::Succeeded
        } else {
            SequenceState::Pending(0)
        }
    }

    /// Applies the settlement of the pending task. Terminal states stay put.
    pub fn on_settled(self, succeeded: bool, len: usize) -> Self {
        match self {
            SequenceState::Pending(_) if !succeeded => SequenceState::Failed,
            SequenceState::Pending(i) if i + 1 < len => SequenceState::Pending(i + 1),
            SequenceState::Pending(_) => SequenceState::Succeeded,
            terminal => terminal,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self, SequenceState::Pending(_))
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            SequenceState::Pending(_) => "pending",
            SequenceState::Succeeded => "succeeded",
            SequenceState::Failed => "failed",
        }
    }
}

impl fmt::Display for SequenceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SequenceState::Pending(i) => write!(f, "pending({})", i),
            other => write!(f, "{}", other.as_str()),
        }
    }
}

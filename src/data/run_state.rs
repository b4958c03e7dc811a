/// Lifecycle of a plot surface.
///
/// `Stopped` is terminal: it is entered once when the window closes and the
/// sampling loop ends on the next iteration.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum RunState {
    #[default]
    Running,
    Paused,
    Stopped,
}

impl RunState {
    pub fn is_open(self) -> bool {
        self != RunState::Stopped
    }

    pub fn is_paused(self) -> bool {
        self == RunState::Paused
    }

    /// Running and Paused swap; Stopped stays Stopped.
    pub fn toggled(self) -> RunState {
        match self {
            RunState::Running => RunState::Paused,
            RunState::Paused => RunState::Running,
            RunState::Stopped => RunState::Stopped,
        }
    }
}

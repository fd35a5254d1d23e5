//! State machine definition
//!
//! The run state is a function of the previous state and a command only.
//! Ticks never change it.

use super::events::Command;

/// Stopwatch run states
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum RunState {
    /// Not counting; ticks are ignored
    #[default]
    Stopped,
    /// Counting; every tick advances elapsed time
    Running,
}

impl RunState {
    /// Check if ticks advance time in this state
    pub fn is_running(&self) -> bool {
        matches!(self, RunState::Running)
    }

    /// Process a command and return the next state
    ///
    /// Every command is accepted from every state.
    pub fn transition(self, command: Command) -> Self {
        match command {
            Command::Start => RunState::Running,
            Command::Stop | Command::Reset => RunState::Stopped,
        }
    }
}

impl From<bool> for RunState {
    fn from(running: bool) -> Self {
        if running {
            RunState::Running
        } else {
            RunState::Stopped
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_STATES: [RunState; 2] = [RunState::Stopped, RunState::Running];

    #[test]
    fn test_initial_state_is_stopped() {
        assert_eq!(RunState::default(), RunState::Stopped);
    }

    #[test]
    fn test_start_from_any_state() {
        for state in ALL_STATES {
            assert_eq!(state.transition(Command::Start), RunState::Running);
        }
    }

    #[test]
    fn test_stop_and_reset_from_any_state() {
        for state in ALL_STATES {
            assert_eq!(state.transition(Command::Stop), RunState::Stopped);
            assert_eq!(state.transition(Command::Reset), RunState::Stopped);
        }
    }

    #[test]
    fn test_from_flag() {
        assert_eq!(RunState::from(true), RunState::Running);
        assert_eq!(RunState::from(false), RunState::Stopped);
        assert!(RunState::Running.is_running());
        assert!(!RunState::Stopped.is_running());
    }
}

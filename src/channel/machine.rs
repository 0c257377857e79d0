//! Connection state of the notification socket, independent of the browser.

use super::backoff::Backoff;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChannelState {
    /// Not started, or shut down by the owner.
    Stopped,
    Connecting,
    Open,
    /// Waiting for the single pending reconnect timer.
    Closed { retry_in_ms: u32 },
}

#[derive(Debug, Clone)]
pub struct ChannelMachine {
    state: ChannelState,
    backoff: Backoff,
}

impl Default for ChannelMachine {
    fn default() -> Self {
        Self {
            state: ChannelState::Stopped,
            backoff: Backoff::default(),
        }
    }
}

impl ChannelMachine {
    pub fn state(&self) -> ChannelState {
        self.state
    }

    /// Enter `Connecting`. Refused while a socket is already live.
    pub fn begin_connect(&mut self) -> bool {
        match self.state {
            ChannelState::Stopped | ChannelState::Closed { .. } => {
                self.state = ChannelState::Connecting;
                true
            }
            ChannelState::Connecting | ChannelState::Open => false,
        }
    }

    /// Handshake completed.
    pub fn opened(&mut self) -> bool {
        if self.state != ChannelState::Connecting {
            return false;
        }
        self.state = ChannelState::Open;
        self.backoff.reset();
        true
    }

    /// A close or error was observed on the live socket.
    ///
    /// Returns the delay of the reconnect to schedule, or `None` when one is
    /// already pending or the channel was stopped.
    pub fn closed(&mut self) -> Option<u32> {
        match self.state {
            ChannelState::Connecting | ChannelState::Open => {
                let retry_in_ms = self.backoff.next_delay();
                self.state = ChannelState::Closed { retry_in_ms };
                Some(retry_in_ms)
            }
            ChannelState::Closed { .. } | ChannelState::Stopped => None,
        }
    }

    /// The reconnect timer fired. `true` means a new socket should be opened.
    pub fn retry_due(&mut self) -> bool {
        matches!(self.state, ChannelState::Closed { .. }) && self.begin_connect()
    }

    pub fn stop(&mut self) {
        self.state = ChannelState::Stopped;
        self.backoff.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fail(machine: &mut ChannelMachine) -> Option<u32> {
        let delay = machine.closed();
        assert!(machine.retry_due());
        delay
    }

    #[test]
    fn should_start_stopped_and_connect_once() {
        let mut machine = ChannelMachine::default();
        assert_eq!(machine.state(), ChannelState::Stopped);
        assert!(machine.begin_connect());
        assert!(!machine.begin_connect());
        assert_eq!(machine.state(), ChannelState::Connecting);
    }

    #[test]
    fn should_back_off_on_consecutive_failures() {
        let mut machine = ChannelMachine::default();
        machine.begin_connect();
        let delays: Vec<u32> = (0..7).filter_map(|_| fail(&mut machine)).collect();
        assert_eq!(delays, vec![1000, 2000, 4000, 8000, 16000, 30000, 30000]);
    }

    #[test]
    fn should_reset_delay_when_opened() {
        let mut machine = ChannelMachine::default();
        machine.begin_connect();
        fail(&mut machine);
        fail(&mut machine);
        fail(&mut machine);
        assert!(machine.opened());
        assert_eq!(machine.state(), ChannelState::Open);
        assert_eq!(machine.closed(), Some(1000));
    }

    #[test]
    fn should_schedule_one_retry_per_failure() {
        let mut machine = ChannelMachine::default();
        machine.begin_connect();
        machine.opened();
        // error event followed by the close it forces
        assert_eq!(machine.closed(), Some(1000));
        assert_eq!(machine.closed(), None);
        assert_eq!(machine.state(), ChannelState::Closed { retry_in_ms: 1000 });
    }

    #[test]
    fn should_skip_retry_when_not_closed() {
        let mut machine = ChannelMachine::default();
        machine.begin_connect();
        machine.opened();
        assert!(!machine.retry_due());
        assert_eq!(machine.state(), ChannelState::Open);
    }

    #[test]
    fn should_ignore_events_after_stop() {
        let mut machine = ChannelMachine::default();
        machine.begin_connect();
        machine.closed();
        machine.stop();
        assert!(!machine.retry_due());
        assert_eq!(machine.closed(), None);
        assert!(!machine.opened());
        assert_eq!(machine.state(), ChannelState::Stopped);
    }
}

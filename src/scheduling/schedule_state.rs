use std::time::Duration;

use tokio::sync::watch;

use crate::types::channel::ChannelId;

pub const UPDATE_INTERVAL: Duration = Duration::from_secs(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchedulePhase {
    Idle,
    Running,
    Stopped,
}

/// Fixed at startup apart from the phase, which only ever moves forward.
#[derive(Debug)]
pub struct ScheduleState {
    interval: Duration,
    channel_id: ChannelId,
    phase: watch::Sender<SchedulePhase>,
}

impl ScheduleState {
    pub fn new(channel_id: ChannelId) -> Self {
        Self::with_interval(channel_id, UPDATE_INTERVAL)
    }

    pub fn with_interval(channel_id: ChannelId, interval: Duration) -> Self {
        let (phase, _) = watch::channel(SchedulePhase::Idle);

        Self {
            interval,
            channel_id,
            phase,
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    pub fn channel_id(&self) -> ChannelId {
        self.channel_id
    }

    pub fn phase(&self) -> SchedulePhase {
        *self.phase.borrow()
    }

    /// Moves `Idle` to `Running`. Returns false if the loop was started before.
    pub fn start(&self) -> bool {
        self.phase.send_if_modified(|phase| {
            if *phase == SchedulePhase::Idle {
                *phase = SchedulePhase::Running;
                true
            } else {
                false
            }
        })
    }

    pub fn stop(&self) {
        self.phase.send_replace(SchedulePhase::Stopped);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_only_once() {
        let state = ScheduleState::new(ChannelId::new(7));

        assert_eq!(state.phase(), SchedulePhase::Idle);
        assert!(state.start());
        assert!(!state.start());
        assert_eq!(state.phase(), SchedulePhase::Running);
        assert_eq!(state.interval(), Duration::from_secs(300));
    }

    #[test]
    fn stopped_cannot_restart() {
        let state = ScheduleState::with_interval(ChannelId::new(7), Duration::from_secs(1));

        state.start();
        state.stop();

        assert!(!state.start());
        assert_eq!(state.phase(), SchedulePhase::Stopped);
        assert_eq!(state.channel_id(), ChannelId::new(7));
    }
}

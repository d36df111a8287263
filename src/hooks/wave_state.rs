use std::rc::Rc;

use yew::Reducible;

use crate::models::Wave;

/// Session state for the page: the rendered wave list, the ledger's counter
/// mirror, the in-progress message, and the write guard. Mutated only through
/// [`WaveAction`]s so every transition is inspectable in tests.
#[derive(Clone, PartialEq, Default)]
pub struct WaveState {
    pub waves: Vec<Wave>,
    pub total_waves: u64,
    pub pending_input: String,
    pub write_in_flight: bool,
}

pub enum WaveAction {
    /// Full refresh from the ledger; replaces the list wholesale.
    Loaded { waves: Vec<Wave>, total: u64 },
    /// One wave arrived through the live event filter.
    Arrived(Wave),
    InputChanged(String),
    WriteStarted,
    /// A submission confirmed, together with the freshly re-fetched ledger
    /// view. The list is never touched before confirmation.
    WriteConfirmed { waves: Vec<Wave>, total: u64 },
    WriteFailed,
}

impl Reducible for WaveState {
    type Action = WaveAction;

    fn reduce(self: Rc<Self>, action: WaveAction) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WaveAction::Loaded { waves, total } => {
                next.waves = waves;
                next.total_waves = total;
            }
            WaveAction::Arrived(wave) => {
                next.waves.push(wave);
                // Mirror, don't count: only raise the counter when the list
                // has visibly outgrown it.
                next.total_waves = next.total_waves.max(next.waves.len() as u64);
            }
            WaveAction::InputChanged(value) => next.pending_input = value,
            WaveAction::WriteStarted => {
                if next.write_in_flight {
                    return self;
                }
                next.write_in_flight = true;
            }
            WaveAction::WriteConfirmed { waves, total } => {
                next.waves = waves;
                next.total_waves = total;
                next.pending_input.clear();
                next.write_in_flight = false;
            }
            WaveAction::WriteFailed => next.write_in_flight = false,
        }
        Rc::new(next)
    }
}

/// Submissions with no content never reach the network.
pub fn is_blank_message(message: &str) -> bool {
    message.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn wave(sender: &str, timestamp: u64, message: &str) -> Wave {
        Wave {
            sender: sender.into(),
            timestamp,
            message: message.into(),
            display_color: "hsl(270, 60%, 80%)".into(),
        }
    }

    fn reduce(state: WaveState, action: WaveAction) -> WaveState {
        (*Reducible::reduce(Rc::new(state), action)).clone()
    }

    #[test]
    fn initial_load_replaces_the_list_and_counter() {
        let state = reduce(
            WaveState::default(),
            WaveAction::Loaded {
                waves: vec![wave("0xaa", 1000, "hi")],
                total: 1,
            },
        );
        assert_eq!(state.waves.len(), 1);
        assert_eq!(state.waves[0].timestamp, 1000);
        assert_eq!(state.waves[0].message, "hi");
        assert_eq!(state.total_waves, 1);
    }

    #[test]
    fn a_live_event_appends_exactly_one_entry() {
        let mut state = reduce(
            WaveState::default(),
            WaveAction::Loaded {
                waves: vec![wave("0xaa", 1000, "hi")],
                total: 1,
            },
        );
        state = reduce(state, WaveAction::Arrived(wave("0xbb", 2000, "yo")));

        assert_eq!(state.waves.len(), 2);
        assert_eq!(state.waves[0].message, "hi");
        assert_eq!(state.waves[1].sender, "0xbb");
        assert_eq!(state.waves[1].timestamp, 2000);
        assert_eq!(state.waves[1].message, "yo");
        assert!(state.waves.len() as u64 <= state.total_waves);
    }

    #[test]
    fn the_list_never_outgrows_the_counter_mirror() {
        let mut state = WaveState::default();
        for i in 0..5 {
            state = reduce(state, WaveAction::Arrived(wave("0xaa", i, "w")));
            assert!(state.waves.len() as u64 <= state.total_waves);
        }
    }

    #[test]
    fn a_stale_counter_is_not_lowered_by_events() {
        let mut state = reduce(
            WaveState::default(),
            WaveAction::Loaded {
                waves: Vec::new(),
                total: 10,
            },
        );
        state = reduce(state, WaveAction::Arrived(wave("0xaa", 1, "w")));
        assert_eq!(state.total_waves, 10);
    }

    #[test]
    fn confirmed_write_resyncs_clears_input_and_lands_idle() {
        let mut state = WaveState {
            pending_input: "hello".into(),
            ..WaveState::default()
        };
        state = reduce(state, WaveAction::WriteStarted);
        assert!(state.write_in_flight);

        state = reduce(
            state,
            WaveAction::WriteConfirmed {
                waves: vec![wave("0xaa", 1, "old"), wave("0xbb", 2, "hello")],
                total: 2,
            },
        );
        assert_eq!(state.waves.len(), 2);
        assert_eq!(state.total_waves, 2);
        assert_eq!(state.pending_input, "");
        assert!(!state.write_in_flight);
    }

    #[test]
    fn failed_write_keeps_the_typed_message_for_retry() {
        let mut state = WaveState {
            pending_input: "hello".into(),
            ..WaveState::default()
        };
        state = reduce(state, WaveAction::WriteStarted);
        state = reduce(state, WaveAction::WriteFailed);

        assert_eq!(state.pending_input, "hello");
        assert!(!state.write_in_flight);
        assert!(state.waves.is_empty());
    }

    #[test]
    fn write_started_is_idempotent_while_in_flight() {
        let mut state = reduce(WaveState::default(), WaveAction::WriteStarted);
        state = reduce(state, WaveAction::WriteStarted);
        assert!(state.write_in_flight);
    }

    #[test]
    fn blank_messages_are_recognized() {
        assert!(is_blank_message(""));
        assert!(is_blank_message("   \t\n"));
        assert!(!is_blank_message("gm"));
    }
}

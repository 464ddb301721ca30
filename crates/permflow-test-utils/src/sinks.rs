//! Recording sinks for asserting audit trails and delivered outcomes.

use parking_lot::Mutex;
use permflow_protocol::{Outcome, OutcomeSink, TraceEvent, TraceSink};

/// Trace sink that records every emitted event in order.
#[derive(Default)]
pub struct RecordingTraceSink {
    events: Mutex<Vec<TraceEvent>>,
}

impl RecordingTraceSink {
    /// All recorded events, in emission order.
    pub fn events(&self) -> Vec<TraceEvent> {
        self.events.lock().clone()
    }

    /// Just the message strings, in emission order.
    pub fn messages(&self) -> Vec<String> {
        self.events
            .lock()
            .iter()
            .map(|event| event.message.clone())
            .collect()
    }
}

impl TraceSink for RecordingTraceSink {
    fn emit(&self, event: TraceEvent) {
        self.events.lock().push(event);
    }
}

/// Outcome sink that records every delivery.
#[derive(Default)]
pub struct RecordingOutcomeSink {
    outcomes: Mutex<Vec<Outcome>>,
}

impl RecordingOutcomeSink {
    /// All delivered outcomes; a well-behaved flow delivers exactly one.
    pub fn finished(&self) -> Vec<Outcome> {
        self.outcomes.lock().clone()
    }

    /// The single delivered outcome, if exactly one was delivered.
    pub fn single(&self) -> Option<Outcome> {
        let outcomes = self.outcomes.lock();
        match outcomes.as_slice() {
            [outcome] => Some(outcome.clone()),
            _ => None,
        }
    }
}

impl OutcomeSink for RecordingOutcomeSink {
    fn finish(&self, outcome: Outcome) {
        self.outcomes.lock().push(outcome);
    }
}

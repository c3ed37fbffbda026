use std::collections::HashMap;

use log::info;

use super::{Control, ControlState, Field, RenderSink};

/// Terminal presentation: every field change becomes one log line.
/// Repeated identical values stay quiet.
#[derive(Debug, Default)]
pub struct LogSink {
    last_text: HashMap<Field, String>,
    last_control: HashMap<Control, ControlState>,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }
}

impl RenderSink for LogSink {
    fn set_text(&mut self, field: Field, text: &str) {
        if self.last_text.get(&field).map(String::as_str) == Some(text) {
            return;
        }
        info!("{}: {}", field.id(), text);
        self.last_text.insert(field, text.to_string());
    }

    fn set_control(&mut self, control: Control, state: ControlState) {
        if self.last_control.get(&control) == Some(&state) {
            return;
        }
        info!("{} -> {:?}", control.id(), state);
        self.last_control.insert(control, state);
    }
}

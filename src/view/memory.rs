use std::collections::BTreeMap;

use serde::Serialize;

use super::{Control, ControlState, Field, RenderSink};

/// View-model that keeps the latest value of every field and control.
#[derive(Debug, Clone, Default, Serialize)]
pub struct MemorySink {
    fields: BTreeMap<Field, String>,
    controls: BTreeMap<Control, ControlState>,
    #[serde(skip)]
    writes: usize,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn text(&self, field: Field) -> Option<&str> {
        self.fields.get(&field).map(String::as_str)
    }

    pub fn control(&self, control: Control) -> Option<ControlState> {
        self.controls.get(&control).copied()
    }

    pub fn fields(&self) -> impl Iterator<Item = (Field, &str)> {
        self.fields.iter().map(|(field, text)| (*field, text.as_str()))
    }

    /// Total number of writes received, including ones that did not change
    /// a value.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl RenderSink for MemorySink {
    fn set_text(&mut self, field: Field, text: &str) {
        self.writes += 1;
        self.fields.insert(field, text.to_string());
    }

    fn set_control(&mut self, control: Control, state: ControlState) {
        self.writes += 1;
        self.controls.insert(control, state);
    }
}

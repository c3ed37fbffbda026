use serde::{Deserialize, Serialize};

use crate::format::to_12_hour;
use crate::models::{is_sentinel, StatusSnapshot, SystemStatus, NOT_AVAILABLE};
use crate::view::{Field, RenderSink};
use crate::{log_info, log_warn};

const ENABLE_LOGS: bool = true;

/// Which status page the reconciler drives.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum Presentation {
    /// Raw snapshot text with labelled status lines.
    Minimal,
    /// Every derived field, formatted.
    #[default]
    Rich,
}

impl Presentation {
    fn status_label(self, status: SystemStatus) -> String {
        match self {
            Presentation::Minimal => format!("System Status: {}", status.as_str()),
            Presentation::Rich => status.as_str().to_string(),
        }
    }

    fn started_label(self, started: &str) -> String {
        match self {
            Presentation::Minimal => format!("System Started On: {started}"),
            Presentation::Rich => started.to_string(),
        }
    }
}

/// Online/offline state machine that turns snapshots into display fields.
///
/// Each applied snapshot rewrites every field this presentation owns, so a
/// missing value shows its sentinel instead of the previous tick's text.
pub struct Reconciler<S> {
    presentation: Presentation,
    sink: S,
    state: Option<SystemStatus>,
}

impl<S: RenderSink> Reconciler<S> {
    pub fn new(presentation: Presentation, sink: S) -> Self {
        Self {
            presentation,
            sink,
            state: None,
        }
    }

    pub fn presentation(&self) -> Presentation {
        self.presentation
    }

    /// `None` until the first snapshot arrives.
    pub fn state(&self) -> Option<SystemStatus> {
        self.state
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    /// Renders one snapshot. Returns `true` when the uptime should be
    /// resolved for this tick.
    pub fn apply(&mut self, snapshot: &StatusSnapshot) -> bool {
        match self.presentation {
            Presentation::Minimal => self.render_minimal(snapshot),
            Presentation::Rich => self.render_rich(snapshot),
        }

        let status = snapshot.system_status;
        self.transition(status);

        let label = self.presentation.status_label(status);
        self.sink.set_text(Field::SysStatus, &label);

        match status {
            SystemStatus::Online => true,
            SystemStatus::Offline => {
                let label = self.presentation.started_label(NOT_AVAILABLE);
                self.sink.set_text(Field::SysStarted, &label);
                false
            }
        }
    }

    /// Shows a resolved start time. Ignored once the system has gone offline
    /// again, so a late answer cannot overwrite `N/A`.
    pub fn apply_uptime(&mut self, started: &str) -> bool {
        if self.state != Some(SystemStatus::Online) {
            return false;
        }
        let label = self.presentation.started_label(started);
        self.sink.set_text(Field::SysStarted, &label);
        true
    }

    fn transition(&mut self, next: SystemStatus) {
        match (self.state, next) {
            (Some(SystemStatus::Online), SystemStatus::Offline) => {
                log_warn!("occupancy system went offline");
            }
            (Some(SystemStatus::Offline) | None, SystemStatus::Online) => {
                log_info!("occupancy system is online");
            }
            (None, SystemStatus::Offline) => {
                log_info!("occupancy system is offline");
            }
            _ => {}
        }
        self.state = Some(next);
    }

    fn render_minimal(&mut self, snapshot: &StatusSnapshot) {
        self.sink.set_text(Field::DataDisplay, &snapshot.data);
        self.sink.set_text(Field::StreakDisplay, snapshot.streak.raw());
    }

    fn render_rich(&mut self, snapshot: &StatusSnapshot) {
        self.sink.set_text(Field::OccupiedStatus, &snapshot.occupied_status);
        self.sink.set_text(Field::SpaceStatus, &snapshot.space_status);
        self.sink
            .set_text(Field::StreakDisplay, &snapshot.streak.describe());
        self.sink.set_text(
            Field::OccupiedPercentage,
            &with_suffix(&snapshot.occupied_percentage, "% Occupied"),
        );
        self.sink.set_text(
            Field::UnoccupiedPercentage,
            &with_suffix(&snapshot.unoccupied_percentage, "% Unoccupied"),
        );

        let optimal = if is_sentinel(&snapshot.optimal_time) {
            snapshot.optimal_time.clone()
        } else {
            to_12_hour(&snapshot.optimal_time)
        };
        self.sink.set_text(Field::OptimalTime, &optimal);
    }
}

fn with_suffix(value: &str, suffix: &str) -> String {
    if is_sentinel(value) {
        value.to_string()
    } else {
        format!("{value}{suffix}")
    }
}

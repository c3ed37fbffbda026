use serde::{Deserialize, Serialize};

/// Logical display fields. The dashboard writes to these names, never to a
/// concrete widget.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Field {
    DataDisplay,
    OccupiedStatus,
    SpaceStatus,
    StreakDisplay,
    OccupiedPercentage,
    UnoccupiedPercentage,
    OptimalTime,
    SysStatus,
    SysStarted,
    GalleryImage,
    GalleryCaption,
    GalleryPlaceholder,
}

impl Field {
    pub fn id(&self) -> &'static str {
        match self {
            Field::DataDisplay => "dataDisplay",
            Field::OccupiedStatus => "occupiedStatus",
            Field::SpaceStatus => "spaceStatus",
            Field::StreakDisplay => "streakDisplay",
            Field::OccupiedPercentage => "occupiedPercentage",
            Field::UnoccupiedPercentage => "unoccupiedPercentage",
            Field::OptimalTime => "optimalTime",
            Field::SysStatus => "sysStatus",
            Field::SysStarted => "sysStarted",
            Field::GalleryImage => "galleryImage",
            Field::GalleryCaption => "caption",
            Field::GalleryPlaceholder => "galleryPlaceholder",
        }
    }
}

/// Interactive or structural elements whose presence changes.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[serde(rename_all = "camelCase")]
pub enum Control {
    PreviousButton,
    NextButton,
    GalleryNav,
    GalleryFrame,
}

impl Control {
    pub fn id(&self) -> &'static str {
        match self {
            Control::PreviousButton => "prevButton",
            Control::NextButton => "nextButton",
            Control::GalleryNav => "gallery-nav",
            Control::GalleryFrame => "gal",
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum ControlState {
    Shown,
    Hidden,
    /// Gone for the rest of the session.
    Removed,
}

impl ControlState {
    pub fn visible_if(condition: bool) -> Self {
        if condition {
            ControlState::Shown
        } else {
            ControlState::Hidden
        }
    }
}

/// Where rendered values end up.
pub trait RenderSink: Send {
    fn set_text(&mut self, field: Field, text: &str);

    fn set_control(&mut self, control: Control, state: ControlState);
}

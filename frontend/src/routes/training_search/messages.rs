use common::error::ApiError;
use common::model::training::{RosterRow, TrainingDetail};

use crate::session::Session;

pub enum Msg {
    RosterLoaded(Vec<RosterRow>),
    RosterFailed(ApiError),
    SetFilter(&'static str, String),
    /// A roster row was double-clicked; starts the level-1 detail fetch
    /// unless one is already in flight.
    RowActivated(RosterRow),
    /// One second elapsed while the level-1 fetch is outstanding.
    DetailTick,
    DetailLoaded(TrainingDetail),
    DetailFailed(ApiError),
    CloseDetail,
    SessionChanged(Session),
}

//! State for the roster search view and its level-1 drill-down.

use std::collections::HashMap;

use common::model::training::{RosterRow, TrainingDetail};
use gloo_timers::callback::Interval;
use yew::prelude::*;

use super::messages::Msg;
use crate::session::Session;

/// Roster column rendering order; the roster rows themselves are open
/// mappings and may carry more keys than are shown.
pub const COLUMN_ORDER: &[&str] = &[
    "Web連携ID",
    "開催日",
    "時間",
    "研修名",
    "会場名",
    "ROOM",
    "講師",
    "ふりがな",
    "ZoomID",
    "ZoomPW",
];

/// Roster row key whose value identifies a training towards the detail
/// endpoint.
pub const WEB_ID_COLUMN: &str = "Web連携ID";

/// Level-1 drill-down state machine. A failed fetch collapses straight
/// back to `Idle` after logging, so there is no `Failed` variant to park
/// in; `Loaded` without data is unrepresentable.
pub enum DetailFetch {
    Idle,
    Loading {
        /// Whole seconds since the fetch started, for user feedback only.
        elapsed: u32,
        /// Ticker driving `elapsed`. Owned by this variant so every
        /// transition out of `Loading` drops (and thereby cancels) it.
        _timer: Interval,
    },
    Loaded(TrainingDetail),
}

impl DetailFetch {
    pub fn is_loading(&self) -> bool {
        matches!(self, DetailFetch::Loading { .. })
    }
}

pub struct TrainingSearch {
    /// Roster rows in load order. Stays empty when the load fails.
    pub rows: Vec<RosterRow>,
    /// True until the initial roster fetch resolves either way.
    pub loading: bool,
    /// Per-column free-text queries, mutated one key at a time.
    pub filters: HashMap<String, String>,
    /// Level-1 drill-down state.
    pub detail: DetailFetch,
    /// Guard so the first-render roster fetch runs once.
    pub loaded: bool,
    pub session: Session,
    pub _session_handle: yew::context::ContextHandle<Session>,
}

impl TrainingSearch {
    pub fn new(ctx: &Context<Self>) -> Self {
        let (session, session_handle) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("SessionProvider must wrap TrainingSearch");
        Self {
            rows: Vec::new(),
            loading: true,
            filters: HashMap::new(),
            detail: DetailFetch::Idle,
            loaded: false,
            session,
            _session_handle: session_handle,
        }
    }
}

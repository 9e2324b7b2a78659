//! Update function for the roster search view.
//!
//! Elm-style: receives the current state, the `Context`, and a `Msg`,
//! mutates the state, and returns whether the view should re-render.
//!
//! Level-1 drill-down rules enforced here:
//! - single flight: a `RowActivated` while `Loading` is dropped outright;
//! - the elapsed ticker lives inside the `Loading` variant, so replacing
//!   the variant on *any* exit releases the interval;
//! - a failed fetch logs, toasts, and returns to `Idle` without opening
//!   the detail view.

use gloo_console::error;
use gloo_timers::callback::Interval;
use yew::platform::spawn_local;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{DetailFetch, TrainingSearch, WEB_ID_COLUMN};
use crate::api;
use crate::components::toast::show_toast;

pub fn update(component: &mut TrainingSearch, ctx: &Context<TrainingSearch>, msg: Msg) -> bool {
    match msg {
        Msg::RosterLoaded(rows) => {
            component.rows = rows;
            component.loading = false;
            true
        }
        Msg::RosterFailed(err) => {
            // Degrade to an empty, filterable table; the view stays
            // interactive.
            error!("roster load failed:", err.to_string());
            show_toast("研修一覧の取得に失敗しました");
            component.rows = Vec::new();
            component.loading = false;
            true
        }
        Msg::SetFilter(column, query) => {
            component.filters.insert(column.to_string(), query);
            true
        }
        Msg::RowActivated(row) => {
            if component.detail.is_loading() {
                // A fetch is already outstanding; rapid duplicate triggers
                // are dropped, not queued.
                return false;
            }
            let Some(web_id) = row.get(WEB_ID_COLUMN).filter(|id| !id.is_empty()).cloned()
            else {
                return false;
            };
            let Some(identity) = component.session.identity.clone() else {
                return false;
            };

            let ticker_link = ctx.link().clone();
            let timer = Interval::new(1_000, move || ticker_link.send_message(Msg::DetailTick));
            component.detail = DetailFetch::Loading {
                elapsed: 0,
                _timer: timer,
            };

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_training_detail(&web_id, Some(&identity)).await {
                    Ok(detail) => link.send_message(Msg::DetailLoaded(detail)),
                    Err(err) => link.send_message(Msg::DetailFailed(err)),
                }
            });
            true
        }
        Msg::DetailTick => match &mut component.detail {
            DetailFetch::Loading { elapsed, .. } => {
                *elapsed += 1;
                true
            }
            // Stray tick delivered after the fetch resolved.
            _ => false,
        },
        Msg::DetailLoaded(detail) => {
            component.detail = DetailFetch::Loaded(detail);
            true
        }
        Msg::DetailFailed(err) => {
            error!("training detail fetch failed:", err.to_string());
            show_toast("研修詳細の取得に失敗しました");
            component.detail = DetailFetch::Idle;
            true
        }
        Msg::CloseDetail => {
            component.detail = DetailFetch::Idle;
            true
        }
        Msg::SessionChanged(session) => {
            component.session = session;
            true
        }
    }
}

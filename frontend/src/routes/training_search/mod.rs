//! Roster search view: cached training roster with per-column filtering and
//! the two-level detail drill-down.
//!
//! Root module wiring the Yew `Component` implementation with submodules
//! for state, messages, update logic, and view rendering. On first render
//! the roster is fetched once; remounting the view re-fetches (no caching
//! between mounts). A failed load degrades to an empty, still-filterable
//! table.

use yew::platform::spawn_local;
use yew::prelude::*;

mod messages;
mod state;
mod update;
mod view;

pub use messages::Msg;
pub use state::TrainingSearch;

use crate::api;

impl Component for TrainingSearch {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        TrainingSearch::new(ctx)
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        update::update(self, ctx, msg)
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        view::view(self, ctx)
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_roster().await {
                    Ok(rows) => link.send_message(Msg::RosterLoaded(rows)),
                    Err(err) => link.send_message(Msg::RosterFailed(err)),
                }
            });
        }
    }
}

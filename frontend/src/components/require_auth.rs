//! Route guard for authenticated-only pages.
//!
//! Re-evaluated on every render through a live session subscription, so a
//! logout revokes access to an already-mounted page on its next
//! evaluation. The redirect replaces the history entry rather than pushing
//! one (`Redirect` navigates with replace), so Back does not bounce
//! through the guarded page.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::routes::Route;
use crate::session::Session;

#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    #[prop_or_default]
    pub children: Html,
}

pub enum Msg {
    SessionChanged(Session),
}

pub struct RequireAuth {
    session: Session,
    _session_handle: yew::context::ContextHandle<Session>,
}

impl Component for RequireAuth {
    type Message = Msg;
    type Properties = RequireAuthProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (session, session_handle) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("SessionProvider must wrap RequireAuth");
        Self {
            session,
            _session_handle: session_handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SessionChanged(session) => {
                self.session = session;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        if self.session.identity.is_none() {
            return html! { <Redirect<Route> to={Route::Login} /> };
        }
        ctx.props().children.clone()
    }
}

use yew::{html, Component, Context, Html};
use yew_router::prelude::*;
use yew_router::scope_ext::{LocationHandle, RouterScopeExt};

use crate::components::sidebar::Sidebar;
use crate::routes::{switch, Route};
use crate::session::{Session, SessionProvider};

pub struct App;

impl Component for App {
    type Message = ();
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        html! {
            <BrowserRouter>
                <SessionProvider>
                    <Layout />
                </SessionProvider>
            </BrowserRouter>
        }
    }
}

pub enum LayoutMsg {
    SessionChanged(Session),
    LocationChanged,
}

/// Application chrome: the fixed sidebar appears once someone is logged in
/// and the current route is not the login form; the routed page scrolls
/// beside it.
pub struct Layout {
    session: Session,
    _session_handle: yew::context::ContextHandle<Session>,
    _location_handle: LocationHandle,
}

impl Component for Layout {
    type Message = LayoutMsg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, session_handle) = ctx
            .link()
            .context(ctx.link().callback(LayoutMsg::SessionChanged))
            .expect("SessionProvider must wrap Layout");
        let location_handle = ctx
            .link()
            .add_location_listener(ctx.link().callback(|_| LayoutMsg::LocationChanged))
            .expect("Layout must live under a router");
        Self {
            session,
            _session_handle: session_handle,
            _location_handle: location_handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            LayoutMsg::SessionChanged(session) => {
                self.session = session;
                true
            }
            LayoutMsg::LocationChanged => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_login_page = ctx
            .link()
            .route::<Route>()
            .is_some_and(|route| route == Route::Login);
        let with_sidebar = self.session.identity.is_some() && !on_login_page;

        html! {
            <div style="height: 100vh; display: flex; overflow: hidden;">
                if with_sidebar {
                    <Sidebar />
                }
                <main style="flex: 1; overflow: auto; padding: 16px;">
                    <Switch<Route> render={switch} />
                </main>
            </div>
        }
    }
}

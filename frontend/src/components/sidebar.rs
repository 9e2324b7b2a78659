use yew::prelude::*;
use yew_router::prelude::*;
use yew_router::scope_ext::RouterScopeExt;

use crate::routes::Route;
use crate::session::Session;

const LINKS: &[(Route, &str)] = &[
    (Route::Home, "ホーム"),
    (Route::TrainingSearch, "研修検索"),
    (Route::CancelRequest, "キャンセル / 欠席申請"),
    (Route::CloseRequest, "不芳中止処理"),
];

pub enum Msg {
    Logout,
    SessionChanged(Session),
}

/// Fixed navigation rail with the signed-in user's name and the logout
/// button in the footer.
pub struct Sidebar {
    session: Session,
    _session_handle: yew::context::ContextHandle<Session>,
}

impl Component for Sidebar {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, session_handle) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("SessionProvider must wrap Sidebar");
        Self {
            session,
            _session_handle: session_handle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Logout => {
                self.session.logout();
                if let Some(navigator) = ctx.link().navigator() {
                    navigator.push(&Route::Login);
                }
                false
            }
            Msg::SessionChanged(session) => {
                self.session = session;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let display_name = self
            .session
            .identity
            .as_ref()
            .map(|identity| identity.display_name.clone())
            .unwrap_or_default();

        html! {
            <nav style="width: 240px; background: #f3f4f6; border-right: 1px solid #ddd; \
                        display: flex; flex-direction: column; justify-content: space-between;">
                <div style="display: flex; flex-direction: column;">
                    { for LINKS.iter().map(|(route, label)| html! {
                        <Link<Route> to={route.clone()}>
                            <span style="display: block; padding: 12px 16px; font-weight: bold;">
                                { *label }
                            </span>
                        </Link<Route>>
                    }) }
                </div>
                <div style="padding: 12px 16px; font-size: 12px; background: white;">
                    <span>{ format!("🔑 {display_name} さん") }</span>
                    <button onclick={ctx.link().callback(|_| Msg::Logout)}>
                        { "🔒 Log out" }
                    </button>
                </div>
            </nav>
        }
    }
}

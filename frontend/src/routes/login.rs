//! Login form: the only place that talks to the authentication endpoint.
//! A successful login builds the [`Identity`] (short name = first token of
//! the full name), hands it to the session, and the view then redirects
//! forward to the home page; the session provider takes care of
//! persistence.

use common::error::ApiError;
use common::model::identity::Identity;
use web_sys::HtmlInputElement;
use yew::platform::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::api;
use crate::routes::Route;
use crate::session::Session;

pub enum Msg {
    SetId(String),
    SetPassword(String),
    Submit,
    LoginOk(Identity),
    LoginErr(ApiError),
    SessionChanged(Session),
}

pub struct LoginPage {
    login_id: String,
    password: String,
    error: Option<String>,
    loading: bool,
    session: Session,
    _session_handle: yew::context::ContextHandle<Session>,
}

impl Component for LoginPage {
    type Message = Msg;
    type Properties = ();

    fn create(ctx: &Context<Self>) -> Self {
        let (session, session_handle) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("SessionProvider must wrap LoginPage");
        Self {
            login_id: String::new(),
            password: String::new(),
            error: None,
            loading: false,
            session,
            _session_handle: session_handle,
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::SetId(value) => {
                self.login_id = value;
                true
            }
            Msg::SetPassword(value) => {
                self.password = value;
                true
            }
            Msg::Submit => {
                if self.loading {
                    return false;
                }
                self.loading = true;
                self.error = None;
                let id = self.login_id.clone();
                let password = self.password.clone();
                let link = ctx.link().clone();
                spawn_local(async move {
                    match api::login(&id, &password).await {
                        Ok(full_name) => {
                            match Identity::from_login(&id, &password, &full_name) {
                                Some(identity) => link.send_message(Msg::LoginOk(identity)),
                                // Backend said success but returned no usable name.
                                None => link.send_message(Msg::LoginErr(ApiError::Auth(
                                    "ログイン失敗".to_string(),
                                ))),
                            }
                        }
                        Err(err) => link.send_message(Msg::LoginErr(err)),
                    }
                });
                true
            }
            Msg::LoginOk(identity) => {
                self.loading = false;
                // The context update re-renders this page, whose view then
                // redirects to the home route.
                self.session.login(identity);
                true
            }
            Msg::LoginErr(err) => {
                self.loading = false;
                self.error = Some(err.to_string());
                true
            }
            Msg::SessionChanged(session) => {
                self.session = session;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        // Already logged in (fresh login or restored credentials): never
        // show the form, move forward to the default authenticated view.
        if self.session.identity.is_some() {
            return html! { <Redirect<Route> to={Route::Home} /> };
        }

        let link = ctx.link();
        let onsubmit = link.callback(|e: SubmitEvent| {
            e.prevent_default();
            Msg::Submit
        });

        html! {
            <div style="width: 100%; display: flex; justify-content: center; margin-top: 80px;">
                <form {onsubmit} style="width: 220px;">
                    <h2 style="text-align: center;">{ "IBR Portal Login" }</h2>
                    <input
                        autofocus=true
                        placeholder="WEBinsourceのログインID"
                        value={self.login_id.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetId(input.value())
                        })}
                        style="width: 100%; margin-bottom: 12px;"
                    />
                    <input
                        type="password"
                        placeholder="WEBinsourceのパスワード"
                        value={self.password.clone()}
                        oninput={link.callback(|e: InputEvent| {
                            let input: HtmlInputElement = e.target_unchecked_into();
                            Msg::SetPassword(input.value())
                        })}
                        style="width: 100%; margin-bottom: 12px;"
                    />
                    <button type="submit" disabled={self.loading} style="width: 100%;">
                        { if self.loading { "Logging in…" } else { "Log in" } }
                    </button>
                    if let Some(error) = &self.error {
                        <p style="color: red; text-align: center;">{ error }</p>
                    }
                </form>
            </div>
        }
    }
}

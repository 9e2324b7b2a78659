//! Session ownership for the portal: who is logged in, process-wide.
//!
//! `SessionProvider` is the single writer of the current [`Identity`]. It
//! seeds itself from the credential store on startup, persists every change
//! back to it, and hands consumers a cloneable [`Session`] through Yew's
//! context so any component can read the identity or drive login/logout.
//! Authentication itself (talking to the backend) happens in the login
//! page; this module only stores the accepted result.

use common::model::identity::Identity;
use yew::prelude::*;

pub mod store;

/// Context value exposed to every component under [`SessionProvider`].
#[derive(Clone, PartialEq)]
pub struct Session {
    /// The current identity, `None` while logged out.
    pub identity: Option<Identity>,
    set: Callback<Option<Identity>>,
}

impl Session {
    /// Installs a freshly authenticated identity and persists it.
    pub fn login(&self, identity: Identity) {
        self.set.emit(Some(identity));
    }

    /// Drops the current identity and wipes the credential store.
    pub fn logout(&self) {
        self.set.emit(None);
    }
}

pub enum Msg {
    Set(Option<Identity>),
}

#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    #[prop_or_default]
    pub children: Html,
}

pub struct SessionProvider {
    identity: Option<Identity>,
}

impl Component for SessionProvider {
    type Message = Msg;
    type Properties = SessionProviderProps;

    fn create(_ctx: &Context<Self>) -> Self {
        // Restore a complete credential set left by a previous visit, so a
        // reload does not log the user out.
        Self {
            identity: store::load(),
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Set(identity) => {
                // Persist first; even if storage fails the in-memory session
                // still updates (the store logs, a reload then starts logged
                // out).
                match &identity {
                    Some(identity) => store::save(identity),
                    None => store::clear(),
                }
                self.identity = identity;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let session = Session {
            identity: self.identity.clone(),
            set: ctx.link().callback(Msg::Set),
        };
        html! {
            <ContextProvider<Session> context={session}>
                { ctx.props().children.clone() }
            </ContextProvider<Session>>
        }
    }
}

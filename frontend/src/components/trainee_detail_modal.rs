//! Level-2 drill-down: matched individuals for one application id.
//!
//! Mounting the modal starts the fetch; the `loaded` flag keeps it
//! single-flight for the life of the mount. The fetch re-authenticates
//! with the stored credentials (no session token exists upstream).
//! Independent of level 1: closing this modal unmounts it without
//! touching the training detail underneath.

use common::error::ApiError;
use common::model::identity::Identity;
use common::model::training::Record;
use gloo_console::error;
use serde_json::Value;
use yew::platform::spawn_local;
use yew::prelude::*;

use crate::api;
use crate::components::toast::show_toast;

/// Record keys rendered as external document links.
const TICKET_LINK_KEY: &str = "受講票リンク";
const CERTIFICATE_LINK_KEY: &str = "受講証明書リンク";

#[derive(Properties, PartialEq)]
pub struct TraineeDetailModalProps {
    pub application_id: String,
    pub identity: Identity,
    pub on_close: Callback<()>,
}

pub enum Msg {
    Loaded(Vec<Record>),
    Failed(ApiError),
}

enum Fetch {
    Loading,
    Loaded(Vec<Record>),
    Failed,
}

pub struct TraineeDetailModal {
    fetch: Fetch,
    loaded: bool,
}

impl Component for TraineeDetailModal {
    type Message = Msg;
    type Properties = TraineeDetailModalProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self {
            fetch: Fetch::Loading,
            loaded: false,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Loaded(records) => {
                self.fetch = Fetch::Loaded(records);
                true
            }
            Msg::Failed(err) => {
                error!("trainee detail fetch failed:", err.to_string());
                show_toast("受講者詳細の取得に失敗しました");
                self.fetch = Fetch::Failed;
                true
            }
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        if first_render && !self.loaded {
            self.loaded = true;

            let application_id = ctx.props().application_id.clone();
            let identity = ctx.props().identity.clone();
            let link = ctx.link().clone();
            spawn_local(async move {
                match api::fetch_trainee_detail(&application_id, Some(&identity)).await {
                    Ok(records) => link.send_message(Msg::Loaded(records)),
                    Err(err) => link.send_message(Msg::Failed(err)),
                }
            });
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let on_close = ctx.props().on_close.clone();

        html! {
            <div style="position: fixed; inset: 0; z-index: 70; background: rgba(0,0,0,0.3); overflow: auto; padding: 16px;">
                <div style="background: white; padding: 24px; border-radius: 4px; max-width: 640px; margin: 80px auto;">
                    <h2>{ "👤 受講者詳細" }</h2>
                    { self.body() }
                    <div style="text-align: right; margin-top: 16px;">
                        <button onclick={Callback::from(move |_| on_close.emit(()))}>
                            { "閉じる" }
                        </button>
                    </div>
                </div>
            </div>
        }
    }
}

impl TraineeDetailModal {
    fn body(&self) -> Html {
        let records = match &self.fetch {
            Fetch::Loading => return html! { <p>{ "読み込み中..." }</p> },
            Fetch::Loaded(records) if !records.is_empty() => records,
            _ => return html! { <p>{ "データがありません。" }</p> },
        };

        html! {
            <table border="1" style="width: 100%; border-collapse: collapse; font-size: 14px;">
                <tbody>
                    { for records.iter().enumerate().map(|(i, record)| html! {
                        <>
                            <tr>
                                <td colspan="2" style="background: #e5e7eb; font-weight: bold;">
                                    { format!("【{}人目】", i + 1) }
                                </td>
                            </tr>
                            { for record.iter().map(|(key, value)| html! {
                                <tr>
                                    <th style="text-align: left; background: #f3f4f6; width: 33%; white-space: nowrap;">
                                        { key }
                                    </th>
                                    <td>{ field_value(key, value) }</td>
                                </tr>
                            }) }
                        </>
                    }) }
                </tbody>
            </table>
        }
    }
}

fn field_value(key: &str, value: &Value) -> Html {
    let text = value.as_str().unwrap_or_default();
    match key {
        TICKET_LINK_KEY if !text.is_empty() => external_link(text, "📄 受講票を表示"),
        CERTIFICATE_LINK_KEY if !text.is_empty() => external_link(text, "🎓 受講証明書を表示"),
        _ if !text.is_empty() => html! { { text.to_string() } },
        _ => html! { "—" },
    }
}

fn external_link(href: &str, label: &str) -> Html {
    html! {
        <a href={href.to_string()} target="_blank" rel="noopener noreferrer">
            { label }
        </a>
    }
}

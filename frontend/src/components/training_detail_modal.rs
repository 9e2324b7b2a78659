//! Level-1 detail view: the training's basic facts plus its trainee list,
//! from which a double-click opens the level-2 trainee drill-down.
//!
//! The trainee list is heterogeneous; columns are the union of keys across
//! all rows in order of first appearance. The level-2 modal is mounted
//! only while a trainee row is selected and an identity exists, and
//! closing it leaves this modal open.

use common::model::training::{union_keys, Record, TrainingDetail};
use serde_json::Value;
use yew::prelude::*;

use crate::components::trainee_detail_modal::TraineeDetailModal;
use crate::session::Session;

/// Trainee-list key whose value is the application id used by level 2.
const APPLICATION_ID_KEY: &str = "申込No";

/// Trainee-list key whose `.gif` values are upstream status icons.
const APPLICATION_METHOD_KEY: &str = "申込方法";

const UPSTREAM_IMG_BASE: &str = "https://secure.insource.co.jp/webinsource/img/";

#[derive(Properties, PartialEq)]
pub struct TrainingDetailModalProps {
    pub content: TrainingDetail,
    pub on_close: Callback<()>,
}

pub enum Msg {
    TraineeActivated(String),
    CloseTrainee,
    SessionChanged(Session),
}

pub struct TrainingDetailModal {
    /// Application id of the trainee row selected for level-2 drill-down.
    selected: Option<String>,
    session: Session,
    _session_handle: yew::context::ContextHandle<Session>,
}

impl Component for TrainingDetailModal {
    type Message = Msg;
    type Properties = TrainingDetailModalProps;

    fn create(ctx: &Context<Self>) -> Self {
        let (session, session_handle) = ctx
            .link()
            .context(ctx.link().callback(Msg::SessionChanged))
            .expect("SessionProvider must wrap TrainingDetailModal");
        Self {
            selected: None,
            session,
            _session_handle: session_handle,
        }
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::TraineeActivated(application_id) => {
                self.selected = Some(application_id);
                true
            }
            Msg::CloseTrainee => {
                self.selected = None;
                true
            }
            Msg::SessionChanged(session) => {
                self.session = session;
                true
            }
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let content = &ctx.props().content;
        let on_close = ctx.props().on_close.clone();

        let trainee_modal = match (&self.selected, &self.session.identity) {
            (Some(application_id), Some(identity)) => html! {
                <TraineeDetailModal
                    application_id={application_id.clone()}
                    identity={identity.clone()}
                    on_close={link.callback(|_| Msg::CloseTrainee)}
                />
            },
            _ => Html::default(),
        };

        html! {
            <>
                <div style="position: fixed; inset: 0; z-index: 60; background: rgba(0,0,0,0.3); overflow: auto; padding: 16px;">
                    <div style="background: white; padding: 24px; border-radius: 4px; max-width: 960px; margin: 80px auto;">
                        <h2>{ "📄 研修詳細" }</h2>

                        if let Some(basic_info) = &content.basic_info {
                            <h3>{ "基本情報" }</h3>
                            <table border="1" style="width: 100%; border-collapse: collapse; font-size: 14px;">
                                <tbody>
                                    { for basic_info.iter().map(|(key, value)| html! {
                                        <tr>
                                            <th style="text-align: left; background: #f3f4f6; width: 25%;">{ key }</th>
                                            <td>{ cell_text(value) }</td>
                                        </tr>
                                    }) }
                                </tbody>
                            </table>
                        }

                        { self.trainee_table(ctx) }

                        <div style="text-align: right; margin-top: 16px;">
                            <button onclick={Callback::from(move |_| on_close.emit(()))}>
                                { "閉じる" }
                            </button>
                        </div>
                    </div>
                </div>

                { trainee_modal }
            </>
        }
    }
}

impl TrainingDetailModal {
    fn trainee_table(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let trainees = match ctx.props().content.trainee_list.as_deref() {
            Some(trainees) if !trainees.is_empty() => trainees,
            _ => return html! { <p>{ "受講者情報がありません。" }</p> },
        };
        let keys = union_keys(trainees);

        html! {
            <div style="overflow: auto; max-height: 50vh;">
                <h3>{ "受講者一覧" }</h3>
                <table border="1" style="min-width: 100%; border-collapse: collapse; font-size: 14px;">
                    <thead>
                        <tr>
                            { for keys.iter().map(|key| html! {
                                <th style="text-align: left; white-space: nowrap;">{ key }</th>
                            }) }
                        </tr>
                    </thead>
                    <tbody>
                        { for trainees.iter().map(|row| {
                            let ondblclick = {
                                let application_id = row
                                    .get(APPLICATION_ID_KEY)
                                    .and_then(Value::as_str)
                                    .map(str::to_string);
                                link.batch_callback(move |_: MouseEvent| {
                                    application_id.clone().map(Msg::TraineeActivated)
                                })
                            };
                            html! {
                                <tr {ondblclick} style="cursor: pointer;">
                                    { for keys.iter().map(|key| html! {
                                        <td style="white-space: nowrap;">
                                            { trainee_cell(key, row) }
                                        </td>
                                    }) }
                                </tr>
                            }
                        }) }
                    </tbody>
                </table>
            </div>
        }
    }
}

/// Renders one trainee cell; `申込方法` `.gif` values become upstream
/// status icons.
fn trainee_cell(key: &str, row: &Record) -> Html {
    let value = row.get(key);
    if key == APPLICATION_METHOD_KEY {
        if let Some(file) = value.and_then(Value::as_str).filter(|v| v.ends_with(".gif")) {
            return html! {
                <img
                    src={format!("{UPSTREAM_IMG_BASE}{file}")}
                    alt={file.to_string()}
                    style="height: 16px;"
                />
            };
        }
    }
    match value {
        Some(value) => html! { { cell_text(value) } },
        None => html! { "—" },
    }
}

/// String values render trimmed, anything blank or non-string as an
/// em-dash (mirrors the upstream portal's tables).
fn cell_text(value: &Value) -> String {
    match value.as_str().map(str::trim) {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => "—".to_string(),
    }
}

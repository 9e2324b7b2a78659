use yew::prelude::*;

use crate::api;

/// Document downloads offered on the home view, keyed by the id the
/// backend's download endpoint expects.
const DOWNLOADS: &[(u32, &str)] = &[
    (1, "印刷依頼.xlsx"),
    (2, "印刷依頼（前日）.xlsx"),
    (3, "設営リスト.xlsx"),
    (4, "アンケートリスト.xlsx"),
    (5, "名簿.zip"),
    (6, "名簿リスト.xlsx"),
    (7, "受付表.xlsx"),
    (8, "カンバン.xlsx"),
    (9, "研修管理報告書.xlsx"),
];

pub struct Home;

impl Component for Home {
    type Message = u32;
    type Properties = ();

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn update(&mut self, _ctx: &Context<Self>, id: Self::Message) -> bool {
        // Plain navigation; the browser handles the attachment download.
        if let Some(window) = web_sys::window() {
            let _ = window.location().set_href(&api::download_url(id));
        }
        false
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        html! {
            <div>
                <h1>{ "🏠 ホーム" }</h1>
                <div style="display: grid; grid-template-columns: repeat(3, 1fr); gap: 16px;">
                    { for DOWNLOADS.iter().map(|&(id, label)| html! {
                        <button onclick={link.callback(move |_| id)}>
                            { format!("📥 {label}") }
                        </button>
                    }) }
                </div>
            </div>
        }
    }
}

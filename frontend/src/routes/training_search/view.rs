//! View rendering for the roster search: the filter row, the roster table,
//! the elapsed-seconds overlay while a detail fetch is outstanding, and the
//! detail modal once it lands.

use common::search::visible_rows;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use super::messages::Msg;
use super::state::{DetailFetch, TrainingSearch, COLUMN_ORDER};
use crate::components::training_detail_modal::TrainingDetailModal;

pub fn view(component: &TrainingSearch, ctx: &Context<TrainingSearch>) -> Html {
    let link = ctx.link();
    let fetching_detail = component.detail.is_loading();

    let overlay = match &component.detail {
        DetailFetch::Loading { elapsed, .. } => html! {
            <div style="position: fixed; inset: 0; z-index: 50; background: rgba(0,0,0,0.4); \
                        display: flex; align-items: center; justify-content: center;">
                <div style="background: white; padding: 24px; border-radius: 4px; text-align: center;">
                    <p><b>{ "詳細を取得中..." }</b></p>
                    <p>{ format!("{elapsed} 秒経過") }</p>
                </div>
            </div>
        },
        _ => Html::default(),
    };

    let modal = match &component.detail {
        DetailFetch::Loaded(content) => html! {
            <TrainingDetailModal
                content={content.clone()}
                on_close={link.callback(|_| Msg::CloseDetail)}
            />
        },
        _ => Html::default(),
    };

    html! {
        <div style="position: relative;">
            { overlay }

            <table border="1" style="width: 100%; border-collapse: collapse; font-size: 14px;">
                <thead>
                    <tr>
                        { for COLUMN_ORDER.iter().map(|&column| html! {
                            <th>
                                <input
                                    placeholder="🔍"
                                    value={component.filters.get(column).cloned().unwrap_or_default()}
                                    oninput={link.callback(move |e: InputEvent| {
                                        let input: HtmlInputElement = e.target_unchecked_into();
                                        Msg::SetFilter(column, input.value())
                                    })}
                                    style="width: 100%;"
                                />
                            </th>
                        }) }
                    </tr>
                    <tr style="background: #eee;">
                        { for COLUMN_ORDER.iter().map(|&column| html! { <th>{ column }</th> }) }
                    </tr>
                </thead>
                <tbody>
                    if component.loading {
                        <tr>
                            <td colspan={COLUMN_ORDER.len().to_string()}>{ "読み込み中..." }</td>
                        </tr>
                    } else {
                        { for visible_rows(&component.rows, &component.filters).into_iter().map(|row| {
                            let row_clone = row.clone();
                            let ondblclick = link.callback(move |_: MouseEvent| {
                                Msg::RowActivated(row_clone.clone())
                            });
                            html! {
                                <tr
                                    {ondblclick}
                                    style={if fetching_detail {
                                        "pointer-events: none; opacity: 0.5;"
                                    } else {
                                        "cursor: pointer;"
                                    }}
                                >
                                    { for COLUMN_ORDER.iter().map(|&column| html! {
                                        <td>{ row.get(column).cloned().unwrap_or_default() }</td>
                                    }) }
                                </tr>
                            }
                        }) }
                    }
                </tbody>
            </table>

            { modal }
        </div>
    }
}

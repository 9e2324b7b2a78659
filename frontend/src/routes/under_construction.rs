use yew::{html, AttrValue, Component, Context, Html, Properties};

#[derive(Properties, PartialEq)]
pub struct UnderConstructionProps {
    pub title: AttrValue,
}

pub struct UnderConstruction;

impl Component for UnderConstruction {
    type Message = ();
    type Properties = UnderConstructionProps;

    fn create(_ctx: &Context<Self>) -> Self {
        Self
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        html! {
            <div>
                <h1>{ ctx.props().title.clone() }</h1>
                <p>{ "工事中です。" }</p>
            </div>
        }
    }
}

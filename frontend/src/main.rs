use crate::app::App;

mod api;
mod app;
mod components;
mod routes;
mod session;

fn main() {
    yew::Renderer::<App>::new().render();
}

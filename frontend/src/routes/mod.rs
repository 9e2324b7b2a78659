use yew::prelude::*;
use yew_router::prelude::*;

use crate::components::require_auth::RequireAuth;

pub mod home;
pub mod login;
pub mod training_search;
pub mod under_construction;

use home::Home;
use login::LoginPage;
use training_search::TrainingSearch;
use under_construction::UnderConstruction;

/// Client-visible navigation surface: one unauthenticated entry point and
/// the authenticated-only pages behind [`RequireAuth`].
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Login,
    #[at("/home")]
    Home,
    #[at("/trainingsearch")]
    TrainingSearch,
    #[at("/cancelrequest")]
    CancelRequest,
    #[at("/closerequest")]
    CloseRequest,
    #[not_found]
    #[at("/404")]
    NotFound,
}

pub fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Home => html! {
            <RequireAuth>
                <Home />
            </RequireAuth>
        },
        Route::TrainingSearch => html! {
            <RequireAuth>
                <TrainingSearch />
            </RequireAuth>
        },
        Route::CancelRequest => html! {
            <RequireAuth>
                <UnderConstruction title="キャンセル / 欠席申請" />
            </RequireAuth>
        },
        Route::CloseRequest => html! {
            <RequireAuth>
                <UnderConstruction title="不芳中止処理" />
            </RequireAuth>
        },
        Route::NotFound => html! { <UnderConstruction title="🚧" /> },
    }
}

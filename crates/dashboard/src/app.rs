//! Application root: router and global session wiring.

use crate::pages::{
    ApiKeysPage, AppCreatePage, AppDetailPage, AppsPage, AuthPage, GoogleCallbackPage, HomePage,
    ModelsPage, NotFoundPage, ProvidersPage, SettingsPage,
};
use gateway_frontend_common::auth::unauthorized::{
    clear_unauthorized_handler, redirect_to_login, set_unauthorized_handler,
};
use std::rc::Rc;
use yew::prelude::*;
use yew_router::prelude::*;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Root,
    #[at("/auth")]
    Auth,
    #[at("/auth/google/callback")]
    GoogleCallback,
    #[at("/dashboard")]
    Dashboard,
    #[at("/dashboard/providers")]
    Providers,
    #[at("/dashboard/models")]
    Models,
    #[at("/dashboard/apikeys")]
    ApiKeys,
    #[at("/dashboard/apps")]
    Apps,
    #[at("/dashboard/apps/create")]
    AppCreate,
    #[at("/dashboard/apps/:id")]
    AppDetail { id: String },
    #[at("/dashboard/settings")]
    Settings,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(route: Route) -> Html {
    match route {
        Route::Root => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Auth => html! { <AuthPage /> },
        Route::GoogleCallback => html! { <GoogleCallbackPage /> },
        Route::Dashboard => html! { <HomePage /> },
        Route::Providers => html! { <ProvidersPage /> },
        Route::Models => html! { <ModelsPage /> },
        Route::ApiKeys => html! { <ApiKeysPage /> },
        Route::Apps => html! { <AppsPage /> },
        Route::AppCreate => html! { <AppCreatePage /> },
        Route::AppDetail { id } => html! { <AppDetailPage {id} /> },
        Route::Settings => html! { <SettingsPage /> },
        Route::NotFound => html! { <NotFoundPage /> },
    }
}

#[function_component(App)]
pub fn app() -> Html {
    // Authorization failures anywhere in the app land on the sign-in screen.
    use_effect_with((), |_| {
        set_unauthorized_handler(Rc::new(redirect_to_login));
        clear_unauthorized_handler
    });

    html! {
        <BrowserRouter>
            <Switch<Route> render={switch} />
        </BrowserRouter>
    }
}

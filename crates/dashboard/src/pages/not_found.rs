use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="min-h-screen flex flex-col items-center justify-center bg-gray-50">
            <h1 class="text-3xl font-bold mb-2">{"404"}</h1>
            <p class="text-sm text-gray-500 mb-4">{"This page does not exist."}</p>
            <Link<Route> to={Route::Dashboard} classes="text-blue-600 hover:underline text-sm">
                {"Back to dashboard"}
            </Link<Route>>
        </div>
    }
}

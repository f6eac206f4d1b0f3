//! Dashboard landing screen.

use crate::app::Route;
use crate::components::DashboardLayout;
use gateway_client::types::UserProfile;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    html! {
        <DashboardLayout>
            <HomeContent />
        </DashboardLayout>
    }
}

#[function_component(HomeContent)]
fn home_content() -> Html {
    let user = use_context::<UserProfile>().expect("rendered inside DashboardLayout");

    let cards = [
        (Route::Apps, "Apps", "Configure chat-bot integrations and route them to models."),
        (Route::Providers, "Providers", "Store upstream provider API keys."),
        (Route::Models, "Models", "Browse the model catalog across providers."),
        (Route::ApiKeys, "API Keys", "Issue and revoke gateway API keys."),
    ];

    html! {
        <div>
            <h1 class="text-2xl font-bold mb-1">
                {format!("Welcome back, {}", user.firstname)}
            </h1>
            <p class="text-sm text-gray-500 mb-6">{"Manage your gateway from here."}</p>

            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                {cards.into_iter().map(|(route, title, blurb)| html! {
                    <Link<Route> to={route} classes="block bg-white rounded-lg border border-gray-200 p-5 hover:shadow">
                        <h2 class="font-semibold mb-1">{title}</h2>
                        <p class="text-sm text-gray-500">{blurb}</p>
                    </Link<Route>>
                }).collect::<Html>()}
            </div>
        </div>
    }
}

//! Protected-screen layout: session guard, sidebar, top bar.

use crate::components::{Sidebar, Spinner};
use gateway_client::types::UserProfile;
use gateway_frontend_common::services::AuthApiService;
use gateway_frontend_common::use_session_guard;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardLayoutProps {
    pub children: Children,
}

/// Wraps every protected screen. Renders a loading state until the session
/// guard resolves a user; children can read the profile from context.
#[function_component(DashboardLayout)]
pub fn dashboard_layout(props: &DashboardLayoutProps) -> Html {
    let user = use_session_guard();

    let on_logout = Callback::from(|_| {
        AuthApiService::new().logout();
    });

    let Some(user) = user else {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50">
                <Spinner />
            </div>
        };
    };

    html! {
        <div class="min-h-screen flex bg-gray-50">
            <Sidebar />
            <div class="flex-1 flex flex-col min-w-0">
                <header class="bg-white border-b border-gray-200 px-6 py-3 flex justify-between items-center">
                    <span class="text-sm text-gray-600">
                        {format!("{} {}", user.firstname, user.lastname)}
                    </span>
                    <button
                        onclick={on_logout}
                        class="px-3 py-1.5 text-sm font-medium text-gray-700 bg-gray-100 hover:bg-gray-200 rounded-md"
                    >
                        {"Logout"}
                    </button>
                </header>
                <main class="flex-1 overflow-y-auto p-6">
                    <ContextProvider<UserProfile> context={user}>
                        {props.children.clone()}
                    </ContextProvider<UserProfile>>
                </main>
            </div>
        </div>
    }
}

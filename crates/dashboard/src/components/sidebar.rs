//! Dashboard navigation sidebar.

use crate::app::Route;
use yew::prelude::*;
use yew_router::prelude::*;

struct NavItem {
    route: Route,
    label: &'static str,
}

fn nav_items() -> [NavItem; 6] {
    [
        NavItem { route: Route::Dashboard, label: "Overview" },
        NavItem { route: Route::Apps, label: "Apps" },
        NavItem { route: Route::Providers, label: "Providers" },
        NavItem { route: Route::Models, label: "Models" },
        NavItem { route: Route::ApiKeys, label: "API Keys" },
        NavItem { route: Route::Settings, label: "Settings" },
    ]
}

#[function_component(Sidebar)]
pub fn sidebar() -> Html {
    let current = use_route::<Route>();

    html! {
        <aside class="w-56 shrink-0 bg-gray-900 text-gray-100 flex flex-col">
            <div class="p-4 border-b border-gray-800">
                <span class="text-lg font-bold">{"LLM Gateway"}</span>
            </div>
            <nav class="flex-1 p-2 space-y-1">
                {nav_items().into_iter().map(|item| {
                    let active = current.as_ref() == Some(&item.route);
                    let class = if active {
                        "block px-3 py-2 rounded-md bg-gray-800 text-white text-sm font-medium"
                    } else {
                        "block px-3 py-2 rounded-md text-gray-300 hover:bg-gray-800 hover:text-white text-sm font-medium"
                    };
                    html! {
                        <Link<Route> to={item.route.clone()} classes={class}>
                            {item.label}
                        </Link<Route>>
                    }
                }).collect::<Html>()}
            </nav>
        </aside>
    }
}

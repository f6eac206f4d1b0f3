//! App listing screen.

use crate::app::Route;
use crate::components::{DashboardLayout, Spinner};
use gateway_client::types::AppSummary;
use gateway_frontend_common::AuthorizedApi;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

/// Case-insensitive name substring filter.
fn filter_apps<'a>(apps: &'a [AppSummary], query: &str) -> Vec<&'a AppSummary> {
    let query = query.trim().to_lowercase();
    apps.iter()
        .filter(|app| query.is_empty() || app.name.to_lowercase().contains(&query))
        .collect()
}

#[function_component(AppsPage)]
pub fn apps_page() -> Html {
    html! {
        <DashboardLayout>
            <AppsContent />
        </DashboardLayout>
    }
}

#[function_component(AppsContent)]
fn apps_content() -> Html {
    let apps = use_state(Vec::<AppSummary>::new);
    let loading = use_state(|| true);
    let error = use_state(|| None::<String>);
    let query = use_state(String::new);

    let reload = {
        let apps = apps.clone();
        let loading = loading.clone();
        let error = error.clone();
        Callback::from(move |_: ()| {
            let apps = apps.clone();
            let loading = loading.clone();
            let error = error.clone();
            spawn_local(async move {
                loading.set(true);
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.apps().await {
                        Ok(list) => apps.set(list),
                        Err(e) => error.set(Some(format!("Failed to fetch apps: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
                loading.set(false);
            });
        })
    };

    {
        let reload = reload.clone();
        use_effect_with((), move |_| reload.emit(()));
    }

    let on_query_input = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            query.set(element.value());
        })
    };

    let on_delete = {
        let error = error.clone();
        let reload = reload.clone();
        Callback::from(move |id: String| {
            let error = error.clone();
            let reload = reload.clone();
            spawn_local(async move {
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.delete_app(&id).await {
                        Ok(()) => reload.emit(()),
                        Err(e) => error.set(Some(format!("Failed to delete app: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        })
    };

    let visible = filter_apps(&apps, &query);

    html! {
        <div>
            <div class="flex justify-between items-center mb-4">
                <h1 class="text-2xl font-bold">{"Apps"}</h1>
                <Link<Route>
                    to={Route::AppCreate}
                    classes="px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-md hover:bg-blue-700"
                >
                    {"New App"}
                </Link<Route>>
            </div>

            if let Some(message) = (*error).clone() {
                <div class="mb-4 px-3 py-2 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
            }

            <input
                type="text"
                class="block w-full px-3 py-2 mb-4 border border-gray-300 rounded-md text-sm"
                placeholder="Search apps..."
                value={(*query).clone()}
                oninput={on_query_input}
            />

            if *loading {
                <Spinner />
            } else if visible.is_empty() {
                <p class="text-sm text-gray-500">
                    {if query.is_empty() {
                        "No apps configured yet.".to_string()
                    } else {
                        format!("No apps match '{}'", *query)
                    }}
                </p>
            } else {
                <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                    {visible.iter().map(|app| {
                        let delete = {
                            let id = app.id.clone();
                            let on_delete = on_delete.clone();
                            Callback::from(move |_| on_delete.emit(id.clone()))
                        };
                        html! {
                            <div key={app.id.clone()} class="bg-white rounded-lg border border-gray-200 p-4">
                                <div class="flex justify-between items-start mb-2">
                                    <Link<Route>
                                        to={Route::AppDetail { id: app.id.clone() }}
                                        classes="font-semibold text-blue-600 hover:underline"
                                    >
                                        {app.name.clone()}
                                    </Link<Route>>
                                    <button class="text-sm text-red-600 hover:underline" onclick={delete}>
                                        {"Delete"}
                                    </button>
                                </div>
                                <p class="text-xs text-gray-500 mb-2">
                                    {format!("{} · created {}", app.feature_type, app.created_at)}
                                </p>
                                <div class="flex flex-wrap gap-1">
                                    {app.supported_models.iter().map(|model| html! {
                                        <span class="px-2 py-0.5 rounded-full bg-gray-100 text-gray-600 text-xs">
                                            {model.clone()}
                                        </span>
                                    }).collect::<Html>()}
                                </div>
                            </div>
                        }
                    }).collect::<Html>()}
                </div>
            }
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn listing() -> Vec<AppSummary> {
        ["Support Bot", "Sales Assistant", "Docs Search"]
            .into_iter()
            .enumerate()
            .map(|(i, name)| AppSummary {
                id: format!("app-{i}"),
                name: name.to_string(),
                created_at: "2025-03-01T00:00:00Z".to_string(),
                feature_type: "webui".to_string(),
                supported_models: vec![],
            })
            .collect()
    }

    #[test]
    fn empty_query_matches_all() {
        assert_eq!(filter_apps(&listing(), "  ").len(), 3);
    }

    #[test]
    fn query_matches_substring_case_insensitively() {
        let apps = listing();
        let visible = filter_apps(&apps, "bot");
        assert_eq!(visible.len(), 1);
        assert_eq!(visible[0].name, "Support Bot");
    }
}

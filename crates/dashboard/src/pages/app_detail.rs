//! App detail screen with a chat preview.

use crate::components::{ChatPanel, DashboardLayout, Spinner};
use gateway_client::types::AppDetails;
use gateway_frontend_common::AuthorizedApi;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct AppDetailProps {
    pub id: String,
}

#[function_component(AppDetailPage)]
pub fn app_detail_page(props: &AppDetailProps) -> Html {
    html! {
        <DashboardLayout>
            <AppDetailContent id={props.id.clone()} />
        </DashboardLayout>
    }
}

#[function_component(AppDetailContent)]
fn app_detail_content(props: &AppDetailProps) -> Html {
    let app = use_state(|| None::<AppDetails>);
    let error = use_state(|| None::<String>);

    {
        let app = app.clone();
        let error = error.clone();
        use_effect_with(props.id.clone(), move |id| {
            let id = id.clone();
            spawn_local(async move {
                match AuthorizedApi::from_session() {
                    Ok(api) => match api.app(&id).await {
                        Ok(details) => app.set(Some(details)),
                        Err(e) => error.set(Some(format!("Failed to fetch app: {e}"))),
                    },
                    Err(e) => error.set(Some(e.to_string())),
                }
            });
        });
    }

    html! {
        <div>
            if let Some(message) = (*error).clone() {
                <div class="mb-4 px-3 py-2 rounded-md bg-red-50 text-red-700 text-sm">{message}</div>
            }

            if let Some(details) = (*app).clone() {
                <div class="mb-6">
                    <h1 class="text-2xl font-bold mb-1">{details.name.clone()}</h1>
                    <p class="text-sm text-gray-500">
                        {format!("{} · created {}", details.feature_type, details.created_at)}
                    </p>
                    if !details.instruction.is_empty() {
                        <p class="mt-2 text-sm text-gray-600">{details.instruction.clone()}</p>
                    }
                    <div class="flex flex-wrap gap-1 mt-2">
                        {details.supported_models.iter().map(|model| html! {
                            <span class="px-2 py-0.5 rounded-full bg-gray-100 text-gray-600 text-xs">
                                {model.clone()}
                            </span>
                        }).collect::<Html>()}
                    </div>
                </div>

                <h2 class="text-lg font-semibold mb-2">{"Preview"}</h2>
                <ChatPanel
                    welcome_message={
                        details.config.get("welcome_message")
                            .and_then(|value| value.as_str())
                            .unwrap_or("Hello! How can I help you today?")
                            .to_string()
                    }
                    assistant_name={details.name.clone()}
                />
            } else if error.is_none() {
                <Spinner />
            }
        </div>
    }
}

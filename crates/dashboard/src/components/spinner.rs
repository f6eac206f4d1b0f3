use yew::prelude::*;

/// Loading spinner shown while a screen resolves its data.
#[function_component(Spinner)]
pub fn spinner() -> Html {
    html! {
        <div class="flex items-center justify-center p-4">
            <div class="animate-spin rounded-full h-8 w-8 border-b-2 border-blue-600"></div>
        </div>
    }
}

//! Simulated chat panel for app previews.
//!
//! Keeps an append-only message list seeded with the app's welcome entry.
//! No model is called: submitting input schedules a canned reply after a
//! fixed one-second delay. Appends go through a reducer so a delayed reply
//! lands on the latest list instead of a snapshot taken at submit time.
//! Placeholder until apps are wired to the gateway's inference path.

use gloo::timers::callback::Timeout;
use std::rc::Rc;
use web_sys::HtmlInputElement;
use yew::prelude::*;

const REPLY_DELAY_MS: u32 = 1_000;

#[derive(Clone, PartialEq)]
pub enum ChatRole {
    User,
    Assistant,
}

#[derive(Clone, PartialEq)]
pub struct ChatEntry {
    pub role: ChatRole,
    pub content: String,
}

#[derive(Clone, PartialEq)]
struct ChatLog {
    entries: Vec<ChatEntry>,
}

enum ChatAction {
    Append(ChatEntry),
}

impl Reducible for ChatLog {
    type Action = ChatAction;

    fn reduce(self: Rc<Self>, action: ChatAction) -> Rc<Self> {
        match action {
            ChatAction::Append(entry) => {
                let mut entries = self.entries.clone();
                entries.push(entry);
                Rc::new(Self { entries })
            }
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ChatPanelProps {
    /// Seed entry shown as the assistant's opening message.
    #[prop_or_else(|| "Hello! How can I help you today?".to_string())]
    pub welcome_message: String,
    #[prop_or_else(|| "Assistant".to_string())]
    pub assistant_name: String,
}

#[function_component(ChatPanel)]
pub fn chat_panel(props: &ChatPanelProps) -> Html {
    let log = use_reducer(|| ChatLog {
        entries: vec![ChatEntry {
            role: ChatRole::Assistant,
            content: props.welcome_message.clone(),
        }],
    });
    let input = use_state(String::new);

    let oninput = {
        let input = input.clone();
        Callback::from(move |e: InputEvent| {
            let element: HtmlInputElement = e.target_unchecked_into();
            input.set(element.value());
        })
    };

    let onsubmit = {
        let log = log.clone();
        let input = input.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = input.trim().to_string();
            if text.is_empty() {
                return;
            }
            input.set(String::new());

            log.dispatch(ChatAction::Append(ChatEntry {
                role: ChatRole::User,
                content: text.clone(),
            }));

            let log = log.clone();
            Timeout::new(REPLY_DELAY_MS, move || {
                log.dispatch(ChatAction::Append(ChatEntry {
                    role: ChatRole::Assistant,
                    content: format!(
                        "You said: \"{text}\". A configured model will answer here once this app is connected to the gateway."
                    ),
                }));
            })
            .forget();
        })
    };

    html! {
        <div class="flex flex-col h-96 bg-white rounded-lg border border-gray-200">
            <div class="px-4 py-2 border-b border-gray-200 text-sm font-medium text-gray-700">
                {props.assistant_name.clone()}
            </div>
            <div class="flex-1 overflow-y-auto p-4 space-y-3">
                {log.entries.iter().map(|entry| {
                    let (row, bubble) = match entry.role {
                        ChatRole::User => (
                            "flex justify-end",
                            "max-w-md px-3 py-2 rounded-lg bg-blue-600 text-white text-sm",
                        ),
                        ChatRole::Assistant => (
                            "flex justify-start",
                            "max-w-md px-3 py-2 rounded-lg bg-gray-100 text-gray-900 text-sm",
                        ),
                    };
                    html! {
                        <div class={row}>
                            <div class={bubble}>{entry.content.clone()}</div>
                        </div>
                    }
                }).collect::<Html>()}
            </div>
            <form class="p-3 border-t border-gray-200 flex gap-2" {onsubmit}>
                <input
                    type="text"
                    class="flex-1 px-3 py-2 border border-gray-300 rounded-md text-sm focus:outline-none focus:ring-1 focus:ring-blue-500"
                    placeholder="Type a message..."
                    value={(*input).clone()}
                    {oninput}
                />
                <button
                    type="submit"
                    class="px-4 py-2 bg-blue-600 text-white text-sm font-medium rounded-md hover:bg-blue-700"
                >
                    {"Send"}
                </button>
            </form>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn user(text: &str) -> ChatEntry {
        ChatEntry {
            role: ChatRole::User,
            content: text.into(),
        }
    }

    fn assistant(text: &str) -> ChatEntry {
        ChatEntry {
            role: ChatRole::Assistant,
            content: text.into(),
        }
    }

    #[test]
    fn delayed_reply_appends_to_the_latest_list() {
        let log = Rc::new(ChatLog {
            entries: vec![assistant("welcome")],
        });
        let log = log.reduce(ChatAction::Append(user("a")));
        // A second message lands before the first reply fires.
        let log = log.reduce(ChatAction::Append(user("b")));
        let log = log.reduce(ChatAction::Append(assistant("reply to a")));

        let contents: Vec<&str> = log.entries.iter().map(|e| e.content.as_str()).collect();
        assert_eq!(contents, ["welcome", "a", "b", "reply to a"]);
    }

    #[test]
    fn append_never_drops_earlier_entries() {
        let mut log = Rc::new(ChatLog {
            entries: vec![assistant("welcome")],
        });
        for i in 0..5 {
            log = log.reduce(ChatAction::Append(user(&format!("m{i}"))));
        }
        assert_eq!(log.entries.len(), 6);
        assert_eq!(log.entries[0].content, "welcome");
        assert_eq!(log.entries[5].content, "m4");
    }
}

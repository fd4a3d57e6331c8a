use crate::api;
use crate::components::passage::Passage;
use crate::store::{Action, StoreContext};
use shared::prompt::{build_request, character_summary};
use shared::transcript::Ticket;
use wasm_bindgen_futures::JsFuture;
use yew::prelude::*;

#[function_component(StoryStage)]
pub fn story_stage() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let tickets = use_mut_ref(|| 0 as Ticket);

    let on_generate = {
        let store = store.clone();
        let tickets = tickets.clone();
        Callback::from(move |_: MouseEvent| {
            let Some(request) = build_request(store.roster.characters(), &store.selection) else {
                return;
            };

            let ticket = {
                let mut last = tickets.borrow_mut();
                *last += 1;
                *last
            };
            store.dispatch(Action::BeginGeneration(ticket));

            let store = store.clone();
            yew::platform::spawn_local(async move {
                match api::generate_story(&request).await {
                    Ok(response) => store.dispatch(Action::FinishGeneration {
                        ticket,
                        content: response.assistant_message,
                    }),
                    Err(e) => {
                        tracing::error!("Error generating story: {}", e);
                        store.dispatch(Action::AbandonGeneration(ticket));
                    }
                }
            });
        })
    };

    let latest = store.transcript.latest_story().map(|s| s.to_string());

    let on_copy = {
        let content = latest.clone().unwrap_or_default();
        Callback::from(move |_: MouseEvent| {
            let content = content.clone();
            yew::platform::spawn_local(async move {
                if let Some(window) = web_sys::window() {
                    let clipboard = window.navigator().clipboard();
                    let promise = clipboard.write_text(&content);
                    let _ = JsFuture::from(promise).await;
                }
            });
        })
    };

    html! {
        <section class="story-stage">
            <button
                class="btn btn-primary generate-btn"
                disabled={!store.can_generate()}
                onclick={on_generate}
            >
                if store.transcript.is_generating() {
                    {"Generating..."}
                } else {
                    {"Generate Story"}
                }
            </button>

            <div class="panel">
                <h3 class="panel-title">{"Character Summaries"}</h3>
                { for store.roster.characters().iter().map(|char| html! {
                    <div key={char.id} class="char-summary">{character_summary(char)}</div>
                })}
            </div>

            if let Some(text) = latest {
                <div class="panel story-output">
                    <div class="story-actions">
                        <button class="message-action-btn" onclick={on_copy} title="Copy">
                            <svg viewBox="0 0 24 24" width="16" height="16" fill="currentColor">
                                <path d="M16 1H4c-1.1 0-2 .9-2 2v14h2V3h12V1zm3 4H8c-1.1 0-2 .9-2 2v14c0 1.1.9 2 2 2h11c1.1 0 2-.9 2-2V7c0-1.1-.9-2-2-2zm0 16H8V7h11v14z"/>
                            </svg>
                        </button>
                    </div>
                    <Passage text={text} />
                </div>
            }
        </section>
    }
}

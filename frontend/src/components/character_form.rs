use crate::store::{Action, StoreContext};
use shared::models::DraftField;
use web_sys::js_sys;
use yew::prelude::*;

#[function_component(CharacterForm)]
pub fn character_form() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");
    let draft = store.roster.draft().clone();
    let is_editing = store.roster.editing().is_some();

    let on_field = {
        let store = store.clone();
        move |field: DraftField| {
            let store = store.clone();
            Callback::from(move |value: String| {
                store.dispatch(Action::SetDraftField { field, value })
            })
        }
    };
    let on_name = on_field(DraftField::Name);
    let on_description = on_field(DraftField::Description);
    let on_personality = on_field(DraftField::Personality);

    let on_submit = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| {
            store.dispatch(Action::SubmitDraft {
                now_ms: js_sys::Date::now() as i64,
            });
        })
    };

    let on_cancel = {
        let store = store.clone();
        Callback::from(move |_: MouseEvent| store.dispatch(Action::CancelEdit))
    };

    html! {
        <section class="panel">
            <h3 class="panel-title">{"Manage Characters"}</h3>

            <div class="form-group">
                <input class="form-input" type="text" placeholder="Name" value={draft.name}
                    oninput={Callback::from(move |e: InputEvent| {
                        let i: web_sys::HtmlInputElement = e.target_unchecked_into();
                        on_name.emit(i.value());
                    })} />
            </div>

            <div class="form-group">
                <textarea class="form-textarea" rows="2" placeholder="Description" value={draft.description}
                    oninput={Callback::from(move |e: InputEvent| {
                        let i: web_sys::HtmlTextAreaElement = e.target_unchecked_into();
                        on_description.emit(i.value());
                    })} />
            </div>

            <div class="form-group">
                <input class="form-input" type="text" placeholder="Personality" value={draft.personality}
                    oninput={Callback::from(move |e: InputEvent| {
                        let i: web_sys::HtmlInputElement = e.target_unchecked_into();
                        on_personality.emit(i.value());
                    })} />
            </div>

            <div class="form-actions">
                if is_editing {
                    <button class="btn btn-secondary" onclick={on_cancel}>{"Cancel"}</button>
                }
                <button class="btn btn-primary" onclick={on_submit}>
                    { if is_editing { "Update Character" } else { "Add Character" } }
                </button>
            </div>
        </section>
    }
}

use crate::store::{Action, StoreContext};
use shared::models::CharacterId;
use yew::prelude::*;

#[function_component(CharacterList)]
pub fn character_list() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let on_edit = {
        let store = store.clone();
        Callback::from(move |id: CharacterId| store.dispatch(Action::BeginEdit(id)))
    };

    let on_delete = {
        let store = store.clone();
        Callback::from(move |id: CharacterId| store.dispatch(Action::DeleteCharacter(id)))
    };

    let editing = store.roster.editing();

    html! {
        <section class="panel">
            <h4 class="section-label">{"Character List"}</h4>
            <ul class="char-list">
                if store.roster.characters().is_empty() {
                    <li class="empty-state">{"No characters yet."}</li>
                }
                { for store.roster.characters().iter().map(|char| {
                    let id = char.id;
                    let on_edit_click = on_edit.clone();
                    let on_delete_click = on_delete.clone();
                    let is_active = Some(id) == editing;

                    html! {
                        <li key={id} class={classes!("char-item", is_active.then_some("active"))}>
                            <div class="avatar">{char.name.chars().next().unwrap_or('?')}</div>
                            <div class="char-info">
                                <strong class="char-name">{&char.name}</strong>
                                {" - "}{&char.description}
                                <span class="char-personality">{format!(" (Personality: {})", char.personality)}</span>
                            </div>
                            <button class="link-btn edit-btn" onclick={move |_| on_edit_click.emit(id)}>{"Edit"}</button>
                            <button class="link-btn delete-btn" onclick={move |_| on_delete_click.emit(id)}>{"Delete"}</button>
                        </li>
                    }
                })}
            </ul>
        </section>
    }
}

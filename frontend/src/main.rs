mod api;
mod components;
mod logging;
mod store;

use components::character_form::CharacterForm;
use components::character_list::CharacterList;
use components::story_options::StoryOptions;
use components::story_stage::StoryStage;
use store::{State, StoreContext};
use yew::prelude::*;

#[function_component(App)]
fn app() -> Html {
    let store = use_reducer(State::default);

    html! {
        <ContextProvider<StoreContext> context={store.clone()}>
            <main class="app-container">
                <header>
                    <h2 class="app-title">{"Story Telling App"}</h2>
                    <p class="app-subtitle">{"Customize the story by selecting the genre and tone."}</p>
                </header>
                <CharacterForm />
                <CharacterList />
                <StoryOptions />
                <StoryStage />
            </main>
        </ContextProvider<StoreContext>>
    }
}

fn main() {
    #[cfg(target_arch = "wasm32")]
    logging::init();
    yew::Renderer::<App>::new().render();
}

use crate::store::{Action, StoreContext};
use shared::models::{Genre, Tone};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
struct OptionGroupProps {
    title: AttrValue,
    name: AttrValue,
    /// (value, emoji, checked)
    options: Vec<(&'static str, &'static str, bool)>,
    on_pick: Callback<usize>,
}

/// One radio group; emits the index of the picked option.
#[function_component(OptionGroup)]
fn option_group(props: &OptionGroupProps) -> Html {
    html! {
        <section class="panel option-group">
            <h3 class="panel-title">{props.title.clone()}</h3>
            <div class="option-row">
                { for props.options.iter().enumerate().map(|(idx, (value, emoji, checked))| {
                    let on_pick = props.on_pick.clone();
                    html! {
                        <div key={*value} class="option-card">
                            <input
                                id={*value}
                                type="radio"
                                name={props.name.clone()}
                                value={*value}
                                checked={*checked}
                                onchange={move |_: Event| on_pick.emit(idx)}
                            />
                            <label for={*value}>{format!("{} {}", emoji, value)}</label>
                        </div>
                    }
                })}
            </div>
        </section>
    }
}

#[function_component(StoryOptions)]
pub fn story_options() -> Html {
    let store = use_context::<StoreContext>().expect("Store context not found");

    let on_genre = {
        let store = store.clone();
        Callback::from(move |idx: usize| {
            if let Some(genre) = Genre::ALL.get(idx) {
                store.dispatch(Action::SelectGenre(*genre));
            }
        })
    };

    let on_tone = {
        let store = store.clone();
        Callback::from(move |idx: usize| {
            if let Some(tone) = Tone::ALL.get(idx) {
                store.dispatch(Action::SelectTone(*tone));
            }
        })
    };

    let genres: Vec<_> = Genre::ALL
        .iter()
        .map(|g| (g.label(), g.emoji(), store.selection.genre == Some(*g)))
        .collect();
    let tones: Vec<_> = Tone::ALL
        .iter()
        .map(|t| (t.label(), t.emoji(), store.selection.tone == Some(*t)))
        .collect();

    html! {
        <>
            <OptionGroup title="Genre" name="genre" options={genres} on_pick={on_genre} />
            <OptionGroup title="Tones" name="tone" options={tones} on_pick={on_tone} />
        </>
    }
}

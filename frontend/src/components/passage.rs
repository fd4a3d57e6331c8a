use pulldown_cmark::{Event, Options, Parser, Tag};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct PassageProps {
    pub text: AttrValue,
}

/// Generated prose. Models often emit light markdown (emphasis, scene
/// breaks, the odd heading), so it is rendered rather than shown raw.
#[function_component(Passage)]
pub fn passage(props: &PassageProps) -> Html {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_SMART_PUNCTUATION);

    let mut events = Parser::new_ext(&props.text, options);
    html! { <div class="passage">{ render_block(&mut events) }</div> }
}

fn render_block<'a>(events: &mut impl Iterator<Item = Event<'a>>) -> Html {
    let mut nodes = Vec::new();

    while let Some(event) = events.next() {
        match event {
            Event::Start(tag) => nodes.push(render_tag(tag, events)),
            Event::End(_) => break,
            Event::SoftBreak => nodes.push(html! { " " }),
            Event::HardBreak => nodes.push(html! { <br/> }),
            // A thematic break is a scene change in a story.
            Event::Rule => nodes.push(html! { <hr class="scene-break"/> }),
            other => {
                if let Some(text) = leaf_text(&other) {
                    nodes.push(html! { {text} });
                }
            }
        }
    }

    html! { { for nodes } }
}

/// Text carried by a leaf event. Raw HTML from the model is shown as typed,
/// never injected.
fn leaf_text<'a>(event: &'a Event<'_>) -> Option<&'a str> {
    match event {
        Event::Text(text) | Event::Code(text) | Event::Html(text) | Event::InlineHtml(text) => {
            Some(text.as_ref())
        }
        _ => None,
    }
}

fn render_tag<'a>(tag: Tag<'a>, events: &mut impl Iterator<Item = Event<'a>>) -> Html {
    let content = render_block(events);
    match tag {
        Tag::Paragraph => html! { <p>{content}</p> },
        Tag::Heading { .. } => html! { <h4 class="passage-heading">{content}</h4> },
        Tag::BlockQuote(_) => html! { <blockquote>{content}</blockquote> },
        Tag::List(Some(start)) => html! { <ol start={start.to_string()}>{content}</ol> },
        Tag::List(None) => html! { <ul>{content}</ul> },
        Tag::Item => html! { <li>{content}</li> },
        Tag::Emphasis => html! { <em>{content}</em> },
        Tag::Strong => html! { <strong>{content}</strong> },
        Tag::Strikethrough => html! { <del>{content}</del> },
        // Links, images and code blocks are flattened to their text.
        _ => content,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn visible_text(markdown: &str) -> String {
        Parser::new(markdown)
            .filter_map(|e| leaf_text(&e).map(str::to_string))
            .collect()
    }

    #[test]
    fn inline_html_is_kept_as_text() {
        let text = visible_text("She leaned in, <whisper>run</whisper>, and smiled.");
        assert!(text.contains("<whisper>"));
        assert!(text.contains("run"));
        assert!(text.contains("</whisper>"));
    }

    #[test]
    fn stray_angle_brackets_survive() {
        assert_eq!(visible_text("I <3 dragons"), "I <3 dragons");
    }

    #[test]
    fn block_html_is_kept_as_text() {
        let text = visible_text("<aside>The narrator pauses.</aside>\n\nOnward.");
        assert!(text.contains("<aside>"));
        assert!(text.contains("Onward."));
    }
}

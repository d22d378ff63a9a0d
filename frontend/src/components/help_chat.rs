use web_sys::HtmlInputElement;
use yew::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Topic {
    Greeting,
    Price,
    Coverage,
    ResponseTime,
    Fallback,
}

// First match wins, so the more specific topics come first.
const KEYWORDS: &[(Topic, &[&str])] = &[
    (Topic::Price, &["price", "cost", "how much", "fee", "quote", "سعر", "كم", "تكلفة"]),
    (Topic::ResponseTime, &["how long", "fast", "eta", "minutes", "when", "متى", "وقت", "سريع"]),
    (Topic::Coverage, &["where", "area", "city", "cover", "location", "وين", "منطقة", "مدينة"]),
    (Topic::Greeting, &["hello", "hi", "hey", "salam", "سلام", "مرحبا", "هلا"]),
];

/// Arabic writes the definite article and some particles as part of the
/// word ("السعر", "بالمنطقة"), so each word is also tried without them.
const ARABIC_PREFIXES: &[&str] = &["وال", "بال", "فال", "لل", "ال"];

fn word_forms(word: &str) -> Vec<&str> {
    let mut forms = vec![word];
    if let Some(stem) = ARABIC_PREFIXES.iter().find_map(|p| word.strip_prefix(p)) {
        if !stem.is_empty() {
            forms.push(stem);
        }
    }
    forms
}

pub fn classify(input: &str) -> Topic {
    let lowered = input.to_lowercase();
    let words: Vec<&str> = lowered
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .flat_map(word_forms)
        .collect();
    KEYWORDS
        .iter()
        .find(|(_, keys)| {
            keys.iter().any(|key| {
                if key.contains(' ') {
                    lowered.contains(key)
                } else {
                    words.iter().any(|w| w == key)
                }
            })
        })
        .map(|(topic, _)| *topic)
        .unwrap_or(Topic::Fallback)
}

pub fn reply_for(input: &str, phone: &str) -> String {
    match classify(input) {
        Topic::Greeting => "Hello! Tell us where you are and what happened to the car.".to_string(),
        Topic::Price => "Prices start from the base fee plus a per-km rate. The estimator on this page gives a quick figure.".to_string(),
        Topic::Coverage => "We cover the whole city and the highways around it, and tow between cities too.".to_string(),
        Topic::ResponseTime => "Inside the city a truck usually reaches you within 30 minutes.".to_string(),
        Topic::Fallback => format!("For anything else call us directly at {}.", phone),
    }
}

#[derive(Clone, PartialEq)]
struct Line {
    from_visitor: bool,
    text: String,
}

#[derive(Properties, PartialEq)]
pub struct HelpChatProps {
    pub phone: String,
}

#[function_component(HelpChat)]
pub fn help_chat(props: &HelpChatProps) -> Html {
    let open = use_state(|| false);
    let draft = use_state(String::new);
    let lines = use_state(Vec::<Line>::new);

    let toggle = {
        let open = open.clone();
        Callback::from(move |_: MouseEvent| open.set(!*open))
    };

    let oninput = {
        let draft = draft.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            draft.set(input.value());
        })
    };

    let onsubmit = {
        let draft = draft.clone();
        let lines = lines.clone();
        let phone = props.phone.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let text = draft.trim().to_string();
            if text.is_empty() {
                return;
            }
            let mut next = (*lines).clone();
            next.push(Line { from_visitor: true, text: text.clone() });
            next.push(Line { from_visitor: false, text: reply_for(&text, &phone) });
            lines.set(next);
            draft.set(String::new());
        })
    };

    html! {
        <div class={classes!("help-chat", (*open).then(|| "open"))}>
            <button class="help-chat-toggle" onclick={toggle}>
                { if *open { "✕" } else { "❔" } }
            </button>
            if *open {
                <div class="help-chat-panel">
                    <div class="help-chat-lines">
                        { for lines.iter().map(|line| html! {
                            <p class={if line.from_visitor { "visitor" } else { "bot" }}>{ &line.text }</p>
                        }) }
                    </div>
                    <form {onsubmit}>
                        <input
                            type="text"
                            placeholder="Ask about price, area, arrival time..."
                            value={(*draft).clone()}
                            {oninput}
                        />
                        <button type="submit">{"Send"}</button>
                    </form>
                </div>
            }
        </div>
    }
}

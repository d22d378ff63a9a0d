use yew::prelude::*;
use web_sys::MouseEvent;
use yew::Properties;

use crate::content::FAQ;

#[derive(Properties, PartialEq)]
struct FaqItemProps {
    question: &'static str,
    answer: &'static str,
}

#[function_component(FaqItem)]
fn faq_item(props: &FaqItemProps) -> Html {
    let is_open = use_state(|| false);

    let toggle = {
        let is_open = is_open.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            is_open.set(!*is_open);
        })
    };

    html! {
        <div class={classes!("faq-item", if *is_open { "open" } else { "" })}>
            <button class="faq-question" onclick={toggle} aria-expanded={(*is_open).to_string()}>
                <span class="question-text">{props.question}</span>
                <span class="toggle-icon">{if *is_open { "−" } else { "+" }}</span>
            </button>
            if *is_open {
                <div class="faq-answer">
                    <p>{props.answer}</p>
                </div>
            }
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct FaqProps {
    pub dark: bool,
}

#[function_component(Faq)]
pub fn faq(props: &FaqProps) -> Html {
    html! {
        <section id="faq" class={classes!("faq-section", if props.dark { "dark" } else { "light" })}>
            <h2>{"Frequently Asked Questions"}</h2>
            { for FAQ.iter().map(|entry| html! {
                <FaqItem question={entry.question} answer={entry.answer} />
            }) }
        </section>
    }
}

use yew::prelude::*;

use crate::components::theme::Theme;
use crate::contact::{self, BrowserNavigator};
use crate::content::{ContactButtons, SiteText};

#[derive(Properties, PartialEq)]
pub struct HeroProps {
    pub site: SiteText,
    pub buttons: ContactButtons,
}

#[function_component(Hero)]
pub fn hero(props: &HeroProps) -> Html {
    let theme = use_context::<Theme>();
    let dark = theme.as_ref().map(|t| t.dark).unwrap_or(true);

    let call = {
        let phone = props.buttons.phone.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            contact::call_phone(&phone, &BrowserNavigator);
        })
    };
    let whatsapp = {
        let channel = props.buttons.whatsapp.clone();
        Callback::from(move |e: MouseEvent| {
            e.prevent_default();
            contact::open_whatsapp(&channel, &BrowserNavigator);
        })
    };
    let toggle_theme = {
        let theme = theme.clone();
        Callback::from(move |_: MouseEvent| {
            if let Some(theme) = &theme {
                theme.toggle.emit(());
            }
        })
    };

    html! {
        <header class={classes!("hero", if dark { "dark" } else { "light" })}>
            <nav class="hero-nav">
                <span class="hero-brand">{ &props.site.title }</span>
                <button class="theme-toggle" onclick={toggle_theme} aria-label="Switch colour theme">
                    { if dark { "☀️" } else { "🌙" } }
                </button>
            </nav>
            <div class="hero-content">
                <h1>{ &props.site.title }</h1>
                <p class="hero-subtitle">{ &props.site.subtitle }</p>
                <p class="hero-description">{ &props.site.description }</p>
                <div class="hero-actions">
                    if props.buttons.phone.enabled {
                        <a class="hero-call" href={contact::tel_uri(&props.buttons.phone).unwrap_or_default()} onclick={call}>
                            { format!("📞 {}", props.buttons.phone.text) }
                        </a>
                    }
                    if props.buttons.whatsapp.enabled {
                        <a class="hero-whatsapp" href="#" onclick={whatsapp}>
                            { format!("💬 {}", props.buttons.whatsapp.text) }
                        </a>
                    }
                </div>
            </div>
        </header>
    }
}

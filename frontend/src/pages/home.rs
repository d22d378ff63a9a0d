use yew::prelude::*;

use crate::components::help_chat::HelpChat;
use crate::components::site::SiteContent;
use crate::components::theme::Theme;
use crate::content::SiteBundle;
use crate::pages::estimator::Estimator;
use crate::pages::faq::Faq;
use crate::pages::hero::Hero;
use crate::pages::services::Services;
use crate::pages::testimonials::Testimonials;
use crate::storage::StoreHandle;
use crate::widget::FloatingContact;

#[derive(Properties, PartialEq)]
pub struct HomeProps {
    pub store: StoreHandle,
}

#[function_component(Home)]
pub fn home(props: &HomeProps) -> Html {
    let content = use_context::<SiteContent>();
    let dark = use_context::<Theme>().map(|t| t.dark).unwrap_or(true);

    // Scroll to top only on initial mount
    use_effect_with_deps(
        move |_| {
            if let Some(window) = web_sys::window() {
                window.scroll_to_with_x_and_y(0.0, 0.0);
            }
            || ()
        },
        (),
    );

    let bundle: SiteBundle = content
        .map(|c| (*c.bundle).clone())
        .unwrap_or_default();

    html! {
        <main class="landing">
            <Hero site={bundle.site.clone()} buttons={bundle.contact_buttons.clone()} />
            <Services services={bundle.services.clone()} {dark} />
            <Estimator {dark} />
            <Testimonials {dark} />
            <Faq {dark} />
            <footer class={classes!("site-footer", if dark { "dark" } else { "light" })}>
                <p>{ &bundle.site.title }</p>
                <p>{ format!("24/7: {}", bundle.site.phone) }</p>
            </footer>
            <HelpChat phone={bundle.site.phone.clone()} />
            <FloatingContact buttons={bundle.contact_buttons.clone()} store={props.store.clone()} {dark} />
        </main>
    }
}

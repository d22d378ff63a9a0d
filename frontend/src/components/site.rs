use std::rc::Rc;

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::components::toast::{ToastKind, Toasts};
use crate::config;
use crate::content::SiteBundle;

/// Configuration shared by every section, fetched once per page load.
#[derive(Clone, PartialEq)]
pub struct SiteContent {
    pub bundle: Rc<SiteBundle>,
}

#[derive(Properties, PartialEq)]
pub struct SiteContentProviderProps {
    pub children: Children,
}

#[function_component(SiteContentProvider)]
pub fn site_content_provider(props: &SiteContentProviderProps) -> Html {
    let content = use_state(|| SiteContent {
        bundle: Rc::new(SiteBundle::default()),
    });
    let toasts = use_context::<Toasts>();

    {
        let content = content.clone();
        use_effect_with_deps(
            move |_| {
                spawn_local(async move {
                    let (bundle, complete) = config::load_site_bundle().await;
                    if !complete && cfg!(debug_assertions) {
                        if let Some(toasts) = toasts {
                            toasts.push(ToastKind::Warning, "Site configuration unavailable, showing defaults");
                        }
                    }
                    content.set(SiteContent {
                        bundle: Rc::new(bundle),
                    });
                });
                || ()
            },
            (),
        );
    }

    html! {
        <ContextProvider<SiteContent> context={(*content).clone()}>
            { for props.children.iter() }
        </ContextProvider<SiteContent>>
    }
}

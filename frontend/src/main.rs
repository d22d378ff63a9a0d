use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, Level};

mod config;
mod contact;
mod content;
mod fallback;
mod pricing;
mod storage;
mod widget;
mod components {
    pub mod help_chat;
    pub mod site;
    pub mod theme;
    pub mod toast;
}
mod pages {
    pub mod estimator;
    pub mod faq;
    pub mod hero;
    pub mod home;
    pub mod services;
    pub mod testimonials;
}

use components::{
    site::SiteContentProvider,
    theme::ThemeProvider,
    toast::ToastProvider,
};
use pages::home::Home;
use storage::StoreHandle;

#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

fn switch(routes: Route, store: StoreHandle) -> Html {
    match routes {
        Route::Home => {
            info!("Rendering Home page");
            html! { <Home {store} /> }
        },
        Route::NotFound => {
            info!("Unknown path, redirecting home");
            html! { <Redirect<Route> to={Route::Home} /> }
        },
    }
}

#[function_component]
fn App() -> Html {
    // One store for the whole app so the handle compares equal across renders.
    let store = use_state(StoreHandle::default);

    let render = {
        let store = (*store).clone();
        move |routes: Route| switch(routes, store.clone())
    };

    html! {
        <BrowserRouter>
            <ToastProvider>
                <SiteContentProvider>
                    <ThemeProvider store={(*store).clone()}>
                        <Switch<Route> {render} />
                    </ThemeProvider>
                </SiteContentProvider>
            </ToastProvider>
        </BrowserRouter>
    }
}

fn main() {
    // Panics replace the page with the error screen
    fallback::install_panic_fallback();

    // Initialize logging
    if console_log::init_with_level(Level::Info).is_err() {
        gloo_console::warn!("console logger already initialised");
    }

    info!("Starting application");
    yew::Renderer::<App>::new().render();
}

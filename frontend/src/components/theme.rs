use log::warn;
use yew::prelude::*;

use crate::storage::{KeyValueStore, StoreHandle};

pub const THEME_KEY: &str = "theme";

#[derive(Clone, PartialEq)]
pub struct Theme {
    pub dark: bool,
    pub toggle: Callback<()>,
}

impl Theme {
    pub fn class(&self) -> &'static str {
        if self.dark {
            "theme-dark"
        } else {
            "theme-light"
        }
    }
}

/// Dark unless the visitor picked light before.
pub fn load_dark(store: &dyn KeyValueStore) -> bool {
    match store.get(THEME_KEY) {
        Ok(Some(value)) => value != "light",
        Ok(None) => true,
        Err(e) => {
            warn!("could not read theme: {}", e);
            true
        }
    }
}

pub fn save_dark(store: &dyn KeyValueStore, dark: bool) {
    let value = if dark { "dark" } else { "light" };
    if let Err(e) = store.set(THEME_KEY, value) {
        warn!("could not persist theme: {}", e);
    }
}

#[derive(Properties, PartialEq)]
pub struct ThemeProviderProps {
    pub store: StoreHandle,
    pub children: Children,
}

#[function_component(ThemeProvider)]
pub fn theme_provider(props: &ThemeProviderProps) -> Html {
    let dark = {
        let store = props.store.clone();
        use_state(move || load_dark(&*store))
    };

    let toggle = {
        let dark = dark.clone();
        let store = props.store.clone();
        Callback::from(move |_| {
            let next = !*dark;
            save_dark(&*store, next);
            dark.set(next);
        })
    };

    let theme = Theme { dark: *dark, toggle };

    html! {
        <ContextProvider<Theme> context={theme.clone()}>
            <div class={classes!("app-root", theme.class())}>
                { for props.children.iter() }
            </div>
        </ContextProvider<Theme>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn defaults_to_dark() {
        assert!(load_dark(&MemoryStore::new()));
        assert!(load_dark(&MemoryStore::unavailable()));
    }

    #[test]
    fn remembers_light_choice() {
        let store = MemoryStore::new();
        save_dark(&store, false);
        assert!(!load_dark(&store));
        save_dark(&store, true);
        assert!(load_dark(&store));
    }
}

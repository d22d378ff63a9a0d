use std::rc::Rc;

use gloo_timers::callback::Timeout;
use yew::prelude::*;

pub const TOAST_LIFETIME_MS: u32 = 4000;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Toast {
    pub id: u32,
    pub kind: ToastKind,
    pub text: String,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ToastList {
    pub toasts: Vec<Toast>,
}

pub enum ToastAction {
    Push(Toast),
    Dismiss(u32),
}

impl Reducible for ToastList {
    type Action = ToastAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ToastAction::Push(toast) => next.toasts.push(toast),
            ToastAction::Dismiss(id) => next.toasts.retain(|t| t.id != id),
        }
        Rc::new(next)
    }
}

/// Handle given to the rest of the app through context.
#[derive(Clone, PartialEq)]
pub struct Toasts {
    push: Callback<(ToastKind, String)>,
}

impl Toasts {
    pub fn push(&self, kind: ToastKind, text: impl Into<String>) {
        self.push.emit((kind, text.into()));
    }
}

#[derive(Properties, PartialEq)]
pub struct ToastProviderProps {
    pub children: Children,
}

#[function_component(ToastProvider)]
pub fn toast_provider(props: &ToastProviderProps) -> Html {
    let list = use_reducer(ToastList::default);
    let next_id = use_mut_ref(|| 0u32);

    let handle = {
        let list = list.clone();
        let push = Callback::from(move |(kind, text): (ToastKind, String)| {
            let id = {
                let mut next = next_id.borrow_mut();
                *next = next.wrapping_add(1);
                *next
            };
            list.dispatch(ToastAction::Push(Toast { id, kind, text }));
            let list = list.clone();
            Timeout::new(TOAST_LIFETIME_MS, move || {
                list.dispatch(ToastAction::Dismiss(id));
            })
            .forget();
        });
        Toasts { push }
    };

    let dismiss = {
        let list = list.clone();
        move |id: u32| {
            let list = list.clone();
            Callback::from(move |_: MouseEvent| list.dispatch(ToastAction::Dismiss(id)))
        }
    };

    html! {
        <ContextProvider<Toasts> context={handle}>
            { for props.children.iter() }
            <div class="toast-stack" aria-live="polite">
                { for list.toasts.iter().map(|toast| {
                    let class = match toast.kind {
                        ToastKind::Info => "toast info",
                        ToastKind::Success => "toast success",
                        ToastKind::Warning => "toast warning",
                    };
                    html! {
                        <div key={toast.id} class={class} onclick={dismiss(toast.id)}>
                            { &toast.text }
                        </div>
                    }
                }) }
            </div>
        </ContextProvider<Toasts>>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_dismiss() {
        let list = Rc::new(ToastList::default());
        let list = list.reduce(ToastAction::Push(Toast {
            id: 1,
            kind: ToastKind::Info,
            text: "one".into(),
        }));
        let list = list.reduce(ToastAction::Push(Toast {
            id: 2,
            kind: ToastKind::Success,
            text: "two".into(),
        }));
        assert_eq!(list.toasts.len(), 2);
        let list = list.reduce(ToastAction::Dismiss(1));
        assert_eq!(list.toasts.len(), 1);
        assert_eq!(list.toasts[0].text, "two");
    }
}

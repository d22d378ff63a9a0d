use gloo_timers::callback::Timeout;
use log::{debug, info};
use web_sys::{window, HtmlElement, MouseEvent, TouchEvent};
use yew::prelude::*;

use super::controller::{ChannelKind, WidgetState};
use super::gesture::Point;
use super::listener::WindowListener;
use super::position::{Viewport, WidgetSize};
use crate::components::toast::{ToastKind, Toasts};
use crate::contact::{self, BrowserNavigator};
use crate::content::ContactButtons;
use crate::storage::StoreHandle;

const PERSIST_DELAY_MS: u32 = 300;
const CONFIRM_DELAY_MS: u32 = 150;
const HIGHLIGHT_MS: u32 = 2000;
const HAPTIC_MS: u32 = 50;

const NORMAL_SIZE: WidgetSize = WidgetSize { width: 64.0, height: 140.0 };
const MINIMIZED_SIZE: WidgetSize = WidgetSize { width: 56.0, height: 56.0 };

#[derive(Properties, PartialEq)]
pub struct FloatingContactProps {
    pub buttons: ContactButtons,
    pub store: StoreHandle,
    #[prop_or(true)]
    pub dark: bool,
}

pub enum FloatingMsg {
    PointerDown(Point),
    PointerMove(Point),
    PointerUp,
    Contact(ChannelKind),
    FireContact(ChannelKind),
    ClearHighlight,
    Persist,
    ToggleHelp,
    Reset,
    Minimize,
    Restore,
    Resized,
    Relayout,
}

/// Move/up listeners, alive only while a gesture is.
struct GestureListeners {
    _mouse_move: WindowListener<MouseEvent>,
    _mouse_up: WindowListener<MouseEvent>,
    _touch_move: WindowListener<TouchEvent>,
    _touch_end: WindowListener<TouchEvent>,
    _touch_cancel: WindowListener<TouchEvent>,
}

pub struct FloatingContact {
    state: WidgetState,
    root: NodeRef,
    listeners: Option<GestureListeners>,
    resize_listener: Option<WindowListener<web_sys::Event>>,
    persist_timer: Option<Timeout>,
    confirm_timer: Option<Timeout>,
    highlight_timer: Option<Timeout>,
}

fn touch_point(e: &TouchEvent) -> Option<Point> {
    let touches = e.touches();
    if touches.length() != 1 {
        return None;
    }
    touches.get(0).map(|t| Point {
        x: t.client_x() as f64,
        y: t.client_y() as f64,
    })
}

fn mouse_point(e: &MouseEvent) -> Point {
    Point {
        x: e.client_x() as f64,
        y: e.client_y() as f64,
    }
}

fn viewport() -> Viewport {
    let (width, height) = window()
        .map(|w| {
            let width = w.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            let height = w.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
            (width, height)
        })
        .unwrap_or((0.0, 0.0));
    Viewport { width, height }
}

fn vibrate() {
    if let Some(window) = window() {
        // Returns false where vibration is unsupported.
        let _ = window.navigator().vibrate_with_duration(HAPTIC_MS);
    }
}

impl FloatingContact {
    fn widget_size(&self) -> WidgetSize {
        let fallback = if self.state.minimized() { MINIMIZED_SIZE } else { NORMAL_SIZE };
        match self.root.cast::<HtmlElement>() {
            Some(el) if el.offset_width() > 0 => WidgetSize {
                width: el.offset_width() as f64,
                height: el.offset_height() as f64,
            },
            _ => fallback,
        }
    }

    fn attach_gesture_listeners(&mut self, ctx: &Context<Self>) {
        let Some(window) = window() else { return };
        let link = ctx.link();

        let on_mouse_move = link.callback(|e: MouseEvent| FloatingMsg::PointerMove(mouse_point(&e)));
        let on_mouse_up = link.callback(|_: MouseEvent| FloatingMsg::PointerUp);
        let on_touch_move = link.batch_callback(|e: TouchEvent| touch_point(&e).map(FloatingMsg::PointerMove));
        let on_touch_end = link.callback(|_: TouchEvent| FloatingMsg::PointerUp);
        let on_touch_cancel = on_touch_end.clone();

        let listeners = (|| {
            Some(GestureListeners {
                _mouse_move: WindowListener::new(&window, "mousemove", move |e| on_mouse_move.emit(e))?,
                _mouse_up: WindowListener::new(&window, "mouseup", move |e| on_mouse_up.emit(e))?,
                _touch_move: WindowListener::new(&window, "touchmove", move |e| on_touch_move.emit(e))?,
                _touch_end: WindowListener::new(&window, "touchend", move |e| on_touch_end.emit(e))?,
                _touch_cancel: WindowListener::new(&window, "touchcancel", move |e| on_touch_cancel.emit(e))?,
            })
        })();
        self.listeners = listeners;
    }

    fn schedule_persist(&mut self, ctx: &Context<Self>) {
        let link = ctx.link().clone();
        // Replacing the timer cancels the pending write.
        self.persist_timer = Some(Timeout::new(PERSIST_DELAY_MS, move || {
            link.send_message(FloatingMsg::Persist);
        }));
    }

    fn toast(&self, ctx: &Context<Self>, kind: ToastKind, text: &str) {
        if let Some((toasts, _)) = ctx.link().context::<Toasts>(Callback::noop()) {
            toasts.push(kind, text);
        }
    }

    fn style(&self) -> String {
        let pos = self.state.position();
        format!(
            "position: fixed; right: {}px; bottom: {}px; z-index: 1000; touch-action: none;",
            pos.x, pos.y
        )
    }
}

impl Component for FloatingContact {
    type Message = FloatingMsg;
    type Properties = FloatingContactProps;

    fn create(ctx: &Context<Self>) -> Self {
        let state = WidgetState::load(&*ctx.props().store);
        debug!("floating widget starting at {:?}", state.position());
        Self {
            state,
            root: NodeRef::default(),
            listeners: None,
            resize_listener: None,
            persist_timer: None,
            confirm_timer: None,
            highlight_timer: None,
        }
    }

    fn rendered(&mut self, ctx: &Context<Self>, first_render: bool) {
        // Minimize, restore and the help panel all change the measured size.
        let size = self.widget_size();
        if self.state.fit_layout(viewport(), size, &*ctx.props().store) {
            ctx.link().send_message(FloatingMsg::Relayout);
        }
        if !first_render {
            return;
        }
        if let Some(window) = window() {
            let on_resize = ctx.link().callback(|_: web_sys::Event| FloatingMsg::Resized);
            self.resize_listener = WindowListener::new(&window, "resize", move |e| on_resize.emit(e));
        }
    }

    fn update(&mut self, ctx: &Context<Self>, msg: Self::Message) -> bool {
        let store = &*ctx.props().store;
        match msg {
            FloatingMsg::PointerDown(at) => {
                if self.state.pointer_down(at) {
                    self.attach_gesture_listeners(ctx);
                }
                false
            }
            FloatingMsg::PointerMove(at) => {
                let size = self.widget_size();
                self.state.pointer_move(at, viewport(), size)
            }
            FloatingMsg::PointerUp => {
                self.listeners = None;
                if self.state.pointer_up() {
                    debug!("widget dragged to {:?}", self.state.position());
                    self.schedule_persist(ctx);
                    return true;
                }
                false
            }
            FloatingMsg::Persist => {
                self.persist_timer = None;
                self.state.flush(store);
                false
            }
            FloatingMsg::Contact(kind) => {
                if !self.state.contact(kind) {
                    return false;
                }
                vibrate();
                let link = ctx.link().clone();
                self.confirm_timer = Some(Timeout::new(CONFIRM_DELAY_MS, move || {
                    link.send_message(FloatingMsg::FireContact(kind));
                }));
                let link = ctx.link().clone();
                self.highlight_timer = Some(Timeout::new(HIGHLIGHT_MS, move || {
                    link.send_message(FloatingMsg::ClearHighlight);
                }));
                true
            }
            FloatingMsg::FireContact(kind) => {
                self.confirm_timer = None;
                let buttons = &ctx.props().buttons;
                let fired = match kind {
                    ChannelKind::Phone => contact::call_phone(&buttons.phone, &BrowserNavigator),
                    ChannelKind::WhatsApp => contact::open_whatsapp(&buttons.whatsapp, &BrowserNavigator),
                };
                info!("contact action {:?} fired: {}", kind, fired);
                false
            }
            FloatingMsg::ClearHighlight => {
                self.highlight_timer = None;
                self.state.clear_highlight()
            }
            FloatingMsg::ToggleHelp => self.state.toggle_help(),
            FloatingMsg::Reset => {
                if !self.state.reset(store) {
                    return false;
                }
                self.persist_timer = None;
                self.toast(ctx, ToastKind::Success, "Contact buttons moved back to the corner");
                true
            }
            FloatingMsg::Minimize => {
                if !self.state.minimize() {
                    return false;
                }
                self.toast(ctx, ToastKind::Info, "Tap the bubble to bring the contact buttons back");
                true
            }
            FloatingMsg::Restore => self.state.restore(),
            FloatingMsg::Resized => {
                let size = self.widget_size();
                self.state.fit_viewport(viewport(), size);
                true
            }
            FloatingMsg::Relayout => true,
        }
    }

    fn view(&self, ctx: &Context<Self>) -> Html {
        let link = ctx.link();
        let props = ctx.props();

        let onmousedown = link.batch_callback(|e: MouseEvent| {
            (e.button() == 0).then(|| FloatingMsg::PointerDown(mouse_point(&e)))
        });
        let ontouchstart = link.batch_callback(|e: TouchEvent| touch_point(&e).map(FloatingMsg::PointerDown));

        let theme = if props.dark { "dark" } else { "light" };

        if self.state.minimized() {
            return html! {
                <div
                    ref={self.root.clone()}
                    class={classes!("floating-contact", "minimized", theme)}
                    style={self.style()}
                    {onmousedown}
                    {ontouchstart}
                >
                    <button
                        class="floating-bubble"
                        aria-label="Show contact buttons"
                        onclick={link.callback(|_| FloatingMsg::Restore)}
                    >
                        {"📞"}
                    </button>
                </div>
            };
        }

        let channel_button = |kind: ChannelKind| {
            let (channel, icon, class) = match kind {
                ChannelKind::Phone => (&props.buttons.phone, "📞", "floating-call"),
                ChannelKind::WhatsApp => (&props.buttons.whatsapp, "💬", "floating-whatsapp"),
            };
            if !channel.enabled {
                return html! {};
            }
            let highlighted = self.state.last_used() == Some(kind);
            html! {
                <button
                    class={classes!("floating-button", class, highlighted.then(|| "last-used"))}
                    style={format!("background: {};", channel.color)}
                    title={channel.text.clone()}
                    aria-label={channel.text.clone()}
                    onclick={link.callback(move |_| FloatingMsg::Contact(kind))}
                >
                    {icon}
                </button>
            }
        };

        html! {
            <div
                ref={self.root.clone()}
                class={classes!("floating-contact", theme, self.state.is_dragging().then(|| "dragging"))}
                style={self.style()}
                {onmousedown}
                {ontouchstart}
            >
                { channel_button(ChannelKind::WhatsApp) }
                { channel_button(ChannelKind::Phone) }
                <div class="floating-tools">
                    <button
                        class="floating-tool"
                        aria-label="Contact button options"
                        onclick={link.callback(|_| FloatingMsg::ToggleHelp)}
                    >
                        { if self.state.expanded() { "✕" } else { "⋯" } }
                    </button>
                </div>
                if self.state.expanded() {
                    <div class="floating-help">
                        <p>{"Drag the buttons anywhere on the screen. Their place is remembered."}</p>
                        <button class="floating-help-action" onclick={link.callback(|_| FloatingMsg::Reset)}>
                            {"Reset position"}
                        </button>
                        <button class="floating-help-action" onclick={link.callback(|_| FloatingMsg::Minimize)}>
                            {"Minimize"}
                        </button>
                    </div>
                }
            </div>
        }
    }
}

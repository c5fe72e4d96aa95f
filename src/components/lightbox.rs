use std::cell::RefCell;
use std::rc::Rc;

use gloo_timers::callback::Timeout;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::JsCast;
use web_sys::KeyboardEvent;
use yew::prelude::*;
use yew::AppHandle;

use crate::error::SiteError;
use crate::utils::dom;

const OVERLAY_CLASSES: &str = "fixed inset-0 bg-black bg-opacity-95 z-50 flex items-center justify-center p-4 cursor-pointer";
const CLOSE_BUTTON_CLASSES: &str = "absolute top-4 right-4 w-10 h-10 bg-yellow-500 rounded-full flex items-center justify-center hover:bg-yellow-400 transition-colors";

/// Delay before the overlay starts fading in.
pub const LIGHTBOX_ENTER_DELAY_MS: u32 = 10;
/// Fade-out length; the overlay is removed once it has elapsed.
pub const LIGHTBOX_EXIT_MS: u32 = 300;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxPhase {
    Opening,
    Open,
    Closing,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LightboxAction {
    Reveal,
    Close,
}

impl LightboxPhase {
    /// Closing is terminal, so a late reveal or a second close changes nothing.
    pub fn next(self, action: LightboxAction) -> Self {
        match (self, action) {
            (LightboxPhase::Closing, _) => LightboxPhase::Closing,
            (_, LightboxAction::Close) => LightboxPhase::Closing,
            (LightboxPhase::Opening, LightboxAction::Reveal) => LightboxPhase::Open,
            (LightboxPhase::Open, LightboxAction::Reveal) => LightboxPhase::Open,
        }
    }

    pub fn opacity(self) -> &'static str {
        match self {
            LightboxPhase::Open => "1",
            LightboxPhase::Opening | LightboxPhase::Closing => "0",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LightboxState {
    pub phase: LightboxPhase,
}

impl Reducible for LightboxState {
    type Action = LightboxAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let phase = self.phase.next(action);
        if phase == self.phase {
            self
        } else {
            Rc::new(LightboxState { phase })
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct LightboxProps {
    pub src: String,
    pub alt: String,
    /// Emitted once, when the overlay starts closing.
    pub on_dismiss: Callback<()>,
}

#[function_component(Lightbox)]
pub fn lightbox(props: &LightboxProps) -> Html {
    let state = use_reducer(|| LightboxState {
        phase: LightboxPhase::Opening,
    });

    // Fade in
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let timeout = Timeout::new(LIGHTBOX_ENTER_DELAY_MS, move || {
                    dispatcher.dispatch(LightboxAction::Reveal)
                });
                move || drop(timeout)
            },
            (),
        );
    }

    // Close on Escape while mounted
    {
        let dispatcher = state.dispatcher();
        use_effect_with_deps(
            move |_| {
                let destructor: Box<dyn FnOnce()> = match dom::document() {
                    Ok(document) => {
                        let callback = Closure::<dyn Fn(KeyboardEvent)>::new(move |e: KeyboardEvent| {
                            if e.key() == "Escape" {
                                dispatcher.dispatch(LightboxAction::Close);
                            }
                        });
                        if let Err(e) = document
                            .add_event_listener_with_callback("keydown", callback.as_ref().unchecked_ref())
                        {
                            log::warn!("Failed to listen for Escape: {:?}", e);
                        }
                        Box::new(move || {
                            let _ = document.remove_event_listener_with_callback(
                                "keydown",
                                callback.as_ref().unchecked_ref(),
                            );
                        })
                    }
                    Err(_) => Box::new(|| ()),
                };
                move || destructor()
            },
            (),
        );
    }

    {
        let on_dismiss = props.on_dismiss.clone();
        use_effect_with_deps(
            move |phase| {
                if *phase == LightboxPhase::Closing {
                    on_dismiss.emit(());
                }
                || ()
            },
            state.phase,
        );
    }

    let close = {
        let dispatcher = state.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(LightboxAction::Close))
    };
    let keep_open = Callback::from(|e: MouseEvent| e.stop_propagation());

    html! {
        <div
            class={OVERLAY_CLASSES}
            style={format!("opacity: {}; transition: opacity 0.3s ease;", state.phase.opacity())}
            onclick={close.clone()}
        >
            <div class="relative max-w-5xl max-h-[90vh]" onclick={keep_open}>
                <img
                    src={props.src.clone()}
                    alt={props.alt.clone()}
                    class="max-w-full max-h-[90vh] object-contain rounded-lg"
                />
                <button class={CLOSE_BUTTON_CLASSES} onclick={close}>
                    <svg class="w-6 h-6 text-black" fill="none" stroke="currentColor" viewBox="0 0 24 24">
                        <path stroke-linecap="round" stroke-linejoin="round" stroke-width="2" d="M6 18L18 6M6 6l12 12"></path>
                    </svg>
                </button>
            </div>
        </div>
    }
}

/// Opens a full-screen view of an image. The overlay removes itself after closing.
pub fn open_lightbox(src: &str, alt: &str) -> Result<(), SiteError> {
    let document = dom::document()?;
    let body = document.body().ok_or(SiteError::NoBody)?;
    let host = document.create_element("div")?;
    body.append_child(&host)?;

    let handle: Rc<RefCell<Option<AppHandle<Lightbox>>>> = Rc::default();
    let on_dismiss = {
        let handle = handle.clone();
        let host = host.clone();
        Callback::from(move |_: ()| {
            let handle = handle.clone();
            let host = host.clone();
            Timeout::new(LIGHTBOX_EXIT_MS, move || {
                if let Some(app) = handle.borrow_mut().take() {
                    app.destroy();
                }
                host.remove();
            })
            .forget();
        })
    };

    let app = yew::Renderer::<Lightbox>::with_root_and_props(
        host,
        LightboxProps {
            src: src.to_string(),
            alt: alt.to_string(),
            on_dismiss,
        },
    )
    .render();
    *handle.borrow_mut() = Some(app);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opens_then_reveals() {
        let phase = LightboxPhase::Opening;
        assert_eq!(phase.opacity(), "0");
        let phase = phase.next(LightboxAction::Reveal);
        assert_eq!(phase, LightboxPhase::Open);
        assert_eq!(phase.opacity(), "1");
    }

    #[test]
    fn closing_is_terminal() {
        let phase = LightboxPhase::Open.next(LightboxAction::Close);
        assert_eq!(phase, LightboxPhase::Closing);
        assert_eq!(phase.next(LightboxAction::Close), LightboxPhase::Closing);
        assert_eq!(phase.next(LightboxAction::Reveal), LightboxPhase::Closing);
        assert_eq!(phase.opacity(), "0");
    }

    #[test]
    fn close_before_reveal_skips_fade_in() {
        let phase = LightboxPhase::Opening
            .next(LightboxAction::Close)
            .next(LightboxAction::Reveal);
        assert_eq!(phase, LightboxPhase::Closing);
    }

    #[test]
    fn second_close_keeps_the_same_state() {
        let state = Rc::new(LightboxState {
            phase: LightboxPhase::Open,
        });
        let closed = state.reduce(LightboxAction::Close);
        let again = closed.clone().reduce(LightboxAction::Close);
        assert!(Rc::ptr_eq(&closed, &again));
    }
}

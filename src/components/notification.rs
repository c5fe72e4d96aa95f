use gloo_timers::callback::Timeout;
use yew::prelude::*;

use crate::error::SiteError;
use crate::utils::dom;
use crate::utils::lifecycle::{Lifecycle, Step};

const TOAST_CLASSES: &str = "fixed top-20 right-4 px-6 py-4 rounded-lg shadow-lg z-50 transform translate-x-full transition-transform duration-300";

/// Delay before a new toast slides in, so the off-screen start is painted first.
pub const TOAST_ENTER_DELAY_MS: u32 = 10;
/// Time after creation when the toast starts sliding out.
pub const TOAST_VISIBLE_MS: u32 = 3_000;
/// Length of the slide-out transition.
pub const TOAST_EXIT_MS: u32 = 300;
/// Time after creation when the toast is removed from the page.
pub const TOAST_LIFETIME_MS: u32 = TOAST_VISIBLE_MS + TOAST_EXIT_MS;

pub const OFFSCREEN_TRANSFORM: &str = "translateX(100%)";
pub const ONSCREEN_TRANSFORM: &str = "translateX(0)";

#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Severity {
    #[default]
    Info,
    Success,
    Warning,
    Error,
}

impl Severity {
    pub fn palette(self) -> &'static str {
        match self {
            Severity::Success => "bg-green-500 text-white",
            Severity::Error => "bg-red-500 text-white",
            Severity::Info => "bg-yellow-500 text-black",
            Severity::Warning => "bg-orange-500 text-white",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ToastPhase {
    Entering,
    Shown,
    Leaving,
}

/// Phase changes after creation, in milliseconds. Removal follows at [`TOAST_LIFETIME_MS`].
pub const TOAST_SCHEDULE: [(u32, ToastPhase); 2] = [
    (TOAST_ENTER_DELAY_MS, ToastPhase::Shown),
    (TOAST_VISIBLE_MS, ToastPhase::Leaving),
];

/// Slide in, slide out, then removal once the exit transition has run.
pub fn toast_lifecycle() -> Lifecycle<ToastPhase> {
    Lifecycle::new(&TOAST_SCHEDULE, TOAST_LIFETIME_MS)
}

impl ToastPhase {
    pub fn transform(self) -> &'static str {
        match self {
            ToastPhase::Shown => ONSCREEN_TRANSFORM,
            ToastPhase::Entering | ToastPhase::Leaving => OFFSCREEN_TRANSFORM,
        }
    }
}

#[derive(Properties, PartialEq, Clone)]
pub struct ToastProps {
    pub message: String,
    #[prop_or_default]
    pub severity: Severity,
}

#[function_component(Toast)]
pub fn toast(props: &ToastProps) -> Html {
    let phase = use_state(|| ToastPhase::Entering);

    {
        let phase = phase.clone();
        use_effect_with_deps(
            move |_| {
                let timeouts: Vec<Timeout> = toast_lifecycle()
                    .phases()
                    .iter()
                    .map(|&(after_ms, next)| {
                        let phase = phase.clone();
                        Timeout::new(after_ms, move || phase.set(next))
                    })
                    .collect();
                move || drop(timeouts)
            },
            (),
        );
    }

    html! {
        <div
            class={format!("{} {}", TOAST_CLASSES, props.severity.palette())}
            style={format!("transform: {};", phase.transform())}
        >
            { props.message.clone() }
        </div>
    }
}

/// Shows a toast in the top right corner. It is removed after [`TOAST_LIFETIME_MS`].
pub fn show_notification(message: &str, severity: Severity) -> Result<(), SiteError> {
    let document = dom::document()?;
    let body = document.body().ok_or(SiteError::NoBody)?;
    let host = document.create_element("div")?;
    body.append_child(&host)?;

    let app = yew::Renderer::<Toast>::with_root_and_props(
        host.clone(),
        ToastProps {
            message: message.to_string(),
            severity,
        },
    )
    .render();

    let mut app = Some(app);
    for (after_ms, step) in toast_lifecycle().steps() {
        if step != Step::Remove {
            continue;
        }
        let Some(app) = app.take() else { break };
        let host = host.clone();
        Timeout::new(after_ms, move || {
            app.destroy();
            host.remove();
        })
        .forget();
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_slides_in_then_out_before_removal() {
        let times: Vec<u32> = TOAST_SCHEDULE.iter().map(|(at, _)| *at).collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]));
        assert!(times.iter().all(|at| *at < TOAST_LIFETIME_MS));
        assert_eq!(TOAST_SCHEDULE[0].1, ToastPhase::Shown);
        assert_eq!(TOAST_SCHEDULE[1].1, ToastPhase::Leaving);
    }

    #[test]
    fn toast_is_removed_once_after_exit_transition() {
        let steps = toast_lifecycle().steps();
        let removals: Vec<u32> = steps
            .iter()
            .filter(|(_, step)| *step == Step::Remove)
            .map(|(after_ms, _)| *after_ms)
            .collect();
        assert_eq!(removals, vec![3_300]);
        assert_eq!(
            steps,
            vec![
                (10, Step::Enter(ToastPhase::Shown)),
                (3_000, Step::Enter(ToastPhase::Leaving)),
                (3_300, Step::Remove),
            ]
        );
    }

    #[test]
    fn offscreen_state_is_a_full_translation() {
        assert_eq!(ToastPhase::Entering.transform(), "translateX(100%)");
        assert_eq!(ToastPhase::Leaving.transform(), "translateX(100%)");
        assert_eq!(ToastPhase::Shown.transform(), "translateX(0)");
    }

    #[test]
    fn severity_palettes_with_info_default() {
        assert_eq!(Severity::default(), Severity::Info);
        assert_eq!(Severity::Info.palette(), "bg-yellow-500 text-black");
        assert_eq!(Severity::Success.palette(), "bg-green-500 text-white");
        assert_eq!(Severity::Warning.palette(), "bg-orange-500 text-white");
        assert_eq!(Severity::Error.palette(), "bg-red-500 text-white");
    }
}

use std::rc::Rc;

use log::{debug, warn};
use wasm_bindgen::JsCast;
use web_sys::{Event, MouseEvent};
use yew::prelude::*;
use yew_hooks::use_interval;

use crate::browser::{self, Subscription};
use crate::config;
use crate::error::EnvError;
use crate::motion::trail::TrailBuffer;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct CursorState {
    pub position: (f64, f64),
    pub visible: bool,
    pub trail: TrailBuffer,
}

pub enum CursorAction {
    Move { x: f64, y: f64 },
    Decay,
    Leave,
    Enter,
}

impl Reducible for CursorState {
    type Action = CursorAction;

    fn reduce(self: Rc<Self>, action: CursorAction) -> Rc<Self> {
        // Skip the clone (and the re-render) when nothing changes.
        match action {
            CursorAction::Decay if self.trail.is_empty() => return self,
            CursorAction::Leave if !self.visible => return self,
            CursorAction::Enter if self.visible => return self,
            _ => {}
        }

        let mut next = (*self).clone();
        match action {
            CursorAction::Move { x, y } => {
                next.position = (x, y);
                next.visible = true;
                next.trail.record(x, y);
            }
            CursorAction::Decay => {
                next.trail.decay();
            }
            CursorAction::Leave => next.visible = false,
            CursorAction::Enter => next.visible = true,
        }
        Rc::new(next)
    }
}

fn cursor_enabled() -> bool {
    if browser::is_touch_device() {
        debug!("Touch device detected, orb cursor disabled");
        return false;
    }
    match browser::prefers_reduced_motion() {
        Ok(reduced) => !reduced,
        Err(err) => {
            warn!("Could not read motion preference, orb cursor disabled: {}", err);
            false
        }
    }
}

fn subscribe(dispatcher: UseReducerDispatcher<CursorState>) -> Result<Vec<Subscription>, EnvError> {
    let document = browser::document()?;

    let on_move = {
        let dispatcher = dispatcher.clone();
        move |event: Event| {
            if let Some(mouse) = event.dyn_ref::<MouseEvent>() {
                dispatcher.dispatch(CursorAction::Move {
                    x: mouse.client_x() as f64,
                    y: mouse.client_y() as f64,
                });
            }
        }
    };
    let on_leave = {
        let dispatcher = dispatcher.clone();
        move |_: Event| dispatcher.dispatch(CursorAction::Leave)
    };
    let on_enter = move |_: Event| dispatcher.dispatch(CursorAction::Enter);

    Ok(vec![
        Subscription::new(document.as_ref(), "mousemove", on_move)?,
        Subscription::new(document.as_ref(), "mouseleave", on_leave)?,
        Subscription::new(document.as_ref(), "mouseenter", on_enter)?,
    ])
}

#[function_component(OrbCursor)]
pub fn orb_cursor() -> Html {
    let enabled = use_state(cursor_enabled);
    let cursor = use_reducer(CursorState::default);

    {
        let dispatcher = cursor.dispatcher();
        use_effect_with_deps(
            move |enabled| {
                let subscriptions = if *enabled {
                    subscribe(dispatcher).unwrap_or_else(|err| {
                        warn!("Orb cursor listeners unavailable: {}", err);
                        Vec::new()
                    })
                } else {
                    Vec::new()
                };
                move || drop(subscriptions)
            },
            *enabled,
        );
    }

    {
        let dispatcher = cursor.dispatcher();
        let millis = if *enabled { config::TRAIL_DECAY_MS } else { 0 };
        use_interval(move || dispatcher.dispatch(CursorAction::Decay), millis);
    }

    if !*enabled {
        return html! {};
    }

    let (x, y) = cursor.position;

    html! {
        <>
            <style>
                {r#"
                    * {
                        cursor: none !important;
                    }
                    .orb-particle, .orb-cursor {
                        position: fixed;
                        pointer-events: none;
                    }
                    .orb-particle {
                        z-index: 9998;
                    }
                    .orb-particle-dot {
                        width: 1rem;
                        height: 1rem;
                        border-radius: 9999px;
                        background: radial-gradient(circle, hsl(var(--primary) / 0.6) 0%, hsl(var(--primary) / 0.2) 50%, transparent 70%);
                        box-shadow: 0 0 10px hsl(var(--primary) / 0.4);
                    }
                    .orb-cursor {
                        z-index: 9999;
                        transform: translate(-50%, -50%);
                        transition: opacity 150ms ease;
                    }
                    .orb-glow {
                        position: absolute;
                        left: 50%;
                        top: 50%;
                        width: 2.5rem;
                        height: 2.5rem;
                        transform: translate(-50%, -50%);
                        border-radius: 9999px;
                        background: radial-gradient(circle, transparent 30%, hsl(var(--primary) / 0.15) 60%, transparent 70%);
                        box-shadow: 0 0 30px hsl(var(--primary) / 0.3);
                    }
                    .orb-core {
                        width: 1.25rem;
                        height: 1.25rem;
                        border-radius: 9999px;
                        background: radial-gradient(circle at 30% 30%, hsl(var(--primary)) 0%, hsl(var(--primary) / 0.8) 40%, hsl(var(--primary) / 0.4) 100%);
                        box-shadow: 0 0 20px hsl(var(--primary) / 0.8), 0 0 40px hsl(var(--primary) / 0.4), inset 0 0 10px hsl(0 0% 100% / 0.3);
                    }
                    .orb-highlight {
                        position: absolute;
                        left: 25%;
                        top: 25%;
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: radial-gradient(circle, hsl(0 0% 100% / 0.8) 0%, transparent 70%);
                    }
                "#}
            </style>

            { for cursor.trail.particles().map(|(point, look)| html! {
                <div
                    key={point.id}
                    class="orb-particle"
                    style={format!(
                        "left: {}px; top: {}px; transform: translate(-50%, -50%) scale({}); opacity: {};",
                        point.x, point.y, look.scale, look.opacity
                    )}
                >
                    <div class="orb-particle-dot"></div>
                </div>
            }) }

            <div
                class="orb-cursor"
                style={format!("left: {}px; top: {}px; opacity: {};", x, y, if cursor.visible { 1 } else { 0 })}
            >
                <div class="orb-glow animate-pulse"></div>
                <div class="orb-core"></div>
                <div class="orb-highlight"></div>
            </div>
        </>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn apply(state: Rc<CursorState>, action: CursorAction) -> Rc<CursorState> {
        state.reduce(action)
    }

    #[test]
    fn leave_hides_but_keeps_the_trail() {
        let mut state = Rc::new(CursorState::default());
        state = apply(state, CursorAction::Move { x: 10.0, y: 10.0 });
        state = apply(state, CursorAction::Move { x: 30.0, y: 10.0 });
        assert!(state.visible);
        assert_eq!(state.trail.len(), 2);

        state = apply(state, CursorAction::Leave);
        assert!(!state.visible);
        assert_eq!(state.trail.len(), 2);

        state = apply(state, CursorAction::Enter);
        assert!(state.visible);
        assert_eq!(state.position, (30.0, 10.0));
    }

    #[test]
    fn idle_decay_on_empty_trail_is_a_no_op() {
        let state = Rc::new(CursorState::default());
        let next = apply(state.clone(), CursorAction::Decay);
        assert!(Rc::ptr_eq(&state, &next));
    }

    #[test]
    fn decay_ticks_drain_the_trail() {
        let mut state = Rc::new(CursorState::default());
        for i in 1..=50 {
            state = apply(state, CursorAction::Move { x: i as f64 * 5.0, y: 0.0 });
        }
        assert_eq!(state.trail.len(), config::TRAIL_CAPACITY);

        for _ in 0..config::TRAIL_CAPACITY {
            state = apply(state, CursorAction::Decay);
        }
        assert!(state.trail.is_empty());
    }
}

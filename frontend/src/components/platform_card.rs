use web_sys::{HtmlElement, MouseEvent};
use yew::prelude::*;

use crate::components::platform_icons::{Platform, PlatformIcon};
use crate::config;
use crate::motion::tilt::{CardRect, Tilt};
use crate::theme::{self, Hsl};

#[derive(Properties, PartialEq)]
pub struct PlatformCardProps {
    pub title: AttrValue,
    pub subtitle: AttrValue,
    pub platform: Platform,
    #[prop_or_default]
    pub href: Option<AttrValue>,
    #[prop_or_default]
    pub coming_soon: bool,
    #[prop_or(theme::PRIMARY)]
    pub accent: Hsl,
    /// Entrance animation delay.
    #[prop_or_default]
    pub delay_ms: u32,
}

/// Where the card links to, if anywhere. Coming-soon cards never link.
pub(crate) fn link_target(coming_soon: bool, href: Option<&AttrValue>) -> Option<AttrValue> {
    if coming_soon {
        None
    } else {
        href.cloned()
    }
}

/// Tilt for a pointer at (`client_x`, `client_y`) over the card, or `None`
/// when the card must stay flat.
pub(crate) fn pointer_tilt(coming_soon: bool, client_x: f64, client_y: f64, rect: CardRect) -> Option<Tilt> {
    if coming_soon {
        return None;
    }
    Some(Tilt::from_pointer(client_x, client_y, rect, config::CARD_MAX_TILT_DEG))
}

#[function_component(PlatformCard)]
pub fn platform_card(props: &PlatformCardProps) -> Html {
    let card_ref = use_node_ref();
    let hovered = use_state(|| false);
    let tilt = use_state(Tilt::default);
    let coming_soon = props.coming_soon;

    let on_mouse_move = {
        let card_ref = card_ref.clone();
        let tilt = tilt.clone();
        Callback::from(move |e: MouseEvent| {
            let Some(card) = card_ref.cast::<HtmlElement>() else {
                return;
            };
            let bounds = card.get_bounding_client_rect();
            let rect = CardRect {
                left: bounds.left(),
                top: bounds.top(),
                width: bounds.width(),
                height: bounds.height(),
            };
            if let Some(next) = pointer_tilt(coming_soon, e.client_x() as f64, e.client_y() as f64, rect) {
                tilt.set(next);
            }
        })
    };

    let on_mouse_enter = {
        let hovered = hovered.clone();
        Callback::from(move |_: MouseEvent| {
            if !coming_soon {
                hovered.set(true);
            }
        })
    };

    let on_mouse_leave = {
        let hovered = hovered.clone();
        let tilt = tilt.clone();
        Callback::from(move |_: MouseEvent| {
            hovered.set(false);
            tilt.set(Tilt::FLAT);
        })
    };

    let active = *hovered && !coming_soon;
    let accent = props.accent;

    let card_style = format!("transform: {};", tilt.transform());
    // The entrance animation runs on the wrapper so it never fights the tilt transform.
    let wrap_style = format!("animation-delay: {}ms;", props.delay_ms);

    let card = html! {
        <div
            ref={card_ref}
            class={classes!(
                "platform-card",
                if coming_soon { "card-disabled" } else { "card-enabled" }
            )}
            style={card_style}
            onmousemove={on_mouse_move}
            onmouseenter={on_mouse_enter}
            onmouseleave={on_mouse_leave}
        >
            <div
                class="card-layer card-accent"
                style={format!(
                    "background: radial-gradient(circle at 30% 30%, {}, transparent 70%); opacity: {};",
                    accent,
                    if active { 0.2 } else { 0.1 }
                )}
            ></div>
            <div class="card-layer card-blueprint"></div>
            {
                if coming_soon {
                    html! { <div class="card-soon-badge">{"SOON"}</div> }
                } else {
                    html! { <div class="card-layer card-scanline"></div> }
                }
            }

            <div class="card-content">
                <div class="card-icon">
                    <PlatformIcon platform={props.platform} coming_soon={coming_soon} />
                </div>
                <h3 class={classes!("card-title", "font-display", if active { "text-primary" } else { "card-title-idle" })}>
                    { props.title.clone() }
                </h3>
                <p class="card-subtitle text-muted">{ props.subtitle.clone() }</p>
            </div>

            <div
                class="card-layer card-glow"
                style={format!(
                    "opacity: {}; box-shadow: inset 0 0 40px {}, 0 0 60px {};",
                    if active { 1 } else { 0 },
                    accent.with_alpha(0.125),
                    accent.with_alpha(0.08)
                )}
            ></div>
            <div
                class="card-layer card-edge"
                style={format!(
                    "opacity: {}; background: linear-gradient(135deg, {} 0%, transparent 50%, {} 100%);",
                    if active { 1 } else { 0 },
                    accent.with_alpha(0.19),
                    accent.with_alpha(0.06)
                )}
            ></div>
        </div>
    };

    let styles = html! {
        <style>
            {r#"
                .card-wrap {
                    display: block;
                    height: 100%;
                    text-decoration: none;
                }
                .platform-card {
                    position: relative;
                    height: 100%;
                    padding: 1.5rem;
                    border-radius: calc(var(--radius) + 8px);
                    background: hsl(var(--card) / 0.55);
                    backdrop-filter: blur(14px);
                    border: 1px solid hsl(var(--primary) / 0.18);
                    box-shadow: 0 8px 32px hsl(var(--gotham-void) / 0.4);
                    transition: transform 500ms ease-out, box-shadow 500ms ease-out, border-color 500ms ease-out;
                    will-change: transform;
                }
                .card-enabled {
                    cursor: pointer;
                }
                .card-enabled:hover {
                    border-color: hsl(var(--primary) / 0.45);
                    box-shadow: 0 20px 50px hsl(var(--gotham-void) / 0.6), var(--glow-cyan);
                }
                .card-disabled {
                    opacity: 0.5;
                    cursor: not-allowed;
                }
                .card-layer {
                    position: absolute;
                    inset: 0;
                    border-radius: inherit;
                    pointer-events: none;
                }
                .card-accent {
                    transition: opacity 300ms ease;
                }
                .card-blueprint {
                    opacity: 0.06;
                    background-image:
                        linear-gradient(hsl(var(--primary)) 1px, transparent 1px),
                        linear-gradient(90deg, hsl(var(--primary)) 1px, transparent 1px);
                    background-size: 24px 24px;
                }
                .card-scanline {
                    overflow: hidden;
                    background: linear-gradient(180deg, transparent 0%, hsl(var(--primary) / 0.06) 50%, transparent 100%);
                    background-size: 100% 300%;
                    animation: shimmer 6s linear infinite;
                }
                .card-soon-badge {
                    position: absolute;
                    top: 1rem;
                    right: 1rem;
                    padding: 0.25rem 0.75rem;
                    border-radius: 9999px;
                    font-size: 0.75rem;
                    letter-spacing: 0.1em;
                    color: hsl(var(--accent));
                    border: 1px solid hsl(var(--accent) / 0.4);
                    background: hsl(var(--accent) / 0.1);
                }
                .card-content {
                    position: relative;
                    z-index: 10;
                }
                .card-icon {
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    width: 4rem;
                    height: 4rem;
                    margin-bottom: 1.5rem;
                }
                .card-title {
                    margin: 0 0 0.5rem;
                    font-size: 1.25rem;
                    font-weight: 600;
                    letter-spacing: 0.025em;
                    transition: color 300ms ease;
                }
                .card-title-idle {
                    color: hsl(var(--foreground));
                }
                .card-subtitle {
                    margin: 0;
                    font-size: 0.875rem;
                }
                .card-glow {
                    transition: opacity 500ms ease;
                }
                .card-edge {
                    transition: opacity 300ms ease;
                }
            "#}
        </style>
    };

    match link_target(coming_soon, props.href.as_ref()) {
        Some(href) => html! {
            <a class="card-wrap animate-fade-in" style={wrap_style} href={href} target="_blank" rel="noopener noreferrer">
                { styles }
                { card }
            </a>
        },
        None => html! {
            <div class="card-wrap animate-fade-in" style={wrap_style}>
                { styles }
                { card }
            </div>
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn coming_soon_never_links() {
        let href = AttrValue::from("https://example.com/");
        assert_eq!(link_target(true, Some(&href)), None);
        assert_eq!(link_target(true, None), None);
    }

    #[test]
    fn enabled_card_links_to_exactly_its_url() {
        let href = AttrValue::from("https://x-dnl.netlify.app/");
        assert_eq!(link_target(false, Some(&href)).as_deref(), Some("https://x-dnl.netlify.app/"));
        assert_eq!(link_target(false, None), None);
    }

    const RECT: CardRect = CardRect {
        left: 100.0,
        top: 50.0,
        width: 300.0,
        height: 200.0,
    };

    #[test]
    fn coming_soon_cards_never_tilt() {
        for (x, y) in [(100.0, 50.0), (250.0, 150.0), (400.0, 250.0), (-500.0, 9000.0)] {
            assert_eq!(pointer_tilt(true, x, y, RECT), None);
        }
    }

    #[test]
    fn enabled_tilt_stays_within_bounds() {
        let max = config::CARD_MAX_TILT_DEG;
        for i in -4..=14 {
            for j in -4..=14 {
                let x = RECT.left + RECT.width * i as f64 / 10.0;
                let y = RECT.top + RECT.height * j as f64 / 10.0;
                let tilt = pointer_tilt(false, x, y, RECT).expect("enabled cards tilt");
                assert!(tilt.rotate_x.abs() <= max + 1e-9);
                assert!(tilt.rotate_y.abs() <= max + 1e-9);
            }
        }
        assert_eq!(pointer_tilt(false, 250.0, 150.0, RECT), Some(Tilt::FLAT));
    }
}

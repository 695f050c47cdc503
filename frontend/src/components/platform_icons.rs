use yew::prelude::*;

use crate::theme::Hsl;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Platform {
    Pinterest,
    Twitter,
    Instagram,
    TikTok,
    YouTube,
    Terabox,
}

impl Platform {
    pub fn slug(self) -> &'static str {
        match self {
            Platform::Pinterest => "pinterest",
            Platform::Twitter => "twitter",
            Platform::Instagram => "instagram",
            Platform::TikTok => "tiktok",
            Platform::YouTube => "youtube",
            Platform::Terabox => "terabox",
        }
    }

    fn glow(self) -> String {
        match self {
            Platform::Pinterest => Hsl::new(354, 82, 50).with_alpha(0.6),
            Platform::Twitter => Hsl::new(203, 89, 53).with_alpha(0.6),
            Platform::Instagram => Hsl::new(326, 78, 51).with_alpha(0.6),
            Platform::TikTok => Hsl::new(330, 80, 60).with_alpha(0.5),
            Platform::YouTube => Hsl::new(0, 100, 50).with_alpha(0.5),
            Platform::Terabox => Hsl::new(210, 100, 56).with_alpha(0.5),
        }
    }

    // Idle animations are staggered so the grid never pulses in unison.
    fn idle_offset_s(self) -> f64 {
        match self {
            Platform::Pinterest => 0.0,
            Platform::Twitter => 0.8,
            Platform::Instagram => 1.6,
            Platform::TikTok => 2.4,
            Platform::YouTube => 3.2,
            Platform::Terabox => 4.0,
        }
    }

    fn glyph(self) -> Html {
        match self {
            Platform::Pinterest => html! {
                <div class="icon-tile" style="background: linear-gradient(135deg, rgba(239, 68, 68, 0.2), rgba(220, 38, 38, 0.1)); color: #ef4444;">
                    <svg class="icon-svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
                        <line x1="12" x2="12" y1="17" y2="22" />
                        <path d="M5 17h14v-1.76a2 2 0 0 0-1.11-1.79l-1.78-.9A2 2 0 0 1 15 10.76V6h1a2 2 0 0 0 0-4H8a2 2 0 0 0 0 4h1v4.76a2 2 0 0 1-1.11 1.79l-1.78.9A2 2 0 0 0 5 15.24Z" />
                    </svg>
                </div>
            },
            Platform::Twitter => html! {
                <div class="icon-tile" style="background: linear-gradient(135deg, rgba(56, 189, 248, 0.2), rgba(14, 165, 233, 0.1)); color: #38bdf8;">
                    <svg class="icon-svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M22 4s-.7 2.1-2 3.4c1.6 10-9.4 17.3-18 11.6 2.2.1 4.4-.6 6-2C3 15.5.5 9.6 3 5c2.2 2.6 5.6 4.1 9 4-.9-4.2 4-6.6 7-3.8 1.1 0 3-1.2 3-1.2z" />
                    </svg>
                </div>
            },
            Platform::Instagram => html! {
                <div class="icon-tile">
                    <div class="icon-focus-ring"></div>
                    <div class="icon-tile" style="background: linear-gradient(135deg, #f58529 0%, #dd2a7b 50%, #8134af 100%); color: #ffffff;">
                        <svg class="icon-svg small" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2.5" stroke-linecap="round" stroke-linejoin="round">
                            <rect width="20" height="20" x="2" y="2" rx="5" ry="5" />
                            <path d="M16 11.37A4 4 0 1 1 12.63 8 4 4 0 0 1 16 11.37z" />
                            <line x1="17.5" x2="17.51" y1="6.5" y2="6.5" />
                        </svg>
                    </div>
                </div>
            },
            Platform::TikTok => html! {
                <div class="icon-tile" style="background: linear-gradient(135deg, rgba(244, 114, 182, 0.15), rgba(34, 211, 238, 0.15)); border: 1px solid rgba(244, 114, 182, 0.2); color: rgba(244, 114, 182, 0.7);">
                    <svg class="icon-svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="M9 18V5l12-2v13" />
                        <circle cx="6" cy="18" r="3" />
                        <circle cx="18" cy="16" r="3" />
                    </svg>
                </div>
            },
            Platform::YouTube => html! {
                <div class="icon-tile" style="background: rgba(220, 38, 38, 0.6); border: 1px solid rgba(239, 68, 68, 0.3); color: rgba(255, 255, 255, 0.7);">
                    <svg class="icon-svg small" viewBox="0 0 24 24" fill="currentColor" stroke="none">
                        <polygon points="6 3 20 12 6 21 6 3" />
                    </svg>
                </div>
            },
            Platform::Terabox => html! {
                <div class="icon-tile" style="background: linear-gradient(135deg, rgba(96, 165, 250, 0.15), rgba(37, 99, 235, 0.15)); border: 1px solid rgba(96, 165, 250, 0.2); color: rgba(96, 165, 250, 0.7);">
                    <svg class="icon-svg" viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <path d="m7.5 4.27 9 5.15" />
                        <path d="M21 8a2 2 0 0 0-1-1.73l-7-4a2 2 0 0 0-2 0l-7 4A2 2 0 0 0 3 8v8a2 2 0 0 0 1 1.73l7 4a2 2 0 0 0 2 0l7-4A2 2 0 0 0 21 16Z" />
                        <path d="m3.3 7 8.7 5 8.7-5" />
                        <path d="M12 22V12" />
                    </svg>
                </div>
            },
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct PlatformIconProps {
    pub platform: Platform,
    #[prop_or_default]
    pub coming_soon: bool,
}

#[function_component(PlatformIcon)]
pub fn platform_icon(props: &PlatformIconProps) -> Html {
    let platform = props.platform;
    let glow = platform.glow();
    let offset = platform.idle_offset_s();

    let state_class = if props.coming_soon { "icon-coming-soon" } else { "icon-clickable" };

    html! {
        <div
            class={classes!("icon-container", state_class, format!("icon-{}", platform.slug()))}
            style={format!("filter: drop-shadow(0 0 10px {});", glow)}
        >
            <style>
                {r#"
                    .icon-container {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 4rem;
                        height: 4rem;
                    }
                    .icon-pulse-ring {
                        position: absolute;
                        inset: 0.25rem;
                        border-radius: 1rem;
                        border: 1px solid;
                        opacity: 0;
                        animation: icon-pulse-ring 3s ease-out infinite;
                    }
                    .icon-inner {
                        position: relative;
                        z-index: 10;
                        transition: transform 0.3s var(--ease-out);
                        animation-name: icon-float, icon-breathe;
                        animation-duration: 6s, 4s;
                        animation-timing-function: ease-in-out, ease-in-out;
                        animation-iteration-count: infinite, infinite;
                    }
                    .icon-clickable:hover .icon-inner {
                        transform: scale(1.08);
                    }
                    .icon-coming-soon .icon-inner {
                        filter: grayscale(0.35);
                    }
                    .icon-tile {
                        position: relative;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        width: 3rem;
                        height: 3rem;
                        border-radius: 0.75rem;
                        backdrop-filter: blur(4px);
                    }
                    .icon-svg {
                        width: 1.75rem;
                        height: 1.75rem;
                    }
                    .icon-svg.small {
                        width: 1.5rem;
                        height: 1.5rem;
                    }
                    .icon-focus-ring {
                        position: absolute;
                        inset: -4px;
                        border-radius: 0.75rem;
                        border: 2px solid rgba(244, 114, 182, 0.3);
                        pointer-events: none;
                    }
                    .icon-hover-scanline {
                        position: absolute;
                        inset: 0;
                        border-radius: 0.5rem;
                        pointer-events: none;
                        opacity: 0;
                        background: linear-gradient(180deg, transparent 0%, hsl(var(--primary) / 0.15) 50%, transparent 100%);
                        background-size: 100% 200%;
                        transition: opacity 0.3s ease;
                    }
                    .icon-clickable:hover .icon-hover-scanline {
                        opacity: 1;
                        animation: shimmer 1.5s linear infinite;
                    }
                    @keyframes icon-pulse-ring {
                        0% { transform: scale(0.9); opacity: 0.6; }
                        100% { transform: scale(1.3); opacity: 0; }
                    }
                    @keyframes icon-float {
                        0%, 100% { transform: translateY(0); }
                        50% { transform: translateY(-3px); }
                    }
                    @keyframes icon-breathe {
                        0%, 100% { opacity: 1; }
                        50% { opacity: 0.85; }
                    }
                "#}
            </style>
            {
                if props.coming_soon {
                    html! {}
                } else {
                    html! {
                        <div class="icon-pulse-ring" style={format!("border-color: {}; animation-delay: {}s;", glow, offset)}></div>
                    }
                }
            }
            <div class="icon-inner" style={format!("animation-delay: {}s, {}s;", offset, offset + 2.0)}>
                { platform.glyph() }
            </div>
            <div class="icon-hover-scanline"></div>
        </div>
    }
}

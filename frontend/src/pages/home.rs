use chrono::Datelike;
use gloo_timers::callback::Timeout;
use log::info;
use yew::prelude::*;

use crate::components::{
    animated_title::AnimatedTitle,
    background::Background,
    beacon::Beacon,
    loading_screen::LoadingScreen,
    orb_cursor::OrbCursor,
    platform_card::PlatformCard,
    platform_icons::Platform,
};
use crate::config;
use crate::motion::gate::{GateAction, LoadingGate};
use crate::theme::Hsl;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PlatformEntry {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub platform: Platform,
    pub href: Option<&'static str>,
    pub coming_soon: bool,
    pub accent: Hsl,
}

pub const PLATFORMS: &[PlatformEntry] = &[
    PlatformEntry {
        title: "Pinterest Downloader",
        subtitle: "Images & Videos",
        platform: Platform::Pinterest,
        href: Some("https://pin-dl-9fkx.vercel.app/"),
        coming_soon: false,
        accent: Hsl::new(354, 82, 50),
    },
    PlatformEntry {
        title: "Twitter / X Downloader",
        subtitle: "Videos, Images & GIFs",
        platform: Platform::Twitter,
        href: Some("https://x-dnl.netlify.app/"),
        coming_soon: false,
        accent: Hsl::new(203, 89, 53),
    },
    PlatformEntry {
        title: "Instagram / Facebook",
        subtitle: "Reels, Posts & Videos",
        platform: Platform::Instagram,
        href: Some("https://insta-dnl.netlify.app/"),
        coming_soon: false,
        accent: Hsl::new(326, 78, 51),
    },
    PlatformEntry {
        title: "TikTok Downloader",
        subtitle: "Coming Soon",
        platform: Platform::TikTok,
        href: None,
        coming_soon: true,
        accent: Hsl::new(330, 80, 60),
    },
    PlatformEntry {
        title: "YouTube Downloader",
        subtitle: "Coming Soon",
        platform: Platform::YouTube,
        href: None,
        coming_soon: true,
        accent: Hsl::new(0, 100, 50),
    },
    PlatformEntry {
        title: "Terabox Downloader",
        subtitle: "Coming Soon",
        platform: Platform::Terabox,
        href: None,
        coming_soon: true,
        accent: Hsl::new(210, 100, 56),
    },
];

pub fn card_delay_ms(index: usize) -> u32 {
    config::CARD_BASE_DELAY_MS + index as u32 * config::CARD_STAGGER_MS
}

#[function_component(Home)]
pub fn home() -> Html {
    let gate = use_reducer(LoadingGate::default);
    let release_timer = use_mut_ref(|| None::<Timeout>);

    // Drop a pending release if the page goes away first.
    {
        let release_timer = release_timer.clone();
        use_effect_with_deps(
            move |_| {
                move || {
                    release_timer.borrow_mut().take();
                }
            },
            (),
        );
    }

    let handle_background_loaded = {
        let dispatcher = gate.dispatcher();
        let release_timer = release_timer.clone();
        Callback::from(move |_: ()| {
            // One release timer per page, however often readiness is reported.
            if release_timer.borrow().is_some() {
                return;
            }
            dispatcher.dispatch(GateAction::Ready);
            let dispatcher = dispatcher.clone();
            // Small delay so the overlay does not snap away.
            let timer = Timeout::new(config::LOADING_RELEASE_DELAY_MS, move || {
                info!("Loading screen released");
                dispatcher.dispatch(GateAction::Release);
            });
            *release_timer.borrow_mut() = Some(timer);
        })
    };

    let year = chrono::Local::now().year();

    html! {
        <div class="home film-grain">
            <style>
                {r#"
                    .home {
                        position: relative;
                        min-height: 100vh;
                        overflow: hidden;
                    }
                    .home-content {
                        position: relative;
                        z-index: 10;
                        min-height: 100vh;
                        display: flex;
                        flex-direction: column;
                    }
                    .hero {
                        flex-shrink: 0;
                        padding: 4rem 1.5rem 2rem;
                    }
                    .hero-inner, .footer-inner {
                        max-width: 56rem;
                        margin: 0 auto;
                        text-align: center;
                    }
                    .hero-beacon {
                        display: flex;
                        justify-content: center;
                        margin-bottom: 1.5rem;
                    }
                    .hero-subtitle {
                        margin: 0;
                        font-size: 1.125rem;
                        letter-spacing: 0.025em;
                    }
                    .platforms {
                        flex: 1;
                        padding: 2rem 1.5rem;
                    }
                    .platform-grid {
                        max-width: 64rem;
                        margin: 0 auto;
                        display: grid;
                        grid-template-columns: 1fr;
                        gap: 1.25rem;
                    }
                    @media (min-width: 640px) {
                        .platform-grid { grid-template-columns: repeat(2, 1fr); }
                    }
                    @media (min-width: 768px) {
                        .hero { padding: 6rem 1.5rem 3rem; }
                        .hero-subtitle { font-size: 1.25rem; }
                        .platforms { padding: 3rem 1.5rem; }
                        .platform-grid { gap: 1.5rem; }
                    }
                    @media (min-width: 1024px) {
                        .platform-grid { grid-template-columns: repeat(3, 1fr); }
                    }
                    .footer {
                        flex-shrink: 0;
                        padding: 2rem 1.5rem;
                    }
                    .footer-line {
                        height: 1px;
                        width: 12rem;
                        margin: 0 auto 1.5rem;
                        opacity: 0.2;
                        background: linear-gradient(90deg, transparent, hsl(var(--primary)), transparent);
                    }
                    .footer-note {
                        margin: 0;
                        font-size: 0.875rem;
                        letter-spacing: 0.025em;
                        color: hsl(var(--muted-foreground) / 0.5);
                    }
                "#}
            </style>

            <LoadingScreen is_loading={gate.is_loading()} />
            <OrbCursor />
            <Background on_loaded={handle_background_loaded} />

            <div class="home-content">
                <header class="hero">
                    <div class="hero-inner">
                        <div class="hero-beacon">
                            <Beacon />
                        </div>
                        <AnimatedTitle text="Universal Downloader" />
                        <p class="hero-subtitle text-muted animate-fade-in" style="animation-delay: 100ms;">
                            {"Premium all-in-one media downloader"}
                        </p>
                    </div>
                </header>

                <main class="platforms">
                    <div class="platform-grid">
                        { for PLATFORMS.iter().enumerate().map(|(index, entry)| html! {
                            <PlatformCard
                                key={entry.title}
                                title={entry.title}
                                subtitle={entry.subtitle}
                                platform={entry.platform}
                                href={entry.href.map(AttrValue::from)}
                                coming_soon={entry.coming_soon}
                                accent={entry.accent}
                                delay_ms={card_delay_ms(index)}
                            />
                        }) }
                    </div>
                </main>

                <footer class="footer">
                    <div class="footer-inner">
                        <div class="footer-line"></div>
                        <p class="footer-note">{format!("© {} · Universal Downloader", year)}</p>
                    </div>
                </footer>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enabled_entries_have_links_and_disabled_do_not() {
        assert_eq!(PLATFORMS.len(), 6);
        for entry in PLATFORMS {
            assert_eq!(entry.href.is_some(), !entry.coming_soon, "{}", entry.title);
        }
        let enabled: Vec<&str> = PLATFORMS.iter().filter_map(|entry| entry.href).collect();
        assert_eq!(
            enabled,
            vec![
                "https://pin-dl-9fkx.vercel.app/",
                "https://x-dnl.netlify.app/",
                "https://insta-dnl.netlify.app/",
            ]
        );
    }

    #[test]
    fn titles_are_unique_keys() {
        let mut titles: Vec<&str> = PLATFORMS.iter().map(|entry| entry.title).collect();
        titles.sort_unstable();
        titles.dedup();
        assert_eq!(titles.len(), PLATFORMS.len());
    }

    #[test]
    fn cards_enter_in_list_order() {
        let delays: Vec<u32> = (0..PLATFORMS.len()).map(card_delay_ms).collect();
        assert_eq!(delays, vec![200, 300, 400, 500, 600, 700]);
    }
}

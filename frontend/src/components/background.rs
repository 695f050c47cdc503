use gloo_timers::callback::Timeout;
use log::{debug, info, warn};
use web_sys::{Event, HtmlVideoElement};
use yew::prelude::*;

use crate::browser::{self, Subscription};
use crate::config;

#[derive(Properties, PartialEq)]
pub struct BackgroundProps {
    /// Fired once, when the page behind the loading screen is presentable.
    #[prop_or_default]
    pub on_loaded: Callback<()>,
}

fn initial_reduced_motion() -> bool {
    browser::prefers_reduced_motion().unwrap_or_else(|err| {
        warn!("Could not read motion preference, using static background: {}", err);
        true
    })
}

/// Lets the first ready signal through and swallows the rest.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub(crate) struct ReadyLatch {
    fired: bool,
}

impl ReadyLatch {
    pub(crate) fn fire(&mut self) -> bool {
        !std::mem::replace(&mut self.fired, true)
    }
}

pub(crate) fn renders_video(reduced_motion: bool) -> bool {
    !reduced_motion
}

pub(crate) fn gradient_opacity(video_loaded: bool, reduced_motion: bool) -> u8 {
    if video_loaded && !reduced_motion { 0 } else { 1 }
}

#[function_component(Background)]
pub fn background(props: &BackgroundProps) -> Html {
    let video_ref = use_node_ref();
    let video_loaded = use_state(|| false);
    let reduced_motion = use_state(initial_reduced_motion);
    let latch = use_mut_ref(ReadyLatch::default);

    let signal_ready = {
        let latch = latch.clone();
        let on_loaded = props.on_loaded.clone();
        Callback::from(move |reason: &'static str| {
            if !latch.borrow_mut().fire() {
                return;
            }
            info!("Background ready ({})", reason);
            on_loaded.emit(());
        })
    };

    // Follow live changes of the motion preference.
    {
        let reduced_motion = reduced_motion.clone();
        use_effect_with_deps(
            move |_| {
                let subscription = browser::reduced_motion_query().and_then(|query| {
                    let watched = query.clone();
                    Subscription::new(query.as_ref(), "change", move |_: Event| {
                        debug!("Reduced motion preference changed: {}", watched.matches());
                        reduced_motion.set(watched.matches());
                    })
                });
                if let Err(err) = &subscription {
                    warn!("Not watching motion preference: {}", err);
                }
                move || drop(subscription)
            },
            (),
        );
    }

    // Never let the loading screen wait on a video that will not come.
    {
        let signal_ready = signal_ready.clone();
        use_effect_with_deps(
            move |reduced| {
                let fallback = if *reduced {
                    signal_ready.emit("reduced motion");
                    None
                } else {
                    Some(Timeout::new(config::BACKGROUND_FALLBACK_MS, move || {
                        signal_ready.emit("fallback timeout");
                    }))
                };
                move || drop(fallback)
            },
            *reduced_motion,
        );
    }

    {
        let video_ref = video_ref.clone();
        use_effect_with_deps(
            move |_| {
                if let Some(video) = video_ref.cast::<HtmlVideoElement>() {
                    video.set_muted(true);
                    video.set_playback_rate(config::VIDEO_PLAYBACK_RATE);
                }
                || ()
            },
            *reduced_motion,
        );
    }

    let on_loaded_data = {
        let video_loaded = video_loaded.clone();
        let signal_ready = signal_ready.clone();
        Callback::from(move |_: Event| {
            video_loaded.set(true);
            signal_ready.emit("video loaded");
        })
    };

    let on_error = {
        let signal_ready = signal_ready.clone();
        Callback::from(move |_: Event| {
            warn!("Background video failed to load, keeping gradient");
            signal_ready.emit("video error");
        })
    };

    let video_src = config::background_video_src();

    html! {
        <div class="background">
            <style>
                {r#"
                    .background {
                        position: fixed;
                        inset: 0;
                        overflow: hidden;
                        pointer-events: none;
                    }
                    .background-layer {
                        position: absolute;
                        inset: 0;
                    }
                    .background-gradient {
                        transition: opacity 1000ms ease;
                        background:
                            radial-gradient(ellipse 80% 50% at 50% 0%, hsl(270 30% 15%) 0%, transparent 50%),
                            radial-gradient(ellipse 60% 40% at 20% 100%, hsl(240 40% 20% / 0.3) 0%, transparent 40%),
                            radial-gradient(ellipse 60% 40% at 80% 100%, hsl(280 30% 15% / 0.2) 0%, transparent 40%),
                            linear-gradient(180deg, hsl(250 25% 8%) 0%, hsl(240 20% 12%) 100%);
                    }
                    .background-video {
                        width: 100%;
                        height: 100%;
                        object-fit: cover;
                        transition: opacity 1000ms ease;
                        filter: brightness(0.7) saturate(1.2);
                    }
                    .background-overlay {
                        background: linear-gradient(180deg, hsl(0 0% 0% / 0.55) 0%, hsl(0 0% 0% / 0.45) 30%, hsl(0 0% 0% / 0.6) 100%);
                    }
                    .background-vignette {
                        background: radial-gradient(ellipse 70% 60% at 50% 50%, transparent 0%, hsl(0 0% 0% / 0.7) 100%);
                    }
                "#}
            </style>

            <div
                class="background-layer background-gradient"
                style={format!("opacity: {};", gradient_opacity(*video_loaded, *reduced_motion))}
            ></div>

            {
                if renders_video(*reduced_motion) {
                    html! {
                        <video
                            ref={video_ref}
                            src={video_src}
                            class="background-layer background-video"
                            style={format!("opacity: {};", if *video_loaded { 1 } else { 0 })}
                            autoplay={true}
                            loop={true}
                            muted={true}
                            playsinline={true}
                            onloadeddata={on_loaded_data}
                            onerror={on_error}
                        />
                    }
                } else {
                    html! {}
                }
            }

            <div class="background-layer background-overlay"></div>
            <div class="background-layer background-vignette"></div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn gradient_only_fades_out_for_a_playing_video() {
        assert_eq!(gradient_opacity(false, false), 1);
        assert_eq!(gradient_opacity(true, false), 0);
        assert_eq!(gradient_opacity(false, true), 1);
        assert_eq!(gradient_opacity(true, true), 1);
    }

    #[test]
    fn ready_fires_once_across_sources() {
        let mut latch = ReadyLatch::default();
        assert!(latch.fire());
        // Error, fallback timeout and a late loadeddata after the first signal.
        assert!(!latch.fire());
        assert!(!latch.fire());
        assert!(!latch.fire());
    }

    #[test]
    fn reduced_motion_never_renders_the_video() {
        assert!(!renders_video(true));
        assert!(renders_video(false));
    }
}

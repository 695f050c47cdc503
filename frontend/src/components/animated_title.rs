use gloo_timers::callback::Timeout;
use log::debug;
use yew::prelude::*;

use crate::motion::title::{Glyph, TitleLayout, TitlePhase, TitleState};

#[derive(Properties, PartialEq)]
pub struct AnimatedTitleProps {
    pub text: AttrValue,
    #[prop_or_default]
    pub class: Classes,
}

fn glyph_style(glyph: &Glyph, phase: TitlePhase) -> String {
    if phase.is_idle() {
        // The entrance already ran; swap to the idle loop with its own offset.
        format!(
            "animation: letter-idle 4s ease-in-out {}s infinite;",
            glyph.idle_delay_s
        )
    } else {
        format!("animation-delay: {}ms;", glyph.enter_delay_ms)
    }
}

#[function_component(AnimatedTitle)]
pub fn animated_title(props: &AnimatedTitleProps) -> Html {
    let title = use_reducer(TitleState::default);

    {
        let dispatcher = title.dispatcher();
        // Runs once per mount; text changes do not replay the intro.
        use_effect_with_deps(
            move |_| {
                let timers: Vec<Timeout> = TitlePhase::SCHEDULE
                    .into_iter()
                    .map(|(phase, delay)| {
                        let dispatcher = dispatcher.clone();
                        Timeout::new(delay, move || {
                            debug!("Title phase reached: {:?}", phase);
                            dispatcher.dispatch(phase);
                        })
                    })
                    .collect();
                move || drop(timers)
            },
            (),
        );
    }

    let phase = title.phase;
    let layout = TitleLayout::new(&props.text);
    let word_count = layout.words.len();

    let letter_state = if phase.has_entered() { "letter-in" } else { "letter-out" };

    html! {
        <h1 class={classes!("animated-title", "font-display", props.class.clone())}>
            <style>
                {r#"
                    .animated-title {
                        position: relative;
                        margin: 0 0 1.5rem;
                        font-weight: 700;
                        letter-spacing: -0.02em;
                        font-size: 3rem;
                        line-height: 1.05;
                    }
                    @media (min-width: 768px) {
                        .animated-title { font-size: 4.5rem; }
                    }
                    @media (min-width: 1024px) {
                        .animated-title { font-size: 6rem; }
                    }
                    .title-body {
                        position: relative;
                        display: inline-block;
                        overflow: hidden;
                    }
                    .title-word, .title-gap, .letter {
                        display: inline-block;
                    }
                    .title-gap {
                        width: 0.3em;
                    }
                    .letter {
                        background: linear-gradient(180deg, hsl(0 0% 100%) 0%, hsl(var(--gotham-fog)) 55%, hsl(var(--gotham-steel)) 100%);
                        -webkit-background-clip: text;
                        background-clip: text;
                        color: transparent;
                    }
                    .letter-out {
                        opacity: 0;
                        transform: translateY(0.4em) scale(0.96);
                        filter: blur(6px);
                    }
                    .letter-in {
                        animation: letter-in 0.8s var(--ease-out) both;
                    }
                    @keyframes letter-in {
                        0% { opacity: 0; transform: translateY(0.4em) scale(0.96); filter: blur(6px); }
                        100% { opacity: 1; transform: none; filter: blur(0); }
                    }
                    @keyframes letter-idle {
                        0%, 100% { transform: translateY(0); text-shadow: none; }
                        50% { transform: translateY(-2px); text-shadow: 0 0 18px hsl(var(--primary) / 0.35); }
                    }
                    .title-shine {
                        position: absolute;
                        inset: 0;
                        pointer-events: none;
                        background: linear-gradient(105deg, transparent 35%, hsl(0 0% 100% / 0.45) 50%, transparent 65%);
                        transform: translateX(-120%);
                        opacity: 0;
                    }
                    .title-shine.shine-active {
                        animation: title-shine 1.2s ease-in-out forwards;
                    }
                    @keyframes title-shine {
                        0% { transform: translateX(-120%); opacity: 1; }
                        100% { transform: translateX(120%); opacity: 0; }
                    }
                "#}
            </style>
            <span class="title-body">
                { for layout.words.iter().enumerate().map(|(word_index, word)| html! {
                    <span key={word_index} class="title-word">
                        { for word.iter().map(|glyph| html! {
                            <span
                                key={glyph.index}
                                class={classes!("letter", letter_state, phase.is_idle().then(|| "letter-idle"))}
                                style={glyph_style(glyph, phase)}
                                data-text={glyph.ch.to_string()}
                            >
                                { glyph.ch.to_string() }
                            </span>
                        }) }
                        {
                            if word_index + 1 < word_count {
                                html! { <span class="title-gap">{"\u{00a0}"}</span> }
                            } else {
                                html! {}
                            }
                        }
                    </span>
                }) }
                <span class={classes!("title-shine", phase.shine_active().then(|| "shine-active"))}></span>
            </span>
        </h1>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entrance_uses_the_stagger_delay() {
        let layout = TitleLayout::new("Go Now");
        let glyph = &layout.words[1][1];
        assert_eq!(glyph_style(glyph, TitlePhase::Entered), "animation-delay: 240ms;");
        assert_eq!(glyph_style(glyph, TitlePhase::ShineActive), "animation-delay: 240ms;");
    }

    #[test]
    fn idle_switches_to_the_idle_loop() {
        let layout = TitleLayout::new("Go");
        let style = glyph_style(&layout.words[0][1], TitlePhase::Idle);
        assert!(style.starts_with("animation: letter-idle"));
        assert!(style.contains("0.15s"));
    }
}

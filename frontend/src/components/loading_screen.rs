use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct LoadingScreenProps {
    pub is_loading: bool,
}

#[function_component(LoadingScreen)]
pub fn loading_screen(props: &LoadingScreenProps) -> Html {
    let state_class = if props.is_loading { "loading-visible" } else { "loading-hidden" };

    html! {
        <div
            class={classes!("loading-screen", state_class)}
            aria-busy={props.is_loading.to_string()}
            aria-hidden={(!props.is_loading).to_string()}
        >
            <style>
                {r#"
                    .loading-screen {
                        position: fixed;
                        inset: 0;
                        z-index: 50;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        justify-content: center;
                        background: hsl(var(--background));
                        transition: opacity 700ms ease, visibility 700ms ease;
                    }
                    .loading-visible {
                        opacity: 1;
                        visibility: visible;
                    }
                    .loading-hidden {
                        opacity: 0;
                        visibility: hidden;
                        pointer-events: none;
                    }
                    .loading-backdrop {
                        position: absolute;
                        inset: 0;
                        background:
                            radial-gradient(ellipse 60% 40% at 50% 30%, hsl(270 30% 12%) 0%, transparent 60%),
                            linear-gradient(180deg, hsl(250 25% 6%) 0%, hsl(240 20% 10%) 100%);
                    }
                    .loading-body {
                        position: relative;
                        z-index: 10;
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 2rem;
                    }
                    .loading-orb {
                        position: relative;
                        width: 6rem;
                        height: 6rem;
                    }
                    .loading-ring {
                        position: absolute;
                        border-radius: 9999px;
                        animation-duration: 2s;
                    }
                    .loading-ring.r0 { inset: 0; border: 1px solid hsl(var(--primary) / 0.3); }
                    .loading-ring.r1 { inset: 0.5rem; border: 1px solid hsl(var(--primary) / 0.2); animation-delay: 0.3s; }
                    .loading-ring.r2 { inset: 1rem; border: 1px solid hsl(var(--primary) / 0.1); animation-delay: 0.6s; }
                    .loading-core {
                        position: absolute;
                        inset: 1.5rem;
                        border-radius: 9999px;
                        background: radial-gradient(circle, hsl(var(--primary)) 0%, hsl(var(--primary) / 0.5) 50%, transparent 70%);
                        box-shadow: 0 0 40px hsl(var(--primary) / 0.5), 0 0 80px hsl(var(--primary) / 0.3);
                    }
                    .loading-label {
                        display: flex;
                        flex-direction: column;
                        align-items: center;
                        gap: 0.75rem;
                    }
                    .loading-label p {
                        margin: 0;
                        color: hsl(var(--foreground) / 0.8);
                        font-size: 1.125rem;
                        letter-spacing: 0.1em;
                        text-transform: uppercase;
                    }
                    .loading-dots {
                        display: flex;
                        gap: 0.375rem;
                    }
                    .loading-dot {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: hsl(var(--primary));
                        animation-duration: 0.8s;
                    }
                    .loading-fade {
                        position: absolute;
                        left: 0;
                        right: 0;
                        bottom: 0;
                        height: 8rem;
                        background: linear-gradient(to top, hsl(var(--primary) / 0.05), transparent);
                    }
                "#}
            </style>
            <div class="loading-backdrop"></div>

            <div class="loading-body">
                <div class="loading-orb">
                    <div class="loading-ring r0 animate-ping"></div>
                    <div class="loading-ring r1 animate-ping"></div>
                    <div class="loading-ring r2 animate-ping"></div>
                    <div class="loading-core animate-pulse"></div>
                </div>

                <div class="loading-label">
                    <p class="font-display">{"Loading"}</p>
                    <div class="loading-dots">
                        { for (0..3).map(|i| html! {
                            <div
                                key={i}
                                class="loading-dot animate-bounce"
                                style={format!("animation-delay: {}s;", i as f64 * 0.15)}
                            ></div>
                        }) }
                    </div>
                </div>
            </div>

            <div class="loading-fade"></div>
        </div>
    }
}

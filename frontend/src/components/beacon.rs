use yew::prelude::*;

#[function_component(Beacon)]
pub fn beacon() -> Html {
    html! {
        <div class="beacon">
            <style>
                {r#"
                    .beacon {
                        position: relative;
                        display: inline-flex;
                        align-items: center;
                        justify-content: center;
                        width: 1rem;
                        height: 1rem;
                    }
                    .beacon-ring {
                        position: absolute;
                        border-radius: 9999px;
                        animation: beacon-pulse 2.4s ease-in-out infinite;
                    }
                    .beacon-ring.outer {
                        width: 1rem;
                        height: 1rem;
                        background: hsl(var(--accent) / 0.2);
                    }
                    .beacon-ring.middle {
                        width: 0.75rem;
                        height: 0.75rem;
                        background: hsl(var(--accent) / 0.4);
                    }
                    .beacon-core {
                        width: 0.5rem;
                        height: 0.5rem;
                        border-radius: 9999px;
                        background: hsl(var(--accent));
                        box-shadow: var(--glow-gold);
                        animation: beacon-pulse 2.4s ease-in-out infinite;
                    }
                    @keyframes beacon-pulse {
                        0%, 100% { transform: scale(1); opacity: 1; }
                        50% { transform: scale(1.35); opacity: 0.55; }
                    }
                "#}
            </style>
            <div class="beacon-ring outer" style="animation-delay: 0.2s;"></div>
            <div class="beacon-ring middle" style="animation-delay: 0.1s;"></div>
            <div class="beacon-core"></div>
        </div>
    }
}

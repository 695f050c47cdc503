use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

/// Human-readable form of the requested path.
pub fn display_path(raw: &str) -> String {
    urlencoding::decode(raw)
        .map(|path| path.into_owned())
        .unwrap_or_else(|_| raw.to_string())
}

#[function_component(NotFound)]
pub fn not_found() -> Html {
    let path = use_location()
        .map(|location| display_path(location.path()))
        .unwrap_or_default();

    {
        let path = path.clone();
        use_effect_with_deps(
            move |path| {
                gloo_console::error!("404: user attempted to access non-existent route:", path.clone());
                || ()
            },
            path,
        );
    }

    html! {
        <div class="not-found">
            <style>
                {r#"
                    .not-found {
                        min-height: 100vh;
                        display: flex;
                        align-items: center;
                        justify-content: center;
                        text-align: center;
                        background: hsl(var(--background));
                    }
                    .not-found h1 {
                        margin: 0 0 1rem;
                        font-size: 2.25rem;
                        font-weight: 700;
                    }
                    .not-found p {
                        margin: 0 0 1rem;
                        font-size: 1.25rem;
                    }
                    .not-found-path {
                        font-family: monospace;
                        font-size: 0.875rem;
                        color: hsl(var(--muted-foreground) / 0.7);
                    }
                    .not-found-home {
                        color: hsl(var(--primary));
                        text-decoration: underline;
                    }
                    .not-found-home:hover {
                        color: hsl(var(--primary) / 0.8);
                    }
                "#}
            </style>
            <div>
                <h1 class="font-display">{"404"}</h1>
                <p class="text-muted">{"Oops! Page not found"}</p>
                <p class="not-found-path">{path}</p>
                <Link<Route> to={Route::Home} classes="not-found-home">
                    {"Return to Home"}
                </Link<Route>>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decodes_percent_escapes() {
        assert_eq!(display_path("/caf%C3%A9/menu%20list"), "/café/menu list");
    }

    #[test]
    fn keeps_invalid_sequences_verbatim() {
        assert_eq!(display_path("/broken%FF"), "/broken%FF");
    }
}

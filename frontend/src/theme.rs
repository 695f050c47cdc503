use std::fmt;

/// An HSL color used for per-platform accents.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Hsl {
    pub hue: u16,
    pub saturation: u8,
    pub lightness: u8,
}

impl Hsl {
    pub const fn new(hue: u16, saturation: u8, lightness: u8) -> Self {
        Self { hue, saturation, lightness }
    }

    /// Space-separated form with an alpha channel, e.g. `hsl(354 82% 50% / 0.6)`.
    pub fn with_alpha(&self, alpha: f64) -> String {
        format!(
            "hsl({} {}% {}% / {})",
            self.hue, self.saturation, self.lightness, alpha
        )
    }
}

impl fmt::Display for Hsl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "hsl({}, {}%, {}%)", self.hue, self.saturation, self.lightness)
    }
}

pub const PRIMARY: Hsl = Hsl::new(190, 95, 55);

/// Design tokens exposed as CSS custom properties on `:root`.
/// Values are bare HSL triples so styles can write `hsl(var(--primary) / 0.4)`.
pub const TOKENS: &[(&str, &str)] = &[
    ("background", "240 20% 6%"),
    ("foreground", "210 20% 92%"),
    ("card", "240 15% 10%"),
    ("border", "220 20% 20%"),
    ("primary", "190 95% 55%"),
    ("primary-foreground", "240 20% 6%"),
    ("accent", "45 90% 55%"),
    ("muted", "230 15% 16%"),
    ("muted-foreground", "215 15% 65%"),
    ("gotham-void", "240 30% 4%"),
    ("gotham-graphite", "230 15% 14%"),
    ("gotham-steel", "215 20% 35%"),
    ("gotham-cyan", "190 95% 55%"),
    ("gotham-gold", "45 90% 55%"),
    ("gotham-fog", "220 15% 75%"),
];

pub const FONT_DISPLAY: &str = "'Oswald', sans-serif";
pub const FONT_BODY: &str = "'Inter', sans-serif";
pub const EASE_OUT: &str = "cubic-bezier(0.16, 1, 0.3, 1)";
pub const RADIUS: &str = "0.75rem";

pub fn global_stylesheet() -> String {
    let mut root = String::from(":root {\n");
    for (name, value) in TOKENS {
        root.push_str(&format!("    --{}: {};\n", name, value));
    }
    root.push_str(&format!("    --radius: {};\n", RADIUS));
    root.push_str(&format!("    --ease-out: {};\n", EASE_OUT));
    root.push_str(&format!("    --font-display: {};\n", FONT_DISPLAY));
    root.push_str(&format!("    --font-body: {};\n", FONT_BODY));
    root.push_str("    --glow-cyan: 0 0 20px hsl(var(--gotham-cyan) / 0.35);\n");
    root.push_str("    --glow-gold: 0 0 12px hsl(var(--gotham-gold) / 0.6);\n");
    root.push_str("}\n");
    root.push_str(BASE_STYLES);
    root
}

const BASE_STYLES: &str = r#"
    *, *::before, *::after {
        box-sizing: border-box;
    }
    html, body {
        margin: 0;
        padding: 0;
        background: hsl(var(--background));
        color: hsl(var(--foreground));
        font-family: var(--font-body);
        -webkit-font-smoothing: antialiased;
    }
    a {
        color: inherit;
    }
    .font-display {
        font-family: var(--font-display);
    }
    .text-muted {
        color: hsl(var(--muted-foreground));
    }
    .text-primary {
        color: hsl(var(--primary));
    }
    @keyframes fade-in {
        0% { opacity: 0; transform: translateY(20px); }
        100% { opacity: 1; transform: translateY(0); }
    }
    @keyframes float {
        0%, 100% { transform: translateY(0); }
        50% { transform: translateY(-10px); }
    }
    @keyframes pulse-slow {
        0%, 100% { opacity: 1; }
        50% { opacity: 0.6; }
    }
    @keyframes pulse {
        50% { opacity: 0.5; }
    }
    @keyframes ping {
        75%, 100% { transform: scale(2); opacity: 0; }
    }
    @keyframes bounce {
        0%, 100% { transform: translateY(-25%); animation-timing-function: cubic-bezier(0.8, 0, 1, 1); }
        50% { transform: none; animation-timing-function: cubic-bezier(0, 0, 0.2, 1); }
    }
    @keyframes shimmer {
        0% { background-position: -200% 0; }
        100% { background-position: 200% 0; }
    }
    .animate-fade-in {
        opacity: 0;
        animation: fade-in 0.6s ease-out forwards;
    }
    .animate-pulse {
        animation: pulse 2s cubic-bezier(0.4, 0, 0.6, 1) infinite;
    }
    .animate-ping {
        animation: ping 1s cubic-bezier(0, 0, 0.2, 1) infinite;
    }
    .animate-bounce {
        animation: bounce 1s infinite;
    }
    .film-grain::after {
        content: '';
        position: fixed;
        inset: 0;
        pointer-events: none;
        z-index: 40;
        opacity: 0.04;
        background-image: repeating-radial-gradient(circle at 17% 32%, hsl(0 0% 100%) 0 1px, transparent 1px 3px);
    }
    @media (prefers-reduced-motion: reduce) {
        *, *::before, *::after {
            animation-duration: 0.01ms !important;
            animation-iteration-count: 1 !important;
            transition-duration: 0.01ms !important;
        }
    }
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hsl_formats_both_notations() {
        let pinterest = Hsl::new(354, 82, 50);
        assert_eq!(pinterest.to_string(), "hsl(354, 82%, 50%)");
        assert_eq!(pinterest.with_alpha(0.6), "hsl(354 82% 50% / 0.6)");
    }

    #[test]
    fn stylesheet_declares_every_token() {
        let css = global_stylesheet();
        for (name, value) in TOKENS {
            assert!(css.contains(&format!("--{}: {};", name, value)), "missing token {}", name);
        }
        assert!(css.contains("@keyframes fade-in"));
    }
}

//! Shared UI constants: palette, animation tuning and the page bridge script.

pub const BG_BASE: &str = "#000000";
pub const BG_ELEVATED: &str = "#0d0d0d";
pub const GLASS_FILL: &str = "rgba(255, 255, 255, 0.03)";

pub const BORDER_SUBTLE: &str = "rgba(255, 255, 255, 0.1)";
pub const BORDER_DEFAULT: &str = "rgba(255, 255, 255, 0.2)";

pub const TEXT_PRIMARY: &str = "#ffffff";
pub const TEXT_SECONDARY: &str = "rgba(255, 255, 255, 0.7)";
pub const TEXT_MUTED: &str = "rgba(255, 255, 255, 0.5)";
pub const TEXT_DIM: &str = "rgba(255, 255, 255, 0.4)";

pub const ACCENT: &str = "#ef4444";
pub const ACCENT_SUCCESS: &str = "#22c55e";

pub const FONT_DISPLAY: &str = "'Bebas Neue', 'Oswald', Impact, sans-serif";
pub const FONT_BODY: &str = "'Inter', 'Helvetica Neue', Arial, sans-serif";

// Animation tuning. Every duration is in seconds, distances in px.

pub const DEFAULT_FRAME_RATE: f64 = 60.0;
/// Upper bound on the time step applied after a stalled frame.
pub const MAX_FRAME_STEP_SECS: f64 = 0.1;

pub const HERO_ENTRANCE_DELAY: f64 = 0.3;
pub const HERO_PARALLAX_SMOOTHING: f64 = 0.5;
pub const SCRUB_SMOOTHING: f64 = 0.5;

pub const REVEAL_DURATION: f64 = 1.0;
pub const ITEM_DURATION: f64 = 0.8;
pub const ITEM_STAGGER: f64 = 0.1;
pub const TITLE_REVEAL_DISTANCE: f64 = 80.0;
pub const ITEM_REVEAL_DISTANCE: f64 = 40.0;

pub const CARD_TILT_DEG: f64 = 8.0;
pub const DIAGONAL_SWAY_DEG: f64 = 2.0;
pub const MAGNETIC_STRENGTH: f64 = 0.2;
pub const BACKDROP_REST_SCALE: f64 = 0.95;
pub const VIEW_LABEL_FOLLOW: f64 = 0.3;
pub const VIEW_LABEL_REST_SCALE: f64 = 0.25;

pub const NAV_REVEAL_OFFSET_PX: f64 = 100.0;
pub const NAV_REVEAL_DURATION: f64 = 0.4;

pub const CURSOR_RING_FOLLOW: f64 = 0.08;
pub const CURSOR_DOT_FOLLOW: f64 = 0.02;
pub const CURSOR_RING_HOVER_SCALE: f64 = 1.5;

/// How long "Message Sent!" stays up before the form returns to idle.
pub const CONTACT_SUCCESS_DISPLAY_SECS: u64 = 3;

/// Installed once per window. Forwards raw page events to Rust and applies
/// the style writes Rust sends back.
pub const BRIDGE_SCRIPT: &str = r#"
const interactiveSelector = 'a, button, [role="button"], input, textarea, .cursor-pointer';
const reducedQuery = window.matchMedia("(prefers-reduced-motion: reduce)");
let tracked = [];

function isInteractive(target) {
    return !!(target && target.closest && target.closest(interactiveSelector));
}

dioxus.send({
    kind: "env",
    reduced_motion: reducedQuery.matches,
    touch: ("ontouchstart" in window) || navigator.maxTouchPoints > 0,
    width: window.innerWidth,
    height: window.innerHeight
});

reducedQuery.addEventListener("change", (e) => {
    dioxus.send({ kind: "reduced_motion", reduced: e.matches });
});
window.addEventListener("scroll", () => {
    dioxus.send({ kind: "scroll", y: window.scrollY });
}, { passive: true });
window.addEventListener("mousemove", (e) => {
    dioxus.send({ kind: "pointer", x: e.clientX, y: e.clientY, interactive: isInteractive(e.target) });
}, { passive: true });
window.addEventListener("resize", () => {
    dioxus.send({ kind: "resize", width: window.innerWidth, height: window.innerHeight });
}, { passive: true });

function frame(timestamp) {
    const rects = {};
    for (const id of tracked) {
        const el = document.getElementById(id);
        if (!el) {
            continue;
        }
        const r = el.getBoundingClientRect();
        rects[id] = { top: r.top, left: r.left, width: r.width, height: r.height };
    }
    dioxus.send({ kind: "frame", timestamp: timestamp, rects: rects });
    requestAnimationFrame(frame);
}
requestAnimationFrame(frame);

while (true) {
    const msg = await dioxus.recv();
    if (!msg) {
        continue;
    }
    if (msg.kind === "track") {
        tracked = msg.ids;
        continue;
    }
    if (msg.kind !== "styles") {
        continue;
    }
    for (const write of msg.writes) {
        const el = document.getElementById(write.id);
        if (!el) {
            continue;
        }
        for (const [name, value] of Object.entries(write.declarations)) {
            if (value === null) {
                el.style.removeProperty(name);
            } else {
                el.style.setProperty(name, value);
            }
        }
    }
}
"#;

pub const SCROLL_TO_TOP_SCRIPT: &str = r#"window.scrollTo({ top: 0, behavior: "smooth" });"#;

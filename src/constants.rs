// DOM mount points and class names used by the web front-end.

pub const CANVAS_ID: &str = "app-canvas";
pub const LOADING_SCREEN_ID: &str = "loading-screen";
pub const NAV_ID: &str = "nav";
pub const CONTENT_ID: &str = "content";
pub const HUD_SYNC_ID: &str = "hud-sync";

pub const REVEAL_SELECTOR: &str = ".reveal";
pub const REVEALED_CLASS: &str = "visible";
pub const HIDDEN_CLASS: &str = "hidden";

pub mod page;
pub mod pointer;
pub mod scroll;
pub mod terminal;

pub use page::{wire_nav_clicks, wire_project_filters};
pub use pointer::{wire_pointer, PointerWiring};
pub use scroll::{reveal_pass, sync_scroll, wire_scroll};
pub use terminal::wire_terminal;

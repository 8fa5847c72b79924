// File: src/assets.rs
// Purpose: Script tag for the client runtime that drives modals, toasts and date pickers

use maud::{html, Markup};

/// Conventional URL path the host application serves the runtime from.
pub const SCRIPT_PATH: &str = "/static/js/atom-components.js";

/// `<script>` tag pointing at [`SCRIPT_PATH`].
///
/// ```ignore
/// html! {
///     head { (atom_components::assets::script_tag()) }
/// }
/// ```
pub fn script_tag() -> Markup {
    script_tag_at(SCRIPT_PATH)
}

/// `<script>` tag for a runtime served from a custom location (CDN, hashed file name).
pub fn script_tag_at(src: &str) -> Markup {
    html! {
        script src=(src) defer {}
    }
}

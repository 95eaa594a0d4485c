//! Status Message Component
//!
//! Single line shown instead of the carousel while loading or after a failure.

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StatusKind {
    Loading,
    Error,
}

#[component]
pub fn StatusMessage(kind: StatusKind, #[prop(into)] text: String) -> impl IntoView {
    let class = match kind {
        StatusKind::Loading => "status status-loading",
        StatusKind::Error => "status status-error",
    };

    view! { <div class=class>{text}</div> }
}

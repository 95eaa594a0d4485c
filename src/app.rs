//! Diia Documents App
//!
//! Page controller: wires the identifier, the record loader and the
//! signature store to the view.

use leptos::prelude::*;
use leptos::task::spawn_local;
use leptos_signature::SignaturePad;
use reactive_stores::Store;

use crate::api::HttpRecordSource;
use crate::components::{DocumentCarousel, StatusKind, StatusMessage};
use crate::config::AppConfig;
use crate::context::PageContext;
use crate::identifier;
use crate::loader;
use crate::models::ViewState;
use crate::store::{store_begin_load, store_finish_load, store_view_state, PageState};

const LOADING_TEXT: &str = "Завантаження...";

#[component]
pub fn App() -> impl IntoView {
    let config = AppConfig::from_build_env();
    log::info!("starting with endpoint {}", config.endpoint);

    // Signature is restored synchronously from local storage here
    let store = Store::new(PageState::new(&config.fallback_message, &config.signature_key));
    provide_context(store);
    provide_context(PageContext::new(SignaturePad::new()));

    let (page_id, set_page_id) = signal(identifier::current_identifier(&config.id_param));
    identifier::bind_popstate(config.id_param.clone(), set_page_id);

    let source = HttpRecordSource::new(&config);

    // Load when the identifier changes
    Effect::new(move |_| {
        let id = page_id.get();
        let Some(ticket) = store_begin_load(&store, id) else {
            return;
        };
        let source = source.clone();
        spawn_local(async move {
            let outcome = loader::resolve(&source, &ticket).await;
            store_finish_load(&store, ticket, outcome);
        });
    });

    view! {
        <div class="page">
            {move || match store_view_state(&store) {
                // Blank page: no record was asked for
                ViewState::NoIdentifier => ().into_any(),
                ViewState::Loading => {
                    view! { <StatusMessage kind=StatusKind::Loading text=LOADING_TEXT /> }.into_any()
                }
                ViewState::Error(message) => {
                    view! { <StatusMessage kind=StatusKind::Error text=message /> }.into_any()
                }
                ViewState::Loaded(record) => view! { <DocumentCarousel record=record /> }.into_any(),
            }}
        </div>
    }
}

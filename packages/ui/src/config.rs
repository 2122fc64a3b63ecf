use dioxus::prelude::*;
use school::SchoolConfig;

/// Client-side settings served by the app server.
pub fn use_school_config() -> Signal<SchoolConfig> {
    use_context::<Signal<SchoolConfig>>()
}

/// Loads picker, table and polling settings once. Defaults apply until the
/// server answers, or when it cannot.
#[component]
pub fn ConfigProvider(children: Element) -> Element {
    let mut config = use_context_provider(|| Signal::new(SchoolConfig::default()));

    let _ = use_resource(move || async move {
        match api::get_client_config().await {
            Ok(loaded) => config.set(loaded),
            Err(e) => tracing::warn!("Using default client config: {}", e),
        }
    });

    rsx! {
        {children}
    }
}

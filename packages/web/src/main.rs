use dioxus::prelude::*;

use ui::AppProviders;
use views::*;

mod views;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[route("/")]
    Home {},
    #[route("/login")]
    Login {},
    #[route("/survey")]
    Survey {},

    #[nest("/admin")]
        #[layout(AdminLayout)]
            #[route("/")]
            AdminHome {},
            #[route("/rooms?:page&:keyword")]
            AdminRooms { page: u32, keyword: String },
            #[route("/accounts?:page&:keyword&:role")]
            AdminAccounts { page: u32, keyword: String, role: String },
            #[route("/classes?:page&:level&:teachers")]
            AdminClasses { page: u32, level: String, teachers: String },
            #[route("/entrance-tests?:page&:keyword")]
            AdminEntranceTests { page: u32, keyword: String },
            #[route("/transactions?:page")]
            AdminTransactions { page: u32 },
            #[route("/tuitions?:page")]
            AdminTuitions { page: u32 },
            #[route("/notifications?:page")]
            AdminNotifications { page: u32 },
        #[end_layout]
    #[end_nest]

    #[nest("/staff")]
        #[layout(StaffLayout)]
            #[route("/")]
            StaffHome {},
            #[route("/rooms?:page&:keyword")]
            StaffRooms { page: u32, keyword: String },
            #[route("/classes?:page&:level&:teachers")]
            StaffClasses { page: u32, level: String, teachers: String },
            #[route("/entrance-tests?:page&:keyword")]
            StaffEntranceTests { page: u32, keyword: String },
            #[route("/notifications?:page")]
            StaffNotifications { page: u32 },
        #[end_layout]
    #[end_nest]

    #[nest("/teacher")]
        #[layout(TeacherLayout)]
            #[route("/")]
            TeacherHome {},
            #[route("/classes?:page&:level&:teachers")]
            TeacherClasses { page: u32, level: String, teachers: String },
            #[route("/notifications?:page")]
            TeacherNotifications { page: u32 },
        #[end_layout]
    #[end_nest]

    #[nest("/account")]
        #[layout(StudentLayout)]
            #[route("/")]
            StudentHome {},
            #[route("/transactions?:page")]
            StudentTransactions { page: u32 },
            #[route("/tuitions?:page")]
            StudentTuitions { page: u32 },
            #[route("/notifications?:page")]
            StudentNotifications { page: u32 },
        #[end_layout]
    #[end_nest]

    #[route("/:..segments")]
    NotFound { segments: Vec<String> },
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    #[cfg(feature = "server")]
    {
        let runtime = tokio::runtime::Runtime::new().expect("Failed to start tokio runtime");
        if let Err(e) = runtime.block_on(launch_server()) {
            tracing::error!("Server stopped: {}", e);
            std::process::exit(1);
        }
    }

    #[cfg(not(feature = "server"))]
    {
        dioxus::launch(App);
    }
}

#[cfg(feature = "server")]
async fn launch_server() -> Result<(), Box<dyn std::error::Error>> {
    use dioxus::server::{DioxusRouterExt, ServeConfig};
    use tower_sessions::cookie::time::Duration;
    use tower_sessions::cookie::SameSite;
    use tower_sessions::{Expiry, MemoryStore, SessionManagerLayer};
    use tracing_subscriber::EnvFilter;

    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Resolve the backend address before the first request needs it
    api::backend::get_config().await;

    // Sessions only hold the backend token and role
    let session_layer = SessionManagerLayer::new(MemoryStore::default())
        .with_secure(false) // Set to true in production with HTTPS
        .with_same_site(SameSite::Lax)
        .with_expiry(Expiry::OnInactivity(Duration::days(7)));

    let router = axum::Router::new()
        .serve_dioxus_application(ServeConfig::new(), App)
        .layer(session_layer);

    // Use the address from dx serve or default to localhost:8080
    let addr = dioxus::cli_config::fullstack_address_or_localhost();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, router.into_make_service()).await?;
    Ok(())
}

#[component]
fn App() -> Element {
    rsx! {
        // Global app resources
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        AppProviders {
            Router::<Route> {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_parameter_selects_page() {
        let route = "/admin/rooms?page=3&keyword=chopin".parse::<Route>().ok();
        assert_eq!(
            route,
            Some(Route::AdminRooms {
                page: 3,
                keyword: "chopin".to_string(),
            })
        );

        let route = "/account/transactions?page=2".parse::<Route>().ok();
        assert_eq!(route, Some(Route::StudentTransactions { page: 2 }));
    }
}

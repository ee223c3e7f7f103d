use autoshort_api::{AppState, Config};

#[tokio::main]
async fn main() {
    let state: AppState =
        match as_app::create_app_context::<AppState, Config>().await {
            Ok(state) => state,
            Err(e) => {
                eprintln!("failed to load configuration: {e}");
                std::process::exit(1);
            }
        };

    let addr = state.config.listen_addr;

    if let Err(e) = as_axum::run_app(autoshort_api::router(state), addr).await {
        tracing::error!("server error: {:?}", e);
        std::process::exit(1);
    }
}

mod app;
mod widget;

fn init_logging() {
    // Initialize tracing with configurable filtering
    tracing_subscriber::fmt()
        .with_env_filter(
            // Default to info level, but allow override via RUST_LOG
            // Example: RUST_LOG=pagebar_core::dispatch=trace,pagebar_gui=debug
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pagebar_core=info,pagebar_gui=info".into()),
        )
        .init();
}

fn main() -> iced::Result {
    init_logging();

    iced::application("Pagebar", app::update, app::view).run_with(app::initialize)
}

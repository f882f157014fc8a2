use modsync::app::ModSync;

use iced::Size;

fn main() -> iced::Result {
    // Initialize logging with file output.
    let log_dir = modsync::config::paths::ensure_log_dir().ok();
    let _guard = modsync::logging::init_logging(log_dir);

    tracing::info!("Starting Mod Sync");
    if let Some(dir) = modsync::config::paths::log_dir() {
        tracing::info!("Logging to {}", dir.display());
    }

    iced::application(ModSync::new, ModSync::update, ModSync::view)
        .title("Mod Sync")
        .theme(ModSync::theme)
        .subscription(ModSync::subscription)
        .window_size(Size::new(900.0, 640.0))
        .run()
}

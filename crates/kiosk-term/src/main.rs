use anyhow::Result;
use tracing_appender::non_blocking::WorkerGuard;

// Logs go to a file so nothing ever writes over the alternate screen.
fn init_tracing() -> Result<WorkerGuard> {
    let log_dir = dirs::cache_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("kiosk");
    std::fs::create_dir_all(&log_dir)?;

    let appender = tracing_appender::rolling::never(log_dir, "kiosk.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .json()
        .with_writer(writer)
        .with_ansi(false)
        .with_max_level(tracing::Level::DEBUG)
        .init();

    return Ok(guard);
}

#[tokio::main]
async fn main() -> Result<()> {
    std::panic::set_hook(Box::new(|panic_info| {
        kiosk_term::destruct_terminal_for_panic();
        better_panic::Settings::auto().create_panic_handler()(panic_info);
    }));

    if !kiosk_term::application::cli::parse().await? {
        return Ok(());
    }

    let _guard = init_tracing()?;

    return kiosk_term::application::start().await;
}

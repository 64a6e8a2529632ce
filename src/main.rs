use anyhow::Result;
use clap::Parser;
use rolecall::app::App;
use rolecall::cli::{print_error, Cli};
use rolecall::tui::Tui;

/// Set up panic hook to restore terminal state on panic
fn setup_panic_hook() {
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        // Leave raw mode and the alternate screen so the message is readable
        let _ = crossterm::terminal::disable_raw_mode();
        let _ = crossterm::execute!(
            std::io::stdout(),
            crossterm::terminal::LeaveAlternateScreen,
            crossterm::event::DisableMouseCapture
        );
        original_hook(panic_info);
    }));
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Set up logging directory
    let log_dir = rolecall::utils::get_log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("rolecall.log");

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // The terminal belongs to the TUI, so logs go to a file
    let file_appender = tracing_appender::rolling::never(&log_dir, "rolecall.log");
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    if !cli.runs_tui() {
        let result = cli.execute();
        drop(guard);
        if let Err(e) = result {
            print_error(&format!("{:#}", e));
            std::process::exit(1);
        }
        return Ok(());
    }

    setup_panic_hook();

    // Print log location before TUI starts (this will be visible briefly)
    eprintln!("Logs are being written to: {:?}", log_file);
    eprintln!("View logs in real-time: tail -f {:?}", log_file);

    let mut app = App::load()?;
    let mut tui = Tui::new()?;
    let result = app.run(&mut tui);

    // Restore terminal state on normal exit
    // (panic hook handles panics)
    drop(tui);
    drop(guard);

    result
}

use std::path::PathBuf;
use tracing_subscriber::fmt::writer::MakeWriterExt;
use tracing_subscriber::EnvFilter;

/// Initialise logging. The level is `debug` when `debug` is set, otherwise
/// `info`. When `log_file` is given, output is also appended to that file.
pub fn init(debug: bool, log_file: Option<PathBuf>) {
    // When debug logging is disabled we force `info` level regardless of the
    // `RUST_LOG` environment variable.
    let level = if debug { "debug" } else { "info" };

    let filter = if debug {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level))
    } else {
        EnvFilter::new(level)
    };

    let file_writer = log_file.and_then(|path| {
        let dir = path.parent().map(PathBuf::from).unwrap_or_else(|| PathBuf::from("."));
        let name = path.file_name()?.to_owned();
        if let Err(e) = std::fs::create_dir_all(&dir) {
            eprintln!("failed to create log directory {}: {e}", dir.display());
            return None;
        }
        Some(tracing_appender::rolling::never(dir, name))
    });

    let _ = match file_writer {
        Some(file) => tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_ansi(false)
            .with_writer(std::io::stdout.and(file))
            .try_init(),
        None => tracing_subscriber::fmt().with_env_filter(filter).try_init(),
    };
}

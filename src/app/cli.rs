use std::future::Future;

use tokio::io::{BufWriter, Stdout};
use tracing::{error, warn};

use super::error::AppError;

/// Output handles passed to the application body
pub struct Writers {
    pub stdout: BufWriter<Stdout>,
}

/// Reusable CLI application runner that handles:
/// - Signal handling (SIGINT, SIGTERM, SIGHUP)
/// - Stdout buffering
/// - Exit codes (0 = success, 1 = error, 130 = SIGINT, 143 = SIGTERM)
pub struct CliApp {
    name: String,
}

impl CliApp {
    /// Create a new CLI application runner
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
        }
    }

    /// Run the application body, racing it against termination signals
    ///
    /// The body is responsible for flushing what it writes. Returns the
    /// process exit code; the caller decides when to exit.
    pub async fn run<F, Fut>(self, main_fn: F) -> i32
    where
        F: FnOnce(Writers) -> Fut,
        Fut: Future<Output = Result<(), AppError>>,
    {
        let writers = Writers {
            stdout: BufWriter::new(tokio::io::stdout()),
        };

        tokio::select! {
            result = main_fn(writers) => exit_code(&self.name, result),
            signal_code = wait_for_signal() => signal_code,
        }
    }
}

/// 0 on success, 1 after reporting the error on stderr
fn exit_code(name: &str, result: Result<(), AppError>) -> i32 {
    match result {
        Ok(()) => 0,
        Err(e) => {
            error!(app = name, error = %e, "Run failed");
            eprintln!("Error: {}", e);
            1
        }
    }
}

/// Wait for any Unix signal (SIGINT, SIGTERM, SIGHUP) or Ctrl+C
/// Returns the exit code to use (130 for SIGINT, 143 for SIGTERM, etc.)
async fn wait_for_signal() -> i32 {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{SignalKind, signal};

        let (Ok(mut sigterm), Ok(mut sigint), Ok(mut sighup)) = (
            signal(SignalKind::terminate()),
            signal(SignalKind::interrupt()),
            signal(SignalKind::hangup()),
        ) else {
            warn!("Failed to install signal handlers");
            return std::future::pending().await;
        };

        tokio::select! {
            _ = sigterm.recv() => {
                eprintln!("Received SIGTERM");
                143 // 128 + 15
            }
            _ = sigint.recv() => {
                eprintln!("Received SIGINT");
                130 // 128 + 2
            }
            _ = sighup.recv() => {
                eprintln!("Received SIGHUP");
                129 // 128 + 1
            }
        }
    }

    #[cfg(not(unix))]
    {
        if tokio::signal::ctrl_c().await.is_err() {
            warn!("Failed to install Ctrl+C handler");
            return std::future::pending().await;
        }
        eprintln!("Received Ctrl+C");
        130
    }
}

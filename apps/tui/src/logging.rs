use color_eyre::Result;
use std::fs::OpenOptions;
use std::io;
use std::path::Path;
use std::sync::Mutex;
use tracing_subscriber::fmt::writer::BoxMakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Where log lines go. The terminal client owns stdout, so it never logs there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogTarget {
    Terminal,
    Headless,
}

pub fn init_logger(debug: bool, log_file: Option<&Path>, target: LogTarget) -> Result<()> {
    let filter = if debug {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("lightsched_tui=debug,lightsched=debug,info"))
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("lightsched_tui=info,lightsched=info"))
    };

    let writer = match (log_file, target) {
        (Some(path), _) => {
            let file = OpenOptions::new().create(true).append(true).open(path)?;
            BoxMakeWriter::new(Mutex::new(file))
        }
        (None, LogTarget::Headless) => BoxMakeWriter::new(io::stderr),
        (None, LogTarget::Terminal) => BoxMakeWriter::new(io::sink),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(log_file.is_none() && target == LogTarget::Headless)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .try_init()?;

    Ok(())
}

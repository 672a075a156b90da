pub use slog::{debug, error, info, o, warn, Drain, Level, Logger};
use slog_async;
use std::io;

fn no_out(_io: &mut dyn io::Write) -> io::Result<()> {
    return Ok(());
}

pub fn create_logger() -> Logger {
    return create_logger_with_level(Level::Info);
}

pub fn create_logger_with_level(level: Level) -> Logger {
    let decorator = slog_term::TermDecorator::new().build();
    let fmt = slog_term::FullFormat::new(decorator)
        .use_custom_timestamp(no_out)
        .build()
        .fuse();
    let drain = slog_async::Async::new(fmt).build().fuse();
    let drain = slog::LevelFilter::new(drain, level).fuse();

    return Logger::root(drain, o!());
}

/// Logger which drops everything (benchmarks).
pub fn create_discard_logger() -> Logger {
    return Logger::root(slog::Discard, o!());
}

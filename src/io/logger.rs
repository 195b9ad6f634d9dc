use std::io::Write;

use log::LevelFilter;

/// Explicit level first, then `RUST_LOG`, then `info`.
pub fn resolve_level(level: Option<&str>) -> LevelFilter {
    level
        .and_then(|l| l.parse::<LevelFilter>().ok())
        .or_else(|| std::env::var("RUST_LOG").ok().and_then(|v| v.parse().ok()))
        .unwrap_or(LevelFilter::Info)
}

pub fn init_logging(level: Option<&str>) {
    let log_level = resolve_level(level);
    let _ = env_logger::Builder::new()
        .filter_level(log_level)
        .format(|buf, record| {
            writeln!(
                buf,
                "[{} {:5}] {}",
                buf.timestamp_seconds(),
                record.level(),
                record.args()
            )
        })
        .try_init();
    log::info!("logger initialized (level: {})", log_level);
}

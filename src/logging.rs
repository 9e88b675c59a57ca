use fern::colors::{Color, ColoredLevelConfig};
use log::info;
use crate::config::structs::configuration::Configuration;

pub fn level_filter(level: &str) -> log::LevelFilter
{
    match level {
        "off" => log::LevelFilter::Off,
        "trace" => log::LevelFilter::Trace,
        "debug" => log::LevelFilter::Debug,
        "warn" => log::LevelFilter::Warn,
        "error" => log::LevelFilter::Error,
        _ => log::LevelFilter::Info,
    }
}

/// Logs go to stderr, stdout stays free for whatever wraps the proxy.
pub fn setup_logging(config: &Configuration) -> Result<(), log::SetLoggerError>
{
    let level = level_filter(config.log_level.as_str());

    let colors = ColoredLevelConfig::new()
        .trace(Color::Cyan)
        .debug(Color::Magenta)
        .info(Color::Green)
        .warn(Color::Yellow)
        .error(Color::Red);

    fern::Dispatch::new()
        .format(move |out, message, record| {
            out.finish(format_args!(
                "{} [{:width$}][{}] {}",
                chrono::Local::now().format("%Y-%m-%d %H:%M:%S%.9f"),
                colors.color(record.level()),
                record.target(),
                message,
                width = 5
            ))
        })
        .level(level)
        .chain(std::io::stderr())
        .apply()?;

    info!("logging initialized.");
    Ok(())
}

use log::LevelFilter;
use log4rs::{
    Config,
    append::console::{ConsoleAppender, Target},
    config::{Appender, Root},
    encode::pattern::PatternEncoder,
    filter::threshold::ThresholdFilter,
};

/// Log to stderr at `level` ("warn", "info", ...). Unknown levels fall back to warn.
pub fn init_logger(level: &str) -> anyhow::Result<()> {
    let stderr_level = level.parse().unwrap_or(LevelFilter::Warn);

    let stderr = ConsoleAppender::builder()
        .target(Target::Stderr)
        .encoder(Box::new(PatternEncoder::new("{h({l})} {t} - {m}{n}")))
        .build();

    let config = Config::builder()
        .appender(
            Appender::builder()
                .filter(Box::new(ThresholdFilter::new(stderr_level)))
                .build("stderr", Box::new(stderr)),
        )
        .build(Root::builder().appender("stderr").build(stderr_level))?;

    log4rs::init_config(config)?;
    Ok(())
}

use log::{Level, LevelFilter, Log, Metadata, Record};

/// ConsoleLogger prints records as `LEVEL: message`, warnings and errors go to stderr.
struct ConsoleLogger;

static LOGGER: ConsoleLogger = ConsoleLogger;

impl Log for ConsoleLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if !self.enabled(record.metadata()) {
            return;
        }

        match record.level() {
            Level::Error | Level::Warn => eprintln!("{}: {}", record.level(), record.args()),
            _ => println!("{}: {}", record.level(), record.args()),
        }
    }

    fn flush(&self) {}
}

pub fn init(level: LevelFilter) -> anyhow::Result<()> {
    log::set_logger(&LOGGER).map_err(|err| anyhow::anyhow!("Failed to set logger: {}", err))?;
    log::set_max_level(level);
    Ok(())
}

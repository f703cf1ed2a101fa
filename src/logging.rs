use log::*;

pub use log::LevelFilter::*;

/// Routes the `log` facade to stdout. Safe to call more than once; later calls are ignored.
pub fn setup_logging(verbosity: log::LevelFilter) {
    let result = fern::Dispatch::new()
        .level(verbosity)
        .format(|out, message, record| out.finish(format_args!("({}) {}: {}", record.level(), record.target(), message)))
        .chain(std::io::stdout())
        .apply();

    if result.is_err() {
        trace!("Logger already installed, keeping the existing one");
    }
}

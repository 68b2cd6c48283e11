use std::io::Write;

use ::log::LevelFilter;

/// Installs an `env_logger` writing to stderr with the given maximum level.
/// `RUST_LOG` still overrides the level if set. Repeated calls are ignored.
pub fn build_pace_logger_for_level(level: LevelFilter) {
    let _ = env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format(|buf, record| {
            writeln!(
                buf,
                "c [{:>5}] {}",
                record.level(),
                record.args()
            )
        })
        .target(env_logger::Target::Stderr)
        .try_init();
}

/// Starts at `base` and raises the level once per `-v`.
pub fn build_pace_logger_for_verbosity(base: LevelFilter, verbosity: usize) {
    build_pace_logger_for_level(raise_level(base, verbosity));
}

fn raise_level(base: LevelFilter, steps: usize) -> LevelFilter {
    let levels = [
        LevelFilter::Off,
        LevelFilter::Error,
        LevelFilter::Warn,
        LevelFilter::Info,
        LevelFilter::Debug,
        LevelFilter::Trace,
    ];

    let start = levels.iter().position(|&l| l == base).unwrap_or(0);
    levels[(start + steps).min(levels.len() - 1)]
}

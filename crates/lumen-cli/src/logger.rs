use log::LevelFilter;

/// Install the global logger at `level`. `RUST_LOG` directives, when set, take precedence.
pub fn init_logger(level: LevelFilter) {
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();
}

use log::LevelFilter;

pub struct Logger;

impl Logger {
    /// Colored logging at `level`; `RUST_LOG` directives still win.
    pub fn init(level: LevelFilter) {
        let mut builder: env_logger::Builder = colog::default_builder();
        builder
            .filter_level(level)
            .filter_module("reqwest", LevelFilter::Warn)
            .filter_module("hyper_util", LevelFilter::Warn)
            .parse_default_env();

        // a second init (tests) is harmless
        let _ = builder.try_init();
    }
}

use std::sync::Once;

static INIT: Once = Once::new();

/// Initializes the global logger, later calls do nothing.
///
/// `RUST_LOG` is honoured when set, otherwise everything at `info` and above
/// is printed.
pub fn init() {
    INIT.call_once(|| {
        let mut builder = env_logger::Builder::new();
        match std::env::var("RUST_LOG") {
            Ok(filter) => {
                builder.parse_filters(&filter);
            }
            Err(_) => {
                builder.filter_level(log::LevelFilter::Info);
            }
        }
        builder.init();
        log::debug!("logging initialized");
    });
}

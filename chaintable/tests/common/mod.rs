use std::sync::Once;

use log::LevelFilter;

static INIT: Once = Once::new();

/// Install an `env_logger` once per test binary.
///
/// Defaults to warnings only; `RUST_LOG=chaintable=trace` shows the table's
/// own logging.
pub fn init_test_logger() {
    INIT.call_once(|| {
        let _ = env_logger::Builder::new()
            .filter_level(LevelFilter::Warn)
            .parse_default_env()
            .is_test(true)
            .try_init();
    });
}

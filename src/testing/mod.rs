use std::sync::Once;

static INIT: Once = Once::new();

/// Set up process-wide test environment before the config singleton is first
/// read. Every test that touches `config::config()` calls this first.
pub fn init() {
    INIT.call_once(|| {
        std::env::set_var("ACCESS_TOKEN_SECRET", "unit-test-secret");
        std::env::set_var("APP_ENV", "development");
    });
}

//! Console logging setup.

/// Route `log` records to the browser console and surface panics there.
///
/// Without the `csr` feature there is no console; records go to whatever
/// logger the host installed, or nowhere.
pub fn init(level: log::Level) {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        if console_log::init_with_level(level).is_err() {
            log::warn!("console logger already installed");
        }
    }
    #[cfg(not(feature = "csr"))]
    {
        log::trace!("no console logger outside the browser (level {level})");
    }
}

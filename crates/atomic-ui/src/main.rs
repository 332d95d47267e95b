#![forbid(unsafe_code)]
#![deny(unused_must_use, missing_docs)]
//! Atomic Auth wasm entry point and native stub fallback.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    atomic_ui::run_app();
    Ok(())
}

/// Usage text for native runs, naming the storage keys the browser build reads.
#[cfg(not(target_arch = "wasm32"))]
fn native_notice() -> String {
    let config = atomic_ui::core::config::UiConfig::default();
    format!(
        "Atomic Auth runs in the browser: use `trunk serve` from crates/atomic-ui.\n\
         The signed-in user is kept in localStorage[\"{}\"]; JSON overrides are read from localStorage[\"{}\"].\n",
        config.storage_key,
        atomic_ui::core::config::CONFIG_OVERRIDE_KEY,
    )
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    io::stderr().lock().write_all(native_notice().as_bytes())
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_notice_names_both_storage_keys() {
        let notice = native_notice();
        assert!(notice.contains("trunk serve"));
        assert!(notice.contains("localStorage[\"atomic.user\"]"));
        assert!(notice.contains("localStorage[\"atomic.config\"]"));
    }

    #[test]
    fn native_main_writes_notice() -> std::io::Result<()> {
        main()
    }
}

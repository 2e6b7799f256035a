#![forbid(unsafe_code)]
#![deny(
    warnings,
    dead_code,
    unused,
    unused_imports,
    unused_must_use,
    unreachable_pub,
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    rustdoc::broken_intra_doc_links,
    rustdoc::bare_urls,
    missing_docs
)]
//! Tally UI entry point: mounts the dashboard on wasm32, explains itself elsewhere.

#[cfg(target_arch = "wasm32")]
fn main() -> Result<(), std::io::Error> {
    tally_ui::run_app();
    Ok(())
}

#[cfg(not(target_arch = "wasm32"))]
fn main() -> Result<(), std::io::Error> {
    use std::io::{self, Write};

    let mut stderr = io::stderr().lock();
    writeln!(
        stderr,
        "tally-ui renders the invoices search in a browser; \
         serve it with `trunk serve` (target wasm32-unknown-unknown)."
    )?;
    stderr.flush()
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn native_main_points_at_wasm_build() -> std::io::Result<()> {
        main()
    }
}

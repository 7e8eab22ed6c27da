//! Browser entry point. Native builds exist only so `cargo test` can run
//! the state and helper suites; the binary itself is wasm-only.

fn main() {
    #[cfg(feature = "csr")]
    {
        console_error_panic_hook::set_once();
        let _ = console_log::init_with_level(log::Level::Info);
        leptos::mount::mount_to_body(cogniscan::app::App);
    }

    #[cfg(not(feature = "csr"))]
    eprintln!("cogniscan renders in the browser; build for wasm32 with --features csr");
}

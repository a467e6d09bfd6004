//! Entry point for the command-line interface.
#![forbid(unsafe_code)]

#[expect(
    clippy::print_stderr,
    reason = "the binary reports fatal errors on stderr"
)]
fn main() {
    if let Err(err) = waybill_cli::logging::init() {
        eprintln!("waybill: failed to initialise logging: {err}");
    }
    if let Err(err) = waybill_cli::run() {
        eprintln!("waybill: {err}");
        std::process::exit(1);
    }
}

//! Binary entrypoint for the server bootstrap menu.

fn main() {
    std::process::exit(srvinit_cli::run());
}

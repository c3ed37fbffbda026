fn main() {
    if let Err(err) = parkit_dashboard_lib::run() {
        eprintln!("error: {err:#}");
        std::process::exit(1);
    }
}

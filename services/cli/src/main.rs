fn main() {
    if let Err(err) = skillscan_cli::run() {
        eprintln!("application error: {err}");
        std::process::exit(1);
    }
}

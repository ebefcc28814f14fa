fn main() {
    if let Err(err) = chatline::cli::main() {
        eprintln!("❌ {err}");
        std::process::exit(1);
    }
}

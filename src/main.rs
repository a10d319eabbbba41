mod cli;

fn main() {
    // Delegate to CLI runner; fatal errors end up here.
    if let Err(err) = cli::run() {
        eprintln!("Error: {err:#}");
        std::process::exit(1);
    }
}

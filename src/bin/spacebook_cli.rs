use std::process;

fn main() {
    spacebook::init();

    if let Err(err) = spacebook::cli::run_cli() {
        eprintln!("Error: {err}");
        process::exit(1);
    }
}

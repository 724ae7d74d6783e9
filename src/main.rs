mod cli;

use basex::{AlphabetNotFoundError, should_use_color};

fn main() {
    if let Err(e) = cli::run() {
        // Lookup failures carry their own header and hint
        if e.is::<AlphabetNotFoundError>() {
            eprintln!("{}", e);
        } else if should_use_color() {
            eprintln!("\x1b[1;31merror:\x1b[0m {}", e);
        } else {
            eprintln!("error: {}", e);
        }
        std::process::exit(1);
    }
}

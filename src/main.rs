mod cli;
mod evaluator;
mod expression;
mod parser;
mod sanitize;

fn main() {
    if let Err(err) = cli::run() {
        eprintln!("Error: {}", err);
        #[allow(clippy::exit)]
        std::process::exit(1);
    }
}

// src/main.rs

use regen_all::errors::RegenError;
use regen_all::{cli, logging, run};

#[tokio::main]
async fn main() {
    match run_main().await {
        Ok(combined) => std::process::exit(combined),
        Err(err) => {
            eprintln!("regen-all error: {err}");
            std::process::exit(err.exit_code());
        }
    }
}

async fn run_main() -> Result<i32, RegenError> {
    let args = cli::parse();
    logging::init_logging(args.log_level)?;
    run(args).await
}

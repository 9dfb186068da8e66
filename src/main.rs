use std::process::ExitCode;

use bitseq::{Sequence, SequenceFile, OUTPUT_PATH};
use env_logger::Env;
use log::error;

fn main() -> ExitCode {
    env_logger::Builder::from_env(Env::default().default_filter_or("off")).init();

    let file = match SequenceFile::create(OUTPUT_PATH) {
        Ok(file) => file,
        Err(err) => {
            error!("{err}");
            eprintln!("Error: {err}");
            return ExitCode::FAILURE;
        }
    };

    let sequence = Sequence::generate();
    if let Err(err) = file.write(&sequence) {
        error!("{err}");
        eprintln!("Error: {err}");
        return ExitCode::FAILURE;
    }

    println!("Sequence saved to {OUTPUT_PATH}");
    ExitCode::SUCCESS
}

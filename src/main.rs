use std::process::ExitCode;

use clap::Parser;
use kelime::{
    cli::Args,
    gui,
    logging::{
        self,
        LogConfig,
    },
    persistence::Settings,
    RandomSampler,
    Sampler,
    Session,
    VocabularyTable,
};
use tracing::error;

fn main() -> ExitCode {
    let args = Args::parse();
    logging::init_tracing(&LogConfig { log_level: args.log_level.clone() });

    // no window until the vocabulary is known to be usable
    let table = match VocabularyTable::load(&args.source) {
        Ok(table) => table,
        Err(e) => {
            error!(path = %args.source.display(), "Failed to load vocabulary");
            eprintln!("error: {}: {}", args.source.display(), e);
            return ExitCode::FAILURE;
        }
    };

    let sampler: Box<dyn Sampler> = match args.seed {
        Some(seed) => Box::new(RandomSampler::seeded(seed)),
        None => Box::new(RandomSampler::new()),
    };
    let session = Session::new(table, args.mode(), sampler);

    match gui::run(session, Settings::load()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("Window system failed: {}", e);
            ExitCode::FAILURE
        }
    }
}

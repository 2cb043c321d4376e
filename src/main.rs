use std::env;
use std::io::{self, Write};

use bounded_chains::cli::{self, Command, Config};
use bounded_chains::demo;
use tracing_subscriber::EnvFilter;


fn init_logging(config: &Config) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_string()));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .init();
}


fn main() -> anyhow::Result<()> {
    let args: Vec<String> = env::args().collect();
    let (program, rest) = args.split_first().map_or(("bounded_chains", &[][..]), |(p, r)| (p.as_str(), r));

    let config = match cli::parse(program, rest)? {
        Command::Help(usage) => {
            print!("{}", usage);
            return Ok(());
        }
        Command::Run(config) => config
    };
    init_logging(&config);
    tracing::debug!(?config, "starting walkthrough");

    let stdout = io::stdout();
    let mut out = stdout.lock();
    if config.demo.includes_queue() {
        demo::run_queue_demo(&mut out, config.capacity)?;
    }
    if config.demo.includes_stack() {
        if config.demo.includes_queue() {
            writeln!(out)?;
        }
        demo::run_stack_demo(&mut out, config.capacity)?;
    }
    out.flush()?;
    Ok(())
}

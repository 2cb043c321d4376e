use std::str::FromStr;

use getopts::Options;
use tracing::Level;

use crate::demo::MAX_CAPACITY;


#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DemoSelection {
    Queue,
    Stack,
    All
}


impl DemoSelection {
    pub fn includes_queue(self) -> bool {
        self != DemoSelection::Stack
    }

    pub fn includes_stack(self) -> bool {
        self != DemoSelection::Queue
    }
}


impl FromStr for DemoSelection {
    type Err = CliError;

    fn from_str(value: &str) -> Result<DemoSelection, CliError> {
        match value {
            "queue" => Ok(DemoSelection::Queue),
            "stack" => Ok(DemoSelection::Stack),
            "all" => Ok(DemoSelection::All),
            other => Err(CliError::InvalidDemo(other.to_string()))
        }
    }
}


#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub demo: DemoSelection,
    pub capacity: usize,
    pub log_level: Level
}


impl Default for Config {
    fn default() -> Config {
        Config { demo: DemoSelection::All, capacity: 3, log_level: Level::WARN }
    }
}


#[derive(Debug)]
pub enum Command {
    Run(Config),
    Help(String)
}


#[derive(Debug, thiserror::Error)]
pub enum CliError {
    #[error(transparent)]
    Options(#[from] getopts::Fail),
    #[error("unknown demo `{0}` (expected queue, stack or all)")]
    InvalidDemo(String),
    #[error("capacity must be an integer from 0 to {max}, got `{0}`", max = MAX_CAPACITY)]
    InvalidCapacity(String),
    #[error("unknown log level `{0}`")]
    InvalidLogLevel(String)
}


fn options() -> Options {
    let mut opts = Options::new();
    opts.optopt("d", "demo", "which walkthrough to run (queue, stack, all)", "NAME");
    opts.optopt("c", "capacity", "capacity of the integer containers", "N");
    opts.optopt("l", "log-level", "diagnostic level when RUST_LOG is unset", "LEVEL");
    opts.optflag("h", "help", "print this help menu");
    opts
}


/// Parses the arguments that follow the program name.
pub fn parse(program: &str, args: &[String]) -> Result<Command, CliError> {
    let opts = options();
    let matches = opts.parse(args)?;
    if matches.opt_present("h") {
        let brief = format!("Usage: {} [options]", program);
        return Ok(Command::Help(opts.usage(&brief)));
    }

    let mut config = Config::default();
    if let Some(demo) = matches.opt_str("d") {
        config.demo = demo.parse()?;
    }
    if let Some(capacity) = matches.opt_str("c") {
        config.capacity = match capacity.parse() {
            Ok(value) if value <= MAX_CAPACITY => value,
            _ => return Err(CliError::InvalidCapacity(capacity))
        };
    }
    if let Some(level) = matches.opt_str("l") {
        config.log_level = level.parse().map_err(|_| CliError::InvalidLogLevel(level))?;
    }
    Ok(Command::Run(config))
}


#[cfg(test)]
mod tests {
    use super::{parse, CliError, Command, Config, DemoSelection, MAX_CAPACITY};
    use tracing::Level;

    fn run(args: &[&str]) -> Result<Command, CliError> {
        let args: Vec<String> = args.iter().map(|arg| arg.to_string()).collect();
        parse("bounded_chains", &args)
    }

    fn config(args: &[&str]) -> Config {
        match run(args) {
            Ok(Command::Run(config)) => config,
            other => panic!("expected a run command, got {:?}", other)
        }
    }

    #[test]
    fn test_defaults() {
        assert_eq!(config(&[]), Config::default());
        assert_eq!(Config::default().capacity, 3);
    }

    #[test]
    fn test_all_options() {
        let config = config(&["--demo", "stack", "-c", "0", "--log-level", "debug"]);
        assert_eq!(config.demo, DemoSelection::Stack);
        assert_eq!(config.capacity, 0);
        assert_eq!(config.log_level, Level::DEBUG);
        assert!(config.demo.includes_stack());
        assert!(!config.demo.includes_queue());
    }

    #[test]
    fn test_capacity_limit() {
        assert_eq!(config(&["-c", MAX_CAPACITY.to_string().as_str()]).capacity, MAX_CAPACITY);
        for value in [(MAX_CAPACITY + 1).to_string(), usize::MAX.to_string()] {
            match run(&["--capacity", value.as_str()]) {
                Err(CliError::InvalidCapacity(rejected)) => assert_eq!(rejected, value),
                other => panic!("unexpected {:?}", other)
            }
        }
    }

    #[test]
    fn test_help() {
        match run(&["-h"]) {
            Ok(Command::Help(usage)) => {
                assert!(usage.starts_with("Usage: bounded_chains [options]"));
                assert!(usage.contains("--capacity"));
            }
            other => panic!("expected help, got {:?}", other)
        }
    }

    #[test]
    fn test_invalid_values() {
        match run(&["--demo", "deque"]) {
            Err(CliError::InvalidDemo(name)) => assert_eq!(name, "deque"),
            other => panic!("unexpected {:?}", other)
        }
        match run(&["--capacity", "lots"]) {
            Err(CliError::InvalidCapacity(value)) => assert_eq!(value, "lots"),
            other => panic!("unexpected {:?}", other)
        }
        match run(&["--log-level", "loud"]) {
            Err(CliError::InvalidLogLevel(value)) => assert_eq!(value, "loud"),
            other => panic!("unexpected {:?}", other)
        }
        assert!(matches!(run(&["--bogus"]), Err(CliError::Options(_))));
    }
}

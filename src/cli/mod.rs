// FILE: src/cli/mod.rs

mod config;
mod handlers;

pub use config::{ConfigFile, ParserConfig, PropertyConfig, ShorthandConfig};

use crate::error::Result;
use crate::stylesheet::StyleSheetSpecification;
use clap::{Arg, ArgAction, Command, ValueEnum};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

pub struct SpecCli {
    config: ConfigFile,
}

impl SpecCli {
    pub fn new() -> Self {
        Self {
            config: ConfigFile::default(),
        }
    }

    pub fn run(&mut self) -> Result<()> {
        let matches = self.build_cli().get_matches();

        self.setup_logging(matches.get_count("verbose"))?;

        if let Some(config_path) = matches.get_one::<String>("config") {
            self.config = config::load(config_path)?;
        }

        let spec = self.build_specification()?;

        match matches.subcommand() {
            Some(("parse", sub_matches)) => handlers::handle_parse_command(self, &spec, sub_matches),
            Some(("check", sub_matches)) => handlers::handle_check_command(&spec, sub_matches),
            Some(("list", sub_matches)) => handlers::handle_list_command(&spec, sub_matches),
            _ => {
                println!("No subcommand specified. Use --help for usage information.");
                Ok(())
            }
        }
    }

    fn build_cli(&self) -> Command {
        Command::new(crate::NAME)
            .version(crate::VERSION)
            .about(crate::DESCRIPTION)
            .author("Kryon Development Team")
            .arg(
                Arg::new("config")
                    .short('c')
                    .long("config")
                    .value_name("FILE")
                    .help("Configuration file with extra properties and shorthands (.toml or .json)")
                    .action(ArgAction::Set)
                    .global(true),
            )
            .arg(
                Arg::new("verbose")
                    .short('v')
                    .long("verbose")
                    .help("Increase verbosity (can be used multiple times)")
                    .action(ArgAction::Count)
                    .global(true),
            )
            .subcommand(
                Command::new("parse")
                    .about("Parse a declaration file and print the resolved property values")
                    .arg(Arg::new("input").help("Declaration file").required(true).index(1))
                    .arg(Arg::new("format").short('f').long("format").value_parser(clap::value_parser!(OutputFormat)).default_value("text").help("Output format"))
                    .arg(Arg::new("defaults").short('d').long("defaults").help("Fill in the default of every property not declared").action(ArgAction::SetTrue)),
            )
            .subcommand(
                Command::new("check")
                    .about("Check declaration files for unknown properties and invalid values")
                    .arg(Arg::new("input").help("Declaration file or directory").required(true).index(1))
                    .arg(Arg::new("recursive").short('r').long("recursive").help("Check all declaration files in directory recursively").action(ArgAction::SetTrue)),
            )
            .subcommand(
                Command::new("list")
                    .about("List registered properties and shorthands")
                    .arg(Arg::new("inherited").long("inherited").help("Only list inherited properties").action(ArgAction::SetTrue))
                    .arg(Arg::new("layout").long("layout").help("Only list properties that force layout").action(ArgAction::SetTrue)),
            )
    }

    fn setup_logging(&self, verbose_count: u8) -> Result<()> {
        let log_level = match verbose_count {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };
        env_logger::Builder::from_default_env()
            .filter_level(log_level)
            .format_timestamp_secs()
            .init();
        Ok(())
    }

    /// The default tables plus whatever the configuration file adds.
    fn build_specification(&self) -> Result<StyleSheetSpecification> {
        let mut spec = StyleSheetSpecification::with_defaults()?;
        self.config.apply(&mut spec)?;
        Ok(spec)
    }

    pub fn fill_defaults(&self, matches: &clap::ArgMatches) -> bool {
        matches.get_flag("defaults") || self.config.fill_defaults.unwrap_or(false)
    }
}

impl Default for SpecCli {
    fn default() -> Self {
        Self::new()
    }
}

use clap::{Parser, Subcommand};

pub const DEFAULT_CONF_PATH: &str = "conf.json";

#[derive(Parser, Debug)]
#[command(name = "docconf", version, about = "Documentation build configuration CLI")]
pub struct Cli {
    #[arg(long, global = true, help = "Output machine-readable JSON")]
    pub json: bool,
    #[arg(
        long,
        global = true,
        default_value = DEFAULT_CONF_PATH,
        help = "Path to the configuration record"
    )]
    pub conf: String,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Write the shipped default configuration record
    Init {
        #[arg(long, default_value_t = false)]
        force: bool,
    },
    /// Print every field of the record
    Show,
    /// Check the record's invariants
    Validate,
    /// List enabled extensions in registration order
    Extensions,
    /// Print the selected theme and its options
    Theme,
}

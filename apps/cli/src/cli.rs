use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;
use raidexplorer_core::addons::Plugin;
use raidexplorer_core::sections::SectionKind;

#[derive(Parser, Debug)]
#[command(
    name = "raidexplorer",
    version,
    about = "Inspect Guild Wars 2 raid progress, currencies and unlocks with an API key"
)]
pub struct Args {
    /// Enable debug logging
    #[arg(short, long, global = true, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Manage stored API keys
    Keys {
        #[command(subcommand)]
        action: KeysCommand,
    },

    /// Show which scopes an API key grants
    Permissions {
        /// Name of the stored key (defaults to the first one)
        #[arg(short, long)]
        key: Option<String>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Load every enabled section for an API key
    Load {
        /// Name of the stored key (defaults to the first one)
        #[arg(short, long)]
        key: Option<String>,

        /// Load only these sections
        #[arg(long, value_delimiter = ',', conflicts_with = "skip")]
        only: Vec<SectionKind>,

        /// Skip these sections
        #[arg(long, value_delimiter = ',')]
        skip: Vec<SectionKind>,

        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Show or change which sections are loaded
    Toggles {
        #[command(subcommand)]
        action: TogglesCommand,
    },

    /// Install or update ArcDps plugins
    Plugins {
        #[command(subcommand)]
        action: PluginsCommand,
    },

    /// Check whether a newer release is available
    VersionCheck {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// List useful raid websites
    Links {
        #[arg(short, long, value_enum, default_value_t = OutputFormat::Text)]
        output: OutputFormat,
    },

    /// Generate shell completions
    Completions {
        #[arg(value_enum)]
        shell: Shell,
    },
}

#[derive(Subcommand, Debug)]
pub enum KeysCommand {
    /// List stored key names
    List,

    /// Store a new key
    Add {
        name: String,
        /// The 72-character API key
        secret: String,
    },

    /// Delete a stored key
    Remove {
        name: String,
        /// Confirm the deletion
        #[arg(short, long)]
        yes: bool,
    },
}

#[derive(Subcommand, Debug)]
pub enum TogglesCommand {
    /// Print the stored toggles
    Show,

    /// Enable or disable one section
    Set {
        section: SectionKind,
        #[arg(value_enum)]
        state: Switch,
    },
}

#[derive(Subcommand, Debug)]
pub enum PluginsCommand {
    /// Remember the Guild Wars 2 installation folder
    SetFolder { path: String },

    /// Install or update a plugin (arcdps or mechanics)
    Update { plugin: Plugin },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Switch {
    On,
    Off,
}

impl Switch {
    pub fn enabled(self) -> bool {
        self == Switch::On
    }
}

impl Commands {
    /// Output format requested by the command, if it has one.
    pub fn output_format(&self) -> OutputFormat {
        match self {
            Commands::Permissions { output, .. }
            | Commands::Load { output, .. }
            | Commands::VersionCheck { output }
            | Commands::Links { output } => *output,
            _ => OutputFormat::Text,
        }
    }
}

use clap::{ArgAction, Parser, Subcommand, ValueHint};

#[derive(Parser)]
#[command(
    author,
    version,
    about,
    help_template = "{before-help}{name} {version}
{author-with-newline}{about-with-newline}
{usage-heading} {usage}

{all-args}{after-help}",
    arg_required_else_help = true
)]
pub struct Args {
    /// Set output verbosity
    #[arg(short = 'v', long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress outputs
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Output as json
    #[arg(short, long, global = true)]
    pub json: bool,

    /// Disable colors in output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Provide custom config file
    #[arg(short, long, global = true, value_hint = ValueHint::FilePath)]
    pub config: Option<String>,

    /// Set proxy
    #[arg(required = false, long, short = 'P', global = true)]
    pub proxy: Option<String>,

    /// Set request headers
    #[arg(required = false, long, short = 'H', global = true)]
    pub header: Option<Vec<String>>,

    /// Set user agent
    #[arg(required = false, long, short = 'A', global = true)]
    pub user_agent: Option<String>,

    #[clap(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Fetch repositories and write the portfolio page
    #[clap(name = "build", visible_alias = "b")]
    Build {
        /// Where to write the page (default is `output` from the config)
        #[arg(required = false, short, long, value_hint = ValueHint::FilePath)]
        output: Option<String>,

        /// GitHub username to showcase (default is `username` from the config)
        #[arg(required = false, short, long)]
        username: Option<String>,
    },

    /// Fetch repositories and print what the page would show
    #[clap(name = "list", visible_alias = "ls")]
    List {
        /// GitHub username to showcase (default is `username` from the config)
        #[arg(required = false, short, long)]
        username: Option<String>,
    },

    /// Print the effective configuration to stdout
    Config,

    /// Generate default config
    #[clap(name = "defconfig")]
    DefConfig,
}

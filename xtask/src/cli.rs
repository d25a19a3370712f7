use clap::{Args, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(name = "xtasks")]
#[command(about = "Run project tasks using rust instead of scripts")]
pub struct App {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Builds a binary and installs it at the given path
    Install(InstallArgs),
    /// Run fmt, clippy and the test suite, stopping at the first failure
    Lint(LintArgs),
}

#[derive(Args, Debug)]
pub struct InstallArgs {
    /// Name of the binary to install (defaults to "postpager")
    #[arg(short, long, default_value = "postpager")]
    pub name: String,

    /// Directory to install the binary to (defaults to ~/.local/bin)
    #[arg(short, long)]
    pub path: Option<String>,
}

#[derive(Args, Debug)]
pub struct LintArgs {
    /// Apply formatting and clippy fixes instead of only checking
    #[arg(long)]
    pub fix: bool,

    /// Skip `cargo fmt`
    #[arg(long)]
    pub no_fmt: bool,

    /// Skip `cargo clippy`
    #[arg(long)]
    pub no_clippy: bool,

    /// Skip `cargo test`
    #[arg(long)]
    pub no_test: bool,
}

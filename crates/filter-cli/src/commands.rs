use clap::{Args, Subcommand};
use filter_converter::DialectKind;
use std::path::PathBuf;

#[derive(Subcommand)]
pub enum Commands {
    /// Render a filter expression into a backend filter clause
    Convert(ConvertArgs),

    /// Parse a filter expression and print it back as normalized JSON
    Ast {
        #[arg(
            long,
            help = "Path to a JSON-encoded filter expression; reads stdin when omitted"
        )]
        input: Option<PathBuf>,
    },
}

#[derive(Args, Debug, Default)]
pub struct ConvertArgs {
    #[arg(
        long,
        help = "Path to a JSON-encoded filter expression; reads stdin when omitted"
    )]
    pub input: Option<PathBuf>,

    #[arg(long, help = "Settings file (JSON); flags given here take precedence")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Target dialect: pgvector or mysql")]
    pub dialect: Option<DialectKind>,

    #[arg(long, help = "Name of the JSON metadata column")]
    pub column: Option<String>,

    #[arg(long, help = "Maximum nesting depth accepted")]
    pub max_depth: Option<usize>,
}

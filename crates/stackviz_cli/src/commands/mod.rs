//! CLI argument definitions.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};

use stackviz_core::{Ownership, DEFAULT_TEMPLATE};

pub mod visualize;

/// stackviz - resource dependency diagrams for infrastructure templates
#[derive(Parser, Debug)]
#[command(name = "stackviz")]
#[command(version, about = "Print the resource dependency graph of an infrastructure template")]
#[command(long_about = r#"
stackviz scans an infrastructure template as plain text, finds the resources
declared under the top-level Resources section, and prints one line per
dependency discovered through !Ref and !GetAtt, followed by a count of
resources per type.

EXIT CODES:
  0 - Success
  1 - General error
  2 - Invalid arguments or unreadable template
  3 - Template parse error (no Resources section)
  4 - Configuration error
"#)]
pub struct Cli {
    /// Template file to scan
    #[arg(default_value = DEFAULT_TEMPLATE)]
    pub template: PathBuf,

    /// YAML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// How the owning resource of a reference is found
    #[arg(long, value_enum)]
    pub ownership: Option<OwnershipArg>,

    /// Omit the per-type resource summary
    #[arg(long)]
    pub no_summary: bool,

    /// Enable verbose output
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Default log filter when `RUST_LOG` is unset.
    pub fn log_directive(&self) -> &'static str {
        if self.verbose {
            "stackviz_core=debug,stackviz=debug"
        } else if self.quiet {
            "stackviz_core=error,stackviz=error"
        } else {
            "stackviz_core=warn,stackviz=warn"
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OwnershipArg {
    /// Nearest preceding resource declaration line
    Proximity,
    /// Byte range of each resource declaration
    Block,
}

impl From<OwnershipArg> for Ownership {
    fn from(arg: OwnershipArg) -> Self {
        match arg {
            OwnershipArg::Proximity => Ownership::Proximity,
            OwnershipArg::Block => Ownership::Block,
        }
    }
}

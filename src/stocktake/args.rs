use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Returns the version string, with the git hash appended for dev builds.
/// Format: "0.1.0" from a tarball, "0.1.0+abc1234" (or "+abc1234-dirty")
/// from a checkout.
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_DIRTY: &str = env!("GIT_DIRTY");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if GIT_HASH.is_empty() {
            VERSION.to_string()
        } else if GIT_DIRTY == "true" {
            format!("{}+{}-dirty", VERSION, GIT_HASH)
        } else {
            format!("{}+{}", VERSION, GIT_HASH)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "stocktake", version = get_version())]
#[command(about = "Command-line inventory tracker", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Inventory file to operate on
    #[arg(
        short,
        long,
        global = true,
        default_value = stocktake::store::fs::DEFAULT_INVENTORY_FILE
    )]
    pub file: PathBuf,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add stock of an item
    #[command(alias = "a")]
    Add {
        /// Item name
        item: String,

        /// Quantity to add (may be negative)
        #[arg(allow_hyphen_values = true)]
        qty: i64,
    },

    /// Remove stock of an item (depleted items leave the inventory)
    #[command(alias = "rm")]
    Remove {
        /// Item name
        item: String,

        /// Quantity to remove
        qty: i64,
    },

    /// Show the stocked quantity of an item
    #[command(alias = "q")]
    Qty {
        /// Item name
        item: String,
    },

    /// List items with stock below a threshold
    Low {
        /// Low-stock threshold (items strictly below it are listed)
        #[arg(short, long, default_value_t = stocktake::model::DEFAULT_LOW_STOCK_THRESHOLD)]
        threshold: i64,
    },

    /// Print the full stock report
    #[command(alias = "ls")]
    Report,

    /// Run a fixed demo sequence against the inventory file
    Demo,
}

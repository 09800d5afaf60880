pub mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "pantry")]
#[command(about = "Pantry - allergen, nutrition and recipe lookups", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the lookup server
    Serve {
        /// Port to listen on
        #[arg(short, long, env = "PORT")]
        port: Option<u16>,

        /// Host to bind to
        #[arg(long, env = "HOST")]
        host: Option<String>,
    },

    /// Search allergen records on a running server
    Allergens {
        /// Food, food group or allergy to look for
        query: String,
    },

    /// Recommend recipes from a running server
    Recipes {
        /// Title or ingredient to look for
        query: String,

        /// Maximum number of recipes to return
        #[arg(short = 'n', long)]
        top_n: Option<usize>,
    },

    /// Look up nutrition facts on a running server
    Nutrition {
        /// Exact food name, e.g. "sweet potato"
        food: String,
    },
}

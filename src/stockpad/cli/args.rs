use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use stockpad::model::ProductId;
use stockpad::validation::ProductForm;

#[derive(Parser, Debug)]
#[command(name = "stockpad", version)]
#[command(about = "Keep track of a small product inventory", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the product slot and config (default: $STOCKPAD_HOME or the user data dir)
    #[arg(long, global = true, value_name = "DIR")]
    pub data_dir: Option<PathBuf>,

    /// Verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List products
    #[command(alias = "ls")]
    List,

    /// Add a product
    #[command(alias = "a")]
    Add {
        #[command(flatten)]
        fields: ProductFields,
    },

    /// Edit a product; fields left out keep their current values
    #[command(alias = "e")]
    Edit {
        /// Product id (as shown in the list)
        id: ProductId,

        #[command(flatten)]
        fields: ProductFields,
    },

    /// Delete a product
    #[command(alias = "rm")]
    Delete {
        /// Product id (as shown in the list)
        id: ProductId,
    },

    /// Show one product in full
    #[command(alias = "v")]
    Show {
        /// Product id (as shown in the list)
        id: ProductId,
    },

    /// Get or set configuration
    ///
    /// notice-seconds is kept for library clients that hide notices on a
    /// timer; the CLI prints each notice once, so it has no visible effect here.
    Config {
        /// Configuration key (placeholder-image, notice-seconds, currency)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print the location of the product slot
    Path,
}

/// Form fields as given on the command line. Values stay raw text so the
/// form validation sees exactly what was typed.
#[derive(Args, Debug, Default, Clone)]
pub struct ProductFields {
    /// Product name
    #[arg(short, long)]
    pub name: Option<String>,

    /// Free-form description
    #[arg(short, long)]
    pub description: Option<String>,

    /// Unit price
    #[arg(short, long, allow_hyphen_values = true)]
    pub price: Option<String>,

    /// Units in stock
    #[arg(short, long, allow_hyphen_values = true)]
    pub quantity: Option<String>,

    /// Image URL
    #[arg(short, long)]
    pub image_url: Option<String>,
}

impl ProductFields {
    /// Overlays the given fields onto `form`.
    pub fn fill(self, mut form: ProductForm) -> ProductForm {
        if let Some(name) = self.name {
            form.name = name;
        }
        if let Some(description) = self.description {
            form.description = description;
        }
        if let Some(price) = self.price {
            form.price = price;
        }
        if let Some(quantity) = self.quantity {
            form.quantity = quantity;
        }
        if let Some(image_url) = self.image_url {
            form.image_url = image_url;
        }
        form
    }
}

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "instacap")]
#[command(author, version, about = "HTTP API that extracts captions and metadata from Instagram posts", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the HTTP API
    Serve {
        /// Host to bind (overrides HOST)
        #[arg(long)]
        host: Option<String>,

        /// Port to bind (overrides PORT)
        #[arg(short, long)]
        port: Option<u16>,
    },

    /// Fetch a single post and print its metadata as JSON
    Extract {
        /// Instagram post or reel URL
        url: String,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

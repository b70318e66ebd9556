use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Load both configuration files and check enabled channels
    Validate,
    /// Read one event as JSON and dispatch it to every enabled channel
    Send {
        #[clap(short, long)]
        file: String,
    },
    /// Dispatch a free-text message to every enabled channel
    Message {
        text: String,
    },
}

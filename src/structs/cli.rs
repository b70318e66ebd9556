use clap::Parser;
use crate::enums::commands::Commands;

#[derive(Parser)]
#[clap(name = "kubenotify")]
#[clap(about = "Cluster event notification bot", long_about = None)]
pub struct Cli {
    #[clap(subcommand)]
    pub command: Commands,
}

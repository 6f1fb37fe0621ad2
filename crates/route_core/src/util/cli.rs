use std::path::PathBuf;

use clap::Parser;

#[derive(Parser)]
#[command(version, about = "Find minimum-weight routes in a multi-metric city graph", long_about = None)]
struct Cli {
    /// Path to the nodes .csv file (label,lat,lon)
    nodes_file: String,

    /// Path to the edges .csv file (source,target,distance,time,cost)
    edges_file: String,

    /// Label of the start node
    #[arg(short, long)]
    from: String,

    /// Label of the destination node
    #[arg(short, long)]
    to: String,

    /// Metric to minimize. Possible values are "distance", "time" and "cost"
    #[arg(short, long, default_value = "distance")]
    metric: String,
}

#[derive(Debug, Clone)]
pub struct Cfg {
    pub nodes_file: PathBuf,
    pub edges_file: PathBuf,
    pub from: String,
    pub to: String,
    pub metric: String,
}

pub fn parse() -> Cfg {
    let cli = Cli::parse();

    Cfg {
        nodes_file: PathBuf::from(cli.nodes_file),
        edges_file: PathBuf::from(cli.edges_file),
        from: cli.from,
        to: cli.to,
        metric: cli.metric,
    }
}

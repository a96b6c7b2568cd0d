//! Overlay Envgen Command Line Tool
//!
//! This binary is the command-line interface for Overlay Envgen. The CLI
//! layer owns flag parsing and logger setup; the rendering core only sees
//! a populated value tree and a destination.

use clap::{Args, Parser, Subcommand};
use log::info;

// Import our library
use overlay_envgen::common::init_logger;
use overlay_envgen::env::{resolve, EnvValues, ProcessEnv};
use overlay_envgen::render::{
    render_environment, EmbeddedAssets, OutputTarget, RenderRequest, Result,
};
use overlay_envgen::{APP_NAME, VERSION};

/// Overlay Envgen: environment variable report generator for overlay deployments
#[derive(Parser, Debug)]
#[clap(author, version = VERSION, about, long_about = None)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Display config environment variables and their current values
    #[clap(alias = "env")]
    Environment(EnvironmentArgs),
}

#[derive(Args, Debug)]
struct EnvironmentArgs {
    /// Where to write the report: "stdout" or a file path
    #[clap(short, long, default_value = "stdout")]
    output: String,

    /// Enable debug logging
    #[clap(short, long)]
    verbose: bool,

    /// Controller name
    #[clap(long)]
    ctrl_name: Option<String>,

    /// Controller listener address (host:port)
    #[clap(long)]
    ctrl_listener: Option<String>,

    /// Controller management listener address (host:port)
    #[clap(long)]
    ctrl_mgmt_listener: Option<String>,

    /// Edge router hostname
    #[clap(long)]
    edge_router_hostname: Option<String>,

    /// Edge router port
    #[clap(long)]
    edge_router_port: Option<String>,

    /// Installation home directory
    #[clap(long)]
    home: Option<String>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Command::Environment(args) => run_environment(args),
    }
}

/// Run the environment report subcommand
fn run_environment(args: EnvironmentArgs) -> Result<()> {
    init_logger(if args.verbose { "debug" } else { "info" });

    info!("Starting {} v{}", APP_NAME, VERSION);

    // CLI-supplied values are established before resolution, so environment
    // overrides still win over them.
    let mut values = EnvValues::default();
    if let Some(name) = args.ctrl_name {
        values.controller.name = name;
    }
    if let Some(listener) = args.ctrl_listener {
        values.controller.listener_host_port = listener;
    }
    if let Some(listener) = args.ctrl_mgmt_listener {
        values.controller.mgmt_listener_host_port = listener;
    }
    if let Some(hostname) = args.edge_router_hostname {
        values.router.edge.hostname = hostname;
    }
    if let Some(port) = args.edge_router_port {
        values.router.edge.port = port;
    }
    if let Some(home) = args.home {
        values.home = home;
    }

    resolve(&mut values, &ProcessEnv);

    let request = RenderRequest {
        values,
        target: OutputTarget::from_arg(&args.output),
        verbose: args.verbose,
    };

    render_environment(&request, &EmbeddedAssets)
}

use crate::demo::{run_arrears_report, run_demo, ArrearsReportArgs, DemoArgs};
use crate::server;
use arrears_engine::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Arrears Eligibility Service",
    about = "Generate arrears schedules and statutory-ground eligibility reports from the command line, or serve them over HTTP",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Work with arrears schedules directly
    Arrears {
        #[command(subcommand)]
        command: ArrearsCommand,
    },
    /// Run an end-to-end CLI demo covering schedule generation, editing and eligibility
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ArrearsCommand {
    /// Generate a schedule and eligibility report for one tenancy
    Report(ArrearsReportArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Arrears {
            command: ArrearsCommand::Report(args),
        } => run_arrears_report(args),
        Command::Demo(args) => run_demo(args),
    }
}

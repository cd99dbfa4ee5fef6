use std::{process::ExitCode, sync::Arc};

use anyhow::Result;
use clap::Parser;
use cnft_tree::{
    cli::{Cli, Commands, CreateArgs, EndpointArgs, TreeArgs},
    create::{run_create, CreateOutcome},
    print_output,
    report::{
        pair_rows, render_pairs, CreationReport, EndpointReport, EstimateReport, FailureReport,
        NetworkReport, ValidationReport,
    },
    settings::{load_settings, read_payer, Settings},
    telemetry::setup_telemetry,
};
use cnft_tree_client::{check_endpoint, BubblegumTreeSubmitter, SolanaTreeRpc, TreeSession};
use cnft_tree_params::TreeConfigCandidate;
use tracing::debug;

fn exit_code(success: bool) -> ExitCode {
    if success {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}

fn validate(args: &TreeArgs, json: bool) -> Result<ExitCode> {
    let report = ValidationReport::from(&TreeConfigCandidate::from(args).validate());
    print_output(&report, json)?;
    Ok(exit_code(report.valid))
}

fn estimate(args: &TreeArgs, json: bool) -> Result<ExitCode> {
    match TreeConfigCandidate::from(args).validate() {
        Ok(validated) => {
            let report = EstimateReport::from(&validated.config);
            print_output(&report, json)?;
            Ok(exit_code(!report.too_large()))
        }
        Err(errors) => {
            print_output(&ValidationReport::from(&errors), json)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn ping(args: &EndpointArgs, settings: &Settings, json: bool) -> Result<ExitCode> {
    let rpc_url = settings.resolve_rpc_url(args.rpc_url.as_deref(), args.network);
    let rpc = SolanaTreeRpc::new(&rpc_url, None);
    match check_endpoint(&rpc).await {
        Ok(status) => {
            print_output(&EndpointReport(&status), json)?;
            Ok(ExitCode::SUCCESS)
        }
        Err(e) => {
            print_output(&FailureReport::from(&e), json)?;
            Ok(ExitCode::FAILURE)
        }
    }
}

async fn create(args: CreateArgs, settings: &Settings, json: bool) -> Result<ExitCode> {
    let rpc_url =
        settings.resolve_rpc_url(args.endpoint.rpc_url.as_deref(), args.endpoint.network);
    let rpc = Arc::new(SolanaTreeRpc::new(&rpc_url, None));
    let submitter = BubblegumTreeSubmitter::new(rpc.clone(), args.public);
    let mut session = TreeSession::new(rpc, submitter);

    let outcome = run_create(&mut session, TreeConfigCandidate::from(&args.tree), || {
        read_payer(&settings.resolve_payer_path(args.payer)?)
    })
    .await?;
    match outcome {
        CreateOutcome::Invalid(report) => {
            print_output(&report, json)?;
            Ok(ExitCode::FAILURE)
        }
        CreateOutcome::Failed(report) => {
            print_output(&report, json)?;
            Ok(ExitCode::FAILURE)
        }
        CreateOutcome::Created { result, network } => {
            print_output(&CreationReport::new(&result, network), json)?;
            Ok(ExitCode::SUCCESS)
        }
    }
}

#[tokio::main]
async fn main() -> Result<ExitCode> {
    let settings = load_settings()?;
    setup_telemetry(settings.log_dir.as_deref());
    let cli = Cli::parse();
    debug!("Settings: {:?}", settings);

    match cli.command {
        Commands::Pairs => {
            let rows = pair_rows();
            if cli.json {
                println!("{}", serde_json::to_string_pretty(&rows)?);
            } else {
                println!("{}", render_pairs(rows));
            }
            Ok(ExitCode::SUCCESS)
        }
        Commands::Validate(args) => validate(&args, cli.json),
        Commands::Estimate(args) => estimate(&args, cli.json),
        Commands::Network(args) => {
            print_output(&NetworkReport::new(&args.endpoint), cli.json)?;
            Ok(ExitCode::SUCCESS)
        }
        Commands::Ping(args) => ping(&args, &settings, cli.json).await,
        Commands::Create(args) => create(args, &settings, cli.json).await,
    }
}

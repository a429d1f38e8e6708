//! Command implementations.

use crate::cli::{Cli, Command, SubmitArgs};
use crate::error::RunnerResult;
use crate::settings::{apply_overrides, load_config};
use maplaser_client::{
    ClientConfig, JobSession, PollObserver, PollProgress, ReqwestTransport,
};
use maplaser_request::{
    is_email, AreaSelection, BoundingBox, Layer, MapForm, PrintDimensions, RequestError,
};
use std::path::Path;
use tracing::{info, warn};

/// Run the parsed command line.
pub fn run(cli: Cli) -> RunnerResult<()> {
    let mut config = load_config(cli.config.as_deref())?;
    apply_overrides(&mut config, &cli);

    match cli.command {
        Command::Submit(args) => submit(config, &args),
        Command::Poll { job_id, output_dir } => poll(config, &job_id, &output_dir),
        Command::CheckEmail { address } => {
            if is_email(&address) {
                println!("{}: ok", address);
            } else {
                println!("{}: invalid", address);
            }
            Ok(())
        }
        Command::Layers => {
            for layer in Layer::ALL {
                println!("{:<12} {}", layer.as_str(), layer.description());
            }
            Ok(())
        }
    }
}

/// Build the area selection described by the submit arguments.
///
/// Explicit bounds are used as given. Without bounds the default selection is
/// resized to the requested print size.
pub fn build_selection(args: &SubmitArgs) -> Result<AreaSelection, RequestError> {
    match args.bounds() {
        Some((min_lat, min_lon, max_lat, max_lon)) => {
            let bounds = BoundingBox::new(min_lat, min_lon, max_lat, max_lon)?;
            let defaults = PrintDimensions::default();
            let dims = PrintDimensions::from_mm(
                args.x_mm.unwrap_or(defaults.x_mm as f64),
                args.y_mm.unwrap_or(defaults.y_mm as f64),
            )?;
            AreaSelection::new(bounds, dims)
        }
        None => {
            let mut selection = AreaSelection::default();
            selection.set_dimensions(args.x_mm, args.y_mm)?;
            Ok(selection)
        }
    }
}

/// Fill a form from the submit arguments.
pub fn build_form(args: &SubmitArgs) -> Result<MapForm, RequestError> {
    let selection = build_selection(args)?;

    let mut form = MapForm::new();
    form.set_name(args.name.as_str());
    form.set_email(args.email.as_str());
    form.set_contour_interval(args.contour_interval)?;
    for layer in &args.layers {
        form.select_layer(layer, true)?;
    }
    form.sync_selection(&selection);
    Ok(form)
}

fn progress_observer() -> PollObserver {
    Box::new(|progress: &PollProgress| {
        if let Some(err) = &progress.error {
            warn!(attempt = progress.attempt, %err, "still waiting");
        } else if let Some(status) = &progress.job_status {
            info!(attempt = progress.attempt, %status, "still waiting");
        } else if !progress.ready {
            info!(
                attempt = progress.attempt,
                content_type = progress.content_type.as_deref().unwrap_or("-"),
                "still waiting"
            );
        }
    })
}

fn submit(config: ClientConfig, args: &SubmitArgs) -> RunnerResult<()> {
    let form = build_form(args)?;
    let request = form.build_request()?;

    if args.dry_run {
        println!("{}", request.to_json_pretty()?);
        return Ok(());
    }

    let transport = ReqwestTransport::new(&config)?;
    let mut session = JobSession::new(config, transport);
    let ticket = session.submit(&form)?;
    println!("job {}", ticket.id);

    if args.no_wait {
        println!("{}", ticket.url);
        return Ok(());
    }

    wait_and_save(&mut session, &args.output_dir)
}

fn poll(config: ClientConfig, job_id: &str, output_dir: &Path) -> RunnerResult<()> {
    let transport = ReqwestTransport::new(&config)?;
    let mut session = JobSession::new(config, transport);
    session.resume(job_id)?;
    wait_and_save(&mut session, output_dir)
}

fn wait_and_save(session: &mut JobSession<ReqwestTransport>, output_dir: &Path) -> RunnerResult<()> {
    let observer = progress_observer();
    let image = session.wait(Some(&observer))?;
    let path = image.save(output_dir)?;
    println!("{}", path.display());
    Ok(())
}

use super::Host;
use super::common::{Common, CommonArgs, ReportArgs};
use crate::Result;
use crate::model::FormFactor;
use crate::session::{AnalysisSession, Phase};
use camino::Utf8PathBuf;
use clap::Parser;
use ohno::{IntoAppError, app_err};

const LOG_TARGET: &str = "   analyze";

#[derive(Parser, Debug)]
pub struct AnalyzeArgs {
    /// URLs to analyze
    #[arg(value_name = "URL", required = true)]
    pub urls: Vec<String>,

    /// Device class to report measurements for (all, desktop, phone, tablet)
    #[arg(long, short = 'f', value_name = "FORM_FACTOR", default_value = "all", value_parser = parse_form_factor)]
    pub form_factor: FormFactor,

    /// Save the service response to a JSON file for later use with `report`
    #[arg(long, value_name = "PATH")]
    pub save: Option<Utf8PathBuf>,

    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

fn parse_form_factor(s: &str) -> Result<FormFactor, String> {
    s.parse::<FormFactor>().map_err(|e| e.to_string())
}

pub async fn analyze_urls<H: Host>(host: &mut H, args: &AnalyzeArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let client = common.client()?;
    let mut session = AnalysisSession::new(common.config.max_urls);

    let ticket = match session.submit(&args.urls, args.form_factor) {
        Ok(ticket) => ticket,
        Err(e) => {
            common.fail(&e);
            return Err(e).into_app_err("validating URLs");
        }
    };

    log::info!(
        target: LOG_TARGET,
        "Analyzing {} URL(s) for {} at {}",
        ticket.request.urls.len(),
        ticket.request.form_factor.display_name(),
        client.base_url()
    );

    let outcome = client.analyze(&ticket.request).await;
    let _ = session.complete(ticket.generation, outcome);

    if let Phase::Failed(message) = session.phase() {
        common.fail(message);
        return Err(app_err!("analysis failed: {message}"));
    }

    session.set_criteria(args.report.criteria());
    session.set_sort(args.report.sort_spec());

    let view = session.view().ok_or_else(|| app_err!("no analysis response available"))?;

    if let Some(path) = &args.save {
        view.response.save(path)?;
        log::info!(target: LOG_TARGET, "Saved response to {path}");
    }

    common.report(&view, &args.report)
}

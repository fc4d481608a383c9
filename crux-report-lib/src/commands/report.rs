use super::Host;
use super::common::{Common, CommonArgs, ReportArgs};
use crate::Result;
use crate::model::AnalysisResponse;
use crate::pipeline::build_view;
use camino::Utf8PathBuf;
use clap::Parser;

#[derive(Parser, Debug)]
pub struct ReportFileArgs {
    /// Analysis response previously saved with `analyze --save`
    #[arg(value_name = "PATH")]
    pub path: Utf8PathBuf,

    #[command(flatten)]
    pub common: CommonArgs,

    #[command(flatten)]
    pub report: ReportArgs,
}

pub fn report_file<H: Host>(host: &mut H, args: &ReportFileArgs) -> Result<()> {
    let mut common = Common::new(host, &args.common)?;
    let response = AnalysisResponse::load(&args.path)?;
    let view = build_view(&response, &args.report.criteria(), &args.report.sort_spec());

    common.report(&view, &args.report)
}

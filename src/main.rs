use anyhow::Context;
use clap::Parser;
use webgrep::{
    cli::Opts,
    reporter::{NoopReporter, Reporter, SpinnerReporter},
    source::ReqwestSource,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    pretty_env_logger::init();
    let opts = Opts::parse();

    let source = ReqwestSource::new(opts.timeout()).context("Failed to build the HTTP client")?;
    let reporter: Box<dyn Reporter> = if opts.verbose() {
        Box::new(SpinnerReporter::new())
    } else {
        Box::new(NoopReporter)
    };
    opts.execute(&source, &*reporter).await?;

    Ok(())
}

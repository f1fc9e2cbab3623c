use super::generate::{report_summary, SourceArgs};
use crate::{
    libs::{
        config::Config,
        layout::{settings::TABLE_HEADER_ROW, LayoutEngine},
        messages::Message,
        sheet::MemorySheet,
        view::View,
    },
    msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct PreviewArgs {
    #[command(flatten)]
    pub source: SourceArgs,
}

pub async fn cmd(args: PreviewArgs) -> Result<()> {
    let config = Config::read()?;
    let settings = args.source.settings(&config)?;
    let entries = args.source.entries(&config, &settings.period).await?;

    let mut sheet = MemorySheet::new();
    let summary = LayoutEngine::new(&settings).render(&entries, &mut sheet)?;

    msg_print!(Message::PreviewHeader(settings.period.label()), true);
    View::sheet(&sheet, TABLE_HEADER_ROW + 1, summary.grand_total_row)?;
    report_summary(&summary);

    Ok(())
}

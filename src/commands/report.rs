use crate::{
    api::rtm::Rtm,
    libs::{
        config::Config,
        messages::Message,
        standup::{reference_date, Standup},
    },
    msg_bail_anyhow, msg_error_anyhow,
};
use anyhow::Result;
use chrono::Local;
use clap::Args;
use std::io;

#[derive(Debug, Args)]
pub struct ReportArgs {
    /// Remember The Milk filter prepended to every query, e.g. `list:Work`
    filter: Vec<String>,
    #[arg(short, long, value_name = "DD/MM/YYYY", help = "Date for the report. If you omit the default is today's date.")]
    date: Option<String>,
}

pub async fn cmd(report_args: ReportArgs) -> Result<()> {
    let config = Config::read()?;
    let Some(rtm_config) = &config.rtm else {
        msg_bail_anyhow!(Message::RtmNotConfigured);
    };
    let calendar = config
        .working_calendar()
        .map_err(|e| msg_error_anyhow!(Message::InvalidCalendarConfig(e.to_string())))?;
    let settings = config.standup();

    let reference = reference_date(report_args.date.as_deref(), Local::now().date_naive())?;
    let standup = Standup::new(calendar)
        .filter(&report_args.filter.join(" "))
        .gap_query(settings.gap_query)
        .author(settings.author);

    let mut rtm = Rtm::new(rtm_config);
    standup.run(&mut rtm, reference, &mut io::stdout()).await?;

    Ok(())
}

//! Query command implementation.

use crate::cli::QueryArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use tsr_connector::arguments::{END_TIME, PARAMETER, START_TIME};
use tsr_connector::{ArgumentValues, DataSource, Page, TimeScopedRelations};
use tsr_sdk::{HttpChannel, MessageChannel};

/// Execute the query command.
pub fn execute_query(args: QueryArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    let channel = HttpChannel::new(&config.channel)?;
    tracing::debug!("Using analytics endpoint {}", channel.url());

    let mut source: TimeScopedRelations<HttpChannel> = TimeScopedRelations::new();
    let page = run_cycle(&mut source, channel, &args)?;

    println!("{}", formatter.format_page(source.columns(), &page)?);

    Ok(())
}

/// Drive one full fetch cycle of `source` over `channel`.
pub fn run_cycle<S, C>(source: &mut S, channel: C, args: &QueryArgs) -> Result<Page>
where
    S: DataSource<Channel = C>,
    C: MessageChannel,
{
    source.on_init(channel);
    source.on_arguments_processed(&argument_values(args));
    source.on_prepare_fetch()?;
    Ok(source.next_page())
}

/// Map command-line arguments onto the data source's input arguments.
pub fn argument_values(args: &QueryArgs) -> ArgumentValues {
    let mut values = ArgumentValues::new();

    if let Some(parameter) = &args.parameter {
        values = values.with_string(&PARAMETER, parameter.clone());
    }
    if let Some(start) = args.start {
        values = values.with_datetime(&START_TIME, start);
    }
    if let Some(end) = args.end {
        values = values.with_datetime(&END_TIME, end);
    }

    values
}

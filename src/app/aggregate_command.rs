use super::cli_manager::logging_level_cli_arg;
use super::command::Command;
use super::common;
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::info;

const CMD_NAME: &str = "aggregate";

pub(crate) struct AggregateCommand;

impl AggregateCommand {
    pub(crate) fn new() -> Self {
        AggregateCommand
    }
}

impl<'a> Command<'a> for AggregateCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Folds an aggregation function over a sequence of strengths")
            .setting(AppSettings::DisableVersion)
            .arg(common::aggregation_function_arg())
            .arg(common::strengths_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let function = common::read_aggregation_function(arg_matches)?;
        let strengths = common::read_strengths(arg_matches)?;
        info!(
            "aggregating {} strength(s) with the {} function",
            strengths.len(),
            function
        );
        println!("{}", function.aggregate(strengths));
        Ok(())
    }
}

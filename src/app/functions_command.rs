use super::cli_manager::logging_level_cli_arg;
use super::command::Command;
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};
use qbaf_functions::functions::{AggregationFunction, InfluenceFunction};

const CMD_NAME: &str = "functions";

pub(crate) struct FunctionsCommand;

impl FunctionsCommand {
    pub(crate) fn new() -> Self {
        FunctionsCommand
    }
}

impl<'a> Command<'a> for FunctionsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the aggregation functions, then the influence functions")
            .setting(AppSettings::DisableVersion)
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        println!("{}", format_names(AggregationFunction::iter_names()));
        println!("{}", format_names(InfluenceFunction::iter_names()));
        Ok(())
    }
}

fn format_names<'a>(names: impl Iterator<Item = &'a str>) -> String {
    let joined = names.fold(String::new(), |mut acc, s| {
        if !acc.is_empty() {
            acc.push(',')
        };
        acc.push_str(s);
        acc
    });
    format!("[{}]", joined)
}

use super::cli_manager::logging_level_cli_arg;
use super::command::Command;
use super::common;
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};
use log::info;
use qbaf_functions::functions::read_strategy_string;

const CMD_NAME: &str = "revise";

const ARG_STRATEGY: &str = "STRATEGY";

pub(crate) struct ReviseCommand;

impl ReviseCommand {
    pub(crate) fn new() -> Self {
        ReviseCommand
    }
}

impl<'a> Command<'a> for ReviseCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Computes the revised strength of an argument")
            .setting(AppSettings::DisableVersion)
            .arg(
                Arg::with_name(ARG_STRATEGY)
                    .long("strategy")
                    .empty_values(false)
                    .multiple(false)
                    .help("the strategy to use, as AGGREGATION:INFLUENCE")
                    .default_value("sum:simple"),
            )
            .arg(common::weight_arg())
            .arg(common::strengths_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let strategy = read_strategy_string(arg_matches.value_of(ARG_STRATEGY).unwrap())?;
        let weight = common::read_number(arg_matches.value_of(common::ARG_WEIGHT).unwrap())
            .context("while reading the base weight")?;
        let strengths = common::read_strengths(arg_matches)?;
        if strengths.is_empty() {
            info!("no strength to aggregate; the base weight is kept");
        } else {
            info!(
                "aggregate of {} strength(s) with {} is {}",
                strengths.len(),
                strategy.aggregation(),
                strategy.aggregate(strengths.iter().copied())
            );
        }
        println!("{}", strategy.revise(weight, strengths));
        Ok(())
    }
}

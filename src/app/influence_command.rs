use super::cli_manager::logging_level_cli_arg;
use super::command::Command;
use super::common;
use anyhow::{Context, Result};
use clap::{App, AppSettings, Arg, ArgMatches, SubCommand};

const CMD_NAME: &str = "influence";

const ARG_AGGREGATE: &str = "AGGREGATE";

pub(crate) struct InfluenceCommand;

impl InfluenceCommand {
    pub(crate) fn new() -> Self {
        InfluenceCommand
    }
}

impl<'a> Command<'a> for InfluenceCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Applies an influence function to a base weight and an aggregate")
            .setting(AppSettings::DisableVersion)
            .arg(common::influence_function_arg())
            .arg(common::weight_arg())
            .arg(
                Arg::with_name(ARG_AGGREGATE)
                    .short("s")
                    .long("aggregate")
                    .empty_values(false)
                    .multiple(false)
                    .help("the aggregate of the strengths of the attackers and supporters")
                    .required(true),
            )
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let function = common::read_influence_function(arg_matches)?;
        let weight = common::read_number(arg_matches.value_of(common::ARG_WEIGHT).unwrap())
            .context("while reading the base weight")?;
        let aggregate = common::read_number(arg_matches.value_of(ARG_AGGREGATE).unwrap())
            .context("while reading the aggregate")?;
        println!("{}", function.apply(weight, aggregate));
        Ok(())
    }
}

use super::cli_manager::logging_level_cli_arg;
use super::command::Command;
use super::common;
use anyhow::{anyhow, Result};
use clap::{App, AppSettings, ArgMatches, SubCommand};
use log::{info, warn};
use qbaf_functions::functions::InfluenceFunction;

const CMD_NAME: &str = "check";

const N_WEIGHT_STEPS: usize = 20;

const MAX_ABS_AGGREGATE: f64 = 1000.;

const N_AGGREGATE_STEPS: usize = 4000;

pub(crate) struct CheckCommand;

impl CheckCommand {
    pub(crate) fn new() -> Self {
        CheckCommand
    }
}

impl<'a> Command<'a> for CheckCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Checks the neutrality, monotonicity and boundedness of an influence function")
            .setting(AppSettings::DisableVersion)
            .arg(common::influence_function_arg())
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, arg_matches: &ArgMatches<'_>) -> Result<()> {
        let function = common::read_influence_function(arg_matches)?;
        info!(
            "checking {} on {} weights and {} aggregates",
            function,
            N_WEIGHT_STEPS + 1,
            N_AGGREGATE_STEPS + 1
        );
        let violations = check_influence_function(function);
        violations.iter().for_each(|v| warn!("{}", v));
        if violations.is_empty() {
            println!("{}: OK", function);
            Ok(())
        } else {
            println!("{}: KO", function);
            Err(anyhow!(
                "{} property violation(s) found for {}",
                violations.len(),
                function
            ))
        }
    }
}

fn weights() -> impl Iterator<Item = f64> {
    (0..=N_WEIGHT_STEPS).map(|i| i as f64 / N_WEIGHT_STEPS as f64)
}

fn aggregates() -> impl Iterator<Item = f64> {
    (0..=N_AGGREGATE_STEPS).map(|i| {
        -MAX_ABS_AGGREGATE + 2. * MAX_ABS_AGGREGATE * i as f64 / N_AGGREGATE_STEPS as f64
    })
}

/// Samples an influence function and returns a description of the property violations.
///
/// The boundedness is only checked for functions that claim it.
fn check_influence_function(function: InfluenceFunction) -> Vec<String> {
    let mut violations = vec![];
    for w in weights() {
        let neutral = function.apply(w, function.neutral_aggregate());
        if neutral != w {
            violations.push(format!(
                "neutrality: {}({}, {}) = {}",
                function,
                w,
                function.neutral_aggregate(),
                neutral
            ));
        }
        let mut previous: Option<(f64, f64)> = None;
        for s in aggregates() {
            let r = function.apply(w, s);
            if function.is_bounded() && !(0. ..=1.).contains(&r) {
                violations.push(format!("boundedness: {}({}, {}) = {}", function, w, s, r));
            }
            if let Some((previous_s, previous_r)) = previous {
                if previous_r > r {
                    violations.push(format!(
                        "monotonicity: {}({}, {}) = {} > {}({}, {}) = {}",
                        function, w, previous_s, previous_r, function, w, s, r
                    ));
                }
            }
            previous = Some((s, r));
        }
    }
    violations
}

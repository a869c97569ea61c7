use super::{
    app_helper::AppHelper, command::Command, AggregateCommand, AuthorsCommand, CheckCommand,
    FunctionsCommand, InfluenceCommand, ReviseCommand,
};
use anyhow::{anyhow, Context, Result};
use clap::{Arg, ArgMatches};
use qbaf_functions::functions::{AggregationFunction, InfluenceFunction};

/// The package information shown by the app.
#[derive(Debug, Clone, Copy)]
pub(crate) struct AppMetadata {
    pub(crate) name: &'static str,
    pub(crate) version: &'static str,
    pub(crate) authors: &'static str,
    pub(crate) about: &'static str,
}

impl AppMetadata {
    /// Reads the package information set by Cargo at compile time.
    pub(crate) fn from_cargo_env() -> Self {
        AppMetadata {
            name: option_env!("CARGO_PKG_NAME").unwrap_or("unknown app name"),
            version: option_env!("CARGO_PKG_VERSION").unwrap_or("unknown version"),
            authors: option_env!("CARGO_PKG_AUTHORS").unwrap_or("unknown authors"),
            about: "Aggregation and influence functions for quantitative bipolar argumentation.",
        }
    }
}

pub(crate) fn create_app_helper() -> AppHelper<'static> {
    let metadata = AppMetadata::from_cargo_env();
    let mut app = AppHelper::new(
        metadata.name,
        metadata.version,
        metadata.authors,
        metadata.about,
    );
    let commands: Vec<Box<dyn Command>> = vec![
        Box::new(AggregateCommand::new()),
        Box::new(AuthorsCommand::new(metadata)),
        Box::new(CheckCommand::new()),
        Box::new(FunctionsCommand::new()),
        Box::new(InfluenceCommand::new()),
        Box::new(ReviseCommand::new()),
    ];
    for c in commands {
        app.add_command(c);
    }
    app
}

pub(crate) const ARG_FUNCTION: &str = "FUNCTION";

pub(crate) fn aggregation_function_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_FUNCTION)
        .short("f")
        .long("function")
        .empty_values(false)
        .multiple(false)
        .help("the name of the aggregation function")
        .required(true)
}

pub(crate) fn influence_function_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_FUNCTION)
        .short("f")
        .long("function")
        .empty_values(false)
        .multiple(false)
        .help("the name of the influence function")
        .required(true)
}

pub(crate) fn read_aggregation_function(
    arg_matches: &ArgMatches<'_>,
) -> Result<AggregationFunction> {
    AggregationFunction::try_from(arg_matches.value_of(ARG_FUNCTION).unwrap())
}

pub(crate) fn read_influence_function(arg_matches: &ArgMatches<'_>) -> Result<InfluenceFunction> {
    InfluenceFunction::try_from(arg_matches.value_of(ARG_FUNCTION).unwrap())
}

pub(crate) const ARG_WEIGHT: &str = "WEIGHT";

pub(crate) fn weight_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_WEIGHT)
        .short("w")
        .long("weight")
        .empty_values(false)
        .multiple(false)
        .help("the base weight of the argument")
        .required(true)
}

pub(crate) const ARG_STRENGTHS: &str = "STRENGTHS";

pub(crate) fn strengths_arg() -> Arg<'static, 'static> {
    Arg::with_name(ARG_STRENGTHS)
        .empty_values(false)
        .multiple(true)
        .help("the strengths to aggregate")
        .required(false)
}

pub(crate) fn read_strengths(arg_matches: &ArgMatches<'_>) -> Result<Vec<f64>> {
    arg_matches
        .values_of(ARG_STRENGTHS)
        .map(|values| values.map(read_number).collect())
        .unwrap_or_else(|| Ok(vec![]))
}

/// Reads a floating point number given on the command line.
///
/// Values that do not denote a finite number (NaN and infinities included) are rejected.
pub(crate) fn read_number(value: &str) -> Result<f64> {
    let context = || format!(r#"while parsing number "{}""#, value);
    let number = value.trim().parse::<f64>().with_context(context)?;
    if number.is_nan() {
        return Err(anyhow!("NaN is not allowed")).with_context(context);
    }
    if number.is_infinite() {
        return Err(anyhow!("infinite values are not allowed")).with_context(context);
    }
    Ok(number)
}

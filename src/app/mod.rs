mod aggregate_command;
pub(crate) use aggregate_command::AggregateCommand;

mod app_helper;

mod authors_command;
pub(crate) use authors_command::AuthorsCommand;

mod check_command;
pub(crate) use check_command::CheckCommand;

mod cli_manager;

mod command;

pub(crate) mod common;

mod functions_command;
pub(crate) use functions_command::FunctionsCommand;

mod influence_command;
pub(crate) use influence_command::InfluenceCommand;

mod revise_command;
pub(crate) use revise_command::ReviseCommand;

mod writable_string;

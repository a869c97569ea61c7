use super::cli_manager::logging_level_cli_arg;
use super::command::Command;
use super::common::AppMetadata;
use anyhow::Result;
use clap::{App, AppSettings, ArgMatches, SubCommand};

const CMD_NAME: &str = "authors";

pub(crate) struct AuthorsCommand {
    metadata: AppMetadata,
}

impl AuthorsCommand {
    pub(crate) fn new(metadata: AppMetadata) -> Self {
        AuthorsCommand { metadata }
    }
}

impl<'a> Command<'a> for AuthorsCommand {
    fn name(&self) -> &str {
        CMD_NAME
    }

    fn clap_subcommand(&self) -> App<'a, 'a> {
        SubCommand::with_name(CMD_NAME)
            .about("Displays the version of the functions library and its authors")
            .setting(AppSettings::DisableVersion)
            .arg(logging_level_cli_arg())
    }

    fn execute(&self, _arg_matches: &ArgMatches<'_>) -> Result<()> {
        print!("{}", credits(&self.metadata));
        Ok(())
    }
}

/// Builds the text printed by the command: the name and version on the first line, then one author per line.
///
/// Cargo joins the authors with colons; empty entries are skipped.
fn credits(metadata: &AppMetadata) -> String {
    let mut text = format!("{} {}\n", metadata.name, metadata.version);
    metadata
        .authors
        .split(':')
        .map(str::trim)
        .filter(|a| !a.is_empty())
        .for_each(|a| {
            text.push_str(a);
            text.push('\n');
        });
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metadata(authors: &'static str) -> AppMetadata {
        AppMetadata {
            name: "qbaf-functions",
            version: "1.2.3",
            authors,
            about: "",
        }
    }

    #[test]
    fn test_credits_single_author() {
        assert_eq!(
            "qbaf-functions 1.2.3\nJose Ruiz Alarcon\n",
            credits(&metadata("Jose Ruiz Alarcon"))
        );
    }

    #[test]
    fn test_credits_several_authors() {
        assert_eq!(
            "qbaf-functions 1.2.3\nA <a@example.org>\nB\n",
            credits(&metadata("A <a@example.org>: B:"))
        );
    }

    #[test]
    fn test_credits_no_author() {
        assert_eq!("qbaf-functions 1.2.3\n", credits(&metadata("")));
    }
}

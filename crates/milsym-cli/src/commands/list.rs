//! List command implementation.

use crate::cli::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::output::Formatter;
use milsym_domain::catalog;
use milsym_generator::build_plan;

/// Execute the list command.
pub fn execute_list(args: ListArgs, config: &Config, formatter: &Formatter) -> Result<()> {
    println!("{}", render_list(&args, config, formatter)?);
    Ok(())
}

/// Render the plan a generate run with the same selection would follow.
pub fn render_list(args: &ListArgs, config: &Config, formatter: &Formatter) -> Result<String> {
    let filter = args.selection.to_filter();
    filter.validate(catalog::UNITS)?;

    let mode = args
        .query_mode
        .map(Into::into)
        .unwrap_or(config.generator.query_mode);

    formatter.format_plan(&build_plan(catalog::UNITS, &filter, mode))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::{AffiliationArg, QueryModeArg, SelectionArgs};
    use crate::config::OutputFormat;
    use crate::error::CliError;

    #[test]
    fn test_list_selection() {
        let formatter = Formatter::new(OutputFormat::Json, false);
        let args = ListArgs {
            selection: SelectionArgs {
                units: vec!["cmd_hq".to_string()],
                affiliations: vec![AffiliationArg::Hostile],
                confidences: vec![],
            },
            query_mode: Some(QueryModeArg::Sidc),
        };

        let output = render_list(&args, &Config::default(), &formatter).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        let rows = value.as_array().unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["file"], "cmd_hq_hostile_conf.svg");
        assert_eq!(rows[1]["file"], "cmd_hq_hostile_sus.svg");
        assert_eq!(rows[0]["query"], "130610011312110000000000000000");
    }

    #[test]
    fn test_unknown_unit_rejected() {
        let formatter = Formatter::new(OutputFormat::Text, false);
        let args = ListArgs {
            selection: SelectionArgs {
                units: vec!["dragoon".to_string()],
                ..Default::default()
            },
            query_mode: None,
        };

        let result = render_list(&args, &Config::default(), &formatter);
        assert!(matches!(result, Err(CliError::Generator(_))));
    }
}

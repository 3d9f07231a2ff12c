//! JSON output formatter for machine processing
//!
//! Emits the verdict, the short status text, the active checks and the
//! unstable entries of every category with the kind of their specifier.

use crate::domain::{CategoryResult, EvaluationOptions, Verdict};
use crate::output::render_short_text;
use serde::Serialize;
use std::io::Write;

/// JSON representation of the full result
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonOutput<'a> {
    is_okay: bool,
    short_text: String,
    checks: &'a EvaluationOptions,
    dependencies: Vec<JsonEntry<'a>>,
    dev_dependencies: Vec<JsonEntry<'a>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    report: Option<String>,
}

/// JSON representation of an unstable entry
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonEntry<'a> {
    name: &'a str,
    version_specifier: &'a str,
    kind: &'static str,
}

fn entries_to_json(result: &CategoryResult) -> Vec<JsonEntry<'_>> {
    result
        .classified()
        .iter()
        .map(|c| JsonEntry {
            name: &c.entry.name,
            version_specifier: &c.entry.version_specifier,
            kind: c.kind.label(),
        })
        .collect()
}

/// Renders the verdict as pretty-printed JSON.
///
/// Unlike the report renderers this lists disabled categories too, so
/// `checks` tells consumers which lists gated `isOkay`.
pub fn render_json(
    verdict: &Verdict,
    options: &EvaluationOptions,
    report: Option<&std::path::Path>,
) -> serde_json::Result<String> {
    let output = JsonOutput {
        is_okay: verdict.is_okay(),
        short_text: render_short_text(verdict, options),
        checks: options,
        dependencies: entries_to_json(verdict.dependencies()),
        dev_dependencies: entries_to_json(verdict.dev_dependencies()),
        report: report.map(|p| p.display().to_string()),
    };
    serde_json::to_string_pretty(&output)
}

/// Writes the JSON rendering followed by a newline
pub fn write_json(
    verdict: &Verdict,
    options: &EvaluationOptions,
    report: Option<&std::path::Path>,
    writer: &mut dyn Write,
) -> std::io::Result<()> {
    let json = render_json(verdict, options, report).map_err(std::io::Error::other)?;
    writeln!(writer, "{}", json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::DependencyEntry;
    use crate::evaluation::aggregate;
    use serde_json::Value;
    use std::path::Path;

    #[test]
    fn test_json_structure() {
        let options = EvaluationOptions::new(true, false);
        let verdict = aggregate(
            &[
                DependencyEntry::new("a", "^1.0.0"),
                DependencyEntry::new("b", "2.0.0"),
            ],
            &[DependencyEntry::new("jest", "*")],
            &options,
        );

        let json = render_json(&verdict, &options, None).unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();

        assert_eq!(parsed["isOkay"], false);
        assert_eq!(parsed["shortText"], "1 unfixed dependencies");
        assert_eq!(parsed["checks"]["checkDependencies"], true);
        assert_eq!(parsed["checks"]["checkDevDependencies"], false);
        assert_eq!(parsed["dependencies"][0]["name"], "a");
        assert_eq!(parsed["dependencies"][0]["versionSpecifier"], "^1.0.0");
        assert_eq!(parsed["dependencies"][0]["kind"], "caret range");
        assert_eq!(parsed["devDependencies"][0]["kind"], "wildcard");
        assert!(parsed.get("report").is_none());
    }

    #[test]
    fn test_json_includes_report_path() {
        let options = EvaluationOptions::default();
        let verdict = aggregate(&[], &[], &options);
        let json = render_json(&verdict, &options, Some(Path::new("dependencies/index.html")))
            .unwrap();
        let parsed: Value = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed["isOkay"], true);
        assert_eq!(parsed["report"], "dependencies/index.html");
    }

    #[test]
    fn test_write_json_appends_newline() {
        let options = EvaluationOptions::default();
        let verdict = aggregate(&[], &[], &options);
        let mut output = Vec::new();
        write_json(&verdict, &options, None, &mut output).unwrap();
        let text = String::from_utf8(output).unwrap();
        assert!(text.ends_with("}\n"));
    }
}

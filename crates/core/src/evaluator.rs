//! Rule-based code checker for the practice areas.
//!
//! This is a keyword scanner, not a parser: every rule is a substring check
//! over the submitted text, and the verdict only depends on which tokens are
//! present. The same input and rule set always produce the same output.

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use thiserror::Error;

use crate::model::EvaluationResult;

pub const EMPTY_INPUT_MESSAGE: &str = "Error: Code cannot be empty. Please write some VB.NET code.";

pub const MISSING_PROCEDURE_ERROR: &str =
    "Code must contain at least one Function or Sub procedure.";

pub const UNGUARDED_RISK_WARNING: &str =
    "Warning: Code contains potential error conditions and should include Try-Catch blocks.";

/// Inputs longer than this (in characters, after trimming) are refused.
pub const MAX_INPUT_CHARS: usize = 20_000;

const PROCEDURE_TOKENS: &[&str] = &["Function", "Sub"];

const RISKY_TOKENS: &[&str] = &[
    "Throw",
    "Integer.MaxValue",
    "Integer.MinValue",
    "Nothing",
    "DivideByZero",
];

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EvaluationError {
    #[error("input is too long ({len} characters, limit is {limit})")]
    InputTooLong { len: usize, limit: usize },
    #[error("unknown rule set: {0}")]
    UnknownRuleSet(String),
}

//
// ─── RULES ─────────────────────────────────────────────────────────────────────
//

/// Presence check applied to the submitted text. Matching is case-sensitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Matcher {
    Contains(&'static str),
    ContainsAny(&'static [&'static str]),
}

impl Matcher {
    #[must_use]
    pub fn matches(&self, text: &str) -> bool {
        match self {
            Matcher::Contains(token) => text.contains(token),
            Matcher::ContainsAny(tokens) => tokens.iter().any(|token| text.contains(token)),
        }
    }
}

/// One row of a rule table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    pub matcher: Matcher,
    pub pass_label: &'static str,
    pub fail_label: &'static str,
    /// Remediation shown when the rule fails.
    pub suggestion: &'static str,
}

const TRY_CATCH_SUGGESTION: &str = "Add Try-Catch blocks to handle runtime errors";

static BASICS_RULES: [Rule; 4] = [
    Rule {
        matcher: Matcher::Contains("Function"),
        pass_label: "Function declaration",
        fail_label: "No Function declaration",
        suggestion: "Declare a Function when the method needs to return a value",
    },
    Rule {
        matcher: Matcher::Contains("Sub"),
        pass_label: "Sub procedure declaration",
        fail_label: "No Sub procedure declaration",
        suggestion: "Use a Sub procedure for actions that do not return a value",
    },
    Rule {
        matcher: Matcher::Contains("Try"),
        pass_label: "Error handling",
        fail_label: "No error handling",
        suggestion: TRY_CATCH_SUGGESTION,
    },
    Rule {
        matcher: Matcher::ContainsAny(&["ByVal", "ByRef"]),
        pass_label: "Parameter passing mode",
        fail_label: "No parameter passing mode",
        suggestion: "Specify the parameter passing mode with ByVal or ByRef",
    },
];

static FUNCTIONS_RULES: [Rule; 3] = [
    Rule {
        matcher: Matcher::Contains("As "),
        pass_label: "Return type specification",
        fail_label: "No return type specification",
        suggestion: "Specify a return type with As",
    },
    Rule {
        matcher: Matcher::Contains("Return"),
        pass_label: "Return statement",
        fail_label: "No Return statement",
        suggestion: "Add a Return statement",
    },
    Rule {
        matcher: Matcher::Contains("Optional"),
        pass_label: "Optional parameters",
        fail_label: "No Optional parameters",
        suggestion: "Consider Optional parameters for values with sensible defaults",
    },
];

static PROCEDURES_RULES: [Rule; 4] = [
    Rule {
        matcher: Matcher::Contains("ByRef"),
        pass_label: "Reference parameters",
        fail_label: "No reference parameters",
        suggestion: "Consider using ByRef for output parameters",
    },
    Rule {
        matcher: Matcher::Contains("Exit Sub"),
        pass_label: "Early exit",
        fail_label: "No early exit",
        suggestion: "Use Exit Sub to leave early when there is nothing left to do",
    },
    Rule {
        matcher: Matcher::Contains("RaiseEvent"),
        pass_label: "Event raising",
        fail_label: "No event raising",
        suggestion: "Use RaiseEvent to notify callers when the procedure finishes",
    },
    Rule {
        matcher: Matcher::Contains("Try"),
        pass_label: "Error handling",
        fail_label: "No error handling",
        suggestion: TRY_CATCH_SUGGESTION,
    },
];

static ADVANCED_RULES: [Rule; 4] = [
    Rule {
        matcher: Matcher::Contains("Overloads"),
        pass_label: "Function overloading",
        fail_label: "No function overloading",
        suggestion: "Consider overloading for flexibility",
    },
    Rule {
        matcher: Matcher::Contains("ParamArray"),
        pass_label: "Variable argument list",
        fail_label: "No variable argument list",
        suggestion: "Use ParamArray to accept a variable number of arguments",
    },
    Rule {
        matcher: Matcher::ContainsAny(&["Generic", "(Of "]),
        pass_label: "Generic methods",
        fail_label: "No generic methods",
        suggestion: "Make the method generic with (Of T) when it works for many types",
    },
    Rule {
        matcher: Matcher::ContainsAny(&["'''", "XML"]),
        pass_label: "XML documentation",
        fail_label: "No XML documentation",
        suggestion: "Add XML documentation comments (''')",
    },
];

static DATA_ACCESS_RULES: [Rule; 5] = [
    Rule {
        matcher: Matcher::Contains("SqlConnection"),
        pass_label: "Database connection",
        fail_label: "No database connection",
        suggestion: "Open the database through a SqlConnection",
    },
    Rule {
        matcher: Matcher::Contains("Using"),
        pass_label: "Using block for disposal",
        fail_label: "No Using block",
        suggestion: "Wrap connections and commands in Using blocks",
    },
    Rule {
        matcher: Matcher::Contains("Parameters.Add"),
        pass_label: "Parameterized query",
        fail_label: "No query parameters",
        suggestion: "Pass values through command parameters instead of string concatenation",
    },
    Rule {
        matcher: Matcher::ContainsAny(&["ExecuteNonQuery", "ExecuteReader", "ExecuteScalar"]),
        pass_label: "Command execution",
        fail_label: "No command execution",
        suggestion: "Run the command with ExecuteNonQuery, ExecuteReader or ExecuteScalar",
    },
    Rule {
        matcher: Matcher::Contains("Try"),
        pass_label: "Error handling",
        fail_label: "No error handling",
        suggestion: TRY_CATCH_SUGGESTION,
    },
];

/// Which table of rules a submission is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuleSet {
    Basics,
    Functions,
    Procedures,
    Advanced,
    DataAccess,
}

impl RuleSet {
    #[must_use]
    pub fn rules(self) -> &'static [Rule] {
        match self {
            RuleSet::Basics => &BASICS_RULES,
            RuleSet::Functions => &FUNCTIONS_RULES,
            RuleSet::Procedures => &PROCEDURES_RULES,
            RuleSet::Advanced => &ADVANCED_RULES,
            RuleSet::DataAccess => &DATA_ACCESS_RULES,
        }
    }

    #[must_use]
    pub fn key(self) -> &'static str {
        match self {
            RuleSet::Basics => "basics",
            RuleSet::Functions => "functions",
            RuleSet::Procedures => "procedures",
            RuleSet::Advanced => "advanced",
            RuleSet::DataAccess => "data-access",
        }
    }
}

impl fmt::Display for RuleSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for RuleSet {
    type Err = EvaluationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basics" => Ok(RuleSet::Basics),
            "functions" => Ok(RuleSet::Functions),
            "procedures" => Ok(RuleSet::Procedures),
            "advanced" => Ok(RuleSet::Advanced),
            "data-access" => Ok(RuleSet::DataAccess),
            other => Err(EvaluationError::UnknownRuleSet(other.to_string())),
        }
    }
}

//
// ─── ANALYSIS ──────────────────────────────────────────────────────────────────
//

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Feature {
    pub label: &'static str,
    pub passed: bool,
}

/// Everything the checker found in one submission.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Analysis {
    pub features: Vec<Feature>,
    pub suggestions: Vec<&'static str>,
    pub warnings: Vec<&'static str>,
    pub errors: Vec<&'static str>,
}

impl Analysis {
    /// Warnings never fail a submission; errors always do.
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.errors.is_empty()
    }

    /// Format the analysis as the text block shown under the editor.
    #[must_use]
    pub fn render(&self) -> String {
        let mut out = String::from("Code Analysis Results:\n\n");

        if !self.features.is_empty() {
            out.push_str("Features Found:\n");
            for feature in &self.features {
                let mark = if feature.passed { '✓' } else { '✗' };
                out.push_str(&format!("{mark} {}\n", feature.label));
            }
            out.push('\n');
        }

        if !self.suggestions.is_empty() {
            out.push_str("Suggestions:\n");
            for suggestion in &self.suggestions {
                out.push_str(&format!("• {suggestion}\n"));
            }
            out.push('\n');
        }

        if !self.warnings.is_empty() {
            out.push_str("Warnings:\n");
            out.push_str(&self.warnings.join("\n"));
            out.push_str("\n\n");
        }

        if !self.errors.is_empty() {
            out.push_str("Errors:\n");
            out.push_str(&self.errors.join("\n"));
            out.push('\n');
        }

        out
    }
}

/// Case-insensitive "Try ... Catch" in that order, anywhere in the text.
fn has_try_catch(code: &str) -> bool {
    let lower = code.to_lowercase();
    lower
        .find("try")
        .is_some_and(|start| lower[start + "try".len()..].contains("catch"))
}

/// Run the rule table and the cross-cutting checks over already trimmed text.
///
/// # Errors
///
/// Returns `EvaluationError::InputTooLong` when the text exceeds
/// [`MAX_INPUT_CHARS`].
pub fn analyze(code: &str, rule_set: RuleSet) -> Result<Analysis, EvaluationError> {
    let len = code.chars().count();
    if len > MAX_INPUT_CHARS {
        return Err(EvaluationError::InputTooLong {
            len,
            limit: MAX_INPUT_CHARS,
        });
    }

    let mut analysis = Analysis::default();
    for rule in rule_set.rules() {
        let passed = rule.matcher.matches(code);
        analysis.features.push(Feature {
            label: if passed { rule.pass_label } else { rule.fail_label },
            passed,
        });
        if !passed {
            analysis.suggestions.push(rule.suggestion);
        }
    }

    if !Matcher::ContainsAny(PROCEDURE_TOKENS).matches(code) {
        analysis.errors.push(MISSING_PROCEDURE_ERROR);
    }

    if Matcher::ContainsAny(RISKY_TOKENS).matches(code) && !has_try_catch(code) {
        analysis.warnings.push(UNGUARDED_RISK_WARNING);
    }

    Ok(analysis)
}

/// Check a submission and turn every outcome, including internal failures,
/// into a displayable result.
#[must_use]
pub fn evaluate(input: &str, rule_set: RuleSet, at: DateTime<Utc>) -> EvaluationResult {
    let code = input.trim();
    if code.is_empty() {
        return EvaluationResult::failure(input, EMPTY_INPUT_MESSAGE, at);
    }

    match analyze(code, rule_set) {
        Ok(analysis) if analysis.is_success() => {
            EvaluationResult::success(input, analysis.render(), at)
        }
        Ok(analysis) => EvaluationResult::failure(input, analysis.render(), at),
        Err(err) => EvaluationResult::failure(input, format!("Simulation Error: {err}"), at),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::fixed_now;

    #[test]
    fn blank_input_fails_with_fixed_message_on_every_rule_set() {
        for rule_set in [
            RuleSet::Basics,
            RuleSet::Functions,
            RuleSet::Procedures,
            RuleSet::Advanced,
            RuleSet::DataAccess,
        ] {
            for input in ["", "   ", "\n\t  \n"] {
                let result = evaluate(input, rule_set, fixed_now());
                assert!(!result.success);
                assert_eq!(result.output, EMPTY_INPUT_MESSAGE);
                assert_eq!(result.input, input);
            }
        }
    }

    #[test]
    fn sub_without_try_passes_with_suggestion() {
        let result = evaluate("Sub Foo() End Sub", RuleSet::Basics, fixed_now());

        assert!(result.success, "{}", result.output);
        assert!(result.output.contains("✓ Sub procedure declaration"));
        assert!(result.output.contains("✗ No error handling"));
        assert!(
            result
                .output
                .contains("• Add Try-Catch blocks to handle runtime errors")
        );
        assert!(!result.output.contains("Errors:"));
    }

    #[test]
    fn missing_function_and_sub_is_a_hard_error() {
        let result = evaluate("Dim x As Integer = 5", RuleSet::Functions, fixed_now());

        assert!(!result.success);
        assert!(result.output.contains("Errors:\n"));
        assert!(result.output.contains(MISSING_PROCEDURE_ERROR));
    }

    #[test]
    fn risky_token_without_try_catch_only_warns() {
        let code = "Function F() As Integer\n  Throw New Exception()\nEnd Function";
        let result = evaluate(code, RuleSet::Functions, fixed_now());

        assert!(result.success);
        assert!(result.output.contains(UNGUARDED_RISK_WARNING));
    }

    #[test]
    fn try_catch_silences_the_risk_warning() {
        let code = "Sub S()\n  try\n    x = Nothing\n  CATCH ex As Exception\n  End Try\nEnd Sub";
        let analysis = analyze(code, RuleSet::Procedures).unwrap();
        assert!(analysis.warnings.is_empty());
    }

    #[test]
    fn catch_before_try_does_not_count() {
        assert!(!has_try_catch("Catch it then Try again"));
        assert!(has_try_catch("Try\nCatch"));
    }

    #[test]
    fn every_rule_produces_one_feature_line() {
        let analysis = analyze("Function F()", RuleSet::Advanced).unwrap();
        assert_eq!(analysis.features.len(), RuleSet::Advanced.rules().len());
        assert_eq!(
            analysis.suggestions.len(),
            analysis.features.iter().filter(|f| !f.passed).count()
        );
    }

    #[test]
    fn output_sections_follow_fixed_order() {
        let output = analyze("Throw", RuleSet::Basics).unwrap().render();
        let features = output.find("Features Found:").unwrap();
        let suggestions = output.find("Suggestions:").unwrap();
        let warnings = output.find("Warnings:").unwrap();
        let errors = output.find("Errors:").unwrap();
        assert!(output.starts_with("Code Analysis Results:\n\n"));
        assert!(features < suggestions && suggestions < warnings && warnings < errors);
    }

    #[test]
    fn oversized_input_becomes_simulation_error() {
        let code = format!("Sub S()\n{}\nEnd Sub", "x".repeat(MAX_INPUT_CHARS));
        let result = evaluate(&code, RuleSet::Basics, fixed_now());

        assert!(!result.success);
        assert!(result.output.starts_with("Simulation Error: input is too long"));
    }

    #[test]
    fn data_access_rules_recognize_ado_net_code() {
        let code = "Sub Save()\n Using conn As New SqlConnection(cs)\n cmd.Parameters.AddWithValue(\"@Name\", n)\n cmd.ExecuteNonQuery()\n End Using\nEnd Sub";
        let analysis = analyze(code, RuleSet::DataAccess).unwrap();
        let failed: Vec<_> = analysis
            .features
            .iter()
            .filter(|f| !f.passed)
            .map(|f| f.label)
            .collect();
        assert_eq!(failed, vec!["No error handling"]);
    }

    #[test]
    fn rule_set_keys_parse_back() {
        for rule_set in [
            RuleSet::Basics,
            RuleSet::Functions,
            RuleSet::Procedures,
            RuleSet::Advanced,
            RuleSet::DataAccess,
        ] {
            assert_eq!(rule_set.key().parse::<RuleSet>(), Ok(rule_set));
        }
        assert_eq!(
            "learn".parse::<RuleSet>(),
            Err(EvaluationError::UnknownRuleSet("learn".to_string()))
        );
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert!(!Matcher::Contains("Sub").matches("sub foo"));
        assert!(Matcher::ContainsAny(&["ByVal", "ByRef"]).matches("x ByRef y"));
    }
}

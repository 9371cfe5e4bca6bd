//! Capability kinds and their typed, validated argument sets.
//!
//! Every tool the server exposes is a [`CapabilityKind`] variant; a
//! validated invocation is a [`Capability`] carrying the matching argument
//! struct. Enumerated argument values are Rust enums so that an out-of-set
//! value is rejected during deserialization.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::{AppError, Result};

/// The closed set of tools served by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CapabilityKind {
    /// `code_review`
    CodeReview,
    /// `generate_tests`
    GenerateTests,
    /// `optimize_code`
    OptimizeCode,
    /// `security_scan`
    SecurityScan,
    /// `generate_documentation`
    GenerateDocumentation,
}

impl CapabilityKind {
    /// All capabilities in catalog declaration order.
    pub const ALL: [Self; 5] = [
        Self::CodeReview,
        Self::GenerateTests,
        Self::OptimizeCode,
        Self::SecurityScan,
        Self::GenerateDocumentation,
    ];

    /// Wire name of the tool.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::CodeReview => "code_review",
            Self::GenerateTests => "generate_tests",
            Self::OptimizeCode => "optimize_code",
            Self::SecurityScan => "security_scan",
            Self::GenerateDocumentation => "generate_documentation",
        }
    }

    /// Resolve a wire name; `None` for anything outside the catalog.
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|kind| kind.name() == name)
    }

    /// Human-readable action used when reporting a failed invocation.
    #[must_use]
    pub fn action(self) -> &'static str {
        match self {
            Self::CodeReview => "Code review",
            Self::GenerateTests => "Test generation",
            Self::OptimizeCode => "Code optimization",
            Self::SecurityScan => "Security scan",
            Self::GenerateDocumentation => "Documentation generation",
        }
    }

    /// Whether the model reply must be a JSON object.
    #[must_use]
    pub fn returns_json(self) -> bool {
        matches!(self, Self::CodeReview | Self::SecurityScan)
    }
}

/// Focus of a `code_review` invocation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReviewType {
    /// Security issues only.
    Security,
    /// Performance issues only.
    Performance,
    /// Code quality issues only.
    Quality,
    /// Every category.
    #[default]
    All,
}

/// Test framework targeted by `generate_tests`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestFramework {
    /// Jest (JavaScript / TypeScript).
    Jest,
    /// pytest (Python).
    Pytest,
    /// `JUnit` 5 (Java).
    Junit,
    /// `NUnit` (.NET).
    Nunit,
}

/// Breadth of generated tests.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Coverage {
    /// Happy-path tests only.
    Basic,
    /// Happy path plus edge cases and error scenarios.
    #[default]
    Comprehensive,
    /// Edge cases and error scenarios only.
    EdgeCases,
}

/// Resource the optimizer should favour.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetMetric {
    /// Execution time.
    Speed,
    /// Memory footprint.
    Memory,
    /// Both time and memory.
    #[default]
    Both,
}

/// Category of security scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanType {
    /// Static application security testing.
    #[serde(rename = "SAST")]
    Sast,
    /// Hard-coded secrets and credentials.
    #[serde(rename = "secrets")]
    Secrets,
    /// Vulnerable dependencies.
    #[serde(rename = "dependencies")]
    Dependencies,
    /// Every category.
    #[default]
    #[serde(rename = "all")]
    All,
}

/// Minimum severity reported by a security scan.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SeverityFilter {
    /// Report every finding.
    #[default]
    All,
    /// High and critical findings.
    High,
    /// Critical findings only.
    Critical,
}

/// Output format for generated documentation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocStyle {
    /// Markdown.
    #[default]
    Markdown,
    /// `JSDoc` comments.
    Jsdoc,
    /// Sphinx reStructuredText.
    Sphinx,
    /// Python docstrings.
    Docstring,
}

/// Arguments of `code_review`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeReviewArgs {
    /// Source to review.
    pub code: String,
    /// Programming language of `code`.
    pub language: String,
    /// Review focus.
    #[serde(default)]
    pub review_type: ReviewType,
}

/// Arguments of `generate_tests`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateTestsArgs {
    /// Source to test.
    pub code: String,
    /// Target framework.
    pub framework: TestFramework,
    /// Breadth of the generated suite.
    #[serde(default)]
    pub coverage: Coverage,
}

/// Arguments of `optimize_code`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptimizeCodeArgs {
    /// Source to optimize.
    pub code: String,
    /// Optimization goal.
    #[serde(default)]
    pub target_metric: TargetMetric,
    /// Free-form constraints quoted into the instruction.
    #[serde(default)]
    pub constraints: Vec<String>,
}

/// Arguments of `security_scan`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SecurityScanArgs {
    /// Source to scan.
    pub code: String,
    /// Scan category.
    #[serde(default)]
    pub scan_type: ScanType,
    /// Severity threshold.
    #[serde(default)]
    pub severity: SeverityFilter,
}

/// Arguments of `generate_documentation`.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateDocumentationArgs {
    /// Source to document.
    pub code: String,
    /// Documentation format.
    #[serde(default)]
    pub style: DocStyle,
    /// Whether usage examples are requested.
    #[serde(default = "default_true")]
    pub include_examples: bool,
}

fn default_true() -> bool {
    true
}

/// A validated invocation of one capability.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Capability {
    /// `code_review` call.
    CodeReview(CodeReviewArgs),
    /// `generate_tests` call.
    GenerateTests(GenerateTestsArgs),
    /// `optimize_code` call.
    OptimizeCode(OptimizeCodeArgs),
    /// `security_scan` call.
    SecurityScan(SecurityScanArgs),
    /// `generate_documentation` call.
    GenerateDocumentation(GenerateDocumentationArgs),
}

impl Capability {
    /// Validate raw call arguments against the argument set of `kind`.
    ///
    /// Unknown keys are ignored.
    ///
    /// # Errors
    ///
    /// Returns `AppError::Validation` when a required argument is missing,
    /// has the wrong type, or an enumerated value is outside its set.
    pub fn parse(kind: CapabilityKind, arguments: Map<String, Value>) -> Result<Self> {
        let value = Value::Object(arguments);
        let parsed = match kind {
            CapabilityKind::CodeReview => serde_json::from_value(value).map(Self::CodeReview),
            CapabilityKind::GenerateTests => {
                serde_json::from_value(value).map(Self::GenerateTests)
            }
            CapabilityKind::OptimizeCode => serde_json::from_value(value).map(Self::OptimizeCode),
            CapabilityKind::SecurityScan => serde_json::from_value(value).map(Self::SecurityScan),
            CapabilityKind::GenerateDocumentation => {
                serde_json::from_value(value).map(Self::GenerateDocumentation)
            }
        };

        parsed.map_err(|err| {
            AppError::Validation(format!("invalid arguments for {}: {err}", kind.name()))
        })
    }

    /// The kind of this invocation.
    #[must_use]
    pub fn kind(&self) -> CapabilityKind {
        match self {
            Self::CodeReview(_) => CapabilityKind::CodeReview,
            Self::GenerateTests(_) => CapabilityKind::GenerateTests,
            Self::OptimizeCode(_) => CapabilityKind::OptimizeCode,
            Self::SecurityScan(_) => CapabilityKind::SecurityScan,
            Self::GenerateDocumentation(_) => CapabilityKind::GenerateDocumentation,
        }
    }
}

/// Catalog entry advertised through `tools/list`.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CapabilityDescriptor {
    /// Tool name (unique).
    pub name: &'static str,
    /// One-line description.
    pub description: &'static str,
    /// JSON Schema of the accepted arguments.
    pub input_schema: Map<String, Value>,
}

//! `security_scan` prompt builder.

use crate::llm::{CompletionOptions, ModelRequest};
use crate::models::capability::{ScanType, SecurityScanArgs, SeverityFilter};

const TEMPERATURE: f32 = 0.2;

const RESPONSE_SHAPE: &str = r#"{
  "summary": "Security assessment summary",
  "risk_score": "low|medium|high|critical",
  "vulnerabilities": [
    {
      "type": "vulnerability type",
      "severity": "critical|high|medium|low",
      "line": line_number_if_applicable,
      "description": "Detailed description",
      "cwe_id": "CWE-XXX if applicable",
      "remediation": "How to fix the vulnerability",
      "references": ["Links to resources"]
    }
  ],
  "recommendations": ["Security recommendations"]
}"#;

fn scan_focus(scan_type: ScanType) -> &'static str {
    match scan_type {
        ScanType::Sast => "static application security testing",
        ScanType::Secrets => "a scan for hardcoded secrets and credentials",
        ScanType::Dependencies => "a scan for vulnerable dependencies",
        ScanType::All => {
            "a scan for all security vulnerabilities including SAST, secrets, and dependencies"
        }
    }
}

fn severity_clause(severity: SeverityFilter) -> &'static str {
    match severity {
        SeverityFilter::All => "Report issues of all severities.",
        SeverityFilter::High => "Report only high and critical severity issues.",
        SeverityFilter::Critical => "Report only critical severity issues.",
    }
}

/// Render the security-scan request.
pub(crate) fn build(args: &SecurityScanArgs) -> ModelRequest {
    let system = format!(
        "You are a security expert. Perform {} on the given code. {} Format your response as \
         JSON with the following structure:\n{RESPONSE_SHAPE}",
        scan_focus(args.scan_type),
        severity_clause(args.severity),
    );

    ModelRequest {
        system,
        user: format!(
            "Scan this code for security vulnerabilities:\n\n{}",
            args.code
        ),
        options: CompletionOptions {
            temperature: TEMPERATURE,
            json_output: true,
        },
    }
}

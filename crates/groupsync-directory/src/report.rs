//! Renders a reconciliation result.

use std::io::{self, Write};

use crate::{ReconciliationResult, UserSummary};

/// Report layout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ReportFormat {
    #[default]
    Text,
    Json,
}

/// Writes the two-section membership report.
#[derive(Debug, Clone, Copy, Default)]
pub struct ReportPrinter {
    format: ReportFormat,
}

impl ReportPrinter {
    #[must_use]
    pub fn new(format: ReportFormat) -> Self {
        Self { format }
    }

    /// Writes `result` to `out`.
    ///
    /// # Errors
    ///
    /// Returns any error raised by the writer or by JSON encoding.
    pub fn print<W: Write>(&self, result: &ReconciliationResult, out: &mut W) -> io::Result<()> {
        match self.format {
            ReportFormat::Text => print_text(result, out),
            ReportFormat::Json => {
                serde_json::to_writer_pretty(&mut *out, result)?;
                writeln!(out)
            }
        }
    }
}

fn print_text<W: Write>(result: &ReconciliationResult, out: &mut W) -> io::Result<()> {
    writeln!(out, "\nUsers already in the group:")?;
    for user in &result.already_member {
        write_user(user, out)?;
    }

    writeln!(out, "\nUsers not in the group (added):")?;
    for user in &result.added {
        write_user(user, out)?;
    }
    Ok(())
}

fn write_user<W: Write>(user: &UserSummary, out: &mut W) -> io::Result<()> {
    writeln!(
        out,
        "Name: {}, Email: {}, Job Description: {}",
        user.name, user.email, user.job_title
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary(name: &str, email: &str, job: &str) -> UserSummary {
        UserSummary {
            name: name.to_string(),
            email: email.to_string(),
            job_title: job.to_string(),
        }
    }

    fn render(result: &ReconciliationResult, format: ReportFormat) -> String {
        let mut buf = Vec::new();
        ReportPrinter::new(format).print(result, &mut buf).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn test_text_report_sections() {
        let result = ReconciliationResult {
            already_member: vec![summary("Ada", "ada@x.com", "Analyst")],
            added: vec![
                summary("Bob", "bob@x.com", "N/A"),
                summary("Cy", "cy@x.com", "Ops"),
            ],
        };

        let text = render(&result, ReportFormat::Text);
        assert_eq!(
            text,
            "\nUsers already in the group:\n\
             Name: Ada, Email: ada@x.com, Job Description: Analyst\n\
             \nUsers not in the group (added):\n\
             Name: Bob, Email: bob@x.com, Job Description: N/A\n\
             Name: Cy, Email: cy@x.com, Job Description: Ops\n"
        );
    }

    #[test]
    fn test_empty_text_report_keeps_headers() {
        let text = render(&ReconciliationResult::default(), ReportFormat::Text);
        assert_eq!(
            text,
            "\nUsers already in the group:\n\nUsers not in the group (added):\n"
        );
    }

    #[test]
    fn test_json_report() {
        let result = ReconciliationResult {
            already_member: vec![],
            added: vec![summary("Bob", "bob@x.com", "N/A")],
        };

        let text = render(&result, ReportFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(value["already_member"].as_array().unwrap().len(), 0);
        assert_eq!(value["added"][0]["email"], "bob@x.com");
        assert_eq!(value["added"][0]["job_title"], "N/A");
    }
}

//! Report writers over [`AnalysisResults`]. Consumers read the findings
//! only; nothing here feeds back into analysis.

use crate::core::{AnalysisResults, FileReport, Finding, Severity};
use colored::*;
use std::fs::File;
use std::io::Write;
use std::path::Path;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Json,
    Markdown,
    Terminal,
}

pub trait OutputWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()>;
}

pub struct JsonWriter<W: Write> {
    writer: W,
}

impl<W: Write> JsonWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for JsonWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let json = serde_json::to_string_pretty(results)?;
        self.writer.write_all(json.as_bytes())?;
        self.writer.write_all(b"\n")?;
        Ok(())
    }
}

pub struct MarkdownWriter<W: Write> {
    writer: W,
}

impl<W: Write> MarkdownWriter<W> {
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> OutputWriter for MarkdownWriter<W> {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        self.write_header(results)?;
        self.write_summary(results)?;
        for file in &results.files {
            self.write_file_findings(file)?;
        }
        Ok(())
    }
}

impl<W: Write> MarkdownWriter<W> {
    fn write_header(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        writeln!(self.writer, "# Smellmap Analysis Report")?;
        writeln!(self.writer)?;
        writeln!(
            self.writer,
            "Generated: {}",
            results.timestamp.format("%Y-%m-%d %H:%M:%S UTC")
        )?;
        writeln!(self.writer, "Project: {}", results.project_path.display())?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_summary(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        let summary = &results.summary;
        writeln!(self.writer, "## Summary")?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Metric | Value |")?;
        writeln!(self.writer, "|--------|-------|")?;
        writeln!(self.writer, "| Files analyzed | {} |", summary.files_analyzed)?;
        writeln!(
            self.writer,
            "| Functions scanned | {} |",
            summary.functions_scanned
        )?;
        writeln!(self.writer, "| Findings | {} |", summary.total_findings)?;
        writeln!(self.writer, "| High severity | {} |", summary.high_findings)?;
        writeln!(
            self.writer,
            "| Medium severity | {} |",
            summary.medium_findings
        )?;
        writeln!(self.writer)?;
        Ok(())
    }

    fn write_file_findings(&mut self, file: &FileReport) -> anyhow::Result<()> {
        if file.findings.is_empty() {
            return Ok(());
        }
        writeln!(self.writer, "### {}", file.path.display())?;
        writeln!(self.writer)?;
        writeln!(self.writer, "| Line | Function | Smell | Severity | Message |")?;
        writeln!(self.writer, "|------|----------|-------|----------|---------|")?;
        for finding in &file.findings {
            writeln!(
                self.writer,
                "| {} | {} | {} | {} | {} |",
                finding.line, finding.function, finding.smell_type, finding.severity, finding.message
            )?;
        }
        writeln!(self.writer)?;
        Ok(())
    }
}

#[derive(Default)]
pub struct TerminalWriter;

impl TerminalWriter {
    pub fn new() -> Self {
        Self
    }
}

impl OutputWriter for TerminalWriter {
    fn write_results(&mut self, results: &AnalysisResults) -> anyhow::Result<()> {
        print_header();
        print_summary(results);
        if results.summary.total_findings == 0 {
            println!("{} No code smells detected!", "✅".green());
            return Ok(());
        }
        for file in &results.files {
            print_file_findings(file);
        }
        Ok(())
    }
}

fn print_header() {
    println!("{}", "Smellmap Analysis Report".bold().blue());
    println!("{}", "========================".blue());
    println!();
}

fn print_summary(results: &AnalysisResults) {
    let summary = &results.summary;
    println!("  Files analyzed: {}", summary.files_analyzed);
    println!("  Functions scanned: {}", summary.functions_scanned);
    println!(
        "  Findings: {} ({} high, {} medium)",
        summary.total_findings,
        summary.high_findings.to_string().red(),
        summary.medium_findings.to_string().yellow()
    );
    println!();
}

fn print_file_findings(file: &FileReport) {
    if file.findings.is_empty() {
        return;
    }
    println!("📄 {}", file.path.display().to_string().bold());
    println!("   Found {} smell(s)", file.findings.len());
    println!();
    for finding in &file.findings {
        print_finding(finding);
    }
}

fn print_finding(finding: &Finding) {
    println!(
        "   {} {} [{}]",
        severity_glyph(finding.severity),
        finding.smell_type.tag().to_uppercase(),
        finding.severity
    );
    println!("      Function: {}", finding.function.yellow());
    println!(
        "      Location: Line {}, Column {}",
        finding.line, finding.column
    );
    println!("      Message: {}", finding.message);
    println!();
}

fn severity_glyph(severity: Severity) -> &'static str {
    match severity {
        Severity::High => "🔴",
        Severity::Medium => "🟡",
        Severity::Low => "🟢",
    }
}

pub fn create_writer(
    format: OutputFormat,
    output: Option<&Path>,
) -> anyhow::Result<Box<dyn OutputWriter>> {
    match (format, output) {
        (OutputFormat::Json, None) => Ok(Box::new(JsonWriter::new(std::io::stdout()))),
        (OutputFormat::Json, Some(path)) => Ok(Box::new(JsonWriter::new(File::create(path)?))),
        (OutputFormat::Markdown, None) => Ok(Box::new(MarkdownWriter::new(std::io::stdout()))),
        (OutputFormat::Markdown, Some(path)) => {
            Ok(Box::new(MarkdownWriter::new(File::create(path)?)))
        }
        (OutputFormat::Terminal, None) => Ok(Box::new(TerminalWriter::new())),
        (OutputFormat::Terminal, Some(_)) => anyhow::bail!(
            "terminal format writes to stdout; use --format json or markdown with --output"
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::SmellType;
    use std::collections::BTreeMap;
    use std::path::PathBuf;

    fn sample_results() -> AnalysisResults {
        let finding = Finding {
            smell_type: SmellType::LongMethod,
            severity: Severity::High,
            line: 12,
            column: 0,
            function: "huge".to_string(),
            message: "Function is 120 lines long (threshold: 50)".to_string(),
            details: BTreeMap::from([
                ("line_count".to_string(), 120),
                ("threshold".to_string(), 50),
            ]),
        };
        AnalysisResults::new(
            PathBuf::from("proj"),
            vec![FileReport {
                path: PathBuf::from("proj/big.py"),
                functions_scanned: 3,
                findings: vec![finding],
            }],
        )
    }

    #[test]
    fn json_output_round_trips_the_fields() {
        let mut buf = Vec::new();
        JsonWriter::new(&mut buf)
            .write_results(&sample_results())
            .unwrap();

        let value: serde_json::Value = serde_json::from_slice(&buf).unwrap();
        let finding = &value["files"][0]["findings"][0];
        assert_eq!(finding["smell_type"], "long_method");
        assert_eq!(finding["severity"], "high");
        assert_eq!(finding["details"]["line_count"], 120);
        assert_eq!(finding["details"]["threshold"], 50);
        assert_eq!(value["summary"]["high_findings"], 1);
    }

    #[test]
    fn markdown_output_lists_each_finding() {
        let mut buf = Vec::new();
        MarkdownWriter::new(&mut buf)
            .write_results(&sample_results())
            .unwrap();

        let text = String::from_utf8(buf).unwrap();
        assert!(text.contains("# Smellmap Analysis Report"));
        assert!(text.contains("| Files analyzed | 1 |"));
        assert!(text.contains("| 12 | huge | long_method | high |"));
    }

    #[test]
    fn terminal_format_refuses_a_file_target() {
        let err = create_writer(OutputFormat::Terminal, Some(Path::new("out.txt"))).err().unwrap();
        assert!(err.to_string().contains("stdout"));
    }
}

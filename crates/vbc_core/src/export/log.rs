//! Text diagnostic log.
//!
//! Five sections, always written in the same order. An empty section reads
//! `none`.

use std::fmt::Display;

use crate::convert::DiagnosticReport;

const EMPTY: &str = "none";

/// Write a report to the text log format.
pub fn render_log(report: &DiagnosticReport) -> String {
    let mut output = String::new();

    output.push_str(&format!(
        "{} samples read, {} entries written, {} not converted\n\n",
        report.counts.samples_read, report.counts.entries_emitted, report.counts.unconverted
    ));

    push_header(&mut output, "Unconverted samples");
    if report.unconverted.is_empty() {
        output.push_str(EMPTY);
        output.push('\n');
    } else {
        for item in &report.unconverted {
            output.push_str(&format!(
                "#{} (line {}): {} [{}]\n",
                item.index,
                item.entry.line(),
                item.entry,
                item.reason
            ));
        }
    }

    push_section(&mut output, "Missing bare labels", &report.missing_bare_labels);
    push_section(
        &mut output,
        "Missing leading consonants",
        &report.missing_leading_consonants,
    );
    push_section(
        &mut output,
        "Missing trailing vowels",
        &report.missing_trailing_vowels,
    );
    push_section(
        &mut output,
        "Missing vowel-consonant transitions",
        &report.missing_vc_pairs,
    );

    output
}

fn push_header(output: &mut String, title: &str) {
    output.push_str(&format!("-------- {} --------\n", title));
}

fn push_section<'a, I, T>(output: &mut String, title: &str, items: I)
where
    I: IntoIterator<Item = &'a T>,
    T: Display + 'a,
{
    output.push('\n');
    push_header(output, title);

    let joined = items
        .into_iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");

    if joined.is_empty() {
        output.push_str(EMPTY);
    } else {
        output.push_str(&joined);
    }
    output.push('\n');
}

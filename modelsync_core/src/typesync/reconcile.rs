//! Optional-marker reconciliation for an existing interface block.
//!
//! The definitions document is append-grown text, so instead of parsing it
//! the reconciler makes a single forward pass over its lines with a small
//! brace-depth state machine:
//!
//! - `Searching` until the first line that opens `interface <Model>`
//!   (optionally `export`ed, brace on the same line or later, or `extends`;
//!   a byte order mark in front of the first line is skipped),
//! - `InBlock` while the running brace depth is positive; every field line
//!   in this state gets its `?` marker added or removed,
//! - `Done` once the depth returns to zero. Later blocks with the same name
//!   are never touched.
//!
//! When the braces never balance, every remaining line is treated as part of
//! the block.

use super::presence::RequiredSet;
use crate::error::Result;
use crate::naming::pascal_case;
use once_cell::sync::Lazy;
use regex::Regex;
use std::borrow::Cow;
use tracing::{debug, trace, warn};

/// `<indent><name><?>:<rest>`
static FIELD_LINE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\s*)([A-Za-z_$][\w$]*)(\?)?(:.*)$").expect("Invalid field line regex")
});

/// What reconciling a single model did to the document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReconcileOutcome {
    /// No definitions document exists yet.
    MissingDocument,
    /// The document has no interface for the model.
    NoMatchingBlock,
    /// The block already matched the required set.
    Unchanged,
    Updated { changed_lines: usize },
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanReport {
    pub block_found: bool,
    pub changed_lines: usize,
    /// The block's braces never balanced before end-of-document.
    pub unterminated: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    Searching,
    InBlock,
    Done,
}

struct BlockScanner<'a> {
    anchor: Regex,
    required: &'a RequiredSet,
    state: ScanState,
    depth: i64,
    opened: bool,
    report: ScanReport,
}

impl<'a> BlockScanner<'a> {
    fn new(model_name: &str, required: &'a RequiredSet) -> Result<Self> {
        let interface_name = pascal_case(model_name);
        let anchor = Regex::new(&format!(
            r"^\x{{FEFF}}?\s*(?:export\s+)?interface\s+{}\s*(?:\{{|extends|$)",
            regex::escape(&interface_name)
        ))?;

        Ok(Self {
            anchor,
            required,
            state: ScanState::Searching,
            depth: 0,
            opened: false,
            report: ScanReport::default(),
        })
    }

    fn scan_line<'l>(&mut self, line: &'l str) -> Cow<'l, str> {
        let opens = line.matches('{').count() as i64;
        let closes = line.matches('}').count() as i64;

        match self.state {
            ScanState::Done => Cow::Borrowed(line),
            ScanState::Searching => {
                if self.anchor.is_match(line) {
                    trace!(line, "Found interface anchor");
                    self.report.block_found = true;
                    self.state = ScanState::InBlock;
                    self.depth = opens - closes;
                    self.opened = opens > 0;
                    if self.opened && self.depth <= 0 {
                        self.state = ScanState::Done;
                    }
                }
                Cow::Borrowed(line)
            }
            ScanState::InBlock => {
                self.depth += opens - closes;
                self.opened |= opens > 0;

                if self.opened && self.depth <= 0 {
                    self.state = ScanState::Done;
                    return Cow::Borrowed(line);
                }
                if self.depth <= 0 {
                    // Between an `interface X` line and its opening brace.
                    return Cow::Borrowed(line);
                }

                let rewritten = self.rewrite_field_line(line);
                if let Cow::Owned(ref new_line) = rewritten {
                    trace!(before = line, after = %new_line, "Rewrote field line");
                    self.report.changed_lines += 1;
                }
                rewritten
            }
        }
    }

    fn rewrite_field_line<'l>(&self, line: &'l str) -> Cow<'l, str> {
        let Some(captures) = FIELD_LINE_RE.captures(line) else {
            return Cow::Borrowed(line);
        };

        let indent = &captures[1];
        let name = &captures[2];
        let is_optional = captures.get(3).is_some();
        let rest = &captures[4];
        let must_be_required = self.required.contains(name);

        match (must_be_required, is_optional) {
            (true, true) => Cow::Owned(format!("{}{}{}", indent, name, rest)),
            (false, false) => Cow::Owned(format!("{}{}?{}", indent, name, rest)),
            _ => Cow::Borrowed(line),
        }
    }
}

/// Split off the line terminator so rewrites keep `\n` / `\r\n` as found.
fn split_line_ending(line: &str) -> (&str, &str) {
    if let Some(body) = line.strip_suffix("\r\n") {
        (body, "\r\n")
    } else if let Some(body) = line.strip_suffix('\n') {
        (body, "\n")
    } else {
        (line, "")
    }
}

/// Rewrite the optional markers of the first `interface <Model>` block in
/// `content` so that exactly the fields in `required` lack a `?`.
pub fn reconcile_document(
    content: &str,
    model_name: &str,
    required: &RequiredSet,
) -> Result<(String, ScanReport)> {
    let mut scanner = BlockScanner::new(model_name, required)?;
    let mut output = String::with_capacity(content.len() + 16);

    for raw_line in content.split_inclusive('\n') {
        let (line, ending) = split_line_ending(raw_line);
        output.push_str(&scanner.scan_line(line));
        output.push_str(ending);
    }

    if scanner.state == ScanState::InBlock {
        warn!(
            model = model_name,
            "Interface block braces never balance; treated the rest of the document as part of the block"
        );
        scanner.report.unterminated = true;
    }

    debug!(
        model = model_name,
        block_found = scanner.report.block_found,
        changed_lines = scanner.report.changed_lines,
        "Reconciled interface block"
    );
    Ok((output, scanner.report))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn required(names: &[&str]) -> RequiredSet {
        names.iter().map(|s| s.to_string()).collect()
    }

    fn reconcile(content: &str, model: &str, names: &[&str]) -> (String, ScanReport) {
        reconcile_document(content, model, &required(names)).unwrap()
    }

    #[test]
    fn test_required_loses_marker_and_others_gain_it() {
        let doc = "interface Post {\n  title?: string;\n  body: string;\n}\n";
        let (output, report) = reconcile(doc, "post", &["title"]);

        assert_eq!(output, "interface Post {\n  title: string;\n  body?: string;\n}\n");
        assert!(report.block_found);
        assert_eq!(report.changed_lines, 2);
    }

    #[test]
    fn test_second_pass_is_a_fixed_point() {
        let doc = "// AUTO-GENERATED for post\ninterface Post {\n  title?: string;\n  author_id: number;\n  author?: Author;\n  body: string;\n}\n";
        let names = ["title", "author", "author_id"];
        let (first, _) = reconcile(doc, "post", &names);
        let (second, report) = reconcile(&first, "post", &names);

        assert_eq!(first, second);
        assert_eq!(report.changed_lines, 0);
    }

    #[test]
    fn test_missing_anchor_is_a_no_op() {
        let doc = "interface Comment {\n  body: string;\n}\n";
        let (output, report) = reconcile(doc, "post", &[]);
        assert_eq!(output, doc);
        assert!(!report.block_found);
    }

    #[test]
    fn test_similar_names_are_not_anchors() {
        let doc = "interface PostComment {\n  body: string;\n}\ninterface Posts {\n  body: string;\n}\n";
        let (output, report) = reconcile(doc, "post", &[]);
        assert_eq!(output, doc);
        assert!(!report.block_found);
    }

    #[test]
    fn test_lines_outside_the_block_are_untouched() {
        let doc = "type Id = number;\nconst x: number = 1;\ninterface Post {\n  title: string;\n}\nlet y: string;\n";
        let (output, _) = reconcile(doc, "post", &[]);
        assert_eq!(
            output,
            "type Id = number;\nconst x: number = 1;\ninterface Post {\n  title?: string;\n}\nlet y: string;\n"
        );
    }

    #[test]
    fn test_only_first_duplicate_block_is_reconciled() {
        let doc = "interface Post {\n  title: string;\n}\ninterface Post {\n  title: string;\n}\n";
        let (output, _) = reconcile(doc, "post", &[]);
        assert_eq!(
            output,
            "interface Post {\n  title?: string;\n}\ninterface Post {\n  title: string;\n}\n"
        );
    }

    #[test]
    fn test_export_and_extends_anchors() {
        let doc = "export interface Post extends Base {\n  title: string;\n}\n";
        let (output, _) = reconcile(doc, "post", &[]);
        assert_eq!(output, "export interface Post extends Base {\n  title?: string;\n}\n");
    }

    #[test]
    fn test_brace_on_following_line() {
        let doc = "interface BlogPost\n  extends Base\n{\n  title?: string;\n}\n";
        let (output, _) = reconcile(doc, "blog_post", &["title"]);
        assert_eq!(output, "interface BlogPost\n  extends Base\n{\n  title: string;\n}\n");
    }

    #[test]
    fn test_comments_and_blank_lines_pass_through() {
        let doc = "interface Post {\n  // the title\n\n  /** body text */\n  body: string;\n}\n";
        let (output, report) = reconcile(doc, "post", &[]);
        assert_eq!(
            output,
            "interface Post {\n  // the title\n\n  /** body text */\n  body?: string;\n}\n"
        );
        assert_eq!(report.changed_lines, 1);
    }

    #[test]
    fn test_nested_type_literal_keeps_block_open() {
        let doc = "interface Post {\n  meta: {\n    tags: string[];\n  };\n  title: string;\n}\ninterface Other {\n  x: number;\n}\n";
        let (output, _) = reconcile(doc, "post", &["meta", "tags"]);
        assert_eq!(
            output,
            "interface Post {\n  meta: {\n    tags: string[];\n  };\n  title?: string;\n}\ninterface Other {\n  x: number;\n}\n"
        );
    }

    #[test]
    fn test_empty_same_line_block_closes_immediately() {
        let doc = "interface Post {}\nlet title: string;\n";
        let (output, report) = reconcile(doc, "post", &[]);
        assert_eq!(output, doc);
        assert!(report.block_found);
    }

    #[test]
    fn test_unbalanced_braces_run_to_end_of_document() {
        let doc = "interface Post {\n  title: string;\ninterface Other {\n  x: number;\n}\ny: boolean;\n";
        let (output, report) = reconcile(doc, "post", &[]);
        assert_eq!(
            output,
            "interface Post {\n  title?: string;\ninterface Other {\n  x?: number;\n}\ny?: boolean;\n"
        );
        assert!(report.unterminated);
    }

    #[test]
    fn test_line_endings_and_missing_final_newline_are_preserved() {
        let doc = "interface Post {\r\n  title: string;\r\n}";
        let (output, _) = reconcile(doc, "post", &[]);
        assert_eq!(output, "interface Post {\r\n  title?: string;\r\n}");
    }

    #[test]
    fn test_byte_order_mark_before_first_anchor() {
        let doc = "\u{feff}interface Post {\n  title?: string;\n}\n";
        let (output, report) = reconcile(doc, "post", &["title"]);
        assert!(report.block_found);
        assert_eq!(output, "\u{feff}interface Post {\n  title: string;\n}\n");
    }

    #[test]
    fn test_migration_lines_after_block_are_not_reconciled() {
        let doc = "interface Post {\n  title?: string;\n}\n// AUTO-GENERATED from migration AddBody\n  body?: string;\n";
        let (output, _) = reconcile(doc, "post", &["title", "body"]);
        assert_eq!(
            output,
            "interface Post {\n  title: string;\n}\n// AUTO-GENERATED from migration AddBody\n  body?: string;\n"
        );
    }
}

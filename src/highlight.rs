//! Code renderer - layered token annotation for snippet display.
//!
//! Rules run in a fixed priority order (strings, comments, keywords, known
//! function names, literals) over the raw line text. Each rule may only claim
//! ranges no earlier rule has claimed, so a keyword inside a string literal is
//! never re-tagged. The output is a list of non-overlapping styled segments
//! per line; sinks (terminal, HTML export) decide how a segment is drawn.

use regex::Regex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Text,
    Str,
    Comment,
    Keyword,
    Func,
    Literal,
}

/// A run of characters within one line sharing a single token kind.
#[derive(Debug, Clone, PartialEq)]
pub struct Segment {
    pub kind: TokenKind,
    pub text: String,
}

/// One display row: a 1-based line number plus its styled segments.
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    pub number: usize,
    pub segments: Vec<Segment>,
}

impl Row {
    pub fn text(&self) -> String {
        self.segments.iter().map(|seg| seg.text.as_str()).collect()
    }
}

struct Rule {
    kind: TokenKind,
    pattern: Regex,
}

// Single-quoted, double-quoted and backtick strings, with backslash escapes.
const STR_PATTERN: &str = r#"'(?:\\.|[^'\\])*'|"(?:\\.|[^"\\])*"|`(?:\\.|[^`\\])*`"#;

const COMMENT_PATTERN: &str = r"//.*";

const KEYWORD_PATTERN: &str = r"\b(?:const|await|import|from|export|default|return|async|var|let|external|public|view|returns|address|uint256|uint192|bytes|calldata|payable)\b";

const FUNC_PATTERN: &str = r"\b(?:function|class|interface|createBlockDAGClient|createSmartAccount|createAccount|getAddress|sendUserOperation|sendBatchUserOperation|sendParallelUserOperations|sendTransaction|waitForUserOperationTransaction|wait|executeBatch|execute|depositMiningRewards|getRewardsBalance|depositRewards|getNonce|privateKeyToAccount|encodeFunctionData|parseEther|http)\b";

const LITERAL_PATTERN: &str = r"\b(?:true|false|null|undefined)\b";

const RULES: &[(TokenKind, &str)] = &[
    (TokenKind::Str, STR_PATTERN),
    (TokenKind::Comment, COMMENT_PATTERN),
    (TokenKind::Keyword, KEYWORD_PATTERN),
    (TokenKind::Func, FUNC_PATTERN),
    (TokenKind::Literal, LITERAL_PATTERN),
];

pub struct Highlighter {
    rules: Vec<Rule>,
}

impl Highlighter {
    pub fn new() -> Self {
        // The patterns are constants; a pattern that fails to compile simply
        // drops its rule (tests assert the full set compiles).
        let rules = RULES
            .iter()
            .filter_map(|&(kind, pattern)| {
                Regex::new(pattern).ok().map(|pattern| Rule { kind, pattern })
            })
            .collect();
        Self { rules }
    }

    /// Annotate one line. Segments cover the line exactly, in order.
    pub fn highlight_line(&self, line: &str) -> Vec<Segment> {
        let mut claims: Vec<(usize, usize, TokenKind)> = Vec::new();

        for rule in &self.rules {
            for mat in rule.pattern.find_iter(line) {
                let overlaps = claims
                    .iter()
                    .any(|&(start, end, _)| mat.start() < end && mat.end() > start);
                if !overlaps {
                    claims.push((mat.start(), mat.end(), rule.kind));
                }
            }
        }

        claims.sort_by_key(|&(start, _, _)| start);

        let mut segments = Vec::new();
        let mut pos = 0;
        for (start, end, kind) in claims {
            if start > pos {
                segments.push(Segment {
                    kind: TokenKind::Text,
                    text: line[pos..start].to_string(),
                });
            }
            segments.push(Segment {
                kind,
                text: line[start..end].to_string(),
            });
            pos = end;
        }
        if pos < line.len() {
            segments.push(Segment {
                kind: TokenKind::Text,
                text: line[pos..].to_string(),
            });
        }

        segments
    }

    /// Split `code` on literal newlines and annotate every line. A trailing
    /// newline therefore produces a final empty row, matching the literal
    /// split semantics of the display contract.
    pub fn render(&self, code: &str) -> Vec<Row> {
        code.split('\n')
            .enumerate()
            .map(|(i, line)| Row {
                number: i + 1,
                segments: self.highlight_line(line),
            })
            .collect()
    }
}

impl Default for Highlighter {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds_of(segments: &[Segment]) -> Vec<(TokenKind, String)> {
        segments
            .iter()
            .map(|seg| (seg.kind, seg.text.clone()))
            .collect()
    }

    #[test]
    fn test_all_rules_compile() {
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.rules.len(), RULES.len());
    }

    #[test]
    fn test_keyword_string_and_comment_on_one_row() {
        let highlighter = Highlighter::new();
        let rows = highlighter.render("const x = 'hi'; // test");
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].number, 1);
        assert_eq!(rows[0].text(), "const x = 'hi'; // test");

        let segments = kinds_of(&rows[0].segments);
        assert_eq!(
            segments,
            vec![
                (TokenKind::Keyword, "const".to_string()),
                (TokenKind::Text, " x = ".to_string()),
                (TokenKind::Str, "'hi'".to_string()),
                (TokenKind::Text, "; ".to_string()),
                (TokenKind::Comment, "// test".to_string()),
            ]
        );
    }

    #[test]
    fn test_keyword_inside_string_is_not_retagged() {
        let highlighter = Highlighter::new();
        let segments = highlighter.highlight_line("log('const await')");
        let string_seg = segments
            .iter()
            .find(|seg| seg.kind == TokenKind::Str)
            .expect("string segment");
        assert_eq!(string_seg.text, "'const await'");
        assert!(!segments.iter().any(|seg| seg.kind == TokenKind::Keyword));
    }

    #[test]
    fn test_keyword_after_comment_marker_stays_comment() {
        let highlighter = Highlighter::new();
        let segments = highlighter.highlight_line("// return early");
        assert_eq!(segments.len(), 1);
        assert_eq!(segments[0].kind, TokenKind::Comment);
        assert_eq!(segments[0].text, "// return early");
    }

    #[test]
    fn test_function_names_and_literals() {
        let highlighter = Highlighter::new();
        let segments = highlighter.highlight_line("await createBlockDAGClient(true)");
        let kinds: Vec<TokenKind> = segments.iter().map(|seg| seg.kind).collect();
        assert_eq!(
            kinds,
            vec![
                TokenKind::Keyword,
                TokenKind::Text,
                TokenKind::Func,
                TokenKind::Text,
                TokenKind::Literal,
                TokenKind::Text,
            ]
        );
    }

    #[test]
    fn test_segments_reassemble_the_line() {
        let highlighter = Highlighter::new();
        let line = "function getNonce(uint192 key) external view returns (uint256);";
        let rebuilt: String = highlighter
            .highlight_line(line)
            .iter()
            .map(|seg| seg.text.as_str())
            .collect();
        assert_eq!(rebuilt, line);
    }

    #[test]
    fn test_render_is_idempotent() {
        let highlighter = Highlighter::new();
        let code = crate::content::snippets::QUICK_START;
        assert_eq!(highlighter.render(code), highlighter.render(code));
    }

    #[test]
    fn test_row_count_matches_segment_count() {
        let highlighter = Highlighter::new();
        assert_eq!(highlighter.render("a\nb\nc").len(), 3);
        // Literal split: a trailing newline yields a final empty row.
        assert_eq!(highlighter.render("a\nb\n").len(), 3);
        assert_eq!(highlighter.render("").len(), 1);

        let rows = highlighter.render("one\n\nthree");
        assert_eq!(rows.len(), 3);
        assert!(rows[1].segments.is_empty());
        assert_eq!(rows[2].number, 3);
    }

    #[test]
    fn test_escaped_quote_inside_string() {
        let highlighter = Highlighter::new();
        let segments = highlighter.highlight_line(r"msg('it\'s fine')");
        let string_seg = segments
            .iter()
            .find(|seg| seg.kind == TokenKind::Str)
            .expect("string segment");
        assert_eq!(string_seg.text, r"'it\'s fine'");
    }
}

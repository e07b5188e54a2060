//! In-process SVG minification.
//!
//! The raster formats go through external executables; SVG is text and small
//! enough to transform here. The minifier strips comments, doctype
//! declarations and processing instructions, drops whitespace-only text, and
//! merges `<style>` elements so each unique rule is emitted once. Output is
//! one compact line unless pretty-printing is enabled.

use std::collections::HashSet;
use std::path::Path;
use tokio::fs;

use crate::core::Settings;
use crate::utils::{ShrinkerError, ShrinkerResult};

/// Fixed declaration line prepended when `addxmltag` is set.
pub const XML_DECLARATION: &str = "<?xml version=\"1.0\" encoding=\"utf-8\"?>";

/// Minification options derived from user settings.
#[derive(Debug, Clone, Default)]
pub struct SvgOptions {
    /// Indent the output instead of emitting one compact line
    pub pretty: bool,
    /// Prepend [`XML_DECLARATION`] when the output does not already contain it
    pub add_xml_declaration: bool,
}

impl SvgOptions {
    pub fn from_settings(settings: &Settings) -> Self {
        Self {
            pretty: settings.prettifysvg,
            add_xml_declaration: settings.addxmltag,
        }
    }
}

/// The in-process SVG compressor.
#[derive(Debug, Clone, Default)]
pub struct SvgMinifier;

impl SvgMinifier {
    /// Minify `input` and write the result to `output`.
    pub async fn compress(
        &self,
        input: &Path,
        output: &Path,
        settings: &Settings,
    ) -> ShrinkerResult<()> {
        let content = fs::read_to_string(input).await.map_err(|e| {
            ShrinkerError::filesystem(format!("Failed to read {}: {}", input.display(), e))
        })?;

        let minified = minify(&content, &SvgOptions::from_settings(settings))?;

        fs::write(output, minified).await.map_err(|e| {
            ShrinkerError::filesystem(format!("Failed to write {}: {}", output.display(), e))
        })?;
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq)]
enum Token {
    /// `<name ...>`; the content between the angle brackets
    Open(String),
    /// `<name .../>`
    SelfClose(String),
    /// `</name>`
    Close(String),
    /// Character data between tags
    Text(String),
    /// `<![CDATA[...]]>`, kept verbatim outside style elements
    Cdata(String),
}

/// Minify an SVG document.
///
/// Errors on structurally broken input (unterminated tags, comments or CDATA
/// sections); unknown elements and attributes pass through untouched.
pub fn minify(input: &str, options: &SvgOptions) -> ShrinkerResult<String> {
    let tokens = tokenize(input)?;

    // Drop whitespace-only text and pull every <style> body aside.
    let mut body: Vec<Token> = Vec::new();
    let mut sheets: Vec<String> = Vec::new();
    let mut style_slot: Option<usize> = None;
    let mut in_style = false;

    for token in tokens {
        match token {
            Token::Open(raw) if tag_name(&raw) == "style" => {
                in_style = true;
                style_slot.get_or_insert(body.len());
            }
            Token::Close(name) if name == "style" => in_style = false,
            Token::Text(text) | Token::Cdata(text) if in_style => {
                let text = text
                    .trim_start_matches("<![CDATA[")
                    .trim_end_matches("]]>");
                sheets.push(text.to_string());
            }
            Token::Text(text) => {
                let trimmed = text.trim();
                if !trimmed.is_empty() {
                    body.push(Token::Text(trimmed.to_string()));
                }
            }
            other => body.push(other),
        }
    }

    // Re-emit a single style element with each unique rule exactly once.
    if !sheets.is_empty() {
        let css = unique_rules(&sheets);
        if !css.is_empty() {
            let slot = style_slot.unwrap_or(0);
            body.insert(slot, Token::Close("style".to_string()));
            body.insert(slot, Token::Text(css));
            body.insert(slot, Token::Open("style".to_string()));
        }
    }

    let mut out = String::new();
    if options.pretty {
        serialize_pretty(&body, &mut out);
    } else {
        serialize_compact(&body, &mut out);
    }

    if options.add_xml_declaration && !contains_declaration(&out) {
        out = format!("{}\n{}", XML_DECLARATION, out);
    }
    Ok(out)
}

fn tokenize(input: &str) -> ShrinkerResult<Vec<Token>> {
    let mut tokens = Vec::new();
    let mut rest = input;

    while !rest.is_empty() {
        let Some(pos) = rest.find('<') else {
            tokens.push(Token::Text(rest.to_string()));
            break;
        };

        if pos > 0 {
            tokens.push(Token::Text(rest[..pos].to_string()));
        }
        rest = &rest[pos..];

        if rest.starts_with("<!--") {
            let end = rest
                .find("-->")
                .ok_or_else(|| ShrinkerError::minification("Unterminated comment"))?;
            // Comments are dropped.
            rest = &rest[end + 3..];
        } else if rest.starts_with("<![CDATA[") {
            let end = rest
                .find("]]>")
                .ok_or_else(|| ShrinkerError::minification("Unterminated CDATA section"))?;
            tokens.push(Token::Cdata(rest[..end + 3].to_string()));
            rest = &rest[end + 3..];
        } else if rest.starts_with("<?") {
            let end = rest.find("?>").ok_or_else(|| {
                ShrinkerError::minification("Unterminated processing instruction")
            })?;
            // Declarations and processing instructions are dropped.
            rest = &rest[end + 2..];
        } else if rest.starts_with("<!") {
            let end = rest
                .find('>')
                .ok_or_else(|| ShrinkerError::minification("Unterminated doctype declaration"))?;
            rest = &rest[end + 1..];
        } else {
            let end = find_tag_end(rest)?;
            let inner = rest[1..end - 1].trim();
            if inner.is_empty() {
                return Err(ShrinkerError::minification("Empty tag"));
            }
            if let Some(name) = inner.strip_prefix('/') {
                tokens.push(Token::Close(name.trim().to_string()));
            } else if let Some(content) = inner.strip_suffix('/') {
                tokens.push(Token::SelfClose(content.trim_end().to_string()));
            } else {
                tokens.push(Token::Open(inner.to_string()));
            }
            rest = &rest[end..];
        }
    }

    Ok(tokens)
}

/// Index just past the `>` that closes the tag at the start of `rest`,
/// honoring quoted attribute values.
fn find_tag_end(rest: &str) -> ShrinkerResult<usize> {
    let mut quote: Option<char> = None;
    for (i, c) in rest.char_indices() {
        match (quote, c) {
            (None, '"') | (None, '\'') => quote = Some(c),
            (Some(q), c) if c == q => quote = None,
            (None, '>') => return Ok(i + 1),
            _ => {}
        }
    }
    Err(ShrinkerError::minification("Unterminated tag"))
}

fn tag_name(raw: &str) -> &str {
    raw.split_whitespace().next().unwrap_or(raw)
}

/// Merge stylesheets, keeping each unique rule once in first-seen order.
fn unique_rules(sheets: &[String]) -> String {
    let mut seen: HashSet<String> = HashSet::new();
    let mut merged = String::new();

    for sheet in sheets {
        if sheet.contains('@') {
            // At-rules nest blocks; keep such a sheet as one unit rather
            // than splitting on braces.
            let unit = collapse_ws(sheet);
            if !unit.is_empty() && seen.insert(unit.clone()) {
                merged.push_str(&unit);
            }
            continue;
        }
        for rule in sheet.split('}') {
            let rule = collapse_ws(rule);
            if rule.is_empty() {
                continue;
            }
            let rule = format!("{}}}", rule);
            if seen.insert(rule.clone()) {
                merged.push_str(&rule);
            }
        }
    }

    merged
}

fn collapse_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Case-insensitive search for the exact declaration literal. Whitespace or
/// quoting variants do not match.
fn contains_declaration(content: &str) -> bool {
    content.to_lowercase().contains(XML_DECLARATION)
}

fn serialize_compact(tokens: &[Token], out: &mut String) {
    for token in tokens {
        match token {
            Token::Open(raw) => {
                out.push('<');
                out.push_str(&normalize_tag_ws(raw));
                out.push('>');
            }
            Token::SelfClose(raw) => {
                out.push('<');
                out.push_str(&normalize_tag_ws(raw));
                out.push_str("/>");
            }
            Token::Close(name) => {
                out.push_str("</");
                out.push_str(name);
                out.push('>');
            }
            Token::Text(text) => out.push_str(text),
            Token::Cdata(raw) => out.push_str(raw),
        }
    }
}

fn serialize_pretty(tokens: &[Token], out: &mut String) {
    let mut depth: usize = 0;
    for token in tokens {
        match token {
            Token::Open(raw) => {
                push_line(out, depth, &format!("<{}>", normalize_tag_ws(raw)));
                depth += 1;
            }
            Token::Close(name) => {
                depth = depth.saturating_sub(1);
                push_line(out, depth, &format!("</{}>", name));
            }
            Token::SelfClose(raw) => push_line(out, depth, &format!("<{}/>", normalize_tag_ws(raw))),
            Token::Text(text) => push_line(out, depth, text),
            Token::Cdata(raw) => push_line(out, depth, raw),
        }
    }
}

fn push_line(out: &mut String, depth: usize, line: &str) {
    if !out.is_empty() {
        out.push('\n');
    }
    for _ in 0..depth {
        out.push_str("  ");
    }
    out.push_str(line);
}

/// Collapse whitespace runs inside a tag, leaving quoted attribute values
/// untouched.
fn normalize_tag_ws(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    let mut quote: Option<char> = None;
    let mut pending_space = false;

    for c in raw.chars() {
        match quote {
            Some(q) => {
                out.push(c);
                if c == q {
                    quote = None;
                }
            }
            None if c.is_whitespace() => pending_space = true,
            None => {
                if pending_space {
                    out.push(' ');
                    pending_space = false;
                }
                out.push(c);
                if c == '"' || c == '\'' {
                    quote = Some(c);
                }
            }
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    const OPTIONS: SvgOptions = SvgOptions {
        pretty: false,
        add_xml_declaration: false,
    };

    #[test]
    fn comments_and_whitespace_are_removed() {
        let input = "<svg xmlns=\"http://www.w3.org/2000/svg\">\n  <!-- hi -->\n  <rect width=\"4\" height=\"4\"/>\n</svg>\n";
        let out = minify(input, &OPTIONS).unwrap();
        assert_eq!(
            out,
            "<svg xmlns=\"http://www.w3.org/2000/svg\"><rect width=\"4\" height=\"4\"/></svg>"
        );
    }

    #[test]
    fn doctype_and_processing_instructions_are_dropped() {
        let input = "<?xml version=\"1.0\" encoding=\"utf-8\"?>\n<!DOCTYPE svg>\n<svg><g/></svg>";
        let out = minify(input, &OPTIONS).unwrap();
        assert_eq!(out, "<svg><g/></svg>");
    }

    #[test]
    fn repeated_style_rules_are_emitted_once() {
        let input = "<svg><style>.a{fill:red}.b{fill:blue}</style><style>.a{fill:red}</style><rect class=\"a\"/></svg>";
        let out = minify(input, &OPTIONS).unwrap();
        assert_eq!(
            out,
            "<svg><style>.a{fill:red}.b{fill:blue}</style><rect class=\"a\"/></svg>"
        );
    }

    #[test]
    fn style_in_cdata_is_unwrapped_and_deduplicated() {
        let input = "<svg><style><![CDATA[.a { fill: red }\n.a { fill: red }]]></style></svg>";
        let out = minify(input, &OPTIONS).unwrap();
        assert_eq!(out, "<svg><style>.a { fill: red}</style></svg>");
    }

    #[test]
    fn text_content_survives() {
        let input = "<svg><text>  hello  </text></svg>";
        let out = minify(input, &OPTIONS).unwrap();
        assert_eq!(out, "<svg><text>hello</text></svg>");
    }

    #[test]
    fn pretty_printing_indents_nested_elements() {
        let input = "<svg><g><rect width=\"1\" height=\"1\"/></g></svg>";
        let options = SvgOptions {
            pretty: true,
            add_xml_declaration: false,
        };
        let out = minify(input, &options).unwrap();
        assert_eq!(
            out,
            "<svg>\n  <g>\n    <rect width=\"1\" height=\"1\"/>\n  </g>\n</svg>"
        );
    }

    #[test]
    fn declaration_is_prepended_when_requested() {
        let options = SvgOptions {
            pretty: false,
            add_xml_declaration: true,
        };
        let out = minify("<svg/>", &options).unwrap();
        assert_eq!(out, format!("{}\n<svg/>", XML_DECLARATION));
    }

    #[test]
    fn declaration_is_not_doubled_for_input_that_already_had_one() {
        let options = SvgOptions {
            pretty: false,
            add_xml_declaration: true,
        };
        let input = format!("{}\n<svg/>", XML_DECLARATION);
        let out = minify(&input, &options).unwrap();
        assert_eq!(out.matches("<?xml").count(), 1);
    }

    #[test]
    fn attribute_values_keep_their_inner_whitespace() {
        let input = "<svg><path   d=\"M 0 0  L 1 1\"/></svg>";
        let out = minify(input, &OPTIONS).unwrap();
        assert_eq!(out, "<svg><path d=\"M 0 0  L 1 1\"/></svg>");
    }

    #[test]
    fn quoted_angle_brackets_do_not_end_the_tag() {
        let input = "<svg><text data-note=\"a > b\">x</text></svg>";
        let out = minify(input, &OPTIONS).unwrap();
        assert_eq!(out, "<svg><text data-note=\"a > b\">x</text></svg>");
    }

    #[test]
    fn malformed_input_is_a_minification_error() {
        assert!(matches!(
            minify("<svg><!-- never closed", &OPTIONS),
            Err(ShrinkerError::Minification(_))
        ));
        assert!(matches!(
            minify("<svg", &OPTIONS),
            Err(ShrinkerError::Minification(_))
        ));
        assert!(matches!(
            minify("<svg><style><![CDATA[oops</style></svg>", &OPTIONS),
            Err(ShrinkerError::Minification(_))
        ));
    }
}

//! # Text Formatting
//!
//! Plaintext box drawing for report banners and LaTeX formatting of steel
//! section names.

use serde::{Deserialize, Serialize};

// ============================================================================
// Plaintext boxes
// ============================================================================

/// Builder for plaintext "boxes" around blocks of text.
///
/// A box is laid out as:
///
/// ```text
/// |<------------------ width ------------------>|
/// <first><------------ rule -------------><right>
/// <left><lpad><------- text -------><rpad><right>
/// <left><lpad><------- text -------><rpad><right>
/// <left><------------- rule -------------><final>
/// ```
///
/// `first` and `final` default to `left` and `right`, and exist so that
/// comment-style boxes can open and close differently (see [`cbox`]).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Boxer {
    /// Left side of each text line
    pub left: String,
    /// Right side of each text line
    pub right: String,
    /// Repeated to form the top and bottom rules
    pub rule: String,
    /// Padding between `left` and the text
    pub lpad: String,
    /// Padding between the text and `right`
    pub rpad: String,
    /// Left side of the top rule
    pub first: String,
    /// Right side of the bottom rule
    pub r#final: String,
    /// Default total box width in characters
    pub width: usize,
}

impl Boxer {
    /// Create a boxer with single-space padding and an 80-character width.
    pub fn new(left: &str, right: &str, rule: &str) -> Self {
        Self {
            left: left.to_string(),
            right: right.to_string(),
            rule: rule.to_string(),
            lpad: " ".to_string(),
            rpad: " ".to_string(),
            first: left.to_string(),
            r#final: right.to_string(),
            width: 80,
        }
    }

    /// Set the padding on both sides of the text.
    pub fn with_pad(mut self, pad: &str) -> Self {
        self.lpad = pad.to_string();
        self.rpad = pad.to_string();
        self
    }

    /// Set an alternate opener for the top rule.
    pub fn with_first(mut self, first: &str) -> Self {
        self.first = first.to_string();
        self
    }

    /// Set an alternate closer for the bottom rule.
    pub fn with_final(mut self, r#final: &str) -> Self {
        self.r#final = r#final.to_string();
        self
    }

    /// Set the default box width.
    pub fn with_width(mut self, width: usize) -> Self {
        self.width = width;
        self
    }

    /// Available characters per text line for a box of the given total
    /// width (defaults to the boxer's width).
    pub fn textwidth(&self, width: Option<usize>) -> usize {
        let width = width.unwrap_or(self.width);
        width.saturating_sub(
            self.left.len() + self.right.len() + self.lpad.len() + self.rpad.len(),
        )
    }

    /// Box some text, returned as a joined string.
    ///
    /// When `wrap` is true, lines longer than the text width are word
    /// wrapped; otherwise they are kept as-is (creating a spiky box) and a
    /// warning is logged.
    pub fn boxed(&self, text: &str, width: Option<usize>, wrap: bool) -> String {
        self.boxsplit(text, width, wrap).join("\n")
    }

    /// Box some text, returned as a list of lines.
    pub fn boxsplit(&self, text: &str, width: Option<usize>, wrap: bool) -> Vec<String> {
        let width = width.unwrap_or(self.width);
        let textwidth = self.textwidth(Some(width));
        let toprulewidth = width.saturating_sub(self.first.len() + self.right.len());
        let bottomrulewidth = width.saturating_sub(self.left.len() + self.r#final.len());

        let (toprule, bottomrule) = if self.rule.is_empty() {
            (self.first.clone(), self.r#final.clone())
        } else {
            (
                format!("{}{}{}", self.first, fit_rule(&self.rule, toprulewidth), self.right),
                format!(
                    "{}{}{}",
                    self.left,
                    fit_rule(&self.rule, bottomrulewidth),
                    self.r#final
                ),
            )
        };

        let left = format!("{}{}", self.left, self.lpad);
        let right = format!("{}{}", self.rpad, self.right);

        let mut lines = vec![toprule];
        for (i, line) in text.lines().enumerate() {
            let wrapped = if wrap && line.len() > textwidth {
                wrap_line(line, textwidth)
            } else {
                if line.len() > textwidth {
                    log::warn!("box: line {} exceeds box dimensions", i);
                }
                vec![line.to_string()]
            };

            for wline in wrapped {
                lines.push(format!("{}{:<tw$}{}", left, wline, right, tw = textwidth));
            }
        }
        lines.push(bottomrule);
        lines
    }
}

// Repeat `rule` to exactly `width` characters, truncating the final
// repetition as needed.
fn fit_rule(rule: &str, width: usize) -> String {
    rule.chars().cycle().take(width).collect()
}

// Greedy word wrap. Words longer than the width are split mid-word.
fn wrap_line(line: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut out = Vec::new();
    let mut current = String::new();

    for word in line.split_whitespace() {
        let mut word = word;
        // Break up words that can never fit on a line
        while word.len() > width {
            if !current.is_empty() {
                out.push(std::mem::take(&mut current));
            }
            let (head, tail) = word.split_at(width);
            out.push(head.to_string());
            word = tail;
        }
        if current.is_empty() {
            current.push_str(word);
        } else if current.len() + 1 + word.len() <= width {
            current.push(' ');
            current.push_str(word);
        } else {
            out.push(std::mem::take(&mut current));
            current.push_str(word);
        }
    }
    if !current.is_empty() {
        out.push(current);
    }
    if out.is_empty() {
        out.push(String::new());
    }
    out
}

/// Place text in a C-style multiline comment box.
///
/// ```rust
/// use girder_core::text::cbox;
///
/// let boxed = cbox("hello world!", Some(40), true);
/// assert!(boxed.starts_with("/*"));
/// assert!(boxed.ends_with("*/"));
/// ```
pub fn cbox(text: &str, width: Option<usize>, wrap: bool) -> String {
    Boxer::new(" *", "* ", "*")
        .with_first("/*")
        .with_final("*/")
        .boxed(text, width, wrap)
}

/// Place text in a Python-comment style box ruled with `=`.
pub fn pybox(text: &str, width: Option<usize>, wrap: bool) -> String {
    Boxer::new("#", "#", "=").boxed(text, width, wrap)
}

// ============================================================================
// LaTeX section names
// ============================================================================

// "3/16" -> "\nicefrac{3}{16}". Compound fractions are handled by the
// caller.
fn frac_to_nicefrac(frac: &str) -> String {
    match frac.split_once('/') {
        Some((numer, denom)) => format!("\\nicefrac{{{}}}{{{}}}", numer, denom),
        None => frac.to_string(),
    }
}

/// LaTeX code for nicely typesetting a steel section name.
///
/// Assumes the "by" parts of the label are separated by `X` and compound
/// fractions by `-` (hyphen, not endash). The output requires the LaTeX
/// package `nicefrac` (or its superpackage `units`).
///
/// ```rust
/// use girder_core::text::latex_shape_name;
///
/// assert_eq!(
///     latex_shape_name("HSS3-1/2X3-1/2X3/16"),
///     "HSS3-\\nicefrac{1}{2}$\\times$3-\\nicefrac{1}{2}$\\times$\\nicefrac{3}{16}"
/// );
/// ```
pub fn latex_shape_name(label: &str) -> String {
    let parts: Vec<String> = label
        .split('X')
        .map(|part| {
            if part.contains('/') && part.contains('-') {
                match part.split_once('-') {
                    Some((front, frac)) => format!("{}-{}", front, frac_to_nicefrac(frac)),
                    None => part.to_string(),
                }
            } else if part.contains('/') {
                frac_to_nicefrac(part)
            } else {
                part.to_string()
            }
        })
        .collect();

    parts.join("$\\times$")
}

// results/fix_instructions.rs
//! Splits "how to fix" sentences into display segments
//!
//! Color literals get their own segment so a view can render a swatch next to
//! them; `format_as_code` fragments become code segments.

use crate::types::UnifiedResolution;
use regex::Regex;
use std::sync::OnceLock;

const COLOR_PATTERN: &str = r"#[0-9a-fA-F]{6}\b|#[0-9a-fA-F]{3}\b";

static COLOR_REGEX: OnceLock<Option<Regex>> = OnceLock::new();

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InstructionSegment {
    Text(String),
    Color(String),
    Code(String),
}

impl InstructionSegment {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Text(s) | Self::Color(s) | Self::Code(s) => s,
        }
    }
}

fn color_regex() -> Option<&'static Regex> {
    COLOR_REGEX.get_or_init(|| Regex::new(COLOR_PATTERN).ok()).as_ref()
}

/// Split a sentence around hex color literals
pub fn process_color_instruction(sentence: &str) -> Vec<InstructionSegment> {
    let Some(regex) = color_regex() else {
        return vec![InstructionSegment::Text(sentence.to_string())];
    };

    let mut segments = Vec::new();
    let mut cursor = 0;

    for found in regex.find_iter(sentence) {
        if found.start() > cursor {
            segments.push(InstructionSegment::Text(
                sentence[cursor..found.start()].to_string(),
            ));
        }
        segments.push(InstructionSegment::Color(found.as_str().to_string()));
        cursor = found.end();
    }

    if cursor < sentence.len() {
        segments.push(InstructionSegment::Text(sentence[cursor..].to_string()));
    }

    segments
}

/// Split a resolution into text, code and color segments
///
/// Code fragments are matched left to right; at the same position the longest
/// fragment wins. Remaining text is scanned for colors.
pub fn process_resolution(resolution: &UnifiedResolution) -> Vec<InstructionSegment> {
    let sentence = resolution.how_to_fix_sentence.as_str();
    let mut segments = Vec::new();
    let mut cursor = 0;

    while cursor < sentence.len() {
        let next_code = resolution
            .format_as_code
            .iter()
            .filter(|code| !code.is_empty())
            .filter_map(|code| sentence[cursor..].find(code.as_str()).map(|at| (cursor + at, code)))
            .min_by(|(a_at, a), (b_at, b)| a_at.cmp(b_at).then(b.len().cmp(&a.len())));

        match next_code {
            Some((at, code)) => {
                if at > cursor {
                    segments.extend(process_color_instruction(&sentence[cursor..at]));
                }
                segments.push(InstructionSegment::Code(code.clone()));
                cursor = at + code.len();
            }
            None => {
                segments.extend(process_color_instruction(&sentence[cursor..]));
                break;
            }
        }
    }

    segments
}

#[cfg(test)]
mod tests {
    use super::*;
    use InstructionSegment::*;

    #[test]
    fn test_colors_are_split_out() {
        let segments =
            process_color_instruction("Foreground color: #112233, background color: #fff.");

        assert_eq!(
            segments,
            vec![
                Text("Foreground color: ".to_string()),
                Color("#112233".to_string()),
                Text(", background color: ".to_string()),
                Color("#fff".to_string()),
                Text(".".to_string()),
            ]
        );
    }

    #[test]
    fn test_no_colors() {
        assert_eq!(
            process_color_instruction("nothing here"),
            vec![Text("nothing here".to_string())]
        );
        assert!(process_color_instruction("").is_empty());
    }

    #[test]
    fn test_resolution_code_fragments() {
        let resolution = UnifiedResolution {
            how_to_fix_sentence: "Set minWidth and minHeight to 48dp.".to_string(),
            format_as_code: vec![
                "minWidth".to_string(),
                "minHeight".to_string(),
                "48dp".to_string(),
            ],
        };

        let segments = process_resolution(&resolution);
        let rendered: Vec<&str> = segments.iter().map(|s| s.as_str()).collect();
        assert_eq!(
            segments,
            vec![
                Text("Set ".to_string()),
                Code("minWidth".to_string()),
                Text(" and ".to_string()),
                Code("minHeight".to_string()),
                Text(" to ".to_string()),
                Code("48dp".to_string()),
                Text(".".to_string()),
            ]
        );
        assert_eq!(rendered.concat(), resolution.how_to_fix_sentence);
    }

    #[test]
    fn test_longest_code_fragment_wins() {
        let resolution = UnifiedResolution {
            how_to_fix_sentence: "Use android:contentDescription here".to_string(),
            format_as_code: vec![
                "contentDescription".to_string(),
                "android:contentDescription".to_string(),
            ],
        };

        assert_eq!(
            process_resolution(&resolution)[1],
            Code("android:contentDescription".to_string())
        );
    }
}

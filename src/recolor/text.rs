//! Regex-based recoloring.

use super::Recolorer;
use crate::config::{Config, Strategy, VariantStyle};
use crate::error::Result;
use crate::piece::PieceColor;
use regex::{Captures, NoExpand, Regex};
use std::ops::Range;
use std::sync::LazyLock;

#[allow(clippy::expect_used)]
static FILL_ATTRIBUTE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bfill="[^"]+""#).expect("valid fill attribute regex"));

#[allow(clippy::expect_used)]
static FILL_DECLARATION: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"\bfill:[^;"]+;"#).expect("valid fill declaration regex"));

static PATH_TAG: LazyLock<Regex> = LazyLock::new(|| tag_regex("path"));

static GROUP_TAG: LazyLock<Regex> = LazyLock::new(|| tag_regex("g"));

#[allow(clippy::expect_used)]
fn tag_regex(name: &str) -> Regex {
    Regex::new(&format!(r"<{name}(?P<attrs>\s[^>]*?)?(?P<end>/?>)")).expect("valid tag regex")
}

/// Recolors by text substitution.
///
/// The black variant is the source unchanged, since source icons are drawn
/// black. The white variant gets every fill rewritten to white and an outline
/// set on each `<path>`, or on each `<g>` when there are no paths. Outline
/// attributes the tag already has are overwritten in place.
#[derive(Debug, Clone)]
pub struct TextRecolorer {
    fill: String,
    outline: Vec<(&'static str, String)>,
}

impl TextRecolorer {
    /// Create a recolorer from the white style and the injected outline width.
    pub fn new(white: &VariantStyle, outline_width: &str) -> Self {
        Self {
            fill: white.fill.clone(),
            outline: vec![
                ("fill", white.fill.clone()),
                ("stroke", white.stroke.clone()),
                ("stroke-width", outline_width.to_string()),
                ("stroke-linejoin", white.stroke_linejoin.clone()),
            ],
        }
    }

    /// Create a recolorer from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(&config.style.white, &config.text.outline_width)
    }

    fn whiten(&self, source: &str) -> String {
        let attribute = format!(r#"fill="{}""#, self.fill);
        let declaration = format!("fill:{};", self.fill);
        let content = FILL_ATTRIBUTE.replace_all(source, NoExpand(&attribute));
        let content = FILL_DECLARATION.replace_all(&content, NoExpand(&declaration));

        let (tag, name) = if PATH_TAG.is_match(&content) {
            (&*PATH_TAG, "path")
        } else if GROUP_TAG.is_match(&content) {
            (&*GROUP_TAG, "g")
        } else {
            return content.into_owned();
        };

        tag.replace_all(&content, |caps: &Captures<'_>| {
            let mut attrs = caps.name("attrs").map_or("", |m| m.as_str()).to_string();
            let end = caps.name("end").map_or(">", |m| m.as_str());

            let mut injected = String::new();
            for (attr, value) in &self.outline {
                match attribute_value_range(&attrs, attr) {
                    Some(range) => attrs.replace_range(range, value),
                    None => injected.push_str(&format!(r#" {attr}="{value}""#)),
                }
            }
            format!("<{name}{injected}{attrs}{end}")
        })
        .into_owned()
    }
}

impl Recolorer for TextRecolorer {
    fn strategy(&self) -> Strategy {
        Strategy::Text
    }

    fn recolor(&self, source: &str, color: PieceColor) -> Result<String> {
        Ok(match color {
            PieceColor::Black => source.to_string(),
            PieceColor::White => self.whiten(source),
        })
    }
}

/// Byte range of the value of `name` in a raw attribute list, quotes excluded.
fn attribute_value_range(attrs: &str, name: &str) -> Option<Range<usize>> {
    attrs.match_indices(name).find_map(|(i, _)| {
        if !attrs[..i].ends_with(char::is_whitespace) {
            return None;
        }
        let value = attrs[i + name.len()..]
            .trim_start()
            .strip_prefix('=')?
            .trim_start();
        let quote = value.chars().next().filter(|c| matches!(*c, '"' | '\''))?;
        let start = attrs.len() - value.len() + 1;
        let len = value[1..].find(quote)?;
        Some(start..start + len)
    })
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn recolorer() -> TextRecolorer {
        TextRecolorer::from_config(&Config::default())
    }

    #[test]
    fn test_black_variant_is_unchanged() {
        let source = r##"<svg><path fill="#000" d="M0 0"/></svg>"##;
        let out = recolorer().recolor(source, PieceColor::Black).unwrap();
        assert_eq!(out, source);
    }

    #[test]
    fn test_white_variant_rewrites_fill_and_injects_outline() {
        let source = r##"<svg><path fill="#000" d="M0 0"/></svg>"##;
        let out = recolorer().recolor(source, PieceColor::White).unwrap();
        assert_eq!(
            out,
            r##"<svg><path stroke="#000000" stroke-width="10" stroke-linejoin="round" fill="#ffffff" d="M0 0"/></svg>"##
        );
    }

    #[test]
    fn test_white_variant_injects_fill_when_missing() {
        let source = r#"<svg><path d="M0 0"></path></svg>"#;
        let out = recolorer().recolor(source, PieceColor::White).unwrap();
        assert!(out.contains(r##"<path fill="#ffffff" stroke="#000000""##));
        assert!(out.ends_with("</path></svg>"));
    }

    #[test]
    fn test_white_variant_rewrites_style_declarations() {
        let source = r#"<svg><path style="fill:#000000;stroke:none;" d="M0 0"/></svg>"#;
        let out = recolorer().recolor(source, PieceColor::White).unwrap();
        assert!(out.contains("fill:#ffffff;stroke:none;"));
    }

    #[test]
    fn test_groups_used_when_no_paths() {
        let source = r#"<svg><g><circle r="4"/></g></svg>"#;
        let out = recolorer().recolor(source, PieceColor::White).unwrap();
        assert!(out.contains(r##"<g fill="#ffffff" stroke="#000000""##));
        assert!(out.contains(r#"<circle r="4"/>"#));
    }

    #[test]
    fn test_groups_untouched_when_paths_present() {
        let source = r#"<svg><g><path d="M0 0"/></g></svg>"#;
        let out = recolorer().recolor(source, PieceColor::White).unwrap();
        assert!(out.contains("<g>"));
        assert!(out.contains(r##"<path fill="#ffffff""##));
    }

    #[test]
    fn test_similar_tag_names_not_matched() {
        let source = r#"<svg><glyph d="x"/><pattern/><g/></svg>"#;
        let out = recolorer().recolor(source, PieceColor::White).unwrap();
        assert!(out.contains(r#"<glyph d="x"/>"#));
        assert!(out.contains(r##"<g fill="#ffffff""##));
    }

    #[test]
    fn test_no_shapes_only_fill_rewritten() {
        let source = r#"<svg fill="black"></svg>"#;
        let out = recolorer().recolor(source, PieceColor::White).unwrap();
        assert_eq!(out, r##"<svg fill="#ffffff"></svg>"##);
    }

    #[test]
    fn test_custom_outline_width() {
        let mut config = Config::default();
        config.text.outline_width = "4".to_string();
        let out = TextRecolorer::from_config(&config)
            .recolor("<path/>", PieceColor::White)
            .unwrap();
        assert!(out.contains(r#"stroke-width="4""#));
    }

    #[test]
    fn test_existing_outline_attributes_overwritten() {
        let source = r#"<path stroke="none" stroke-width="1" d="M0 0"/>"#;
        let out = recolorer().recolor(source, PieceColor::White).unwrap();
        assert_eq!(
            out,
            r##"<path fill="#ffffff" stroke-linejoin="round" stroke="#000000" stroke-width="10" d="M0 0"/>"##
        );
    }

    #[test]
    fn test_single_quoted_stroke_overwritten() {
        let source = "<svg><path stroke='red' d='M0 0'/></svg>";
        let out = recolorer().recolor(source, PieceColor::White).unwrap();
        assert!(out.contains("stroke='#000000'"));
        assert!(!out.contains("red"));
    }

    #[test]
    fn test_attribute_value_range() {
        let attrs = r#" d="M" fill = "x""#;
        assert_eq!(attribute_value_range(attrs, "fill").map(|r| &attrs[r]), Some("x"));
        let attrs = r#" stroke-width="2" stroke="none""#;
        assert_eq!(
            attribute_value_range(attrs, "stroke").map(|r| &attrs[r]),
            Some("none")
        );
        assert!(attribute_value_range(r#" fill-rule="evenodd""#, "fill").is_none());
        assert!(attribute_value_range(r#" data-fill="x""#, "fill").is_none());
        assert!(attribute_value_range("", "stroke").is_none());
    }
}

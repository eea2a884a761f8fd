//! SVG recoloring strategies.
//!
//! Both strategies turn one source icon into a black or a white variant.
//! The text strategy is a regex pass that never rejects its input; the XML
//! strategy parses the document and fails on malformed markup.

mod text;
mod xml;

pub use text::TextRecolorer;
pub use xml::XmlRecolorer;

use crate::config::{Config, Strategy};
use crate::error::Result;
use crate::piece::PieceColor;

/// Produces a colored variant from source SVG text.
pub trait Recolorer {
    /// Strategy implemented by this recolorer.
    fn strategy(&self) -> Strategy;

    /// Render the `color` variant of `source`.
    fn recolor(&self, source: &str, color: PieceColor) -> Result<String>;
}

/// Build the recolorer for a strategy using the configured styles.
pub fn recolorer_for(strategy: Strategy, config: &Config) -> Box<dyn Recolorer> {
    match strategy {
        Strategy::Text => Box::new(TextRecolorer::from_config(config)),
        Strategy::Xml => Box::new(XmlRecolorer::from_config(config)),
    }
}

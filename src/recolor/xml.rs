//! XML-aware recoloring.
//!
//! Streams the document through `quick-xml`, restyling every shape element
//! and copying everything else through. The XML declaration is dropped.

use super::Recolorer;
use crate::config::{Config, Strategy, StyleConfig, VariantStyle};
use crate::constants::SHAPE_TAGS;
use crate::error::{Error, Result};
use crate::piece::PieceColor;
use quick_xml::escape::escape;
use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::name::QName;
use quick_xml::{Reader, Writer};
use std::borrow::Cow;

/// Recolors by setting presentation attributes on shape elements.
#[derive(Debug, Clone)]
pub struct XmlRecolorer {
    styles: StyleConfig,
}

impl XmlRecolorer {
    /// Create a recolorer with the given variant styles.
    pub const fn new(styles: StyleConfig) -> Self {
        Self { styles }
    }

    /// Create a recolorer from application configuration.
    pub fn from_config(config: &Config) -> Self {
        Self::new(config.style.clone())
    }
}

impl Recolorer for XmlRecolorer {
    fn strategy(&self) -> Strategy {
        Strategy::Xml
    }

    fn recolor(&self, source: &str, color: PieceColor) -> Result<String> {
        let style = self.styles.for_color(color);
        let mut reader = Reader::from_str(source);
        let mut writer = Writer::new(Vec::with_capacity(source.len() + 256));

        let mut depth = 0usize;
        let mut root_seen = false;

        loop {
            let event = reader.read_event().map_err(|e| malformed(e.to_string()))?;

            match event {
                Event::Eof => break,
                Event::Decl(_) => {}
                Event::Start(start) => {
                    if depth == 0 {
                        enter_root(&mut root_seen)?;
                    }
                    depth += 1;
                    write(&mut writer, Event::Start(restyle(start, style)?))?;
                }
                Event::Empty(start) => {
                    if depth == 0 {
                        enter_root(&mut root_seen)?;
                    }
                    write(&mut writer, Event::Empty(restyle(start, style)?))?;
                }
                Event::End(end) => {
                    depth = depth.checked_sub(1).ok_or_else(|| {
                        malformed(format!(
                            "unexpected closing tag </{}>",
                            String::from_utf8_lossy(end.name().as_ref())
                        ))
                    })?;
                    write(&mut writer, Event::End(end))?;
                }
                Event::Text(text) if depth == 0 => {
                    if !text.iter().all(u8::is_ascii_whitespace) {
                        return Err(malformed("text outside the root element"));
                    }
                    // Keep trailing whitespace, drop what preceded the root
                    if root_seen {
                        write(&mut writer, Event::Text(text))?;
                    }
                }
                Event::CData(_) if depth == 0 => {
                    return Err(malformed("character data outside the root element"));
                }
                Event::Text(text) => {
                    // Rejects undefined entities such as &nbsp;
                    text.unescape().map_err(|e| malformed(e.to_string()))?;
                    write(&mut writer, Event::Text(text))?;
                }
                other => write(&mut writer, other)?,
            }
        }

        if depth != 0 {
            return Err(malformed(format!("{depth} unclosed element(s) at end of input")));
        }
        if !root_seen {
            return Err(malformed("no root element"));
        }

        String::from_utf8(writer.into_inner()).map_err(|e| Error::SvgSerialize {
            reason: e.to_string(),
        })
    }
}

fn malformed(reason: impl Into<String>) -> Error {
    Error::MalformedSvg {
        reason: reason.into(),
    }
}

fn enter_root(root_seen: &mut bool) -> Result<()> {
    if *root_seen {
        return Err(malformed("junk after document element"));
    }
    *root_seen = true;
    Ok(())
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::SvgSerialize {
            reason: e.to_string(),
        })
}

/// Whether an element's local name marks it as a shape.
fn is_shape(local_name: &[u8]) -> bool {
    SHAPE_TAGS
        .iter()
        .any(|tag| local_name.ends_with(tag.as_bytes()))
}

/// Raw attribute value made safe for double quotes.
///
/// Values read from single-quoted attributes may hold a literal `"`.
fn requote(raw: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(raw.len());
    for &byte in raw {
        if byte == b'"' {
            out.extend_from_slice(b"&quot;");
        } else {
            out.push(byte);
        }
    }
    out
}

/// Apply `style` to `start` if it is a shape; attributes are checked either way.
fn restyle<'a>(start: BytesStart<'a>, style: &VariantStyle) -> Result<BytesStart<'a>> {
    let mut attributes: Vec<(Vec<u8>, Vec<u8>)> = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| malformed(e.to_string()))?;
        attribute
            .unescape_value()
            .map_err(|e| malformed(e.to_string()))?;
        attributes.push((
            attribute.key.as_ref().to_vec(),
            requote(&attribute.value),
        ));
    }

    if !is_shape(start.local_name().as_ref()) {
        return Ok(start);
    }

    for (name, value) in style.attributes() {
        let value = escape(value).into_owned().into_bytes();
        match attributes.iter_mut().find(|(key, _)| key.as_slice() == name.as_bytes()) {
            Some(existing) => existing.1 = value,
            None => attributes.push((name.as_bytes().to_vec(), value)),
        }
    }

    let mut styled = start;
    styled.clear_attributes();
    for (key, value) in &attributes {
        styled.push_attribute(Attribute {
            key: QName(key.as_slice()),
            value: Cow::Borrowed(value.as_slice()),
        });
    }
    Ok(styled)
}

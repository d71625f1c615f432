// SPDX-License-Identifier: MPL-2.0
//! Fill-colour injection for icon sources.
//!
//! Every drawing element without a fill of its own (no `fill` attribute and
//! no `fill:` declaration in its `style`) gets `fill="{color}"`, so it renders
//! in the requested colour even inside a `<g fill=...>`. A path with
//! `fill="#ff0000"` or `fill="none"` keeps its value.
//!
//! The root `<svg>` also gets an inline `fill`/`color` style: `color` makes
//! `currentColor` references resolve to the requested colour, and `fill`
//! covers text and other non-shape content.
//!
//! Everything else is copied through verbatim.

use crate::error::{Error, Result};
use quick_xml::events::{BytesEnd, BytesStart, Event};
use quick_xml::{Reader, Writer};

/// Properties owned by the injected rule; existing root declarations for
/// these are dropped so the requested colour always wins.
const INJECTED_PROPERTIES: [&str; 2] = ["fill", "color"];

/// Basic shapes that receive a `fill` attribute when they lack one.
const DRAWING_ELEMENTS: [&[u8]; 7] = [
    b"path",
    b"rect",
    b"circle",
    b"ellipse",
    b"line",
    b"polyline",
    b"polygon",
];

/// Returns `svg` with `color` applied to every element lacking an explicit fill.
///
/// # Errors
///
/// Returns [`Error::Rasterization`] if the source is not well-formed XML
/// or has no `<svg>` element.
pub fn inject_fill(svg: &str, color: &str) -> Result<String> {
    let mut reader = Reader::from_str(svg);
    let mut writer = Writer::new(Vec::with_capacity(svg.len() + 64));
    let mut root_seen = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|e| Error::Rasterization(format!("malformed SVG: {}", e)))?;

        match event {
            Event::Start(ref e) if !root_seen && e.local_name().as_ref() == b"svg" => {
                root_seen = true;
                write(&mut writer, Event::Start(restyle_root(e, color)?))?;
            }
            Event::Empty(ref e) if !root_seen && e.local_name().as_ref() == b"svg" => {
                root_seen = true;
                let root = restyle_root(e, color)?;
                let end = BytesEnd::new(element_name(e)?.to_owned());
                write(&mut writer, Event::Start(root))?;
                write(&mut writer, Event::End(end))?;
            }
            Event::Start(ref e) if is_unfilled_shape(e)? => {
                write(&mut writer, Event::Start(with_fill(e, color)))?;
            }
            Event::Empty(ref e) if is_unfilled_shape(e)? => {
                write(&mut writer, Event::Empty(with_fill(e, color)))?;
            }
            Event::Eof => break,
            other => write(&mut writer, other)?,
        }
    }

    if !root_seen {
        return Err(Error::Rasterization("no <svg> root element".into()));
    }

    String::from_utf8(writer.into_inner()).map_err(|e| Error::Rasterization(e.to_string()))
}

fn write(writer: &mut Writer<Vec<u8>>, event: Event<'_>) -> Result<()> {
    writer
        .write_event(event)
        .map_err(|e| Error::Rasterization(format!("failed to rewrite SVG: {}", e)))
}

fn element_name<'a>(start: &'a BytesStart<'_>) -> Result<&'a str> {
    std::str::from_utf8(start.name().into_inner())
        .map_err(|e| Error::Rasterization(format!("invalid element name: {}", e)))
}

/// True for a basic shape with neither a `fill` attribute nor a `fill:` style.
fn is_unfilled_shape(element: &BytesStart<'_>) -> Result<bool> {
    if !DRAWING_ELEMENTS.contains(&element.local_name().as_ref()) {
        return Ok(false);
    }

    for attr in element.attributes() {
        let attr = attr.map_err(|e| Error::Rasterization(format!("malformed SVG: {}", e)))?;
        match attr.key.as_ref() {
            b"fill" => return Ok(false),
            b"style" => {
                let style = attr
                    .unescape_value()
                    .map_err(|e| Error::Rasterization(format!("malformed SVG: {}", e)))?;
                if declares(&style, "fill") {
                    return Ok(false);
                }
            }
            _ => {}
        }
    }
    Ok(true)
}

fn with_fill<'a>(element: &BytesStart<'a>, color: &str) -> BytesStart<'a> {
    let mut filled = element.clone();
    filled.push_attribute(("fill", color));
    filled
}

fn declares(style: &str, property: &str) -> bool {
    style.split(';').any(|decl| {
        decl.split_once(':')
            .is_some_and(|(name, _)| name.trim().eq_ignore_ascii_case(property))
    })
}

/// Copies the root start tag, merging the colour into its `style` attribute.
fn restyle_root<'a>(original: &'a BytesStart<'_>, color: &str) -> Result<BytesStart<'a>> {
    let mut root = BytesStart::new(element_name(original)?);
    let mut existing_style = String::new();

    for attr in original.attributes() {
        let attr = attr.map_err(|e| Error::Rasterization(format!("malformed SVG: {}", e)))?;
        if attr.key.as_ref() == b"style" {
            existing_style = attr
                .unescape_value()
                .map_err(|e| Error::Rasterization(format!("malformed SVG: {}", e)))?
                .into_owned();
        } else {
            root.push_attribute(attr);
        }
    }

    root.push_attribute(("style", merge_style(&existing_style, color).as_str()));
    Ok(root)
}

fn merge_style(existing: &str, color: &str) -> String {
    let mut declarations: Vec<&str> = existing
        .split(';')
        .map(str::trim)
        .filter(|decl| !decl.is_empty())
        .filter(|decl| {
            let property = decl.split(':').next().unwrap_or_default().trim();
            !INJECTED_PROPERTIES
                .iter()
                .any(|p| property.eq_ignore_ascii_case(p))
        })
        .collect();

    let fill = format!("fill:{}", color);
    let current = format!("color:{}", color);
    declarations.push(&fill);
    declarations.push(&current);
    declarations.join(";")
}

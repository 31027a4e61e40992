use winnow::ascii::till_line_ending;
use winnow::combinator::{alt, cut_err, repeat};
use winnow::error::{ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::{any, take_while};

use crate::RetentionFlags;

/// Catalog text parsed but not yet validated; [`Catalog::from_source`]
/// resolves access-flag names and checks uniqueness afterwards.
///
/// [`Catalog::from_source`]: crate::Catalog::from_source
#[derive(Debug, Default)]
pub(crate) struct ParsedCatalog {
    pub(crate) options: Vec<RawOption>,
    pub(crate) sets: Vec<RawSet>,
}

#[derive(Debug)]
pub(crate) struct RawOption {
    pub(crate) path: String,
    pub(crate) default_enabled: bool,
}

#[derive(Debug)]
pub(crate) struct RawSet {
    pub(crate) name: String,
    pub(crate) flags: RetentionFlags,
    pub(crate) templates: Vec<RawTemplate>,
}

/// Template attributes as written, before access-flag resolution and
/// class-name normalization.
#[derive(Debug, Default)]
pub(crate) struct RawTemplate {
    pub(crate) label: String,
    pub(crate) comment: Option<String>,
    pub(crate) access: Option<String>,
    pub(crate) annotation: Option<String>,
    pub(crate) class: Option<String>,
    pub(crate) extends: Option<String>,
    pub(crate) extends_annotation: Option<String>,
}

// -- Whitespace & comments --------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    let _: () = repeat(
        0..,
        alt((
            take_while(1.., |c: char| c.is_ascii_whitespace()).void(),
            ('#', till_line_ending).void(),
        )),
    )
    .parse_next(input)?;
    Ok(())
}

// -- Tokens -----------------------------------------------------------------

fn string_literal(input: &mut &str) -> ModalResult<String> {
    '"'.parse_next(input)?;
    let mut s = String::new();
    loop {
        let ch = any.parse_next(input)?;
        match ch {
            '"' => return Ok(s),
            '\\' => {
                let esc = any.parse_next(input)?;
                match esc {
                    '"' => s.push('"'),
                    '\\' => s.push('\\'),
                    'n' => s.push('\n'),
                    't' => s.push('\t'),
                    other => {
                        s.push('\\');
                        s.push(other);
                    }
                }
            }
            c => s.push(c),
        }
    }
}

fn option_path<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| {
        c.is_ascii_alphanumeric() || c == '_' || c == '/'
    })
    .parse_next(input)
}

fn on_off(input: &mut &str) -> ModalResult<bool> {
    ws.parse_next(input)?;
    alt(("on".value(true), "off".value(false)))
        .context(StrContext::Expected(StrContextValue::Description(
            "'on' or 'off'",
        )))
        .parse_next(input)
}

// -- Filter options ---------------------------------------------------------

fn option_def(input: &mut &str) -> ModalResult<RawOption> {
    ws.parse_next(input)?;
    "option".parse_next(input)?;
    ws.parse_next(input)?;
    let path = cut_err(option_path)
        .context(StrContext::Expected(StrContextValue::Description(
            "option path",
        )))
        .parse_next(input)?;
    let default_enabled = cut_err(on_off).parse_next(input)?;
    Ok(RawOption {
        path: path.to_owned(),
        default_enabled,
    })
}

// -- Templates --------------------------------------------------------------

#[derive(Debug)]
enum Attribute {
    Comment(String),
    Access(String),
    Annotation(String),
    Class(String),
    Extends(String),
    ExtendsAnnotation(String),
}

fn attribute(input: &mut &str) -> ModalResult<Attribute> {
    ws.parse_next(input)?;
    // `extends-annotation` must come before `extends`.
    let kind = alt((
        "comment", "access", "annotation", "class", "extends-annotation", "extends",
    ))
    .parse_next(input)?;
    ws.parse_next(input)?;
    let value = cut_err(string_literal)
        .context(StrContext::Expected(StrContextValue::Description(
            "quoted attribute value",
        )))
        .parse_next(input)?;
    Ok(match kind {
        "comment" => Attribute::Comment(value),
        "access" => Attribute::Access(value),
        "annotation" => Attribute::Annotation(value),
        "class" => Attribute::Class(value),
        "extends-annotation" => Attribute::ExtendsAnnotation(value),
        _ => Attribute::Extends(value),
    })
}

fn template_def(input: &mut &str) -> ModalResult<RawTemplate> {
    ws.parse_next(input)?;
    "template".parse_next(input)?;
    ws.parse_next(input)?;
    let label = cut_err(string_literal)
        .context(StrContext::Expected(StrContextValue::Description(
            "template label",
        )))
        .parse_next(input)?;
    ws.parse_next(input)?;
    cut_err(':').parse_next(input)?;

    let attributes: Vec<Attribute> = repeat(0.., attribute).parse_next(input)?;

    let mut template = RawTemplate {
        label,
        ..RawTemplate::default()
    };
    for attr in attributes {
        match attr {
            Attribute::Comment(v) => template.comment = Some(v),
            Attribute::Access(v) => template.access = Some(v),
            Attribute::Annotation(v) => template.annotation = Some(v),
            Attribute::Class(v) => template.class = Some(v),
            Attribute::Extends(v) => template.extends = Some(v),
            Attribute::ExtendsAnnotation(v) => template.extends_annotation = Some(v),
        }
    }
    Ok(template)
}

// -- Template sets ----------------------------------------------------------

fn set_def(input: &mut &str) -> ModalResult<RawSet> {
    ws.parse_next(input)?;
    "set".parse_next(input)?;
    ws.parse_next(input)?;
    let name = cut_err(string_literal)
        .context(StrContext::Expected(StrContextValue::Description(
            "set name",
        )))
        .parse_next(input)?;

    ws.parse_next(input)?;
    cut_err("removal").parse_next(input)?;
    let allow_removal = cut_err(on_off).parse_next(input)?;
    ws.parse_next(input)?;
    cut_err("renaming").parse_next(input)?;
    let allow_renaming = cut_err(on_off).parse_next(input)?;
    ws.parse_next(input)?;
    cut_err(':').parse_next(input)?;

    let templates: Vec<RawTemplate> = repeat(0.., template_def).parse_next(input)?;

    Ok(RawSet {
        name,
        flags: RetentionFlags::new(allow_removal, allow_renaming),
        templates,
    })
}

// -- Top-level parser -------------------------------------------------------

enum Item {
    Option(RawOption),
    Set(RawSet),
}

pub(crate) fn parse_catalog(input: &mut &str) -> ModalResult<ParsedCatalog> {
    let items: Vec<Item> = repeat(
        0..,
        alt((option_def.map(Item::Option), set_def.map(Item::Set))),
    )
    .parse_next(input)?;

    ws.parse_next(input)?;

    let mut catalog = ParsedCatalog::default();
    for item in items {
        match item {
            Item::Option(option) => catalog.options.push(option),
            Item::Set(set) => catalog.sets.push(set),
        }
    }
    Ok(catalog)
}

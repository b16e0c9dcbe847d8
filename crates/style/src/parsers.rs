//! `nom` parsers for raw map attribute strings.
//!
//! Parsed lengths come back already scaled into points; colors are delegated to
//! the caller since they depend on a color resolver that lives outside this crate.

use crate::alignment::{HorizontalAlignment, TextWrapping, VerticalAlignment};
use crate::dimension::{AttributeScales, ScaleKind};
use crate::font::{FontStretch, FontStyle, FontWeight};
use crate::keys::{StyleKey, ValueKind};
use crate::value::StyleValue;
use nom::{
    IResult, Parser,
    branch::alt,
    bytes::complete::{tag_no_case, take_while1},
    character::complete::{multispace0, u16 as parse_u16},
    combinator::{map, opt, value, verify},
    number::complete::float,
    sequence::delimited,
};
use pagebuilder_types::Color;
use thiserror::Error;

/// Errors that can occur during style parsing.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum StyleParseError {
    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Invalid value for '{property}': {value}")]
    InvalidValue { property: String, value: String },
}

fn ws<'a, F, O, E>(inner: F) -> impl Parser<&'a str, Output = O, Error = E>
where
    F: Parser<&'a str, Output = O, Error = E>,
    E: nom::error::ParseError<&'a str>,
{
    delimited(multispace0, inner, multispace0)
}

/// Runs `parser` over the whole of `input`, rejecting any remainder.
pub fn run_parser<'a, F, T>(mut parser: F, input: &'a str) -> Result<T, StyleParseError>
where
    F: Parser<&'a str, Output = T, Error = nom::error::Error<&'a str>>,
{
    match parser.parse(input) {
        Ok(("", out)) => Ok(out),
        Ok((rest, _)) => Err(StyleParseError::Parse(format!(
            "unexpected trailing input '{}' in '{}'",
            rest, input
        ))),
        Err(e) => Err(StyleParseError::Parse(e.to_string())),
    }
}

/// A finite decimal number. `inf` and `nan` are rejected.
pub fn parse_number(input: &str) -> IResult<&str, f32> {
    ws(verify(float, |v: &f32| v.is_finite())).parse(input)
}

/// A map length with an optional `mm` suffix.
fn map_length(input: &str) -> IResult<&str, f32> {
    let (input, number) = parse_number(input)?;
    let (input, _) = opt(ws(tag_no_case("mm"))).parse(input)?;
    Ok((input, number))
}

/// A font size in millimetres, or in points with a `pt` suffix.
fn font_length(input: &str) -> IResult<&str, (f32, bool)> {
    let (input, number) = parse_number(input)?;
    let (input, unit) = opt(ws(alt((
        value(false, tag_no_case("mm")),
        value(true, tag_no_case("pt")),
    ))))
    .parse(input)?;
    Ok((input, (number, unit.unwrap_or(false))))
}

fn angle(input: &str) -> IResult<&str, f32> {
    let (input, number) = parse_number(input)?;
    let (input, _) = opt(ws(tag_no_case("deg"))).parse(input)?;
    Ok((input, number))
}

/// Parses a length attribute and converts it to points with the matching scale.
pub fn parse_length(
    raw: &str,
    kind: ScaleKind,
    scales: &AttributeScales,
) -> Result<f32, StyleParseError> {
    if kind == ScaleKind::FontSize {
        let (number, in_points) = run_parser(font_length, raw)?;
        if in_points {
            return Ok(number * scales.font_size);
        }
        return Ok(scales.apply(kind, number));
    }
    let number = run_parser(map_length, raw)?;
    Ok(scales.apply(kind, number))
}

pub fn parse_angle(raw: &str) -> Result<f32, StyleParseError> {
    run_parser(angle, raw)
}

fn horizontal_alignment(input: &str) -> IResult<&str, HorizontalAlignment> {
    ws(alt((
        value(
            HorizontalAlignment::Leading,
            alt((tag_no_case("leading"), tag_no_case("left"))),
        ),
        value(HorizontalAlignment::Center, tag_no_case("center")),
        value(
            HorizontalAlignment::Trailing,
            alt((tag_no_case("trailing"), tag_no_case("right"))),
        ),
        value(
            HorizontalAlignment::Fill,
            alt((
                tag_no_case("justify"),
                tag_no_case("stretch"),
                tag_no_case("fill"),
            )),
        ),
    )))
    .parse(input)
}

fn vertical_alignment(input: &str) -> IResult<&str, VerticalAlignment> {
    ws(alt((
        value(VerticalAlignment::Top, tag_no_case("top")),
        value(VerticalAlignment::Center, tag_no_case("center")),
        value(VerticalAlignment::Bottom, tag_no_case("bottom")),
        value(
            VerticalAlignment::Fill,
            alt((tag_no_case("stretch"), tag_no_case("fill"))),
        ),
    )))
    .parse(input)
}

fn text_wrapping(input: &str) -> IResult<&str, TextWrapping> {
    // Longest keyword first: "Wrap" is a prefix of "WrapWithOverflow".
    ws(alt((
        value(
            TextWrapping::WrapWithOverflow,
            tag_no_case("wrapwithoverflow"),
        ),
        value(TextWrapping::NoWrap, tag_no_case("nowrap")),
        value(TextWrapping::Wrap, tag_no_case("wrap")),
    )))
    .parse(input)
}

fn font_style(input: &str) -> IResult<&str, FontStyle> {
    ws(alt((
        value(FontStyle::Normal, tag_no_case("normal")),
        value(FontStyle::Italic, tag_no_case("italic")),
        value(FontStyle::Oblique, tag_no_case("oblique")),
    )))
    .parse(input)
}

fn font_stretch(input: &str) -> IResult<&str, FontStretch> {
    ws(alt((
        value(FontStretch::UltraCondensed, tag_no_case("ultracondensed")),
        value(FontStretch::ExtraCondensed, tag_no_case("extracondensed")),
        value(FontStretch::SemiCondensed, tag_no_case("semicondensed")),
        value(FontStretch::Condensed, tag_no_case("condensed")),
        value(
            FontStretch::Normal,
            alt((tag_no_case("normal"), tag_no_case("medium"))),
        ),
        value(FontStretch::SemiExpanded, tag_no_case("semiexpanded")),
        value(FontStretch::ExtraExpanded, tag_no_case("extraexpanded")),
        value(FontStretch::UltraExpanded, tag_no_case("ultraexpanded")),
        value(FontStretch::Expanded, tag_no_case("expanded")),
    )))
    .parse(input)
}

fn font_weight(input: &str) -> IResult<&str, FontWeight> {
    let named = alt((
        value(FontWeight::Thin, tag_no_case("thin")),
        value(
            FontWeight::ExtraLight,
            alt((tag_no_case("extralight"), tag_no_case("ultralight"))),
        ),
        value(FontWeight::Light, tag_no_case("light")),
        value(
            FontWeight::Normal,
            alt((tag_no_case("normal"), tag_no_case("regular"))),
        ),
        value(FontWeight::Medium, tag_no_case("medium")),
        value(
            FontWeight::SemiBold,
            alt((tag_no_case("semibold"), tag_no_case("demibold"))),
        ),
        value(
            FontWeight::ExtraBold,
            alt((tag_no_case("extrabold"), tag_no_case("ultrabold"))),
        ),
        value(FontWeight::Bold, tag_no_case("bold")),
        value(
            FontWeight::ExtraBlack,
            alt((tag_no_case("extrablack"), tag_no_case("ultrablack"))),
        ),
        value(
            FontWeight::Black,
            alt((tag_no_case("black"), tag_no_case("heavy"))),
        ),
    ));
    let numeric = map(
        verify(parse_u16, |n: &u16| (1..=999).contains(n)),
        FontWeight::from_numeric,
    );
    ws(alt((named, numeric))).parse(input)
}

fn key_path(input: &str) -> IResult<&str, &str> {
    ws(take_while1(|c: char| !c.is_whitespace())).parse(input)
}

pub fn parse_horizontal_alignment(raw: &str) -> Result<HorizontalAlignment, StyleParseError> {
    run_parser(horizontal_alignment, raw)
}

pub fn parse_vertical_alignment(raw: &str) -> Result<VerticalAlignment, StyleParseError> {
    run_parser(vertical_alignment, raw)
}

pub fn parse_text_wrapping(raw: &str) -> Result<TextWrapping, StyleParseError> {
    run_parser(text_wrapping, raw)
}

pub fn parse_font_style(raw: &str) -> Result<FontStyle, StyleParseError> {
    run_parser(font_style, raw)
}

pub fn parse_font_stretch(raw: &str) -> Result<FontStretch, StyleParseError> {
    run_parser(font_stretch, raw)
}

pub fn parse_font_weight(raw: &str) -> Result<FontWeight, StyleParseError> {
    run_parser(font_weight, raw)
}

/// Accepts `true`/`false`, `yes`/`no` and `1`/`0`, case-insensitively.
pub fn parse_bool(raw: &str) -> Result<bool, StyleParseError> {
    run_parser(
        ws(alt((
            value(true, alt((tag_no_case("true"), tag_no_case("yes"), tag_no_case("1")))),
            value(false, alt((tag_no_case("false"), tag_no_case("no"), tag_no_case("0")))),
        ))),
        raw,
    )
}

/// Parses the raw attribute string of `key` into a typed value.
///
/// `color` turns a color token into a [`Color`]; returning `None` marks the
/// value as malformed.
pub fn parse_style_value<C>(
    key: StyleKey,
    raw: &str,
    scales: &AttributeScales,
    color: C,
) -> Result<StyleValue, StyleParseError>
where
    C: FnOnce(&str) -> Option<Color>,
{
    let invalid = || StyleParseError::InvalidValue {
        property: key.name().to_string(),
        value: raw.to_string(),
    };
    let parsed = match key.value_kind() {
        ValueKind::Length(kind) => parse_length(raw, kind, scales).map(StyleValue::Length),
        ValueKind::Angle => parse_angle(raw).map(StyleValue::Angle),
        ValueKind::Color => color(raw.trim()).map(StyleValue::Color).ok_or_else(invalid),
        ValueKind::HorizontalAlignment => {
            parse_horizontal_alignment(raw).map(StyleValue::HorizontalAlignment)
        }
        ValueKind::VerticalAlignment => {
            parse_vertical_alignment(raw).map(StyleValue::VerticalAlignment)
        }
        ValueKind::Wrapping => parse_text_wrapping(raw).map(StyleValue::Wrapping),
        ValueKind::FontFamily => {
            let family = raw.trim();
            if family.is_empty() {
                Err(invalid())
            } else {
                Ok(StyleValue::FontFamily(family.to_string()))
            }
        }
        ValueKind::FontStretch => parse_font_stretch(raw).map(StyleValue::FontStretch),
        ValueKind::FontStyle => parse_font_style(raw).map(StyleValue::FontStyle),
        ValueKind::FontWeight => parse_font_weight(raw).map(StyleValue::FontWeight),
        ValueKind::KeyPath => {
            run_parser(key_path, raw).map(|path| StyleValue::KeyPath(path.to_string()))
        }
    };
    parsed.map_err(|e| match e {
        StyleParseError::Parse(_) => invalid(),
        other => other,
    })
}

use winnow::ascii::{dec_uint, multispace0, multispace1};
use winnow::combinator::{cut_err, opt, preceded, repeat};
use winnow::error::{ErrMode, ModalResult, StrContext, StrContextValue};
use winnow::prelude::*;
use winnow::token::take_while;

use crate::{PortRange, Target};

// -- Whitespace -------------------------------------------------------------

fn ws(input: &mut &str) -> ModalResult<()> {
    multispace0.void().parse_next(input)
}

// -- Target lines -----------------------------------------------------------

fn platform<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    (
        take_while(1, |c: char| c.is_ascii_alphabetic() || c == '_'),
        take_while(0.., |c: char| {
            c.is_ascii_alphanumeric() || c == '_' || c == '-'
        }),
    )
        .take()
        .context(StrContext::Label("platform"))
        .context(StrContext::Expected(StrContextValue::Description(
            "platform name",
        )))
        .parse_next(input)
}

fn option<'i>(input: &mut &'i str) -> ModalResult<&'i str> {
    take_while(1.., |c: char| !c.is_whitespace()).parse_next(input)
}

/// `<platform> <option>*`, whitespace separated.
pub(super) fn target(input: &mut &str) -> ModalResult<Target> {
    ws.parse_next(input)?;
    let platform = platform.parse_next(input)?;
    let options: Vec<&str> = repeat(0.., preceded(multispace1, option)).parse_next(input)?;
    ws.parse_next(input)?;
    Ok(Target::new(platform, options))
}

// -- Port ranges ------------------------------------------------------------

fn port(input: &mut &str) -> ModalResult<u16> {
    dec_uint::<_, u16, _>
        .context(StrContext::Expected(StrContextValue::Description(
            "port number (0-65535)",
        )))
        .parse_next(input)
}

/// `<port>` or `<low>-<high>` with `low <= high`.
pub(super) fn port_range(input: &mut &str) -> ModalResult<PortRange> {
    ws.parse_next(input)?;
    let low = port.parse_next(input)?;
    let high = opt(preceded((ws, '-', ws), cut_err(port))).parse_next(input)?;
    ws.parse_next(input)?;
    match high {
        Some(high) if high < low => Err(ErrMode::from_input(input).cut()),
        Some(high) => Ok(PortRange::new(low, high)),
        None => Ok(PortRange::single(low)),
    }
}

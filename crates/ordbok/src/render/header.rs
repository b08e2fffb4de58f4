//! Article header: lemmas with homograph numerals.

use std::iter;

use ordbok_core::{article::Lemma, non_empty::NonEmpty};

use super::RenderError;
use crate::markup::{Element, Node};

/// Largest homograph number that can be romanized.
pub const MAX_HOMOGRAPH: u32 = 10;

const ROMAN_NUMERALS: [&str; MAX_HOMOGRAPH as usize] =
    ["I", "II", "III", "IV", "V", "VI", "VII", "VIII", "IX", "X"];

/// Returns the Roman numeral for a homograph number.
///
/// `0` means "no homograph" and yields `None`.
///
/// # Errors
///
/// Returns [`RenderError::RomanizationOverflow`] above [`MAX_HOMOGRAPH`].
pub fn roman_numeral(hgno: u32) -> Result<Option<&'static str>, RenderError> {
    if hgno == 0 {
        return Ok(None);
    }
    usize::try_from(hgno - 1)
        .ok()
        .and_then(|index| ROMAN_NUMERALS.get(index))
        .map(|numeral| Some(*numeral))
        .ok_or(RenderError::RomanizationOverflow(hgno))
}

/// Renders `<h3>` with a `<span>` per lemma, each followed by a numeral
/// `<span>` when the lemma has a homograph number.
///
/// Every homograph number is checked before any markup is built.
pub(super) fn header(lemmas: &NonEmpty<Lemma>) -> Result<Element, RenderError> {
    let numerals = lemmas
        .iter()
        .map(|lemma| roman_numeral(lemma.hgno()))
        .collect::<Result<Vec<_>, _>>()?;

    let spans = lemmas
        .iter()
        .zip(numerals)
        .flat_map(|(lemma, numeral)| {
            iter::once(Element::new("span").with_text(lemma.text()))
                .chain(numeral.map(|numeral| Element::new("span").with_text(numeral)))
        })
        .map(Node::from);

    Ok(Element::new("h3").with_children(spans))
}

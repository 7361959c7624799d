use crate::{
    cell::Cell,
    name::{NameError, element_key},
    term::{MapEntries, SetElements},
};

///
/// Comparison kernels. Expected collections arrive as the sealed canonical
/// payload types, sorted and unique by construction, so membership checks
/// can binary search. Live cells arrive in ascending name order with
/// tombstones and expired cells already dropped.
///

#[must_use]
pub(crate) fn scalar_matches(expected: Option<&[u8]>, live: Option<&Cell>) -> bool {
    match expected {
        None => live.is_none(),
        Some(want) => live.is_some_and(|cell| cell.value() == want),
    }
}

/// Positional comparison: the nth live element must equal the nth expected
/// element, and the counts must agree.
#[must_use]
pub(crate) fn list_matches(expected: &[Vec<u8>], live: &[&Cell]) -> bool {
    let mut cells = live.iter();
    for want in expected {
        match cells.next() {
            Some(cell) if cell.value() == want.as_slice() => {}
            _ => return false,
        }
    }

    cells.next().is_none()
}

/// Element-set comparison: every live element must be expected and every
/// expected element must be live. Elements live in the cell name, not the
/// cell value.
pub(crate) fn set_matches(expected: &SetElements, live: &[&Cell]) -> Result<bool, NameError> {
    let mut remaining: Vec<&[u8]> = expected.iter().map(Vec::as_slice).collect();
    for cell in live {
        let element = element_key(cell.name())?;
        let Ok(at) = remaining.binary_search(&element) else {
            return Ok(false);
        };
        remaining.remove(at);
    }

    Ok(remaining.is_empty())
}

/// Entry comparison: keys live in the cell name, values in the cell value.
/// An unexpected key, a value mismatch, or a leftover expected entry all
/// fail the condition.
pub(crate) fn map_matches(
    expected: &MapEntries,
    live: &[&Cell],
) -> Result<bool, NameError> {
    let mut remaining: Vec<(&[u8], &[u8])> = expected
        .iter()
        .map(|(key, value)| (key.as_slice(), value.as_slice()))
        .collect();

    for cell in live {
        let key = element_key(cell.name())?;
        let Ok(at) = remaining.binary_search_by(|(existing, _)| existing.cmp(&key)) else {
            return Ok(false);
        };
        if cell.value() != remaining[at].1 {
            return Ok(false);
        }
        remaining.remove(at);
    }

    Ok(remaining.is_empty())
}

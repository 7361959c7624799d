use thiserror::Error as ThisError;

/// Maximum byte length of one name component.
///
/// Component lengths occupy a 16-bit prefix, and the all-ones half-word is
/// reserved for the static-row marker.
pub const MAX_COMPONENT_BYTES: usize = u16::MAX as usize - 1;

/// Maximum encoded byte length of a whole cell name (storage-layer bound).
pub const MAX_CELL_NAME_BYTES: usize = 64 * 1024;

/// Half-word that opens the name of a static-row cell.
const STATIC_MARKER: [u8; 2] = [0xFF, 0xFF];

/// Octet closing each encoded component.
const END_OF_COMPONENT: u8 = 0x00;

/// Terminal octet of an exclusive range upper bound.
const END_OF_RANGE: u8 = 0x01;

///
/// NameError
/// (codec / corruption boundary)
///

#[derive(Debug, ThisError, Eq, PartialEq)]
pub enum NameError {
    #[error("component of {len} bytes exceeds {MAX_COMPONENT_BYTES}")]
    ComponentTooLong { len: usize },

    #[error("encoded name of {len} bytes exceeds {MAX_CELL_NAME_BYTES}")]
    NameTooLong { len: usize },

    #[error("name truncated inside a component at offset {offset}")]
    TruncatedComponent { offset: usize },

    #[error("component at offset {offset} has no end-of-component octet")]
    MissingComponentTerminator { offset: usize },

    #[error("invalid end-of-component octet {octet:#04x} at offset {offset}")]
    InvalidComponentTerminator { octet: u8, offset: usize },

    #[error("empty name has no trailing component")]
    EmptyName,
}

///
/// Composite
///
/// Builder for composite cell names: a sequence of length-prefixed
/// components, each closed by an end-of-component octet, optionally opened
/// by the static-row marker. Ranges built from the same prefix enclose
/// exactly the names that extend it, under plain byte ordering.
///

#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct Composite {
    components: Vec<Vec<u8>>,
    is_static: bool,
}

impl Composite {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            components: Vec::new(),
            is_static: false,
        }
    }

    /// The fixed prefix under which all static-row cells live.
    #[must_use]
    pub const fn static_prefix() -> Self {
        Self {
            components: Vec::new(),
            is_static: true,
        }
    }

    /// Append one component, enforcing the protocol bounds.
    pub fn push(mut self, component: &[u8]) -> Result<Self, NameError> {
        if component.len() > MAX_COMPONENT_BYTES {
            return Err(NameError::ComponentTooLong {
                len: component.len(),
            });
        }

        let encoded = self.encoded_len() + 2 + component.len() + 1;
        if encoded > MAX_CELL_NAME_BYTES {
            return Err(NameError::NameTooLong { len: encoded });
        }

        self.components.push(component.to_vec());
        Ok(self)
    }

    #[must_use]
    pub const fn component_count(&self) -> usize {
        self.components.len()
    }

    #[must_use]
    pub const fn is_static(&self) -> bool {
        self.is_static
    }

    /// Encode as a cell name (every component closed canonically).
    #[must_use]
    pub fn build(&self) -> Vec<u8> {
        self.encode(END_OF_COMPONENT)
    }

    /// Encode as the exclusive upper bound of the name range covering every
    /// name that extends this prefix. With no components the bound equals
    /// `build()` and the range is empty.
    #[must_use]
    pub fn build_end_of_range(&self) -> Vec<u8> {
        self.encode(END_OF_RANGE)
    }

    #[allow(clippy::cast_possible_truncation)]
    fn encode(&self, final_octet: u8) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.encoded_len());
        if self.is_static {
            out.extend_from_slice(&STATIC_MARKER);
        }

        for (i, component) in self.components.iter().enumerate() {
            let len = component.len() as u16;
            out.extend_from_slice(&len.to_be_bytes());
            out.extend_from_slice(component);
            out.push(if i + 1 == self.components.len() {
                final_octet
            } else {
                END_OF_COMPONENT
            });
        }

        out
    }

    fn encoded_len(&self) -> usize {
        let marker = if self.is_static { 2 } else { 0 };
        marker
            + self
                .components
                .iter()
                .map(|c| 2 + c.len() + 1)
                .sum::<usize>()
    }
}

/// Split an encoded cell name into its components.
///
/// Strict: accepts only canonical stored names (range bounds are produced
/// by [`Composite`], never parsed back).
pub fn split(name: &[u8]) -> Result<Vec<&[u8]>, NameError> {
    if name.len() > MAX_CELL_NAME_BYTES {
        return Err(NameError::NameTooLong { len: name.len() });
    }

    let mut offset = skip_static_marker(name);
    let mut components = Vec::new();

    while offset < name.len() {
        let (component, next) = read_component(name, offset)?;
        components.push(component);
        offset = next;
    }

    Ok(components)
}

/// Trailing component of an encoded cell name: the element key of a
/// collection cell. For sets this is the compared element itself, for maps
/// the map key, for lists an internal ordering token.
pub fn element_key(name: &[u8]) -> Result<&[u8], NameError> {
    if name.len() > MAX_CELL_NAME_BYTES {
        return Err(NameError::NameTooLong { len: name.len() });
    }

    let mut offset = skip_static_marker(name);
    let mut last = None;

    while offset < name.len() {
        let (component, next) = read_component(name, offset)?;
        last = Some(component);
        offset = next;
    }

    last.ok_or(NameError::EmptyName)
}

const fn skip_static_marker(name: &[u8]) -> usize {
    if name.len() >= 2 && name[0] == STATIC_MARKER[0] && name[1] == STATIC_MARKER[1] {
        2
    } else {
        0
    }
}

fn read_component(name: &[u8], offset: usize) -> Result<(&[u8], usize), NameError> {
    let Some(prefix) = name.get(offset..offset + 2) else {
        return Err(NameError::TruncatedComponent { offset });
    };
    let len = usize::from(u16::from_be_bytes([prefix[0], prefix[1]]));

    let body_start = offset + 2;
    let Some(component) = name.get(body_start..body_start + len) else {
        return Err(NameError::TruncatedComponent { offset });
    };

    let terminator_at = body_start + len;
    match name.get(terminator_at) {
        None => Err(NameError::MissingComponentTerminator {
            offset: terminator_at,
        }),
        Some(&END_OF_COMPONENT) => Ok((component, terminator_at + 1)),
        Some(&octet) => Err(NameError::InvalidComponentTerminator {
            octet,
            offset: terminator_at,
        }),
    }
}

///
/// TESTS
///

#[cfg(test)]
mod tests {
    use super::*;

    fn prefix(components: &[&[u8]]) -> Composite {
        components
            .iter()
            .try_fold(Composite::new(), |c, p| c.push(p))
            .unwrap()
    }

    #[test]
    fn build_and_split_roundtrip() {
        let composite = prefix(&[b"row1", b"scores", b"alice"]);
        assert_eq!(composite.component_count(), 3);

        let name = composite.build();

        let components = split(&name).unwrap();
        assert_eq!(components, vec![&b"row1"[..], b"scores", b"alice"]);
    }

    #[test]
    fn empty_components_are_preserved() {
        let name = prefix(&[b"", b"v"]).build();

        assert_eq!(split(&name).unwrap(), vec![&b""[..], b"v"]);
    }

    #[test]
    fn static_marker_roundtrips_and_is_skipped_by_split() {
        let name = Composite::static_prefix().push(b"flags").unwrap().build();

        assert_eq!(&name[..2], &STATIC_MARKER);
        assert_eq!(split(&name).unwrap(), vec![&b"flags"[..]]);
    }

    #[test]
    fn element_key_returns_trailing_component() {
        let name = prefix(&[b"row1", b"tags", b"blue"]).build();

        assert_eq!(element_key(&name).unwrap(), b"blue");
    }

    #[test]
    fn element_key_rejects_empty_name() {
        assert_eq!(element_key(b""), Err(NameError::EmptyName));
        assert_eq!(
            element_key(&Composite::static_prefix().build()),
            Err(NameError::EmptyName)
        );
    }

    #[test]
    fn split_rejects_truncated_and_invalid_encodings() {
        // Length prefix cut short.
        assert_eq!(
            split(&[0x00]),
            Err(NameError::TruncatedComponent { offset: 0 })
        );

        // Body shorter than its declared length.
        assert_eq!(
            split(&[0x00, 0x04, b'a', b'b']),
            Err(NameError::TruncatedComponent { offset: 0 })
        );

        // Body present but no terminator octet.
        assert_eq!(
            split(&[0x00, 0x02, b'a', b'b']),
            Err(NameError::MissingComponentTerminator { offset: 4 })
        );

        // Range terminator is not a stored name.
        assert_eq!(
            split(&[0x00, 0x01, b'a', 0x01]),
            Err(NameError::InvalidComponentTerminator {
                octet: 0x01,
                offset: 3
            })
        );
    }

    #[test]
    fn push_rejects_oversized_components() {
        let big = vec![0u8; MAX_COMPONENT_BYTES + 1];

        assert_eq!(
            Composite::new().push(&big),
            Err(NameError::ComponentTooLong {
                len: MAX_COMPONENT_BYTES + 1
            })
        );
    }

    #[test]
    fn range_encloses_exactly_the_extensions_of_its_prefix() {
        let base = prefix(&[b"row1", b"tags"]);
        let start = base.build();
        let end = base.build_end_of_range();

        assert!(start < end);

        let inside = base.clone().push(b"blue").unwrap().build();
        assert!(start < inside && inside < end);

        let sibling = prefix(&[b"row1", b"uags", b"blue"]).build();
        assert!(!(start <= sibling && sibling < end));

        let other_row = prefix(&[b"row2", b"tags", b"blue"]).build();
        assert!(!(start <= other_row && other_row < end));
    }

    #[test]
    fn static_names_stay_outside_row_prefix_ranges() {
        let row = prefix(&[b"row1", b"tags"]);
        let start = row.build();
        let end = row.build_end_of_range();

        let static_name = Composite::static_prefix()
            .push(b"tags")
            .unwrap()
            .push(b"blue")
            .unwrap()
            .build();

        assert!(!(start <= static_name && static_name < end));

        let static_base = Composite::static_prefix().push(b"tags").unwrap();
        let static_start = static_base.build();
        let static_end = static_base.build_end_of_range();

        assert!(!(static_start <= start && start < static_end));
        let static_inside = static_base.clone().push(b"blue").unwrap().build();
        assert!(static_start < static_inside && static_inside < static_end);
    }

    #[test]
    fn empty_prefix_produces_an_empty_range() {
        let empty = Composite::new();

        assert_eq!(empty.build(), empty.build_end_of_range());
        assert!(empty.build().is_empty());
    }

    #[test]
    #[expect(clippy::cast_possible_truncation)]
    fn name_fuzz_roundtrip_is_canonical() {
        let mut seed = 0xDEAD_BEEF_u64;

        for len in 0..256_usize {
            let mut bytes = vec![0u8; len];
            for b in &mut bytes {
                seed = seed.wrapping_mul(6_364_136_223_846_793_005).wrapping_add(1);
                *b = (seed >> 24) as u8;
            }

            if let Ok(components) = split(&bytes) {
                let is_static = bytes.starts_with(&STATIC_MARKER);
                let mut rebuilt = if is_static {
                    Composite::static_prefix()
                } else {
                    Composite::new()
                };
                for component in components {
                    rebuilt = rebuilt.push(component).unwrap();
                }
                assert_eq!(rebuilt.build(), bytes);
            }
        }
    }
}

use std::iter::FusedIterator;

use crate::{AddressMatch, Field, GenerateError, NormalizedTerm, PortRange};

const FIELDS: usize = 5;

/// One point of a term's match-field product.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RuleTuple<'a> {
    pub source_address: AddressMatch,
    pub source_port: PortRange,
    pub destination_address: AddressMatch,
    pub destination_port: PortRange,
    pub protocol: &'a str,
}

/// Lazy Cartesian product of a normalized term's match fields.
///
/// Iterates `source_address × source_port × destination_address ×
/// destination_port × protocol` as an odometer: the protocol varies fastest,
/// the source address slowest, and each field keeps its declaration order.
/// Only the current index tuple is held; clone the iterator to restart.
#[derive(Debug, Clone)]
pub struct Expansion<'a> {
    source_address: &'a [AddressMatch],
    source_port: &'a [PortRange],
    destination_address: &'a [AddressMatch],
    destination_port: &'a [PortRange],
    protocol: &'a [String],
    cursor: Option<[usize; FIELDS]>,
}

impl<'a> Expansion<'a> {
    /// # Errors
    ///
    /// Returns [`GenerateError::EmptyFieldSet`] naming the first empty field.
    pub fn new(term: &'a NormalizedTerm<'_>) -> Result<Self, GenerateError> {
        let expansion = Self {
            source_address: &term.source_address,
            source_port: &term.source_port,
            destination_address: &term.destination_address,
            destination_port: &term.destination_port,
            protocol: term.protocol,
            cursor: Some([0; FIELDS]),
        };

        let fields = [
            Field::SourceAddress,
            Field::SourcePort,
            Field::DestinationAddress,
            Field::DestinationPort,
            Field::Protocol,
        ];
        if let Some((field, _)) = fields
            .into_iter()
            .zip(expansion.lens())
            .find(|&(_, len)| len == 0)
        {
            return Err(GenerateError::EmptyFieldSet {
                term: term.name.to_owned(),
                field,
            });
        }

        Ok(expansion)
    }

    /// Number of tuples in the full product, `None` on overflow.
    #[must_use]
    pub fn total(&self) -> Option<usize> {
        self.lens()
            .into_iter()
            .try_fold(1_usize, usize::checked_mul)
    }

    fn lens(&self) -> [usize; FIELDS] {
        [
            self.source_address.len(),
            self.source_port.len(),
            self.destination_address.len(),
            self.destination_port.len(),
            self.protocol.len(),
        ]
    }

    fn remaining(&self) -> Option<usize> {
        let Some(cursor) = self.cursor else {
            return Some(0);
        };
        let consumed = cursor
            .iter()
            .zip(self.lens())
            .try_fold(0_usize, |acc, (&i, len)| acc.checked_mul(len)?.checked_add(i))?;
        self.total()?.checked_sub(consumed)
    }

    fn advance(&self, mut cursor: [usize; FIELDS]) -> Option<[usize; FIELDS]> {
        let lens = self.lens();
        for pos in (0..FIELDS).rev() {
            cursor[pos] += 1;
            if cursor[pos] < lens[pos] {
                return Some(cursor);
            }
            cursor[pos] = 0;
        }
        None
    }
}

impl<'a> Iterator for Expansion<'a> {
    type Item = RuleTuple<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let [sa, sp, da, dp, proto] = self.cursor?;
        let protocol: &'a [String] = self.protocol;
        let tuple = RuleTuple {
            source_address: self.source_address[sa],
            source_port: self.source_port[sp],
            destination_address: self.destination_address[da],
            destination_port: self.destination_port[dp],
            protocol: protocol[proto].as_str(),
        };
        self.cursor = self.advance([sa, sp, da, dp, proto]);
        Some(tuple)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self.remaining() {
            Some(n) => (n, Some(n)),
            None => (usize::MAX, None),
        }
    }
}

impl FusedIterator for Expansion<'_> {}

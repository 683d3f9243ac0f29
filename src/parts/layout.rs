/// One position in the adapter topology.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Slot {
    /// Problem-free random DNA of the given length.
    Filler(usize),
    /// Enzyme recognition site.
    Site(&'static str),
    /// Overhang left by a Type IIS cut.
    Overhang(&'static str),
    /// Spacer between a recognition site and its cut.
    Spacer(&'static str),
    Payload,
}

impl Slot {
    pub fn fixed_seq(&self) -> Option<&'static str> {
        match self {
            Slot::Site(seq) | Slot::Overhang(seq) | Slot::Spacer(seq) => Some(seq),
            Slot::Filler(_) | Slot::Payload => None,
        }
    }

    /// Length of the slot, or `None` for the payload.
    pub fn size(&self) -> Option<usize> {
        match self {
            Slot::Filler(len) => Some(*len),
            Slot::Payload => None,
            fixed => fixed.fixed_seq().map(str::len),
        }
    }
}

/// Two-level Golden Gate adapter: an outer BbsI pair releasing the part for
/// the next assembly level and an inner BsaI pair releasing the payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdapterLayout {
    pub outer_site: &'static str,
    pub outer_site_rev: &'static str,
    pub outer_overhang_5: &'static str,
    pub outer_overhang_3: &'static str,
    pub inner_site: &'static str,
    pub inner_site_rev: &'static str,
    pub spacer: &'static str,
    pub inner_overhang_5: &'static str,
    pub inner_overhang_3: &'static str,
    pub flank_len: usize,
    pub gap_len: usize,
    pub linker_len: usize,
}

pub const GOLDEN_GATE: AdapterLayout = AdapterLayout {
    outer_site: "GAAGAC",
    outer_site_rev: "GTCTTC",
    outer_overhang_5: "GGAG",
    outer_overhang_3: "CGCT",
    inner_site: "GGTCTC",
    inner_site_rev: "GAGACC",
    spacer: "T",
    inner_overhang_5: "A",
    inner_overhang_3: "GCTT",
    flank_len: 15,
    gap_len: 2,
    linker_len: 8,
};

impl Default for AdapterLayout {
    fn default() -> Self {
        GOLDEN_GATE
    }
}

impl AdapterLayout {
    /// Slots from left to right.
    pub fn slots(&self) -> Vec<Slot> {
        vec![
            Slot::Filler(self.flank_len),
            Slot::Site(self.outer_site),
            Slot::Filler(self.gap_len),
            Slot::Overhang(self.outer_overhang_5),
            Slot::Filler(self.linker_len),
            Slot::Site(self.inner_site),
            Slot::Spacer(self.spacer),
            Slot::Overhang(self.inner_overhang_5),
            Slot::Payload,
            Slot::Overhang(self.inner_overhang_3),
            Slot::Spacer(self.spacer),
            Slot::Site(self.inner_site_rev),
            Slot::Filler(self.linker_len),
            Slot::Overhang(self.outer_overhang_3),
            Slot::Filler(self.gap_len),
            Slot::Site(self.outer_site_rev),
            Slot::Filler(self.flank_len),
        ]
    }

    /// Bases added upstream and downstream of the payload.
    pub fn adapter_lens(&self) -> (usize, usize) {
        let slots = self.slots();
        let split = slots
            .iter()
            .position(|slot| *slot == Slot::Payload)
            .unwrap_or(slots.len());
        let sum = |slots: &[Slot]| slots.iter().filter_map(Slot::size).sum::<usize>();
        (sum(&slots[..split]), sum(&slots[split..]))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn golden_gate_adapter_lengths() {
        assert_eq!(GOLDEN_GATE.adapter_lens(), (43, 46));
    }

    #[test]
    fn exactly_one_payload_slot() {
        let payloads = GOLDEN_GATE
            .slots()
            .iter()
            .filter(|slot| **slot == Slot::Payload)
            .count();
        assert_eq!(payloads, 1);
    }
}

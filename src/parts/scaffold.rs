use super::{AdapterLayout, RandomFiller, Slot};
use crate::sequence::Sequence;
use crate::utils::{DesignError, Result};
use rand::Rng;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub slot: Slot,
    pub seq: Sequence,
}

/// A payload wrapped in adapter segments, kept in concatenation order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AssemblyScaffold {
    segments: Vec<Segment>,
}

impl AssemblyScaffold {
    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn to_sequence(&self) -> Sequence {
        Sequence::concat(self.segments.iter().map(|segment| &segment.seq))
    }

    pub fn len(&self) -> usize {
        self.segments.iter().map(|segment| segment.seq.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

pub fn build_scaffold<R: Rng + ?Sized>(
    payload: &Sequence,
    layout: &AdapterLayout,
    filler: &RandomFiller,
    rng: &mut R,
) -> std::result::Result<AssemblyScaffold, DesignError> {
    let mut segments = Vec::new();
    for slot in layout.slots() {
        let seq = match slot {
            Slot::Filler(len) => filler.fill(len, rng)?,
            Slot::Payload => payload.clone(),
            fixed => Sequence::new(fixed.fixed_seq().unwrap_or_default())?,
        };
        segments.push(Segment { slot, seq });
    }
    Ok(AssemblyScaffold { segments })
}

/// Removes the adapters from a scaffolded part, checking every fixed segment.
pub fn strip_adapters(seq: &Sequence, layout: &AdapterLayout) -> Result<Sequence> {
    let (left_len, right_len) = layout.adapter_lens();
    if seq.len() < left_len + right_len {
        return Err(format!(
            "Sequence of {} bp is shorter than its adapters ({} bp)",
            seq.len(),
            left_len + right_len
        ));
    }
    let payload_len = seq.len() - left_len - right_len;
    let text = seq.as_str();

    let mut offset = 0;
    let mut payload = None;
    for slot in layout.slots() {
        let len = slot.size().unwrap_or(payload_len);
        let found = &text[offset..offset + len];
        match slot {
            Slot::Payload => payload = Some(found),
            Slot::Filler(_) => {}
            fixed => {
                let expected = fixed.fixed_seq().unwrap_or_default();
                if found != expected {
                    return Err(format!(
                        "Expected {} at position {}, found {}",
                        expected, offset, found
                    ));
                }
            }
        }
        offset += len;
    }
    let payload = payload.ok_or("Adapter layout has no payload slot")?;
    Ok(Sequence::new(payload)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parts::GOLDEN_GATE;
    use crate::problems::catalog_finder;
    use crate::utils::CatalogPreset;
    use rand::{rngs::StdRng, SeedableRng};

    fn filler() -> RandomFiller {
        RandomFiller::with_default_budget(catalog_finder(CatalogPreset::Overhangs.catalog()).unwrap())
    }

    #[test]
    fn scaffold_follows_layout() {
        let payload = Sequence::new("ATGAAACGTATTTAA").unwrap();
        let mut rng = StdRng::seed_from_u64(11);
        let scaffold = build_scaffold(&payload, &GOLDEN_GATE, &filler(), &mut rng).unwrap();
        let seq = scaffold.to_sequence();

        assert_eq!(seq.len(), 43 + payload.len() + 46);
        assert_eq!(scaffold.len(), seq.len());
        assert_eq!(&seq.as_str()[15..21], "GAAGAC");
        assert_eq!(&seq.as_str()[35..43], "GGTCTCTA");
        assert_eq!(&seq.as_str()[43..58], payload.as_str());
        assert_eq!(&seq.as_str()[58..69], "GCTTTGAGACC");
        assert_eq!(&seq.as_str()[seq.len() - 21..seq.len() - 15], "GTCTTC");
    }

    #[test]
    fn strip_recovers_payload() {
        let payload = Sequence::new("ATGGCTAGCAAAGGAGAAGAACTTTTCACTGGAGTTGTCCCAATTCTTGTTGAATTAGATGGTGATGTTAATGGGCACTAA").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let scaffold = build_scaffold(&payload, &GOLDEN_GATE, &filler(), &mut rng).unwrap();
        assert_eq!(
            strip_adapters(&scaffold.to_sequence(), &GOLDEN_GATE).unwrap(),
            payload
        );
    }

    #[test]
    fn strip_accepts_empty_payload() {
        let payload = Sequence::default();
        let mut rng = StdRng::seed_from_u64(5);
        let scaffold = build_scaffold(&payload, &GOLDEN_GATE, &filler(), &mut rng).unwrap();
        assert!(strip_adapters(&scaffold.to_sequence(), &GOLDEN_GATE)
            .unwrap()
            .is_empty());
    }

    #[test]
    fn strip_rejects_damaged_site() {
        let payload = Sequence::new("ATGTAA").unwrap();
        let mut rng = StdRng::seed_from_u64(5);
        let seq = build_scaffold(&payload, &GOLDEN_GATE, &filler(), &mut rng)
            .unwrap()
            .to_sequence();
        let mut damaged = seq.as_str().to_string();
        damaged.replace_range(15..21, "GAAGAA");
        let err = strip_adapters(&Sequence::new(&damaged).unwrap(), &GOLDEN_GATE).unwrap_err();
        assert_eq!(err, "Expected GAAGAC at position 15, found GAAGAA");
    }

    #[test]
    fn strip_rejects_short_sequence() {
        let seq = Sequence::new("ACGT").unwrap();
        assert!(strip_adapters(&seq, &GOLDEN_GATE).is_err());
    }
}

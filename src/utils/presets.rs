use crate::problems::MotifCatalog;
use std::str::FromStr;

/// Named motif catalogs used by the different workflows.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CatalogPreset {
    /// Assembly sites in both orientations plus 5-nt homopolymers; used when
    /// re-coding genes for synthesis.
    Synthesis,
    /// Assembly and cloning sites plus 6-nt homopolymers; used when building
    /// scaffolded parts.
    Overhangs,
    /// Assembly and cloning sites plus A/C homology runs; used when
    /// annotating finished parts.
    Annotation,
}

impl CatalogPreset {
    pub fn catalog(&self) -> MotifCatalog {
        match self {
            CatalogPreset::Synthesis => MotifCatalog::assembly_sites_both_orientations()
                .union(&MotifCatalog::homopolymers_unchecked(5)),
            CatalogPreset::Overhangs => MotifCatalog::assembly_sites()
                .union(&MotifCatalog::cloning_sites())
                .union(&MotifCatalog::homopolymers_unchecked(6)),
            CatalogPreset::Annotation => MotifCatalog::assembly_sites()
                .union(&MotifCatalog::cloning_sites())
                .union(&MotifCatalog::homology_runs()),
        }
    }
}

impl FromStr for CatalogPreset {
    type Err = &'static str;
    fn from_str(preset: &str) -> Result<Self, Self::Err> {
        match preset {
            "synthesis" => Ok(CatalogPreset::Synthesis),
            "overhangs" => Ok(CatalogPreset::Overhangs),
            "annotation" => Ok(CatalogPreset::Annotation),
            _ => Err("Invalid catalog. Options are: synthesis, overhangs, annotation"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_known_presets() {
        assert_eq!("overhangs".parse(), Ok(CatalogPreset::Overhangs));
        assert!("bsai".parse::<CatalogPreset>().is_err());
    }

    #[test]
    fn overhang_catalog_lists_each_site_once() {
        let catalog = CatalogPreset::Overhangs.catalog();
        assert_eq!(catalog.len(), 7 + 22 + 4);
        assert!(catalog.contains("GGGGGG"));
        assert!(!catalog.contains("GGGGG"));
    }

    #[test]
    fn synthesis_catalog_has_reverse_literals() {
        let catalog = CatalogPreset::Synthesis.catalog();
        assert!(catalog.contains("GAGACC"));
        assert!(catalog.contains("AAAAA"));
    }
}

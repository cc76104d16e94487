use once_cell::sync::Lazy;

use crate::assign::PartyGroup;
use crate::config::ChamberConfig;
use crate::error::Result;
use crate::seat::SkipSet;

/// A complete chamber: who sits where, minus the geometry scale.
#[derive(Debug, Clone)]
pub struct Preset {
    pub width: u32,
    pub skip: SkipSet,
    pub parties: Vec<PartyGroup>,
    pub unaffiliated: String,
}

impl Preset {
    pub fn chamber(&self) -> Result<ChamberConfig> {
        ChamberConfig::for_width(self.width)
    }
}

/// French National Assembly, 577 deputies. The three reserved seats are the
/// presidency's, at the ends of the innermost row.
pub static FRENCH_ASSEMBLY: Lazy<Preset> = Lazy::new(|| Preset {
    width: 700,
    skip: SkipSet::from([0, 10, 570]),
    parties: [
        (17, "#D93A33"),
        (16, "#F5695E"),
        (28, "#C4516B"),
        (331, "#ECBD50"),
        (30, "#DE6C35"),
        (24, "#41B1D6"),
        (115, "#334EA1"),
        (9, "#313184"),
    ]
    .into_iter()
    .map(|(seats, color)| PartyGroup::new(seats, color))
    .collect(),
    unaffiliated: "#D6D6CE".to_string(),
});

#[cfg(test)]
mod tests {
    use super::*;
    use crate::plan_seats;
    use color_lib::color::sRGB;
    use itertools::Itertools;

    #[test]
    fn test_french_assembly_fills_every_seat() {
        let preset = &*FRENCH_ASSEMBLY;
        let config = preset.chamber().unwrap();
        let commands =
            plan_seats(&config, &preset.skip, &preset.parties, &preset.unaffiliated).unwrap();

        let total: usize = preset.parties.iter().map(|p| p.seats).sum();
        assert_eq!(total, 570);
        assert_eq!(commands.len(), 577);

        let unaffiliated: sRGB = [0xD6, 0xD6, 0xCE];
        let counts = commands.iter().counts_by(|c| c.color);
        assert_eq!(counts[&unaffiliated], 7);
    }
}

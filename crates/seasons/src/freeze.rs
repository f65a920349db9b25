use crate::calendar::Season;

/// Holds the orbit still at the first frame of a new season while freezing is enabled.
#[derive(Debug, Clone, Default)]
pub struct FreezeGate {
    last_season: Option<Season>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GateDecision {
    Advance,
    Suppress,
}

/// Pure decision. With no observed season yet the orbit always advances.
pub fn should_suppress(freeze_enabled: bool, current: Season, last: Option<Season>) -> bool {
    freeze_enabled && last.is_some_and(|last| last != current)
}

impl FreezeGate {
    pub fn last_season(&self) -> Option<Season> {
        self.last_season
    }

    /// The remembered season only moves forward while the gate lets the orbit advance.
    pub fn evaluate(&mut self, freeze_enabled: bool, current: Season) -> GateDecision {
        if should_suppress(freeze_enabled, current, self.last_season) {
            return GateDecision::Suppress;
        }
        self.last_season = Some(current);
        GateDecision::Advance
    }
}

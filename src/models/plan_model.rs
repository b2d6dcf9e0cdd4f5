use anyhow::{Result, bail};

use crate::constants::{DEFAULT_DURATION_MONTHS, DURATION_OPTIONS};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlanSelection {
    pub duration_months: u32,
    pub pay_in_advance: bool,
    pub accepted_terms: bool,
}

impl Default for PlanSelection {
    fn default() -> Self {
        Self {
            duration_months: DEFAULT_DURATION_MONTHS,
            pay_in_advance: false,
            accepted_terms: false,
        }
    }
}

impl PlanSelection {
    pub fn select_duration(&mut self, months: u32) -> Result<()> {
        if !DURATION_OPTIONS.contains(&months) {
            bail!(
                "Duration of {} months is not offered (choose one of {:?})",
                months,
                DURATION_OPTIONS
            );
        }
        self.duration_months = months;
        Ok(())
    }
}

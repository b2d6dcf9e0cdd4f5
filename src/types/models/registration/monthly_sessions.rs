use strum_macros::EnumIter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter)]
pub enum MonthlySessions {
    Four,
    Six,
    Eight,
    Twelve,
}

impl MonthlySessions {
    pub fn count(&self) -> u32 {
        match self {
            MonthlySessions::Four => 4,
            MonthlySessions::Six => 6,
            MonthlySessions::Eight => 8,
            MonthlySessions::Twelve => 12,
        }
    }

    pub fn from_count(count: u32) -> Option<Self> {
        match count {
            4 => Some(MonthlySessions::Four),
            6 => Some(MonthlySessions::Six),
            8 => Some(MonthlySessions::Eight),
            12 => Some(MonthlySessions::Twelve),
            _ => None,
        }
    }

    /// Form value, e.g. `"8"`.
    pub fn value(&self) -> String {
        self.count().to_string()
    }

    pub fn label(&self) -> String {
        format!("{} Sessions", self.count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::IntoEnumIterator;

    #[test]
    fn menu_is_four_six_eight_twelve() {
        let counts: Vec<u32> = MonthlySessions::iter().map(|s| s.count()).collect();
        assert_eq!(counts, vec![4, 6, 8, 12]);
        assert_eq!(MonthlySessions::from_count(5), None);
        assert_eq!(MonthlySessions::Eight.label(), "8 Sessions");
    }
}

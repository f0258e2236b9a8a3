use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd)]
pub enum Grade {
    APlus,
    A,
    B,
    C,
    D,
    F,
}

/// Lower bound of each grade, best first. Anything below the last one fails.
const THRESHOLDS: [(f64, Grade); 5] = [
    (90.0, Grade::APlus),
    (80.0, Grade::A),
    (70.0, Grade::B),
    (60.0, Grade::C),
    (50.0, Grade::D),
];

impl Grade {
    /// Not restricted to marks: averages go through here too. NaN fails.
    pub fn from_score(score: f64) -> Grade {
        THRESHOLDS
            .iter()
            .find(|&&(min, _)| score >= min)
            .map_or(Grade::F, |&(_, grade)| grade)
    }

    pub fn letter(self) -> &'static str {
        match self {
            Grade::APlus => "A+",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::F => "F",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.letter())
    }
}

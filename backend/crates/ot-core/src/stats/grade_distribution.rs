use crate::{Grade, GradeLetter};

use serde::Serialize;

/// Number of grades per letter, A through F.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct GradeDistribution {
    pub a: usize,
    pub b: usize,
    pub c: usize,
    pub d: usize,
    pub f: usize,
}

impl GradeDistribution {
    pub fn from_grades(grades: &[Grade]) -> Self {
        grades.iter().fold(Self::default(), |mut dist, grade| {
            *dist.slot(grade.letter()) += 1;
            dist
        })
    }

    pub fn get(&self, letter: GradeLetter) -> usize {
        match letter {
            GradeLetter::A => self.a,
            GradeLetter::B => self.b,
            GradeLetter::C => self.c,
            GradeLetter::D => self.d,
            GradeLetter::F => self.f,
        }
    }

    pub fn total(&self) -> usize {
        GradeLetter::ALL.iter().map(|l| self.get(*l)).sum()
    }

    fn slot(&mut self, letter: GradeLetter) -> &mut usize {
        match letter {
            GradeLetter::A => &mut self.a,
            GradeLetter::B => &mut self.b,
            GradeLetter::C => &mut self.c,
            GradeLetter::D => &mut self.d,
            GradeLetter::F => &mut self.f,
        }
    }
}

use crate::tests::grade;
use crate::{CoreError, Grade, GradeLetter};

use googletest::prelude::*;

#[test]
fn test_grade_letter_boundaries() {
    assert_eq!(GradeLetter::from_score(100), GradeLetter::A);
    assert_eq!(GradeLetter::from_score(90), GradeLetter::A);
    assert_eq!(GradeLetter::from_score(89), GradeLetter::B);
    assert_eq!(GradeLetter::from_score(80), GradeLetter::B);
    assert_eq!(GradeLetter::from_score(79), GradeLetter::C);
    assert_eq!(GradeLetter::from_score(70), GradeLetter::C);
    assert_eq!(GradeLetter::from_score(69), GradeLetter::D);
    assert_eq!(GradeLetter::from_score(60), GradeLetter::D);
    assert_eq!(GradeLetter::from_score(59), GradeLetter::F);
    assert_eq!(GradeLetter::from_score(0), GradeLetter::F);
}

#[test]
fn given_score_sixty_when_checked_then_passed() {
    assert_that!(grade(60, 0, "Quiz").passed(), eq(true));
    assert_that!(grade(59, 0, "Quiz").passed(), eq(false));
}

#[test]
fn given_out_of_range_scores_when_validated_then_invalid_score() {
    for score in [-1, 101, 300] {
        assert!(matches!(
            Grade::validate_score(score),
            Err(CoreError::InvalidScore { .. })
        ));
    }
    assert_that!(Grade::validate_score(100).unwrap(), eq(100));
}

#[test]
fn given_new_grade_then_not_reviewed_and_copies_test_fields() {
    let g = grade(88, 0, "Fractions");

    assert_that!(g.reviewed, eq(false));
    assert_that!(g.test_title.as_str(), eq("Fractions"));
    assert_that!(g.module_name.as_str(), eq("General"));
    assert_that!(g.letter(), eq(GradeLetter::B));
}

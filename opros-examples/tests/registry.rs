//! Integration tests for the example survey registry.

use anyhow::Result;
use opros_examples::{FOOD_SURVEY, MUSIC_SURVEY, SURVEYS, registry};
use opros_types::{RegistryError, SurveyId};

#[test]
fn food_survey_matches_source_data() -> Result<()> {
    let registry = registry();
    let survey = registry.lookup(&SurveyId::new(FOOD_SURVEY))?;

    assert_eq!(survey.title(), "Предпочтения в еде");
    assert_eq!(survey.len(), 3);
    assert_eq!(survey.questions()[0].text(), "Какое ваше любимое блюдо?");
    assert_eq!(survey.questions()[0].options(), ["Пицца", "Бургер", "Салат"]);
    Ok(())
}

#[test]
fn music_survey_matches_source_data() -> Result<()> {
    let registry = registry();
    let survey = registry.lookup(&SurveyId::new(MUSIC_SURVEY))?;

    assert_eq!(survey.title(), "Предпочтения в музыке");
    assert_eq!(survey.len(), 3);
    assert_eq!(
        survey.questions()[2].options(),
        ["Классические хиты", "Современные хиты", "Альтернатива"]
    );
    Ok(())
}

#[test]
fn registry_holds_exactly_two_surveys() {
    let registry = registry();
    assert_eq!(registry.len(), 2);
    assert!(registry.contains(&FOOD_SURVEY.into()));
    assert!(registry.contains(&MUSIC_SURVEY.into()));
}

#[test]
fn static_registry_matches_fresh_build() {
    let fresh = registry();
    let food = SurveyId::new(FOOD_SURVEY);

    assert_eq!(SURVEYS.len(), fresh.len());
    assert_eq!(SURVEYS.get(&food), fresh.get(&food));
}

#[test]
fn every_example_question_is_answerable() {
    for (_, survey) in &registry() {
        assert!(!survey.is_empty());
        for question in survey.questions() {
            assert!(question.is_answerable());
        }
    }
}

#[test]
fn unknown_survey_is_reported() {
    let err = registry()
        .lookup(&SurveyId::new("pets_survey"))
        .unwrap_err();
    assert!(matches!(err, RegistryError::UnknownSurvey(_)));
    assert_eq!(
        err.to_string(),
        "No survey registered under id: pets_survey"
    );
}

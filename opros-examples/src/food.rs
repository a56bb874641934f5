//! The food preferences survey.

use opros_types::Survey;

/// Build the food preferences survey with its three questions.
pub fn survey() -> Survey {
    let mut survey = Survey::new("Предпочтения в еде");
    survey.add_question("Какое ваше любимое блюдо?", ["Пицца", "Бургер", "Салат"]);
    survey.add_question(
        "Какая кухня вам больше всего нравится?",
        ["Итальянская", "Японская", "Мексиканская"],
    );
    survey.add_question("Какие продукты вы предпочитаете?", ["Мясо", "Рыба", "Овощи"]);
    survey
}

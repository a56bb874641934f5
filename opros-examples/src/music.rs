//! The music preferences survey.

use opros_types::Survey;

/// Build the music preferences survey with its three questions.
pub fn survey() -> Survey {
    let mut survey = Survey::new("Предпочтения в музыке");
    survey.add_question("Какой ваш любимый музыкальный жанр?", ["Рок", "Поп", "Джаз"]);
    survey.add_question(
        "Какой инструмент вам больше всего нравится?",
        ["Гитара", "Пианино", "Скрипка"],
    );
    survey.add_question(
        "Какие песни вы слушаете чаще всего?",
        ["Классические хиты", "Современные хиты", "Альтернатива"],
    );
    survey
}

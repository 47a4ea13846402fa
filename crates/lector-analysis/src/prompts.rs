//! Prompt templates sent to the text-generation service.

use std::fmt::Write;

use lector_core::enums::Correctness;
use lector_core::taxonomy::CanonicalLabel;

pub fn questions_prompt(source_text: &str, count: usize) -> String {
    format!(
        "Lee el siguiente texto y genera exactamente {count} preguntas de comprensión lectora.\n\
         - Escríbelas en el mismo idioma del texto.\n\
         - Devuélvelas en una lista, una pregunta por línea.\n\
         - No incluyas respuestas ni explicaciones.\n\n\
         Texto:\n{source_text}\n"
    )
}

pub fn feedback_prompt(source_text: &str, question: &str, user_answer: &str) -> String {
    format!(
        "Analiza el siguiente ejercicio de comprensión lectora.\n\n\
         Texto:\n{source_text}\n\n\
         Pregunta:\n{question}\n\n\
         Respuesta del usuario:\n{user_answer}\n\n\
         Instrucciones para la retroalimentación:\n\
         - Responde en el idioma del texto con UNA sola oración breve (máximo 20 palabras).\n\
         - Habla directamente al usuario en segunda persona.\n\
         - Indica solo si la respuesta es {correct}, {partial} o {incorrect}, usando exactamente \
         una de esas palabras en mayúsculas, y qué mejorar en pocas palabras.\n\
         - No uses negritas, cursivas, guiones, asteriscos ni ningún formato.\n\
         - No uses expresiones como \"el usuario respondió\".\n",
        correct = Correctness::Correct.token(),
        partial = Correctness::Partial.token(),
        incorrect = Correctness::Incorrect.token(),
    )
}

pub fn strict_bias_prompt(source_text: &str) -> String {
    let mut allowed = String::new();
    for label in CanonicalLabel::ALL {
        let _ = writeln!(allowed, "- {label}");
    }
    format!(
        "Eres un clasificador de sesgos y falacias lógicas.\n\
         Devuelve EXCLUSIVAMENTE JSON válido (sin texto adicional), con el formato:\n\
         [\"{first}\", \"{second}\"]\n\
         No inventes etiquetas. Solo puedes usar exactamente estas:\n\
         {allowed}\
         Si no detectas nada, devuelve [].\n\
         Texto a evaluar (entre <<< >>>):\n<<<\n{source_text}\n>>>\n",
        first = CanonicalLabel::AdHominem,
        second = CanonicalLabel::HastyGeneralization,
    )
}

pub fn freeform_bias_prompt(source_text: &str) -> String {
    let allowed = CanonicalLabel::ALL
        .iter()
        .map(|label| label.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    format!(
        "Lee el texto y lista SOLO las etiquetas detectadas separadas por comas.\n\
         Etiquetas permitidas (no inventes): {allowed}.\n\
         Si no hay ninguna, responde: ninguna.\n\n\
         Texto:\n{source_text}\n"
    )
}

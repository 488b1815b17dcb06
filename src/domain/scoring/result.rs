//! Scoring result assembly.

use serde::Serialize;

use super::{
    influential_answers, Answer, InfluentialAnswer, RankedSubtype, ScoringError,
    SubtypeAggregator, SubtypeCatalog, SubtypeDescription, SubtypeScores,
};

/// Complete outcome of one scoring run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScoringResult {
    #[serde(rename = "resultado")]
    pub principal: Option<String>,

    #[serde(flatten)]
    pub description: SubtypeDescription,

    #[serde(rename = "pesos_acumulados")]
    pub scores: SubtypeScores,

    pub ranking: Vec<RankedSubtype>,

    #[serde(rename = "preguntas_influyentes")]
    pub influential: Vec<InfluentialAnswer>,
}

impl ScoringResult {
    /// Combines already-aggregated scores with the catalog and the answers.
    pub fn assemble(answers: &[Answer], scores: SubtypeScores, catalog: &SubtypeCatalog) -> Self {
        let ranking = scores.ranking();
        let principal = scores.principal();
        let description = catalog.describe(principal.as_deref());
        let influential = influential_answers(answers, principal.as_deref());

        Self {
            principal,
            description,
            scores,
            ranking,
            influential,
        }
    }
}

/// Scores `answers` end to end against `catalog`.
pub fn score_answers(
    answers: &[Answer],
    catalog: &SubtypeCatalog,
) -> Result<ScoringResult, ScoringError> {
    let scores = SubtypeAggregator::aggregate(answers)?;
    Ok(ScoringResult::assemble(answers, scores, catalog))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::scoring::NOT_AVAILABLE;
    use serde_json::json;

    fn catalog() -> SubtypeCatalog {
        vec![(
            "SP1",
            SubtypeDescription {
                description: "Conservación".to_string(),
                key_traits: "Prudencia".to_string(),
                virtues: "Serenidad".to_string(),
                defense_mechanisms: "Formación reactiva".to_string(),
                core_motivation: "Ser correcto".to_string(),
                keyword: "Ansiedad".to_string(),
            },
        )]
        .into_iter()
        .collect()
    }

    #[test]
    fn empty_input_yields_empty_result_with_placeholder() {
        let result = score_answers(&[], &catalog()).unwrap();

        assert_eq!(result.principal, None);
        assert!(result.scores.is_empty());
        assert!(result.ranking.is_empty());
        assert!(result.influential.is_empty());
        assert!(result.description.is_placeholder());
    }

    #[test]
    fn known_principal_is_described() {
        let answers = vec![
            Answer::new("P1", 5, &["SP1"], 4.0),
            Answer::new("P2", 1, &["SX2"], 4.0),
        ];
        let result = score_answers(&answers, &catalog()).unwrap();

        assert_eq!(result.principal.as_deref(), Some("SP1"));
        assert_eq!(result.description.keyword, "Ansiedad");
        assert_eq!(result.influential.len(), 1);
    }

    #[test]
    fn unknown_principal_still_filters_influential_answers() {
        let answers = vec![
            Answer::new("P1", 5, &["SX9"], 4.0),
            Answer::new("P2", 5, &["SP1"], 1.0),
            Answer::new("P3", 3, &["SX9", "SP1"], 1.0),
        ];
        let result = score_answers(&answers, &catalog()).unwrap();

        assert_eq!(result.principal.as_deref(), Some("SX9"));
        assert_eq!(result.description.description, NOT_AVAILABLE);
        let questions: Vec<_> = result.influential.iter().map(|a| a.question.as_str()).collect();
        assert_eq!(questions, vec!["P1", "P3"]);
    }

    #[test]
    fn serializes_with_wire_field_names() {
        let answers = vec![Answer::new("P1", 5, &["SP1"], 10.0)];
        let value = serde_json::to_value(score_answers(&answers, &catalog()).unwrap()).unwrap();

        assert_eq!(value["resultado"], json!("SP1"));
        assert_eq!(value["descripcion"], json!("Conservación"));
        assert_eq!(value["mecanismos_defensa"], json!("Formación reactiva"));
        assert_eq!(value["pesos_acumulados"], json!({"SP1": 10.0}));
        assert_eq!(value["ranking"], json!([["SP1", 10.0]]));
        assert_eq!(
            value["preguntas_influyentes"],
            json!([{"pregunta": "P1", "peso": 10.0, "respuesta": 5}])
        );
    }

    #[test]
    fn null_principal_serializes_as_null() {
        let value = serde_json::to_value(score_answers(&[], &catalog()).unwrap()).unwrap();
        assert!(value["resultado"].is_null());
        assert_eq!(value["palabra_clave"], json!(NOT_AVAILABLE));
    }
}

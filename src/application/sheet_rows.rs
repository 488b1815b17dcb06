//! Row schemas - mapping between sheet records and domain types.
//!
//! Every table column the service reads is named here together with the
//! value used when the column is absent from the sheet.

use crate::domain::quiz::Question;
use crate::domain::scoring::{SubtypeCatalog, SubtypeDescription, NOT_AVAILABLE};
use crate::ports::{ColumnLetter, SheetRecord};

/// Columns of the questions table.
pub mod question_columns {
    pub const ID: &str = "ID";
    pub const TEXT: &str = "Pregunta";
    pub const SUBTYPES: &str = "Subtipos";
    pub const WEIGHT: &str = "Peso";
}

/// Columns of the subtype descriptions table.
pub mod subtype_columns {
    pub const TYPE_NAME: &str = "Type Name";
    pub const DESCRIPTION: &str = "Integracion ia";
    pub const KEY_TRAITS: &str = "Rasgos Clave";
    pub const VIRTUES: &str = "Virtudes";
    pub const DEFENSE_MECHANISMS: &str = "Mecanismo de defensa";
    pub const CORE_MOTIVATION: &str = "Motivación";
    pub const KEYWORD: &str = "Palabra Clave";
}

/// Columns of the users table, A through H.
pub mod user_columns {
    pub const ID: &str = "ID";
    pub const NAME_EMAIL: &str = "Nombre/Correo Electrónico";
    pub const TEST_STATUS: &str = "Estado del Test";
    pub const STARTED_AT: &str = "Fecha de Inicio";
    pub const LAST_QUESTION: &str = "Última Pregunta Contestada";
    pub const ANSWERS: &str = "Respuestas";
    pub const RESULTS: &str = "Resultados";
    pub const QUESTIONS: &str = "Preguntas";

    /// Header row in column order.
    pub const ALL: [&str; 8] = [
        ID,
        NAME_EMAIL,
        TEST_STATUS,
        STARTED_AT,
        LAST_QUESTION,
        ANSWERS,
        RESULTS,
        QUESTIONS,
    ];
}

/// Header row of the answers log table, in column order.
pub const ANSWER_LOG_HEADERS: [&str; 7] = [
    "Test ID",
    "Usuario",
    "Pregunta",
    "Respuesta",
    "Peso",
    "Subtipo Actual",
    "Timestamp",
];

/// First sheet row holding data; row 1 is the header.
pub const FIRST_DATA_ROW: u32 = 2;

/// Maps a questions-table record; absent columns fall back to empty values.
pub fn question_from_record(record: &SheetRecord) -> Question {
    use question_columns::*;

    Question {
        id: record.text(ID).unwrap_or_default(),
        text: record.text(TEXT).unwrap_or_default(),
        subtypes: record
            .text(SUBTYPES)
            .map(|cell| Question::parse_subtypes(&cell))
            .unwrap_or_default(),
        weight: record.number(WEIGHT).unwrap_or(0.0),
    }
}

/// Maps a subtype-table record to its type name and description.
///
/// Records without a type name column are skipped (`None`). A description
/// column missing from the sheet yields [`NOT_AVAILABLE`]; an empty cell
/// stays empty.
pub fn subtype_from_record(record: &SheetRecord) -> Option<(String, SubtypeDescription)> {
    use subtype_columns::*;

    let type_name = record.text(TYPE_NAME)?;
    let field = |column: &str| record.text(column).unwrap_or_else(|| NOT_AVAILABLE.to_string());

    Some((
        type_name,
        SubtypeDescription {
            description: field(DESCRIPTION),
            key_traits: field(KEY_TRAITS),
            virtues: field(VIRTUES),
            defense_mechanisms: field(DEFENSE_MECHANISMS),
            core_motivation: field(CORE_MOTIVATION),
            keyword: field(KEYWORD),
        },
    ))
}

/// Builds the catalog from every record of the subtype table.
pub fn subtype_catalog(records: &[SheetRecord]) -> SubtypeCatalog {
    records.iter().filter_map(subtype_from_record).collect()
}

/// Sheet row of the first user whose name/email cell equals `name_email`.
pub fn find_user_row(records: &[SheetRecord], name_email: &str) -> Option<u32> {
    records
        .iter()
        .position(|record| {
            record.text(user_columns::NAME_EMAIL).as_deref() == Some(name_email)
        })
        .map(|index| FIRST_DATA_ROW + index as u32)
}

/// Column letter of a users-table column.
pub fn user_column(name: &str) -> Option<ColumnLetter> {
    user_columns::ALL
        .iter()
        .position(|column| *column == name)
        .map(ColumnLetter::from_index)
}

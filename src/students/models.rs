//! Student record models and the values derived from them.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// Minimum average for a passing status (inclusive)
pub const PASSING_AVERAGE: f64 = 6.0;

pub const STATUS_APPROVED: &str = "Aprovado";
pub const STATUS_FAILED: &str = "Reprovado";

/// A student ("aluno"). Ids are supplied by the caller and may collide.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    pub id: i64,
    pub nome: String,
    pub ra: String,
    pub nota1: f64,
    pub nota2: f64,
}

impl StudentRecord {
    pub fn new(id: i64, nome: &str, ra: &str, nota1: f64, nota2: f64) -> Self {
        Self {
            id,
            nome: nome.to_string(),
            ra: ra.to_string(),
            nota1,
            nota2,
        }
    }

    pub fn average(&self) -> f64 {
        (self.nota1 + self.nota2) / 2.0
    }

    pub fn is_passing(&self) -> bool {
        self.average() >= PASSING_AVERAGE
    }

    pub fn status(&self) -> &'static str {
        if self.is_passing() {
            STATUS_APPROVED
        } else {
            STATUS_FAILED
        }
    }
}

/// Format a value with two decimals the way `Number.prototype.toFixed(2)`
/// does: the exact binary value is rounded, halves away from zero.
pub fn format_average(value: f64) -> String {
    match Decimal::from_f64_retain(value) {
        Some(exact) => format!(
            "{:.2}",
            exact.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
        ),
        None => format!("{:.2}", value),
    }
}

/// `{nome, media}` row of GET /alunos/medias
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AverageEntry {
    pub nome: String,
    pub media: String,
}

impl From<&StudentRecord> for AverageEntry {
    fn from(record: &StudentRecord) -> Self {
        Self {
            nome: record.nome.clone(),
            media: format_average(record.average()),
        }
    }
}

/// `{nome, status}` row of GET /alunos/aprovados
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub nome: String,
    pub status: String,
}

impl From<&StudentRecord> for StatusEntry {
    fn from(record: &StudentRecord) -> Self {
        Self {
            nome: record.nome.clone(),
            status: record.status().to_string(),
        }
    }
}

/// POST /alunos body. Every field is optional here so that presence is
/// checked by `into_record` rather than by the deserializer.
#[derive(Debug, Default, Deserialize)]
pub struct NewStudent {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub ra: Option<String>,
    #[serde(default)]
    pub nota1: Option<f64>,
    #[serde(default)]
    pub nota2: Option<f64>,
}

impl NewStudent {
    /// Complete record, or `None` when a field is missing. A zero id and
    /// empty strings count as missing; zero scores do not.
    pub fn into_record(self) -> Option<StudentRecord> {
        Some(StudentRecord {
            id: self.id.filter(|id| *id != 0)?,
            nome: self.nome.filter(|n| !n.is_empty())?,
            ra: self.ra.filter(|r| !r.is_empty())?,
            nota1: self.nota1?,
            nota2: self.nota2?,
        })
    }
}

/// PUT /alunos/:id body. Absent, null and (for strings) empty fields leave
/// the stored value untouched. Any `id` in the body is ignored.
#[derive(Debug, Default, Deserialize)]
pub struct StudentPatch {
    #[serde(default)]
    pub nome: Option<String>,
    #[serde(default)]
    pub ra: Option<String>,
    #[serde(default)]
    pub nota1: Option<f64>,
    #[serde(default)]
    pub nota2: Option<f64>,
}

impl StudentPatch {
    pub fn apply(self, record: &mut StudentRecord) {
        if let Some(nome) = self.nome.filter(|n| !n.is_empty()) {
            record.nome = nome;
        }
        if let Some(ra) = self.ra.filter(|r| !r.is_empty()) {
            record.ra = ra;
        }
        if let Some(nota1) = self.nota1 {
            record.nota1 = nota1;
        }
        if let Some(nota2) = self.nota2 {
            record.nota2 = nota2;
        }
    }
}

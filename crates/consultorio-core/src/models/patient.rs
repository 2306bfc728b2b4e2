//! Patient models.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::carnet::{BirthInfo, BirthInfoDeriver};

/// A patient record scoped to a consultorio.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Patient {
    /// Database ID - null until persisted
    pub id_paciente: Option<i64>,
    /// Clinical history number
    pub numero_historia_clinica: String,
    /// Full name
    pub nombre_apellidos: String,
    /// Carnet de identidad, free-form text
    pub carnet_identidad: Option<String>,
    pub id_sexo: Option<i64>,
    pub direccion: Option<String>,
    pub id_area_geografica: Option<i64>,
    pub id_nivel_escolar: Option<i64>,
    pub id_ocupacion: Option<i64>,
    pub id_grupo_dispensarial: Option<i64>,
    pub id_color_piel: Option<i64>,
    /// Health problems
    pub problemas_salud: Option<String>,
    /// Additional notes
    pub observaciones: Option<String>,
    /// Owning consultorio
    pub id_consultorio: i64,
}

impl Patient {
    /// Create a new patient with required fields.
    pub fn new(numero_historia_clinica: String, nombre_apellidos: String, id_consultorio: i64) -> Self {
        Self {
            id_paciente: None,
            numero_historia_clinica,
            nombre_apellidos,
            carnet_identidad: None,
            id_sexo: None,
            direccion: None,
            id_area_geografica: None,
            id_nivel_escolar: None,
            id_ocupacion: None,
            id_grupo_dispensarial: None,
            id_color_piel: None,
            problemas_salud: None,
            observaciones: None,
            id_consultorio,
        }
    }

    /// Set the carnet, treating blank text as absent.
    pub fn with_carnet(mut self, carnet: &str) -> Self {
        self.carnet_identidad = non_blank(Some(carnet.to_string()));
        self
    }

    /// Turn empty optional text into `None`, as create/update requests do.
    pub fn normalized(mut self) -> Self {
        self.carnet_identidad = non_blank(self.carnet_identidad);
        self.direccion = non_blank(self.direccion);
        self.problemas_salud = non_blank(self.problemas_salud);
        self.observaciones = non_blank(self.observaciones);
        self
    }

    /// Check if this patient has been persisted.
    pub fn is_persisted(&self) -> bool {
        self.id_paciente.is_some()
    }

    /// Derive birth info from the carnet as of `today`.
    pub fn birth_info(&self, deriver: &BirthInfoDeriver, today: NaiveDate) -> BirthInfo {
        deriver.derive(self.carnet_identidad.as_deref(), today)
    }
}

/// A patient plus derived birth info, as returned to clients.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct PatientView {
    #[serde(flatten)]
    pub patient: Patient,
    #[serde(flatten)]
    pub birth: BirthInfo,
}

impl PatientView {
    /// Attach birth info derived as of `today`.
    pub fn new(patient: Patient, deriver: &BirthInfoDeriver, today: NaiveDate) -> Self {
        let birth = patient.birth_info(deriver, today);
        Self { patient, birth }
    }

    /// Build views for a patient list, sorted by name.
    pub fn list(patients: Vec<Patient>, deriver: &BirthInfoDeriver, today: NaiveDate) -> Vec<Self> {
        let mut views: Vec<Self> = patients
            .into_iter()
            .map(|p| Self::new(p, deriver, today))
            .collect();
        views.sort_by(|a, b| a.patient.nombre_apellidos.cmp(&b.patient.nombre_apellidos));
        views
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

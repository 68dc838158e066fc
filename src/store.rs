//! Records and the query boundary of the thermophysical property store.
use crate::correlation::{CorrelationFamily, VaporPressureParameters};
use crate::errors::{PropertyError, PropertyResult};
use indexmap::IndexSet;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Physical constants of a pure substance.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct PureProperties {
    /// critical temperature in Kelvin
    pub tc: f64,
    /// critical pressure in bar
    pub pc: f64,
    /// acentric factor
    pub acentric_factor: f64,
    /// molar mass in g/mol
    pub molarweight: f64,
    /// mean radius of gyration
    pub radius_of_gyration: f64,
    /// critical compressibility factor
    pub zc: f64,
    /// critical molar volume
    pub vc: f64,
    /// dipole moment
    pub dipole_moment: f64,
    /// UNIQUAC volume parameter
    pub r: f64,
    /// UNIQUAC surface parameter
    pub q: f64,
    /// UNIQUAC surface parameter (alcohol correction)
    pub ql: f64,
    /// liquid density at the reference temperature
    pub liquid_density: f64,
    /// reference temperature of the liquid density in Kelvin
    pub liquid_density_temperature: f64,
}

/// A component as stored: unique integer id, unique name, and its constants.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct ComponentRecord {
    pub id: u32,
    pub name: String,
    #[serde(flatten)]
    pub properties: PureProperties,
}

impl fmt::Display for ComponentRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentRecord(id={}, name={})", self.id, self.name)
    }
}

/// Vapor-pressure correlation coefficients for one (component, family, form) triple.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct VaporPressureRecord {
    pub component_id: u32,
    pub form: u32,
    #[serde(default)]
    pub family: CorrelationFamily,
    #[serde(flatten)]
    pub parameters: VaporPressureParameters,
}

/// Pairwise interaction properties for a directional component pair.
///
/// The pair is directional: a record for `(id1, id2)` says nothing about
/// `(id2, id1)` - the store has to supply both rows explicitly.
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BinaryPropertyRecord {
    /// Identifier of the first component
    pub id1: u32,
    /// Identifier of the second component
    pub id2: u32,
    #[serde(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    pub solvation_coefficient: Option<f64>,
}

/// The pairwise properties a store can be queried for.
///
/// Each variant maps to a fixed field of [BinaryPropertyRecord]; there is no
/// dynamic relation or column name anywhere in the query path.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PairProperty {
    SolvationCoefficient,
}

impl fmt::Display for PairProperty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PairProperty::SolvationCoefficient => write!(f, "solvation coefficient"),
        }
    }
}

/// Read-only query surface of the property store.
///
/// Implementations are passed by reference into every characterization and
/// aggregation call; nothing in this crate holds its own connection state.
pub trait PropertyStore {
    /// All component names known to the store.
    fn component_names(&self) -> Vec<&str>;

    /// Resolve a component name to its unique integer id.
    fn component_id(&self, name: &str) -> PropertyResult<u32>;

    /// The physical constants of a component.
    fn pure_properties(&self, id: u32) -> PropertyResult<&PureProperties>;

    /// All correlation forms stored for a component and family.
    fn correlation_forms(&self, id: u32, family: CorrelationFamily) -> Vec<u32>;

    /// The coefficients and validity range for one (component, family, form) triple.
    fn vapor_pressure_parameters(
        &self,
        id: u32,
        family: CorrelationFamily,
        form: u32,
    ) -> PropertyResult<&VaporPressureParameters>;

    /// A pairwise property value for the directional pair `(id_i, id_j)`.
    fn pair_property(&self, property: PairProperty, id_i: u32, id_j: u32) -> PropertyResult<f64>;
}

/// A [PropertyStore] backed by a JSON database file.
#[derive(Deserialize, Clone, Debug)]
pub struct JsonPropertyStore {
    components: Vec<ComponentRecord>,
    #[serde(default)]
    vapor_pressure: Vec<VaporPressureRecord>,
    #[serde(default)]
    binary: Vec<BinaryPropertyRecord>,
}

impl JsonPropertyStore {
    /// Read the full store from a JSON database file.
    pub fn from_json<P: AsRef<Path>>(file: P) -> PropertyResult<Self> {
        let reader = BufReader::new(File::open(file)?);
        let store: Self = serde_json::from_reader(reader)?;
        store.validate()
    }

    /// Build a store from records already in memory.
    pub fn from_records(
        components: Vec<ComponentRecord>,
        vapor_pressure: Vec<VaporPressureRecord>,
        binary: Vec<BinaryPropertyRecord>,
    ) -> PropertyResult<Self> {
        Self {
            components,
            vapor_pressure,
            binary,
        }
        .validate()
    }

    // raise error on duplicate names or ids
    fn validate(self) -> PropertyResult<Self> {
        let names: IndexSet<&str> = self.components.iter().map(|c| c.name.as_str()).collect();
        if names.len() != self.components.len() {
            return Err(PropertyError::IncompatibleParameters(
                "A component was defined more than once.".to_string(),
            ));
        }
        let ids: IndexSet<u32> = self.components.iter().map(|c| c.id).collect();
        if ids.len() != self.components.len() {
            return Err(PropertyError::IncompatibleParameters(
                "A component id was assigned more than once.".to_string(),
            ));
        }
        Ok(self)
    }
}

impl PropertyStore for JsonPropertyStore {
    fn component_names(&self) -> Vec<&str> {
        self.components.iter().map(|c| c.name.as_str()).collect()
    }

    fn component_id(&self, name: &str) -> PropertyResult<u32> {
        self.components
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.id)
            .ok_or_else(|| {
                PropertyError::ComponentsNotFound(format!(
                    "{:?}. Known components: {:?}",
                    [name],
                    self.component_names()
                ))
            })
    }

    fn pure_properties(&self, id: u32) -> PropertyResult<&PureProperties> {
        self.components
            .iter()
            .find(|c| c.id == id)
            .map(|c| &c.properties)
            .ok_or_else(|| {
                PropertyError::MissingParameters(format!(
                    "No pure property record for component id {id}."
                ))
            })
    }

    fn correlation_forms(&self, id: u32, family: CorrelationFamily) -> Vec<u32> {
        self.vapor_pressure
            .iter()
            .filter(|r| r.component_id == id && r.family == family)
            .map(|r| r.form)
            .collect()
    }

    fn vapor_pressure_parameters(
        &self,
        id: u32,
        family: CorrelationFamily,
        form: u32,
    ) -> PropertyResult<&VaporPressureParameters> {
        self.vapor_pressure
            .iter()
            .find(|r| r.component_id == id && r.family == family && r.form == form)
            .map(|r| &r.parameters)
            .ok_or_else(|| {
                PropertyError::MissingParameters(format!(
                    "No {family} parameters for component id {id}, form {form}."
                ))
            })
    }

    fn pair_property(&self, property: PairProperty, id_i: u32, id_j: u32) -> PropertyResult<f64> {
        let record = self
            .binary
            .iter()
            .find(|r| r.id1 == id_i && r.id2 == id_j)
            .ok_or(PropertyError::MissingBinaryParameters(id_i, id_j))?;
        match property {
            PairProperty::SolvationCoefficient => record.solvation_coefficient,
        }
        .ok_or(PropertyError::MissingBinaryParameters(id_i, id_j))
    }
}

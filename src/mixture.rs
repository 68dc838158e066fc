//! Aggregation of pairwise properties over an ordered set of components and
//! the virial mixing-rule model built on top of it.
use crate::component::PureComponent;
use crate::errors::{PropertyError, PropertyResult};
use crate::store::{PairProperty, PropertyStore};
use ndarray::Array2;
use std::fmt;
use std::str::FromStr;

/// An ordered set of characterized components.
///
/// The input order is significant: it defines the row and column indexing of
/// every matrix derived from the mixture. Matrices are assembled on demand
/// with fresh store queries, never cached.
#[derive(Clone, Debug)]
pub struct Mixture {
    ids: Vec<u32>,
}

impl Mixture {
    pub fn new(components: &[PureComponent]) -> Self {
        Self {
            ids: components.iter().map(|c| c.id()).collect(),
        }
    }

    /// Component ids in input order.
    pub fn component_ids(&self) -> &[u32] {
        &self.ids
    }

    /// Assemble the N×N matrix of a pairwise property.
    ///
    /// Every ordered pair `(i, j)` including the diagonal is queried
    /// individually; no symmetry is assumed, the store has to hold both
    /// directions. A missing pair fails the whole assembly.
    pub fn pair_property_matrix(
        &self,
        store: &dyn PropertyStore,
        property: PairProperty,
    ) -> PropertyResult<Array2<f64>> {
        let n = self.ids.len();
        let mut matrix = Array2::zeros([n, n]);
        for (i, &id_i) in self.ids.iter().enumerate() {
            for (j, &id_j) in self.ids.iter().enumerate() {
                matrix[[i, j]] = store.pair_property(property, id_i, id_j)?;
            }
        }
        Ok(matrix)
    }
}

/// Mixing rules available for the virial model.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MixingRule {
    #[default]
    HaydenOConnell,
    Tsonopoulos,
}

impl MixingRule {
    const ALL: [MixingRule; 2] = [MixingRule::HaydenOConnell, MixingRule::Tsonopoulos];

    fn available() -> String {
        Self::ALL.map(|r| r.to_string()).join(", ")
    }
}

impl fmt::Display for MixingRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MixingRule::HaydenOConnell => write!(f, "Hayden-O'Connell"),
            MixingRule::Tsonopoulos => write!(f, "Tsonopoulos"),
        }
    }
}

impl FromStr for MixingRule {
    type Err = PropertyError;

    fn from_str(s: &str) -> PropertyResult<Self> {
        match s {
            "Hayden-O'Connell" => Ok(MixingRule::HaydenOConnell),
            "Tsonopoulos" => Ok(MixingRule::Tsonopoulos),
            _ => Err(PropertyError::UnsupportedMixingRule(
                s.to_string(),
                Self::available(),
            )),
        }
    }
}

/// Virial equation-of-state mixture model.
///
/// Materializes the solvation-coefficient matrix eagerly at construction.
pub struct Virial {
    mixture: Mixture,
    mixing_rule: MixingRule,
    solvation_coefficients: Array2<f64>,
}

impl Virial {
    pub fn new(
        store: &dyn PropertyStore,
        components: &[PureComponent],
        mixing_rule: MixingRule,
    ) -> PropertyResult<Self> {
        let mixture = Mixture::new(components);
        let solvation_coefficients =
            mixture.pair_property_matrix(store, PairProperty::SolvationCoefficient)?;
        Ok(Self {
            mixture,
            mixing_rule,
            solvation_coefficients,
        })
    }

    pub fn mixture(&self) -> &Mixture {
        &self.mixture
    }

    pub fn mixing_rule(&self) -> MixingRule {
        self.mixing_rule
    }

    /// Solvation-coefficient matrix, indexed in component input order.
    pub fn solvation_coefficients(&self) -> &Array2<f64> {
        &self.solvation_coefficients
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn mixing_rule_parsing() {
        assert_eq!(
            "Hayden-O'Connell".parse::<MixingRule>().unwrap(),
            MixingRule::HaydenOConnell
        );
        assert_eq!(
            "Tsonopoulos".parse::<MixingRule>().unwrap(),
            MixingRule::Tsonopoulos
        );
        assert!(matches!(
            "Wongsawat".parse::<MixingRule>(),
            Err(PropertyError::UnsupportedMixingRule(..))
        ));
    }

    #[test]
    fn mixing_rule_default() {
        assert_eq!(MixingRule::default(), MixingRule::HaydenOConnell);
    }
}

//! Characterization of a pure component against a property store.
use crate::correlation::{
    resolve_form, saturation_pressure, CorrelationConfig, CorrelationFamily,
    ImplicitSolveOptions, VaporPressureForm, VaporPressureParameters,
};
use crate::errors::PropertyResult;
use crate::store::{PropertyStore, PureProperties};
use std::fmt;
use tracing::warn;

/// The correlation a component ended up with after form selection.
#[derive(Clone, Copy, Debug)]
pub struct ResolvedCorrelation {
    pub family: CorrelationFamily,
    pub form: u32,
    pub parameters: VaporPressureParameters,
}

/// Non-fatal notice that the operating temperature lies outside the
/// validated range of the chosen correlation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RangeWarning {
    pub temperature: f64,
    pub tmin: f64,
    pub tmax: f64,
}

impl fmt::Display for RangeWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "temperature {} K is outside the validated correlation range [{} K, {} K]",
            self.temperature, self.tmin, self.tmax
        )
    }
}

/// A fully characterized pure component.
///
/// Construction resolves the name, selects the correlation form, fetches all
/// properties and evaluates the saturation pressure; any failing step aborts
/// and no partially characterized component is observable. The value is
/// immutable afterwards.
#[derive(Clone, Debug)]
pub struct PureComponent {
    name: String,
    id: u32,
    properties: PureProperties,
    correlation: ResolvedCorrelation,
    temperature: f64,
    saturation_pressure: f64,
    range_warning: Option<RangeWarning>,
}

impl PureComponent {
    /// Characterize a component by name at temperature `t` (K).
    pub fn characterize(
        store: &dyn PropertyStore,
        name: &str,
        config: CorrelationConfig,
        t: f64,
    ) -> PropertyResult<Self> {
        let id = store.component_id(name)?;
        let available = store.correlation_forms(id, config.family);
        let form = resolve_form(&available, config.form)?;
        let properties = store.pure_properties(id)?.clone();
        let parameters = *store.vapor_pressure_parameters(id, config.family, form)?;

        let range_warning = check_range(t, &parameters);
        if let Some(warning) = &range_warning {
            warn!(component = name, %warning, "vapor pressure correlation used outside its range");
        }

        let psat = saturation_pressure(
            VaporPressureForm::try_from(form)?,
            &parameters,
            t,
            properties.tc,
            properties.pc,
            ImplicitSolveOptions::default(),
        )?;

        Ok(Self {
            name: name.to_string(),
            id,
            properties,
            correlation: ResolvedCorrelation {
                family: config.family,
                form,
                parameters,
            },
            temperature: t,
            saturation_pressure: psat,
            range_warning,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn id(&self) -> u32 {
        self.id
    }

    pub fn properties(&self) -> &PureProperties {
        &self.properties
    }

    pub fn correlation(&self) -> &ResolvedCorrelation {
        &self.correlation
    }

    /// Operating temperature in Kelvin.
    pub fn temperature(&self) -> f64 {
        self.temperature
    }

    /// Precomputed saturation pressure in bar.
    pub fn saturation_pressure(&self) -> f64 {
        self.saturation_pressure
    }

    /// The range warning raised during characterization, if any.
    pub fn range_warning(&self) -> Option<&RangeWarning> {
        self.range_warning.as_ref()
    }
}

impl fmt::Display for PureComponent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "PureComponent(name={}, id={}, T={} K, Psat={} bar)",
            self.name, self.id, self.temperature, self.saturation_pressure
        )
    }
}

fn check_range(t: f64, parameters: &VaporPressureParameters) -> Option<RangeWarning> {
    (t < parameters.tmin || t > parameters.tmax).then_some(RangeWarning {
        temperature: t,
        tmin: parameters.tmin,
        tmax: parameters.tmax,
    })
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::errors::PropertyError;
    use crate::store::{BinaryPropertyRecord, ComponentRecord, JsonPropertyStore, VaporPressureRecord};
    use approx::assert_relative_eq;

    fn methane() -> ComponentRecord {
        ComponentRecord {
            id: 1,
            name: "Metano".to_string(),
            properties: PureProperties {
                tc: 190.4,
                pc: 46.0,
                acentric_factor: 0.011,
                molarweight: 16.043,
                radius_of_gyration: 1.118,
                zc: 0.288,
                vc: 99.2,
                dipole_moment: 0.0,
                r: 1.1239,
                q: 1.152,
                ql: 1.152,
                liquid_density: 0.425,
                liquid_density_temperature: 111.0,
            },
        }
    }

    fn methane_vapor_pressure(form: u32) -> VaporPressureRecord {
        VaporPressureRecord {
            component_id: 1,
            form,
            family: CorrelationFamily::Prausnitz4th,
            parameters: VaporPressureParameters {
                a: -6.00435,
                b: 1.1885,
                c: -0.83408,
                d: -1.22833,
                tmin: 91.0,
                tmax: 190.0,
            },
        }
    }

    fn store(vapor_pressure: Vec<VaporPressureRecord>) -> JsonPropertyStore {
        JsonPropertyStore::from_records(vec![methane()], vapor_pressure, Vec::<BinaryPropertyRecord>::new())
            .unwrap()
    }

    #[test]
    fn characterize_methane() -> PropertyResult<()> {
        let store = store(vec![methane_vapor_pressure(1)]);
        let config = CorrelationConfig::new(CorrelationFamily::Prausnitz4th, Some(1));
        let methane = PureComponent::characterize(&store, "Metano", config, 100.0)?;

        assert_eq!(methane.id(), 1);
        assert_eq!(methane.correlation().form, 1);
        assert!(methane.range_warning().is_none());

        // closed form of the reduced-temperature polynomial
        let x: f64 = 1.0 - 100.0 / 190.4;
        let expected = 46.0
            * ((-6.00435 * x + 1.1885 * x.powf(1.5) - 0.83408 * x.powi(3) - 1.22833 * x.powi(6))
                / (1.0 - x))
                .exp();
        assert_relative_eq!(methane.saturation_pressure(), expected, max_relative = 1e-12);
        Ok(())
    }

    #[test]
    fn auto_select_single_form() -> PropertyResult<()> {
        let store = store(vec![methane_vapor_pressure(1)]);
        let methane =
            PureComponent::characterize(&store, "Metano", CorrelationConfig::default(), 100.0)?;
        assert_eq!(methane.correlation().form, 1);
        Ok(())
    }

    #[test]
    fn ambiguous_forms_require_a_choice() {
        let store = store(vec![methane_vapor_pressure(1), methane_vapor_pressure(3)]);
        let result =
            PureComponent::characterize(&store, "Metano", CorrelationConfig::default(), 100.0);
        assert!(matches!(
            result,
            Err(PropertyError::AmbiguousForm(forms)) if forms == vec![1, 3]
        ));
    }

    #[test]
    fn unknown_component_aborts() {
        let store = store(vec![methane_vapor_pressure(1)]);
        let result =
            PureComponent::characterize(&store, "Propano", CorrelationConfig::default(), 100.0);
        assert!(matches!(result, Err(PropertyError::ComponentsNotFound(_))));
    }

    #[test]
    fn range_warning_fires_only_outside_the_range() -> PropertyResult<()> {
        let store = store(vec![methane_vapor_pressure(1)]);
        let config = CorrelationConfig::new(CorrelationFamily::Prausnitz4th, Some(1));

        let cold = PureComponent::characterize(&store, "Metano", config, 85.0)?;
        assert_eq!(
            cold.range_warning(),
            Some(&RangeWarning {
                temperature: 85.0,
                tmin: 91.0,
                tmax: 190.0
            })
        );

        let inside = PureComponent::characterize(&store, "Metano", config, 91.0)?;
        assert!(inside.range_warning().is_none());
        let inside = PureComponent::characterize(&store, "Metano", config, 190.0)?;
        assert!(inside.range_warning().is_none());
        Ok(())
    }

    #[test]
    fn supercritical_temperature_aborts() {
        let store = store(vec![methane_vapor_pressure(1)]);
        let config = CorrelationConfig::new(CorrelationFamily::Prausnitz4th, Some(1));
        let result = PureComponent::characterize(&store, "Metano", config, 250.0);
        assert!(matches!(result, Err(PropertyError::Supercritical(..))));
    }
}

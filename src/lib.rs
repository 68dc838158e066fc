//! Characterization of pure components and binary mixtures from a
//! thermophysical property store.
//!
//! A [PureComponent] is resolved by name against a [PropertyStore],
//! validated, and carries its saturation pressure computed from one of the
//! vapor-pressure correlation forms of Reid, Prausnitz and Poling (The
//! Properties of Gases and Liquids, 4th edition). A [Mixture] aggregates
//! pairwise interaction properties over an ordered component list into
//! matrices consumed by mixing-rule models like [Virial].
#![warn(clippy::all)]

mod component;
mod correlation;
mod errors;
mod mixture;
mod store;

pub use component::{PureComponent, RangeWarning, ResolvedCorrelation};
pub use correlation::{
    resolve_form, saturation_pressure, CorrelationConfig, CorrelationFamily,
    ImplicitSolveOptions, VaporPressureForm, VaporPressureParameters,
};
pub use errors::{PropertyError, PropertyResult};
pub use mixture::{MixingRule, Mixture, Virial};
pub use store::{
    BinaryPropertyRecord, ComponentRecord, JsonPropertyStore, PairProperty, PropertyStore,
    PureProperties, VaporPressureRecord,
};

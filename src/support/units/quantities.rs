use uom::{
    si::{ISQ, Quantity, SI},
    typenum::{N1, N2, P1, P2, Z0},
};

/// Specific enthalpy, J/kg in SI.
pub type SpecificEnthalpy = Quantity<ISQ<P2, Z0, N2, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Thermal diffusivity, m²/s in SI.
pub type ThermalDiffusivity = Quantity<ISQ<P2, Z0, N1, Z0, Z0, Z0, Z0>, SI<f64>, f64>;

/// Temperature change per unit length, K/m in SI.
pub type TemperatureGradient = Quantity<ISQ<N1, Z0, Z0, Z0, P1, Z0, Z0>, SI<f64>, f64>;

/// Specific gas constant, J/(kg·K) in SI.
pub type SpecificGasConstant = Quantity<ISQ<P2, Z0, N2, Z0, N1, Z0, Z0>, SI<f64>, f64>;

//! Definition of the `ActivationKind` enum and the activation functions as well as their
//! derivatives.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde::de::Error as DeError;

use crate::error::NetworkError;


/// Slope used by the leaky rectifier for negative arguments.
pub const LEAKY_SLOPE: f64 = 0.01;


/// Activation function attached to a layer and inherited by each of its neurons.
///
/// Facilitates (de-)serialization through its name.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ActivationKind {
    #[default]
    Identity,
    Sigmoid,
    LeakyRelu,
}


impl ActivationKind {
    /// Name under which the activation kind is (de-)serialized.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Identity => "identity",
            Self::Sigmoid => "sigmoid",
            Self::LeakyRelu => "leaky_relu",
        }
    }

    /// Convenience constructor for known activation functions.
    ///
    /// Names are determined from hard-coded values:
    /// - `identity` (alias `none`)
    /// - `sigmoid`
    /// - `leaky_relu`
    ///
    /// # Returns
    /// The matching kind or [`NetworkError::InvalidActivationKind`].
    pub fn from_name(name: &str) -> Result<Self, NetworkError> {
        match name {
            "identity" | "none" => Ok(Self::Identity),
            "sigmoid" => Ok(Self::Sigmoid),
            "leaky_relu" => Ok(Self::LeakyRelu),
            _ => Err(NetworkError::InvalidActivationKind(name.to_owned())),
        }
    }

    /// Applies the activation function (or its derivative) to `x`.
    pub fn call(&self, x: f64, derivative: bool) -> f64 {
        match self {
            Self::Identity => identity(x, derivative),
            Self::Sigmoid => sigmoid(x, derivative),
            Self::LeakyRelu => leaky_relu(x, derivative),
        }
    }
}


impl fmt::Display for ActivationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}


impl FromStr for ActivationKind {
    type Err = NetworkError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}


/// Numeric selectors: 0 = identity, 1 = sigmoid, 2 = leaky rectifier.
impl TryFrom<u8> for ActivationKind {
    type Error = NetworkError;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(Self::Identity),
            1 => Ok(Self::Sigmoid),
            2 => Ok(Self::LeakyRelu),
            _ => Err(NetworkError::InvalidActivationKind(code.to_string())),
        }
    }
}


/// Allows `serde` to serialize `ActivationKind` values.
impl Serialize for ActivationKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.name())
    }
}


/// Allows `serde` to deserialize to `ActivationKind` values.
impl<'de> Deserialize<'de> for ActivationKind {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let name = String::deserialize(deserializer)?;
        Self::from_name(&name).map_err(D::Error::custom)
    }
}


/// Identity function.
///
/// The derivative branch passes `x` through unchanged as well.
pub fn identity(x: f64, _derivative: bool) -> f64 {
    x
}


/// Logistic sigmoid.
///
/// The derivative expects `x` to already be the activated output.
pub fn sigmoid(x: f64, derivative: bool) -> f64 {
    if derivative {
        return x * (1. - x);
    }
    1. / (1. + (-x).exp())
}


/// Leaky rectified linear unit.
pub fn leaky_relu(x: f64, derivative: bool) -> f64 {
    match (derivative, x < 0.) {
        (false, true) => LEAKY_SLOPE * x,
        (false, false) => x,
        (true, true) => LEAKY_SLOPE,
        (true, false) => 1.,
    }
}

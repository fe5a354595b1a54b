use crate::{packet::activation::ActivationPacket, symbols::Symbol};

/// Multiply every strength by `weight`.
pub fn scale_strengths(weight: f64, strengths: &ActivationPacket<f64>) -> ActivationPacket<f64> {
    strengths.map_values(|_, value| weight * value)
}

/// Replace every strength `w` by `1 - w`.
pub fn invert_strengths(strengths: &ActivationPacket<f64>) -> ActivationPacket<f64> {
    strengths.map_values(|_, value| 1.0 - value)
}

/// Weight each element of a source packet.
///
/// The weight of element `n` is `weights[n]`, else `weights[source]`, else
/// `fill`.
pub fn multiplicative_filter(
    weights: &ActivationPacket<f64>,
    source: &Symbol,
    strengths: &ActivationPacket<f64>,
    fill: f64,
) -> ActivationPacket<f64> {
    let source_weight = weights.get(source).copied();
    strengths.map_values(|node, value| {
        let weight = weights
            .get(node)
            .copied()
            .or(source_weight)
            .unwrap_or(fill);
        weight * value
    })
}

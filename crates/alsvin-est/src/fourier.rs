//! Fourier parameter expansion for QAOA schedules.
//!
//! A depth-p QAOA schedule has 2p angles (γ₁, β₁, …, γ_p, β_p). The Fourier
//! strategy instead optimizes q amplitude pairs (u_k, v_k) and expands them
//! into schedule angles through a discrete trigonometric interpolation:
//!
//!   γ_i = Σ_k u_k · sin[(k − ½)(i − ½)π / p]
//!   β_i = Σ_k v_k · cos[(k − ½)(i − ½)π / p]
//!
//! Low-frequency amplitudes describe smooth schedules with far fewer free
//! parameters than the schedule itself, and a converged amplitude vector
//! carries over unchanged when the layer count p grows.
//!
//! Reference: https://arxiv.org/abs/1812.01041 (eq. 8)
//! "Quantum Approximate Optimization Algorithm: Performance, Mechanism, and
//! Implementation on Near-Term Devices",
//! L. Zhou, S.-T. Wang, S. Choi, H. Pichler, and M. D. Lukin

use std::f64::consts::PI;

use rand::Rng;
use rand_distr::{Distribution, Normal};

use crate::error::{EstError, EstResult};

/// Expand Fourier amplitudes into a depth-`n_layers` QAOA schedule.
///
/// `u_v` interleaves amplitude pairs `[u₁, v₁, u₂, v₂, …]`; the result
/// interleaves schedule angles `[γ₁, β₁, …]` with `2 · n_layers` entries.
/// An odd-length amplitude vector is a validation error.
pub fn convert_u_v_to_gamma_beta(n_layers: usize, u_v: &[f64]) -> EstResult<Vec<f64>> {
    if u_v.len() % 2 != 0 {
        return Err(EstError::UnpairedFourierAmplitudes(u_v.len()));
    }

    let p = n_layers as f64;
    let mut schedule = Vec::with_capacity(2 * n_layers);
    for i in 0..n_layers {
        let mut gamma = 0.0;
        let mut beta = 0.0;
        for (k, pair) in u_v.chunks_exact(2).enumerate() {
            let angle = (k as f64 + 0.5) * (i as f64 + 0.5) * PI / p;
            gamma += pair[0] * angle.sin();
            beta += pair[1] * angle.cos();
        }
        schedule.push(gamma);
        schedule.push(beta);
    }
    Ok(schedule)
}

/// Random restart perturbation for escaping local optima of the amplitude
/// landscape.
///
/// Adds `alpha`-scaled Gaussian noise to every amplitude, with the noise
/// variance set by the amplitude's own magnitude: entries near zero stay
/// near zero while large amplitudes are explored more widely. The input is
/// not modified.
pub fn perturb_params_randomly(params: &[f64], alpha: f64, rng: &mut impl Rng) -> Vec<f64> {
    params
        .iter()
        .map(|&p| {
            let noise = Normal::new(0.0, p.abs().sqrt())
                .map(|dist| dist.sample(rng))
                .unwrap_or(0.0);
            p + alpha * noise
        })
        .collect()
}

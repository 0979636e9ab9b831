//! Numerov integration of the harmonic oscillator's wavefunction.
//!
//! The time-independent Schrödinger equation for this potential has the form
//! ψ'' = -k²(x)·ψ, which the Numerov method integrates with a three-point
//! recurrence accurate to fourth order in the grid spacing. Integrating from
//! one edge of the domain with a tiny seed, the value that arrives at the far
//! edge stays near zero only when the trial energy is an eigenvalue; its sign
//! tells the search in [`crate::search`] which way to move.

use uom::si::{energy::megaelectronvolt, f64::Energy};

/// Wavefunction amplitude at the far edge of the spatial grid.
pub type WaveFunctionValue = f64;

/// Half-width of the spatial domain in the problem's dimensionless length.
const HALF_WIDTH: f64 = 15.0;

/// Coefficient on the trial energy in k², per MeV.
const ENERGY_COEF: f64 = 0.05;

/// Coefficient on the harmonic x² potential in k².
const POTENTIAL_COEF: f64 = 5.63e-3;

/// Seed for ψ at the second grid point; breaks the trivial all-zero solution.
const PSI_SEED: f64 = -1e-9;

/// Local wavenumber squared at grid index `n`, with x measured from the
/// center of the domain.
fn k_squared(energy_mev: f64, h: f64, n: usize) -> f64 {
    let x = h * n as f64 - HALF_WIDTH;
    ENERGY_COEF * energy_mev - (x * x) * POTENTIAL_COEF
}

/// Numerov estimate of ψ at the far boundary for a trial energy in MeV.
///
/// Runs the recurrence over a grid of `iterations` steps spanning the full
/// 30-unit domain, seeded with ψ₀ = 0 and a tiny negative ψ₁. Only a
/// two-value window of ψ is kept; the returned value is the last one
/// computed.
///
/// Deterministic: the result is a pure function of the inputs under IEEE
/// double-precision arithmetic. Fewer than two `iterations` leave the seed
/// value untouched, so the function is total.
#[must_use]
pub fn boundary_psi_mev(energy_mev: f64, iterations: usize) -> WaveFunctionValue {
    let h = (2.0 * HALF_WIDTH) / iterations as f64;
    let h2 = h * h;

    let mut prev = 0.0;
    let mut cur = PSI_SEED;

    for n in 1..iterations {
        let k_prev = k_squared(energy_mev, h, n - 1);
        let k_cur = k_squared(energy_mev, h, n);
        let k_next = k_squared(energy_mev, h, n + 1);

        let mut next = 2.0 * (1.0 - (5.0 * h2 * k_cur / 12.0)) * cur;
        next -= (1.0 + (h2 * k_prev / 12.0)) * prev;
        next /= 1.0 + (h2 * k_next / 12.0);

        prev = cur;
        cur = next;
    }

    cur
}

/// Numerov estimate of ψ at the far boundary for a trial [`Energy`].
#[must_use]
pub fn boundary_psi(energy: Energy, iterations: usize) -> WaveFunctionValue {
    boundary_psi_mev(energy.get::<megaelectronvolt>(), iterations)
}

#[cfg(test)]
mod tests {
    use super::*;

    use approx::assert_relative_eq;

    #[test]
    fn reproduces_the_zero_energy_reference_value() {
        // Golden value captured from a known-correct run at E = 0.
        assert_relative_eq!(
            boundary_psi_mev(0.0, 200),
            -0.091_683_893_092_110_7,
            max_relative = 1e-12
        );
    }

    #[test]
    fn boundary_value_brackets_the_ground_state() {
        // The boundary value crosses zero between 1 and 2 MeV; the analytic
        // ground state for this potential is sqrt(5.63e-3) / 0.05 MeV.
        assert!(boundary_psi_mev(1.0, 200) < 0.0);
        assert!(boundary_psi_mev(2.0, 200) > 0.0);
    }

    #[test]
    fn estimate_is_bit_for_bit_deterministic() {
        for energy_mev in [0.0, 0.5, 1.0, 1.5, 2.0] {
            let first = boundary_psi_mev(energy_mev, 200);
            let second = boundary_psi_mev(energy_mev, 200);
            assert_eq!(first.to_bits(), second.to_bits());
        }
    }

    #[test]
    fn degenerate_grids_return_the_seed() {
        assert_eq!(boundary_psi_mev(5.0, 0), -1e-9);
        assert_eq!(boundary_psi_mev(5.0, 1), -1e-9);
    }

    #[test]
    fn uom_form_matches_the_raw_form() {
        let energy = Energy::new::<megaelectronvolt>(1.5);
        assert_eq!(
            boundary_psi(energy, 200).to_bits(),
            boundary_psi_mev(1.5, 200).to_bits()
        );
    }
}

use std::f64::consts::PI;
use qwell::{ units, well::Well };

// compare the lowest levels of a deep finite well against the infinite-well
// spectrum it approaches, E_n = (ħ²/2m) (n π / L)²

fn main() {
    const DEPTH: f64 = 50.0; // eV
    const WIDTH: f64 = 20.0; // Å
    const LEVELS: usize = 5;

    let well = Well::new(DEPTH, WIDTH).unwrap();
    let infinite = |n: usize| {
        units::energy_from_wavenumber(n as f64 * PI / units::ang_to_m::<f64, f64>(WIDTH))
    };

    // the finite well's levels sit slightly below, since the wavefunction
    // leaks past the edges and sees an effectively wider box of width n π / k
    let states = well.solve();
    println!("{} of {} states:", LEVELS, states.len());
    for (n, state) in states.iter().take(LEVELS).enumerate() {
        let effective: f64
            = units::m_to_ang((n + 1) as f64 * PI / units::wavenumber(state.energy));
        println!(
            "n = {}: infinite {:.5e} eV, computed {:.5e} eV ({:?}), effective width {:.3} Å",
            n + 1, infinite(n + 1), state.energy, state.parity, effective,
        );
    }
}

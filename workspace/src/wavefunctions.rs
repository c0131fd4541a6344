use std::{ fs, path::PathBuf };
use anyhow::Context;
use ndarray as nd;
use ndarray_npy::NpzWriter;
use qwell::{ solve::Parity, well::Well, DEF_POINTS };

// sample every bound state of a finite square well for plotting
//
// writes `output/wavefunctions.npz` with arrays
//   x:      positions (Å)
//   v:      potential (eV)
//   e:      state energies (eV)
//   parity: 0 for even states, 1 for odd
//   wf:     one display-normalized wavefunction per row
//   curves: `e + WAVE_SCALE * depth * wf`, offset for drawing over `v`

const DEPTH: f64 = 0.3; // eV
const WIDTH: f64 = 100.0; // Å
const WAVE_SCALE: f64 = 0.08; // curve amplitude as a fraction of the depth

fn main() -> anyhow::Result<()> {
    let well = Well::new(DEPTH, WIDTH)?;
    let states = well.solve();
    println!("{} states found", states.len());
    if states.is_empty() {
        println!("no bound states; nothing to write");
        return Ok(());
    }

    // plot range: 1.6 well widths, but never narrower than 80 Å
    let xrange = (1.6 * WIDTH).max(80.0);
    let (x_min, x_max) = (-xrange / 2.0, xrange / 2.0);

    let (x, _, v) = well.wavefunction(&states[0]).sample_arrays(x_min, x_max, DEF_POINTS);
    let energies: nd::Array1<f64> = states.iter().map(|state| state.energy).collect();
    let parities: nd::Array1<i64>
        = states.iter()
        .map(|state| match state.parity { Parity::Even => 0, Parity::Odd => 1 })
        .collect();
    let psis: Vec<nd::Array1<f64>>
        = states.iter()
        .map(|state| well.wavefunction(state).sample_arrays(x_min, x_max, DEF_POINTS).1)
        .collect();
    let wfs: nd::Array2<f64>
        = nd::stack(
            nd::Axis(0),
            &psis.iter().map(|psi| psi.view()).collect::<Vec<_>>(),
        )
        .context("couldn't stack wavefunctions")?;
    let curves: nd::Array2<f64>
        = &wfs * (WAVE_SCALE * DEPTH) + &energies.view().insert_axis(nd::Axis(1));

    let outdir = PathBuf::from("output");
    fs::create_dir_all(&outdir)
        .with_context(|| format!("couldn't create {}", outdir.display()))?;
    let outfile = outdir.join("wavefunctions.npz");
    let mut npz = NpzWriter::new(
        fs::File::create(&outfile)
            .with_context(|| format!("couldn't create {}", outfile.display()))?
    );
    npz.add_array("x", &x)?;
    npz.add_array("v", &v)?;
    npz.add_array("e", &energies)?;
    npz.add_array("parity", &parities)?;
    npz.add_array("wf", &wfs)?;
    npz.add_array("curves", &curves)?;
    npz.finish()?;
    println!("wrote {}", outfile.display());
    Ok(())
}

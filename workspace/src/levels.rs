use anyhow::Context;
use qwell::{ solve::{ Parity, Status }, well::Well };

// print the bound-state spectrum of a finite square well
//
// usage: levels [depth (eV)] [width (Å)]

const DEPTH: f64 = 0.3; // eV
const WIDTH: f64 = 100.0; // Å

fn arg_or(args: &mut impl Iterator<Item = String>, name: &str, default: f64)
    -> anyhow::Result<f64>
{
    args.next()
        .map(|s| s.parse::<f64>().with_context(|| format!("invalid {name}: {s:?}")))
        .transpose()
        .map(|val| val.unwrap_or(default))
}

fn main() -> anyhow::Result<()> {
    let mut args = std::env::args().skip(1);
    let depth = arg_or(&mut args, "depth", DEPTH)?;
    let width = arg_or(&mut args, "width", WIDTH)?;
    let well = Well::new(depth, width)?;

    let states = well.solve();
    println!(
        "V0 = {:.4} eV, L = {:.2} Å, z0 = {:.4} ({} states expected)",
        well.depth(), well.width(), well.strength(), well.expected_count(),
    );
    if states.is_empty() {
        println!("no bound states; try a deeper or wider well");
        return Ok(());
    }
    for (n, state) in states.iter().enumerate() {
        let parity = match state.parity {
            Parity::Even => "even",
            Parity::Odd => "odd",
        };
        let flag = match state.status {
            Status::Converged => "",
            Status::MaxIters => " (unconverged)",
        };
        println!(
            "n = {:>3} ({:>4}): E = {:.6} eV{}",
            n + 1, parity, state.energy, flag,
        );
    }
    Ok(())
}

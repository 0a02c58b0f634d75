use crate::models::constants::{GasKind, MAX_RESAMPLES};
use crate::models::errors::GalaxyResult;
use crate::models::planet::Gas;
use crate::prng::Prng;
use crate::services::retry::retry;

/// Number of consecutive gases considered, starting at the first gas.
const GAS_WINDOW: usize = 5;

/// First candidate gas for a temperature class. Colder planets start at
/// hydrogen; hotter ones further down the gas table.
pub fn first_gas(temperature_class: i32) -> GasKind {
    match 100 * temperature_class / 225 {
        i32::MIN..=1 => GasKind::Hydrogen,
        2 => GasKind::Methane,
        3 => GasKind::Helium,
        4 => GasKind::Ammonia,
        5 => GasKind::Nitrogen,
        6 => GasKind::CarbonDioxide,
        7 => GasKind::Oxygen,
        8 => GasKind::HydrogenChloride,
        _ => GasKind::Chlorine,
    }
}

/// Generate an atmosphere. No gases when `pressure_class` is 0; otherwise
/// between one and four gases whose percentages sum to exactly 100.
pub fn generate_gases(
    rng: &mut Prng,
    pressure_class: i32,
    temperature_class: i32,
) -> GalaxyResult<Vec<Gas>> {
    if pressure_class == 0 {
        return Ok(Vec::new());
    }

    let start = first_gas(temperature_class).code() as usize - 1;
    let table = GasKind::ALL;
    let window = &table[start..start + GAS_WINDOW];
    let wanted = ((rng.draw(4) + rng.draw(4)) / 2) as usize;

    let mut gases = retry(MAX_RESAMPLES, || {
        let picked = sample_window(rng, window, wanted, temperature_class);
        (!picked.is_empty()).then_some(picked)
    })
    .or_fail("gas selection")?;

    to_percentages(&mut gases);
    Ok(gases)
}

/// One pass over the window. Each gas is skipped a third of the time;
/// helium two thirds of the time, and always when it is too hot.
fn sample_window(
    rng: &mut Prng,
    window: &[GasKind],
    wanted: usize,
    temperature_class: i32,
) -> Vec<Gas> {
    let mut picked = Vec::new();
    for &kind in window {
        if picked.len() >= wanted {
            break;
        }
        if kind == GasKind::Helium && temperature_class > 5 {
            continue;
        }
        match rng.draw(3) {
            2 if kind == GasKind::Helium => continue,
            3 => continue,
            _ => {}
        }

        let quantity = match kind {
            GasKind::Helium => rng.draw(20),
            GasKind::Oxygen => rng.draw(50),
            _ => rng.draw(100),
        };
        picked.push(Gas::new(kind, quantity));
    }
    picked
}

/// Scale raw quantities to percentages; rounding leftovers go to the first gas.
fn to_percentages(gases: &mut [Gas]) {
    let total: i32 = gases.iter().map(|g| g.percentage).sum();
    let mut assigned = 0;
    for gas in gases.iter_mut() {
        gas.percentage = 100 * gas.percentage / total;
        assigned += gas.percentage;
    }
    if let Some(first) = gases.first_mut() {
        first.percentage += 100 - assigned;
    }
}

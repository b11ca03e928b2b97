//! Source tables -> PTXY dataset.

use tracing::{debug, info};
use vle_core::{PressureUnit, binary_pair, to_pa};

use crate::dataset::{DataPoint, Dataset, DensityGuess, PointKind};
use crate::error::{DataError, DataResult};
use crate::series::TemperatureSeries;
use crate::tables::SourceTables;

/// Convert every series of `tables` into one dataset.
///
/// Points follow series order, then sample order within a series. Duplicate
/// rows are kept. Nothing is produced if any series is ragged or holds a
/// pressure that cannot be converted.
pub fn convert(tables: &SourceTables) -> DataResult<Dataset> {
    let mut data = Vec::with_capacity(tables.sample_count());
    for series in &tables.series {
        let points = convert_series(series, tables.pressure_unit, tables.bibtex.as_deref())?;
        data.extend(points);
    }

    info!(
        components = ?tables.names,
        series = tables.series.len(),
        points = data.len(),
        "converted source tables"
    );
    Ok(Dataset::new(tables.names.clone(), data))
}

/// Convert a single isotherm.
pub fn convert_series(
    series: &TemperatureSeries,
    unit: PressureUnit,
    bibtex: Option<&str>,
) -> DataResult<Vec<DataPoint>> {
    let n = series.check_shape()?;
    let t_k = series.temperature_k;

    let mut points = Vec::with_capacity(n);
    for (i, ((&x2, &y2), &p)) in series
        .x
        .iter()
        .zip(&series.y)
        .zip(&series.p)
        .enumerate()
    {
        let pressure = unit
            .to_pressure(p)
            .map_err(|source| DataError::UnitConversion {
                temperature_k: t_k,
                index: i,
                source,
            })?;
        points.push(DataPoint {
            p_pa: to_pa(pressure),
            t_k,
            x: binary_pair(x2),
            y: binary_pair(y2),
            rho_liquid: DensityGuess::NOT_COMPUTED,
            rho_vapor: DensityGuess::NOT_COMPUTED,
            kind: PointKind::Ptxy,
            bibtex: bibtex.map(str::to_string),
        });
    }

    debug!(temperature_k = t_k, points = points.len(), unit = %unit, "converted series");
    Ok(points)
}

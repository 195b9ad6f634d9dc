use std::path::Path;

use csv::WriterBuilder;
use serde::Serialize;

use crate::disc::{
    eos::IdealGas, mesh::mesh1d::Mesh1d, scalar_registry::ScalarRegistry,
    state::ConservedFields,
};

#[derive(Serialize)]
struct CellData {
    x: f64,
    rho: f64,
    u: f64,
    p: f64,
    rho_e: f64,
    rho_eu: f64,
    // one column per registered scalar
    mass_fractions: Vec<f64>,
}

/// One row per cell: centre, primitive variables, both energies and the
/// mass fraction of every registered scalar.
pub fn write_to_csv(
    fields: &ConservedFields,
    mesh: &Mesh1d,
    eos: &IdealGas,
    registry: &ScalarRegistry,
    filename: &Path,
) -> Result<(), csv::Error> {
    // scalar columns are only known at run time, so the header is written by hand
    let mut writer = WriterBuilder::new()
        .has_headers(false)
        .from_path(filename)?;
    let mut header = vec!["x", "rho", "u", "p", "rho_e", "rho_eu"];
    header.extend(registry.names().iter().map(String::as_str));
    writer.write_record(&header)?;
    let centres = mesh.cell_centres();
    for ielem in 0..mesh.elem_num {
        let rho = fields.rho[ielem];
        let rho_u = fields.momentum(ielem);
        let data = CellData {
            x: centres[ielem],
            rho,
            u: rho_u.x / rho,
            p: eos.pressure(rho, &rho_u, fields.rho_e[ielem]),
            rho_e: fields.rho_e[ielem],
            rho_eu: fields.rho_eu[ielem],
            mass_fractions: fields.rho_scalar.row(ielem).iter().map(|v| v / rho).collect(),
        };
        writer.serialize(data)?;
    }
    writer.flush()?;
    Ok(())
}

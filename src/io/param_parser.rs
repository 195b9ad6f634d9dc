use std::fs;

use serde::Deserialize;

use crate::error::Result;

#[derive(Deserialize, Debug, Clone, PartialEq)]
pub struct StateParser {
    pub rho: f64,
    pub u: f64,
    pub p: f64,
    #[serde(default)]
    pub mass_fractions: Vec<f64>,
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum BoundaryParser {
    Wall,
    ZeroGradient,
    FixedValue(StateParser),
}

fn default_area() -> f64 {
    1.0
}

#[derive(Deserialize, Debug)]
pub struct SolverParamParser {
    pub cfl: f64,
    pub final_time: f64,
    pub final_step: usize,
    pub k_roe: f64,
    pub hcr: f64,
    pub rho_min: f64,
    pub p_min: f64,
    pub cell_num: usize,
    pub left_coord: f64,
    pub right_coord: f64,
    #[serde(default = "default_area")]
    pub area: f64,
    #[serde(default)]
    pub mesh_velocity: f64,
    #[serde(default)]
    pub output_interval: usize,
    #[serde(default)]
    pub output_dir: Option<String>,
    #[serde(default)]
    pub scalars: Vec<String>,
    pub interface: f64,
    pub left_state: StateParser,
    pub right_state: StateParser,
    pub left_boundary: BoundaryParser,
    pub right_boundary: BoundaryParser,
}
impl SolverParamParser {
    pub fn parse(file_path: &str) -> Result<Self> {
        let file_content = fs::read_to_string(file_path)?;
        Self::from_json(&file_content)
    }
    pub fn from_json(content: &str) -> Result<Self> {
        let param: SolverParamParser = serde_json::from_str(content)?;
        Ok(param)
    }
}

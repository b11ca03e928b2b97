//! Ammonia/water VLE measurements of Smolen, Manley and Poling.
//!
//! T. M. Smolen, D. B. Manley, B. E. Poling, "Vapor-Liquid Equilibrium Data
//! for the NH3-H2O System and Its Description with a Modified Cubic Equation
//! of State", J. Chem. Eng. Data 36 (1991) 202-208.
//!
//! Fractions are those of water; pressures are in psia. Repeated rows are
//! replicate measurements and are kept as published.

use vle_core::PressureUnit;

use crate::series::TemperatureSeries;
use crate::species::Species;
use crate::tables::SourceTables;

/// Default output file name for the converted dataset.
pub const OUTPUT_FILE: &str = "PTXY-Smolen.json";

const REFERENCE: &str = "Smolen, Manley, Poling, J. Chem. Eng. Data 36 (1991) 202-208. \
According to NIST TRC the y_H2O values were back-calculated from the equation of state \
rather than measured, so the vapor compositions are not independent data.";

/// The five isotherms (293.15 K to 413.15 K), in ascending temperature.
pub fn smolen_1991() -> SourceTables {
    SourceTables {
        names: [
            Species::Ammonia.fluid_name().to_string(),
            Species::H2O.fluid_name().to_string(),
        ],
        pressure_unit: PressureUnit::Psia,
        bibtex: None,
        reference: Some(REFERENCE.to_string()),
        series: isotherms(),
    }
}

#[rustfmt::skip]
fn isotherms() -> Vec<TemperatureSeries> {
    vec![
        TemperatureSeries {
            temperature_k: 293.15,
            z_ref: vec![
                0.9517, 0.9517, 0.9478, 0.9478, 0.9283, 0.9028, 0.8956, 0.8506, 0.8506, 0.85, 0.85,
                0.8396, 0.8396, 0.8001, 0.8001, 0.7976, 0.7975, 0.7975, 0.7455, 0.7455, 0.699,
                0.698, 0.698, 0.6014, 0.6014, 0.5927, 0.5927, 0.5916, 0.5916, 0.4985, 0.4985,
                0.4973, 0.4973, 0.2992, 0.2992, 0.2972, 0.2972, 0.2074, 0.2074, 0.2074, 0.2074,
                0.1071, 0.1071, 0.0996, 0.0996, 0.099, 0.099, 0.0582, 0.0582, 0.0499, 0.0464,
                0.0464, 0.0461, 0.0461, 0.0451, 0.0395, 0.0395,
            ],
            x: vec![
                0.9518, 0.9518, 0.9479, 0.9479, 0.9284, 0.903, 0.8958, 0.8508, 0.8508, 0.8503,
                0.8503, 0.8399, 0.8399, 0.8004, 0.8004, 0.7979, 0.7979, 0.7979, 0.7456, 0.7456,
                0.6992, 0.6981, 0.6981, 0.6019, 0.6019, 0.5933, 0.5933, 0.5922, 0.5922, 0.4995,
                0.4995, 0.4985, 0.4985, 0.3016, 0.3016, 0.2999, 0.2999, 0.2088, 0.2088, 0.2089,
                0.2089, 0.1083, 0.1083, 0.1006, 0.1006, 0.1, 0.1, 0.0588, 0.0588, 0.0506, 0.0466,
                0.0466, 0.0466, 0.0466, 0.0457, 0.0398, 0.0398,
            ],
            y: vec![
                0.351, 0.351, 0.329, 0.329, 0.246, 0.174, 0.159, 0.0941, 0.0941, 0.0936, 0.0936,
                0.0834, 0.0834, 0.0548, 0.0548, 0.0534, 0.0534, 0.0534, 0.0313, 0.0313, 0.0198,
                0.0196, 0.0196, 0.00783, 0.00783, 0.00722, 0.00722, 0.00715, 0.00715, 0.00309,
                0.00309, 0.00306, 0.00306, 0.000624, 0.000624, 0.000617, 0.000617, 0.000323,
                0.000323, 0.000324, 0.000324, 0.000155, 0.000155, 0.000145, 0.000145, 0.000144,
                0.000144, 9.16e-5, 9.16e-5, 8.06e-5, 7.53e-5, 7.53e-5, 7.54e-5, 7.54e-5,
                7.41e-5, 6.59e-5, 6.59e-5,
            ],
            p: vec![
                0.92, 0.922, 0.952, 0.968, 1.236, 1.686, 1.813, 2.754, 2.814, 2.796, 2.824, 3.064,
                3.116, 4.257, 4.276, 4.42, 4.418, 4.551, 6.805, 6.806, 9.674, 9.855, 9.838, 19.394,
                19.396, 20.593, 20.591, 20.443, 20.432, 36.17, 36.082, 36.395, 36.261, 77.51,
                77.512, 77.829, 77.979, 96.158, 96.15, 96.028, 96.038, 109.317, 109.292, 110.416,
                110.391, 110.508, 110.414, 115.97, 116.009, 117.458, 117.508, 117.434, 117.572,
                117.578, 118.085, 118.417, 118.225,
            ],
        },
        TemperatureSeries {
            temperature_k: 323.15,
            z_ref: vec![
                0.9517, 0.9517, 0.9478, 0.9478, 0.9283, 0.9028, 0.9028, 0.8956, 0.8956, 0.8506,
                0.8506, 0.85, 0.85, 0.8396, 0.8396, 0.8001, 0.8001, 0.7976, 0.7975, 0.7975, 0.7455,
                0.7455, 0.699, 0.698, 0.698, 0.6014, 0.6014, 0.5927, 0.5927, 0.5916, 0.5916,
                0.4985, 0.4985, 0.4973, 0.4973, 0.2992, 0.2992, 0.2972, 0.2972, 0.2074, 0.2074,
                0.2074, 0.2074, 0.1071, 0.0996, 0.099, 0.0582, 0.0499, 0.0464, 0.0464, 0.0461,
                0.0451, 0.0395, 0.0395,
            ],
            x: vec![
                0.9517, 0.9519, 0.9481, 0.9481, 0.9287, 0.9033, 0.9033, 0.8962, 0.8962, 0.8513,
                0.8513, 0.8509, 0.8509, 0.8404, 0.8404, 0.801, 0.801, 0.7986, 0.7987, 0.7987,
                0.7457, 0.7457, 0.6994, 0.6983, 0.6983, 0.6028, 0.6028, 0.5943, 0.5943, 0.5932,
                0.5932, 0.5009, 0.5009, 0.5001, 0.5001, 0.3046, 0.3046, 0.3033, 0.3033, 0.2107,
                0.2107, 0.2104, 0.2104, 0.1099, 0.1017, 0.1013, 0.0596, 0.0513, 0.0468, 0.0468,
                0.0473, 0.0464, 0.04, 0.04,
            ],
            y: vec![
                0.441, 0.441, 0.419, 0.419, 0.325, 0.241, 0.241, 0.222, 0.222, 0.139, 0.139, 0.139,
                0.139, 0.125, 0.125, 0.0864, 0.0864, 0.0845, 0.0846, 0.0846, 0.0529, 0.0529,
                0.0359, 0.0356, 0.0356, 0.0168, 0.0168, 0.0158, 0.0158, 0.0157, 0.0157, 0.00814,
                0.00814, 0.0081, 0.0081, 0.00249, 0.00249, 0.00247, 0.00247, 0.0015, 0.0015,
                0.0015, 0.0015, 0.000803, 0.000752, 0.000749, 0.000479, 0.000422, 0.00039, 0.00039,
                0.000393, 0.000386, 0.00034, 0.00034,
            ],
            p: vec![
                3.881, 3.885, 4.051, 4.044, 5.02, 6.486, 6.506, 6.951, 6.979, 10.192, 10.199,
                10.247, 10.275, 11.199, 11.231, 15.004, 15.029, 15.449, 15.432, 15.515, 22.532,
                22.532, 30.772, 31.102, 31.037, 56.173, 56.125, 59.079, 59.008, 58.713, 58.657,
                94.808, 94.776, 95.384, 95.486, 183.693, 183.723, 184.491, 184.575, 225.414,
                225.205, 225.433, 225.416, 256.696, 259.31, 259.487, 272.975, 277.271, 277.004,
                276.572, 277.403, 278.262, 279.695, 278.715,
            ],
        },
        TemperatureSeries {
            temperature_k: 353.15,
            z_ref: vec![
                0.9517, 0.9517, 0.9478, 0.9478, 0.9283, 0.9028, 0.9028, 0.8956, 0.8956, 0.8506,
                0.8506, 0.8506, 0.85, 0.85, 0.85, 0.8396, 0.8396, 0.8396, 0.8001, 0.8001, 0.7976,
                0.7975, 0.7975, 0.699, 0.7455, 0.7455, 0.698, 0.698, 0.6014, 0.6014, 0.5927,
                0.5927, 0.5916, 0.5916, 0.4985, 0.4985, 0.4973, 0.4973, 0.2992, 0.2972, 0.2074,
                0.2074,
            ],
            x: vec![
                0.9522, 0.9522, 0.9485, 0.9485, 0.9292, 0.9039, 0.9039, 0.897, 0.897, 0.8522,
                0.8522, 0.8522, 0.852, 0.852, 0.852, 0.8415, 0.8415, 0.8415, 0.8022, 0.8022, 0.8,
                0.8002, 0.8002, 0.6998, 0.7458, 0.7458, 0.6985, 0.6985, 0.6042, 0.6042, 0.5959,
                0.5959, 0.5948, 0.5948, 0.5033, 0.5033, 0.5028, 0.5028, 0.3096, 0.3089, 0.2131,
                0.2136,
            ],
            y: vec![
                0.522, 0.522, 0.5, 0.5, 0.404, 0.312, 0.312, 0.292, 0.292, 0.195, 0.195, 0.195,
                0.194, 0.194, 0.194, 0.178, 0.178, 0.178, 0.129, 0.129, 0.127, 0.127, 0.127, 0.061,
                0.0844, 0.0844, 0.0605, 0.0605, 0.0329, 0.0329, 0.0313, 0.0313, 0.0311, 0.0311,
                0.0184, 0.0184, 0.0184, 0.0184, 0.00742, 0.0074, 0.00499, 0.005,
            ],
            p: vec![
                12.652, 12.647, 13.139, 13.141, 15.845, 19.777, 19.756, 21.016, 20.993, 29.36,
                29.577, 29.372, 29.559, 29.665, 29.656, 31.875, 32.055, 32.053, 41.491, 41.481,
                42.431, 42.34, 42.312, 78.385, 59.508, 59.516, 78.766, 78.798, 131.112, 131.314,
                136.75, 136.723, 135.965, 136.132, 204.82, 204.58, 206.243, 205.804, 367.86,
                369.466, 448.911, 449.592,
            ],
        },
        TemperatureSeries {
            temperature_k: 383.15,
            z_ref: vec![
                0.9517, 0.9517, 0.9478, 0.9478, 0.9283, 0.9283, 0.9028, 0.9028, 0.8956, 0.8956,
                0.8506, 0.8506, 0.8506, 0.85, 0.85, 0.85, 0.8396, 0.8396, 0.8396, 0.8001, 0.8001,
                0.7976, 0.7976, 0.7975, 0.7975, 0.7455, 0.698, 0.698, 0.4985, 0.4973, 0.6014,
                0.5927, 0.5916,
            ],
            x: vec![
                0.9528, 0.9528, 0.9492, 0.9492, 0.9301, 0.9301, 0.905, 0.905, 0.8984, 0.8984,
                0.8538, 0.8538, 0.8538, 0.854, 0.854, 0.854, 0.8434, 0.8434, 0.8434, 0.8043,
                0.8043, 0.8022, 0.8022, 0.8027, 0.8027, 0.7461, 0.699, 0.699, 0.5069, 0.507,
                0.6064, 0.5985, 0.5974,
            ],
            y: vec![
                0.589, 0.589, 0.569, 0.569, 0.475, 0.475, 0.382, 0.382, 0.362, 0.362, 0.256, 0.256,
                0.256, 0.256, 0.256, 0.256, 0.237, 0.237, 0.237, 0.18, 0.18, 0.178, 0.178, 0.179,
                0.179, 0.124, 0.0939, 0.0939, 0.0354, 0.0354, 0.0568, 0.0546, 0.0543,
            ],
            p: vec![
                33.859, 33.807, 35.003, 35.008, 40.977, 41.135, 49.727, 49.64, 52.489, 52.257,
                70.333, 70.169, 70.457, 70.578, 71.072, 70.507, 75.415, 75.995, 75.862, 95.405,
                95.242, 97.031, 96.976, 96.656, 96.617, 132.339, 168.502, 168.371, 383.037,
                384.921, 260.233, 269.881, 269.052,
            ],
        },
        TemperatureSeries {
            temperature_k: 413.15,
            z_ref: vec![
                0.9517, 0.9478, 0.9283, 0.9028, 0.8956, 0.8506, 0.85, 0.8396, 0.8001, 0.7976,
                0.7975, 0.698,
            ],
            x: vec![
                0.9536, 0.9503, 0.9314, 0.9066, 0.9004, 0.856, 0.8567, 0.846, 0.807, 0.8053,
                0.8061, 0.6995,
            ],
            y: vec![
                0.655, 0.638, 0.549, 0.457, 0.437, 0.325, 0.326, 0.305, 0.241, 0.238, 0.239, 0.133,
            ],
            p: vec![
                77.61, 79.696, 91.33, 107.787, 112.246, 145.576, 146.115, 154.521, 189.506,
                193.174, 192.251, 316.668,
            ],
        },
    ]
}

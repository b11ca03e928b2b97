//! Read-only reports over a finished dataset.

use vle_core::{Tolerances, nearly_equal};

use crate::dataset::Dataset;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Liquid,
    Vapor,
}

impl std::fmt::Display for Phase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Phase::Liquid => f.write_str("liquid"),
            Phase::Vapor => f.write_str("vapor"),
        }
    }
}

/// Something odd about a single point. Reported, never corrected.
#[derive(Debug, Clone, PartialEq)]
pub enum Finding {
    CompositionSum { index: usize, phase: Phase, sum: f64 },
    NonFinite { index: usize, field: &'static str },
}

impl std::fmt::Display for Finding {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Finding::CompositionSum { index, phase, sum } => {
                write!(f, "point {index}: {phase} composition sums to {sum}")
            }
            Finding::NonFinite { index, field } => {
                write!(f, "point {index}: non-finite {field}")
            }
        }
    }
}

/// Point count and pressure span of one isotherm.
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureSummary {
    pub temperature_k: f64,
    pub points: usize,
    pub p_min_pa: f64,
    pub p_max_pa: f64,
}

impl Dataset {
    /// Scan all points for non-unit composition sums and non-finite values.
    pub fn check(&self) -> Vec<Finding> {
        let mut findings = Vec::new();
        for (index, pt) in self.points().iter().enumerate() {
            for (field, v) in [("p (Pa)", pt.p_pa), ("T (K)", pt.t_k)] {
                if !v.is_finite() {
                    findings.push(Finding::NonFinite { index, field });
                }
            }
            for (phase, pair) in [(Phase::Liquid, pt.x), (Phase::Vapor, pt.y)] {
                let sum = pair[0] + pair[1];
                if !nearly_equal(sum, 1.0, Tolerances::FRACTION_SUM) {
                    findings.push(Finding::CompositionSum { index, phase, sum });
                }
            }
        }
        findings
    }

    /// Per-temperature summary in order of first appearance.
    pub fn summary(&self) -> Vec<TemperatureSummary> {
        let mut out: Vec<TemperatureSummary> = Vec::new();
        for pt in self.points() {
            match out.iter_mut().find(|s| s.temperature_k == pt.t_k) {
                Some(s) => {
                    s.points += 1;
                    s.p_min_pa = s.p_min_pa.min(pt.p_pa);
                    s.p_max_pa = s.p_max_pa.max(pt.p_pa);
                }
                None => out.push(TemperatureSummary {
                    temperature_k: pt.t_k,
                    points: 1,
                    p_min_pa: pt.p_pa,
                    p_max_pa: pt.p_pa,
                }),
            }
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{DataPoint, DensityGuess, PointKind};

    fn pt(t_k: f64, p_pa: f64, x: [f64; 2], y: [f64; 2]) -> DataPoint {
        DataPoint {
            p_pa,
            t_k,
            x,
            y,
            rho_liquid: DensityGuess::NOT_COMPUTED,
            rho_vapor: DensityGuess::NOT_COMPUTED,
            kind: PointKind::Ptxy,
            bibtex: None,
        }
    }

    fn names() -> [String; 2] {
        ["Ammonia".to_string(), "Water".to_string()]
    }

    #[test]
    fn clean_dataset_has_no_findings() {
        let ds = Dataset::new(names(), vec![pt(300.0, 1.0, [0.3, 0.7], [0.9, 0.1])]);
        assert!(ds.check().is_empty());
    }

    #[test]
    fn bad_sums_and_nan_are_reported() {
        let ds = Dataset::new(
            names(),
            vec![
                pt(300.0, 1.0, [0.3, 0.6], [0.9, 0.1]),
                pt(300.0, f64::NAN, [0.3, 0.7], [0.5, 0.6]),
            ],
        );
        let findings = ds.check();
        assert_eq!(findings.len(), 3);
        assert!(matches!(
            findings[0],
            Finding::CompositionSum {
                index: 0,
                phase: Phase::Liquid,
                ..
            }
        ));
        assert_eq!(
            findings[1],
            Finding::NonFinite {
                index: 1,
                field: "p (Pa)"
            }
        );
        assert!(findings[2].to_string().contains("vapor"));
    }

    #[test]
    fn summary_groups_by_first_appearance() {
        let ds = Dataset::new(
            names(),
            vec![
                pt(350.0, 5.0, [0.5, 0.5], [0.5, 0.5]),
                pt(300.0, 2.0, [0.5, 0.5], [0.5, 0.5]),
                pt(350.0, 1.0, [0.5, 0.5], [0.5, 0.5]),
            ],
        );
        let summary = ds.summary();
        assert_eq!(summary.len(), 2);
        assert_eq!(summary[0].temperature_k, 350.0);
        assert_eq!(summary[0].points, 2);
        assert_eq!(summary[0].p_min_pa, 1.0);
        assert_eq!(summary[0].p_max_pa, 5.0);
        assert_eq!(summary[1].points, 1);
    }
}

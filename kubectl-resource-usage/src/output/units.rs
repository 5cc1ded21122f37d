use clap::ValueEnum;

const KI: i64 = 1024;
const MI: i64 = KI * 1024;
const GI: i64 = MI * 1024;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub(crate) enum Unit {
    /// Millicores for CPU, largest fitting binary unit for memory
    #[default]
    Auto,
    #[value(name = "Ki")]
    Ki,
    #[value(name = "Mi")]
    Mi,
    #[value(name = "Gi")]
    Gi,
    /// Millicores
    #[value(name = "m")]
    Millicores,
    Cores,
}

/// Renders raw quantities (millicores, bytes) under the selected unit policy.
#[derive(Clone, Copy, Debug)]
pub(crate) struct UnitFormatter {
    unit: Unit,
}

impl UnitFormatter {
    pub(crate) fn new(unit: Unit) -> Self {
        Self { unit }
    }

    pub(crate) fn format_cpu(&self, milli_cores: i64) -> String {
        match self.unit {
            Unit::Cores => {
                let cores = milli_cores as f64 / 1000.0;
                if cores >= 1.0 {
                    format!("{cores:.1}")
                } else {
                    format!("{cores:.2}")
                }
            }
            // memory units have no meaning for CPU; fall back to millicores
            _ => format!("{milli_cores}m"),
        }
    }

    pub(crate) fn format_memory(&self, bytes: i64) -> String {
        match self.unit {
            Unit::Ki => format!("{}Ki", bytes / KI),
            Unit::Mi => format!("{}Mi", bytes / MI),
            Unit::Gi => {
                if bytes >= GI {
                    format!("{}Gi", bytes / GI)
                } else {
                    format!("{:.2}Gi", bytes as f64 / GI as f64)
                }
            }
            _ => match bytes {
                b if b >= GI => format!("{}Gi", b / GI),
                b if b >= MI => format!("{}Mi", b / MI),
                b if b >= KI => format!("{}Ki", b / KI),
                b => format!("{b}"),
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpu_defaults_to_millicores() {
        let formatter = UnitFormatter::new(Unit::Auto);
        assert_eq!(formatter.format_cpu(250), "250m");
        assert_eq!(formatter.format_cpu(1500), "1500m");
        assert_eq!(UnitFormatter::new(Unit::Millicores).format_cpu(250), "250m");
    }

    #[test]
    fn cpu_cores_varies_precision() {
        let formatter = UnitFormatter::new(Unit::Cores);
        assert_eq!(formatter.format_cpu(1500), "1.5");
        assert_eq!(formatter.format_cpu(2000), "2.0");
        assert_eq!(formatter.format_cpu(250), "0.25");
    }

    #[test]
    fn memory_explicit_units_truncate() {
        assert_eq!(UnitFormatter::new(Unit::Ki).format_memory(10 * KI), "10Ki");
        assert_eq!(UnitFormatter::new(Unit::Mi).format_memory(1536 * KI), "1Mi");
        assert_eq!(UnitFormatter::new(Unit::Gi).format_memory(3 * GI), "3Gi");
    }

    #[test]
    fn memory_gi_below_one_uses_decimals() {
        let formatter = UnitFormatter::new(Unit::Gi);
        assert_eq!(formatter.format_memory(512 * MI), "0.50Gi");
        assert_eq!(formatter.format_memory(256 * MI), "0.25Gi");
    }

    #[test]
    fn memory_auto_picks_largest_unit() {
        let formatter = UnitFormatter::new(Unit::Auto);
        assert_eq!(formatter.format_memory(2 * GI), "2Gi");
        assert_eq!(formatter.format_memory(256 * MI), "256Mi");
        assert_eq!(formatter.format_memory(10 * KI), "10Ki");
        assert_eq!(formatter.format_memory(512), "512");
    }
}

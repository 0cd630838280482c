use std::fmt;

/// 다루는 물리량 종류를 나타낸다.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuantityKind {
    Pressure,
    Temperature,
    Density,
}

impl QuantityKind {
    /// 각 물리량의 내부 기준 단위 태그.
    pub fn base_unit(self) -> &'static str {
        match self {
            QuantityKind::Pressure => "kPa",
            QuantityKind::Temperature => "K",
            QuantityKind::Density => "kg/m3",
        }
    }
}

impl fmt::Display for QuantityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            QuantityKind::Pressure => "pressure",
            QuantityKind::Temperature => "temperature",
            QuantityKind::Density => "density",
        };
        f.write_str(name)
    }
}

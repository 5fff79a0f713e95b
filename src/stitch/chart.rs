//! Procedural stitch charts.
//!
//! Every supported pattern is a closed-form rule over (row, column), so a
//! chart is just the rule evaluated for each cell. Rows are 0-indexed in
//! generation order; the exporter takes care of the bottom-to-top display.

use std::fmt;
use std::str::FromStr;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::error::{KnitError, Result};

/// A single chart cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Stitch {
    #[serde(rename = "K")]
    Knit,
    #[serde(rename = "P")]
    Purl,
    #[serde(rename = "YO")]
    YarnOver,
    #[serde(rename = "K2tog")]
    KnitTwoTogether,
}

impl Stitch {
    /// Every symbol a chart can contain, in legend order.
    pub const ALL: [Stitch; 4] = [
        Stitch::Knit,
        Stitch::Purl,
        Stitch::YarnOver,
        Stitch::KnitTwoTogether,
    ];

    /// The chart symbol.
    pub fn symbol(&self) -> &'static str {
        match self {
            Stitch::Knit => "K",
            Stitch::Purl => "P",
            Stitch::YarnOver => "YO",
            Stitch::KnitTwoTogether => "K2tog",
        }
    }

    /// Plain-language meaning used in the legend.
    pub fn meaning(&self) -> &'static str {
        match self {
            Stitch::Knit => "knit",
            Stitch::Purl => "purl",
            Stitch::YarnOver => "yarn over",
            Stitch::KnitTwoTogether => "knit two together",
        }
    }
}

impl fmt::Display for Stitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Rows of cells, first generated row first.
pub type Chart = Vec<Vec<Stitch>>;

/// Symbol → meaning, in a stable order.
///
/// Generated charts always carry the same four entries regardless of which
/// symbols the pattern actually uses.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Legend(Vec<(String, String)>);

impl Legend {
    /// The shared four-symbol legend.
    pub fn standard() -> Self {
        Self(
            Stitch::ALL
                .iter()
                .map(|s| (s.symbol().to_string(), s.meaning().to_string()))
                .collect(),
        )
    }

    pub fn get(&self, symbol: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(s, _)| s == symbol)
            .map(|(_, meaning)| meaning.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(s, m)| (s.as_str(), m.as_str()))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Serialize for Legend {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (symbol, meaning) in &self.0 {
            map.serialize_entry(symbol, meaning)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for Legend {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        struct LegendVisitor;

        impl<'de> Visitor<'de> for LegendVisitor {
            type Value = Legend;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of chart symbol to meaning")
            }

            fn visit_map<A: MapAccess<'de>>(
                self,
                mut access: A,
            ) -> std::result::Result<Legend, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((symbol, meaning)) = access.next_entry::<String, String>()? {
                    entries.push((symbol, meaning));
                }
                Ok(Legend(entries))
            }
        }

        deserializer.deserialize_map(LegendVisitor)
    }
}

/// Supported stitch-pattern families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StitchPattern {
    Garter,
    Stockinette,
    Rib1x1,
    Rib2x2,
    Seed,
    LaceMesh,
}

impl StitchPattern {
    pub const ALL: [StitchPattern; 6] = [
        StitchPattern::Garter,
        StitchPattern::Stockinette,
        StitchPattern::Rib1x1,
        StitchPattern::Rib2x2,
        StitchPattern::Seed,
        StitchPattern::LaceMesh,
    ];

    /// Canonical identifier.
    pub fn name(&self) -> &'static str {
        match self {
            StitchPattern::Garter => "garter",
            StitchPattern::Stockinette => "stockinette",
            StitchPattern::Rib1x1 => "rib1x1",
            StitchPattern::Rib2x2 => "rib2x2",
            StitchPattern::Seed => "seed",
            StitchPattern::LaceMesh => "lace_mesh",
        }
    }

    /// The stitch at `(row, col)` in a chart `width` columns wide.
    pub fn cell(&self, row: usize, col: usize, width: usize) -> Stitch {
        use Stitch::{Knit, KnitTwoTogether, Purl, YarnOver};

        match self {
            StitchPattern::Garter => Knit,
            StitchPattern::Stockinette => {
                if row % 2 == 0 {
                    Knit
                } else {
                    Purl
                }
            }
            StitchPattern::Rib1x1 => [Knit, Purl][col % 2],
            StitchPattern::Rib2x2 => [Knit, Knit, Purl, Purl][col % 4],
            StitchPattern::Seed => {
                if (row + col) % 2 == 0 {
                    Knit
                } else {
                    Purl
                }
            }
            StitchPattern::LaceMesh => {
                if row % 2 == 1 {
                    Knit
                } else if col % 2 == 1 {
                    KnitTwoTogether
                } else if col + 1 < width {
                    YarnOver
                } else {
                    // a pair with no partner column
                    Knit
                }
            }
        }
    }

    /// Evaluate the pattern over a `width` × `height` grid.
    pub fn chart(&self, width: usize, height: usize) -> Chart {
        (0..height)
            .map(|row| (0..width).map(|col| self.cell(row, col, width)).collect())
            .collect()
    }
}

impl fmt::Display for StitchPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for StitchPattern {
    type Err = KnitError;

    /// Case-insensitive; surrounding whitespace is ignored.
    fn from_str(s: &str) -> Result<Self> {
        let wanted = s.trim();
        StitchPattern::ALL
            .into_iter()
            .find(|p| p.name().eq_ignore_ascii_case(wanted))
            .ok_or_else(|| KnitError::InvalidPattern(s.to_string()))
    }
}

/// A generated chart together with its metadata and legend.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChartResult {
    pub pattern: String,
    pub width: usize,
    pub height: usize,
    pub chart: Chart,
    pub legend: Legend,
}

impl ChartResult {
    /// Check the row/column invariants. Charts coming from
    /// [`generate_chart`] always pass; deserialized ones might not.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(KnitError::InvalidArgument(format!(
                "chart dimensions must be positive, got {}x{}",
                self.width, self.height
            )));
        }
        if self.chart.len() != self.height {
            return Err(KnitError::InvalidArgument(format!(
                "chart has {} rows, expected {}",
                self.chart.len(),
                self.height
            )));
        }
        if let Some((idx, row)) = self
            .chart
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != self.width)
        {
            return Err(KnitError::InvalidArgument(format!(
                "row {} has {} cells, expected {}",
                idx,
                row.len(),
                self.width
            )));
        }
        Ok(())
    }
}

/// Largest number of cells a single chart may hold.
pub const MAX_CHART_CELLS: usize = 1_000_000;

/// Generate a chart for `pattern` (case-insensitive).
///
/// Fails with [`KnitError::InvalidPattern`] for unknown patterns and
/// [`KnitError::InvalidArgument`] when either dimension is zero or the
/// grid would exceed [`MAX_CHART_CELLS`].
pub fn generate_chart(pattern: &str, width: usize, height: usize) -> Result<ChartResult> {
    let stitch_pattern: StitchPattern = pattern.parse()?;

    if width == 0 || height == 0 {
        return Err(KnitError::InvalidArgument(format!(
            "width and height must be positive, got {}x{}",
            width, height
        )));
    }

    match width.checked_mul(height) {
        Some(cells) if cells <= MAX_CHART_CELLS => {}
        _ => {
            return Err(KnitError::InvalidArgument(format!(
                "chart of {}x{} exceeds the {} cell limit",
                width, height, MAX_CHART_CELLS
            )));
        }
    }

    debug!(pattern = %stitch_pattern, width, height, "generating chart");

    Ok(ChartResult {
        pattern: stitch_pattern.name().to_string(),
        width,
        height,
        chart: stitch_pattern.chart(width, height),
        legend: Legend::standard(),
    })
}

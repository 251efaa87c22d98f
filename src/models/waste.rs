use serde::{Deserialize, Serialize};

// ---------- Types ----------

/// Waste category tracked by the collection metrics.
/// Declaration order drives tile order, bar order within a month and legend order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WasteCategory {
    Plastic,
    Organic,
    Metal,
}

impl WasteCategory {
    pub const ALL: [WasteCategory; 3] = [
        WasteCategory::Plastic,
        WasteCategory::Organic,
        WasteCategory::Metal,
    ];

    pub fn label(self) -> &'static str {
        match self {
            WasteCategory::Plastic => "Plastic",
            WasteCategory::Organic => "Organic",
            WasteCategory::Metal => "Metal",
        }
    }

    /// Series fill colour used by the chart and legend.
    pub fn colour(self) -> &'static str {
        match self {
            WasteCategory::Plastic => "#38b2ac",
            WasteCategory::Organic => "#68d391",
            WasteCategory::Metal => "#f6ad55",
        }
    }
}

/// One month of collected waste, in kilograms per category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WasteSample {
    pub month: String,
    pub plastic: u32,
    pub organic: u32,
    pub metal: u32,
}

impl WasteSample {
    pub fn new(month: &str, plastic: u32, organic: u32, metal: u32) -> Self {
        Self {
            month: month.to_string(),
            plastic,
            organic,
            metal,
        }
    }

    pub fn amount(&self, category: WasteCategory) -> u32 {
        match category {
            WasteCategory::Plastic => self.plastic,
            WasteCategory::Organic => self.organic,
            WasteCategory::Metal => self.metal,
        }
    }

    /// Largest single-category amount in this sample.
    pub fn peak(&self) -> u32 {
        self.plastic.max(self.organic).max(self.metal)
    }
}

/// A "this month" tile on the overview tab.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTile {
    pub category: WasteCategory,
    pub amount: Option<u32>,
}

impl SummaryTile {
    pub fn title(&self) -> String {
        format!("{} Waste", self.category.label())
    }

    pub fn display_value(&self) -> String {
        match self.amount {
            Some(kg) => format!("{kg} kg"),
            None => "No data".to_string(),
        }
    }

    pub fn has_data(&self) -> bool {
        self.amount.is_some()
    }
}

// ---------- Derivations ----------

/// The most recent sample, chosen by position in the sequence.
///
/// Samples are expected in chronological order, but this never compares
/// month labels: an upstream reordering changes which sample is "latest".
pub fn latest_sample(samples: &[WasteSample]) -> Option<&WasteSample> {
    samples.last()
}

/// One tile per category, valued from the latest sample.
/// An empty sequence still yields all three tiles, each without an amount.
pub fn summary_tiles(samples: &[WasteSample]) -> Vec<SummaryTile> {
    let latest = latest_sample(samples);
    WasteCategory::ALL
        .iter()
        .map(|&category| SummaryTile {
            category,
            amount: latest.map(|s| s.amount(category)),
        })
        .collect()
}

/// Largest amount across every sample and category; 0 for an empty sequence.
pub fn peak_amount(samples: &[WasteSample]) -> u32 {
    samples.iter().map(WasteSample::peak).max().unwrap_or(0)
}

use super::waste::{WasteCategory, WasteSample, peak_amount};

pub const CHART_WIDTH: f64 = 720.0;
pub const CHART_HEIGHT: f64 = 320.0;

const MARGIN_LEFT: f64 = 48.0;
const MARGIN_RIGHT: f64 = 16.0;
const MARGIN_TOP: f64 = 16.0;
const MARGIN_BOTTOM: f64 = 32.0;
/// Fraction of a month's slot left empty on each side of its bar group.
const GROUP_PADDING: f64 = 0.1;
const TARGET_TICKS: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Bar {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
    pub fill: &'static str,
    pub tooltip: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Tick {
    pub value: u64,
    pub y: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AxisLabel {
    pub text: String,
    pub x: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LegendEntry {
    pub label: &'static str,
    pub colour: &'static str,
}

/// Geometry of the grouped bar chart, ready for the SVG template.
/// One group per sample in sequence order, one bar per category inside it.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLayout {
    pub width: f64,
    pub height: f64,
    pub plot_left: f64,
    pub plot_right: f64,
    pub plot_top: f64,
    pub plot_bottom: f64,
    pub ticks: Vec<Tick>,
    pub months: Vec<AxisLabel>,
    pub bars: Vec<Bar>,
    pub legend: Vec<LegendEntry>,
}

impl ChartLayout {
    pub fn build(samples: &[WasteSample], width: f64, height: f64) -> Self {
        let plot_left = MARGIN_LEFT;
        let plot_right = (width - MARGIN_RIGHT).max(plot_left);
        let plot_top = MARGIN_TOP;
        let plot_bottom = (height - MARGIN_BOTTOM).max(plot_top);
        let plot_height = plot_bottom - plot_top;

        let tick_values = nice_ticks(peak_amount(samples), TARGET_TICKS);
        let domain_max = tick_values.last().copied().unwrap_or(0);
        let scale = |value: u64| -> f64 {
            if domain_max == 0 {
                0.0
            } else {
                value as f64 / domain_max as f64 * plot_height
            }
        };

        let ticks = tick_values
            .iter()
            .map(|&value| Tick { value, y: round1(plot_bottom - scale(value)) })
            .collect();

        let mut months = Vec::with_capacity(samples.len());
        let mut bars = Vec::with_capacity(samples.len() * WasteCategory::ALL.len());

        if !samples.is_empty() {
            let slot = (plot_right - plot_left) / samples.len() as f64;
            let padding = slot * GROUP_PADDING;
            let bar_width = (slot - 2.0 * padding) / WasteCategory::ALL.len() as f64;

            for (i, sample) in samples.iter().enumerate() {
                let slot_left = plot_left + slot * i as f64;
                months.push(AxisLabel {
                    text: sample.month.clone(),
                    x: round1(slot_left + slot / 2.0),
                });

                for (j, category) in WasteCategory::ALL.iter().enumerate() {
                    let amount = sample.amount(*category);
                    let bar_height = scale(u64::from(amount));
                    bars.push(Bar {
                        x: round1(slot_left + padding + bar_width * j as f64),
                        y: round1(plot_bottom - bar_height),
                        width: round1(bar_width),
                        height: round1(bar_height),
                        fill: category.colour(),
                        tooltip: format!("{} · {}: {} kg", sample.month, category.label(), amount),
                    });
                }
            }
        }

        let legend = WasteCategory::ALL
            .iter()
            .map(|c| LegendEntry { label: c.label(), colour: c.colour() })
            .collect();

        Self {
            width,
            height,
            plot_left,
            plot_right,
            plot_top,
            plot_bottom,
            ticks,
            months,
            bars,
            legend,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn domain_max(&self) -> u64 {
        self.ticks.last().map(|t| t.value).unwrap_or(0)
    }

    /// `viewBox` attribute for the SVG root.
    pub fn view_box(&self) -> String {
        format!("0 0 {} {}", self.width, self.height)
    }

    /// Right edge of the y-axis tick labels.
    pub fn tick_label_x(&self) -> f64 {
        self.plot_left - 8.0
    }

    /// Baseline of the month labels under the x-axis.
    pub fn month_label_y(&self) -> f64 {
        self.plot_bottom + 20.0
    }
}

/// Evenly spaced y-axis values from 0 covering `max`, stepping by
/// 1, 2, 2.5 or 5 times a power of ten. Steps are whole kilograms.
/// Values are `u64` since the top tick may exceed `u32::MAX`.
pub fn nice_ticks(max: u32, target: usize) -> Vec<u64> {
    if max == 0 {
        return vec![0];
    }
    let intervals = target.saturating_sub(1).max(1) as f64;
    let raw_step = f64::from(max) / intervals;
    let magnitude = 10f64.powi(raw_step.log10().floor() as i32);
    let normalized = raw_step / magnitude;
    let multiplier = [1.0, 2.0, 2.5, 5.0, 10.0]
        .into_iter()
        .find(|m| *m >= normalized)
        .unwrap_or(10.0);
    // Below 1 kg the step collapses to 1; 2.5 rounds up to 3.
    let step = ((multiplier * magnitude).round() as u64).max(1);
    let count = u64::from(max).div_ceil(step);
    (0..=count).map(|i| i * step).collect()
}

fn round1(v: f64) -> f64 {
    (v * 10.0).round() / 10.0
}

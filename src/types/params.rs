// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Enumerated query parameters shared by the fees and volumes endpoints.

use std::fmt;

/// Whether an overview reports per-day or cumulative figures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DataType {
    /// Figures for the last day
    #[default]
    Daily,
    /// Cumulative figures since tracking began
    Total,
}

impl DataType {
    /// Lowercase form used as the `dataType` prefix.
    pub fn as_str(self) -> &'static str {
        match self {
            DataType::Daily => "daily",
            DataType::Total => "total",
        }
    }
}

impl fmt::Display for DataType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Which options volume to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OptionsVolume {
    /// Premium paid
    #[default]
    Premium,
    /// Notional value of contracts
    Notional,
}

impl OptionsVolume {
    /// Capitalized form embedded in the `dataType` value.
    pub fn as_str(self) -> &'static str {
        match self {
            OptionsVolume::Premium => "Premium",
            OptionsVolume::Notional => "Notional",
        }
    }
}

/// Which fee series to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum FeeKind {
    /// Fees paid by users
    #[default]
    Fees,
    /// Revenue kept by the protocol
    Revenue,
}

impl FeeKind {
    /// Capitalized form embedded in the `dataType` value.
    pub fn as_str(self) -> &'static str {
        match self {
            FeeKind::Fees => "Fees",
            FeeKind::Revenue => "Revenue",
        }
    }
}

/// Common switches for the fees, dex and options overview endpoints.
///
/// ```
/// use defillama::{DataType, OverviewOptions};
///
/// let options = OverviewOptions::default()
///     .exclude_total_data_chart(true)
///     .data_type(DataType::Total);
/// assert!(options.excludes_total_data_chart());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct OverviewOptions {
    exclude_total_data_chart: bool,
    exclude_total_data_chart_breakdown: bool,
    data_type: DataType,
}

impl OverviewOptions {
    /// Drop the aggregated chart from the response.
    #[must_use]
    pub fn exclude_total_data_chart(mut self, exclude: bool) -> Self {
        self.exclude_total_data_chart = exclude;
        self
    }

    /// Drop the per-chain chart breakdown from the response.
    #[must_use]
    pub fn exclude_total_data_chart_breakdown(mut self, exclude: bool) -> Self {
        self.exclude_total_data_chart_breakdown = exclude;
        self
    }

    /// Request daily or total figures.
    #[must_use]
    pub fn data_type(mut self, data_type: DataType) -> Self {
        self.data_type = data_type;
        self
    }

    /// Whether the aggregated chart is excluded.
    pub fn excludes_total_data_chart(&self) -> bool {
        self.exclude_total_data_chart
    }

    /// Whether the per-chain breakdown is excluded.
    pub fn excludes_total_data_chart_breakdown(&self) -> bool {
        self.exclude_total_data_chart_breakdown
    }

    /// Selected data type.
    pub fn selected_data_type(&self) -> DataType {
        self.data_type
    }
}

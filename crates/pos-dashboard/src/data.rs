// File: crates/pos-dashboard/src/data.rs
// Summary: Seeded synthetic POS metrics: daily sales sample plus the fixed category,
// hourly, payment, product, monthly, weekly, and KPI tables.
// Notes:
// - Nothing here depends on the renderer; colors are kept as `#RRGGBB` literals.
// - ChaCha8 is used instead of `StdRng` because its output stream is stable
//   across rand releases and platforms.

use std::ops::RangeInclusive;

use chrono::{NaiveDate, TimeDelta};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rand_distr::{Distribution, Normal};
use tracing::debug;

use crate::error::DataError;

/// Number of days covered by the daily sales series.
pub const DAYS: usize = 30;
pub const SALES_MEAN: f64 = 12_000.0;
pub const SALES_STD_DEV: f64 = 2_500.0;
/// Lowest daily sales value kept after sampling.
pub const SALES_FLOOR: f64 = 5_000.0;

fn check_len(table: &'static str, column: &'static str, expected: usize, actual: usize) -> Result<(), DataError> {
    if expected == actual {
        Ok(())
    } else {
        Err(DataError::LengthMismatch { table, column, expected, actual })
    }
}

fn owned(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// `DAYS` values drawn from Normal(mean, sd), each raised to `SALES_FLOOR`.
/// Same seed, same bits.
pub fn daily_sales(seed: u64) -> Result<Vec<f64>, DataError> {
    let normal = Normal::new(SALES_MEAN, SALES_STD_DEV)?;
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    Ok((0..DAYS)
        .map(|_| normal.sample(&mut rng).max(SALES_FLOOR))
        .collect())
}

/// The `DAYS` calendar days before `today`, oldest first (last entry is yesterday).
pub fn date_series(today: NaiveDate) -> Vec<NaiveDate> {
    (1..=DAYS as i64).rev().map(|back| today - TimeDelta::days(back)).collect()
}

#[derive(Clone, Debug, PartialEq)]
pub struct CategoryTable {
    pub names: Vec<String>,
    pub sales: Vec<f64>,
    pub colors: Vec<String>,
}

impl CategoryTable {
    pub fn try_new(names: Vec<String>, sales: Vec<f64>, colors: Vec<String>) -> Result<Self, DataError> {
        check_len("categories", "sales", names.len(), sales.len())?;
        check_len("categories", "colors", names.len(), colors.len())?;
        Ok(Self { names, sales, colors })
    }

    pub fn builtin() -> Result<Self, DataError> {
        Self::try_new(
            owned(&["مشروبات", "وجبات سريعة", "حلويات", "مخبوزات", "منتجات ألبان", "خضروات وفواكه"]),
            vec![25_000.0, 35_000.0, 15_000.0, 20_000.0, 12_000.0, 18_000.0],
            owned(&["#4080FF", "#57A9FB", "#37D4CF", "#23C343", "#FBE842", "#FF9A2E"]),
        )
    }

    pub fn len(&self) -> usize { self.names.len() }

    pub fn is_empty(&self) -> bool { self.names.is_empty() }

    pub fn total(&self) -> f64 { self.sales.iter().sum() }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HourlyPattern {
    /// Average sales per hour of day, index = hour.
    pub values: [f64; 24],
    pub peak_hours: RangeInclusive<usize>,
}

impl HourlyPattern {
    pub fn builtin() -> Self {
        Self {
            values: [
                200.0, 150.0, 100.0, 80.0, 90.0, 150.0, 300.0, 500.0, 800.0, 1200.0, 1500.0, 1800.0,
                2000.0, 1800.0, 1600.0, 1400.0, 1200.0, 1000.0, 800.0, 600.0, 500.0, 400.0, 300.0, 250.0,
            ],
            peak_hours: 11..=14,
        }
    }

    pub fn is_peak(&self, hour: usize) -> bool { self.peak_hours.contains(&hour) }
}

#[derive(Clone, Debug, PartialEq)]
pub struct PaymentTable {
    pub methods: Vec<String>,
    pub amounts: Vec<u64>,
    pub colors: Vec<String>,
}

impl PaymentTable {
    pub fn try_new(methods: Vec<String>, amounts: Vec<u64>, colors: Vec<String>) -> Result<Self, DataError> {
        check_len("payments", "amounts", methods.len(), amounts.len())?;
        check_len("payments", "colors", methods.len(), colors.len())?;
        Ok(Self { methods, amounts, colors })
    }

    pub fn builtin() -> Result<Self, DataError> {
        Self::try_new(
            owned(&["نقدي", "بطاقة ائتمان", "محفظة إلكترونية", "تحويل بنكي"]),
            vec![45_000, 35_000, 15_000, 8_000],
            owned(&["#4080FF", "#57A9FB", "#FBE842", "#A9AEB8"]),
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ProductTable {
    pub names: Vec<String>,
    pub quantities: Vec<u32>,
}

impl ProductTable {
    pub fn try_new(names: Vec<String>, quantities: Vec<u32>) -> Result<Self, DataError> {
        check_len("products", "quantities", names.len(), quantities.len())?;
        Ok(Self { names, quantities })
    }

    pub fn builtin() -> Result<Self, DataError> {
        Self::try_new(
            owned(&[
                "برجر كلاسيك", "بيتزا مارجريتا", "عصير برتقال", "قهوة أمريكانو",
                "كيك شوكولاتة", "ساندويش تونة", "سلطة خضراء", "مياه معدنية",
            ]),
            vec![120, 95, 180, 150, 75, 85, 60, 200],
        )
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct MonthlyRevenue {
    pub months: Vec<String>,
    pub revenue: Vec<u64>,
    /// Index of the month in progress.
    pub current: usize,
}

impl MonthlyRevenue {
    pub fn try_new(months: Vec<String>, revenue: Vec<u64>, current: usize) -> Result<Self, DataError> {
        check_len("monthly revenue", "revenue", months.len(), revenue.len())?;
        if current >= months.len() {
            return Err(DataError::IndexOutOfRange { table: "monthly revenue", index: current, len: months.len() });
        }
        Ok(Self { months, revenue, current })
    }

    pub fn builtin() -> Result<Self, DataError> {
        let months = owned(&["يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو"]);
        let current = months.len() - 1;
        Self::try_new(months, vec![320_000, 285_000, 410_000, 375_000, 445_000, 390_000], current)
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct WeeklyComparison {
    pub weeks: Vec<String>,
    pub current: Vec<u64>,
    pub prior: Vec<u64>,
}

impl WeeklyComparison {
    pub fn try_new(weeks: Vec<String>, current: Vec<u64>, prior: Vec<u64>) -> Result<Self, DataError> {
        check_len("weekly comparison", "current", weeks.len(), current.len())?;
        check_len("weekly comparison", "prior", weeks.len(), prior.len())?;
        Ok(Self { weeks, current, prior })
    }

    pub fn builtin() -> Result<Self, DataError> {
        Self::try_new(
            owned(&["الأسبوع 1", "الأسبوع 2", "الأسبوع 3", "الأسبوع 4"]),
            vec![85_000, 92_000, 88_000, 95_000],
            vec![78_000, 85_000, 82_000, 88_000],
        )
    }
}

/// KPI label -> pre-formatted value, in display order.
#[derive(Clone, Debug, PartialEq)]
pub struct DashboardMetrics {
    pub entries: Vec<(String, String)>,
}

impl DashboardMetrics {
    pub fn builtin() -> Self {
        let entries = [
            ("إجمالي المبيعات اليوم", "12,450 ج.م"),
            ("عدد الفواتير", "48"),
            ("متوسط قيمة الفاتورة", "259 ج.م"),
            ("أعلى مبيعات في الساعة", "2,000 ج.م"),
            ("نمو المبيعات", "+12.5%"),
            ("عدد العملاء", "156"),
        ];
        Self { entries: entries.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect() }
    }
}

/// Everything the charts read, generated once per run.
#[derive(Clone, Debug, PartialEq)]
pub struct SalesData {
    pub dates: Vec<NaiveDate>,
    pub daily_sales: Vec<f64>,
    pub categories: CategoryTable,
    pub hourly: HourlyPattern,
    pub payments: PaymentTable,
    pub products: ProductTable,
    pub monthly: MonthlyRevenue,
    pub weekly: WeeklyComparison,
    pub metrics: DashboardMetrics,
}

impl SalesData {
    pub fn generate(seed: u64, today: NaiveDate) -> Result<Self, DataError> {
        let daily_sales = daily_sales(seed)?;
        let dates = date_series(today);
        debug!(
            seed,
            first = %dates[0],
            last = %dates[DAYS - 1],
            min = daily_sales.iter().cloned().fold(f64::INFINITY, f64::min),
            max = daily_sales.iter().cloned().fold(f64::NEG_INFINITY, f64::max),
            "generated daily sales"
        );
        Ok(Self {
            dates,
            daily_sales,
            categories: CategoryTable::builtin()?,
            hourly: HourlyPattern::builtin(),
            payments: PaymentTable::builtin()?,
            products: ProductTable::builtin()?,
            monthly: MonthlyRevenue::builtin()?,
            weekly: WeeklyComparison::builtin()?,
            metrics: DashboardMetrics::builtin(),
        })
    }
}

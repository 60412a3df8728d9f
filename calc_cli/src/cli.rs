use std::path::PathBuf;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};

use calc_core::units::Category;

#[derive(Debug, Parser)]
#[command(
    name = "calc",
    about = "Tally - unit, date, finance, number and geometry calculators",
    version,
    propagate_version = true
)]
pub struct Cli {
    /// Global: print the result as JSON
    #[arg(long, action = ArgAction::SetTrue, global = true)]
    pub json: bool,

    /// Global: path to settings (TOML); default: ~/.calc/settings.toml
    #[arg(long = "config", value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    /// Global: debug logging (overrides RUST_LOG)
    #[arg(short, long, action = ArgAction::SetTrue, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub cmd: Command,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum CategoryArg {
    Length,
    Weight,
    Area,
    Volume,
    Speed,
    Energy,
    #[value(alias = "temp")]
    Temperature,
}

impl From<CategoryArg> for Category {
    fn from(arg: CategoryArg) -> Self {
        match arg {
            CategoryArg::Length => Category::Length,
            CategoryArg::Weight => Category::Weight,
            CategoryArg::Area => Category::Area,
            CategoryArg::Volume => Category::Volume,
            CategoryArg::Speed => Category::Speed,
            CategoryArg::Energy => Category::Energy,
            CategoryArg::Temperature => Category::Temperature,
        }
    }
}

#[derive(Copy, Clone, Debug, ValueEnum)]
pub enum ShapeArg {
    Circle,
    Square,
    Rectangle,
    Triangle,
    Trapezoid,
    Ellipse,
    Parallelogram,
    Sphere,
    Cube,
    Cuboid,
    Cylinder,
    Cone,
    Pyramid,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Convert a value between units of one category
    ///
    /// Examples:
    ///   calc convert 5 ft m
    ///   calc convert 100 c f --category temperature
    Convert {
        /// Value to convert (an empty or non-numeric value is reported as pending)
        #[arg(allow_negative_numbers = true)]
        value: String,
        from: String,
        to: String,
        #[arg(short, long, value_enum, default_value = "length")]
        category: CategoryArg,
    },

    /// Age in years, months and days
    Age {
        /// Birth date (YYYY-MM-DD)
        birth: NaiveDate,
        /// Reference date; default today
        #[arg(long)]
        on: Option<NaiveDate>,
    },

    /// Count Monday-Friday days in an inclusive range
    BusinessDays { start: NaiveDate, end: NaiveDate },

    /// Split the time between two instants into days/hours/minutes/seconds
    Duration {
        /// YYYY-MM-DDTHH:MM:SS
        start: NaiveDateTime,
        end: NaiveDateTime,
    },

    /// Time remaining until a UTC instant
    Countdown {
        /// RFC 3339 instant, e.g. 2030-01-01T00:00:00Z
        target: DateTime<Utc>,
        /// Recompute once per second until the target is reached
        #[arg(long, action = ArgAction::SetTrue)]
        watch: bool,
        /// Stop watching after this many ticks
        #[arg(long, requires = "watch")]
        ticks: Option<u32>,
    },

    /// Show a wall-clock time in another UTC offset
    Timezone {
        local: NaiveDateTime,
        /// Source UTC offset in minutes (e.g. -300 for UTC-5)
        #[arg(long = "from", allow_negative_numbers = true)]
        from_offset: i32,
        /// Target UTC offset in minutes
        #[arg(long = "to", allow_negative_numbers = true)]
        to_offset: i32,
    },

    /// Add (or with negatives, subtract) years, months and days
    DateAdd {
        date: NaiveDate,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        years: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        months: i32,
        #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
        days: i64,
    },

    /// Loan payment and amortization schedule
    Amortize {
        principal: f64,
        /// Annual interest rate in percent
        rate: f64,
        /// Term in years
        years: f64,
        /// Print every row of the schedule
        #[arg(long, action = ArgAction::SetTrue)]
        schedule: bool,
    },

    /// Compound interest
    Compound {
        principal: f64,
        rate: f64,
        years: f64,
        #[arg(long = "per-year", default_value_t = 12)]
        per_year: u32,
    },

    /// Simple interest
    Simple { principal: f64, rate: f64, years: f64 },

    /// Progressive tax over brackets
    ///
    /// Examples:
    ///   calc tax 50000 -b 10000:0 -b 40000:20 -b top:40
    Tax {
        income: f64,
        /// UPPER:RATE, or top:RATE for the open-ended bracket; default from settings
        #[arg(short, long = "bracket", value_name = "UPPER:RATE")]
        brackets: Vec<String>,
    },

    /// Future value of a monthly investment plan
    Sip {
        monthly: f64,
        rate: f64,
        years: f64,
        /// Contribute at month end instead of month start
        #[arg(long, action = ArgAction::SetTrue)]
        end: bool,
    },

    /// Simulate a monthly withdrawal plan
    Swp {
        corpus: f64,
        withdrawal: f64,
        rate: f64,
        years: f64,
    },

    /// Greatest common divisor (with Euclid steps for two numbers)
    Gcd {
        #[arg(num_args = 1.., required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Least common multiple
    Lcm {
        #[arg(num_args = 1.., required = true, allow_negative_numbers = true)]
        numbers: Vec<i64>,
    },

    /// Prime factorization
    Factorize { n: i64 },

    /// Exact factorial
    Factorial {
        #[arg(allow_negative_numbers = true)]
        n: i64,
    },

    /// Divisors, primality and perfect/abundant/deficient
    Classify { n: i64 },

    /// Descriptive statistics; non-numeric entries are skipped
    Stats {
        #[arg(num_args = 1.., required = true, allow_negative_numbers = true)]
        values: Vec<String>,
    },

    /// Area/perimeter or volume/surface area
    ///
    /// Examples:
    ///   calc shape circle 2
    ///   calc shape triangle 3 4 5
    ///   calc shape cylinder 1 10
    Shape {
        #[arg(value_enum)]
        kind: ShapeArg,
        #[arg(num_args = 1..)]
        dims: Vec<f64>,
    },

    /// Roots of ax^2 + bx + c = 0
    Quadratic {
        #[arg(allow_negative_numbers = true)]
        a: f64,
        #[arg(allow_negative_numbers = true)]
        b: f64,
        #[arg(allow_negative_numbers = true)]
        c: f64,
    },

    /// Simplify a:b, optionally solving a:b = c:x
    Ratio {
        #[arg(allow_negative_numbers = true)]
        a: i64,
        #[arg(allow_negative_numbers = true)]
        b: i64,
        #[arg(long)]
        solve: Option<f64>,
    },

    /// Body mass index
    Bmi {
        /// kg (or lb with --imperial)
        weight: f64,
        /// cm (or in with --imperial)
        height: f64,
        #[arg(long, action = ArgAction::SetTrue)]
        imperial: bool,
    },

    /// Run a raw JSON request, e.g. '{"type":"Gcd","numbers":[12,18]}'
    Run {
        /// Request body; read from stdin when omitted
        json: Option<String>,
    },
}

//! # Tally CLI
//!
//! Terminal front end for `calc_core`. Each subcommand builds a
//! [`CalculationRequest`], runs it under the loaded settings and prints the
//! result as text or, with `--json`, as the serialized outcome.

mod cli;
mod config;
mod render;

use std::io::Read;
use std::time::Duration;

use anyhow::{anyhow, bail, Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use calc_core::algebra::{QuadraticInput, RatioInput};
use calc_core::dates::{
    countdown_from_now, AgeInput, BusinessDaysInput, DateOffsetInput, DurationInput, TimeZoneInput,
};
use calc_core::finance::{
    AmortizationInput, CompoundInterestInput, ContributionTiming, SimpleInterestInput, SipInput,
    SwpInput, TaxBracket, TaxInput,
};
use calc_core::geometry::{GeometryInput, Shape2D, Solid};
use calc_core::health::{BmiInput, MeasurementSystem};
use calc_core::input::{parse_list, parse_number};
use calc_core::number_theory::{FactorInput, FactorialInput, GcdInput};
use calc_core::statistics::StatisticsInput;
use calc_core::units::ConversionInput;
use calc_core::{CalcSettings, CalculationOutput, CalculationRequest, Outcome};

use cli::{Cli, Command, ShapeArg};

fn init_tracing(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Parse `UPPER:RATE` or `top:RATE`.
fn parse_bracket(raw: &str) -> Result<TaxBracket> {
    let (upper, rate) = raw
        .split_once(':')
        .ok_or_else(|| anyhow!("bracket '{}' must look like UPPER:RATE", raw))?;
    let rate: f64 = rate.trim().parse().with_context(|| format!("bracket rate in '{}'", raw))?;
    match upper.trim() {
        "top" | "" => Ok(TaxBracket::top(rate)),
        bound => {
            let bound: f64 = bound.parse().with_context(|| format!("bracket bound in '{}'", raw))?;
            Ok(TaxBracket::new(bound, rate))
        }
    }
}

fn shape_input(kind: ShapeArg, dims: &[f64]) -> Result<GeometryInput> {
    let expected = match kind {
        ShapeArg::Circle | ShapeArg::Square | ShapeArg::Sphere | ShapeArg::Cube => 1,
        ShapeArg::Rectangle | ShapeArg::Ellipse | ShapeArg::Cylinder | ShapeArg::Cone | ShapeArg::Pyramid => 2,
        ShapeArg::Triangle | ShapeArg::Parallelogram | ShapeArg::Cuboid => 3,
        ShapeArg::Trapezoid => 5,
    };
    if dims.len() != expected {
        bail!("{:?} takes {} dimension(s), got {}", kind, expected, dims.len());
    }
    let d = |i: usize| dims[i];
    Ok(match kind {
        ShapeArg::Circle => GeometryInput::Shape(Shape2D::Circle { radius: d(0) }),
        ShapeArg::Square => GeometryInput::Shape(Shape2D::Square { side: d(0) }),
        ShapeArg::Rectangle => GeometryInput::Shape(Shape2D::Rectangle { width: d(0), height: d(1) }),
        ShapeArg::Triangle => GeometryInput::Shape(Shape2D::Triangle { a: d(0), b: d(1), c: d(2) }),
        ShapeArg::Trapezoid => GeometryInput::Shape(Shape2D::Trapezoid {
            a: d(0),
            b: d(1),
            c: d(2),
            d: d(3),
            height: d(4),
        }),
        ShapeArg::Ellipse => GeometryInput::Shape(Shape2D::Ellipse { semi_major: d(0), semi_minor: d(1) }),
        ShapeArg::Parallelogram => {
            GeometryInput::Shape(Shape2D::Parallelogram { base: d(0), side: d(1), height: d(2) })
        }
        ShapeArg::Sphere => GeometryInput::Solid(Solid::Sphere { radius: d(0) }),
        ShapeArg::Cube => GeometryInput::Solid(Solid::Cube { side: d(0) }),
        ShapeArg::Cuboid => GeometryInput::Solid(Solid::Cuboid { length: d(0), width: d(1), height: d(2) }),
        ShapeArg::Cylinder => GeometryInput::Solid(Solid::Cylinder { radius: d(0), height: d(1) }),
        ShapeArg::Cone => GeometryInput::Solid(Solid::Cone { radius: d(0), height: d(1) }),
        ShapeArg::Pyramid => GeometryInput::Solid(Solid::SquarePyramid { base: d(0), height: d(1) }),
    })
}

/// Build the request for every subcommand except `convert`, `countdown`
/// and `run`, which have their own paths.
fn build_request(cmd: Command) -> Result<CalculationRequest> {
    Ok(match cmd {
        Command::Age { birth, on } => CalculationRequest::Age(AgeInput { birth_date: birth, reference_date: on }),
        Command::BusinessDays { start, end } => {
            CalculationRequest::BusinessDays(BusinessDaysInput { start_date: start, end_date: end })
        }
        Command::Duration { start, end } => CalculationRequest::Duration(DurationInput { start, end }),
        Command::Timezone { local, from_offset, to_offset } => CalculationRequest::TimeZone(TimeZoneInput {
            local,
            from_offset_minutes: from_offset,
            to_offset_minutes: to_offset,
        }),
        Command::DateAdd { date, years, months, days } => {
            CalculationRequest::DateOffset(DateOffsetInput { date, years, months, days })
        }
        Command::Amortize { principal, rate, years, .. } => CalculationRequest::Amortization(AmortizationInput {
            principal,
            annual_rate_pct: rate,
            term_years: years,
        }),
        Command::Compound { principal, rate, years, per_year } => {
            CalculationRequest::CompoundInterest(CompoundInterestInput {
                principal,
                rate_pct: rate,
                years,
                compounds_per_year: per_year,
            })
        }
        Command::Simple { principal, rate, years } => {
            CalculationRequest::SimpleInterest(SimpleInterestInput { principal, rate_pct: rate, years })
        }
        Command::Tax { income, brackets } => CalculationRequest::Tax(TaxInput {
            income,
            brackets: brackets.iter().map(|b| parse_bracket(b)).collect::<Result<_>>()?,
        }),
        Command::Sip { monthly, rate, years, end } => CalculationRequest::Sip(SipInput {
            monthly_investment: monthly,
            annual_return_pct: rate,
            years,
            timing: if end { ContributionTiming::End } else { ContributionTiming::Start },
        }),
        Command::Swp { corpus, withdrawal, rate, years } => CalculationRequest::Swp(SwpInput {
            corpus,
            monthly_withdrawal: withdrawal,
            annual_return_pct: rate,
            years,
        }),
        Command::Gcd { numbers } | Command::Lcm { numbers } => CalculationRequest::Gcd(GcdInput { numbers }),
        Command::Factorize { n } | Command::Classify { n } => CalculationRequest::Factorize(FactorInput { n }),
        Command::Factorial { n } => CalculationRequest::Factorial(FactorialInput { n }),
        Command::Stats { values } => CalculationRequest::Statistics(StatisticsInput { values: parse_list(values.as_slice()) }),
        Command::Shape { kind, dims } => CalculationRequest::Geometry(shape_input(kind, &dims)?),
        Command::Quadratic { a, b, c } => CalculationRequest::Quadratic(QuadraticInput { a, b, c }),
        Command::Ratio { a, b, solve } => CalculationRequest::Ratio(RatioInput { a, b, c: solve }),
        Command::Bmi { weight, height, imperial } => CalculationRequest::Bmi(BmiInput {
            weight,
            height,
            system: if imperial { MeasurementSystem::Imperial } else { MeasurementSystem::Metric },
        }),
        Command::Convert { .. } | Command::Countdown { .. } | Command::Run { .. } => {
            bail!("subcommand is handled directly")
        }
    })
}

fn emit(outcome: Outcome<CalculationOutput>, json: bool, settings: &CalcSettings, detail: bool) -> Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
    }
    match outcome {
        Outcome::Pending => {
            if !json {
                println!("Pending: enter a number to calculate");
            }
            Ok(())
        }
        Outcome::Ready(output) => {
            if !json {
                for line in render::render(&output, settings, detail) {
                    println!("{}", line);
                }
            }
            Ok(())
        }
        Outcome::Rejected(e) => bail!("{} [{}]", e, e.error_code()),
    }
}

fn watch_countdown(target: chrono::DateTime<chrono::Utc>, ticks: Option<u32>, json: bool) -> Result<()> {
    let mut tick = 0u32;
    loop {
        let remaining = countdown_from_now(target);
        if json {
            println!("{}", serde_json::to_string(&remaining)?);
        } else if remaining.finished {
            println!("Target reached");
        } else {
            println!("{} remaining", remaining.remaining);
        }
        tick += 1;
        if remaining.finished || ticks.is_some_and(|limit| tick >= limit) {
            return Ok(());
        }
        std::thread::sleep(Duration::from_secs(1));
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let settings = config::load_settings(&cli.config)?;
    let json = cli.json;

    match cli.cmd {
        Command::Convert { value, from, to, category } => {
            let outcome = Outcome::when_complete(parse_number(&value), |value| {
                CalculationRequest::Convert(ConversionInput {
                    category: category.into(),
                    value,
                    from_unit: from,
                    to_unit: to,
                })
                .run(&settings)
            });
            emit(outcome, json, &settings, false)
        }
        Command::Countdown { target, watch: true, ticks } => watch_countdown(target, ticks, json),
        Command::Countdown { target, .. } => {
            let request = CalculationRequest::Countdown(calc_core::dates::CountdownInput { target, now: None });
            emit(request.outcome(&settings), json, &settings, false)
        }
        Command::Run { json: body } => {
            let body = match body {
                Some(body) => body,
                None => {
                    let mut buf = String::new();
                    std::io::stdin().read_to_string(&mut buf).context("Read request from stdin")?;
                    buf
                }
            };
            emit(calc_core::calculations::run_json(&body, &settings), json, &settings, true)
        }
        cmd => {
            let detail = matches!(cmd, Command::Amortize { schedule: true, .. });
            let request = build_request(cmd)?;
            emit(request.outcome(&settings), json, &settings, detail)
        }
    }
}

//! Plain-text rendering of calculation results.

use calc_core::algebra::QuadraticRoots;
use calc_core::finance::SwpTermination;
use calc_core::geometry::GeometryResult;
use calc_core::number_theory::format_factorization;
use calc_core::{CalcSettings, CalculationOutput};

/// Render `output` as lines of text. `detail` adds full schedules and traces.
pub fn render(output: &CalculationOutput, settings: &CalcSettings, detail: bool) -> Vec<String> {
    let f = |v: f64| settings.format(v);
    let mut lines = Vec::new();

    match output {
        CalculationOutput::Convert(r) => {
            lines.push(format!("{} {} = {} {}", r.value, r.from_unit, f(r.converted), r.to_unit));
        }
        CalculationOutput::Age(a) => {
            lines.push(format!("{} years, {} months, {} days", a.years, a.months, a.days));
            lines.push(format!("{} days in total", a.total_days));
        }
        CalculationOutput::BusinessDays(b) => {
            lines.push(format!("Business days: {}", b.business_days));
            lines.push(format!("Weekend days:  {}", b.weekend_days));
            lines.push(format!("Total days:    {}", b.total_days));
        }
        CalculationOutput::Duration(d) => {
            lines.push(d.to_string());
            lines.push(format!("{} seconds", d.total_seconds));
        }
        CalculationOutput::Countdown(c) => {
            if c.finished {
                lines.push("Target reached".to_string());
            } else {
                lines.push(format!("{} remaining", c.remaining));
            }
        }
        CalculationOutput::TimeZone(z) => {
            let shift = match z.day_shift {
                0 => String::new(),
                d => format!(" ({:+} day)", d),
            };
            lines.push(format!("{} -> {}{}", z.source, z.projected, shift));
        }
        CalculationOutput::DateOffset(o) => {
            lines.push(format!("{} ({:?})", o.date, o.weekday));
            lines.push(format!("{:+} days", o.days_moved));
        }
        CalculationOutput::Amortization(a) => {
            lines.push(format!("Monthly payment: {}", f(a.monthly_payment)));
            lines.push(format!("Total paid:      {}", f(a.total_paid)));
            lines.push(format!("Total interest:  {}", f(a.total_interest)));
            if detail {
                lines.push(format!("{:>6} {:>14} {:>14} {:>14} {:>16}", "Month", "Payment", "Principal", "Interest", "Balance"));
                for row in &a.schedule {
                    lines.push(format!(
                        "{:>6} {:>14} {:>14} {:>14} {:>16}",
                        row.period,
                        f(row.payment),
                        f(row.principal),
                        f(row.interest),
                        f(row.balance)
                    ));
                }
            }
        }
        CalculationOutput::CompoundInterest(c) => {
            lines.push(format!("Amount:   {}", f(c.amount)));
            lines.push(format!("Interest: {}", f(c.interest)));
            for y in &c.yearly {
                lines.push(format!("  year {:>3}: {}", y.year, f(y.balance)));
            }
        }
        CalculationOutput::SimpleInterest(s) => {
            lines.push(format!("Interest: {}", f(s.interest)));
            lines.push(format!("Amount:   {}", f(s.amount)));
        }
        CalculationOutput::Tax(t) => {
            for slice in &t.slices {
                let upper = slice.upper_bound.map_or_else(|| "and up".to_string(), f);
                lines.push(format!(
                    "  {} - {} @ {}%: {}",
                    f(slice.lower_bound),
                    upper,
                    slice.rate_pct,
                    f(slice.tax)
                ));
            }
            lines.push(format!("Tax:            {}", f(t.tax)));
            lines.push(format!("Net income:     {}", f(t.net_income)));
            lines.push(format!("Effective rate: {}%", f(t.effective_rate_pct)));
            lines.push(format!("Marginal rate:  {}%", t.marginal_rate_pct));
        }
        CalculationOutput::Sip(s) => {
            lines.push(format!("Invested:     {} over {} months", f(s.total_invested), s.months));
            lines.push(format!("Future value: {}", f(s.future_value)));
            lines.push(format!("Gains:        {}", f(s.estimated_gains)));
        }
        CalculationOutput::Swp(s) => {
            match s.termination {
                SwpTermination::Completed => {
                    lines.push(format!("Completed all {} withdrawals", s.planned_months))
                }
                SwpTermination::Depleted { month } => {
                    lines.push(format!("Depleted in month {} of {}", month, s.planned_months))
                }
            }
            lines.push(format!("Total withdrawn: {}", f(s.total_withdrawn)));
            lines.push(format!("Final balance:   {}", f(s.final_balance)));
            if detail {
                for m in &s.months {
                    lines.push(format!("  {:>4}: {}", m.month, f(m.balance)));
                }
            }
        }
        CalculationOutput::Gcd(g) => {
            lines.push(format!("GCD: {}", g.gcd));
            lines.push(format!("LCM: {}", g.lcm));
            if let Some(pair) = &g.pair {
                for step in &pair.steps {
                    lines.push(format!(
                        "  {} = {} x {} + {}",
                        step.dividend, step.divisor, step.quotient, step.remainder
                    ));
                }
                let b = pair.bezout;
                lines.push(format!("  {} x ({}) + {} x ({}) = {}", pair.a, b.s, pair.b, b.t, b.gcd));
            }
        }
        CalculationOutput::Factorize(r) => {
            lines.push(format!("{} = {}", r.n, format_factorization(&r.prime_powers)));
            lines.push(format!("Divisors: {:?}", r.divisors));
            lines.push(format!(
                "{:?}, {} (proper divisors sum to {})",
                r.primality,
                r.abundance.label(),
                r.proper_divisor_sum
            ));
        }
        CalculationOutput::Factorial(r) => {
            lines.push(format!("{}! = {}", r.n, r.value));
            lines.push(format!("{} digits, {} trailing zeros", r.digits, r.trailing_zeros));
        }
        CalculationOutput::Statistics(s) => {
            lines.push(format!("Count:    {}", s.count));
            lines.push(format!("Sum:      {}", f(s.sum)));
            lines.push(format!("Mean:     {}", f(s.mean)));
            lines.push(format!("Median:   {}", f(s.median)));
            lines.push(format!("Mode:     {}", s.mode));
            lines.push(format!("Min/Max:  {} / {}", f(s.min), f(s.max)));
            lines.push(format!("Range:    {}", f(s.range)));
            lines.push(format!("Std dev:  {} (population)", f(s.population_std_dev)));
            if let Some(sd) = s.sample_std_dev {
                lines.push(format!("          {} (sample)", f(sd)));
            }
        }
        CalculationOutput::Geometry(g) => match g {
            GeometryResult::Plane { name, area, perimeter } => {
                lines.push(format!("{}: area {}, perimeter {}", name, f(*area), f(*perimeter)));
            }
            GeometryResult::Solid { name, volume, surface_area } => {
                lines.push(format!("{}: volume {}, surface area {}", name, f(*volume), f(*surface_area)));
            }
        },
        CalculationOutput::Quadratic(q) => {
            lines.push(format!("Discriminant: {}", f(q.discriminant)));
            match q.roots {
                QuadraticRoots::TwoReal { x1, x2 } => lines.push(format!("x = {}, x = {}", f(x1), f(x2))),
                QuadraticRoots::OneReal { x } => lines.push(format!("x = {} (double root)", f(x))),
                QuadraticRoots::Complex { real, imaginary } => {
                    lines.push(format!("x = {} +/- {}i", f(real), f(imaginary)))
                }
            }
        }
        CalculationOutput::Ratio(r) => {
            lines.push(format!("{} ({})", r.simplified, f(r.quotient)));
            if let Some(x) = r.proportion {
                lines.push(format!("x = {}", f(x)));
            }
        }
        CalculationOutput::Bmi(b) => {
            lines.push(format!("BMI {} ({})", f(b.bmi), b.category.label()));
        }
    }
    lines
}

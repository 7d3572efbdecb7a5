// Front-end for bsm-curve-lib: loads a quote scenario from a TOML file,
// prints the two formatted option prices and renders the call-price curve
// to an SVG chart.  Optionally dumps the sampled points to CSV.
//
// Usage:
//     cargo run --bin plot_curve -- <scenario.toml> [output.svg] [points.csv]
//
// Scenario file fields (display units, matching the input form):
//     stock_price      = 100.0     # currency
//     strike_price     = 100.0     # currency
//     time_to_maturity = 30.0      # days
//     risk_free_rate   = 5.0       # percent
//     dividend_yield   = 2.0       # percent
//     volatility       = 20.0      # percent
//     stock_price_from = 90.0      # curve range, currency
//     stock_price_to   = 110.0

use std::env;
use std::fs;

use anyhow::{bail, Context, Result};
use plotters::prelude::*;

use bsm_curve_lib::{evaluate_quote, report, sample_call_curve, RawQuote, SamplingRange};

#[derive(serde::Deserialize)]
struct Scenario {
    stock_price: f64,
    strike_price: f64,
    time_to_maturity: f64,
    risk_free_rate: f64,
    dividend_yield: f64,
    volatility: f64,
    stock_price_from: f64,
    stock_price_to: f64,
}

impl Scenario {
    fn quote(&self) -> RawQuote {
        RawQuote {
            stock_price: self.stock_price,
            strike_price: self.strike_price,
            days_to_maturity: self.time_to_maturity,
            risk_free_rate_pct: self.risk_free_rate,
            dividend_yield_pct: self.dividend_yield,
            volatility_pct: self.volatility,
        }
    }
}

fn write_csv(path: &str, curve: &[(f64, f64)]) -> Result<()> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("failed to create CSV file {path}"))?;
    wtr.write_record(["stock_price", "call_price"])?;
    for (spot, call) in curve {
        wtr.write_record([format!("{spot}"), format!("{call}")])?;
    }
    wtr.flush()?;
    Ok(())
}

fn render_chart(path: &str, curve: Vec<(f64, f64)>) -> Result<()> {
    let (x_min, x_max) = (curve[0].0, curve[curve.len() - 1].0);
    let y_max = curve.iter().map(|(_, y)| *y).fold(f64::NEG_INFINITY, f64::max);
    let y_min = curve.iter().map(|(_, y)| *y).fold(f64::INFINITY, f64::min);

    // Pad the value axis so the line does not hug the frame
    let padding = ((y_max - y_min) * 0.05).max(1e-6);
    let y_range = (y_min - padding).max(0.0)..(y_max + padding);

    let root = SVGBackend::new(path, (800, 400)).into_drawing_area();
    root.fill(&WHITE)?;

    let mut chart = ChartBuilder::on(&root)
        .margin(20)
        .caption("Call Option Price vs Stock Price", ("sans-serif", 24))
        .x_label_area_size(40)
        .y_label_area_size(60)
        .build_cartesian_2d(x_min..x_max, y_range)?;

    chart
        .configure_mesh()
        .x_desc("Stock Price ($)")
        .y_desc("Call Option Price ($)")
        .draw()?;

    chart.draw_series(vec![PathElement::new(curve, BLUE.stroke_width(2))])?;

    root.present()?;
    Ok(())
}

fn main() -> Result<()> {
    let args: Vec<String> = env::args().collect();
    if args.len() < 2 {
        eprintln!(
            "Usage: {} <scenario.toml> [output.svg] [points.csv]",
            args[0]
        );
        std::process::exit(1);
    }
    let scenario_path = &args[1];
    let svg_path = args.get(2).map(String::as_str).unwrap_or("option_curve.svg");
    let csv_path = args.get(3).map(String::as_str);

    let raw_toml = fs::read_to_string(scenario_path)
        .with_context(|| format!("failed to read scenario file {scenario_path}"))?;
    let scenario: Scenario =
        toml::from_str(&raw_toml).with_context(|| format!("invalid scenario in {scenario_path}"))?;

    let eval = evaluate_quote(&scenario.quote())
        .with_context(|| format!("scenario {scenario_path} is not priceable"))?;

    let (call_line, put_line) = report::price_lines(&eval.prices);
    println!("{call_line}");
    println!("{put_line}");

    let range = SamplingRange::new(scenario.stock_price_from, scenario.stock_price_to);
    let curve = sample_call_curve(&eval.input, &range);
    if curve.is_empty() {
        bail!(
            "empty curve: stock_price_from ({}) must not exceed stock_price_to ({})",
            scenario.stock_price_from,
            scenario.stock_price_to
        );
    }
    println!(
        "Sampled {} points over [{}, {}] at step {}",
        curve.len(),
        range.from,
        range.to,
        range.step
    );

    if let Some(path) = csv_path {
        write_csv(path, &curve)?;
        println!("Points written to {path}");
    }

    render_chart(svg_path, curve)?;
    println!("Chart saved to {svg_path}");
    Ok(())
}

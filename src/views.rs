//! Text renderings of the three playground pages.
//!
//! - [`View::Playground`]: summary table plus histogram of the means with
//!   the fitted normal curve marked on every bar.
//! - [`View::SourceCode`]: the engine's own source.
//! - [`View::Theory`]: a short statement of the theorem.

use std::fmt::{self, Write as _};
use std::str::FromStr;

use crate::distributions::Normal;
use crate::error::SimulationError;
use crate::histogram::Histogram;
use crate::simulation::SimulationResult;

/// Width, in characters, of the tallest histogram bar.
pub const BAR_WIDTH: usize = 50;

const BAR: char = '#';
const CURVE_MARK: char = '*';

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Playground,
    SourceCode,
    Theory,
}

impl View {
    pub const ALL: [View; 3] = [View::Playground, View::SourceCode, View::Theory];

    /// Page heading.
    pub fn label(&self) -> &'static str {
        match self {
            View::Playground => "Playground",
            View::SourceCode => "Rust code",
            View::Theory => "Central Limit Theorem",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown view {0:?}, expected one of: playground, code, theory")]
pub struct UnknownView(pub String);

/// Failure to render the playground page.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RenderError {
    #[error("cannot bin the sample means: {0}")]
    Histogram(#[from] SimulationError),

    #[error("failed to format the playground page")]
    Format(#[from] fmt::Error),
}

impl FromStr for View {
    type Err = UnknownView;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "playground" => Ok(View::Playground),
            "code" | "source" => Ok(View::SourceCode),
            "theory" | "clt" => Ok(View::Theory),
            _ => Err(UnknownView(s.to_string())),
        }
    }
}

/// Renders the playground page for `result` with `bins` histogram bins.
///
/// # Errors
/// [`RenderError::Histogram`] for `bins == 0`, [`RenderError::Format`] if a
/// row fails to format.
pub fn render_playground(result: &SimulationResult, bins: usize) -> Result<String, RenderError> {
    let histogram = result.histogram(bins)?;
    let mut out = String::new();
    write_playground(&mut out, result, &histogram)?;
    Ok(out)
}

fn write_playground(
    out: &mut String,
    result: &SimulationResult,
    histogram: &Histogram,
) -> fmt::Result {
    writeln!(out, "== {} ==", View::Playground.label())?;
    writeln!(
        out,
        "{} simulations, sample size {}",
        result.num_simulations(),
        result.sample_size()
    )?;
    writeln!(out)?;
    writeln!(out, "{:<18}{:>12}{:>12}", "", "empirical", "theoretical")?;
    writeln!(
        out,
        "{:<18}{:>12.5}{:>12.5}",
        "mean",
        result.empirical_mean(),
        result.theoretical_mean()
    )?;
    writeln!(
        out,
        "{:<18}{:>12.5}{:>12.5}",
        "std dev",
        result.empirical_std(),
        result.theoretical_std()
    )?;
    writeln!(
        out,
        "{:<18}{:>12}{:>12.5}",
        "skewness",
        format_optional(result.skewness()),
        0.0
    )?;
    writeln!(
        out,
        "{:<18}{:>12}{:>12.5}",
        "excess kurtosis",
        format_optional(result.excess_kurtosis()),
        -1.2 / result.sample_size() as f64
    )?;
    if let Some((empirical, predicted)) = result.coverage(1.0) {
        writeln!(out, "{:<18}{:>12.4}{:>12.4}", "within 1 sigma", empirical, predicted)?;
    }
    writeln!(out)?;

    let normal = Normal::new(result.empirical_mean(), result.empirical_std()).ok();
    let scale = histogram.max_count().max(1) as f64;
    let expected_per_density = histogram.total() as f64 * histogram.bin_width();

    writeln!(
        out,
        "sample means ({} bins, {CURVE_MARK} = fitted normal)",
        histogram.bins()
    )?;
    for (center, &count) in histogram.centers().into_iter().zip(histogram.counts()) {
        let bar_len = ((count as f64 / scale) * BAR_WIDTH as f64).round() as usize;
        let mut bar: Vec<char> = std::iter::repeat(BAR).take(bar_len).collect();
        bar.resize(BAR_WIDTH + 1, ' ');
        if let Some(normal) = &normal {
            let expected = normal.pdf(center) * expected_per_density;
            let pos = ((expected / scale) * BAR_WIDTH as f64).round() as usize;
            bar[pos.min(BAR_WIDTH)] = CURVE_MARK;
        }
        let bar: String = bar.into_iter().collect();
        writeln!(out, "{center:>8.4} | {} {count:>6}", bar.trim_end())?;
    }
    if normal.is_none() {
        writeln!(out, "(no spread in the means, comparison curve omitted)")?;
    }
    Ok(())
}

fn format_optional(value: Option<f64>) -> String {
    value.map_or_else(|| "n/a".to_string(), |v| format!("{v:.5}"))
}

const ENGINE_SOURCE: &str = concat!(
    "// src/sampler.rs\n",
    include_str!("sampler.rs"),
    "\n// src/simulation.rs\n",
    include_str!("simulation.rs"),
);

/// The sampling engine's source text, embedded at compile time.
pub fn source_code() -> &'static str {
    ENGINE_SOURCE
}

const THEORY: &str = "\
The Central Limit Theorem

Take a sample of n independent values from any distribution with mean mu
and finite standard deviation sigma, and compute the sample mean. Repeat
that many times. As n grows, the distribution of those sample means
approaches a normal distribution with mean mu and standard deviation
sigma / sqrt(n), whatever the shape of the original distribution.

The playground draws from uniform(0, 1), a flat distribution with
mu = 0.5 and sigma = sqrt(1/12). The means of samples of size n therefore
centre on 0.5 with spread sqrt(1/(12 n)): about 0.129 for n = 5 and about
0.029 for n = 100. Raising the sample size narrows the histogram and
brings it closer to the fitted bell curve; raising the number of
simulations only makes the histogram smoother.
";

/// Static explanation of the theorem.
pub fn theory() -> &'static str {
    THEORY
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::create_rng;
    use crate::simulation::run;

    #[test]
    fn test_parse_views() {
        assert_eq!("playground".parse::<View>(), Ok(View::Playground));
        assert_eq!("Code".parse::<View>(), Ok(View::SourceCode));
        assert_eq!(" theory ".parse::<View>(), Ok(View::Theory));
        assert!("image".parse::<View>().is_err());
    }

    #[test]
    fn test_labels() {
        let labels: Vec<&str> = View::ALL.iter().map(View::label).collect();
        assert_eq!(labels, vec!["Playground", "Rust code", "Central Limit Theorem"]);
    }

    #[test]
    fn test_render_playground() {
        let result = run(1000, 5, &mut create_rng(1)).unwrap();
        let page = render_playground(&result, 30).unwrap();
        assert!(page.starts_with("== Playground =="));
        assert!(page.contains("1000 simulations, sample size 5"));
        assert!(page.contains("within 1 sigma"));
        let rows = page.lines().filter(|l| l.contains(" | ")).count();
        assert_eq!(rows, 30);
        let marked = page
            .lines()
            .filter(|l| l.contains(" | ") && l.contains(CURVE_MARK))
            .count();
        assert!(marked > 0);
    }

    #[test]
    fn test_render_degenerate() {
        let result = run(1, 5, &mut create_rng(1)).unwrap();
        let page = render_playground(&result, 10).unwrap();
        assert!(page.contains("comparison curve omitted"));
        assert!(!page.contains("within 1 sigma"));
    }

    #[test]
    fn test_render_zero_bins() {
        let result = run(10, 5, &mut create_rng(1)).unwrap();
        assert_eq!(
            render_playground(&result, 0),
            Err(RenderError::Histogram(SimulationError::InvalidArgument {
                name: "bins",
                value: 0
            }))
        );
    }

    #[test]
    fn test_render_error_messages() {
        let err = RenderError::from(fmt::Error);
        assert_eq!(err.to_string(), "failed to format the playground page");
        let err = RenderError::from(SimulationError::InvalidArgument {
            name: "bins",
            value: 0,
        });
        assert!(err.to_string().starts_with("cannot bin the sample means"));
    }

    #[test]
    fn test_source_code_embeds_engine() {
        let src = source_code();
        assert!(src.contains("pub fn draw_sample_mean"));
        assert!(src.contains("pub fn run"));
    }

    #[test]
    fn test_theory_mentions_spread() {
        assert!(theory().contains("sqrt(1/(12 n))"));
    }
}

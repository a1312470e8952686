//! Chart command - render spend by category as SVG or raw draw primitives

use crate::core::{CanvasSize, ChartType};
use crate::paint::to_svg;
use crate::state::Session;
use crate::storage::Storage;
use anyhow::Context;
use clap::{Args, ValueEnum};
use std::path::PathBuf;

#[derive(Args, Debug)]
pub struct ChartCommand {
    /// Switch to and remember this chart type
    #[arg(short = 't', long = "type", value_enum)]
    chart_type: Option<ChartTypeArg>,

    /// Flip between bar and pie and remember the choice
    #[arg(long, conflicts_with = "chart_type")]
    toggle: bool,

    /// Canvas width in logical units
    #[arg(long, default_value_t = 600.0)]
    width: f64,

    /// Canvas height in logical units
    #[arg(long, default_value_t = 320.0)]
    height: f64,

    /// Device pixel ratio used to size the SVG
    #[arg(long, default_value_t = 1.0)]
    dpr: f64,

    /// Write the SVG here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Open the written SVG with the system viewer
    #[arg(long, requires = "output")]
    open: bool,

    /// Print draw primitives as JSON instead of SVG
    #[arg(long, conflicts_with_all = ["output", "open"])]
    json: bool,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ChartTypeArg {
    Bar,
    Pie,
}

impl From<ChartTypeArg> for ChartType {
    fn from(arg: ChartTypeArg) -> Self {
        match arg {
            ChartTypeArg::Bar => ChartType::Bar,
            ChartTypeArg::Pie => ChartType::Pie,
        }
    }
}

impl ChartCommand {
    pub fn exec<S: Storage>(&self, session: &mut Session<S>) -> anyhow::Result<()> {
        if let Some(chart_type) = self.chart_type {
            session.set_chart_type(chart_type.into())?;
        } else if self.toggle {
            let next = session.state().chart_type.toggle();
            session.set_chart_type(next)?;
        }

        let canvas = self.canvas()?;
        let primitives = session.chart(canvas);

        if self.json {
            println!("{}", serde_json::to_string_pretty(&primitives)?);
            return Ok(());
        }

        let document = to_svg(&primitives, canvas, &session.theme().tokens());
        match &self.output {
            Some(path) => {
                svg::save(path, &document)
                    .with_context(|| format!("failed to write chart to {}", path.display()))?;
                log::info!("Wrote {:?} chart to {}", session.state().chart_type, path.display());
                println!("Chart written to {}", path.display());
                if self.open {
                    opener::open(path)
                        .with_context(|| format!("failed to open {}", path.display()))?;
                }
            }
            None => println!("{}", document),
        }
        Ok(())
    }

    fn canvas(&self) -> anyhow::Result<CanvasSize> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(self.width) || !valid(self.height) || !valid(self.dpr) {
            anyhow::bail!(
                "canvas size and pixel ratio must be positive (got {}x{} @ {})",
                self.width,
                self.height,
                self.dpr
            );
        }
        Ok(CanvasSize {
            device_pixel_ratio: self.dpr,
            ..CanvasSize::new(self.width, self.height)
        })
    }
}

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::io::Write;
use std::path::PathBuf;
use target_engine::constants::CONTENT_TYPE;
use target_engine::{
    BiathlonOptions, BiathlonType, ChasPreset, DotOptions, Family, Orientation, TargetRequest,
    Units,
};

#[derive(Parser)]
#[command(name = "tgt", about = "Print-accurate shooting target PDFs", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate one target PDF
    Generate {
        #[command(flatten)]
        request: RequestArgs,

        /// Read the request from a JSON file instead of flags
        #[arg(long)]
        config: Option<PathBuf>,

        /// Output PDF file
        #[arg(short, long, required_unless_present = "cgi", conflicts_with = "cgi")]
        output: Option<PathBuf>,

        /// Write a Content-Type header and the PDF to stdout
        #[arg(long)]
        cgi: bool,
    },

    /// Generate every request in a JSON file into a directory
    Batch {
        /// JSON file holding one request or an array of requests
        requests: PathBuf,

        /// Directory for the generated PDFs
        out_dir: PathBuf,
    },

    /// Show scale, offsets and annotation text without writing a PDF
    Info {
        #[command(flatten)]
        request: RequestArgs,

        /// Read the request from a JSON file instead of flags
        #[arg(long)]
        config: Option<PathBuf>,
    },
}

#[derive(Args)]
struct RequestArgs {
    /// Target family
    #[arg(long, default_value = "1862", value_enum)]
    year: YearArg,

    /// Size class (defaults to 3, or 1 for families with a single class)
    #[arg(long)]
    class: Option<u8>,

    /// Paper size (A0-A5, letter, legal, tabloid, 18x24, 24x36, 36x48)
    #[arg(long, default_value = "letter")]
    paper: String,

    #[arg(long, default_value = "portrait", value_enum)]
    orientation: OrientationArg,

    /// Trim margin in inches
    #[arg(long, default_value = "0")]
    trim: f64,

    /// Fit only the inner scoring rings
    #[arg(long)]
    centre: bool,

    /// Upper ground colour for figure and service targets
    #[arg(long, default_value = "sky")]
    top: String,

    /// Lower ground colour for figure and service targets
    #[arg(long, default_value = "green")]
    bottom: String,

    /// Centre figures vertically instead of standing them on the bottom edge
    #[arg(long)]
    figure_centred: bool,

    /// Calibration dot diameter
    #[arg(long, default_value = "25")]
    diameter: f64,

    #[arg(long, default_value = "mm", value_enum)]
    units: UnitsArg,

    /// Calibration dot colour
    #[arg(long, default_value = "black")]
    colour: String,

    /// Calibration dot background
    #[arg(long, default_value = "white")]
    background: String,

    /// Biathlon: range the printed plate is shot at
    #[arg(long, default_value = "10")]
    metres: f64,

    /// Biathlon: range the full-size plate is shot at
    #[arg(long, default_value = "50")]
    equiv: f64,

    /// Biathlon plate type
    #[arg(long = "type", default_value = "prone", value_enum)]
    kind: TypeArg,

    /// Biathlon preset overriding metres, equiv and paper
    #[arg(long, value_enum)]
    chas: Option<ChasArg>,
}

#[derive(Clone, Copy, ValueEnum)]
enum YearArg {
    #[value(name = "1862")]
    Y1862,
    #[value(name = "1883")]
    Y1883,
    #[value(name = "1908")]
    Y1908,
    Figure,
    Service,
    Dot,
    Biathlon,
}

#[derive(Clone, Copy, ValueEnum)]
enum OrientationArg {
    Portrait,
    Landscape,
}

#[derive(Clone, Copy, ValueEnum)]
enum UnitsArg {
    Mm,
    In,
    Pt,
}

#[derive(Clone, Copy, ValueEnum)]
enum TypeArg {
    Prone,
    Standing,
}

#[derive(Clone, Copy, ValueEnum)]
enum ChasArg {
    Air10,
    Smallbore20,
    Smallbore25,
}

impl From<YearArg> for Family {
    fn from(arg: YearArg) -> Self {
        match arg {
            YearArg::Y1862 => Self::Ring1862,
            YearArg::Y1883 => Self::Ring1883,
            YearArg::Y1908 => Self::Ring1908,
            YearArg::Figure => Self::Figure,
            YearArg::Service => Self::Service,
            YearArg::Dot => Self::Dot,
            YearArg::Biathlon => Self::Biathlon,
        }
    }
}

impl From<OrientationArg> for Orientation {
    fn from(arg: OrientationArg) -> Self {
        match arg {
            OrientationArg::Portrait => Self::Portrait,
            OrientationArg::Landscape => Self::Landscape,
        }
    }
}

impl From<UnitsArg> for Units {
    fn from(arg: UnitsArg) -> Self {
        match arg {
            UnitsArg::Mm => Self::Millimetres,
            UnitsArg::In => Self::Inches,
            UnitsArg::Pt => Self::Points,
        }
    }
}

impl From<TypeArg> for BiathlonType {
    fn from(arg: TypeArg) -> Self {
        match arg {
            TypeArg::Prone => Self::Prone,
            TypeArg::Standing => Self::Standing,
        }
    }
}

impl From<ChasArg> for ChasPreset {
    fn from(arg: ChasArg) -> Self {
        match arg {
            ChasArg::Air10 => Self::Air10,
            ChasArg::Smallbore20 => Self::Smallbore20,
            ChasArg::Smallbore25 => Self::Smallbore25,
        }
    }
}

impl RequestArgs {
    /// Named values are parsed here so bad names fail before any drawing
    fn into_request(self) -> Result<TargetRequest> {
        let family = Family::from(self.year);
        let class = self.class.unwrap_or(match family {
            Family::Dot | Family::Biathlon => 1,
            _ => 3,
        });

        Ok(TargetRequest {
            family,
            class,
            paper: self.paper.parse()?,
            orientation: self.orientation.into(),
            trim: self.trim,
            centre: self.centre,
            top: self.top.parse()?,
            bottom: self.bottom.parse()?,
            figure_centred: self.figure_centred,
            dot: DotOptions {
                diameter: self.diameter,
                units: self.units.into(),
                colour: self.colour.parse()?,
                background: self.background.parse()?,
            },
            biathlon: BiathlonOptions {
                metres: self.metres,
                equiv: self.equiv,
                kind: self.kind.into(),
                chas: self.chas.map(Into::into),
            },
        })
    }
}

async fn resolve_request(args: RequestArgs, config: Option<PathBuf>) -> Result<TargetRequest> {
    match config {
        Some(path) => TargetRequest::load(&path)
            .await
            .with_context(|| format!("loading {}", path.display())),
        None => args.into_request(),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            request,
            config,
            output,
            cgi,
        } => {
            let request = resolve_request(request, config).await?;
            let bytes = target_engine::generate(&request).await?;

            if cgi {
                let mut stdout = std::io::stdout().lock();
                write!(stdout, "Content-Type: {}\r\n\r\n", CONTENT_TYPE)?;
                stdout.write_all(&bytes)?;
                stdout.flush()?;
            } else if let Some(output) = output {
                target_engine::save_pdf(&bytes, &output).await?;
                println!("Generated {} bytes → {}", bytes.len(), output.display());
            }
        }

        Commands::Batch { requests, out_dir } => {
            let requests = TargetRequest::load_all(&requests)
                .await
                .with_context(|| format!("loading {}", requests.display()))?;
            tokio::fs::create_dir_all(&out_dir).await?;

            let results = target_engine::generate_many(&requests).await;
            let mut failed = 0;
            for (i, (request, result)) in requests.iter().zip(results).enumerate() {
                match result {
                    Ok(bytes) => {
                        let path = out_dir.join(format!(
                            "{:03}-{}-class{}.pdf",
                            i + 1,
                            request.family.name().to_lowercase(),
                            request.class
                        ));
                        target_engine::save_pdf(&bytes, &path).await?;
                        println!("Generated → {}", path.display());
                    }
                    Err(e) => {
                        log::error!("request {} failed: {}", i + 1, e);
                        failed += 1;
                    }
                }
            }

            if failed > 0 {
                bail!("{} of {} requests failed", failed, requests.len());
            }
        }

        Commands::Info { request, config } => {
            let request = resolve_request(request, config).await?;
            let page = target_engine::compose(&request)?;

            println!("Target: {}", page.target.name);
            println!(
                "  Paper: {} {:?} ({:.1} x {:.1} pt)",
                page.paper, page.orientation, page.media.width, page.media.height
            );
            println!(
                "  Drawable: {:.1} x {:.1} pt",
                page.drawable.width, page.drawable.height
            );
            println!("  Scale mode: {:?}", page.mode);
            if let Some(scale) = page.scale {
                println!("  Image scale: {:.6}", scale.image_scale);
                println!(
                    "  Offsets: {:.2} pt horizontal, {:.2} pt vertical",
                    scale.delta_w, scale.delta_h
                );
            }
            println!("  Draw items: {}", page.items.len());
            println!("  Boundary lines: {}", page.boundary_lines());
            for line in &page.annotations {
                println!("  {}", line);
            }
        }
    }

    Ok(())
}

use std::path::PathBuf;

use argh::FromArgs;

use edgemask::core::recording::RecordingEngine;
use edgemask::core::VideoFormat;
use edgemask::morpho::shape::footprint;
use edgemask::morpho::XxpandMode;
use edgemask::edge::{
    all_edge_operators, all_ridge_operators, Computation, EdgeMaskConfig, EdgeOperator,
};

#[derive(FromArgs)]
/// Inspect edge mask operators and plan their filter graphs
struct Args {
    #[argh(subcommand)]
    command: Command,
}

#[derive(FromArgs)]
#[argh(subcommand)]
enum Command {
    List(ListArgs),
    Describe(DescribeArgs),
    Plan(PlanArgs),
    Footprint(FootprintArgs),
}

#[derive(FromArgs)]
/// List every operator
#[argh(subcommand, name = "list")]
struct ListArgs {
    /// only list operators with ridge detection
    #[argh(switch)]
    ridge: bool,
}

#[derive(FromArgs)]
/// Print the definition of an operator as JSON
#[argh(subcommand, name = "describe")]
struct DescribeArgs {
    /// operator name or alias
    #[argh(positional)]
    name: String,
}

#[derive(FromArgs)]
/// Print the host calls a mask configuration builds
#[argh(subcommand, name = "plan")]
struct PlanArgs {
    /// path to a JSON mask configuration
    #[argh(positional)]
    config: PathBuf,

    /// clip width (default: 1920)
    #[argh(option, default = "1920")]
    width: usize,

    /// clip height (default: 1080)
    #[argh(option, default = "1080")]
    height: usize,

    /// bits per sample of the clip, 1 to 16 (default: 8)
    #[argh(option, default = "8")]
    bits: u8,

    /// use 32-bit float samples
    #[argh(switch)]
    float: bool,

    /// use a single plane clip instead of 4:2:0 YUV
    #[argh(switch)]
    gray: bool,
}

#[derive(FromArgs)]
/// Print the structuring element grown by expand and inpand
#[argh(subcommand, name = "footprint")]
struct FootprintArgs {
    /// rectangle, ellipse or losange (default: rectangle)
    #[argh(option, default = "XxpandMode::Rectangle")]
    mode: XxpandMode,

    /// horizontal radius
    #[argh(positional)]
    sw: usize,

    /// vertical radius (default: the horizontal radius)
    #[argh(positional)]
    sh: Option<usize>,
}

fn computation_kind(op: &EdgeOperator) -> String {
    match &op.computation {
        Computation::Matrix { kernel, merge } => format!("{} x {merge:?}", kernel.len()),
        Computation::Plugin(filter) => filter.host_name().to_string(),
        Computation::MinMax { .. } => "min/max".to_string(),
    }
}

fn list(args: ListArgs) {
    let operators = if args.ridge {
        all_ridge_operators()
    } else {
        all_edge_operators()
    };

    for op in operators {
        println!(
            "{:<28} {:<16} {:<24} {}",
            op.name,
            format!("{:?}", op.family),
            computation_kind(&op),
            if op.ridge { "ridge" } else { "" }
        );
    }
}

fn describe(args: DescribeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let op = EdgeOperator::from_name(&args.name)?;
    println!("{}", serde_json::to_string_pretty(&op)?);
    Ok(())
}

fn plan(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = EdgeMaskConfig::from_path(&args.config)?;
    let bits = if args.float { 32 } else { args.bits };
    let format = if args.gray {
        VideoFormat::gray(bits)
    } else {
        VideoFormat::yuv(bits, 1, 1)
    };
    format.validate()?;

    log::info!(
        "planning {} on {format} {}x{}",
        config.operator,
        args.width,
        args.height
    );

    let engine = RecordingEngine::default();
    let clip = engine.source(format, args.width, args.height, 1);
    let mask = config.apply(&engine, &clip)?;

    println!("#{} = source {format} {}x{}", clip.id, args.width, args.height);
    for call in engine.calls() {
        println!("{call}");
    }
    log::info!("mask is #{} after {} calls", mask.id, engine.calls().len());
    Ok(())
}

fn print_footprint(args: FootprintArgs) {
    let sh = args.sh.unwrap_or(args.sw);
    let cols = 2 * args.sw + 1;
    for row in footprint(args.mode, args.sw, sh).chunks(cols) {
        let line: Vec<&str> = row.iter().map(|&on| if on { "#" } else { "." }).collect();
        println!("{}", line.join(" "));
    }
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let args: Args = argh::from_env();

    match args.command {
        Command::List(args) => list(args),
        Command::Describe(args) => describe(args)?,
        Command::Plan(args) => plan(args)?,
        Command::Footprint(args) => print_footprint(args),
    }

    Ok(())
}

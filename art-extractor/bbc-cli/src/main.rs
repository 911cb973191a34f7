use anyhow::{anyhow, Context, Result};
use art_extractor_bbc::codec::decode_pixel;
use art_extractor_bbc::directory::parse_directory;
use art_extractor_bbc::export::write_outputs;
use art_extractor_bbc::render::resolve_object;
use art_extractor_bbc::{create_contact_sheet, DecodeContext, FormatDescription};
use clap::{Args, Parser, Subcommand};
use log::{info, LevelFilter};
use std::fs::File;
use std::path::PathBuf;

/// Tool for extracting the level graphics of the BBC Micro release of Bruce Lee.
#[derive(Parser, Debug)]
#[clap(version)]
struct BbcCli {
    /// Log what is decoded in detail.
    #[clap(short, long, global = true)]
    verbose: bool,
    #[clap(subcommand)]
    command: CliCommand,
}

#[derive(Subcommand, Debug)]
enum CliCommand {
    Sheet(SheetArgs),
    Objects(InputArgs),
    Tables(InputArgs),
    Object(ObjectArgs),
}

/// The game image and how to read it.
#[derive(Args, Debug)]
struct InputArgs {
    /// A JSON file describing the layout of the game image. Defaults to the built-in Bruce Lee layout.
    #[clap(long = "format")]
    format_path: Option<PathBuf>,
    /// The game image.
    #[clap(name = "INPUT", default_value = "org/BRUCE1")]
    in_path: PathBuf,
}

/// Renders all objects onto a contact sheet and writes a copy of the game image.
#[derive(Args, Debug)]
struct SheetArgs {
    #[clap(flatten)]
    input: InputArgs,
    /// The PNG file to write the contact sheet to.
    #[clap(short = 'o', long = "out", default_value = "image.png")]
    out_path: PathBuf,
    /// Where to write the copy of the game image.
    #[clap(long = "copy-out", default_value = "new/BRUCE1")]
    copy_path: PathBuf,
}

/// Prints how every byte of one object resolves to pixels.
#[derive(Args, Debug)]
struct ObjectArgs {
    /// The position of the object in the directory.
    #[clap(name = "N")]
    index: usize,
    #[clap(flatten)]
    input: InputArgs,
}

/// A loaded game image with its format description.
struct Input {
    data: Vec<u8>,
    format: FormatDescription,
}

impl Input {
    fn load(args: &InputArgs) -> Result<Self> {
        let format = match &args.format_path {
            Some(path) => {
                info!("Reading format description: {}", path.display());
                let file = File::open(path).with_context(|| format!("Could not open {}", path.display()))?;
                FormatDescription::from_json_reader(file)?
            }
            None => FormatDescription::bruce_lee(),
        };

        info!("Reading input file: {}", args.in_path.display());
        let data = std::fs::read(&args.in_path).with_context(|| format!("Could not read {}", args.in_path.display()))?;
        Ok(Self { data, format })
    }
}

fn sheet(args: &SheetArgs) -> Result<()> {
    let input = Input::load(&args.input)?;
    let sheet = create_contact_sheet(&input.data, &input.format)?;

    write_outputs(&sheet.surface, &args.out_path, &input.data, &args.copy_path)
}

fn objects(args: &InputArgs) -> Result<()> {
    let input = Input::load(args)?;
    let ctx = DecodeContext::new(&input.data, &input.format)?;
    let objects = parse_directory(ctx.raw(), &input.format)?;
    println!("{}", serde_json::to_string_pretty(&objects)?);
    Ok(())
}

fn tables(args: &InputArgs) -> Result<()> {
    let input = Input::load(args)?;
    let ctx = DecodeContext::new(&input.data, &input.format)?;
    for (index, table) in ctx.tables().iter().enumerate() {
        println!("Pixel table {}", index);
        for (nibble, &byte) in table.iter().enumerate() {
            let (left, right) = decode_pixel(byte);
            println!("{:2} -> {:2} / {:2}", nibble, left.value(), right.value());
        }
        println!();
    }
    Ok(())
}

fn object(args: &ObjectArgs) -> Result<()> {
    let input = Input::load(&args.input)?;
    let ctx = DecodeContext::new(&input.data, &input.format)?;
    let objects = parse_directory(ctx.raw(), &input.format)?;
    let object = objects
        .get(args.index)
        .ok_or_else(|| anyhow!("There is no object {} (the directory holds {})", args.index, objects.len()))?;

    println!("Object {}: {}", args.index, object);
    for resolved in resolve_object(&ctx, object)? {
        let (left, right) = decode_pixel(resolved.physical);
        println!("{:02x} -> {:02x} / {:02x}", resolved.nibble, left.value(), right.value());
    }
    Ok(())
}

fn init_logger(verbose: bool) -> Result<()> {
    let level = if verbose { LevelFilter::Debug } else { LevelFilter::Info };
    simple_logger::SimpleLogger::new()
        .with_level(LevelFilter::Warn)
        .with_module_level("art_extractor_bbc", level)
        .with_module_level(env!("CARGO_CRATE_NAME"), level)
        .init()?;
    Ok(())
}

fn main() -> Result<()> {
    let cli_args: BbcCli = BbcCli::parse();
    init_logger(cli_args.verbose)?;

    match &cli_args.command {
        CliCommand::Sheet(args) => sheet(args)?,
        CliCommand::Objects(args) => objects(args)?,
        CliCommand::Tables(args) => tables(args)?,
        CliCommand::Object(args) => object(args)?,
    }

    Ok(())
}

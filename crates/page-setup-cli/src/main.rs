mod logger;

use anyhow::{Context, Result, bail};
use clap::{Args, Parser, Subcommand, ValueEnum};
use page_setup::placement::{LabelContext, SlotLabels};
use page_setup::{
    BindingSide, GeometryEditor, HeaderFooterContent, HeaderFooterKind, Length, Margins,
    PageGeometry, PageInfo, PageSetup, PaperSize, PublicationPageSize, SheetLayout, TextScaling,
    TextScalingModel, content_area, match_paper_size_by_dimensions, resolve,
};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "psetup", about = "Publication page setup tools", version)]
struct Cli {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check that paper, page size, margins and gutter fit together
    Validate {
        #[command(flatten)]
        geometry: GeometryArgs,

        /// Also print the text block for this page number
        #[arg(long, default_value = "1")]
        page: u32,
    },

    /// Name the paper size matching free-form dimensions
    MatchPaper {
        /// Width in inches
        #[arg(long)]
        width: f64,

        /// Height in inches
        #[arg(long)]
        height: f64,

        /// Matching tolerance in points
        #[arg(long, default_value = "5")]
        tolerance: i64,
    },

    /// Recompute line spacing or font size under the leading rules
    Leading {
        /// Base font size in points
        #[arg(long)]
        font: f64,

        /// Base line spacing in points (edits line spacing instead of font size)
        #[arg(long)]
        line_spacing: Option<f64>,

        /// Allow non-standard leading (keeps the current font/spacing ratio)
        #[arg(long)]
        non_standard: bool,
    },

    /// Show which header/footer slot goes left and right on a page
    Place {
        /// Page number (1-based)
        #[arg(long, default_value = "1")]
        page: u32,

        /// Binding side
        #[arg(long, default_value = "left", value_enum)]
        binding: BindingArg,

        /// Sheet layout
        #[arg(long, default_value = "duplex", value_enum)]
        sheet: SheetArg,

        /// Inside-aligned text
        #[arg(long, default_value = "")]
        inside: String,

        /// Centered text
        #[arg(long, default_value = "")]
        center: String,

        /// Outside-aligned text
        #[arg(long, default_value = "")]
        outside: String,

        /// Always use three columns
        #[arg(long)]
        fixed_columns: bool,
    },

    /// Write or inspect page setup presets
    Preset {
        #[command(subcommand)]
        action: PresetAction,
    },
}

#[derive(Subcommand)]
enum PresetAction {
    /// Write a preset built from the geometry options
    Init {
        /// Output JSON file
        #[arg(short, long)]
        output: PathBuf,

        #[command(flatten)]
        geometry: GeometryArgs,
    },

    /// Print a summary of a preset and validate it
    Show {
        /// Preset JSON file
        path: PathBuf,
    },
}

#[derive(Args)]
struct GeometryArgs {
    /// Paper size
    #[arg(long, default_value = "letter", value_enum)]
    paper: PaperArg,

    /// Custom paper width in inches (needs --paper-height)
    #[arg(long, requires = "paper_height")]
    paper_width: Option<f64>,

    /// Custom paper height in inches (needs --paper-width)
    #[arg(long, requires = "paper_width")]
    paper_height: Option<f64>,

    /// Turn the paper to landscape
    #[arg(long)]
    landscape: bool,

    /// Publication page size
    #[arg(long, default_value = "full-page", value_enum)]
    page_size: PageSizeArg,

    /// Uniform margin in inches
    #[arg(long, default_value = "1.0")]
    margin: f64,

    /// Top margin in inches (overrides --margin)
    #[arg(long)]
    top: Option<f64>,

    /// Bottom margin in inches (overrides --margin)
    #[arg(long)]
    bottom: Option<f64>,

    /// Inside margin in inches (overrides --margin)
    #[arg(long)]
    inside: Option<f64>,

    /// Outside margin in inches (overrides --margin)
    #[arg(long)]
    outside: Option<f64>,

    /// Gutter in inches
    #[arg(long, default_value = "0.0")]
    gutter: f64,

    /// Binding side
    #[arg(long, default_value = "left", value_enum)]
    binding: BindingArg,

    /// Sheet layout
    #[arg(long, default_value = "duplex", value_enum)]
    sheet: SheetArg,
}

#[derive(Clone, Copy, ValueEnum)]
enum PaperArg {
    Letter,
    Legal,
    Tabloid,
    Executive,
    A3,
    A4,
    A5,
    B5,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageSizeArg {
    FullPage,
    HalfLetter,
    Trade,
    Pocket,
    A5,
    A6,
}

#[derive(Clone, Copy, ValueEnum)]
enum BindingArg {
    Left,
    Right,
    Top,
}

#[derive(Clone, Copy, ValueEnum)]
enum SheetArg {
    Simplex,
    Duplex,
}

impl PaperArg {
    fn name(self) -> &'static str {
        match self {
            PaperArg::Letter => "Letter",
            PaperArg::Legal => "Legal",
            PaperArg::Tabloid => "Tabloid",
            PaperArg::Executive => "Executive",
            PaperArg::A3 => "A3",
            PaperArg::A4 => "A4",
            PaperArg::A5 => "A5",
            PaperArg::B5 => "B5",
        }
    }
}

impl PageSizeArg {
    fn name(self) -> &'static str {
        match self {
            PageSizeArg::FullPage => PublicationPageSize::FULL_PAGE_NAME,
            PageSizeArg::HalfLetter => "Half Letter",
            PageSizeArg::Trade => "Trade",
            PageSizeArg::Pocket => "Pocket",
            PageSizeArg::A5 => "A5",
            PageSizeArg::A6 => "A6",
        }
    }
}

impl From<BindingArg> for BindingSide {
    fn from(arg: BindingArg) -> Self {
        match arg {
            BindingArg::Left => Self::Left,
            BindingArg::Right => Self::Right,
            BindingArg::Top => Self::Top,
        }
    }
}

impl From<SheetArg> for SheetLayout {
    fn from(arg: SheetArg) -> Self {
        match arg {
            SheetArg::Simplex => Self::Simplex,
            SheetArg::Duplex => Self::Duplex,
        }
    }
}

fn inches(value: f64, what: &str) -> Result<Length> {
    if value.is_nan() || value < 0.0 {
        bail!("{what} must be a non-negative number of inches, got {value}");
    }
    Ok(Length::from_inches(value))
}

fn points(value: f64, what: &str) -> Result<Length> {
    if value.is_nan() || value <= 0.0 {
        bail!("{what} must be a positive number of points, got {value}");
    }
    Ok(Length::from_inches(value / 72.0))
}

impl GeometryArgs {
    fn build(&self) -> Result<PageGeometry> {
        let mut editor = GeometryEditor::new(PageGeometry::default());

        match (self.paper_width, self.paper_height) {
            (Some(width), Some(height)) => {
                editor.set_paper_dimensions(
                    inches(width, "paper width")?,
                    inches(height, "paper height")?,
                );
            }
            _ => {
                let paper = PaperSize::standard_sizes()
                    .into_iter()
                    .find(|p| p.name == self.paper.name())
                    .context("paper size missing from catalog")?;
                editor.set_paper(paper);
            }
        }
        if self.landscape {
            editor.rotate_paper();
        }

        let page_size = PublicationPageSize::standard_sizes()
            .into_iter()
            .find(|p| p.name == self.page_size.name())
            .context("page size missing from catalog")?;
        editor.set_page_size(page_size);

        let margin = self.margin;
        editor.set_margins(Margins {
            top: inches(self.top.unwrap_or(margin), "top margin")?,
            bottom: inches(self.bottom.unwrap_or(margin), "bottom margin")?,
            inside: inches(self.inside.unwrap_or(margin), "inside margin")?,
            outside: inches(self.outside.unwrap_or(margin), "outside margin")?,
        });
        editor.set_gutter(inches(self.gutter, "gutter")?);
        editor.set_binding_side(self.binding.into());
        editor.set_sheet_layout(self.sheet.into());

        Ok(editor.into_geometry())
    }
}

fn print_geometry(geometry: &PageGeometry) {
    let paper = &geometry.paper;
    println!(
        "  Paper: {} ({:.3}in x {:.3}in)",
        paper.name,
        paper.width.to_inches(),
        paper.height.to_inches()
    );
    let page = &geometry.page_size;
    if page.is_full_page() {
        println!("  Page size: {}", page.name);
    } else {
        println!(
            "  Page size: {} ({:.3}in x {:.3}in)",
            page.name,
            page.width.to_inches(),
            page.height.to_inches()
        );
    }
    let m = &geometry.margins;
    println!(
        "  Margins: top {:.3}in, bottom {:.3}in, inside {:.3}in, outside {:.3}in",
        m.top.to_inches(),
        m.bottom.to_inches(),
        m.inside.to_inches(),
        m.outside.to_inches()
    );
    println!("  Gutter: {:.3}in", geometry.gutter.to_inches());
    println!("  Binding: {:?}, {:?}", geometry.binding_side, geometry.sheet_layout);
}

fn print_text(text: &TextScaling) {
    println!(
        "  Font size: {}  Line spacing: {}  Leading: {:.3}{}",
        text.base_font_size,
        text.base_line_spacing,
        text.leading_factor,
        if text.allow_non_standard {
            " (non-standard allowed)"
        } else {
            ""
        }
    );
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    logger::StderrLogger::from_verbosity(cli.verbose).init()?;

    match cli.command {
        Commands::Validate { geometry, page } => {
            if page == 0 {
                bail!("page numbers start at 1");
            }
            let geometry = geometry.build()?;
            println!("Page Setup:");
            print_geometry(&geometry);

            geometry.validate().into_result()?;
            println!("Valid");

            let info = PageInfo::new(page, geometry.binding_side, geometry.sheet_layout);
            if let Some(area) = content_area(&geometry, &info) {
                println!(
                    "  Text block on page {}: x {:.3}in, y {:.3}in, {:.3}in x {:.3}in",
                    page,
                    area.x.to_inches(),
                    area.y.to_inches(),
                    area.width.to_inches(),
                    area.height.to_inches()
                );
            }
        }

        Commands::MatchPaper {
            width,
            height,
            tolerance,
        } => {
            if tolerance < 0 {
                bail!("tolerance cannot be negative");
            }
            let matched = match_paper_size_by_dimensions(
                inches(width, "width")?,
                inches(height, "height")?,
                &PaperSize::standard_sizes(),
                Length::from_points(tolerance),
            );
            println!("{}", matched.name);
        }

        Commands::Leading {
            font,
            line_spacing,
            non_standard,
        } => {
            let font = points(font, "font size")?;
            let standard = page_setup::scaling::standard_line_spacing(font);
            let spacing = match line_spacing {
                Some(value) => points(value, "line spacing")?,
                None => standard,
            };

            let mut model = TextScalingModel::new(TextScaling::default());
            if non_standard {
                model.set_defaults(font, spacing);
                model.set_allow_non_standard(true);
            } else {
                model.set_defaults(font, standard);
            }

            let scaling = match line_spacing {
                Some(_) => model.set_line_spacing(spacing),
                None => model.set_font_size(font),
            };

            println!("Text Scaling:");
            print_text(&scaling);
            println!(
                "  Follows standard leading: {}",
                if scaling.follows_standard() { "yes" } else { "no" }
            );
        }

        Commands::Place {
            page,
            binding,
            sheet,
            inside,
            center,
            outside,
            fixed_columns,
        } => {
            if page == 0 {
                bail!("page numbers start at 1");
            }
            let info = PageInfo::new(page, binding.into(), sheet.into());
            let content = HeaderFooterContent {
                inside_aligned: inside,
                centered_text: center,
                outside_aligned: outside,
            };
            let placement = resolve(&info, &content, !fixed_columns);
            let context = LabelContext::for_layout(info.binding_side, info.sheet_layout);
            let labels = SlotLabels::for_context(context, HeaderFooterKind::Header);

            println!("Page {} ({} columns):", page, placement.columns.get());
            for slot in placement.cells() {
                println!("  [{}] {:?}", labels.label(slot), content.text(slot));
            }
            println!("  Left cell: {}", labels.label(placement.left));
            println!("  Right cell: {}", labels.label(placement.right));
        }

        Commands::Preset { action } => match action {
            PresetAction::Init { output, geometry } => {
                let setup = PageSetup {
                    geometry: geometry.build()?,
                    ..Default::default()
                };
                setup.save(&output).await?;
                println!("Preset → {}", output.display());
            }
            PresetAction::Show { path } => {
                let setup = PageSetup::load(&path)
                    .await
                    .with_context(|| format!("loading {}", path.display()))?;
                println!("Page Setup ({}):", path.display());
                print_geometry(&setup.geometry);
                print_text(&setup.text);
                println!("  Validation: {}", setup.validate());
            }
        },
    }

    Ok(())
}

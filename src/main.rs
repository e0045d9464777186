use clap::{Parser, ValueEnum};
use folio::{
    load_overrides, load_resume, save_artifact, ExportError, ExportFormat, ExportOverrides,
    ExportPipeline, FontFamily, RenderStatus, TemplateId, UserType,
};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Pdf,
    Word,
    Both,
}

impl FormatArg {
    fn formats(self) -> &'static [ExportFormat] {
        match self {
            FormatArg::Pdf => &[ExportFormat::Pdf],
            FormatArg::Word => &[ExportFormat::Word],
            FormatArg::Both => &[ExportFormat::Pdf, ExportFormat::Word],
        }
    }
}

/// Render a resume JSON file to PDF and/or a Word document.
#[derive(Debug, Parser)]
#[command(name = "folio", version, about)]
struct Cli {
    /// Path to the resume JSON.
    resume: PathBuf,

    /// student, fresher or experienced.
    #[arg(long, default_value = "experienced")]
    user_type: UserType,

    #[arg(long, value_enum, default_value_t = FormatArg::Pdf)]
    format: FormatArg,

    /// JSON file with export options; the flags below override it.
    #[arg(long)]
    options: Option<PathBuf>,

    #[arg(long)]
    template: Option<TemplateId>,

    #[arg(long)]
    font_family: Option<FontFamily>,

    #[arg(long)]
    name_size: Option<f32>,

    #[arg(long)]
    section_header_size: Option<f32>,

    #[arg(long)]
    sub_header_size: Option<f32>,

    #[arg(long)]
    body_text_size: Option<f32>,

    #[arg(long)]
    section_spacing: Option<f32>,

    #[arg(long)]
    entry_spacing: Option<f32>,

    /// Replaces the resume's targetRole in the output file name.
    #[arg(long)]
    target_role: Option<String>,

    #[arg(long, default_value = ".")]
    out_dir: PathBuf,
}

impl Cli {
    fn flag_overrides(&self) -> ExportOverrides {
        ExportOverrides {
            template: self.template,
            font_family: self.font_family,
            name_size: self.name_size,
            section_header_size: self.section_header_size,
            sub_header_size: self.sub_header_size,
            body_text_size: self.body_text_size,
            section_spacing: self.section_spacing,
            entry_spacing: self.entry_spacing,
        }
    }
}

fn run(cli: Cli) -> Result<Vec<PathBuf>, ExportError> {
    let mut data = load_resume(&cli.resume)?;
    if let Some(role) = &cli.target_role {
        data.target_role = Some(role.clone());
    }

    let file_overrides = match &cli.options {
        Some(path) => load_overrides(path)?,
        None => ExportOverrides::default(),
    };
    let pipeline = ExportPipeline::builder()
        .with_user_type(cli.user_type)
        .with_overrides(file_overrides.merged_with(cli.flag_overrides()))
        .with_observer(|format: ExportFormat, status: RenderStatus| {
            log::debug!("{} export: {:?}", format, status)
        })
        .build();

    let mut written = Vec::new();
    for &format in cli.format.formats() {
        let artifact = pipeline.render(&data, format)?;
        let file_name = pipeline.suggested_filename(&data, format);
        written.push(save_artifact(&cli.out_dir, &file_name, &artifact)?);
    }
    Ok(written)
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info"))
        .init();

    match run(Cli::parse()) {
        Ok(paths) => {
            for path in paths {
                println!("Wrote {}", path.display());
            }
            ExitCode::SUCCESS
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::FAILURE
        }
    }
}

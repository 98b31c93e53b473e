use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use clap_complete::Shell;

use xbind_commons_lang::CommonsLangPlugin;
use xbind_core::config::{self, CONFIG_FILE_NAME, XbindConfig};
use xbind_core::model::CodeModel;
use xbind_core::{CodeGenerator, GeneratedFile, Options, Pipeline, parse, transform};
use xbind_java::emitters::expr::render_signature;
use xbind_java::{JavaConfig, JavaGenerator};

#[derive(Parser)]
#[command(name = "xbind", about = "Class model to Java code generator", version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate Java sources from a class model
    Generate {
        /// Path to the model file (YAML or JSON)
        #[arg(short, long)]
        input: Option<PathBuf>,

        /// Output directory
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Skip Javadoc generated from descriptions
        #[arg(long)]
        no_javadoc: bool,

        /// Plugin arguments, e.g. `-- -Xcommons-lang`
        #[arg(last = true)]
        plugin_args: Vec<String>,
    },

    /// Validate a model file
    Validate {
        /// Path to the model file
        #[arg(short, long)]
        input: PathBuf,
    },

    /// Inspect the class model after plugins have run
    Inspect {
        /// Path to the model file
        #[arg(short, long)]
        input: PathBuf,

        /// Output format
        #[arg(long, default_value = "yaml")]
        format: InspectFormat,

        /// Plugin arguments, e.g. `-- -Xcommons-lang`
        #[arg(last = true)]
        plugin_args: Vec<String>,
    },

    /// Print the usage of every available plugin
    Usage,

    /// Initialize a new xbind configuration
    Init {
        /// Overwrite existing files
        #[arg(long)]
        force: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        shell: Shell,
    },
}

#[derive(Clone, ValueEnum)]
enum InspectFormat {
    Yaml,
    Json,
}

fn main() -> Result<()> {
    env_logger::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Generate {
            input,
            output,
            no_javadoc,
            plugin_args,
        } => cmd_generate(input, output, no_javadoc, plugin_args),

        Commands::Validate { input } => cmd_validate(input),

        Commands::Inspect {
            input,
            format,
            plugin_args,
        } => cmd_inspect(input, format, plugin_args),

        Commands::Usage => {
            print!("{}", build_pipeline(&XbindConfig::default(), &[])?.usage());
            Ok(())
        }

        Commands::Init { force } => cmd_init(force),

        Commands::Completions { shell } => {
            let mut cmd = <Cli as clap::CommandFactory>::command();
            clap_complete::generate(shell, &mut cmd, "xbind", &mut std::io::stdout());
            Ok(())
        }
    }
}

/// Try to load the project config file from the current directory.
fn try_load_config() -> Result<Option<XbindConfig>> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);
    config::load_config(&config_path).map_err(|e| anyhow::anyhow!(e))
}

fn load_model(path: &Path) -> Result<CodeModel> {
    let content =
        fs::read_to_string(path).with_context(|| format!("failed to read {}", path.display()))?;

    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("yaml");

    let parsed = match ext {
        "json" => parse::from_json(&content)?,
        _ => parse::from_yaml(&content)?,
    };

    let model = transform::transform(&parsed)?;
    log::debug!(
        "loaded {} classes from {}",
        model.classes.len(),
        path.display()
    );
    Ok(model)
}

/// Register every plugin and apply config arguments followed by command-line ones.
fn build_pipeline(cfg: &XbindConfig, extra_args: &[String]) -> Result<Pipeline> {
    let mut pipeline = Pipeline::new(Options::new(cfg.build_classpath()));
    pipeline.register(Box::new(CommonsLangPlugin::new()));

    let args: Vec<String> = cfg
        .plugin_args
        .iter()
        .chain(extra_args)
        .cloned()
        .collect();
    pipeline
        .parse_arguments(&args)
        .context("invalid plugin arguments")?;
    Ok(pipeline)
}

/// Write generated files to disk under the given base directory.
fn write_files(base: &Path, files: &[GeneratedFile]) -> Result<()> {
    for file in files {
        let path = base.join(&file.path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create directory {}", parent.display()))?;
        }
        fs::write(&path, &file.content)
            .with_context(|| format!("failed to write {}", path.display()))?;
        eprintln!("  wrote {}", path.display());
    }
    Ok(())
}

fn cmd_generate(
    input: Option<PathBuf>,
    output: Option<PathBuf>,
    no_javadoc: bool,
    plugin_args: Vec<String>,
) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let input = input.unwrap_or_else(|| PathBuf::from(&cfg.input));
    let output_dir = output.unwrap_or_else(|| PathBuf::from(&cfg.output));

    let mut model = load_model(&input)?;
    let pipeline = build_pipeline(&cfg, &plugin_args)?;
    log::debug!(
        "{} types on the classpath",
        pipeline.options().classpath.len()
    );
    let active = pipeline.active_plugins().join(", ");
    if !active.is_empty() {
        eprintln!("Plugins: {active}");
    }
    pipeline.run(&mut model)?;

    let java_config = JavaConfig {
        javadoc: cfg.javadoc && !no_javadoc,
    };
    let files = JavaGenerator.generate(&model, &java_config)?;

    fs::create_dir_all(&output_dir).with_context(|| {
        format!("failed to create output directory {}", output_dir.display())
    })?;
    write_files(&output_dir, &files)?;

    eprintln!(
        "Generated {} files in {}",
        files.len(),
        output_dir.display()
    );
    Ok(())
}

fn cmd_validate(input: PathBuf) -> Result<()> {
    let model = load_model(&input)?;

    if model.package.is_empty() {
        eprintln!("Valid model (default package)");
    } else {
        eprintln!("Valid model: {}", model.package);
    }
    eprintln!("  Classes: {}", model.classes.len());
    let fields: usize = model.classes().map(|c| c.fields.len()).sum();
    eprintln!("  Fields: {}", fields);

    eprintln!("Validation successful.");
    Ok(())
}

fn cmd_inspect(input: PathBuf, format: InspectFormat, plugin_args: Vec<String>) -> Result<()> {
    let cfg = try_load_config()?.unwrap_or_default();
    let mut model = load_model(&input)?;
    let pipeline = build_pipeline(&cfg, &plugin_args)?;
    let classpath: Vec<String> = pipeline
        .options()
        .classpath
        .iter()
        .map(|decl| decl.name.clone())
        .collect();
    pipeline.run(&mut model)?;

    let summary = build_inspect_summary(&model, &classpath);

    match format {
        InspectFormat::Yaml => {
            let yaml = serde_yaml_ng::to_string(&summary)?;
            print!("{}", yaml);
        }
        InspectFormat::Json => {
            let json = serde_json::to_string_pretty(&summary)?;
            println!("{}", json);
        }
    }

    Ok(())
}

fn build_inspect_summary(model: &CodeModel, classpath: &[String]) -> serde_json::Value {
    let classes: Vec<serde_json::Value> = model
        .classes()
        .map(|class| {
            let fields: Vec<serde_json::Value> = class
                .fields
                .iter()
                .map(|f| {
                    serde_json::json!({
                        "name": f.name,
                        "type": f.ty.to_string(),
                    })
                })
                .collect();
            let methods: Vec<String> = class.methods.iter().map(render_signature).collect();
            serde_json::json!({
                "name": class.name.fqcn(),
                "fields": fields,
                "methods": methods,
            })
        })
        .collect();

    serde_json::json!({
        "package": model.package,
        "classes": classes,
        "classpath": classpath,
    })
}

fn cmd_init(force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE_NAME);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{} already exists. Use --force to overwrite.",
            config_path.display()
        );
    }

    fs::write(&config_path, config::default_config_content())?;
    eprintln!("Created {}", config_path.display());
    Ok(())
}

use chrono::Utc;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

const EXIT_SUCCESS: i32 = 0;
const EXIT_IO: i32 = 1;
const EXIT_INPUT: i32 = 4;

#[derive(Subcommand, Debug)]
enum Commands {
    /// Score an assessment and print the results report
    Score {
        /// Path to the assessment YAML file
        input: PathBuf,
    },
    /// Score an assessment and write the results JSON document
    Export {
        /// Path to the assessment YAML file
        input: PathBuf,

        /// Directory to write the results file into
        #[arg(short, long, default_value = ".")]
        out_dir: PathBuf,
    },
    /// Write a commented starter assessment file
    Init {
        /// Where to write the file
        #[arg(default_value = "assessment.yaml")]
        path: PathBuf,
    },
}

#[derive(Parser, Debug)]
#[command(name = "fireclime-va")]
#[command(about = "Southwest FireCLIME vulnerability assessment scoring", long_about = None)]
#[command(version)]
struct Cli {
    /// Print stage-by-stage scoring detail
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

fn load_and_validate(path: &PathBuf, verbose: bool) -> fireclime_va::assessment::AssessmentInput {
    let input = match fireclime_va::assessment::load_assessment(path) {
        Ok(input) => input,
        Err(e) => {
            eprintln!("Input error: {:#}", e);
            std::process::exit(EXIT_INPUT);
        }
    };

    if let Err(errors) = fireclime_va::assessment::validate_input(&input) {
        eprintln!("Assessment errors:");
        for error in errors {
            eprintln!("  - {}", error);
        }
        std::process::exit(EXIT_INPUT);
    }

    if verbose {
        eprintln!("Loaded assessment from {}", path.display());
        eprintln!(
            "  {} treatment plan(s), site: {}",
            input.treatments.len(),
            if input.site.name.is_empty() {
                "(unnamed)"
            } else {
                input.site.name.as_str()
            }
        );
    }

    input
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Score { input } => {
            let input = load_and_validate(&input, cli.verbose);
            let result = fireclime_va::scoring::assess(&input);

            let use_colors = fireclime_va::output::should_use_colors();
            if cli.verbose {
                eprintln!("{}", fireclime_va::output::format_stage_detail(&result));
                eprintln!();
            }
            println!("{}", fireclime_va::output::format_report(&result, use_colors));
        }
        Commands::Export { input, out_dir } => {
            let input = load_and_validate(&input, cli.verbose);
            let result = fireclime_va::scoring::assess(&input);

            let document = fireclime_va::export::build_export(&input.site, result, Utc::now());

            if let Err(e) = std::fs::create_dir_all(&out_dir) {
                eprintln!("Export error: cannot create {}: {}", out_dir.display(), e);
                std::process::exit(EXIT_IO);
            }
            let path = fireclime_va::export::export_path(&out_dir, &document);

            if let Err(e) = fireclime_va::export::save_export(&path, &document) {
                eprintln!("Export error: {:#}", e);
                std::process::exit(EXIT_IO);
            }

            println!(
                "Wrote {} ({}: {})",
                path.display(),
                document.risk_level,
                fireclime_va::output::format_score(document.overall_vulnerability)
            );
        }
        Commands::Init { path } => {
            if let Err(e) = fireclime_va::assessment::write_template(&path) {
                eprintln!("Init error: {:#}", e);
                std::process::exit(EXIT_IO);
            }
            println!("Wrote starter assessment to {}", path.display());
        }
    }

    std::process::exit(EXIT_SUCCESS);
}
